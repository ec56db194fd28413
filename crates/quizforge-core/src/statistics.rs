//! Per-question and per-profile statistics views.

use crate::model::{ProfileStats, Question};

/// Practice statistics for a single question.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionStats {
    pub id: u32,
    pub text: String,
    pub active: bool,
    pub times_shown: u32,
    pub times_correct: u32,
}

impl QuestionStats {
    pub fn from_question(question: &Question) -> Self {
        Self {
            id: question.id,
            text: question.text.clone(),
            active: question.active,
            times_shown: question.times_shown,
            times_correct: question.times_correct,
        }
    }

    /// Correct rate in percent, `None` for a question never shown.
    pub fn percentage(&self) -> Option<f64> {
        if self.times_shown == 0 {
            None
        } else {
            Some(f64::from(self.times_correct) / f64::from(self.times_shown) * 100.0)
        }
    }

    /// `"60.00%"`, or the bare `"0%"` for a question never shown.
    pub fn percentage_label(&self) -> String {
        match self.percentage() {
            Some(p) => format!("{p:.2}%"),
            None => "0%".to_string(),
        }
    }

    /// Console lines for this question, followed by a blank separator.
    pub fn to_lines(&self) -> Vec<String> {
        vec![
            format!("Question ID: {}", self.id),
            format!("Question Text: {}", self.text),
            format!("Active: {}", self.active),
            format!("Times Shown (Practice): {}", self.times_shown),
            format!("Percentage Correct: {}", self.percentage_label()),
            String::new(),
        ]
    }
}

/// Statistics for every question, active or not, in store order.
pub fn question_statistics(questions: &[Question]) -> Vec<QuestionStats> {
    questions.iter().map(QuestionStats::from_question).collect()
}

/// The full question statistics report.
pub fn render_question_statistics(questions: &[Question]) -> Vec<String> {
    let mut lines = vec!["Question Statistics:".to_string()];
    for stats in question_statistics(questions) {
        lines.extend(stats.to_lines());
    }
    lines
}

/// The personal statistics block for one profile.
pub fn render_profile_statistics(name: &str, stats: &ProfileStats) -> Vec<String> {
    vec![
        String::new(),
        "Your Personal Profile Statistics:".to_string(),
        format!("Profile: {name}"),
        format!("Score: {}", stats.score()),
        format!("Total Questions: {}", stats.total_questions()),
        format!("Times Correct: {}", stats.times_correct()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionDraft;

    fn shown(times_shown: u32, times_correct: u32) -> Question {
        let mut q = QuestionDraft::quiz("Test question", vec!["Option 1".into()], "1")
            .into_question(7)
            .unwrap();
        q.times_shown = times_shown;
        q.times_correct = times_correct;
        q
    }

    #[test]
    fn percentage_uses_two_decimals() {
        let stats = QuestionStats::from_question(&shown(5, 3));
        assert_eq!(stats.percentage_label(), "60.00%");
        let stats = QuestionStats::from_question(&shown(3, 1));
        assert_eq!(stats.percentage_label(), "33.33%");
    }

    #[test]
    fn never_shown_reports_bare_zero() {
        let stats = QuestionStats::from_question(&shown(0, 0));
        assert_eq!(stats.percentage(), None);
        assert_eq!(stats.percentage_label(), "0%");
    }

    #[test]
    fn shown_but_never_correct_keeps_decimals() {
        let stats = QuestionStats::from_question(&shown(4, 0));
        assert_eq!(stats.percentage_label(), "0.00%");
    }

    #[test]
    fn report_lists_inactive_questions_too() {
        let mut inactive = shown(5, 3);
        inactive.active = false;
        let lines = render_question_statistics(&[inactive]);
        assert_eq!(lines[0], "Question Statistics:");
        assert!(lines.contains(&"Question ID: 7".to_string()));
        assert!(lines.contains(&"Question Text: Test question".to_string()));
        assert!(lines.contains(&"Active: false".to_string()));
        assert!(lines.contains(&"Times Shown (Practice): 5".to_string()));
        assert!(lines.contains(&"Percentage Correct: 60.00%".to_string()));
    }

    #[test]
    fn report_is_idempotent() {
        let questions = vec![shown(5, 3), shown(0, 0), shown(7, 2)];
        assert_eq!(
            render_question_statistics(&questions),
            render_question_statistics(&questions)
        );
    }

    #[test]
    fn profile_block_defaults_missing_fields() {
        let stats = ProfileStats {
            score: Some(5),
            total_questions: Some(10),
            times_correct: None,
        };
        let lines = render_profile_statistics("profile1", &stats);
        assert_eq!(lines[1], "Your Personal Profile Statistics:");
        assert_eq!(lines[2], "Profile: profile1");
        assert_eq!(lines[3], "Score: 5");
        assert_eq!(lines[4], "Total Questions: 10");
        assert_eq!(lines[5], "Times Correct: 0");
    }
}
