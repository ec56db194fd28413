//! Core data model types for quizforge.
//!
//! Field names on disk follow the established data-file layout, so the Rust
//! names are mapped through `serde(rename)` where they differ.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// The two kinds of question the tool understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionType {
    /// Multiple choice; the answer is a 1-based option number.
    #[serde(rename = "quiz")]
    Quiz,
    /// Free text; matched case-insensitively.
    #[serde(rename = "free-form")]
    FreeForm,
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionType::Quiz => write!(f, "quiz"),
            QuestionType::FreeForm => write!(f, "free-form"),
        }
    }
}

impl FromStr for QuestionType {
    type Err = QuizError;

    /// Parses the menu selector used by the add flow (`1` or `2`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(QuestionType::Quiz),
            "2" => Ok(QuestionType::FreeForm),
            other => Err(QuizError::UnknownQuestionType(other.to_string())),
        }
    }
}

/// A single stored question together with its practice counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique id, assigned as `len + 1` at creation.
    #[serde(rename = "question_id")]
    pub id: u32,
    /// The prompt shown to the user.
    #[serde(rename = "question_text")]
    pub text: String,
    /// Quiz or free-form.
    #[serde(rename = "question_type")]
    pub kind: QuestionType,
    /// Answer options, present only for quiz questions.
    #[serde(default)]
    pub options: Option<Vec<String>>,
    /// Option number (quiz) or canonical answer text (free-form).
    #[serde(default)]
    pub correct_answer: String,
    /// Inactive questions are skipped by practice and test selection.
    pub active: bool,
    /// Practice-mode presentations.
    pub times_shown: u32,
    /// Correct practice-mode answers.
    pub times_correct: u32,
}

impl Question {
    /// Returns whether `answer` is correct for this question.
    ///
    /// Quiz answers must match the option number exactly (`"1"` is not `"01"`).
    /// Free-form answers are compared after lower-casing both sides.
    pub fn check_answer(&self, answer: &str) -> bool {
        match self.kind {
            QuestionType::Quiz => answer == self.correct_answer,
            QuestionType::FreeForm => answer.to_lowercase() == self.correct_answer.to_lowercase(),
        }
    }

    /// Options to display, empty for free-form questions.
    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or_default()
    }

    /// Record one practice presentation.
    pub fn record_practice(&mut self, correct: bool) {
        self.times_shown += 1;
        if correct {
            self.times_correct += 1;
        }
    }
}

/// Unvalidated input for a new question, as collected by the add flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub text: String,
    pub kind: QuestionType,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl QuestionDraft {
    /// A multiple-choice draft.
    pub fn quiz(
        text: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            kind: QuestionType::Quiz,
            options,
            correct_answer: correct_answer.into(),
        }
    }

    /// A free-form draft.
    pub fn free_form(text: impl Into<String>, correct_answer: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: QuestionType::FreeForm,
            options: Vec::new(),
            correct_answer: correct_answer.into(),
        }
    }

    /// Validate the draft and turn it into an active, never-shown question.
    pub fn into_question(self, id: u32) -> Result<Question, QuizError> {
        if self.text.trim().is_empty() {
            return Err(QuizError::EmptyText);
        }
        let options = match self.kind {
            QuestionType::Quiz if self.options.is_empty() => return Err(QuizError::NoOptions),
            QuestionType::Quiz => Some(self.options),
            QuestionType::FreeForm => None,
        };
        Ok(Question {
            id,
            text: self.text,
            kind: self.kind,
            options,
            correct_answer: self.correct_answer,
            active: true,
            times_shown: 0,
            times_correct: 0,
        })
    }
}

/// Aggregate test statistics for one profile.
///
/// A freshly selected profile has no fields at all; readers treat a missing
/// field as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    #[serde(rename = "Score", default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u64>,
    #[serde(
        rename = "TotalQuestions",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub total_questions: Option<u64>,
    #[serde(
        rename = "TimesCorrect",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub times_correct: Option<u64>,
}

impl ProfileStats {
    pub fn score(&self) -> u64 {
        self.score.unwrap_or(0)
    }

    pub fn total_questions(&self) -> u64 {
        self.total_questions.unwrap_or(0)
    }

    pub fn times_correct(&self) -> u64 {
        self.times_correct.unwrap_or(0)
    }

    /// Fold one finished test into the aggregates.
    ///
    /// `Score` and `TimesCorrect` always move together.
    pub fn record_test(&mut self, score: u64, total: u64) {
        self.score = Some(self.score() + score);
        self.total_questions = Some(self.total_questions() + total);
        self.times_correct = Some(self.times_correct() + score);
    }
}

/// All profiles keyed by name, in the order they were first selected.
pub type Profiles = IndexMap<String, ProfileStats>;
