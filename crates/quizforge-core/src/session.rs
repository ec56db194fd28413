//! The session context: both stores, the selected profile, and the sources
//! of randomness and time, owned in one place and passed to every flow.
//!
//! Every mutating method persists the affected store before returning.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::QuizError;
use crate::model::{ProfileStats, Profiles, Question, QuestionDraft};
use crate::results::{Clock, TestResult};
use crate::selection;
use crate::traits::Storage;

/// Default minimum store size for practice and test mode.
pub const DEFAULT_MIN_QUESTIONS: usize = 5;

/// Single-writer owner of all quiz state.
pub struct Session<S: Storage> {
    storage: S,
    questions: Vec<Question>,
    profiles: Profiles,
    current_profile: String,
    min_questions: usize,
    rng: StdRng,
    clock: Clock,
}

impl<S: Storage> Session<S> {
    /// Load both stores from `storage`.
    pub fn load(storage: S) -> Result<Self> {
        let questions = storage
            .load_questions()
            .context("failed to load questions")?;
        let profiles = storage.load_profiles().context("failed to load profiles")?;
        tracing::debug!(
            questions = questions.len(),
            profiles = profiles.len(),
            "session loaded"
        );
        Ok(Self {
            storage,
            questions,
            profiles,
            current_profile: String::new(),
            min_questions: DEFAULT_MIN_QUESTIONS,
            rng: StdRng::from_os_rng(),
            clock: Clock::default(),
        })
    }

    /// Replace the random source, e.g. with a seeded one.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_min_questions(mut self, min_questions: usize) -> Self {
        self.min_questions = min_questions;
        self
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn profiles(&self) -> &Profiles {
        &self.profiles
    }

    /// The selected profile name, empty until one is selected.
    pub fn current_profile(&self) -> &str {
        &self.current_profile
    }

    // -----------------------------------------------------------------------
    // Question store
    // -----------------------------------------------------------------------

    /// Validate `draft`, append it with the next id, and persist.
    pub fn add_question(&mut self, draft: QuestionDraft) -> Result<u32> {
        let id = u32::try_from(self.questions.len() + 1).context("question id overflow")?;
        let question = draft.into_question(id)?;
        self.questions.push(question);
        self.save_questions()?;
        tracing::debug!(question_id = id, "question added");
        Ok(id)
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Enable or disable a question and persist.
    pub fn set_active(&mut self, id: u32, active: bool) -> Result<()> {
        let question = self
            .questions
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or(QuizError::QuestionNotFound(id))?;
        question.active = active;
        self.save_questions()?;
        tracing::debug!(question_id = id, active, "question toggled");
        Ok(())
    }

    /// Currently active questions, in store order.
    pub fn active_questions(&self) -> Vec<&Question> {
        self.questions.iter().filter(|q| q.active).collect()
    }

    /// Fails unless the store holds at least `min_questions` questions,
    /// active or not.
    pub fn ensure_enough_questions(&self, mode: &'static str) -> Result<(), QuizError> {
        if self.questions.len() < self.min_questions {
            return Err(QuizError::NotEnoughQuestions {
                mode,
                required: self.min_questions,
            });
        }
        Ok(())
    }

    /// Fails when no question is active. `purpose` completes the message.
    pub fn ensure_active(&self, purpose: &'static str) -> Result<(), QuizError> {
        if self.questions.iter().any(|q| q.active) {
            Ok(())
        } else {
            Err(QuizError::NoActiveQuestions(purpose))
        }
    }

    // -----------------------------------------------------------------------
    // Practice mode
    // -----------------------------------------------------------------------

    /// Draw the next practice question from the current active pool.
    pub fn draw_practice_question(&mut self) -> Result<Question, QuizError> {
        let candidates: Vec<&Question> = self.questions.iter().filter(|q| q.active).collect();
        selection::pick_weighted(&candidates, &mut self.rng)
            .cloned()
            .ok_or(QuizError::NoActiveQuestions("practice"))
    }

    /// Score `answer` against question `id`, update its practice counters,
    /// and persist. Returns whether the answer was correct.
    pub fn record_practice_answer(&mut self, id: u32, answer: &str) -> Result<bool> {
        let question = self
            .questions
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or(QuizError::QuestionNotFound(id))?;
        let correct = question.check_answer(answer);
        question.record_practice(correct);
        self.save_questions()?;
        Ok(correct)
    }

    // -----------------------------------------------------------------------
    // Test mode
    // -----------------------------------------------------------------------

    /// Pick `count` distinct active questions in random order.
    pub fn draw_test(&mut self, count: usize) -> Result<Vec<Question>, QuizError> {
        self.ensure_active("the test")?;
        let active: Vec<Question> = self.questions.iter().filter(|q| q.active).cloned().collect();
        if count > active.len() {
            return Err(QuizError::CountExceedsAvailable {
                requested: count,
                available: active.len(),
            });
        }
        Ok(selection::sample_for_test(active, count, &mut self.rng))
    }

    /// Fold a finished test into the current profile, persist profiles, and
    /// append the result to the log.
    pub fn finish_test(&mut self, score: usize, total: usize) -> Result<TestResult> {
        let name = self.current_profile.clone();
        self.profiles
            .entry(name.clone())
            .or_default()
            .record_test(score as u64, total as u64);
        self.save_profiles()?;

        let result = TestResult {
            profile: name,
            score,
            total,
            timestamp: self.clock.now(),
        };
        self.storage
            .append_result(&result)
            .context("failed to append test result")?;
        tracing::info!(
            profile = %result.profile,
            score,
            total,
            "test result recorded"
        );
        Ok(result)
    }

    // -----------------------------------------------------------------------
    // Profiles
    // -----------------------------------------------------------------------

    /// Make `name` the current profile, creating an empty record if needed,
    /// and persist.
    pub fn select_profile(&mut self, name: &str) -> Result<()> {
        if !self.profiles.contains_key(name) {
            tracing::info!(profile = name, "creating profile");
            self.profiles.insert(name.to_string(), ProfileStats::default());
        }
        self.current_profile = name.to_string();
        self.save_profiles()
    }

    /// Statistics of the selected profile, if it exists in the store.
    pub fn current_profile_stats(&self) -> Option<(&str, &ProfileStats)> {
        self.profiles
            .get_key_value(&self.current_profile)
            .map(|(name, stats)| (name.as_str(), stats))
    }

    fn save_questions(&self) -> Result<()> {
        self.storage
            .save_questions(&self.questions)
            .context("failed to save questions")
    }

    fn save_profiles(&self) -> Result<()> {
        self.storage
            .save_profiles(&self.profiles)
            .context("failed to save profiles")
    }
}
