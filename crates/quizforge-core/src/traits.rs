//! Trait seams between the quiz logic and the outside world.
//!
//! `Storage` is implemented by `quizforge-store` (JSON files) and by
//! [`MemoryStorage`] here. `Console` is implemented by the binary over
//! stdin/stdout and by [`ScriptedConsole`] for tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use anyhow::Result;

use crate::error::QuizError;
use crate::model::{Profiles, Question};
use crate::results::TestResult;

// ---------------------------------------------------------------------------
// Storage
// ---------------------------------------------------------------------------

/// Persistence for the two stores and the results log.
///
/// Loads are wholesale and treat a missing store as empty. Saves rewrite the
/// whole store.
pub trait Storage {
    fn load_questions(&self) -> Result<Vec<Question>>;

    fn save_questions(&self, questions: &[Question]) -> Result<()>;

    fn load_profiles(&self) -> Result<Profiles>;

    fn save_profiles(&self, profiles: &Profiles) -> Result<()>;

    /// Append one result to the log. Never rewrites earlier entries.
    fn append_result(&self, result: &TestResult) -> Result<()>;
}

/// Snapshot of everything a [`MemoryStorage`] holds.
#[derive(Debug, Clone, Default)]
pub struct MemoryState {
    pub questions: Vec<Question>,
    pub profiles: Profiles,
    pub results: Vec<TestResult>,
    pub question_saves: usize,
    pub profile_saves: usize,
}

/// In-memory storage for tests and prototyping.
///
/// Clones share the same state, so a test can keep a handle and inspect what
/// the session wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with `questions`.
    pub fn with_questions(questions: Vec<Question>) -> Self {
        let storage = Self::new();
        storage.state.borrow_mut().questions = questions;
        storage
    }

    pub fn snapshot(&self) -> MemoryState {
        self.state.borrow().clone()
    }
}

impl Storage for MemoryStorage {
    fn load_questions(&self) -> Result<Vec<Question>> {
        Ok(self.state.borrow().questions.clone())
    }

    fn save_questions(&self, questions: &[Question]) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.questions = questions.to_vec();
        state.question_saves += 1;
        Ok(())
    }

    fn load_profiles(&self) -> Result<Profiles> {
        Ok(self.state.borrow().profiles.clone())
    }

    fn save_profiles(&self, profiles: &Profiles) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.profiles = profiles.clone();
        state.profile_saves += 1;
        Ok(())
    }

    fn append_result(&self, result: &TestResult) -> Result<()> {
        self.state.borrow_mut().results.push(result.clone());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Console
// ---------------------------------------------------------------------------

/// Line-oriented interactive I/O.
pub trait Console {
    /// Print one line.
    fn say(&mut self, line: &str) -> Result<()>;

    /// Show `prompt` and read one line without its trailing newline.
    ///
    /// End of input is reported as [`QuizError::InputClosed`].
    fn ask(&mut self, prompt: &str) -> Result<String>;
}

/// A console fed from a fixed list of answers, recording everything shown.
///
/// Running out of answers behaves like end of input.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Every line and prompt shown so far, in order.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Whether any shown line equals `line`.
    pub fn printed(&self, line: &str) -> bool {
        self.transcript.iter().any(|l| l == line)
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, line: &str) -> Result<()> {
        self.transcript.push(line.to_string());
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.transcript.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| QuizError::InputClosed.into())
    }
}
