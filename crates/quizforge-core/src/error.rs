//! User-facing error types.
//!
//! Every variant except `InputClosed` describes a rejected interactive action:
//! the operation aborts without mutating any store and the menu carries on.
//! Storage failures are not represented here; they travel as `anyhow::Error`
//! so the menu can downcast and tell the two kinds apart.

use thiserror::Error;

/// Errors raised by the quiz flows.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// Practice or test mode was entered with too few questions in the store.
    #[error("{mode} mode requires at least {required} questions.")]
    NotEnoughQuestions { mode: &'static str, required: usize },

    /// Every question in the store is disabled.
    #[error("No active questions available for {0}.")]
    NoActiveQuestions(&'static str),

    /// The requested test length exceeds the active pool.
    #[error("Number of questions exceeds the available questions.")]
    CountExceedsAvailable { requested: usize, available: usize },

    /// A number was expected but the input did not parse as one.
    #[error("Invalid number: '{0}'.")]
    InvalidNumber(String),

    /// The question-type selector was neither `1` nor `2`.
    #[error("Invalid question type.")]
    UnknownQuestionType(String),

    /// The enable/disable action was not recognized.
    #[error("Invalid action.")]
    UnknownAction(String),

    /// No question carries the requested id.
    #[error("Question not found.")]
    QuestionNotFound(u32),

    /// A question was submitted without any text.
    #[error("Question text must not be empty.")]
    EmptyText,

    /// A quiz question was submitted with zero options.
    #[error("A quiz question needs at least one answer option.")]
    NoOptions,

    /// The console reached end of input.
    #[error("input closed")]
    InputClosed,
}

impl QuizError {
    /// Returns `true` if this error ends the interactive session rather than
    /// a single operation.
    pub fn is_terminal(&self) -> bool {
        matches!(self, QuizError::InputClosed)
    }
}
