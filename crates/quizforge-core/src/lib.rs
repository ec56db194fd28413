//! quizforge-core — question model, weighted selection, and session logic.
//!
//! This crate owns everything the interactive tool does between reading an
//! answer and writing a store: answer checking, the practice-mode weighting,
//! test scoring, profile aggregates, and the flows behind each menu entry.
//! Persistence and terminal I/O plug in through the traits in [`traits`].

pub mod error;
pub mod model;
pub mod modes;
pub mod results;
pub mod selection;
pub mod session;
pub mod statistics;
pub mod traits;

pub use error::QuizError;
pub use model::{ProfileStats, Profiles, Question, QuestionDraft, QuestionType};
pub use session::Session;
pub use traits::{Console, Storage};
