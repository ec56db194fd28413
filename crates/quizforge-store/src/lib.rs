//! quizforge-store — file persistence and configuration.
//!
//! Implements the `Storage` trait from `quizforge-core` over two JSON files
//! and an append-only text log, and loads the optional TOML config.

pub mod config;
pub mod json;

pub use config::{load_config_from, QuizConfig};
pub use json::JsonStorage;
