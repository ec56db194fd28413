//! Tool configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use quizforge_core::session::DEFAULT_MIN_QUESTIONS;

/// Config file looked up in the working directory when none is given.
pub const CONFIG_FILE_NAME: &str = "quizforge.toml";

/// Top-level quizforge configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Directory holding the store files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Question store file name, relative to `data_dir`.
    #[serde(default = "default_questions_file")]
    pub questions_file: String,
    /// Profile store file name, relative to `data_dir`.
    #[serde(default = "default_profiles_file")]
    pub profiles_file: String,
    /// Results log file name, relative to `data_dir`.
    #[serde(default = "default_results_file")]
    pub results_file: String,
    /// Store size required before practice or test mode will start.
    #[serde(default = "default_min_questions")]
    pub min_questions: usize,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_questions_file() -> String {
    "questions.json".to_string()
}
fn default_profiles_file() -> String {
    "profiles.json".to_string()
}
fn default_results_file() -> String {
    "results.txt".to_string()
}
fn default_min_questions() -> usize {
    DEFAULT_MIN_QUESTIONS
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            questions_file: default_questions_file(),
            profiles_file: default_profiles_file(),
            results_file: default_results_file(),
            min_questions: default_min_questions(),
        }
    }
}

impl QuizConfig {
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn questions_path(&self) -> PathBuf {
        self.data_dir.join(&self.questions_file)
    }

    pub fn profiles_path(&self) -> PathBuf {
        self.data_dir.join(&self.profiles_file)
    }

    pub fn results_path(&self) -> PathBuf {
        self.data_dir.join(&self.results_file)
    }
}

/// Load config from an explicit path, or search the working directory.
///
/// An explicit path that does not exist is an error; a missing default file
/// is not.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            local.exists().then_some(local)
        }
    };

    let config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<QuizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => QuizConfig::default(),
    };

    Ok(config)
}
