//! JSON file storage for questions and profiles, plus the plain-text
//! results log.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use quizforge_core::model::{Profiles, Question};
use quizforge_core::results::TestResult;
use quizforge_core::traits::Storage;

use crate::config::QuizConfig;

/// File-backed [`Storage`].
///
/// Missing store files are created empty on first load. Saves rewrite the
/// whole file; the results log is only ever appended to.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    questions_path: PathBuf,
    profiles_path: PathBuf,
    results_path: PathBuf,
}

impl JsonStorage {
    pub fn new(
        questions_path: impl Into<PathBuf>,
        profiles_path: impl Into<PathBuf>,
        results_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            questions_path: questions_path.into(),
            profiles_path: profiles_path.into(),
            results_path: results_path.into(),
        }
    }

    /// Storage using the default file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::from_config(&QuizConfig::default().with_data_dir(dir))
    }

    pub fn from_config(config: &QuizConfig) -> Self {
        Self::new(
            config.questions_path(),
            config.profiles_path(),
            config.results_path(),
        )
    }

    pub fn questions_path(&self) -> &Path {
        &self.questions_path
    }

    pub fn profiles_path(&self) -> &Path {
        &self.profiles_path
    }

    pub fn results_path(&self) -> &Path {
        &self.results_path
    }
}

/// Read `path` as JSON, or create it holding `T::default()` if it is missing.
fn load_or_create<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned + Serialize + Default,
{
    if !path.exists() {
        let empty = T::default();
        write_json(path, &empty)?;
        tracing::debug!(path = %path.display(), "created empty store");
        return Ok(empty);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
    Ok(value)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize store")?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

impl Storage for JsonStorage {
    fn load_questions(&self) -> Result<Vec<Question>> {
        let questions: Vec<Question> = load_or_create(&self.questions_path)?;
        tracing::debug!(count = questions.len(), "loaded questions");
        Ok(questions)
    }

    fn save_questions(&self, questions: &[Question]) -> Result<()> {
        write_json(&self.questions_path, questions)?;
        tracing::debug!(count = questions.len(), "saved questions");
        Ok(())
    }

    fn load_profiles(&self) -> Result<Profiles> {
        let profiles: Profiles = load_or_create(&self.profiles_path)?;
        tracing::debug!(count = profiles.len(), "loaded profiles");
        Ok(profiles)
    }

    fn save_profiles(&self, profiles: &Profiles) -> Result<()> {
        write_json(&self.profiles_path, profiles)?;
        tracing::debug!(count = profiles.len(), "saved profiles");
        Ok(())
    }

    fn append_result(&self, result: &TestResult) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.results_path)
            .with_context(|| format!("failed to open {}", self.results_path.display()))?;
        writeln!(file, "{result}")
            .with_context(|| format!("failed to append to {}", self.results_path.display()))?;
        Ok(())
    }
}
