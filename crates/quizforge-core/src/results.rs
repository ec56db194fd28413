//! Test-mode result records and the clock that timestamps them.

use std::fmt;

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Timestamp layout used in the results log.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A clock abstraction for deterministic timestamps in tests.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    /// Local wall-clock time.
    #[default]
    System,
    /// Always returns the same instant.
    Fixed(NaiveDateTime),
}

impl Clock {
    pub fn fixed(at: NaiveDateTime) -> Self {
        Self::Fixed(at)
    }

    /// Current local time according to this clock.
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Clock::System => Local::now().naive_local(),
            Clock::Fixed(t) => *t,
        }
    }
}

/// Returns a clock fixed at 2024-03-01 09:30:00, for tests.
pub fn fixed_clock() -> Clock {
    let at = NaiveDate::from_ymd_opt(2024, 3, 1)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .unwrap_or_default();
    Clock::fixed(at)
}

/// The outcome of one completed test run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    pub profile: String,
    pub score: usize,
    pub total: usize,
    pub timestamp: NaiveDateTime,
}

impl TestResult {
    /// `"score/total"`, as shown to the user.
    pub fn ratio(&self) -> String {
        format!("{}/{}", self.score, self.total)
    }
}

/// The human-readable block that is printed and appended to the results log.
impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\nProfile: {}\nScore: {}\nTimestamp: {}",
            self.profile,
            self.ratio(),
            self.timestamp.format(TIMESTAMP_FORMAT)
        )
    }
}
