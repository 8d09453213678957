// Time Provider Port (for testability)

use chrono::NaiveDate;

use crate::error::{AppError, Result};

/// Time provider interface (allows fixed dates in tests)
pub trait TimeProvider: Send + Sync {
    /// Current calendar date
    fn today(&self) -> NaiveDate;
}

/// System time provider (production), local calendar date
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Always reports the same date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTimeProvider {
    date: NaiveDate,
}

impl FixedTimeProvider {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Parse a `YYYY-MM-DD` date
    ///
    /// # Errors
    /// `AppError::Config` if `value` is not a valid calendar date.
    pub fn parse(value: &str) -> Result<Self> {
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Self::new)
            .map_err(|e| AppError::Config(format!("invalid date '{}': {}", value, e)))
    }
}

impl TimeProvider for FixedTimeProvider {
    fn today(&self) -> NaiveDate {
        self.date
    }
}
