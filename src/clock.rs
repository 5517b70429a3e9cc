//! Access to "today"
//!
//! Services ask a [`Clock`] for the current date instead of reading the
//! system time directly, so projections stay deterministic in tests.

use chrono::{Local, NaiveDate};

pub trait Clock: Send + Sync {
    /// The current calendar date in the user's local timezone
    fn today(&self) -> NaiveDate;
}

/// Reads the local system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
