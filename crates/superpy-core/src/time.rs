use std::sync::Mutex;

use chrono::{Duration, NaiveDate};

use crate::CoreError;

/// Clock owns the simulated "current date" that expiration and sale dating
/// are evaluated against.
pub trait Clock: Send + Sync {
    /// Returns the current simulated date.
    fn today(&self) -> Result<NaiveDate, CoreError>;

    /// Replaces the current simulated date.
    fn set_today(&self, date: NaiveDate) -> Result<(), CoreError>;

    /// Moves the current date by `days` (negative moves backwards) and
    /// returns the new date.
    fn advance(&self, days: i64) -> Result<NaiveDate, CoreError> {
        let current = self.today()?;
        let next = Duration::try_days(days)
            .and_then(|delta| current.checked_add_signed(delta))
            .ok_or_else(|| {
                CoreError::InvalidInput(format!(
                    "cannot move {current} by {days} days: date out of range"
                ))
            })?;
        self.set_today(next)?;
        Ok(next)
    }
}

/// In-memory clock pinned to an explicit date.
#[derive(Debug)]
pub struct FixedClock {
    today: Mutex<NaiveDate>,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Mutex::new(today),
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Result<NaiveDate, CoreError> {
        self.today
            .lock()
            .map(|guard| *guard)
            .map_err(|_| CoreError::Storage("clock state poisoned".into()))
    }

    fn set_today(&self, date: NaiveDate) -> Result<(), CoreError> {
        let mut guard = self
            .today
            .lock()
            .map_err(|_| CoreError::Storage("clock state poisoned".into()))?;
        *guard = date;
        Ok(())
    }
}
