use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{Local, NaiveDate};
use tracing::debug;

use superpy_core::{Clock, CoreError};
use superpy_domain::{format_date, parse_date};

use crate::atomic::replace_file;

/// Clock persisted as a single `YYYY-MM-DD` line.
///
/// When the file is missing or blank the local wall-clock date is used; that
/// fallback is never written back.
#[derive(Debug, Clone)]
pub struct FileClock {
    path: PathBuf,
}

impl FileClock {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored date, if one has been set.
    pub fn persisted(&self) -> Result<Option<NaiveDate>, CoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let value = raw.trim();
        if value.is_empty() {
            return Ok(None);
        }
        parse_date(value).map(Some).map_err(|err| {
            CoreError::Parse(format!("{}: {}", self.path.display(), err))
        })
    }
}

impl Clock for FileClock {
    fn today(&self) -> Result<NaiveDate, CoreError> {
        match self.persisted()? {
            Some(date) => Ok(date),
            None => {
                let today = Local::now().date_naive();
                debug!(path = %self.path.display(), %today, "no stored date, using system date");
                Ok(today)
            }
        }
    }

    fn set_today(&self, date: NaiveDate) -> Result<(), CoreError> {
        replace_file(&self.path, &format_date(date))?;
        debug!(path = %self.path.display(), %date, "stored current date");
        Ok(())
    }
}
