//! Shared identifiers, date helpers, and record traits.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier for purchases and sales. Unique within its own collection only.
pub type RecordId = u64;

/// Calendar format used for every persisted and user-supplied date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Exposes the numeric identifier of a stored record.
pub trait Identifiable {
    fn id(&self) -> RecordId;
}

/// Returns the identifier for the next record appended to `records`.
///
/// The value is recomputed from the current contents as `max + 1` (or `1`
/// for an empty collection), so removing the highest record frees its id
/// for reuse.
pub fn next_id<T: Identifiable>(records: &[T]) -> RecordId {
    records
        .iter()
        .map(Identifiable::id)
        .max()
        .map_or(1, |max| max.saturating_add(1))
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| DateParseError {
        input: value.to_string(),
    })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Lower bound applied to revenue queries without an explicit start date.
pub fn revenue_floor() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Upper bound applied to revenue queries without an explicit end date.
pub fn revenue_ceiling() -> NaiveDate {
    NaiveDate::from_ymd_opt(9999, 12, 31).unwrap_or(NaiveDate::MAX)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParseError {
    input: String,
}

impl DateParseError {
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a valid date (expected YYYY-MM-DD)", self.input)
    }
}

impl std::error::Error for DateParseError {}

/// Optional inclusive date window used by listing and reporting queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Fills unset bounds with `floor` and `ceiling`.
    pub fn with_defaults(self, floor: NaiveDate, ceiling: NaiveDate) -> Self {
        Self {
            start: Some(self.start.unwrap_or(floor)),
            end: Some(self.end.unwrap_or(ceiling)),
        }
    }

    /// Returns true when `start <= date <= end`; unset bounds are open.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| start <= date) && self.end.map_or(true, |end| date <= end)
    }
}
