//! Read models produced by listing and revenue queries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{purchase::Purchase, sale::Sale};

/// One purchase joined with the sale that consumed it, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRow {
    pub purchase: Purchase,
    pub sale: Option<Sale>,
    pub days_till_expiration: i64,
}

impl InventoryRow {
    pub fn is_sold(&self) -> bool {
        self.sale.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub amount: f64,
}

/// Revenue summed per sell date. Dates keep the order in which they were
/// first recorded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueSeries {
    entries: Vec<DailyRevenue>,
}

impl RevenueSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the bucket for `date`, creating it at the end if new.
    pub fn record(&mut self, date: NaiveDate, amount: f64) {
        match self.entries.iter_mut().find(|entry| entry.date == date) {
            Some(entry) => entry.amount += amount,
            None => self.entries.push(DailyRevenue { date, amount }),
        }
    }

    pub fn get(&self, date: NaiveDate) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.date == date)
            .map(|entry| entry.amount)
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|entry| entry.amount).sum()
    }

    pub fn max_amount(&self) -> Option<f64> {
        self.entries
            .iter()
            .map(|entry| entry.amount)
            .fold(None, |acc, amount| match acc {
                Some(current) if current >= amount => Some(current),
                _ => Some(amount),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DailyRevenue> {
        self.entries.iter()
    }
}

impl FromIterator<(NaiveDate, f64)> for RevenueSeries {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, f64)>>(iter: I) -> Self {
        let mut series = RevenueSeries::new();
        for (date, amount) in iter {
            series.record(date, amount);
        }
        series
    }
}
