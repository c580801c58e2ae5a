//! Purchase records created by the buy operation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::{Identifiable, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: RecordId,
    pub product_name: String,
    pub buy_price: f64,
    pub expiration_date: NaiveDate,
    pub buy_date: NaiveDate,
}

impl Purchase {
    pub fn new(
        id: RecordId,
        product_name: impl Into<String>,
        buy_price: f64,
        expiration_date: NaiveDate,
        buy_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            product_name: product_name.into(),
            buy_price,
            expiration_date,
            buy_date,
        }
    }

    /// A purchase is sellable only while its expiration date lies strictly
    /// after `date`; expiring today counts as expired.
    pub fn is_unexpired_on(&self, date: NaiveDate) -> bool {
        self.expiration_date > date
    }

    /// Whole days from `today` until expiration. Negative once expired.
    pub fn days_until_expiration(&self, today: NaiveDate) -> i64 {
        (self.expiration_date - today).num_days()
    }

    /// Exact, case-sensitive product match.
    pub fn is_product(&self, product_name: &str) -> bool {
        self.product_name == product_name
    }
}

impl Identifiable for Purchase {
    fn id(&self) -> RecordId {
        self.id
    }
}
