//! Sale records created by the sell operation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::{Identifiable, RecordId};

/// A recorded sale. `purchase_id` is a lookup-only reference: deleting the
/// purchase later leaves it dangling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: RecordId,
    pub purchase_id: RecordId,
    pub product_name: String,
    pub sell_price: f64,
    pub sell_date: NaiveDate,
}

impl Sale {
    pub fn new(
        id: RecordId,
        purchase_id: RecordId,
        product_name: impl Into<String>,
        sell_price: f64,
        sell_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            purchase_id,
            product_name: product_name.into(),
            sell_price,
            sell_date,
        }
    }
}

impl Identifiable for Sale {
    fn id(&self) -> RecordId {
        self.id
    }
}
