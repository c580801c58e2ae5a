use std::collections::HashSet;

use superpy_domain::{Purchase, Sale};

use crate::CoreError;

/// Abstraction over the persisted purchase and sale collections.
///
/// Every call reads or replaces a whole collection; there are no partial
/// updates. A missing backing store loads as an empty collection.
pub trait LedgerStorage: Send + Sync {
    fn load_purchases(&self) -> Result<Vec<Purchase>, CoreError>;
    fn save_purchases(&self, purchases: &[Purchase]) -> Result<(), CoreError>;
    fn load_sales(&self) -> Result<Vec<Sale>, CoreError>;
    fn save_sales(&self, sales: &[Sale]) -> Result<(), CoreError>;
}

/// Detects dangling references and other anomalies across the ledger.
pub fn ledger_warnings(purchases: &[Purchase], sales: &[Sale]) -> Vec<String> {
    let mut warnings = Vec::new();

    let mut seen = HashSet::new();
    for purchase in purchases {
        if !seen.insert(purchase.id) {
            warnings.push(format!("purchase id {} appears more than once", purchase.id));
        }
    }

    let mut seen_sales = HashSet::new();
    for sale in sales {
        if !seen_sales.insert(sale.id) {
            warnings.push(format!("sale id {} appears more than once", sale.id));
        }
        if !seen.contains(&sale.purchase_id) {
            warnings.push(format!(
                "sale {} references unknown purchase {}",
                sale.id, sale.purchase_id
            ));
        }
    }
    warnings
}
