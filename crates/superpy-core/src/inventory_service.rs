//! Buy/sell/delete orchestration over the persisted ledger.
//!
//! Each mutating call is one read-modify-write cycle: load the full
//! collection, change it in memory, and hand the whole collection back to
//! storage. Nothing is written when an operation finds nothing to do.

use chrono::NaiveDate;
use tracing::{debug, info};

use superpy_domain::{
    next_id, DateRange, InventoryRow, Purchase, RecordId, RevenueSeries, Sale,
};

use crate::{storage::ledger_warnings, Clock, CoreError, LedgerStorage, SummaryService};

/// Inventory engine bound to a storage backend and a clock.
pub struct InventoryService<'a> {
    storage: &'a dyn LedgerStorage,
    clock: &'a dyn Clock,
}

impl<'a> InventoryService<'a> {
    pub fn new(storage: &'a dyn LedgerStorage, clock: &'a dyn Clock) -> Self {
        Self { storage, clock }
    }

    /// Records a purchase dated at the clock's current date.
    pub fn buy(
        &self,
        product_name: &str,
        buy_price: f64,
        expiration_date: NaiveDate,
    ) -> Result<Purchase, CoreError> {
        let buy_date = self.clock.today()?;
        let mut purchases = self.storage.load_purchases()?;
        let purchase = Purchase::new(
            next_id(&purchases),
            product_name,
            buy_price,
            expiration_date,
            buy_date,
        );
        purchases.push(purchase.clone());
        self.storage.save_purchases(&purchases)?;
        info!(
            id = purchase.id,
            product = %purchase.product_name,
            %buy_date,
            "recorded purchase"
        );
        Ok(purchase)
    }

    /// Sells against the first stored purchase of `product_name` that is
    /// still unexpired today. Returns `None` when no such purchase exists.
    pub fn sell(&self, product_name: &str, sell_price: f64) -> Result<Option<Sale>, CoreError> {
        let sell_date = self.clock.today()?;
        let purchases = self.storage.load_purchases()?;

        for candidate in purchases.iter().filter(|p| p.is_product(product_name)) {
            debug!(
                id = candidate.id,
                expiration = %candidate.expiration_date,
                %sell_date,
                "checking purchase"
            );
        }

        let Some(source) = purchases
            .iter()
            .find(|p| p.is_product(product_name) && p.is_unexpired_on(sell_date))
        else {
            info!(product = product_name, %sell_date, "no unexpired stock to sell");
            return Ok(None);
        };

        let mut sales = self.storage.load_sales()?;
        let sale = Sale::new(
            next_id(&sales),
            source.id,
            product_name,
            sell_price,
            sell_date,
        );
        sales.push(sale.clone());
        self.storage.save_sales(&sales)?;
        info!(
            id = sale.id,
            purchase_id = sale.purchase_id,
            product = product_name,
            "recorded sale"
        );
        Ok(Some(sale))
    }

    /// Purchases bought inside `range`, joined with their sale, in stored order.
    pub fn list_products(&self, range: DateRange) -> Result<Vec<InventoryRow>, CoreError> {
        let today = self.clock.today()?;
        let window = range.with_defaults(NaiveDate::MIN, NaiveDate::MAX);
        let purchases = self.storage.load_purchases()?;
        let sales = self.storage.load_sales()?;

        let rows = purchases
            .into_iter()
            .filter(|purchase| window.contains(purchase.buy_date))
            .map(|purchase| {
                let sale = sales
                    .iter()
                    .find(|sale| sale.purchase_id == purchase.id)
                    .cloned();
                InventoryRow {
                    days_till_expiration: purchase.days_until_expiration(today),
                    purchase,
                    sale,
                }
            })
            .collect();
        Ok(rows)
    }

    pub fn revenue(&self, range: DateRange) -> Result<RevenueSeries, CoreError> {
        let sales = self.storage.load_sales()?;
        Ok(SummaryService::revenue_by_date(&sales, range))
    }

    pub fn sales_within(&self, range: DateRange) -> Result<Vec<Sale>, CoreError> {
        let sales = self.storage.load_sales()?;
        Ok(SummaryService::sales_within(&sales, range))
    }

    /// Profit of the sales inside `range`, using the same date defaults as
    /// revenue queries.
    pub fn profit(&self, range: DateRange) -> Result<f64, CoreError> {
        let purchases = self.storage.load_purchases()?;
        let sales = self.sales_within(range)?;
        Ok(SummaryService::profit(&purchases, &sales))
    }

    /// Removes the purchase with `id`. Sales that reference it are kept.
    pub fn delete_purchase(&self, id: RecordId) -> Result<Option<Purchase>, CoreError> {
        let mut purchases = self.storage.load_purchases()?;
        let Some(index) = purchases.iter().position(|purchase| purchase.id == id) else {
            info!(id, "purchase not found");
            return Ok(None);
        };
        let removed = purchases.remove(index);
        self.storage.save_purchases(&purchases)?;
        info!(id, product = %removed.product_name, "deleted purchase");
        Ok(Some(removed))
    }

    pub fn delete_sale(&self, id: RecordId) -> Result<Option<Sale>, CoreError> {
        let mut sales = self.storage.load_sales()?;
        let Some(index) = sales.iter().position(|sale| sale.id == id) else {
            info!(id, "sale not found");
            return Ok(None);
        };
        let removed = sales.remove(index);
        self.storage.save_sales(&sales)?;
        info!(id, product = %removed.product_name, "deleted sale");
        Ok(Some(removed))
    }

    /// Anomalies such as sales pointing at deleted purchases.
    pub fn warnings(&self) -> Result<Vec<String>, CoreError> {
        let purchases = self.storage.load_purchases()?;
        let sales = self.storage.load_sales()?;
        Ok(ledger_warnings(&purchases, &sales))
    }
}
