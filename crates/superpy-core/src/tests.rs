use std::sync::Mutex;

use chrono::NaiveDate;

use crate::{
    storage::ledger_warnings, Clock, CoreError, FixedClock, InventoryService, LedgerStorage,
    SummaryService,
};
use superpy_domain::{DateRange, Purchase, Sale};

#[derive(Default)]
struct MemoryStorage {
    purchases: Mutex<Vec<Purchase>>,
    sales: Mutex<Vec<Sale>>,
    writes: Mutex<usize>,
}

impl MemoryStorage {
    fn purchases(&self) -> Vec<Purchase> {
        self.purchases.lock().unwrap().clone()
    }

    fn sales(&self) -> Vec<Sale> {
        self.sales.lock().unwrap().clone()
    }

    fn writes(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

impl LedgerStorage for MemoryStorage {
    fn load_purchases(&self) -> Result<Vec<Purchase>, CoreError> {
        Ok(self.purchases())
    }

    fn save_purchases(&self, purchases: &[Purchase]) -> Result<(), CoreError> {
        *self.purchases.lock().unwrap() = purchases.to_vec();
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }

    fn load_sales(&self) -> Result<Vec<Sale>, CoreError> {
        Ok(self.sales())
    }

    fn save_sales(&self, sales: &[Sale]) -> Result<(), CoreError> {
        *self.sales.lock().unwrap() = sales.to_vec();
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn buy_then_sell_links_sale_to_purchase() {
    let storage = MemoryStorage::default();
    let clock = FixedClock::new(date(2024, 1, 1));
    let service = InventoryService::new(&storage, &clock);

    let purchase = service.buy("Apples", 1.0, date(2030, 1, 1)).unwrap();
    assert_eq!(purchase.id, 1);
    assert_eq!(purchase.buy_date, date(2024, 1, 1));

    let sale = service.sell("Apples", 2.0).unwrap().expect("apples in stock");
    assert_eq!(sale.id, 1);
    assert_eq!(sale.purchase_id, 1);
    assert_eq!(sale.sell_date, date(2024, 1, 1));

    let rows = service.list_products(DateRange::unbounded()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].purchase.product_name, "Apples");
    assert!(rows[0].is_sold());
    assert_eq!(rows[0].sale.as_ref().map(|s| s.sell_price), Some(2.0));
}

#[test]
fn listing_joins_first_sale_when_purchase_sold_twice() {
    let storage = MemoryStorage::default();
    let clock = FixedClock::new(date(2024, 1, 1));
    let service = InventoryService::new(&storage, &clock);

    service.buy("Apples", 1.0, date(2030, 1, 1)).unwrap();
    let first = service.sell("Apples", 2.0).unwrap().expect("apples in stock");
    clock.advance(1).unwrap();
    let second = service.sell("Apples", 3.0).unwrap().expect("same lot matches again");
    assert_eq!(second.purchase_id, first.purchase_id);

    let rows = service.list_products(DateRange::unbounded()).unwrap();
    assert_eq!(rows.len(), 1);
    let sale = rows[0].sale.as_ref().expect("joined sale");
    assert_eq!(sale.id, 1);
    assert_eq!(sale.sell_price, 2.0);
    assert_eq!(sale.sell_date, date(2024, 1, 1));
}

#[test]
fn product_expiring_today_cannot_be_sold() {
    let storage = MemoryStorage::default();
    let clock = FixedClock::new(date(2023, 12, 31));
    let service = InventoryService::new(&storage, &clock);

    service.buy("Milk", 1.0, date(2024, 1, 1)).unwrap();
    clock.advance(1).unwrap();
    let writes_before = storage.writes();

    assert!(service.sell("Milk", 2.0).unwrap().is_none());
    assert!(storage.sales().is_empty());
    assert_eq!(storage.writes(), writes_before);
}

#[test]
fn sell_picks_first_unexpired_purchase_in_storage_order() {
    let storage = MemoryStorage::default();
    let clock = FixedClock::new(date(2024, 5, 1));
    let service = InventoryService::new(&storage, &clock);

    service.buy("Eggs", 2.0, date(2024, 5, 1)).unwrap();
    service.buy("eggs", 2.0, date(2024, 6, 1)).unwrap();
    service.buy("Eggs", 2.5, date(2024, 7, 1)).unwrap();
    service.buy("Eggs", 2.2, date(2024, 6, 15)).unwrap();

    let sale = service.sell("Eggs", 4.0).unwrap().unwrap();
    assert_eq!(sale.purchase_id, 3);
}

#[test]
fn ids_are_recomputed_from_current_contents() {
    let storage = MemoryStorage::default();
    let clock = FixedClock::new(date(2024, 1, 1));
    let service = InventoryService::new(&storage, &clock);

    service.buy("Pears", 1.0, date(2024, 2, 1)).unwrap();
    service.buy("Plums", 1.0, date(2024, 2, 1)).unwrap();
    let third = service.buy("Kiwis", 1.0, date(2024, 2, 1)).unwrap();
    assert_eq!(third.id, 3);

    service.delete_purchase(3).unwrap().expect("kiwis deleted");
    let reused = service.buy("Limes", 1.0, date(2024, 2, 1)).unwrap();
    assert_eq!(reused.id, 3);

    service.delete_purchase(1).unwrap().expect("pears deleted");
    let next = service.buy("Figs", 1.0, date(2024, 2, 1)).unwrap();
    assert_eq!(next.id, 4);

    let mut ids: Vec<_> = storage.purchases().iter().map(|p| p.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), storage.purchases().len());
}

#[test]
fn deleting_unknown_ids_changes_nothing() {
    let storage = MemoryStorage::default();
    let clock = FixedClock::new(date(2024, 1, 1));
    let service = InventoryService::new(&storage, &clock);
    service.buy("Apples", 1.0, date(2030, 1, 1)).unwrap();
    service.sell("Apples", 2.0).unwrap();
    let writes_before = storage.writes();

    assert!(service.delete_purchase(42).unwrap().is_none());
    assert!(service.delete_sale(42).unwrap().is_none());
    assert_eq!(storage.writes(), writes_before);
    assert_eq!(storage.purchases().len(), 1);
    assert_eq!(storage.sales().len(), 1);
}

#[test]
fn deleting_a_purchase_leaves_its_sales_dangling() {
    let storage = MemoryStorage::default();
    let clock = FixedClock::new(date(2024, 1, 1));
    let service = InventoryService::new(&storage, &clock);
    service.buy("Apples", 1.0, date(2030, 1, 1)).unwrap();
    service.sell("Apples", 2.0).unwrap();

    let removed = service.delete_purchase(1).unwrap().unwrap();
    assert_eq!(removed.product_name, "Apples");
    assert_eq!(storage.sales().len(), 1);
    assert_eq!(service.profit(DateRange::unbounded()).unwrap(), 0.0);

    let warnings = service.warnings().unwrap();
    assert_eq!(warnings, vec!["sale 1 references unknown purchase 1".to_string()]);
}

#[test]
fn list_filters_by_buy_date_inclusively() {
    let storage = MemoryStorage::default();
    let clock = FixedClock::new(date(2024, 1, 1));
    let service = InventoryService::new(&storage, &clock);
    service.buy("Oranges", 0.5, date(2024, 3, 1)).unwrap();
    clock.advance(5).unwrap();
    service.buy("Lemons", 0.4, date(2024, 3, 1)).unwrap();
    clock.advance(5).unwrap();
    service.buy("Grapes", 2.0, date(2024, 3, 1)).unwrap();

    let rows = service
        .list_products(DateRange::new(Some(date(2024, 1, 6)), Some(date(2024, 1, 11))))
        .unwrap();
    let names: Vec<_> = rows.iter().map(|r| r.purchase.product_name.as_str()).collect();
    assert_eq!(names, vec!["Lemons", "Grapes"]);
    assert_eq!(rows[0].days_till_expiration, 50);
    assert!(!rows[0].is_sold());
}

#[test]
fn revenue_sums_per_day_and_matches_total() {
    let storage = MemoryStorage::default();
    let clock = FixedClock::new(date(2024, 1, 1));
    let service = InventoryService::new(&storage, &clock);
    for _ in 0..3 {
        service.buy("Bread", 1.0, date(2024, 2, 1)).unwrap();
    }
    service.sell("Bread", 2.5).unwrap();
    service.sell("Bread", 3.0).unwrap();
    clock.set_today(date(2024, 1, 3)).unwrap();
    service.sell("Bread", 4.0).unwrap();

    let series = service.revenue(DateRange::unbounded()).unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series.get(date(2024, 1, 1)), Some(5.5));
    assert_eq!(series.get(date(2024, 1, 3)), Some(4.0));

    let total = SummaryService::total_revenue(&storage.sales()).unwrap();
    assert_eq!(series.total(), total);

    let first_day = service
        .revenue(DateRange::new(None, Some(date(2024, 1, 2))))
        .unwrap();
    assert_eq!(first_day.total(), 5.5);
}

#[test]
fn total_revenue_rejects_empty_input() {
    let err = SummaryService::total_revenue(&[]).unwrap_err();
    assert!(matches!(err, CoreError::InvalidInput(_)));

    let broken = vec![Sale::new(1, 1, "Apples", f64::NAN, date(2024, 1, 1))];
    assert!(matches!(
        SummaryService::total_revenue(&broken),
        Err(CoreError::InvalidInput(_))
    ));
}

#[test]
fn profit_skips_sales_without_purchase() {
    let purchases = vec![
        Purchase::new(1, "Apples", 1.0, date(2030, 1, 1), date(2024, 1, 1)),
        Purchase::new(2, "Pears", 2.0, date(2030, 1, 1), date(2024, 1, 1)),
    ];
    let sales = vec![
        Sale::new(1, 1, "Apples", 3.0, date(2024, 1, 2)),
        Sale::new(2, 2, "Pears", 1.5, date(2024, 1, 2)),
        Sale::new(3, 9, "Ghost", 100.0, date(2024, 1, 2)),
    ];
    assert_eq!(SummaryService::profit(&purchases, &sales), 1.5);
}

#[test]
fn warnings_report_duplicate_ids() {
    let purchases = vec![
        Purchase::new(1, "Apples", 1.0, date(2030, 1, 1), date(2024, 1, 1)),
        Purchase::new(1, "Pears", 2.0, date(2030, 1, 1), date(2024, 1, 1)),
    ];
    let warnings = ledger_warnings(&purchases, &[]);
    assert_eq!(warnings, vec!["purchase id 1 appears more than once".to_string()]);
}
