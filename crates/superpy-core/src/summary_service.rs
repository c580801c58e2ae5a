//! Revenue and profit aggregation over sale collections.

use superpy_domain::{revenue_ceiling, revenue_floor, DateRange, Purchase, RevenueSeries, Sale};

use crate::CoreError;

pub struct SummaryService;

impl SummaryService {
    /// Sales whose sell date falls inside `range`. Unset bounds default to
    /// 1900-01-01 and 9999-12-31.
    pub fn sales_within(sales: &[Sale], range: DateRange) -> Vec<Sale> {
        let window = range.with_defaults(revenue_floor(), revenue_ceiling());
        sales
            .iter()
            .filter(|sale| window.contains(sale.sell_date))
            .cloned()
            .collect()
    }

    /// Sums sell prices per sell date for the sales inside `range`.
    pub fn revenue_by_date(sales: &[Sale], range: DateRange) -> RevenueSeries {
        Self::sales_within(sales, range)
            .into_iter()
            .map(|sale| (sale.sell_date, sale.sell_price))
            .collect()
    }

    /// Total of all sell prices. An empty collection or a non-numeric price
    /// is rejected rather than reported as zero.
    pub fn total_revenue(sales: &[Sale]) -> Result<f64, CoreError> {
        if sales.is_empty() {
            return Err(CoreError::InvalidInput("no sales provided".into()));
        }
        let mut revenue = 0.0;
        for sale in sales {
            if !sale.sell_price.is_finite() {
                return Err(CoreError::InvalidInput(format!(
                    "sale {} has no usable sell price",
                    sale.id
                )));
            }
            revenue += sale.sell_price;
        }
        Ok(revenue)
    }

    /// Sum of `sell_price - buy_price` for each sale whose purchase still
    /// exists. Sales with a dangling purchase reference contribute nothing.
    pub fn profit(purchases: &[Purchase], sales: &[Sale]) -> f64 {
        sales
            .iter()
            .filter_map(|sale| {
                purchases
                    .iter()
                    .find(|purchase| purchase.id == sale.purchase_id)
                    .map(|purchase| sale.sell_price - purchase.buy_price)
            })
            .sum()
    }
}
