use chrono::NaiveDate;
use superpy_domain::RecordId;

use crate::cli::{context::AppContext, output, ui::formatting};
use crate::errors::Result;

pub fn buy(
    ctx: &AppContext,
    product_name: &str,
    price: f64,
    expiration_date: NaiveDate,
) -> Result<()> {
    let purchase = ctx.inventory().buy(product_name, price, expiration_date)?;
    output::success(format!(
        "Bought {} for {} (id {}, expires {})",
        purchase.product_name,
        formatting::money(ctx.currency(), purchase.buy_price),
        purchase.id,
        formatting::date(purchase.expiration_date)
    ));
    Ok(())
}

pub fn sell(ctx: &AppContext, product_name: &str, price: f64) -> Result<()> {
    match ctx.inventory().sell(product_name, price)? {
        Some(sale) => output::success(format!(
            "Sold {} for {} (sale id {}, from purchase {})",
            sale.product_name,
            formatting::money(ctx.currency(), sale.sell_price),
            sale.id,
            sale.purchase_id
        )),
        None => output::warning(format!(
            "Cannot sell {product_name}: it is either not in stock or expired."
        )),
    }
    Ok(())
}

pub fn delete_bought(ctx: &AppContext, id: RecordId) -> Result<()> {
    match ctx.inventory().delete_purchase(id)? {
        Some(purchase) => output::success(format!(
            "Deleted purchase {} ({})",
            purchase.id, purchase.product_name
        )),
        None => output::warning(format!("No purchase with id {id} found in stock.")),
    }
    Ok(())
}

pub fn delete_sold(ctx: &AppContext, id: RecordId) -> Result<()> {
    match ctx.inventory().delete_sale(id)? {
        Some(sale) => output::success(format!(
            "Deleted sale {} ({})",
            sale.id, sale.product_name
        )),
        None => output::warning(format!("No sale with id {id} found in sold products.")),
    }
    Ok(())
}
