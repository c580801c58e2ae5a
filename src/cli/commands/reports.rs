use superpy_core::SummaryService;
use superpy_domain::{DateRange, InventoryRow};

use crate::cli::{
    context::AppContext,
    output,
    ui::{formatting, render_revenue_chart, Table, TableColumn},
};
use crate::errors::Result;

pub fn list(ctx: &AppContext, range: DateRange) -> Result<()> {
    let inventory = ctx.inventory();
    for message in inventory.warnings()? {
        output::warning(message);
    }

    let rows = inventory.list_products(range)?;
    if rows.is_empty() {
        output::info("No products bought in this period.");
        return Ok(());
    }
    println!("{}", inventory_table(&rows, ctx.currency()).render());
    Ok(())
}

pub fn inventory_table(rows: &[InventoryRow], symbol: &str) -> Table {
    let mut table = Table::new(vec![
        TableColumn::right("ID"),
        TableColumn::left("Product").max_width(32),
        TableColumn::left("Buy date"),
        TableColumn::right("Buy price"),
        TableColumn::left("Expiration date"),
        TableColumn::right("Days till exp."),
        TableColumn::left("Sold"),
        TableColumn::left("Sold date"),
        TableColumn::right("Sold price"),
    ]);
    for row in rows {
        let purchase = &row.purchase;
        let sale = row.sale.as_ref();
        table.push_row(vec![
            purchase.id.to_string(),
            purchase.product_name.clone(),
            formatting::date(purchase.buy_date),
            formatting::money(symbol, purchase.buy_price),
            formatting::date(purchase.expiration_date),
            row.days_till_expiration.to_string(),
            formatting::yes_no(row.is_sold()).to_string(),
            sale.map(|s| formatting::date(s.sell_date)).unwrap_or_default(),
            sale.map(|s| formatting::money(symbol, s.sell_price))
                .unwrap_or_default(),
        ]);
    }
    table
}

pub fn revenue(ctx: &AppContext, range: DateRange) -> Result<()> {
    let inventory = ctx.inventory();
    let series = inventory.revenue(range)?;
    if series.is_empty() {
        output::info("No sales recorded in this period.");
        return Ok(());
    }

    let symbol = ctx.currency();
    let mut table = Table::new(vec![TableColumn::left("Date"), TableColumn::right("Revenue")]);
    for entry in series.iter() {
        table.push_row(vec![
            formatting::date(entry.date),
            formatting::money(symbol, entry.amount),
        ]);
    }
    println!("{}", table.render());

    let total = SummaryService::total_revenue(&inventory.sales_within(range)?)?;
    println!("Total revenue: {}", formatting::money(symbol, total));
    Ok(())
}

pub fn profit(ctx: &AppContext, range: DateRange) -> Result<()> {
    let profit = ctx.inventory().profit(range)?;
    let mut table = Table::new(vec![TableColumn::right("Profit")]);
    table.push_row(vec![formatting::money(ctx.currency(), profit)]);
    println!("{}", table.render());
    Ok(())
}

pub fn plot(ctx: &AppContext, range: DateRange) -> Result<()> {
    let series = ctx.inventory().revenue(range)?;
    if series.is_empty() {
        output::info("No sales recorded in this period.");
        return Ok(());
    }
    output::section("Revenue over time");
    println!("{}", render_revenue_chart(&series, ctx.currency()));
    Ok(())
}
