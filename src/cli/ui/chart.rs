use superpy_domain::RevenueSeries;

use crate::cli::ui::formatting;

const BAR_WIDTH: usize = 40;

/// Renders one horizontal bar per date, scaled to the largest daily revenue.
pub fn render_revenue_chart(series: &RevenueSeries, symbol: &str) -> String {
    let max = series.max_amount().unwrap_or(0.0);
    let mut lines = Vec::with_capacity(series.len());
    for entry in series.iter() {
        let filled = if max > 0.0 && entry.amount > 0.0 {
            ((entry.amount / max) * BAR_WIDTH as f64).round().max(1.0) as usize
        } else {
            0
        };
        lines.push(format!(
            "{} | {:<width$} {}",
            formatting::date(entry.date),
            "#".repeat(filled.min(BAR_WIDTH)),
            formatting::money(symbol, entry.amount),
            width = BAR_WIDTH
        ));
    }
    lines.join("\n")
}
