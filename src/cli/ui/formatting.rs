use chrono::NaiveDate;
use superpy_domain::format_date;

/// Formats a price with two decimals behind the configured symbol.
pub fn money(symbol: &str, amount: f64) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, -amount)
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

pub fn date(value: NaiveDate) -> String {
    format_date(value)
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
