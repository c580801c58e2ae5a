pub mod config;
pub mod inventory;
pub mod reports;
pub mod time;

use chrono::NaiveDate;
use superpy_domain::parse_date;

/// clap value parser for `YYYY-MM-DD` arguments.
pub fn date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).map_err(|err| err.to_string())
}

/// clap value parser for prices: finite and not negative.
pub fn price_arg(value: &str) -> Result<f64, String> {
    let price: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if !price.is_finite() || price < 0.0 {
        return Err(format!("`{value}` is not a valid price"));
    }
    Ok(price)
}
