use chrono::NaiveDate;
use superpy_core::Clock;

use crate::cli::{context::AppContext, output, ui::formatting};
use crate::errors::Result;

pub fn advance_time(ctx: &AppContext, days: i64) -> Result<()> {
    let date = ctx.clock().advance(days)?;
    output::success(format!("Current date is now {}", formatting::date(date)));
    Ok(())
}

pub fn set_time(ctx: &AppContext, date: NaiveDate) -> Result<()> {
    ctx.clock().set_today(date)?;
    output::success(format!("Current date is now {}", formatting::date(date)));
    Ok(())
}

pub fn show_time(ctx: &AppContext) -> Result<()> {
    let clock = ctx.clock();
    match clock.persisted()? {
        Some(date) => println!("{}", formatting::date(date)),
        None => println!("{} (system date)", formatting::date(clock.today()?)),
    }
    Ok(())
}
