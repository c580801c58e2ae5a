pub mod commands;
pub mod context;
pub mod output;
pub mod ui;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, CommandFactory, FromArgMatches, Parser, Subcommand};
use superpy_domain::{DateRange, RecordId};
use tracing::debug;

use crate::errors::Result;
use crate::utils::build_info;
use commands::{date_arg, price_arg};
use context::AppContext;

#[derive(Parser, Debug)]
#[command(name = "superpy", version, about = "Track perishable stock, sales, and profit")]
pub struct Cli {
    /// Directory holding the ledger files and superpy.json
    #[arg(long, global = true, env = "SUPERPY_HOME")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
#[command(rename_all = "snake_case")]
pub enum Command {
    /// Buy a product and add it to the inventory
    Buy {
        product_name: String,
        #[arg(value_parser = price_arg)]
        price: f64,
        #[arg(value_parser = date_arg)]
        expiration_date: NaiveDate,
    },
    /// Sell a product from the oldest unexpired stock
    Sell {
        product_name: String,
        #[arg(value_parser = price_arg)]
        price: f64,
    },
    /// List bought products with their sale status
    List(DateWindow),
    /// Show revenue per day
    Revenue(DateWindow),
    /// Show profit of the sales in a period
    Profit(DateWindow),
    /// Chart revenue per day
    Plot(DateWindow),
    /// Move the current date forward (or back, with a negative number)
    AdvanceTime {
        #[arg(allow_negative_numbers = true)]
        days: i64,
    },
    /// Set the current date
    SetTime {
        #[arg(value_parser = date_arg)]
        date: NaiveDate,
    },
    /// Print the current date
    ShowTime,
    /// Delete a bought product by id
    DeleteBought { id: RecordId },
    /// Delete a sold product by id
    DeleteSold { id: RecordId },
    /// Show or change preferences
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print every setting
    Show,
    /// Change one setting
    Set { key: String, value: String },
}

#[derive(Args, Debug, Clone, Copy)]
pub struct DateWindow {
    /// First date to include (YYYY-MM-DD)
    #[arg(long = "start_date", value_parser = date_arg)]
    pub start_date: Option<NaiveDate>,
    /// Last date to include (YYYY-MM-DD)
    #[arg(long = "end_date", value_parser = date_arg)]
    pub end_date: Option<NaiveDate>,
}

impl From<DateWindow> for DateRange {
    fn from(window: DateWindow) -> Self {
        DateRange::new(window.start_date, window.end_date)
    }
}

/// Parses process arguments and runs the selected command.
pub fn run_cli() -> Result<()> {
    let matches = Cli::command()
        .long_version(build_info::long_version())
        .get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit());
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let base_dir = cli.data_dir.unwrap_or_else(|| PathBuf::from("."));
    let mut ctx = AppContext::load(base_dir)?;
    debug!(?command, "dispatching command");

    match command {
        Command::Buy {
            product_name,
            price,
            expiration_date,
        } => commands::inventory::buy(&ctx, &product_name, price, expiration_date),
        Command::Sell {
            product_name,
            price,
        } => commands::inventory::sell(&ctx, &product_name, price),
        Command::List(window) => commands::reports::list(&ctx, window.into()),
        Command::Revenue(window) => commands::reports::revenue(&ctx, window.into()),
        Command::Profit(window) => commands::reports::profit(&ctx, window.into()),
        Command::Plot(window) => commands::reports::plot(&ctx, window.into()),
        Command::AdvanceTime { days } => commands::time::advance_time(&ctx, days),
        Command::SetTime { date } => commands::time::set_time(&ctx, date),
        Command::ShowTime => commands::time::show_time(&ctx),
        Command::DeleteBought { id } => commands::inventory::delete_bought(&ctx, id),
        Command::DeleteSold { id } => commands::inventory::delete_sold(&ctx, id),
        Command::Config(ConfigCommand::Show) => commands::config::show(&ctx),
        Command::Config(ConfigCommand::Set { key, value }) => {
            commands::config::set(&mut ctx, &key, &value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_snake_case_commands_and_windows() {
        let cli = Cli::try_parse_from([
            "superpy",
            "revenue",
            "--start_date",
            "2024-01-01",
            "--end_date",
            "2024-01-31",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Revenue(window)) => {
                let range = DateRange::from(window);
                assert_eq!(range.start, NaiveDate::from_ymd_opt(2024, 1, 1));
                assert_eq!(range.end, NaiveDate::from_ymd_opt(2024, 1, 31));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn advance_time_accepts_negative_days() {
        let cli = Cli::try_parse_from(["superpy", "advance_time", "-3"]).unwrap();
        assert!(matches!(cli.command, Some(Command::AdvanceTime { days: -3 })));
    }

    #[test]
    fn malformed_dates_are_rejected_before_running() {
        assert!(Cli::try_parse_from(["superpy", "buy", "Milk", "1.0", "2024-13-01"]).is_err());
        assert!(Cli::try_parse_from(["superpy", "set_time", "tomorrow"]).is_err());
    }
}
