//! CLI interface for budgetsheet
//!
//! # Example
//!
//! ```bash
//! # File this week's purchases into the weekly workbook
//! budgetsheet record --input prices.txt
//!
//! # Preview the raw table without touching any workbook
//! budgetsheet show --input prices.txt --raw
//!
//! # List the worksheets of the week containing a date
//! budgetsheet week --date 2026-10-19 --json
//! ```

use budgetsheet_core::types::TableMode;
use budgetsheet_pricing::PricePolicy;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Compute tax-adjusted budget tables and file them into weekly workbooks
#[derive(Parser, Debug, Clone)]
#[command(name = "budgetsheet")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Show informational output (default is quiet mode with only warnings and errors)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Keep full-precision numeric cells instead of two-decimal text
    #[arg(long, global = true)]
    pub raw: bool,

    /// Reject price lists with non-numeric prices instead of counting them as 0
    #[arg(long, global = true)]
    pub strict_prices: bool,

    /// Timezone deciding what "today" is (e.g. "America/Toronto", "UTC").
    /// If not specified, uses the system's local timezone
    #[arg(long, short = 'z', global = true)]
    pub timezone: Option<String>,

    /// Use UTC (overrides --timezone)
    #[arg(long, global = true)]
    pub utc: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Table representation selected by `--raw`
    pub fn mode(&self) -> TableMode {
        if self.raw {
            TableMode::Raw
        } else {
            TableMode::Formatted
        }
    }

    /// Price policy selected by `--strict-prices`
    pub fn policy(&self) -> PricePolicy {
        if self.strict_prices {
            PricePolicy::Strict
        } else {
            PricePolicy::Permissive
        }
    }
}

/// Arguments shared by commands that read a price list
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Flat price list alternating item names and prices
    #[arg(long, short = 'i', env = "BUDGETSHEET_INPUT")]
    pub input: PathBuf,
}

/// Arguments for the record command
#[derive(Args, Debug, Clone)]
pub struct RecordArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Root folder holding the month folders (default: <documents>/Budget)
    #[arg(long, short = 's', env = "BUDGETSHEET_DIR")]
    pub save_dir: Option<PathBuf>,

    /// Day to record under (YYYY-MM-DD, default: today)
    #[arg(long, short = 'd')]
    pub date: Option<String>,
}

/// Arguments for the week command
#[derive(Args, Debug, Clone)]
pub struct WeekArgs {
    /// Any day of the week to list (YYYY-MM-DD, default: today)
    #[arg(long, short = 'd')]
    pub date: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compute the table and summary and append them to the day's worksheet
    Record(RecordArgs),

    /// Print the table and summary without writing anything
    Show(InputArgs),

    /// List the worksheets of a week
    Week(WeekArgs),
}
