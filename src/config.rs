//! Resolved run configuration
//!
//! The CLI gathers options from flags and environment variables; this module
//! turns them into the concrete values a run works with (paths, the day to
//! record under, table mode, price policy) so the pipeline never reads global
//! state.

use crate::cli::{Cli, RecordArgs};
use crate::error::{BudgetError, Result};
use budgetsheet_core::timezone::TimezoneConfig;
use budgetsheet_core::types::TableMode;
use budgetsheet_pricing::PricePolicy;
use budgetsheet_workbook::calendar::parse_date;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Folder created under the documents directory when no save dir is given
pub const DEFAULT_FOLDER: &str = "Budget";

/// Everything one `record` run needs
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Flat price list to read
    pub input: PathBuf,
    /// Root folder holding the month folders
    pub save_dir: PathBuf,
    /// Day whose worksheet receives the figures
    pub date: NaiveDate,
    pub mode: TableMode,
    pub policy: PricePolicy,
}

impl RunConfig {
    pub fn new(input: impl Into<PathBuf>, save_dir: impl Into<PathBuf>, date: NaiveDate) -> Self {
        Self {
            input: input.into(),
            save_dir: save_dir.into(),
            date,
            mode: TableMode::default(),
            policy: PricePolicy::default(),
        }
    }

    pub fn with_mode(mut self, mode: TableMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_policy(mut self, policy: PricePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Resolve the options of a `record` command
    pub fn from_cli(cli: &Cli, args: &RecordArgs, tz: &TimezoneConfig) -> Result<Self> {
        let save_dir = match &args.save_dir {
            Some(dir) => dir.clone(),
            None => default_save_dir()?,
        };
        let date = resolve_date(args.date.as_deref(), tz)?;

        let config = Self::new(&args.input.input, save_dir, date)
            .with_mode(cli.mode())
            .with_policy(cli.policy());
        debug!("Resolved run configuration: {:?}", config);
        Ok(config)
    }

    pub fn input(&self) -> &Path {
        &self.input
    }
}

/// `<documents>/Budget`, or `<home>/Budget` where there is no documents folder
pub fn default_save_dir() -> Result<PathBuf> {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join(DEFAULT_FOLDER))
        .ok_or_else(|| {
            BudgetError::InvalidArgument(
                "Cannot locate a documents or home folder; pass --save-dir".to_string(),
            )
        })
}

/// The explicit `YYYY-MM-DD` date, or today in `tz`
pub fn resolve_date(date: Option<&str>, tz: &TimezoneConfig) -> Result<NaiveDate> {
    match date {
        Some(value) => parse_date(value),
        None => Ok(tz.today()),
    }
}
