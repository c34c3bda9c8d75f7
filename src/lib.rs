//! budgetsheet - Tax-adjusted budget tables from a flat price list
//!
//! This library provides functionality to:
//! - Extract item/price pairs from comma- or newline-delimited text
//! - Compute gross, after-tax and tax-paid figures at a fixed 13% rate
//! - Lay the figures out as a raw or two-decimal table, most expensive first
//! - Summarize a table in the representation it is in
//! - File table and summary into the day's worksheet of a weekly workbook
//!
//! # Examples
//!
//! ```
//! use budgetsheet::{build_table, compute_costs, extract_pairs, summarize};
//! use budgetsheet_core::types::TableMode;
//!
//! let pairs = extract_pairs("Boots\n180\nCoat\n220\nShirt\n25")?;
//! let records = compute_costs(&pairs);
//! let table = build_table(&records, TableMode::Formatted);
//! let summary = summarize(&table)?;
//!
//! assert_eq!(table.rows()[0][0].to_string(), "Coat");
//! let totals: Vec<String> = summary.values.iter().map(|v| v.to_string()).collect();
//! assert_eq!(totals, ["3", "425.00", "480.25", "55.25"]);
//! # Ok::<(), budgetsheet::BudgetError>(())
//! ```

pub mod aggregation;
pub mod cli;
pub mod config;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod table;

pub use budgetsheet_core::error;

// Re-export commonly used types
pub use aggregation::{summarize, summarize_as};
pub use budgetsheet_pricing::compute_costs;
pub use error::{BudgetError, Result};
pub use extract::{extract_pairs, load_pairs};
pub use table::build_table;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
