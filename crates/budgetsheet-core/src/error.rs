//! Error types for budgetsheet
//!
//! This module defines the error types used throughout the budgetsheet
//! crates. All errors are derived from `thiserror`; failures from files and
//! third-party crates are wrapped together with the path they concern.
//!
//! # Example
//!
//! ```
//! use budgetsheet_core::error::{BudgetError, Result};
//! use std::path::Path;
//!
//! fn read_prices(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).map_err(|source| BudgetError::FileAccess {
//!         path: path.to_path_buf(),
//!         source,
//!     })
//! }
//!
//! let error = read_prices(Path::new("nonexistent.txt")).unwrap_err();
//! assert!(error.to_string().starts_with("Cannot read nonexistent.txt"));
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for budgetsheet operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// The flat price file could not be read
    #[error("Cannot read {}: {source}", path.display())]
    FileAccess {
        /// The file that could not be read
        path: PathBuf,
        /// The underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// Content is neither comma- nor newline-delimited
    #[error("Unrecognized price list format: expected comma- or newline-delimited item/price pairs")]
    Format,

    /// A cell that must be numeric could not be classified as a number
    #[error("Type error in column '{column}', row {row}: {value:?} is not numeric")]
    Type {
        /// 1-based data row index
        row: usize,
        /// Column header
        column: String,
        /// Offending cell text
        value: String,
    },

    /// Price token rejected under the strict price policy
    #[error("Price {token:?} for item {item:?} is not a number")]
    NonNumericPrice {
        /// Item the price belongs to
        item: String,
        /// The raw price token
        token: String,
    },

    /// Workbook error with file context
    #[error("Workbook error in {}: {error}", path.display())]
    Workbook {
        /// The workbook or worksheet file involved
        path: PathBuf,
        /// The error message
        error: String,
    },

    /// Invalid date format
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    /// Invalid timezone
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience type alias for Results in budgetsheet
///
/// # Example
///
/// ```
/// use budgetsheet_core::Result;
///
/// fn process_data() -> Result<String> {
///     Ok("Processed successfully".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, BudgetError>;
