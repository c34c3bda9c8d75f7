//! Core types, classification, and error handling for budgetsheet
//!
//! This crate provides the value types shared by the pricing, workbook and
//! front-end crates, the token classifier, timezone configuration, and the
//! common error type.

pub mod classify;
pub mod error;
pub mod timezone;
pub mod types;

// Re-export commonly used types
pub use classify::{ValueKind, classify, classify_all};
pub use error::{BudgetError, Result};
pub use types::{Amount, CellValue, ItemPair, PriceRecord, Summary, TAX_RATE, Table, TableMode};
