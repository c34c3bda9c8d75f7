//! Core domain types for budgetsheet
//!
//! This module contains the value types that flow through the pipeline:
//! extracted item/price pairs, computed price records, table cells, and the
//! table and summary artifacts handed to the worksheet writer.

use crate::classify::{self, ValueKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed sales tax rate applied to every item (13%)
pub const TAX_RATE: f64 = 0.13;

/// Column headers of every price table, in order
pub const TABLE_HEADER: [&str; 4] = ["Item", "Gross Price", "Price After Tax", "Taxes Paid"];

/// Header of the item-count column of a summary
pub const ITEM_COUNT_HEADER: &str = "Number of Items";

/// An item name and its unparsed price token, as read from the price list
///
/// # Examples
/// ```
/// use budgetsheet_core::types::ItemPair;
///
/// let pair = ItemPair::new("Laptop", "400");
/// assert_eq!(pair.item, "Laptop");
/// assert_eq!(pair.price, "400");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPair {
    /// Item name
    pub item: String,
    /// Price token exactly as extracted (trimmed)
    pub price: String,
}

impl ItemPair {
    /// Create a new pair from any string-like values
    pub fn new(item: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            price: price.into(),
        }
    }
}

/// A gross price, keeping the numeric shape its token was written in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    /// Whole-number price such as `220`
    Integer(i64),
    /// Decimal price such as `19.99`
    Decimal(f64),
}

impl Amount {
    /// The amount as a float, for arithmetic and ordering
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Integer(value) => value as f64,
            Self::Decimal(value) => value,
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::Integer(0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Decimal(value) => write!(f, "{value}"),
        }
    }
}

impl From<Amount> for CellValue {
    fn from(amount: Amount) -> Self {
        match amount {
            Amount::Integer(value) => CellValue::Integer(value),
            Amount::Decimal(value) => CellValue::Decimal(value),
        }
    }
}

/// Tax-adjusted price details for a single item
///
/// The after-tax price and the tax paid are derived from the gross price once,
/// at construction, and the record cannot be changed afterwards.
///
/// # Examples
/// ```
/// use budgetsheet_core::types::{Amount, PriceRecord, TAX_RATE};
///
/// let record = PriceRecord::new("Coat", Amount::Integer(220), TAX_RATE);
/// assert!((record.after_tax_price() - 248.6).abs() < 1e-9);
/// assert!((record.tax_paid() - 28.6).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    item: String,
    gross_price: Amount,
    after_tax_price: f64,
    tax_paid: f64,
}

impl PriceRecord {
    /// Compute a record for `item` priced at `gross_price` under `tax_rate`
    pub fn new(item: impl Into<String>, gross_price: Amount, tax_rate: f64) -> Self {
        let gross = gross_price.as_f64();
        let after_tax_price = gross * (1.0 + tax_rate);
        Self {
            item: item.into(),
            gross_price,
            after_tax_price,
            tax_paid: after_tax_price - gross,
        }
    }

    pub fn item(&self) -> &str {
        &self.item
    }

    pub fn gross_price(&self) -> Amount {
        self.gross_price
    }

    pub fn after_tax_price(&self) -> f64 {
        self.after_tax_price
    }

    pub fn tax_paid(&self) -> f64 {
        self.tax_paid
    }
}

/// A single worksheet cell
///
/// Serializes untagged, so JSON output carries plain strings and numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl CellValue {
    /// Create a text cell
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Classify the cell: numeric cells carry their own tag, text is classified
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Integer(_) => ValueKind::Integer,
            Self::Decimal(_) => ValueKind::Decimal,
            Self::Text(text) => classify::classify(Some(text)),
        }
    }

    /// Numeric value of a numeric cell; `None` for text
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Integer(value) => Some(value as f64),
            Self::Decimal(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// Text of a text cell; `None` for numbers
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Decimal(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

/// Representation of a table or summary
///
/// # Examples
/// ```
/// use budgetsheet_core::types::TableMode;
/// use std::str::FromStr;
///
/// let mode = TableMode::from_str("raw").unwrap();
/// assert_eq!(mode, TableMode::Raw);
/// assert_eq!(TableMode::Formatted.to_string(), "formatted");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableMode {
    /// Numeric cells, full precision
    Raw,
    /// Two-decimal-place text cells
    #[default]
    Formatted,
}

impl fmt::Display for TableMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw => write!(f, "raw"),
            Self::Formatted => write!(f, "formatted"),
        }
    }
}

impl std::str::FromStr for TableMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "raw" => Ok(Self::Raw),
            "formatted" | "view" => Ok(Self::Formatted),
            _ => Err(format!("Invalid table mode: {s}")),
        }
    }
}

/// A header row plus ordered data rows
///
/// Tables built by the pipeline always carry [`TABLE_HEADER`], but any
/// header/row combination can be wrapped so externally produced rows can be
/// summarized too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(header: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { header, rows }
    }

    /// A table with the standard price header
    pub fn with_price_header(rows: Vec<Vec<CellValue>>) -> Self {
        Self::new(TABLE_HEADER.iter().map(|h| h.to_string()).collect(), rows)
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Data rows, header excluded
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header followed by the data rows, ready to append to a worksheet
    pub fn to_rows(&self) -> Vec<Vec<CellValue>> {
        let mut rows = Vec::with_capacity(self.rows.len() + 1);
        rows.push(self.header.iter().map(|h| CellValue::text(h.as_str())).collect());
        rows.extend(self.rows.iter().cloned());
        rows
    }
}

/// Item count and per-column totals of a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Representation the totals are expressed in
    pub mode: TableMode,
    /// `Number of Items` followed by `Total <column>` per price column
    pub header: Vec<String>,
    /// Item count followed by one total per price column
    pub values: Vec<CellValue>,
}

impl Summary {
    /// The two summary rows, header first
    pub fn to_rows(&self) -> Vec<Vec<CellValue>> {
        vec![
            self.header
                .iter()
                .map(|h| CellValue::text(h.as_str()))
                .collect(),
            self.values.clone(),
        ]
    }
}
