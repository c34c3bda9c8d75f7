//! Summary aggregation
//!
//! Produces the item count and per-column totals of a price table. The
//! aggregator first works out which representation the table is in by
//! looking at its cells, then totals it in that same representation:
//!
//! - raw tables get numeric totals rounded to two decimals
//! - formatted tables get two-decimal text totals and a text item count
//!
//! # Examples
//!
//! ```
//! use budgetsheet::aggregation::summarize;
//! use budgetsheet_core::types::{CellValue, Table};
//!
//! let table = Table::with_price_header(vec![
//!     vec!["Coat".into(), "220.00".into(), "248.60".into(), "28.60".into()],
//!     vec!["Boots".into(), "180.00".into(), "203.40".into(), "23.40".into()],
//! ]);
//!
//! let summary = summarize(&table)?;
//! assert_eq!(summary.header[0], "Number of Items");
//! assert_eq!(summary.values[0], CellValue::text("2"));
//! assert_eq!(summary.values[1], CellValue::text("400.00"));
//! # Ok::<(), budgetsheet::BudgetError>(())
//! ```

use crate::error::{BudgetError, Result};
use crate::table::format_amount;
use budgetsheet_core::classify::is_two_place_decimal;
use budgetsheet_core::types::{CellValue, ITEM_COUNT_HEADER, Summary, Table, TableMode};
use tracing::{debug, warn};

/// Work out the representation of a table from its price cells
///
/// A table is formatted when it has rows and every price cell (every cell
/// after the item column) is text with exactly two decimal places. Anything
/// else, including an empty table, is raw.
pub fn detect_mode(table: &Table) -> TableMode {
    let mut price_cells = table.rows().iter().flat_map(|row| row.iter().skip(1)).peekable();

    let formatted = price_cells.peek().is_some()
        && price_cells.all(|cell| cell.as_text().is_some_and(is_two_place_decimal));

    if formatted {
        TableMode::Formatted
    } else {
        TableMode::Raw
    }
}

/// Summarize a table in the representation its cells show
///
/// # Errors
///
/// Returns [`BudgetError::Type`] when a raw table holds a price cell that is
/// not a number.
pub fn summarize(table: &Table) -> Result<Summary> {
    let mode = detect_mode(table);
    debug!("Detected {} table with {} rows", mode, table.len());
    aggregate(table, mode)
}

/// Summarize a table the caller declares to be in `declared` form
///
/// The cells have the final word: when they disagree with the declaration
/// the detected representation is used and a warning is logged.
pub fn summarize_as(table: &Table, declared: TableMode) -> Result<Summary> {
    let detected = detect_mode(table);
    if detected != declared && !table.is_empty() {
        warn!(
            "Table declared {} but its cells are {}; summarizing as {}",
            declared, detected, detected
        );
    }
    aggregate(table, detected)
}

fn aggregate(table: &Table, mode: TableMode) -> Result<Summary> {
    let columns = table.header().len().saturating_sub(1);
    let mut totals = vec![0.0_f64; columns];

    for (index, row) in table.rows().iter().enumerate() {
        for (column, cell) in row.iter().enumerate().skip(1) {
            let value = cell_amount(table, index, column, cell, mode)?;
            if let Some(total) = totals.get_mut(column - 1) {
                *total += value;
            }
        }
    }

    let count = table.len();
    let values = match mode {
        TableMode::Raw => std::iter::once(CellValue::Integer(count as i64))
            .chain(totals.into_iter().map(|t| CellValue::Decimal(round_cents(t))))
            .collect(),
        TableMode::Formatted => std::iter::once(CellValue::Text(count.to_string()))
            .chain(totals.into_iter().map(|t| CellValue::Text(format_amount(t))))
            .collect(),
    };

    Ok(Summary {
        mode,
        header: summary_header(table.header()),
        values,
    })
}

/// `Number of Items` followed by `Total <column>` for each price column
pub fn summary_header(table_header: &[String]) -> Vec<String> {
    std::iter::once(ITEM_COUNT_HEADER.to_string())
        .chain(table_header.iter().skip(1).map(|h| format!("Total {h}")))
        .collect()
}

/// Round to two decimal places the way formatted cells are rendered
///
/// Rounds the exact binary value with ties to even, so a raw total always
/// equals the number shown by its formatted counterpart.
pub fn round_cents(value: f64) -> f64 {
    format_amount(value).parse().unwrap_or(value)
}

fn cell_amount(
    table: &Table,
    row: usize,
    column: usize,
    cell: &CellValue,
    mode: TableMode,
) -> Result<f64> {
    let parsed = match (cell, mode) {
        (CellValue::Text(text), TableMode::Raw) if cell.kind().is_numeric() => text.parse().ok(),
        (CellValue::Text(text), TableMode::Formatted) => text.parse().ok(),
        _ => cell.as_f64(),
    };

    parsed.ok_or_else(|| BudgetError::Type {
        row: row + 1,
        column: table
            .header()
            .get(column)
            .cloned()
            .unwrap_or_else(|| format!("#{}", column + 1)),
        value: cell.to_string(),
    })
}
