//! Terminal output for budgetsheet
//!
//! Formatters render a price table with its summary, and the worksheet labels
//! of a week, in one of two formats:
//! - Table format for reading in a terminal
//! - JSON format for scripts and other tools
//!
//! # Examples
//!
//! ```
//! use budgetsheet::aggregation::summarize;
//! use budgetsheet::output::get_formatter;
//! use budgetsheet::table::build_table;
//! use budgetsheet_core::types::{Amount, PriceRecord, TableMode, TAX_RATE};
//!
//! let records = vec![PriceRecord::new("Coat", Amount::Integer(220), TAX_RATE)];
//! let table = build_table(&records, TableMode::Formatted);
//! let summary = summarize(&table)?;
//!
//! let formatter = get_formatter(false, false);
//! assert!(formatter.format_report(&table, &summary).contains("$248.60"));
//!
//! let formatter = get_formatter(true, false);
//! assert!(formatter.format_report(&table, &summary).contains("\"summary\""));
//! # Ok::<(), budgetsheet::BudgetError>(())
//! ```

use crate::table::format_amount;
use budgetsheet_core::types::{CellValue, Summary, Table};
use colored::Colorize;
use prettytable::{Cell, Row, format, row};
use serde_json::json;

/// Renders budget data for display
pub trait OutputFormatter {
    /// Format a price table followed by its summary
    fn format_report(&self, table: &Table, summary: &Summary) -> String;

    /// Format the worksheet labels of a week, marking `current`
    fn format_week(&self, labels: &[String], current: &str) -> String;
}

/// Human-readable tables
///
/// Price cells are shown with a `$` prefix; the header and summary rows are
/// bold.
pub struct TableFormatter {
    /// Highlight the current day in week listings
    pub color: bool,
}

impl TableFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// `$` and two decimals for numbers; formatted text keeps its digits
    fn format_currency(cell: &CellValue) -> String {
        match cell {
            CellValue::Integer(_) | CellValue::Decimal(_) => {
                format!("${}", format_amount(cell.as_f64().unwrap_or_default()))
            }
            CellValue::Text(text) if cell.kind().is_numeric() => format!("${text}"),
            CellValue::Text(text) => text.clone(),
        }
    }

    fn titles(header: &[String]) -> Row {
        Row::new(header.iter().map(|h| Cell::new(h).style_spec("b")).collect())
    }
}

impl OutputFormatter for TableFormatter {
    fn format_report(&self, table: &Table, summary: &Summary) -> String {
        let mut prices = prettytable::Table::new();
        prices.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
        prices.set_titles(Self::titles(table.header()));

        for row in table.rows() {
            let mut cells = row.iter();
            let item = cells.next().map(ToString::to_string).unwrap_or_default();
            let mut line = vec![Cell::new(&item)];
            line.extend(cells.map(|c| Cell::new(&Self::format_currency(c)).style_spec("r")));
            prices.add_row(Row::new(line));
        }

        let mut totals = prettytable::Table::new();
        totals.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
        totals.set_titles(Self::titles(&summary.header));

        let mut values = summary.values.iter();
        let count = values.next().map(ToString::to_string).unwrap_or_default();
        let mut line = vec![Cell::new(&count).style_spec("bc")];
        line.extend(values.map(|v| Cell::new(&Self::format_currency(v)).style_spec("br")));
        totals.add_row(Row::new(line));

        format!("{prices}\n{totals}")
    }

    fn format_week(&self, labels: &[String], current: &str) -> String {
        let mut table = prettytable::Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
        table.set_titles(row![b -> "Day", b -> "Worksheet"]);

        for (day, label) in WEEKDAYS.iter().zip(labels) {
            let shown = if label == current && self.color {
                label.green().bold().to_string()
            } else if label == current {
                format!("{label} *")
            } else {
                label.clone()
            };
            table.add_row(row![day, shown]);
        }

        table.to_string()
    }
}

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Machine-readable JSON
///
/// Cells keep their native JSON types: numbers stay numbers in raw tables and
/// formatted tables stay strings.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, table: &Table, summary: &Summary) -> String {
        let output = json!({
            "mode": summary.mode.to_string(),
            "header": table.header(),
            "rows": table.rows(),
            "summary": {
                "header": summary.header,
                "values": summary.values,
            },
        });

        serde_json::to_string_pretty(&output).unwrap_or_default()
    }

    fn format_week(&self, labels: &[String], current: &str) -> String {
        let output = json!({
            "week": WEEKDAYS.iter().zip(labels).map(|(day, label)| json!({
                "day": day,
                "sheet": label,
                "current": label == current,
            })).collect::<Vec<_>>(),
        });

        serde_json::to_string_pretty(&output).unwrap_or_default()
    }
}

/// Pick the formatter for the `--json` flag
pub fn get_formatter(json: bool, color: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(TableFormatter::new(color))
    }
}
