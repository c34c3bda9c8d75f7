//! Price table construction
//!
//! Lays computed price records out as a [`Table`], most expensive item
//! first, in either representation:
//!
//! - [`TableMode::Raw`]: numeric cells at full precision
//! - [`TableMode::Formatted`]: two-decimal-place text cells
//!
//! # Examples
//!
//! ```
//! use budgetsheet::table::build_table;
//! use budgetsheet_core::types::{Amount, CellValue, PriceRecord, TableMode, TAX_RATE};
//!
//! let records = vec![
//!     PriceRecord::new("Shirt", Amount::Integer(25), TAX_RATE),
//!     PriceRecord::new("Coat", Amount::Integer(220), TAX_RATE),
//! ];
//!
//! let table = build_table(&records, TableMode::Formatted);
//! assert_eq!(table.rows()[0][0], CellValue::text("Coat"));
//! assert_eq!(table.rows()[0][2], CellValue::text("248.60"));
//! ```

use budgetsheet_core::types::{CellValue, PriceRecord, Table, TableMode};
use tracing::debug;

/// Render a number as a two-decimal-place cell text
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

/// Build a table from `records`, sorted by gross price, highest first
///
/// The sort is stable: records with equal gross prices keep their input
/// order, and no record is ever dropped.
pub fn build_table(records: &[PriceRecord], mode: TableMode) -> Table {
    let mut ordered: Vec<&PriceRecord> = records.iter().collect();
    ordered.sort_by(|a, b| {
        b.gross_price()
            .as_f64()
            .total_cmp(&a.gross_price().as_f64())
    });

    let rows = ordered
        .into_iter()
        .map(|record| match mode {
            TableMode::Raw => raw_row(record),
            TableMode::Formatted => formatted_row(record),
        })
        .collect();

    debug!("Built {} table with {} rows", mode, records.len());
    Table::with_price_header(rows)
}

fn raw_row(record: &PriceRecord) -> Vec<CellValue> {
    vec![
        CellValue::text(record.item()),
        record.gross_price().into(),
        CellValue::Decimal(record.after_tax_price()),
        CellValue::Decimal(record.tax_paid()),
    ]
}

fn formatted_row(record: &PriceRecord) -> Vec<CellValue> {
    vec![
        CellValue::text(record.item()),
        CellValue::Text(format_amount(record.gross_price().as_f64())),
        CellValue::Text(format_amount(record.after_tax_price())),
        CellValue::Text(format_amount(record.tax_paid())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use budgetsheet_core::types::{Amount, TAX_RATE};

    fn records(items: &[(&str, Amount)]) -> Vec<PriceRecord> {
        items
            .iter()
            .map(|(item, gross)| PriceRecord::new(*item, *gross, TAX_RATE))
            .collect()
    }

    fn scenario() -> Vec<PriceRecord> {
        records(&[
            ("Boots", Amount::Integer(180)),
            ("Coat", Amount::Integer(220)),
            ("Shirt", Amount::Integer(25)),
        ])
    }

    fn items(table: &Table) -> Vec<String> {
        table.rows().iter().map(|row| row[0].to_string()).collect()
    }

    #[test]
    fn test_raw_table_sorted_descending() {
        let table = build_table(&scenario(), TableMode::Raw);

        assert_eq!(table.header(), ["Item", "Gross Price", "Price After Tax", "Taxes Paid"]);
        assert_eq!(items(&table), vec!["Coat", "Boots", "Shirt"]);

        let coat = &table.rows()[0];
        assert_eq!(coat[1], CellValue::Integer(220));
        assert!((coat[2].as_f64().unwrap() - 248.6).abs() < 1e-9);
        assert!((coat[3].as_f64().unwrap() - 28.6).abs() < 1e-9);

        let shirt = &table.rows()[2];
        assert_eq!(shirt[1], CellValue::Integer(25));
        assert!((shirt[2].as_f64().unwrap() - 28.25).abs() < 1e-9);
        assert!((shirt[3].as_f64().unwrap() - 3.25).abs() < 1e-9);
    }

    #[test]
    fn test_formatted_table() {
        let table = build_table(&scenario(), TableMode::Formatted);
        let rows: Vec<Vec<String>> = table
            .rows()
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect();
        assert_eq!(
            rows,
            vec![
                vec!["Coat", "220.00", "248.60", "28.60"],
                vec!["Boots", "180.00", "203.40", "23.40"],
                vec!["Shirt", "25.00", "28.25", "3.25"],
            ]
        );
        assert!(table.rows().iter().flatten().all(|c| c.as_text().is_some()));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let table = build_table(
            &records(&[
                ("Mug", Amount::Integer(2)),
                ("Sweater", Amount::Integer(40)),
                ("Shoes", Amount::Integer(40)),
                ("Pen", Amount::Decimal(2.0)),
                ("Hat", Amount::Integer(40)),
            ]),
            TableMode::Raw,
        );
        assert_eq!(items(&table), vec!["Sweater", "Shoes", "Hat", "Mug", "Pen"]);
    }

    #[test]
    fn test_duplicates_are_not_collapsed() {
        let input = records(&[("Mug", Amount::Integer(2)), ("Mug", Amount::Integer(2))]);
        let table = build_table(&input, TableMode::Formatted);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_mixed_integer_and_decimal_prices() {
        let table = build_table(
            &records(&[("Pen", Amount::Decimal(2.5)), ("Mug", Amount::Integer(3))]),
            TableMode::Raw,
        );
        assert_eq!(items(&table), vec!["Mug", "Pen"]);
        assert_eq!(table.rows()[1][1], CellValue::Decimal(2.5));
    }

    #[test]
    fn test_build_is_idempotent() {
        let records = scenario();
        assert_eq!(
            build_table(&records, TableMode::Raw),
            build_table(&records, TableMode::Raw)
        );
    }

    #[test]
    fn test_empty_table() {
        let table = build_table(&[], TableMode::Raw);
        assert!(table.is_empty());
        assert_eq!(table.to_rows().len(), 1);
    }

    #[test]
    fn test_format_amount_rounding() {
        assert_eq!(format_amount(28.249999999999996), "28.25");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(19.99 * (1.0 + TAX_RATE)), "22.59");
    }
}
