//! End-to-end budget runs
//!
//! A run reads the price list, computes the records, lays out the table and
//! its summary, and files both into the day's worksheet of the weekly
//! workbook. [`run`] is the only function that touches the filesystem for
//! output; everything before it is pure.

use crate::aggregation::summarize_as;
use crate::config::RunConfig;
use crate::error::Result;
use crate::extract::load_pairs;
use crate::table::build_table;
use budgetsheet_core::types::{Summary, Table, TableMode};
use budgetsheet_pricing::{CostCalculator, PricePolicy};
use budgetsheet_workbook::SheetWriter;
use budgetsheet_workbook::calendar::{sheet_label, week_labels};
use budgetsheet_workbook::workbook::{Workbook, prepare_month_folder, weekly_workbook_path};
use std::path::{Path, PathBuf};
use tracing::info;

/// A price table together with its summary
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetReport {
    pub table: Table,
    pub summary: Summary,
}

impl BudgetReport {
    /// Table rows (header first) followed by the two summary rows
    pub fn to_rows(&self) -> Vec<Vec<budgetsheet_core::types::CellValue>> {
        let mut rows = self.table.to_rows();
        rows.extend(self.summary.to_rows());
        rows
    }
}

/// Where a run filed its report
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub report: BudgetReport,
    /// Workbook file that received the rows
    pub workbook: PathBuf,
    /// Worksheet that received the rows
    pub sheet: String,
    /// Number of weekday worksheets created by this run
    pub sheets_added: usize,
}

/// Read a price list and build its report without writing anything
pub fn build_report(input: &Path, mode: TableMode, policy: PricePolicy) -> Result<BudgetReport> {
    let pairs = load_pairs(input)?;
    let records = CostCalculator::new(policy).compute_costs(&pairs)?;
    let table = build_table(&records, mode);
    let summary = summarize_as(&table, mode)?;

    info!(
        "Built {} report for {} items from '{}'",
        summary.mode,
        table.len(),
        input.display()
    );
    Ok(BudgetReport { table, summary })
}

/// Append a report to `sheet`, table first and summary directly below
pub fn record_into<W: SheetWriter>(writer: &mut W, sheet: &str, report: &BudgetReport) -> Result<()> {
    writer.append_rows(sheet, &report.to_rows())
}

/// Run the whole pipeline for one configuration
///
/// The weekly workbook is created with all seven weekday worksheets on first
/// use; the report goes to the worksheet of `config.date`.
pub fn run(config: &RunConfig) -> Result<RunOutcome> {
    let report = build_report(&config.input, config.mode, config.policy)?;

    prepare_month_folder(&config.save_dir, config.date)?;
    let mut workbook = Workbook::open_or_create(weekly_workbook_path(&config.save_dir, config.date))?;
    let sheets_added = workbook.populate_week(&week_labels(config.date))?;

    let sheet = sheet_label(config.date);
    record_into(&mut workbook, &sheet, &report)?;
    workbook.save()?;

    info!(
        "Recorded {} items in worksheet '{}' of '{}'",
        report.table.len(),
        sheet,
        workbook.path().display()
    );

    Ok(RunOutcome {
        report,
        workbook: workbook.path().to_path_buf(),
        sheet,
        sheets_added,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BudgetError;
    use budgetsheet_core::types::CellValue;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryWriter {
        sheets: HashMap<String, Vec<Vec<CellValue>>>,
    }

    impl SheetWriter for MemoryWriter {
        fn append_rows(&mut self, sheet: &str, rows: &[Vec<CellValue>]) -> Result<()> {
            self.sheets
                .entry(sheet.to_string())
                .or_default()
                .extend_from_slice(rows);
            Ok(())
        }
    }

    fn write_prices(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("prices.txt");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_build_report_formatted() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_prices(dir.path(), "Boots\n180\nCoat\n220\nShirt\n25\n");

        let report = build_report(&input, TableMode::Formatted, PricePolicy::Permissive).unwrap();
        assert_eq!(report.table.len(), 3);
        assert_eq!(report.summary.values[2], CellValue::text("480.25"));
    }

    #[test]
    fn test_record_into_appends_table_then_summary() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_prices(dir.path(), "Coat, 220, Boots, 180");
        let report = build_report(&input, TableMode::Raw, PricePolicy::Permissive).unwrap();

        let mut writer = MemoryWriter::default();
        record_into(&mut writer, "Oct.19.2026", &report).unwrap();

        let rows = &writer.sheets["Oct.19.2026"];
        assert_eq!(rows.len(), 1 + 2 + 2);
        assert_eq!(rows[0][0], CellValue::text("Item"));
        assert_eq!(rows[1][0], CellValue::text("Coat"));
        assert_eq!(rows[3][0], CellValue::text("Number of Items"));
        assert_eq!(rows[4][0], CellValue::Integer(2));
    }

    #[test]
    fn test_strict_policy_rejects_run() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_prices(dir.path(), "Coat, lots");
        let result = build_report(&input, TableMode::Formatted, PricePolicy::Strict);
        assert!(matches!(result, Err(BudgetError::NonNumericPrice { .. })));
    }

    #[test]
    fn test_run_creates_week_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_prices(dir.path(), "Coat, 220, Boots, 180");
        let save_dir = dir.path().join("Budget");
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

        let outcome = run(&RunConfig::new(&input, &save_dir, date)).unwrap();
        assert_eq!(outcome.sheet, "Oct.19.2026");
        assert_eq!(outcome.sheets_added, 7);
        assert_eq!(outcome.workbook, save_dir.join("October").join("week-2026-10-18.xlsx"));
        assert!(outcome.workbook.is_file());

        let workbook = Workbook::open_or_create(&outcome.workbook).unwrap();
        assert_eq!(workbook.sheet_names().len(), 7);
        let rows = workbook.read_rows("Oct.19.2026").unwrap();
        assert_eq!(rows[1], vec!["Coat", "220.00", "248.60", "28.60"]);
        assert!(workbook.read_rows("Oct.20.2026").unwrap().is_empty());
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let save_dir = dir.path().join("Budget");
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

        let result = run(&RunConfig::new(dir.path().join("absent.txt"), &save_dir, date));
        assert!(matches!(result, Err(BudgetError::FileAccess { .. })));
        assert!(!save_dir.exists());
    }
}
