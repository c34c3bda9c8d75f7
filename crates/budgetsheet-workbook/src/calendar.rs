//! Week and worksheet date labels
//!
//! Workbooks cover one Sunday-to-Saturday week and hold one worksheet per
//! day, named like `Oct.19.2026`.

use budgetsheet_core::error::{BudgetError, Result};
use chrono::{Datelike, Days, NaiveDate};

/// The seven dates of the week containing `date`, Sunday first
///
/// # Examples
/// ```
/// use budgetsheet_workbook::calendar::week_of;
/// use chrono::NaiveDate;
///
/// // 2026-10-19 is a Monday
/// let week = week_of(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
/// assert_eq!(week[0], NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
/// assert_eq!(week[6], NaiveDate::from_ymd_opt(2026, 10, 24).unwrap());
/// ```
pub fn week_of(date: NaiveDate) -> [NaiveDate; 7] {
    let start = week_start(date);
    std::array::from_fn(|offset| start + Days::new(offset as u64))
}

/// The Sunday that opens the week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_sunday()))
}

/// Worksheet name for a date, e.g. `Oct.19.2026`
pub fn sheet_label(date: NaiveDate) -> String {
    date.format("%b.%d.%Y").to_string()
}

/// Worksheet names for every day of the week containing `date`
pub fn week_labels(date: NaiveDate) -> Vec<String> {
    week_of(date).into_iter().map(sheet_label).collect()
}

/// Name of the folder grouping a month's workbooks, e.g. `October`
pub fn month_folder(date: NaiveDate) -> String {
    date.format("%B").to_string()
}

/// `YYYY-MM-DD`
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a `YYYY-MM-DD` date
///
/// # Examples
/// ```
/// use budgetsheet_workbook::calendar::parse_date;
/// use chrono::Datelike;
///
/// let date = parse_date("2026-10-19").unwrap();
/// assert_eq!(date.day(), 19);
/// assert!(parse_date("19/10/2026").is_err());
/// ```
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        BudgetError::InvalidDate(format!("'{value}', expected YYYY-MM-DD"))
    })
}
