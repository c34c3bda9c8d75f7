//! Weekly workbook layout, worksheet persistence, and styling for budgetsheet
//!
//! The pipeline hands this crate plain rows of [`budgetsheet_core::CellValue`];
//! it decides where they go (month folder, weekly workbook, dated worksheet)
//! and how the worksheet is presented.

pub mod calendar;
pub mod style;
pub mod workbook;

pub use style::SheetStyle;
pub use workbook::{SheetWriter, Workbook};
