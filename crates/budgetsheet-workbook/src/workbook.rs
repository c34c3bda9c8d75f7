//! Weekly workbook persistence
//!
//! A workbook is an `.xlsx` file with one worksheet per day. Workbooks are
//! grouped into month folders under a save directory:
//!
//! ```text
//! <save dir>/
//!   October/
//!     week-2026-10-18.xlsx
//!   September/
//!     week-2026-09-27.xlsx
//! ```
//!
//! An existing file is read with `calamine` when it is opened. Appends go to
//! memory, and [`Workbook::save`] writes the whole file back with
//! `rust_xlsxwriter`, applying each sheet's [`SheetStyle`].

use crate::calendar::{iso_date, month_folder, week_start};
use crate::style::{Alignment, FontProfile, HorizontalAlign, RowKind, SheetStyle, VerticalAlign};
use budgetsheet_core::error::{BudgetError, Result};
use budgetsheet_core::types::CellValue;
use calamine::{Data, Reader, Xlsx, open_workbook};
use chrono::NaiveDate;
use rust_xlsxwriter::{ColNum, Format, FormatAlign, RowNum, Worksheet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Extension of weekly workbook files
pub const WORKBOOK_EXTENSION: &str = "xlsx";

/// Longest worksheet name a workbook accepts
pub const MAX_SHEET_NAME: usize = 31;

/// Destination for table and summary rows
///
/// Rows are appended verbatim, in order, below whatever the sheet already
/// holds.
pub trait SheetWriter {
    fn append_rows(&mut self, sheet: &str, rows: &[Vec<CellValue>]) -> Result<()>;
}

/// Create the month folder for the week containing `date`
///
/// The folder is named after the month of the week's Sunday so every day of
/// a week lands in the same workbook.
pub fn prepare_month_folder(save_dir: &Path, date: NaiveDate) -> Result<PathBuf> {
    let folder = save_dir.join(month_folder(week_start(date)));
    if folder.is_dir() {
        info!("Folder '{}' already exists", folder.display());
    } else {
        fs::create_dir_all(&folder).map_err(|e| workbook_error(&folder, e))?;
        info!("Folder '{}' created", folder.display());
    }
    Ok(folder)
}

/// Path of the workbook covering the week containing `date`
pub fn weekly_workbook_path(save_dir: &Path, date: NaiveDate) -> PathBuf {
    let start = week_start(date);
    save_dir
        .join(month_folder(start))
        .join(format!("week-{}.{WORKBOOK_EXTENSION}", iso_date(start)))
}

#[derive(Debug, Clone, PartialEq)]
struct Sheet {
    name: String,
    rows: Vec<Vec<CellValue>>,
}

/// An `.xlsx` workbook held in memory between open and save
#[derive(Debug)]
pub struct Workbook {
    path: PathBuf,
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// Open the workbook at `path`, or start an empty one if there is no file
    ///
    /// Nothing is written until [`Workbook::save`].
    ///
    /// # Errors
    ///
    /// Returns [`BudgetError::Workbook`] if an existing file is not a
    /// readable workbook.
    pub fn open_or_create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let sheets = if path.is_file() {
            let sheets = read_sheets(&path)?;
            debug!("Loaded workbook '{}' with {} sheets", path.display(), sheets.len());
            sheets
        } else {
            debug!("Starting new workbook at '{}'", path.display());
            Vec::new()
        };

        Ok(Self { path, sheets })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sheet names in workbook order
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn has_sheet(&self, name: &str) -> bool {
        self.sheets.iter().any(|s| s.name == name)
    }

    /// Rows of a sheet; `None` when there is no such sheet
    pub fn rows(&self, name: &str) -> Option<&[Vec<CellValue>]> {
        self.sheet(name).map(|s| s.rows.as_slice())
    }

    /// Style applied to a sheet on save; `None` until the sheet has rows
    pub fn style(&self, name: &str) -> Option<SheetStyle> {
        self.sheet(name)
            .filter(|s| !s.rows.is_empty())
            .map(|s| SheetStyle::compute(&s.rows))
    }

    /// Add a sheet for each label not already present, keeping label order
    ///
    /// Returns the number of sheets added. Existing sheets are not touched.
    pub fn populate_week(&mut self, labels: &[String]) -> Result<usize> {
        let mut added = 0;
        for label in labels {
            if !self.has_sheet(label) {
                self.ensure_sheet(label)?;
                added += 1;
            }
        }
        if added > 0 {
            info!("Added {} worksheets to '{}'", added, self.path.display());
        }
        Ok(added)
    }

    /// Make sure a sheet exists, creating an empty one at the end if needed
    ///
    /// # Errors
    ///
    /// Returns [`BudgetError::InvalidArgument`] for a name a workbook cannot
    /// hold.
    pub fn ensure_sheet(&mut self, name: &str) -> Result<()> {
        validate_sheet_name(name)?;
        if !self.has_sheet(name) {
            self.sheets.push(Sheet {
                name: name.to_string(),
                rows: Vec::new(),
            });
            debug!("Created worksheet '{}'", name);
        }
        Ok(())
    }

    /// All rows of a sheet, as text
    pub fn read_rows(&self, name: &str) -> Result<Vec<Vec<String>>> {
        let rows = self.rows(name).ok_or_else(|| {
            workbook_error(&self.path, format!("no worksheet named '{name}'"))
        })?;
        Ok(rows
            .iter()
            .map(|row| row.iter().map(CellValue::to_string).collect())
            .collect())
    }

    /// Write every sheet, styled, to the workbook file
    ///
    /// Missing parent folders are created.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| workbook_error(parent, e))?;
        }

        let mut output = rust_xlsxwriter::Workbook::new();
        for sheet in &self.sheets {
            let worksheet = output.add_worksheet();
            worksheet
                .set_name(sheet.name.as_str())
                .map_err(|e| workbook_error(&self.path, e))?;
            write_sheet(worksheet, &sheet.rows).map_err(|e| workbook_error(&self.path, e))?;
        }
        output
            .save(&self.path)
            .map_err(|e| workbook_error(&self.path, e))?;

        info!("Saved workbook '{}'", self.path.display());
        Ok(())
    }

    fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }
}

impl SheetWriter for Workbook {
    fn append_rows(&mut self, sheet: &str, rows: &[Vec<CellValue>]) -> Result<()> {
        self.ensure_sheet(sheet)?;
        if let Some(target) = self.sheets.iter_mut().find(|s| s.name == sheet) {
            target.rows.extend_from_slice(rows);
        }
        debug!("Appended {} rows to worksheet '{}'", rows.len(), sheet);
        Ok(())
    }
}

/// Cell format for one row kind of a styled sheet
pub fn cell_format(style: &SheetStyle, kind: RowKind) -> Format {
    font_format(style.font(kind), style.alignment)
}

fn font_format(font: &FontProfile, alignment: Alignment) -> Format {
    let format = Format::new()
        .set_font_name(font.name.as_str())
        .set_font_size(font.size)
        .set_align(match alignment.horizontal {
            HorizontalAlign::Left => FormatAlign::Left,
            HorizontalAlign::Center => FormatAlign::Center,
            HorizontalAlign::Right => FormatAlign::Right,
        })
        .set_align(match alignment.vertical {
            VerticalAlign::Top => FormatAlign::Top,
            VerticalAlign::Center => FormatAlign::VerticalCenter,
            VerticalAlign::Bottom => FormatAlign::Bottom,
        });

    if font.bold { format.set_bold() } else { format }
}

fn write_sheet(
    worksheet: &mut Worksheet,
    rows: &[Vec<CellValue>],
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    if rows.is_empty() {
        return Ok(());
    }
    let style = SheetStyle::compute(rows);
    let header = cell_format(&style, RowKind::Header);
    let body = cell_format(&style, RowKind::Body);

    for (index, (row, kind)) in rows.iter().zip(&style.rows).enumerate() {
        let row_num = RowNum::try_from(index)?;
        let format = match kind {
            RowKind::Header => &header,
            RowKind::Body => &body,
        };
        for (column, cell) in row.iter().enumerate() {
            let col_num = ColNum::try_from(column)?;
            match cell {
                CellValue::Integer(value) => {
                    worksheet.write_number_with_format(row_num, col_num, *value as f64, format)?
                }
                CellValue::Decimal(value) => {
                    worksheet.write_number_with_format(row_num, col_num, *value, format)?
                }
                CellValue::Text(text) => {
                    worksheet.write_string_with_format(row_num, col_num, text.as_str(), format)?
                }
            };
        }
        worksheet.set_row_height(row_num, style.row_height)?;
    }

    for (column, width) in style.column_widths.iter().enumerate() {
        worksheet.set_column_width(ColNum::try_from(column)?, *width as f64)?;
    }
    Ok(())
}

fn read_sheets(path: &Path) -> Result<Vec<Sheet>> {
    let mut source: Xlsx<_> = open_workbook(path).map_err(|e| workbook_error(path, e))?;

    let mut sheets = Vec::new();
    for name in source.sheet_names() {
        let range = source
            .worksheet_range(&name)
            .map_err(|e| workbook_error(path, e))?;

        // Ranges start at the first used cell
        let (first_row, first_col) = range.start().unwrap_or((0, 0));
        let mut rows: Vec<Vec<CellValue>> = vec![Vec::new(); first_row as usize];
        rows.extend(range.rows().map(|cells| {
            let mut row = vec![CellValue::text(""); first_col as usize];
            row.extend(cells.iter().map(cell_value));
            while row.last().is_some_and(|cell| cell.as_text() == Some("")) {
                row.pop();
            }
            row
        }));

        sheets.push(Sheet { name, rows });
    }
    Ok(sheets)
}

/// Whole numbers come back as integers; the file stores every number as f64
fn cell_value(data: &Data) -> CellValue {
    const EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;
    match data {
        Data::Int(value) => CellValue::Integer(*value),
        Data::Float(value) if value.fract() == 0.0 && value.abs() < EXACT_INTEGER => {
            CellValue::Integer(*value as i64)
        }
        Data::Float(value) => CellValue::Decimal(*value),
        Data::String(text) => CellValue::Text(text.clone()),
        Data::Empty => CellValue::text(""),
        other => CellValue::Text(other.to_string()),
    }
}

fn validate_sheet_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name.chars().count() > MAX_SHEET_NAME
        || name.contains(['[', ']', ':', '*', '?', '/', '\\'])
        || name.starts_with('\'')
        || name.ends_with('\'');
    if invalid {
        return Err(BudgetError::InvalidArgument(format!(
            "'{name}' is not a valid worksheet name"
        )));
    }
    Ok(())
}

fn workbook_error(path: &Path, error: impl std::fmt::Display) -> BudgetError {
    BudgetError::Workbook {
        path: path.to_path_buf(),
        error: error.to_string(),
    }
}
