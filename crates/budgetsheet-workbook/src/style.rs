//! Worksheet cosmetics
//!
//! Fonts, column widths, row heights and alignment are derived from the
//! rows of a worksheet. Header rows are the ones made only of labels; every
//! row carrying a number (raw or formatted) is a body row.

use budgetsheet_core::classify::ValueKind;
use budgetsheet_core::types::CellValue;

/// Extra characters of room added to the widest cell of each column
pub const COLUMN_PADDING: usize = 8;

/// Height of every populated row, in points
pub const ROW_HEIGHT: f64 = 27.0;

#[derive(Debug, Clone, PartialEq)]
pub struct FontProfile {
    pub name: String,
    pub size: f64,
    pub bold: bool,
}

impl FontProfile {
    pub fn header() -> Self {
        Self {
            name: "Georgia".to_string(),
            size: 18.0,
            bold: true,
        }
    }

    pub fn body() -> Self {
        Self {
            name: "Helvetica Neue".to_string(),
            size: 12.8,
            bold: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Header,
    Body,
}

impl RowKind {
    /// A row is a header when every cell reads as text
    pub fn of(row: &[CellValue]) -> Self {
        if row.iter().all(|cell| cell.kind() == ValueKind::String) {
            Self::Header
        } else {
            Self::Body
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alignment {
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
}

impl Default for Alignment {
    fn default() -> Self {
        Self {
            horizontal: HorizontalAlign::Left,
            vertical: VerticalAlign::Bottom,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
}

/// Presentation of one worksheet
#[derive(Debug, Clone, PartialEq)]
pub struct SheetStyle {
    pub header_font: FontProfile,
    pub body_font: FontProfile,
    /// Kind of each row, top to bottom
    pub rows: Vec<RowKind>,
    /// Width of each column, in characters
    pub column_widths: Vec<usize>,
    pub row_height: f64,
    pub alignment: Alignment,
}

impl SheetStyle {
    /// Derive the style of a worksheet from its rows
    ///
    /// # Examples
    /// ```
    /// use budgetsheet_core::types::CellValue;
    /// use budgetsheet_workbook::style::{RowKind, SheetStyle};
    ///
    /// let rows = vec![
    ///     vec![CellValue::text("Item"), CellValue::text("Gross Price")],
    ///     vec![CellValue::text("Coat"), CellValue::text("220.00")],
    /// ];
    /// let style = SheetStyle::compute(&rows);
    /// assert_eq!(style.rows, vec![RowKind::Header, RowKind::Body]);
    /// assert_eq!(style.column_widths, vec![12, 19]);
    /// ```
    pub fn compute(rows: &[Vec<CellValue>]) -> Self {
        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut column_widths = vec![0; columns];
        for row in rows {
            for (index, cell) in row.iter().enumerate() {
                let width = cell.to_string().chars().count() + COLUMN_PADDING;
                column_widths[index] = column_widths[index].max(width);
            }
        }

        Self {
            header_font: FontProfile::header(),
            body_font: FontProfile::body(),
            rows: rows.iter().map(|row| RowKind::of(row)).collect(),
            column_widths,
            row_height: ROW_HEIGHT,
            alignment: Alignment::default(),
        }
    }

    pub fn font(&self, kind: RowKind) -> &FontProfile {
        match kind {
            RowKind::Header => &self.header_font,
            RowKind::Body => &self.body_font,
        }
    }
}
