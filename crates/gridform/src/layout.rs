//! Layout engine: descriptor -> placed cells and sizing directives
//!
//! The engine walks the rows top to bottom with a running row cursor. Each row
//! starts at `start_column + columns_shift` and its cells are laid out left to
//! right, each advancing the column cursor by its width. A cell's own shifts
//! move only that cell. After the row, the cursor advances by the tallest
//! footprint among the cells that do not set `ignore_height` (1 if there are
//! none).
//!
//! All coordinates in a [`Layout`] are 1-based.

use serde::Serialize;

use gridform_core::{CellAddress, CellValue, Style};

use crate::descriptor::{CellSpec, ColumnSizeSpec, SheetDescriptor};
use crate::error::{Error, Result};
use crate::style::StyleResolver;

/// A cell (or merged rectangle) with its grid position and resolved style
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedCell {
    /// 1-based top row
    pub row: u32,
    /// 1-based left column
    pub column: u32,
    pub width: u32,
    pub height: u32,
    pub ignore_height: bool,
    pub value: CellValue,
    pub style: Style,
    /// Sheet-level number format, attached to numeric values only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_format: Option<String>,
}

impl PlacedCell {
    /// Whether the footprint is exactly one cell
    pub fn is_single(&self) -> bool {
        self.width == 1 && self.height == 1
    }

    /// Inclusive bottom row
    pub fn end_row(&self) -> u32 {
        self.row.saturating_add(self.height - 1)
    }

    /// Inclusive right column
    pub fn end_column(&self) -> u32 {
        self.column.saturating_add(self.width - 1)
    }

    /// A1 reference of the footprint, e.g. `"A1"` or `"A1:E2"`
    pub fn reference(&self) -> String {
        let start = format!(
            "{}{}",
            CellAddress::column_to_letters(self.column - 1),
            self.row
        );
        if self.is_single() {
            return start;
        }
        format!(
            "{}:{}{}",
            start,
            CellAddress::column_to_letters(self.end_column() - 1),
            self.end_row()
        )
    }
}

/// Explicit row or column size
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SizingDirective {
    /// Width of a column, identified by its letters
    ColumnWidth { column: String, width: f64 },
    /// Height of a 1-based row
    RowHeight { row: u32, height: f64 },
}

/// Output of one layout pass
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    pub cells: Vec<PlacedCell>,
    pub sizing: Vec<SizingDirective>,
}

impl Layout {
    /// Find the placed cell whose anchor is at (row, column)
    pub fn cell_at(&self, row: u32, column: u32) -> Option<&PlacedCell> {
        self.cells
            .iter()
            .find(|cell| cell.row == row && cell.column == column)
    }
}

/// Computes a [`Layout`] from a [`SheetDescriptor`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutEngine;

impl LayoutEngine {
    pub fn layout(sheet: &SheetDescriptor, default_style: &Style) -> Result<Layout> {
        let mut cells = Vec::new();
        let mut row_anchors: Vec<(i64, Option<f64>)> = Vec::with_capacity(sheet.rows.len());
        let mut cursor_row = sheet.start_row;

        for (row_index, row) in sheet.rows.iter().enumerate() {
            cursor_row = shift(cursor_row, row.rows_shift, (cursor_row, sheet.start_column))?;
            row_anchors.push((cursor_row, row.row_height));

            let mut cursor_column =
                shift(sheet.start_column, row.columns_shift, (cursor_row, sheet.start_column))?;
            let mut advance: Option<u32> = None;

            for (cell_index, spec) in row.cells.iter().enumerate() {
                let at = (cursor_row, cursor_column);
                let placed = Self::place_cell(
                    sheet,
                    spec,
                    (row_index, cell_index),
                    shift(cursor_row, spec.rows_shift, at)?,
                    shift(cursor_column, spec.columns_shift, at)?,
                    default_style,
                )?;
                log::debug!(
                    "row {} cell {} -> {} {:?}",
                    row_index,
                    cell_index,
                    placed.reference(),
                    placed.value
                );

                cursor_column = shift(cursor_column, placed.width.into(), at)?;
                if !placed.ignore_height {
                    advance = Some(advance.map_or(placed.height, |h| h.max(placed.height)));
                }
                cells.push(placed);
            }

            cursor_row = shift(
                cursor_row,
                advance.unwrap_or(1).into(),
                (cursor_row, sheet.start_column),
            )?;
        }

        let mut sizing = Vec::new();
        for (index, spec) in sheet.column_widths.iter().enumerate() {
            let column = Self::column_letters(index, spec)?;
            log::debug!("column {} width {}", column, spec.width);
            sizing.push(SizingDirective::ColumnWidth {
                column,
                width: spec.width,
            });
        }
        for (anchor, height) in row_anchors {
            if let Some(height) = height {
                let row = u32::try_from(anchor)
                    .ok()
                    .filter(|&row| row >= 1)
                    .ok_or(Error::CoordinateOutOfGrid {
                        row: anchor,
                        column: sheet.start_column,
                    })?;
                log::debug!("row {} height {}", row, height);
                sizing.push(SizingDirective::RowHeight { row, height });
            }
        }

        Ok(Layout { cells, sizing })
    }

    fn place_cell(
        sheet: &SheetDescriptor,
        spec: &CellSpec,
        (row_index, cell_index): (usize, usize),
        row: i64,
        column: i64,
        default_style: &Style,
    ) -> Result<PlacedCell> {
        let value = spec.value.clone().ok_or(Error::MissingValue {
            row: row_index,
            cell: cell_index,
        })?;
        let (row, column) = grid_position(row, column)?;

        let number_format = match value {
            CellValue::Number(_) => sheet.number_format.clone(),
            _ => None,
        };

        Ok(PlacedCell {
            row,
            column,
            width: spec.width.max(1),
            height: spec.height.max(1),
            ignore_height: spec.ignore_height,
            value,
            style: StyleResolver::resolve(&spec.style, default_style),
            number_format,
        })
    }

    /// Column letters for a sizing entry; letters win over the number
    fn column_letters(index: usize, spec: &ColumnSizeSpec) -> Result<String> {
        let invalid = |reason: &str| Error::InvalidColumnReference {
            index,
            reason: reason.to_string(),
        };

        match (&spec.column_letter, spec.column_number) {
            (Some(letters), _) => {
                if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(invalid(&format!("'{}' is not a column letter", letters)));
                }
                Ok(letters.to_ascii_uppercase())
            }
            (None, Some(0)) => Err(invalid("column numbers start at 1")),
            (None, Some(number)) => Ok(CellAddress::column_to_letters(number - 1)),
            (None, None) => Err(invalid("neither column_number nor column_letter given")),
        }
    }
}

/// Cursor arithmetic; leaving the `i64` range is off the grid at `at`
fn shift(base: i64, delta: i64, at: (i64, i64)) -> Result<i64> {
    base.checked_add(delta).ok_or(Error::CoordinateOutOfGrid {
        row: at.0,
        column: at.1,
    })
}

fn grid_position(row: i64, column: i64) -> Result<(u32, u32)> {
    match (u32::try_from(row), u32::try_from(column)) {
        (Ok(r), Ok(c)) if r >= 1 && c >= 1 => Ok((r, c)),
        _ => Err(Error::CoordinateOutOfGrid { row, column }),
    }
}
