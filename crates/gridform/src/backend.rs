//! The document operations a layout is rendered through
//!
//! Coordinates at this seam are 1-based, matching [`Layout`](crate::Layout).

use gridform_core::style::{BorderSide, Style};
use gridform_core::{CellAddress, CellRange, CellValue, NumberFormat, Worksheet};

use crate::error::{Error, Result};

/// A single sheet that placed cells can be written into
pub trait SheetBackend {
    /// Store a value in one cell
    fn set_cell_value(&mut self, row: u32, column: u32, value: &CellValue) -> Result<()>;

    /// Set the number format of one cell, keeping the rest of its style
    fn set_cell_number_format(&mut self, row: u32, column: u32, format: &str) -> Result<()>;

    /// Give one cell the complete style
    fn apply_style_to_cell(&mut self, row: u32, column: u32, style: &Style) -> Result<()>;

    /// Merge the inclusive rectangle and style it as one visual cell
    ///
    /// The rectangle's outer edges receive the matching border sides, every
    /// constituent cell receives the fill, and the anchor (top-left) cell
    /// receives font, alignment and number format.
    fn merge_and_style_range(
        &mut self,
        top: u32,
        left: u32,
        bottom: u32,
        right: u32,
        style: &Style,
    ) -> Result<()>;

    /// Set the width of the column named by `letters`
    fn set_column_width(&mut self, letters: &str, width: f64) -> Result<()>;

    /// Set the height of a row
    fn set_row_height(&mut self, row: u32, height: f64) -> Result<()>;
}

/// 1-based grid coordinates -> checked 0-based document address
fn address(row: u32, column: u32) -> Result<CellAddress> {
    match (row.checked_sub(1), column.checked_sub(1)) {
        (Some(r), Some(c)) => Ok(CellAddress::checked(r, c)?),
        _ => Err(Error::CoordinateOutOfGrid {
            row: row.into(),
            column: column.into(),
        }),
    }
}

/// Cells on the outer ring of `range`, each once, starting at the anchor
fn perimeter(range: CellRange) -> impl Iterator<Item = CellAddress> {
    let (top, bottom) = (range.start.row, range.end.row);
    let (left, right) = (range.start.col, range.end.col);

    let edge_rows = if top == bottom { vec![top] } else { vec![top, bottom] };
    let edge_cols = if left == right { vec![left] } else { vec![left, right] };

    let horizontal = edge_rows
        .into_iter()
        .flat_map(move |row| (left..=right).map(move |col| CellAddress::new(row, col)));
    let vertical = (top.saturating_add(1)..bottom).flat_map(move |row| {
        edge_cols
            .clone()
            .into_iter()
            .map(move |col| CellAddress::new(row, col))
    });
    horizontal.chain(vertical)
}

impl SheetBackend for Worksheet {
    fn set_cell_value(&mut self, row: u32, column: u32, value: &CellValue) -> Result<()> {
        let addr = address(row, column)?;
        Ok(self.set_cell_value_at(addr.row, addr.col, value.clone())?)
    }

    fn set_cell_number_format(&mut self, row: u32, column: u32, format: &str) -> Result<()> {
        let addr = address(row, column)?;
        Ok(self.set_cell_number_format_at(addr.row, addr.col, NumberFormat::from_string(format))?)
    }

    fn apply_style_to_cell(&mut self, row: u32, column: u32, style: &Style) -> Result<()> {
        let addr = address(row, column)?;
        Ok(self.set_cell_style_at(addr.row, addr.col, style)?)
    }

    fn merge_and_style_range(
        &mut self,
        top: u32,
        left: u32,
        bottom: u32,
        right: u32,
        style: &Style,
    ) -> Result<()> {
        let range = CellRange::new(address(top, left)?, address(bottom, right)?);
        self.merge_cells(&range)?;

        // Without a fill only the outer ring has anything to receive
        let cells: Box<dyn Iterator<Item = CellAddress>> = if style.fill.is_none() {
            Box::new(perimeter(range))
        } else {
            Box::new(range.cells())
        };

        for cell in cells {
            let mut sides = Vec::with_capacity(4);
            if cell.row == range.start.row {
                sides.push(BorderSide::Top);
            }
            if cell.row == range.end.row {
                sides.push(BorderSide::Bottom);
            }
            if cell.col == range.start.col {
                sides.push(BorderSide::Left);
            }
            if cell.col == range.end.col {
                sides.push(BorderSide::Right);
            }
            let edges = style.border.only(&sides);
            let is_anchor = cell == range.start;

            self.update_cell_style_at(cell.row, cell.col, |current| {
                current.border = current.border.overlay(&edges);
                if !style.fill.is_none() {
                    current.fill = style.fill.clone();
                }
                if is_anchor {
                    current.font = style.font.clone();
                    current.alignment = style.alignment.clone();
                    current.number_format = style.number_format.clone();
                }
            })?;
        }

        log::debug!("merged {}", range);
        Ok(())
    }

    fn set_column_width(&mut self, letters: &str, width: f64) -> Result<()> {
        let col = CellAddress::letters_to_column(letters)?;
        Ok(Worksheet::set_column_width(self, col, width)?)
    }

    fn set_row_height(&mut self, row: u32, height: f64) -> Result<()> {
        let addr = address(row, 1)?;
        Ok(Worksheet::set_row_height(self, addr.row, height)?)
    }
}
