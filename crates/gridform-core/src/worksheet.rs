//! A single sheet: cells, styles and geometry
//!
//! Row and column indices taken by [`Worksheet`] are 0-based. Anything at or
//! past [`MAX_ROWS`] / [`MAX_COLS`] is rejected.

use std::collections::BTreeMap;

use crate::cell::{CellAddress, CellData, CellRange, CellStorage, CellValue, SheetGeometry};
use crate::error::{Error, Result};
use crate::style::{NumberFormat, Style};
use crate::{MAX_COLS, MAX_ROWS};

#[derive(Debug)]
pub struct Worksheet {
    name: String,
    cells: CellStorage,
    geometry: SheetGeometry,
}

impl Worksheet {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            cells: CellStorage::new(),
            geometry: SheetGeometry::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // --- cells ---

    /// Stored cell at an A1 address
    pub fn cell(&self, address: &str) -> Result<Option<&CellData>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cells.get(addr.row, addr.col))
    }

    pub fn cell_at(&self, row: u32, col: u16) -> Option<&CellData> {
        self.cells.get(row, col)
    }

    /// Value at an A1 address, `Empty` when nothing is stored
    pub fn get_value(&self, address: &str) -> Result<CellValue> {
        let addr = CellAddress::parse(address)?;
        Ok(self.get_value_at(addr.row, addr.col))
    }

    pub fn get_value_at(&self, row: u32, col: u16) -> CellValue {
        self.cells
            .get(row, col)
            .map(|c| c.value.clone())
            .unwrap_or_default()
    }

    pub fn set_cell_value<V: Into<CellValue>>(&mut self, address: &str, value: V) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_value_at(addr.row, addr.col, value)
    }

    pub fn set_cell_value_at<V: Into<CellValue>>(
        &mut self,
        row: u32,
        col: u16,
        value: V,
    ) -> Result<()> {
        check_position(row, col)?;
        self.cells.set_value(row, col, value.into());
        Ok(())
    }

    // --- styles ---

    /// Style stored under `style_index` in this sheet's pool
    pub fn style_by_index(&self, style_index: u32) -> Option<&Style> {
        self.cells.style_pool().get(style_index)
    }

    /// Effective style of a cell; the default style when none was set
    pub fn style_at(&self, row: u32, col: u16) -> &Style {
        self.cells.style(row, col)
    }

    pub fn style(&self, address: &str) -> Result<&Style> {
        let addr = CellAddress::parse(address)?;
        Ok(self.style_at(addr.row, addr.col))
    }

    pub fn set_cell_style_at(&mut self, row: u32, col: u16, style: &Style) -> Result<()> {
        check_position(row, col)?;
        self.cells.set_style(row, col, style.clone());
        Ok(())
    }

    /// Edit a copy of the cell's effective style and store it back
    pub fn update_cell_style_at<F>(&mut self, row: u32, col: u16, update: F) -> Result<()>
    where
        F: FnOnce(&mut Style),
    {
        let mut style = self.style_at(row, col).clone();
        update(&mut style);
        self.set_cell_style_at(row, col, &style)
    }

    pub fn set_cell_number_format_at(
        &mut self,
        row: u32,
        col: u16,
        format: NumberFormat,
    ) -> Result<()> {
        self.update_cell_style_at(row, col, |style| style.number_format = format)
    }

    // --- geometry ---

    /// Height in points
    pub fn row_height(&self, row: u32) -> f64 {
        self.geometry.row_height(row)
    }

    pub fn set_row_height(&mut self, row: u32, height: f64) -> Result<()> {
        check_position(row, 0)?;
        self.geometry.set_row_height(row, height);
        Ok(())
    }

    /// Width in characters
    pub fn column_width(&self, col: u16) -> f64 {
        self.geometry.column_width(col)
    }

    pub fn set_column_width(&mut self, col: u16, width: f64) -> Result<()> {
        check_position(0, col)?;
        self.geometry.set_column_width(col, width);
        Ok(())
    }

    /// Rows with an explicit height
    pub fn custom_row_heights(&self) -> &BTreeMap<u32, f64> {
        self.geometry.row_heights()
    }

    /// Columns with an explicit width
    pub fn custom_column_widths(&self) -> &BTreeMap<u16, f64> {
        self.geometry.column_widths()
    }

    pub fn merged_regions(&self) -> &[CellRange] {
        self.geometry.merges()
    }

    /// Merge a rectangle
    ///
    /// Single-cell ranges are ignored. Overlapping an existing merge is an error.
    pub fn merge_cells(&mut self, range: &CellRange) -> Result<()> {
        if range.is_single_cell() {
            return Ok(());
        }
        check_position(range.end.row, range.end.col)?;
        self.geometry.add_merge(*range)
    }

    pub fn is_merged(&self, row: u32, col: u16) -> bool {
        self.geometry.is_merged(row, col)
    }

    // --- queries ---

    /// Bounding range of all stored cells
    pub fn used_range(&self) -> Option<CellRange> {
        self.cells
            .bounds()
            .map(|(r0, c0, r1, c1)| CellRange::from_indices(r0, c0, r1, c1))
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Stored cells in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u16, &CellData)> {
        self.cells.iter()
    }
}

fn check_position(row: u32, col: u16) -> Result<()> {
    if row >= MAX_ROWS {
        return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
    }
    if col >= MAX_COLS {
        return Err(Error::ColumnOutOfBounds(u32::from(col), MAX_COLS - 1));
    }
    Ok(())
}
