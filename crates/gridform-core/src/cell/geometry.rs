//! Row heights, column widths and merged regions

use std::collections::BTreeMap;

use super::{CellAddress, CellRange};
use crate::error::{Error, Result};

/// Height of a row without a custom height, in points
pub const DEFAULT_ROW_HEIGHT: f64 = 15.0;

/// Width of a column without a custom width, in characters
pub const DEFAULT_COLUMN_WIDTH: f64 = 8.43;

/// The non-cell shape of a worksheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetGeometry {
    row_heights: BTreeMap<u32, f64>,
    column_widths: BTreeMap<u16, f64>,
    merges: Vec<CellRange>,
}

impl SheetGeometry {
    pub fn row_height(&self, row: u32) -> f64 {
        self.row_heights.get(&row).copied().unwrap_or(DEFAULT_ROW_HEIGHT)
    }

    pub fn set_row_height(&mut self, row: u32, height: f64) {
        self.row_heights.insert(row, height);
    }

    pub fn column_width(&self, col: u16) -> f64 {
        self.column_widths.get(&col).copied().unwrap_or(DEFAULT_COLUMN_WIDTH)
    }

    pub fn set_column_width(&mut self, col: u16, width: f64) {
        self.column_widths.insert(col, width);
    }

    pub fn row_heights(&self) -> &BTreeMap<u32, f64> {
        &self.row_heights
    }

    pub fn column_widths(&self) -> &BTreeMap<u16, f64> {
        &self.column_widths
    }

    /// Merged regions in the order they were added
    pub fn merges(&self) -> &[CellRange] {
        &self.merges
    }

    /// Register a merged region; regions may not overlap
    pub fn add_merge(&mut self, range: CellRange) -> Result<()> {
        if self.merges.iter().any(|existing| existing.overlaps(&range)) {
            return Err(Error::MergedCellConflict(range.to_string()));
        }
        self.merges.push(range);
        Ok(())
    }

    pub fn is_merged(&self, row: u32, col: u16) -> bool {
        let addr = CellAddress::new(row, col);
        self.merges.iter().any(|r| r.contains(&addr))
    }
}
