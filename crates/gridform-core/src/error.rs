//! Document model errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// A rejected document operation
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    #[error("Invalid cell range: {0}")]
    InvalidRange(String),

    /// (row, last valid row), both 0-based
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// (column, last valid column), both 0-based
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u32, u16),

    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// A merge overlapping one already registered
    #[error("Range {0} overlaps an existing merged region")]
    MergedCellConflict(String),
}
