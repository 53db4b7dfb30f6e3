//! Cell addressing, values and sparse storage

mod address;
mod geometry;
mod storage;
mod value;

pub use address::{CellAddress, CellRange, CellRangeIterator};
pub use geometry::{SheetGeometry, DEFAULT_COLUMN_WIDTH, DEFAULT_ROW_HEIGHT};
pub use storage::{CellData, CellStorage};
pub use value::CellValue;
