//! # gridform-core
//!
//! In-memory spreadsheet document model used by gridform.
//!
//! This crate provides the types the layout engine writes into:
//! - [`CellValue`] - Scalar cell values (numbers, strings, booleans)
//! - [`CellAddress`] and [`CellRange`] - Cell addressing, ranges and column letters
//! - [`Style`] - Cell formatting (fonts, fills, borders, alignment, number formats)
//! - [`Workbook`], [`Worksheet`] - The document itself
//!
//! ## Example
//!
//! ```rust
//! use gridform_core::{CellValue, Style, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut();
//!
//! // Row/column indices are 0-based
//! sheet.set_cell_value_at(0, 0, "Hello").unwrap();
//! sheet.set_cell_value_at(0, 1, CellValue::Number(42.0)).unwrap();
//! sheet.set_cell_style_at(0, 0, &Style::new().bold(true)).unwrap();
//! ```

pub mod cell;
pub mod error;
pub mod style;
pub mod workbook;
pub mod worksheet;

pub use cell::{CellAddress, CellData, CellRange, CellValue};
pub use error::{Error, Result};
pub use workbook::Workbook;
pub use worksheet::Worksheet;

pub use style::{
    Alignment, BorderEdge, BorderLineStyle, BorderSide, BorderStyle, Color, FillStyle, FontStyle,
    FontVerticalAlign, HorizontalAlignment, NumberFormat, PatternType, Style, StylePool,
    Underline, VerticalAlignment,
};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
