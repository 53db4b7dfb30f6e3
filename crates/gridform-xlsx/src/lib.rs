//! # gridform-xlsx
//!
//! XLSX (Office Open XML) writer for gridform workbooks.
//!
//! ```rust
//! use gridform_core::Workbook;
//! use gridform_xlsx::XlsxWriter;
//!
//! let mut workbook = Workbook::new();
//! workbook.worksheet_mut().set_cell_value_at(0, 0, "Hello").unwrap();
//!
//! let bytes = XlsxWriter::to_bytes(&workbook).unwrap();
//! assert!(bytes.starts_with(b"PK"));
//! ```

pub mod error;
pub mod writer;

mod styles;

pub use error::{XlsxError, XlsxResult};
pub use writer::XlsxWriter;
