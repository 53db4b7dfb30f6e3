//! # gridform
//!
//! Lay out spreadsheets from a declarative JSON description.
//!
//! A descriptor lists rows of cells. Each cell has a value, an optional
//! footprint (`width` x `height`, merged when larger than one cell), optional
//! positional shifts and an optional style override. [`LayoutEngine`] turns the
//! descriptor into absolute placements, [`render`] writes those placements into
//! a [`SheetBackend`], and [`WorkbookExt`] saves the result as xlsx.
//!
//! ## Example
//!
//! ```rust
//! use gridform::{workbook_from_json, CellValue};
//!
//! let workbook = workbook_from_json(
//!     r#"{"rows": [
//!         {"cells": [{"value": "Report", "width": 3, "style": {"font": {"bold": true}}}]},
//!         {"cells": [{"value": 1}, {"value": 2}, {"value": 3}]}
//!     ]}"#,
//! )
//! .unwrap();
//!
//! let sheet = workbook.worksheet();
//! assert_eq!(sheet.get_value("A1").unwrap(), CellValue::string("Report"));
//! assert_eq!(sheet.get_value("C2").unwrap(), CellValue::Number(3.0));
//! assert_eq!(sheet.merged_regions().len(), 1);
//! ```

pub mod backend;
pub mod descriptor;
pub mod error;
pub mod layout;
pub mod options;
pub mod render;
pub mod style;

pub use backend::SheetBackend;
pub use descriptor::{CellSpec, ColumnSizeSpec, RowSpec, SheetDescriptor};
pub use error::{Error, Result};
pub use layout::{Layout, LayoutEngine, PlacedCell, SizingDirective};
pub use options::{default_style_from_json, ConvertOptions};
pub use render::render;
pub use style::{
    AlignmentSpec, BorderSpec, FillSpec, FontSpec, SideSpec, StyleResolver, StyleSpec,
};

pub use gridform_core::{CellValue, Style, Workbook, Worksheet};
pub use gridform_xlsx::{XlsxError, XlsxWriter};

use std::path::Path;

/// Convert a JSON descriptor with default options
pub fn workbook_from_json(json: &str) -> Result<Workbook> {
    let descriptor = SheetDescriptor::from_json(json)?;
    workbook_from_descriptor(&descriptor, &ConvertOptions::default())
}

/// Convert an already-parsed JSON descriptor with default options
pub fn workbook_from_value(value: &serde_json::Value) -> Result<Workbook> {
    let descriptor = SheetDescriptor::from_value(value)?;
    workbook_from_descriptor(&descriptor, &ConvertOptions::default())
}

/// Lay out a descriptor and render it into a fresh single-sheet workbook
pub fn workbook_from_descriptor(
    descriptor: &SheetDescriptor,
    options: &ConvertOptions,
) -> Result<Workbook> {
    let layout = LayoutEngine::layout(descriptor, &options.default_style)?;
    let mut workbook = Workbook::with_sheet_name(&options.sheet_name)?;
    render(&layout, workbook.worksheet_mut())?;
    Ok(workbook)
}

/// Extension trait for Workbook to add file output
pub trait WorkbookExt {
    /// Save the workbook as an xlsx file
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Serialize the workbook to xlsx bytes
    fn to_xlsx_bytes(&self) -> Result<Vec<u8>>;
}

impl WorkbookExt for Workbook {
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        Ok(XlsxWriter::write_file(self, path)?)
    }

    fn to_xlsx_bytes(&self) -> Result<Vec<u8>> {
        Ok(XlsxWriter::to_bytes(self)?)
    }
}
