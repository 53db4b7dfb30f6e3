//! Package-level tests for gridform-xlsx.
//!
//! Each test builds a workbook in memory, writes it with `XlsxWriter`, then
//! opens the resulting zip and inspects the XML parts with quick-xml.

mod common;
mod writing;

pub use common::*;
