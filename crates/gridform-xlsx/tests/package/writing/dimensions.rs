//! Tests for row heights and column widths.

use crate::{elements, package_bytes, read_part};
use gridform_core::Workbook;
use pretty_assertions::assert_eq;

#[test]
fn test_custom_row_height() {
    let mut workbook = Workbook::new();
    let sheet = workbook.worksheet_mut();
    sheet.set_cell_value("A1", "Tall row").unwrap();
    sheet.set_row_height(0, 30.0).unwrap();

    let xml = read_part(&package_bytes(&workbook), "xl/worksheets/sheet1.xml");
    let rows = elements(&xml, "row");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["ht"], "30");
    assert_eq!(rows[0]["customHeight"], "1");
}

#[test]
fn test_height_on_row_without_cells() {
    let mut workbook = Workbook::new();
    let sheet = workbook.worksheet_mut();
    sheet.set_cell_value("A1", "x").unwrap();
    sheet.set_row_height(4, 12.5).unwrap();

    let xml = read_part(&package_bytes(&workbook), "xl/worksheets/sheet1.xml");
    let rows = elements(&xml, "row");
    assert_eq!(rows.len(), 2);
    assert!(!rows[0].contains_key("ht"));
    assert_eq!(rows[1]["r"], "5");
    assert_eq!(rows[1]["ht"], "12.5");
}

#[test]
fn test_custom_column_widths() {
    let mut workbook = Workbook::new();
    let sheet = workbook.worksheet_mut();
    sheet.set_column_width(0, 20.0).unwrap();
    sheet.set_column_width(26, 7.5).unwrap();

    let xml = read_part(&package_bytes(&workbook), "xl/worksheets/sheet1.xml");
    let cols = elements(&xml, "col");
    assert_eq!(cols.len(), 2);
    assert_eq!(cols[0]["min"], "1");
    assert_eq!(cols[0]["width"], "20");
    assert_eq!(cols[1]["min"], "27");
    assert_eq!(cols[1]["max"], "27");
    assert_eq!(cols[1]["width"], "7.5");
    assert!(xml.find("<cols>").unwrap() < xml.find("<sheetData>").unwrap());
}
