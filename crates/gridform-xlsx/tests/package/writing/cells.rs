//! Tests for cell values in sheet1.xml.

use crate::{cell_attrs, package_bytes, read_part, texts};
use gridform_core::{Style, Workbook};
use pretty_assertions::assert_eq;

fn sheet_xml(workbook: &Workbook) -> String {
    read_part(&package_bytes(workbook), "xl/worksheets/sheet1.xml")
}

#[test]
fn test_value_types() {
    let mut workbook = Workbook::new();
    let sheet = workbook.worksheet_mut();
    sheet.set_cell_value("A1", "text").unwrap();
    sheet.set_cell_value("B1", 42.5).unwrap();
    sheet.set_cell_value("C1", true).unwrap();

    let xml = sheet_xml(&workbook);

    assert_eq!(cell_attrs(&xml, "A1").unwrap()["t"], "inlineStr");
    assert_eq!(cell_attrs(&xml, "C1").unwrap()["t"], "b");
    assert!(!cell_attrs(&xml, "B1").unwrap().contains_key("t"));

    assert_eq!(texts(&xml, "t"), vec!["text".to_string()]);
    assert_eq!(texts(&xml, "v"), vec!["42.5".to_string(), "1".to_string()]);
}

#[test]
fn test_special_characters_escaped() {
    let mut workbook = Workbook::new();
    workbook
        .worksheet_mut()
        .set_cell_value("A1", "<Tom & \"Jerry\">")
        .unwrap();

    let xml = sheet_xml(&workbook);
    assert_eq!(texts(&xml, "t"), vec!["<Tom & \"Jerry\">".to_string()]);
}

#[test]
fn test_rows_in_order() {
    let mut workbook = Workbook::new();
    let sheet = workbook.worksheet_mut();
    sheet.set_cell_value("B3", 3.0).unwrap();
    sheet.set_cell_value("A1", 1.0).unwrap();
    sheet.set_cell_value("C1", 2.0).unwrap();

    let xml = sheet_xml(&workbook);
    let rows: Vec<String> = crate::elements(&xml, "row")
        .into_iter()
        .map(|attrs| attrs["r"].clone())
        .collect();
    assert_eq!(rows, vec!["1", "3"]);
    assert_eq!(texts(&xml, "v"), vec!["1", "2", "3"]);
}

#[test]
fn test_style_only_cell_kept() {
    let mut workbook = Workbook::new();
    workbook
        .worksheet_mut()
        .set_cell_style_at(1, 1, &Style::new().bold(true))
        .unwrap();

    let xml = sheet_xml(&workbook);
    let attrs = cell_attrs(&xml, "B2").expect("styled empty cell is written");
    assert_eq!(attrs["s"], "1");
}
