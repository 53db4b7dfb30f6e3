//! Tests for merged regions.

use crate::{elements, package_bytes, read_part};
use gridform_core::{CellRange, Workbook};
use pretty_assertions::assert_eq;

#[test]
fn test_merged_regions_written() {
    let mut workbook = Workbook::new();
    let sheet = workbook.worksheet_mut();
    sheet.set_cell_value("A1", "Title").unwrap();
    sheet.merge_cells(&CellRange::parse("A1:C1").unwrap()).unwrap();
    sheet.merge_cells(&CellRange::parse("A3:B5").unwrap()).unwrap();

    let xml = read_part(&package_bytes(&workbook), "xl/worksheets/sheet1.xml");
    assert_eq!(elements(&xml, "mergeCells")[0]["count"], "2");

    let refs: Vec<String> = elements(&xml, "mergeCell")
        .into_iter()
        .map(|attrs| attrs["ref"].clone())
        .collect();
    assert_eq!(refs, vec!["A1:C1", "A3:B5"]);
}

#[test]
fn test_no_merge_section_when_empty() {
    let mut workbook = Workbook::new();
    workbook.worksheet_mut().set_cell_value("A1", 1.0).unwrap();

    let xml = read_part(&package_bytes(&workbook), "xl/worksheets/sheet1.xml");
    assert!(elements(&xml, "mergeCells").is_empty());
}
