//! Tests for the package skeleton.

use crate::{elements, package_bytes, part_names, read_part};
use gridform_core::Workbook;
use gridform_xlsx::XlsxWriter;

#[test]
fn test_required_parts_present() {
    let bytes = package_bytes(&Workbook::new());
    let names = part_names(&bytes);

    for part in [
        "[Content_Types].xml",
        "_rels/.rels",
        "xl/workbook.xml",
        "xl/_rels/workbook.xml.rels",
        "xl/styles.xml",
        "xl/worksheets/sheet1.xml",
    ] {
        assert!(names.iter().any(|n| n == part), "missing {part}");
    }
}

#[test]
fn test_sheet_name_written_escaped() {
    let workbook = Workbook::with_sheet_name("Q1 & Q2").unwrap();
    let bytes = package_bytes(&workbook);

    let sheets = elements(&read_part(&bytes, "xl/workbook.xml"), "sheet");
    assert_eq!(sheets.len(), 1);
    assert_eq!(sheets[0]["name"], "Q1 & Q2");
}

#[test]
fn test_write_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.xlsx");

    let mut workbook = Workbook::new();
    workbook
        .worksheet_mut()
        .set_cell_value_at(0, 0, "on disk")
        .unwrap();
    XlsxWriter::write_file(&workbook, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"PK"));
    assert!(read_part(&bytes, "xl/worksheets/sheet1.xml").contains("on disk"));
}
