//! Tests for styles.xml.

use crate::{cell_attrs, cell_xfs, elements, package_bytes, read_part};
use gridform_core::style::{BorderLineStyle, BorderSide, BorderStyle, HorizontalAlignment};
use gridform_core::{Color, Style, Workbook};
use pretty_assertions::assert_eq;

#[test]
fn test_font_and_fill() {
    let mut workbook = Workbook::new();
    let style = Style::new()
        .bold(true)
        .font_color(Color::rgb(0x33, 0x66, 0x99))
        .fill_color(Color::rgb(0xD3, 0xD3, 0xD3));
    workbook
        .worksheet_mut()
        .set_cell_style_at(0, 0, &style)
        .unwrap();

    let bytes = package_bytes(&workbook);
    let styles = read_part(&bytes, "xl/styles.xml");

    let xfs = cell_xfs(&styles);
    assert_eq!(xfs.len(), 2);
    assert_eq!(xfs[1]["applyFont"], "1");
    assert_eq!(xfs[1]["applyFill"], "1");
    assert_eq!(xfs[1]["fillId"], "2");

    let fills = elements(&styles, "patternFill");
    assert_eq!(fills[2]["patternType"], "solid");
    let fg = elements(&styles, "fgColor");
    assert!(fg.iter().any(|a| a.get("rgb").map(String::as_str) == Some("FFD3D3D3")));
    let colors = elements(&styles, "color");
    assert!(colors
        .iter()
        .any(|a| a.get("rgb").map(String::as_str) == Some("FF336699")));

    let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");
    assert_eq!(cell_attrs(&sheet, "A1").unwrap()["s"], "1");
}

#[test]
fn test_borders_and_alignment() {
    let mut workbook = Workbook::new();
    let border = BorderStyle::new()
        .with_side(BorderSide::Top, BorderLineStyle::Thin, Color::BLACK)
        .with_side(BorderSide::Bottom, BorderLineStyle::Double, Color::RED);
    let style = Style::new()
        .border(border)
        .horizontal_alignment(HorizontalAlignment::Center);
    workbook
        .worksheet_mut()
        .set_cell_style_at(2, 2, &style)
        .unwrap();

    let styles = read_part(&package_bytes(&workbook), "xl/styles.xml");

    assert_eq!(elements(&styles, "top")[1]["style"], "thin");
    assert_eq!(elements(&styles, "bottom")[1]["style"], "double");
    assert!(!elements(&styles, "left")[1].contains_key("style"));
    assert_eq!(elements(&styles, "alignment")[0]["horizontal"], "center");

    let xfs = cell_xfs(&styles);
    assert_eq!(xfs[1]["applyBorder"], "1");
    assert_eq!(xfs[1]["applyAlignment"], "1");
}

#[test]
fn test_custom_and_builtin_number_formats() {
    let mut workbook = Workbook::new();
    let sheet = workbook.worksheet_mut();
    sheet.set_cell_value_at(0, 0, 1.0).unwrap();
    sheet
        .set_cell_style_at(0, 0, &Style::new().number_format("0.000"))
        .unwrap();
    sheet.set_cell_value_at(1, 0, 2.0).unwrap();
    sheet
        .set_cell_style_at(1, 0, &Style::new().number_format("0.00"))
        .unwrap();

    let styles = read_part(&package_bytes(&workbook), "xl/styles.xml");

    let numfmts = elements(&styles, "numFmt");
    assert_eq!(numfmts.len(), 1);
    assert_eq!(numfmts[0]["numFmtId"], "164");
    assert_eq!(numfmts[0]["formatCode"], "0.000");

    let xfs = cell_xfs(&styles);
    assert_eq!(xfs[1]["numFmtId"], "164");
    assert_eq!(xfs[2]["numFmtId"], "2");
}
