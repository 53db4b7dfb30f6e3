//! XLSX writer

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Cursor, Seek, Write};
use std::path::Path;

use quick_xml::escape::escape;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::error::XlsxResult;
use crate::styles::XlsxStyleTable;
use gridform_core::{CellAddress, CellData, CellValue, Workbook, Worksheet};

/// XLSX file writer
pub struct XlsxWriter;

impl XlsxWriter {
    /// Write a workbook to a file path
    pub fn write_file<P: AsRef<Path>>(workbook: &Workbook, path: P) -> XlsxResult<()> {
        let path = path.as_ref();
        log::debug!("writing workbook to {}", path.display());
        let file = File::create(path)?;
        Self::write(workbook, file)
    }

    /// Write a workbook into an in-memory buffer
    pub fn to_bytes(workbook: &Workbook) -> XlsxResult<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::new());
        Self::write(workbook, &mut cursor)?;
        Ok(cursor.into_inner())
    }

    /// Write a workbook to a writer
    pub fn write<W: Write + Seek>(workbook: &Workbook, writer: W) -> XlsxResult<()> {
        let sheet = workbook.worksheet();
        let mut zip = ZipWriter::new(writer);

        let style_table = XlsxStyleTable::build(sheet);

        Self::write_part(&mut zip, "[Content_Types].xml", CONTENT_TYPES)?;
        Self::write_part(&mut zip, "_rels/.rels", ROOT_RELS)?;
        Self::write_part(&mut zip, "xl/workbook.xml", &Self::workbook_xml(sheet))?;
        Self::write_part(&mut zip, "xl/_rels/workbook.xml.rels", WORKBOOK_RELS)?;
        Self::write_part(&mut zip, "xl/styles.xml", &style_table.to_styles_xml())?;
        Self::write_part(
            &mut zip,
            "xl/worksheets/sheet1.xml",
            &Self::worksheet_xml(sheet, &style_table),
        )?;

        zip.finish()?;
        log::debug!(
            "wrote sheet '{}' ({} cells, {} cellXfs)",
            sheet.name(),
            sheet.cell_count(),
            style_table.len()
        );
        Ok(())
    }

    fn write_part<W: Write + Seek>(
        zip: &mut ZipWriter<W>,
        name: &str,
        content: &str,
    ) -> XlsxResult<()> {
        zip.start_file(name, SimpleFileOptions::default())?;
        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn workbook_xml(sheet: &Worksheet) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
    <sheets>
        <sheet name="{}" sheetId="1" r:id="rId1"/>
    </sheets>
</workbook>"#,
            escape(sheet.name())
        )
    }

    fn worksheet_xml(sheet: &Worksheet, style_table: &XlsxStyleTable) -> String {
        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
        );

        if let Some(range) = sheet.used_range() {
            content.push_str(&format!("\n    <dimension ref=\"{}\"/>", range));
        }

        // <cols> must precede <sheetData>
        let widths = sheet.custom_column_widths();
        if !widths.is_empty() {
            content.push_str("\n    <cols>");
            for (&col, width) in widths {
                content.push_str(&format!(
                    "\n        <col min=\"{n}\" max=\"{n}\" width=\"{}\" customWidth=\"1\"/>",
                    width,
                    n = col as u32 + 1
                ));
            }
            content.push_str("\n    </cols>");
        }

        // Rows with a custom height are written even when they hold no cells
        let mut rows: BTreeMap<u32, Vec<(u16, &CellData)>> = BTreeMap::new();
        for (row, col, cell) in sheet.iter_cells() {
            rows.entry(row).or_default().push((col, cell));
        }
        for &row in sheet.custom_row_heights().keys() {
            rows.entry(row).or_default();
        }

        content.push_str("\n    <sheetData>");
        for (row, cells) in &rows {
            let height_attr = sheet
                .custom_row_heights()
                .get(row)
                .map(|h| format!(" ht=\"{}\" customHeight=\"1\"", h))
                .unwrap_or_default();

            if cells.is_empty() {
                content.push_str(&format!("\n        <row r=\"{}\"{}/>", row + 1, height_attr));
                continue;
            }

            content.push_str(&format!("\n        <row r=\"{}\"{}>", row + 1, height_attr));
            for &(col, cell) in cells {
                let cell_ref = CellAddress::new(*row, col).to_a1_string();
                let xf_id = style_table.xf_id_for(cell.style_index);
                if let Some(xml) = Self::cell_xml(&cell_ref, xf_id, &cell.value) {
                    content.push_str("\n            ");
                    content.push_str(&xml);
                }
            }
            content.push_str("\n        </row>");
        }
        content.push_str("\n    </sheetData>");

        let merged_regions = sheet.merged_regions();
        if !merged_regions.is_empty() {
            content.push_str(&format!(
                "\n    <mergeCells count=\"{}\">",
                merged_regions.len()
            ));
            for range in merged_regions {
                content.push_str(&format!("\n        <mergeCell ref=\"{}\"/>", range));
            }
            content.push_str("\n    </mergeCells>");
        }

        content.push_str("\n</worksheet>");
        content
    }

    fn cell_xml(cell_ref: &str, xf_id: u32, value: &CellValue) -> Option<String> {
        let style_attr = if xf_id != 0 {
            format!(" s=\"{}\"", xf_id)
        } else {
            String::new()
        };

        match value {
            CellValue::Number(n) => Some(format!(
                "<c r=\"{}\"{}><v>{}</v></c>",
                cell_ref, style_attr, n
            )),
            CellValue::String(s) => Some(format!(
                "<c r=\"{}\"{} t=\"inlineStr\"><is><t xml:space=\"preserve\">{}</t></is></c>",
                cell_ref,
                style_attr,
                escape(s.as_str())
            )),
            CellValue::Boolean(b) => Some(format!(
                "<c r=\"{}\"{} t=\"b\"><v>{}</v></c>",
                cell_ref,
                style_attr,
                u8::from(*b)
            )),
            // Style-only cells keep their formatting
            CellValue::Empty if xf_id != 0 => Some(format!("<c r=\"{}\"{}/>", cell_ref, style_attr)),
            CellValue::Empty => None,
        }
    }
}

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
    <Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>
    <Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
</Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
    <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cell_xml() {
        assert_eq!(
            XlsxWriter::cell_xml("A1", 0, &CellValue::Number(1.5)).as_deref(),
            Some("<c r=\"A1\"><v>1.5</v></c>")
        );
        assert_eq!(
            XlsxWriter::cell_xml("B2", 3, &CellValue::Boolean(true)).as_deref(),
            Some("<c r=\"B2\" s=\"3\" t=\"b\"><v>1</v></c>")
        );
        assert_eq!(
            XlsxWriter::cell_xml("C1", 0, &CellValue::string("a<b")).as_deref(),
            Some("<c r=\"C1\" t=\"inlineStr\"><is><t xml:space=\"preserve\">a&lt;b</t></is></c>")
        );
        assert_eq!(XlsxWriter::cell_xml("D1", 0, &CellValue::Empty), None);
        assert_eq!(
            XlsxWriter::cell_xml("D1", 2, &CellValue::Empty).as_deref(),
            Some("<c r=\"D1\" s=\"2\"/>")
        );
    }

    #[test]
    fn test_worksheet_xml_layout() {
        let mut workbook = Workbook::new();
        let sheet = workbook.worksheet_mut();
        sheet.set_cell_value_at(0, 0, "x").unwrap();
        sheet.set_column_width(1, 20.0).unwrap();
        sheet.set_row_height(3, 30.0).unwrap();

        let table = XlsxStyleTable::build(workbook.worksheet());
        let xml = XlsxWriter::worksheet_xml(workbook.worksheet(), &table);

        let cols = xml.find("<cols>").unwrap();
        let data = xml.find("<sheetData>").unwrap();
        assert!(cols < data);
        assert!(xml.contains("<col min=\"2\" max=\"2\" width=\"20\" customWidth=\"1\"/>"));
        assert!(xml.contains("<row r=\"4\" ht=\"30\" customHeight=\"1\"/>"));
        assert!(!xml.contains("<mergeCells"));
    }
}
