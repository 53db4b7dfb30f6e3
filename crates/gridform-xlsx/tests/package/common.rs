//! Helpers for inspecting written XLSX packages.

use std::collections::BTreeMap;
use std::io::{Cursor, Read};

use gridform_core::Workbook;
use gridform_xlsx::XlsxWriter;
use quick_xml::events::Event;
use quick_xml::reader::Reader;

/// An element's attributes, keyed by attribute name.
pub type Attrs = BTreeMap<String, String>;

/// Write the workbook and return the raw package bytes.
pub fn package_bytes(workbook: &Workbook) -> Vec<u8> {
    XlsxWriter::to_bytes(workbook).expect("workbook should serialize")
}

/// Read one part of a package as a string.
pub fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("valid zip");
    let mut file = archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("missing part {name}"));
    let mut content = String::new();
    file.read_to_string(&mut content).expect("utf-8 part");
    content
}

/// List every part name in the package.
pub fn part_names(bytes: &[u8]) -> Vec<String> {
    let archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("valid zip");
    archive.file_names().map(str::to_string).collect()
}

/// Collect the attributes of every element named `tag`, in document order.
pub fn elements(xml: &str, tag: &str) -> Vec<Attrs> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut found = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) if e.name().as_ref() == tag.as_bytes() => {
                let mut attrs = Attrs::new();
                for attr in e.attributes() {
                    let attr = attr.expect("well-formed attribute");
                    let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
                    let value = attr.unescape_value().expect("escaped value").into_owned();
                    attrs.insert(key, value);
                }
                found.push(attrs);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("malformed XML at {}: {e}", reader.buffer_position()),
        }
    }
    found
}

/// Collect the unescaped text content of every element named `tag`.
pub fn texts(xml: &str, tag: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut found = Vec::new();
    let mut inside = false;
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == tag.as_bytes() => inside = true,
            Ok(Event::End(e)) if e.name().as_ref() == tag.as_bytes() => inside = false,
            Ok(Event::Text(t)) if inside => {
                found.push(t.unescape().expect("escaped text").into_owned());
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("malformed XML at {}: {e}", reader.buffer_position()),
        }
    }
    found
}

/// The attributes of the `<c>` element with reference `cell_ref`.
pub fn cell_attrs(sheet_xml: &str, cell_ref: &str) -> Option<Attrs> {
    elements(sheet_xml, "c")
        .into_iter()
        .find(|attrs| attrs.get("r").map(String::as_str) == Some(cell_ref))
}

/// Attributes of the `<xf>` entries inside `<cellXfs>`.
pub fn cell_xfs(styles_xml: &str) -> Vec<Attrs> {
    let start = styles_xml.find("<cellXfs").expect("cellXfs present");
    let end = styles_xml.find("</cellXfs>").expect("cellXfs closed");
    elements(&styles_xml[start..end + "</cellXfs>".len()], "xf")
}
