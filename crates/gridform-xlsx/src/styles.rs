//! styles.xml generation

use ahash::AHashMap;
use quick_xml::escape::escape;

use gridform_core::style::{
    Alignment, BorderEdge, BorderLineStyle, BorderSide, BorderStyle, Color, FillStyle, FontStyle,
    FontVerticalAlign, NumberFormat, PatternType, Style, Underline,
};
use gridform_core::Worksheet;

/// Deduplicated cellXfs table for one worksheet
#[derive(Debug)]
pub(crate) struct XlsxStyleTable {
    /// Index corresponds to the cellXfs index (xfId).
    styles: Vec<Style>,
    /// Local worksheet style index -> xfId.
    xf_map: AHashMap<u32, u32>,
}

#[derive(Debug, Clone, Copy)]
struct ResolvedXfIds {
    font_id: u32,
    fill_id: u32,
    border_id: u32,
    num_fmt_id: u32,
}

/// Intern `item` into `items`, returning its position
fn intern<T: Clone + Eq + std::hash::Hash>(
    items: &mut Vec<T>,
    ids: &mut AHashMap<T, u32>,
    item: &T,
) -> u32 {
    if let Some(&id) = ids.get(item) {
        return id;
    }
    let id = items.len() as u32;
    items.push(item.clone());
    ids.insert(item.clone(), id);
    id
}

impl XlsxStyleTable {
    pub(crate) fn build(sheet: &Worksheet) -> Self {
        let mut styles: Vec<Style> = Vec::new();
        let mut style_to_xf: AHashMap<Style, u32> = AHashMap::new();

        // Index 0 is always the default style
        intern(&mut styles, &mut style_to_xf, &Style::default());

        let mut xf_map: AHashMap<u32, u32> = AHashMap::new();
        xf_map.insert(0, 0);

        for (_row, _col, cell) in sheet.iter_cells() {
            let local_idx = cell.style_index;
            if xf_map.contains_key(&local_idx) {
                continue;
            }
            let style = sheet
                .style_by_index(local_idx)
                .cloned()
                .unwrap_or_default();
            let xf_id = intern(&mut styles, &mut style_to_xf, &style);
            xf_map.insert(local_idx, xf_id);
        }

        log::trace!("style table holds {} cellXfs", styles.len());
        Self { styles, xf_map }
    }

    pub(crate) fn xf_id_for(&self, local_style_index: u32) -> u32 {
        self.xf_map.get(&local_style_index).copied().unwrap_or(0)
    }

    pub(crate) fn len(&self) -> usize {
        self.styles.len()
    }

    pub(crate) fn to_styles_xml(&self) -> String {
        let mut fonts: Vec<FontStyle> = Vec::new();
        let mut font_ids: AHashMap<FontStyle, u32> = AHashMap::new();
        intern(&mut fonts, &mut font_ids, &FontStyle::default());

        // Excel requires the first two fills to be none and gray125
        let mut fills: Vec<FillStyle> = Vec::new();
        let mut fill_ids: AHashMap<FillStyle, u32> = AHashMap::new();
        intern(&mut fills, &mut fill_ids, &FillStyle::None);
        intern(
            &mut fills,
            &mut fill_ids,
            &FillStyle::pattern(PatternType::Gray125, Color::Auto, Color::Auto),
        );

        let mut borders: Vec<BorderStyle> = Vec::new();
        let mut border_ids: AHashMap<BorderStyle, u32> = AHashMap::new();
        intern(&mut borders, &mut border_ids, &BorderStyle::default());

        // Custom number formats start at 164
        let mut numfmt_ids: AHashMap<String, u32> = AHashMap::new();
        let mut numfmts: Vec<(u32, String)> = Vec::new();

        let resolved: Vec<ResolvedXfIds> = self
            .styles
            .iter()
            .map(|style| {
                let num_fmt_id = match &style.number_format {
                    NumberFormat::General => 0,
                    NumberFormat::BuiltIn(id) => *id,
                    NumberFormat::Custom(code) => match numfmt_ids.get(code) {
                        Some(&id) => id,
                        None => {
                            let id = 164 + numfmts.len() as u32;
                            numfmt_ids.insert(code.clone(), id);
                            numfmts.push((id, code.clone()));
                            id
                        }
                    },
                };
                ResolvedXfIds {
                    font_id: intern(&mut fonts, &mut font_ids, &style.font),
                    fill_id: intern(&mut fills, &mut fill_ids, &style.fill),
                    border_id: intern(&mut borders, &mut border_ids, &style.border),
                    num_fmt_id,
                }
            })
            .collect();

        let mut xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
        );

        if !numfmts.is_empty() {
            xml.push_str(&format!("\n  <numFmts count=\"{}\">", numfmts.len()));
            for (id, code) in &numfmts {
                xml.push_str(&format!(
                    "\n    <numFmt numFmtId=\"{}\" formatCode=\"{}\"/>",
                    id,
                    escape(code.as_str())
                ));
            }
            xml.push_str("\n  </numFmts>");
        }

        xml.push_str(&format!("\n  <fonts count=\"{}\">", fonts.len()));
        for font in &fonts {
            xml.push_str("\n    ");
            xml.push_str(&write_font(font));
        }
        xml.push_str("\n  </fonts>");

        xml.push_str(&format!("\n  <fills count=\"{}\">", fills.len()));
        for fill in &fills {
            xml.push_str("\n    ");
            xml.push_str(&write_fill(fill));
        }
        xml.push_str("\n  </fills>");

        xml.push_str(&format!("\n  <borders count=\"{}\">", borders.len()));
        for border in &borders {
            xml.push_str("\n    ");
            xml.push_str(&write_border(border));
        }
        xml.push_str("\n  </borders>");

        xml.push_str(
            r#"
  <cellStyleXfs count="1">
    <xf numFmtId="0" fontId="0" fillId="0" borderId="0"/>
  </cellStyleXfs>"#,
        );

        xml.push_str(&format!("\n  <cellXfs count=\"{}\">", self.styles.len()));
        for (style, ids) in self.styles.iter().zip(&resolved) {
            xml.push_str("\n    ");
            xml.push_str(&write_xf(style, *ids));
        }
        xml.push_str("\n  </cellXfs>");

        xml.push_str(
            r#"
  <cellStyles count="1">
    <cellStyle name="Normal" xfId="0" builtinId="0"/>
  </cellStyles>
  <dxfs count="0"/>
  <tableStyles count="0" defaultTableStyle="TableStyleMedium9" defaultPivotStyle="PivotStyleLight16"/>
</styleSheet>"#,
        );
        xml
    }
}

fn color_attrs(color: &Color) -> String {
    match color {
        Color::Auto => " indexed=\"64\"".to_string(),
        other => format!(" rgb=\"{}\"", other.to_argb_hex()),
    }
}

fn write_color(tag: &str, color: &Color) -> String {
    format!("<{tag}{}/>", color_attrs(color))
}

fn write_font(font: &FontStyle) -> String {
    let mut s = String::from("<font>");
    if font.bold {
        s.push_str("<b/>");
    }
    if font.italic {
        s.push_str("<i/>");
    }
    if font.strikethrough {
        s.push_str("<strike/>");
    }
    match font.underline {
        Underline::None => {}
        Underline::Single => s.push_str("<u/>"),
        other => s.push_str(&format!("<u val=\"{}\"/>", other.as_str())),
    }
    if font.vertical_align != FontVerticalAlign::Baseline {
        s.push_str(&format!("<vertAlign val=\"{}\"/>", font.vertical_align.as_str()));
    }
    s.push_str(&format!("<sz val=\"{}\"/>", font.size));
    if !font.color.is_auto() {
        s.push_str(&write_color("color", &font.color));
    }
    s.push_str(&format!("<name val=\"{}\"/>", escape(font.name.as_str())));
    s.push_str("</font>");
    s
}

fn write_fill(fill: &FillStyle) -> String {
    match fill {
        FillStyle::None => "<fill><patternFill patternType=\"none\"/></fill>".to_string(),
        FillStyle::Solid { color } => format!(
            "<fill><patternFill patternType=\"solid\">{}<bgColor indexed=\"64\"/></patternFill></fill>",
            write_color("fgColor", color)
        ),
        FillStyle::Pattern {
            pattern,
            foreground,
            background,
        } => format!(
            "<fill><patternFill patternType=\"{}\">{}{}</patternFill></fill>",
            pattern.as_str(),
            write_color("fgColor", foreground),
            write_color("bgColor", background)
        ),
    }
}

fn write_border_edge(side: BorderSide, edge: &Option<BorderEdge>) -> String {
    let tag = side.name();
    match edge {
        Some(e) if e.style != BorderLineStyle::None => format!(
            "<{tag} style=\"{}\">{}</{tag}>",
            e.style.as_str(),
            write_color("color", &e.color)
        ),
        _ => format!("<{tag}/>"),
    }
}

fn write_border(border: &BorderStyle) -> String {
    // OOXML fixes the child order: left, right, top, bottom, diagonal
    let mut s = String::from("<border>");
    for side in BorderSide::ALL {
        s.push_str(&write_border_edge(side, border.edge(side)));
    }
    s.push_str("<diagonal/></border>");
    s
}

fn write_alignment(al: &Alignment) -> String {
    let default = Alignment::default();
    if al == &default {
        return String::new();
    }

    let mut s = String::from("<alignment");
    if al.horizontal != default.horizontal {
        s.push_str(&format!(" horizontal=\"{}\"", al.horizontal.as_str()));
    }
    if al.vertical != default.vertical {
        s.push_str(&format!(" vertical=\"{}\"", al.vertical.as_str()));
    }
    if al.wrap_text {
        s.push_str(" wrapText=\"1\"");
    }
    if al.shrink_to_fit {
        s.push_str(" shrinkToFit=\"1\"");
    }
    if al.indent != 0 {
        s.push_str(&format!(" indent=\"{}\"", al.indent));
    }
    if al.rotation != 0 {
        s.push_str(&format!(" textRotation=\"{}\"", al.rotation));
    }
    s.push_str("/>");
    s
}

fn write_xf(style: &Style, ids: ResolvedXfIds) -> String {
    let mut attrs = String::new();
    if ids.num_fmt_id != 0 {
        attrs.push_str(" applyNumberFormat=\"1\"");
    }
    if style.font != FontStyle::default() {
        attrs.push_str(" applyFont=\"1\"");
    }
    if !style.fill.is_none() {
        attrs.push_str(" applyFill=\"1\"");
    }
    if !style.border.is_empty() {
        attrs.push_str(" applyBorder=\"1\"");
    }
    if style.alignment != Alignment::default() {
        attrs.push_str(" applyAlignment=\"1\"");
    }

    let head = format!(
        "<xf numFmtId=\"{}\" fontId=\"{}\" fillId=\"{}\" borderId=\"{}\" xfId=\"0\"{}",
        ids.num_fmt_id, ids.font_id, ids.fill_id, ids.border_id, attrs
    );
    let alignment_xml = write_alignment(&style.alignment);
    if alignment_xml.is_empty() {
        format!("{head}/>")
    } else {
        format!("{head}>{alignment_xml}</xf>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridform_core::style::HorizontalAlignment;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_table() {
        let sheet = Worksheet::new("Sheet1");
        let table = XlsxStyleTable::build(&sheet);
        assert_eq!(table.len(), 1);
        assert_eq!(table.xf_id_for(0), 0);

        let xml = table.to_styles_xml();
        assert!(xml.contains("<fills count=\"2\">"));
        assert!(xml.contains("patternType=\"gray125\""));
        assert!(xml.contains("<cellXfs count=\"1\">"));
    }

    #[test]
    fn test_shared_styles_dedupe() {
        let mut sheet = Worksheet::new("Sheet1");
        let bold = Style::new().bold(true);
        sheet.set_cell_style_at(0, 0, &bold).unwrap();
        sheet.set_cell_style_at(0, 1, &bold).unwrap();
        sheet
            .set_cell_style_at(1, 0, &Style::new().number_format("0.000"))
            .unwrap();

        let table = XlsxStyleTable::build(&sheet);
        assert_eq!(table.len(), 3);

        let xml = table.to_styles_xml();
        assert!(xml.contains("<numFmt numFmtId=\"164\" formatCode=\"0.000\"/>"));
        assert!(xml.contains("<b/>"));
    }

    #[test]
    fn test_border_sides_in_order() {
        let border = BorderStyle::new().with_side(
            BorderSide::Bottom,
            BorderLineStyle::Thick,
            Color::rgb(0x11, 0x22, 0x33),
        );
        assert_eq!(
            write_border(&border),
            "<border><left/><right/><top/><bottom style=\"thick\"><color rgb=\"FF112233\"/></bottom><diagonal/></border>"
        );
    }

    #[test]
    fn test_alignment_only_when_set() {
        assert_eq!(write_alignment(&Alignment::default()), "");
        let centered = Alignment::new()
            .with_horizontal(HorizontalAlignment::Center)
            .with_wrap(true);
        assert_eq!(
            write_alignment(&centered),
            "<alignment horizontal=\"center\" wrapText=\"1\"/>"
        );
    }

    #[test]
    fn test_font_name_escaped() {
        let font = FontStyle {
            name: "A&B".to_string(),
            ..Default::default()
        };
        assert!(write_font(&font).contains("<name val=\"A&amp;B\"/>"));
    }
}
