//! JSON -> StyleSpec
//!
//! Each axis has a closed table of accepted attribute names. Anything outside
//! the table is rejected with `InvalidStyleAttribute`; an accepted name with a
//! value of the wrong shape is `InvalidStyleValue`. A JSON `null` leaves the
//! attribute unset.

use serde_json::{Map, Value};

use gridform_core::style::{
    BorderLineStyle, BorderSide, Color, FontVerticalAlign, HorizontalAlignment, PatternType,
    Underline, VerticalAlignment,
};

use super::{AlignmentSpec, BorderSpec, FillSpec, FontSpec, SideSpec, StyleSpec};
use crate::error::{Error, Result};

pub(super) fn style_spec(value: &Value) -> Result<StyleSpec> {
    let mut spec = StyleSpec::default();
    for (axis, body) in object("cell", "style", value)? {
        match axis.as_str() {
            "font" => spec.font = optional(body, font)?,
            "border" => spec.border = optional(body, border)?,
            "fill" => spec.fill = optional(body, fill)?,
            "alignment" => spec.alignment = optional(body, alignment)?,
            _ => return Err(Error::style_attribute("style", axis)),
        }
    }
    Ok(spec)
}

fn font(value: &Value) -> Result<FontSpec> {
    const AXIS: &str = "font";
    let mut spec = FontSpec::default();
    for (key, v) in object("style", AXIS, value)? {
        let key = key.as_str();
        match key {
            "name" => spec.name = optional(v, |v| string(AXIS, key, v).map(str::to_string))?,
            "size" | "sz" => {
                spec.size = optional(v, |v| {
                    number(AXIS, key, v)
                        .and_then(|n| positive(AXIS, key, v, n))
                })?
            }
            "bold" | "b" => spec.bold = optional(v, |v| boolean(AXIS, key, v))?,
            "italic" | "i" => spec.italic = optional(v, |v| boolean(AXIS, key, v))?,
            "underline" | "u" => {
                spec.underline = optional(v, |v| named(AXIS, key, v, Underline::from_name))?
            }
            "strike" | "strikethrough" => {
                spec.strikethrough = optional(v, |v| boolean(AXIS, key, v))?
            }
            "color" => spec.color = optional(v, |v| color(AXIS, key, v))?,
            "vertAlign" | "vert_align" => {
                spec.vertical_align =
                    optional(v, |v| named(AXIS, key, v, FontVerticalAlign::from_name))?
            }
            _ => return Err(Error::style_attribute(AXIS, key)),
        }
    }
    Ok(spec)
}

fn border(value: &Value) -> Result<BorderSpec> {
    let mut spec = BorderSpec::default();
    for (name, body) in object("style", "border", value)? {
        let side = BorderSide::from_name(name)
            .ok_or_else(|| Error::style_attribute("border", name))?;
        *spec.side_mut(side) = optional(body, |body| border_side(side, body))?;
    }
    Ok(spec)
}

fn border_side(side: BorderSide, value: &Value) -> Result<SideSpec> {
    let axis = format!("border.{}", side.name());
    let mut spec = SideSpec::default();
    for (key, v) in object("border", side.name(), value)? {
        let key = key.as_str();
        match key {
            "border_style" | "style" => {
                spec.style = optional(v, |v| named(&axis, key, v, BorderLineStyle::from_name))?
            }
            "color" => spec.color = optional(v, |v| color(&axis, key, v))?,
            _ => return Err(Error::style_attribute(&axis, key)),
        }
    }
    Ok(spec)
}

fn fill(value: &Value) -> Result<FillSpec> {
    const AXIS: &str = "fill";
    let mut spec = FillSpec::default();
    for (key, v) in object("style", AXIS, value)? {
        let key = key.as_str();
        match key {
            "fill_type" | "patternType" | "pattern_type" => {
                spec.pattern = optional(v, |v| named(AXIS, key, v, PatternType::from_name))?
            }
            "start_color" | "fgColor" | "fg_color" => {
                spec.start_color = optional(v, |v| color(AXIS, key, v))?
            }
            "end_color" | "bgColor" | "bg_color" => {
                spec.end_color = optional(v, |v| color(AXIS, key, v))?
            }
            _ => return Err(Error::style_attribute(AXIS, key)),
        }
    }
    Ok(spec)
}

fn alignment(value: &Value) -> Result<AlignmentSpec> {
    const AXIS: &str = "alignment";
    let mut spec = AlignmentSpec::default();
    for (key, v) in object("style", AXIS, value)? {
        let key = key.as_str();
        match key {
            "horizontal" => {
                spec.horizontal =
                    optional(v, |v| named(AXIS, key, v, HorizontalAlignment::from_name))?
            }
            "vertical" => {
                spec.vertical = optional(v, |v| named(AXIS, key, v, VerticalAlignment::from_name))?
            }
            "wrap_text" | "wrapText" => spec.wrap_text = optional(v, |v| boolean(AXIS, key, v))?,
            "shrink_to_fit" | "shrinkToFit" => {
                spec.shrink_to_fit = optional(v, |v| boolean(AXIS, key, v))?
            }
            "indent" => {
                spec.indent = optional(v, |v| {
                    v.as_u64()
                        .filter(|&n| n <= 250)
                        .map(|n| n as u8)
                        .ok_or_else(|| Error::style_value(AXIS, key, v))
                })?
            }
            "text_rotation" | "textRotation" => {
                spec.rotation = optional(v, |v| {
                    v.as_i64()
                        .filter(|&n| (-90..=90).contains(&n) || n == 255)
                        .map(|n| n as i16)
                        .ok_or_else(|| Error::style_value(AXIS, key, v))
                })?
            }
            _ => return Err(Error::style_attribute(AXIS, key)),
        }
    }
    Ok(spec)
}

fn optional<T>(value: &Value, parse: impl FnOnce(&Value) -> Result<T>) -> Result<Option<T>> {
    if value.is_null() {
        Ok(None)
    } else {
        parse(value).map(Some)
    }
}

fn object<'a>(axis: &str, attribute: &str, value: &'a Value) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| Error::style_value(axis, attribute, value))
}

fn string<'a>(axis: &str, attribute: &str, value: &'a Value) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| Error::style_value(axis, attribute, value))
}

fn boolean(axis: &str, attribute: &str, value: &Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| Error::style_value(axis, attribute, value))
}

fn number(axis: &str, attribute: &str, value: &Value) -> Result<f64> {
    value
        .as_f64()
        .ok_or_else(|| Error::style_value(axis, attribute, value))
}

fn positive(axis: &str, attribute: &str, value: &Value, n: f64) -> Result<f64> {
    if n > 0.0 {
        Ok(n)
    } else {
        Err(Error::style_value(axis, attribute, value))
    }
}

fn color(axis: &str, attribute: &str, value: &Value) -> Result<Color> {
    Color::from_hex(string(axis, attribute, value)?)
        .ok_or_else(|| Error::style_value(axis, attribute, value))
}

fn named<T>(
    axis: &str,
    attribute: &str,
    value: &Value,
    from_name: fn(&str) -> Option<T>,
) -> Result<T> {
    from_name(string(axis, attribute, value)?)
        .ok_or_else(|| Error::style_value(axis, attribute, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_full_vocabulary() {
        let spec = style_spec(&json!({
            "font": {"name": "Arial", "sz": 12, "b": true, "italic": false,
                     "u": "double", "strike": true, "color": "#FF0000", "vertAlign": "superscript"},
            "border": {"top": {"border_style": "thin", "color": "000000"},
                       "left": {"style": "dashDot"}},
            "fill": {"fill_type": "solid", "start_color": "FFFF00", "bgColor": "80112233"},
            "alignment": {"horizontal": "center", "vertical": "top", "wrapText": true,
                          "shrink_to_fit": false, "indent": 2, "text_rotation": -45}
        }))
        .unwrap();

        assert_eq!(
            spec.font,
            Some(FontSpec {
                name: Some("Arial".into()),
                size: Some(12.0),
                bold: Some(true),
                italic: Some(false),
                underline: Some(Underline::Double),
                strikethrough: Some(true),
                color: Some(Color::RED),
                vertical_align: Some(FontVerticalAlign::Superscript),
            })
        );

        let border = spec.border.unwrap();
        assert_eq!(
            border.top,
            Some(SideSpec {
                style: Some(BorderLineStyle::Thin),
                color: Some(Color::BLACK),
            })
        );
        assert_eq!(border.left.unwrap().style, Some(BorderLineStyle::DashDot));
        assert!(border.right.is_none());

        assert_eq!(
            spec.fill,
            Some(FillSpec {
                pattern: Some(PatternType::Solid),
                start_color: Some(Color::YELLOW),
                end_color: Some(Color::argb(0x80, 0x11, 0x22, 0x33)),
            })
        );

        let alignment = spec.alignment.unwrap();
        assert_eq!(alignment.horizontal, Some(HorizontalAlignment::Center));
        assert_eq!(alignment.vertical, Some(VerticalAlignment::Top));
        assert_eq!(alignment.wrap_text, Some(true));
        assert_eq!(alignment.indent, Some(2));
        assert_eq!(alignment.rotation, Some(-45));
    }

    #[test]
    fn test_empty_and_null() {
        assert!(style_spec(&json!({})).unwrap().is_empty());

        let spec = style_spec(&json!({"font": null, "fill": {"start_color": null}})).unwrap();
        assert!(spec.font.is_none());
        assert_eq!(spec.fill, Some(FillSpec::default()));
    }

    #[test]
    fn test_unknown_attribute_rejected() {
        let err = style_spec(&json!({"font": {"weight": "bold"}})).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidStyleAttribute { ref axis, ref attribute }
                if axis == "font" && attribute == "weight"
        ));

        let err = style_spec(&json!({"border": {"diagonal": {"style": "thin"}}})).unwrap_err();
        assert!(matches!(err, Error::InvalidStyleAttribute { ref axis, .. } if axis == "border"));

        let err = style_spec(&json!({"border": {"top": {"width": 2}}})).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidStyleAttribute { ref axis, ref attribute }
                if axis == "border.top" && attribute == "width"
        ));

        let err = style_spec(&json!({"protection": {}})).unwrap_err();
        assert!(matches!(err, Error::InvalidStyleAttribute { ref axis, .. } if axis == "style"));
    }

    #[test]
    fn test_bad_values_rejected() {
        for bad in [
            json!({"font": {"bold": "yes"}}),
            json!({"font": {"size": 0}}),
            json!({"font": {"color": "red"}}),
            json!({"border": {"top": {"border_style": "wavy"}}}),
            json!({"fill": {"fill_type": 3}}),
            json!({"alignment": {"indent": -1}}),
            json!({"alignment": {"text_rotation": 120}}),
            json!({"font": "Arial"}),
        ] {
            let err = style_spec(&bad).unwrap_err();
            assert!(
                matches!(err, Error::InvalidStyleValue { .. }),
                "expected InvalidStyleValue for {bad}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_style_must_be_object() {
        assert!(matches!(
            style_spec(&json!([1, 2])),
            Err(Error::InvalidStyleValue { .. })
        ));
    }
}
