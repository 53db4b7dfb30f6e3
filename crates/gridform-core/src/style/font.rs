//! Font attributes

use super::Color;

/// Font of a cell
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontStyle {
    /// Family name, e.g. "Calibri"
    pub name: String,
    /// Size in points
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
    pub underline: Underline,
    pub strikethrough: bool,
    pub color: Color,
    pub vertical_align: FontVerticalAlign,
}

impl Default for FontStyle {
    /// Calibri 11, the workbook default font
    fn default() -> Self {
        Self {
            name: "Calibri".to_string(),
            size: 11.0,
            bold: false,
            italic: false,
            underline: Underline::None,
            strikethrough: false,
            color: Color::Auto,
            vertical_align: FontVerticalAlign::Baseline,
        }
    }
}

// `size` is never NaN, so hashing its bits agrees with PartialEq
impl std::hash::Hash for FontStyle {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.size.to_bits().hash(state);
        (self.bold, self.italic, self.strikethrough).hash(state);
        self.underline.hash(state);
        self.color.hash(state);
        self.vertical_align.hash(state);
    }
}

impl Eq for FontStyle {}

/// Underline kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Underline {
    #[default]
    None,
    Single,
    Double,
    /// Underline spanning the cell width
    SingleAccounting,
    DoubleAccounting,
}

impl Underline {
    /// OOXML `val` name
    pub fn as_str(&self) -> &'static str {
        match self {
            Underline::None => "none",
            Underline::Single => "single",
            Underline::Double => "double",
            Underline::SingleAccounting => "singleAccounting",
            Underline::DoubleAccounting => "doubleAccounting",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "none" => Underline::None,
            "single" => Underline::Single,
            "double" => Underline::Double,
            "singleAccounting" => Underline::SingleAccounting,
            "doubleAccounting" => Underline::DoubleAccounting,
            _ => return None,
        })
    }
}

/// Superscript / subscript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontVerticalAlign {
    #[default]
    Baseline,
    Superscript,
    Subscript,
}

impl FontVerticalAlign {
    /// OOXML `vertAlign` name
    pub fn as_str(&self) -> &'static str {
        match self {
            FontVerticalAlign::Baseline => "baseline",
            FontVerticalAlign::Superscript => "superscript",
            FontVerticalAlign::Subscript => "subscript",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "baseline" => FontVerticalAlign::Baseline,
            "superscript" => FontVerticalAlign::Superscript,
            "subscript" => FontVerticalAlign::Subscript,
            _ => return None,
        })
    }
}
