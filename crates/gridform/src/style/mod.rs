//! Partial style overrides and their resolution against a base style
//!
//! A [`StyleSpec`] is the `style` object of a cell in the descriptor. Every
//! attribute in it is optional; [`StyleResolver`] lays the attributes that are
//! present over a fully populated [`Style`] and leaves everything else alone.

mod parse;
mod resolve;

pub use resolve::StyleResolver;

use gridform_core::style::{
    BorderLineStyle, BorderSide, Color, FontVerticalAlign, HorizontalAlignment, PatternType,
    Underline, VerticalAlignment,
};

/// Per-cell style override, one optional sub-object per axis
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSpec {
    pub font: Option<FontSpec>,
    pub border: Option<BorderSpec>,
    pub fill: Option<FillSpec>,
    pub alignment: Option<AlignmentSpec>,
}

impl StyleSpec {
    /// Create an empty override
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no axis is overridden
    pub fn is_empty(&self) -> bool {
        self.font.is_none() && self.border.is_none() && self.fill.is_none() && self.alignment.is_none()
    }

    /// Parse a `style` JSON object
    pub fn from_value(value: &serde_json::Value) -> crate::Result<Self> {
        parse::style_spec(value)
    }

    /// Parse a `style` JSON document
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    pub fn with_font(mut self, font: FontSpec) -> Self {
        self.font = Some(font);
        self
    }

    pub fn with_border(mut self, border: BorderSpec) -> Self {
        self.border = Some(border);
        self
    }

    pub fn with_fill(mut self, fill: FillSpec) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_alignment(mut self, alignment: AlignmentSpec) -> Self {
        self.alignment = Some(alignment);
        self
    }
}

/// Font attributes to override
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontSpec {
    pub name: Option<String>,
    pub size: Option<f64>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<Underline>,
    pub strikethrough: Option<bool>,
    pub color: Option<Color>,
    pub vertical_align: Option<FontVerticalAlign>,
}

/// Border sides to override; absent sides keep the base edge
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BorderSpec {
    pub left: Option<SideSpec>,
    pub right: Option<SideSpec>,
    pub top: Option<SideSpec>,
    pub bottom: Option<SideSpec>,
}

impl BorderSpec {
    pub fn side(&self, side: BorderSide) -> Option<&SideSpec> {
        match side {
            BorderSide::Left => self.left.as_ref(),
            BorderSide::Right => self.right.as_ref(),
            BorderSide::Top => self.top.as_ref(),
            BorderSide::Bottom => self.bottom.as_ref(),
        }
    }

    pub fn side_mut(&mut self, side: BorderSide) -> &mut Option<SideSpec> {
        match side {
            BorderSide::Left => &mut self.left,
            BorderSide::Right => &mut self.right,
            BorderSide::Top => &mut self.top,
            BorderSide::Bottom => &mut self.bottom,
        }
    }

    /// Set one side
    pub fn with_side(mut self, side: BorderSide, spec: SideSpec) -> Self {
        *self.side_mut(side) = Some(spec);
        self
    }
}

/// One border side: line style and color
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SideSpec {
    pub style: Option<BorderLineStyle>,
    pub color: Option<Color>,
}

/// Pattern fill attributes to override
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FillSpec {
    pub pattern: Option<PatternType>,
    /// Foreground color (`start_color` / `fgColor`)
    pub start_color: Option<Color>,
    /// Background color (`end_color` / `bgColor`)
    pub end_color: Option<Color>,
}

/// Alignment attributes to override
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AlignmentSpec {
    pub horizontal: Option<HorizontalAlignment>,
    pub vertical: Option<VerticalAlignment>,
    pub wrap_text: Option<bool>,
    pub shrink_to_fit: Option<bool>,
    pub indent: Option<u8>,
    pub rotation: Option<i16>,
}
