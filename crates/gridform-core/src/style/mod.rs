//! Fully resolved cell formatting
//!
//! A [`Style`] always carries a value for every attribute. Partial overrides
//! live one level up, in the layout crate, and are merged into a `Style`
//! before anything reaches a worksheet.

mod alignment;
mod border;
mod color;
mod fill;
mod font;
mod number_format;
mod pool;

pub use alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
pub use border::{BorderEdge, BorderLineStyle, BorderSide, BorderStyle};
pub use color::Color;
pub use fill::{FillStyle, PatternType};
pub use font::{FontStyle, FontVerticalAlign, Underline};
pub use number_format::NumberFormat;
pub use pool::StylePool;

/// Complete cell style
///
/// Worksheets intern styles through a [`StylePool`], so equal styles share
/// one index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    pub font: FontStyle,
    pub fill: FillStyle,
    pub border: BorderStyle,
    pub alignment: Alignment,
    pub number_format: NumberFormat,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.font.bold = bold;
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.font.italic = italic;
        self
    }

    /// Font size in points
    pub fn font_size(mut self, size: f64) -> Self {
        self.font.size = size;
        self
    }

    pub fn font_name<S: Into<String>>(mut self, name: S) -> Self {
        self.font.name = name.into();
        self
    }

    pub fn font_color(mut self, color: Color) -> Self {
        self.font.color = color;
        self
    }

    /// Replace the fill with a solid one
    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill = FillStyle::solid(color);
        self
    }

    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Format code such as `"0.00"` or `"#,##0"`
    pub fn number_format<S: Into<String>>(mut self, format: S) -> Self {
        self.number_format = NumberFormat::from_string(format);
        self
    }

    pub fn horizontal_alignment(mut self, align: HorizontalAlignment) -> Self {
        self.alignment.horizontal = align;
        self
    }

    pub fn vertical_alignment(mut self, align: VerticalAlignment) -> Self {
        self.alignment.vertical = align;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_touch_one_attribute() {
        let style = Style::new().bold(true).fill_color(Color::RED);
        assert!(style.font.bold);
        assert_eq!(style.fill, FillStyle::solid(Color::RED));
        assert_eq!(style.border, BorderStyle::default());
        assert_ne!(style, Style::default());
    }
}
