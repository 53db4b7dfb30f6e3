//! Conversion options

use gridform_core::Style;

use crate::error::Result;
use crate::style::{StyleResolver, StyleSpec};

/// Options for turning a descriptor into a workbook
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Name of the generated worksheet (default: "Sheet1")
    pub sheet_name: String,
    /// Style every cell override is resolved against
    pub default_style: Style,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            sheet_name: "Sheet1".to_string(),
            default_style: Style::default(),
        }
    }
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet_name<S: Into<String>>(mut self, name: S) -> Self {
        self.sheet_name = name.into();
        self
    }

    pub fn with_default_style(mut self, style: Style) -> Self {
        self.default_style = style;
        self
    }
}

/// Build a default style from a `style`-shaped JSON document
///
/// The document uses the same vocabulary as a cell's `style` object and is
/// resolved against [`Style::default()`].
pub fn default_style_from_json(json: &str) -> Result<Style> {
    let spec = StyleSpec::from_json(json)?;
    Ok(StyleResolver::resolve(&spec, &Style::default()))
}
