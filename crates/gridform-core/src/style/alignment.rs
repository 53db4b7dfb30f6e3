//! Text alignment types

/// Text alignment settings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    /// Horizontal alignment
    pub horizontal: HorizontalAlignment,
    /// Vertical alignment
    pub vertical: VerticalAlignment,
    /// Wrap text
    pub wrap_text: bool,
    /// Shrink to fit
    pub shrink_to_fit: bool,
    /// Indent level (0-250)
    pub indent: u8,
    /// Text rotation in degrees (-90 to 90, or 255 for vertical)
    pub rotation: i16,
}

impl Alignment {
    /// Create a new default alignment
    pub fn new() -> Self {
        Self::default()
    }

    /// Set horizontal alignment
    pub fn with_horizontal(mut self, align: HorizontalAlignment) -> Self {
        self.horizontal = align;
        self
    }

    /// Set vertical alignment
    pub fn with_vertical(mut self, align: VerticalAlignment) -> Self {
        self.vertical = align;
        self
    }

    /// Enable text wrapping
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap_text = wrap;
        self
    }
}

/// Horizontal alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlignment {
    /// General alignment (text left, numbers right)
    #[default]
    General,
    Left,
    Center,
    Right,
    /// Fill (repeat content to fill cell width)
    Fill,
    Justify,
    /// Center across selection
    CenterContinuous,
    Distributed,
}

impl HorizontalAlignment {
    /// OOXML name
    pub fn as_str(&self) -> &'static str {
        match self {
            HorizontalAlignment::General => "general",
            HorizontalAlignment::Left => "left",
            HorizontalAlignment::Center => "center",
            HorizontalAlignment::Right => "right",
            HorizontalAlignment::Fill => "fill",
            HorizontalAlignment::Justify => "justify",
            HorizontalAlignment::CenterContinuous => "centerContinuous",
            HorizontalAlignment::Distributed => "distributed",
        }
    }

    /// Parse an OOXML name
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "general" => HorizontalAlignment::General,
            "left" => HorizontalAlignment::Left,
            "center" => HorizontalAlignment::Center,
            "right" => HorizontalAlignment::Right,
            "fill" => HorizontalAlignment::Fill,
            "justify" => HorizontalAlignment::Justify,
            "centerContinuous" => HorizontalAlignment::CenterContinuous,
            "distributed" => HorizontalAlignment::Distributed,
            _ => return None,
        })
    }
}

/// Vertical alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalAlignment {
    Top,
    Center,
    /// Bottom aligned (default)
    #[default]
    Bottom,
    Justify,
    Distributed,
}

impl VerticalAlignment {
    /// OOXML name
    pub fn as_str(&self) -> &'static str {
        match self {
            VerticalAlignment::Top => "top",
            VerticalAlignment::Center => "center",
            VerticalAlignment::Bottom => "bottom",
            VerticalAlignment::Justify => "justify",
            VerticalAlignment::Distributed => "distributed",
        }
    }

    /// Parse an OOXML name
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "top" => VerticalAlignment::Top,
            "center" => VerticalAlignment::Center,
            "bottom" => VerticalAlignment::Bottom,
            "justify" => VerticalAlignment::Justify,
            "distributed" => VerticalAlignment::Distributed,
            _ => return None,
        })
    }
}
