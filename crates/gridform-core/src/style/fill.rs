//! Fill/background style types

use super::Color;

/// Fill style for cell background
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillStyle {
    /// No fill (transparent)
    #[default]
    None,

    /// Solid color fill
    Solid { color: Color },

    /// Pattern fill
    Pattern {
        pattern: PatternType,
        foreground: Color,
        background: Color,
    },
}

impl FillStyle {
    /// Create a solid fill with the given color
    pub fn solid(color: Color) -> Self {
        FillStyle::Solid { color }
    }

    /// Create a pattern fill
    pub fn pattern(pattern: PatternType, foreground: Color, background: Color) -> Self {
        FillStyle::Pattern {
            pattern,
            foreground,
            background,
        }
    }

    /// Build a fill from its pattern and two colors, picking the simplest variant
    pub fn from_parts(pattern: PatternType, foreground: Color, background: Color) -> Self {
        match pattern {
            PatternType::None => FillStyle::None,
            PatternType::Solid if background.is_auto() => FillStyle::Solid { color: foreground },
            _ => FillStyle::pattern(pattern, foreground, background),
        }
    }

    /// Split the fill into (pattern, foreground, background)
    pub fn parts(&self) -> (PatternType, Color, Color) {
        match self {
            FillStyle::None => (PatternType::None, Color::Auto, Color::Auto),
            FillStyle::Solid { color } => (PatternType::Solid, *color, Color::Auto),
            FillStyle::Pattern {
                pattern,
                foreground,
                background,
            } => (*pattern, *foreground, *background),
        }
    }

    /// Check if this is a "no fill"
    pub fn is_none(&self) -> bool {
        matches!(self, FillStyle::None)
    }
}

/// Pattern fill types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatternType {
    #[default]
    None,
    /// Solid (100% foreground)
    Solid,
    /// 50% gray
    MediumGray,
    /// 75% gray
    DarkGray,
    /// 25% gray
    LightGray,
    DarkHorizontal,
    DarkVertical,
    DarkDown,
    DarkUp,
    DarkGrid,
    DarkTrellis,
    LightHorizontal,
    LightVertical,
    LightDown,
    LightUp,
    LightGrid,
    LightTrellis,
    /// 12.5% gray
    Gray125,
    /// 6.25% gray
    Gray0625,
}

impl PatternType {
    const ALL: [PatternType; 19] = [
        PatternType::None,
        PatternType::Solid,
        PatternType::MediumGray,
        PatternType::DarkGray,
        PatternType::LightGray,
        PatternType::DarkHorizontal,
        PatternType::DarkVertical,
        PatternType::DarkDown,
        PatternType::DarkUp,
        PatternType::DarkGrid,
        PatternType::DarkTrellis,
        PatternType::LightHorizontal,
        PatternType::LightVertical,
        PatternType::LightDown,
        PatternType::LightUp,
        PatternType::LightGrid,
        PatternType::LightTrellis,
        PatternType::Gray125,
        PatternType::Gray0625,
    ];

    /// OOXML name of the pattern
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternType::None => "none",
            PatternType::Solid => "solid",
            PatternType::MediumGray => "mediumGray",
            PatternType::DarkGray => "darkGray",
            PatternType::LightGray => "lightGray",
            PatternType::DarkHorizontal => "darkHorizontal",
            PatternType::DarkVertical => "darkVertical",
            PatternType::DarkDown => "darkDown",
            PatternType::DarkUp => "darkUp",
            PatternType::DarkGrid => "darkGrid",
            PatternType::DarkTrellis => "darkTrellis",
            PatternType::LightHorizontal => "lightHorizontal",
            PatternType::LightVertical => "lightVertical",
            PatternType::LightDown => "lightDown",
            PatternType::LightUp => "lightUp",
            PatternType::LightGrid => "lightGrid",
            PatternType::LightTrellis => "lightTrellis",
            PatternType::Gray125 => "gray125",
            PatternType::Gray0625 => "gray0625",
        }
    }

    /// Parse an OOXML pattern name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == name)
    }
}
