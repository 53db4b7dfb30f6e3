//! Border style types

use super::Color;

/// Border style for a cell
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderStyle {
    /// Left border
    pub left: Option<BorderEdge>,
    /// Right border
    pub right: Option<BorderEdge>,
    /// Top border
    pub top: Option<BorderEdge>,
    /// Bottom border
    pub bottom: Option<BorderEdge>,
}

impl BorderStyle {
    /// Create a new border style with no borders
    pub fn new() -> Self {
        Self::default()
    }

    /// Set all four borders to the same style
    pub fn all(style: BorderLineStyle, color: Color) -> Self {
        let edge = Some(BorderEdge::new(style, color));
        Self {
            left: edge.clone(),
            right: edge.clone(),
            top: edge.clone(),
            bottom: edge,
        }
    }

    /// Set one side
    pub fn with_side(mut self, side: BorderSide, style: BorderLineStyle, color: Color) -> Self {
        *self.edge_mut(side) = Some(BorderEdge::new(style, color));
        self
    }

    /// Get the edge on one side
    pub fn edge(&self, side: BorderSide) -> &Option<BorderEdge> {
        match side {
            BorderSide::Left => &self.left,
            BorderSide::Right => &self.right,
            BorderSide::Top => &self.top,
            BorderSide::Bottom => &self.bottom,
        }
    }

    /// Get the edge on one side mutably
    pub fn edge_mut(&mut self, side: BorderSide) -> &mut Option<BorderEdge> {
        match side {
            BorderSide::Left => &mut self.left,
            BorderSide::Right => &mut self.right,
            BorderSide::Top => &mut self.top,
            BorderSide::Bottom => &mut self.bottom,
        }
    }

    /// Keep only the given sides, clearing the others
    pub fn only(&self, sides: &[BorderSide]) -> Self {
        let mut result = Self::new();
        for &side in sides {
            *result.edge_mut(side) = self.edge(side).clone();
        }
        result
    }

    /// Lay `other` on top of this border: every side set in `other` replaces ours
    pub fn overlay(&self, other: &BorderStyle) -> Self {
        let mut result = self.clone();
        for side in BorderSide::ALL {
            if let Some(edge) = other.edge(side) {
                *result.edge_mut(side) = Some(edge.clone());
            }
        }
        result
    }

    /// Check if all borders are empty
    pub fn is_empty(&self) -> bool {
        BorderSide::ALL.iter().all(|&side| self.edge(side).is_none())
    }
}

/// One of the four sides of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderSide {
    Left,
    Right,
    Top,
    Bottom,
}

impl BorderSide {
    /// All sides, in the order OOXML writes them
    pub const ALL: [BorderSide; 4] = [
        BorderSide::Left,
        BorderSide::Right,
        BorderSide::Top,
        BorderSide::Bottom,
    ];

    /// Lowercase side name (`"left"`, ...)
    pub fn name(&self) -> &'static str {
        match self {
            BorderSide::Left => "left",
            BorderSide::Right => "right",
            BorderSide::Top => "top",
            BorderSide::Bottom => "bottom",
        }
    }

    /// Look up a side by its lowercase name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|side| side.name() == name)
    }
}

/// A single border edge
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderEdge {
    /// Line style
    pub style: BorderLineStyle,
    /// Line color
    pub color: Color,
}

impl BorderEdge {
    /// Create a new border edge
    pub fn new(style: BorderLineStyle, color: Color) -> Self {
        Self { style, color }
    }

    /// Create a thin black border
    pub fn thin() -> Self {
        Self::new(BorderLineStyle::Thin, Color::BLACK)
    }
}

impl Default for BorderEdge {
    fn default() -> Self {
        Self::new(BorderLineStyle::None, Color::Auto)
    }
}

/// Border line styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderLineStyle {
    #[default]
    None,
    Thin,
    Medium,
    Thick,
    Dashed,
    Dotted,
    Double,
    /// Hair line (very thin)
    Hair,
    MediumDashed,
    DashDot,
    MediumDashDot,
    DashDotDot,
    MediumDashDotDot,
    SlantDashDot,
}

impl BorderLineStyle {
    /// Every line style, `None` first
    pub const ALL: [BorderLineStyle; 14] = [
        BorderLineStyle::None,
        BorderLineStyle::Thin,
        BorderLineStyle::Medium,
        BorderLineStyle::Thick,
        BorderLineStyle::Dashed,
        BorderLineStyle::Dotted,
        BorderLineStyle::Double,
        BorderLineStyle::Hair,
        BorderLineStyle::MediumDashed,
        BorderLineStyle::DashDot,
        BorderLineStyle::MediumDashDot,
        BorderLineStyle::DashDotDot,
        BorderLineStyle::MediumDashDotDot,
        BorderLineStyle::SlantDashDot,
    ];

    /// OOXML name of the line style
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderLineStyle::None => "none",
            BorderLineStyle::Thin => "thin",
            BorderLineStyle::Medium => "medium",
            BorderLineStyle::Thick => "thick",
            BorderLineStyle::Dashed => "dashed",
            BorderLineStyle::Dotted => "dotted",
            BorderLineStyle::Double => "double",
            BorderLineStyle::Hair => "hair",
            BorderLineStyle::MediumDashed => "mediumDashed",
            BorderLineStyle::DashDot => "dashDot",
            BorderLineStyle::MediumDashDot => "mediumDashDot",
            BorderLineStyle::DashDotDot => "dashDotDot",
            BorderLineStyle::MediumDashDotDot => "mediumDashDotDot",
            BorderLineStyle::SlantDashDot => "slantDashDot",
        }
    }

    /// Parse an OOXML line style name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }
}
