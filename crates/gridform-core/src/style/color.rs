//! Color representation

use std::fmt;

/// Color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Automatic/default color
    #[default]
    Auto,

    /// RGB color (no alpha)
    Rgb { r: u8, g: u8, b: u8 },

    /// ARGB color with alpha channel
    Argb { a: u8, r: u8, g: u8, b: u8 },
}

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Create an ARGB color
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color::Argb { a, r, g, b }
    }

    /// Create from a hex string (e.g., "#FF0000", "FF0000" or "80FF0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            6 => Some(Color::Rgb {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
            }),
            8 => Some(Color::Argb {
                a: byte(0)?,
                r: byte(2)?,
                g: byte(4)?,
                b: byte(6)?,
            }),
            _ => None,
        }
    }

    /// Convert to ARGB hex string (8 characters, used by XLSX)
    ///
    /// Always returns an 8-character string with alpha, e.g., "FFFF0000" for opaque red.
    pub fn to_argb_hex(&self) -> String {
        match self {
            Color::Auto => "FF000000".to_string(),
            Color::Rgb { r, g, b } => format!("FF{:02X}{:02X}{:02X}", r, g, b),
            Color::Argb { a, r, g, b } => format!("{:02X}{:02X}{:02X}{:02X}", a, r, g, b),
        }
    }

    /// Check if color is automatic/default
    pub fn is_auto(&self) -> bool {
        matches!(self, Color::Auto)
    }

    pub const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    pub const RED: Color = Color::Rgb { r: 255, g: 0, b: 0 };
    pub const GREEN: Color = Color::Rgb { r: 0, g: 255, b: 0 };
    pub const BLUE: Color = Color::Rgb { r: 0, g: 0, b: 255 };
    pub const YELLOW: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 0,
    };
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Auto => write!(f, "auto"),
            Color::Rgb { r, g, b } => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
            Color::Argb { a, r, g, b } => write!(f, "#{:02X}{:02X}{:02X}{:02X}", a, r, g, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#FF0000"), Some(Color::RED));
        assert_eq!(Color::from_hex("00ff00"), Some(Color::GREEN));
        assert_eq!(
            Color::from_hex("80FFFFFF"),
            Some(Color::argb(128, 255, 255, 255))
        );
        assert_eq!(Color::from_hex("FFF"), None);
        assert_eq!(Color::from_hex("GG0000"), None);
        assert_eq!(Color::from_hex("ÿÿÿ"), None);
    }

    #[test]
    fn test_to_argb_hex() {
        assert_eq!(Color::RED.to_argb_hex(), "FFFF0000");
        assert_eq!(Color::argb(0x80, 1, 2, 3).to_argb_hex(), "80010203");
        assert_eq!(Color::Auto.to_argb_hex(), "FF000000");
    }
}
