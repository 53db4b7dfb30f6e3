//! Number format types

/// Number format for cell display
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumberFormat {
    /// General format (default)
    #[default]
    General,

    /// Built-in format by ID
    BuiltIn(u32),

    /// Custom format string
    Custom(String),
}

impl NumberFormat {
    /// Create a number format from a format string
    ///
    /// Strings matching a built-in format resolve to that format's ID.
    pub fn from_string<S: Into<String>>(format: S) -> Self {
        let format = format.into();
        if format == "General" {
            return NumberFormat::General;
        }
        match Self::builtin_id(&format) {
            Some(id) => NumberFormat::BuiltIn(id),
            None => NumberFormat::Custom(format),
        }
    }

    /// Get the format string
    pub fn format_string(&self) -> &str {
        match self {
            NumberFormat::General => "General",
            NumberFormat::BuiltIn(id) => Self::builtin_format_string(*id),
            NumberFormat::Custom(s) => s,
        }
    }

    /// Whether this is the General format
    pub fn is_general(&self) -> bool {
        matches!(self, NumberFormat::General | NumberFormat::BuiltIn(0))
    }

    const BUILTINS: [(u32, &'static str); 24] = [
        (0, "General"),
        (1, "0"),
        (2, "0.00"),
        (3, "#,##0"),
        (4, "#,##0.00"),
        (9, "0%"),
        (10, "0.00%"),
        (11, "0.00E+00"),
        (12, "# ?/?"),
        (13, "# ??/??"),
        (14, "mm-dd-yy"),
        (15, "d-mmm-yy"),
        (16, "d-mmm"),
        (17, "mmm-yy"),
        (18, "h:mm AM/PM"),
        (19, "h:mm:ss AM/PM"),
        (20, "h:mm"),
        (21, "h:mm:ss"),
        (22, "m/d/yy h:mm"),
        (37, "#,##0 ;(#,##0)"),
        (38, "#,##0 ;[Red](#,##0)"),
        (39, "#,##0.00;(#,##0.00)"),
        (40, "#,##0.00;[Red](#,##0.00)"),
        (49, "@"),
    ];

    fn builtin_format_string(id: u32) -> &'static str {
        Self::BUILTINS
            .iter()
            .find(|(builtin, _)| *builtin == id)
            .map(|(_, code)| *code)
            .unwrap_or("General")
    }

    fn builtin_id(code: &str) -> Option<u32> {
        Self::BUILTINS
            .iter()
            .find(|(_, builtin)| *builtin == code)
            .map(|(id, _)| *id)
    }
}
