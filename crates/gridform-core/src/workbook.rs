//! Workbook type - the document handle

use crate::error::{Error, Result};
use crate::worksheet::Worksheet;
use crate::MAX_SHEET_NAME_LEN;

/// A workbook holding a single worksheet
#[derive(Debug)]
pub struct Workbook {
    worksheet: Worksheet,
}

impl Workbook {
    /// Create a new workbook with one empty worksheet named "Sheet1"
    pub fn new() -> Self {
        Self {
            worksheet: Worksheet::new("Sheet1"),
        }
    }

    /// Create a new workbook whose worksheet has the given name
    pub fn with_sheet_name(name: &str) -> Result<Self> {
        validate_sheet_name(name)?;
        Ok(Self {
            worksheet: Worksheet::new(name),
        })
    }

    /// Wrap an existing worksheet
    pub fn from_worksheet(worksheet: Worksheet) -> Result<Self> {
        validate_sheet_name(worksheet.name())?;
        Ok(Self { worksheet })
    }

    /// Get the worksheet
    pub fn worksheet(&self) -> &Worksheet {
        &self.worksheet
    }

    /// Get the worksheet mutably
    pub fn worksheet_mut(&mut self) -> &mut Worksheet {
        &mut self.worksheet
    }

    /// Take the worksheet out of the workbook
    pub fn into_worksheet(self) -> Worksheet {
        self.worksheet
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}

/// Check a sheet name against Excel's naming rules
pub fn validate_sheet_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
    }
    if name.chars().count() > MAX_SHEET_NAME_LEN {
        return Err(Error::InvalidSheetName(format!(
            "Sheet name too long (max {} characters)",
            MAX_SHEET_NAME_LEN
        )));
    }

    const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];
    if let Some(c) = name.chars().find(|c| INVALID_CHARS.contains(c)) {
        return Err(Error::InvalidSheetName(format!(
            "Sheet name cannot contain '{}'",
            c
        )));
    }

    Ok(())
}
