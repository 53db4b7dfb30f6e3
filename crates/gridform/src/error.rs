//! Error types for gridform

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while laying out or rendering a sheet descriptor
#[derive(Debug, Error)]
pub enum Error {
    /// A cell has no `value` (or an explicit `null`)
    #[error("Cell {cell} of row {row} has no value")]
    MissingValue {
        /// 0-based index of the row spec
        row: usize,
        /// 0-based index of the cell spec within its row
        cell: usize,
    },

    /// A column sizing entry does not name a usable column
    #[error("Column width entry {index}: {reason}")]
    InvalidColumnReference { index: usize, reason: String },

    /// Unrecognized style attribute name
    #[error("Unknown {axis} attribute '{attribute}'")]
    InvalidStyleAttribute { axis: String, attribute: String },

    /// Recognized style attribute with an unusable value
    #[error("Invalid value for {axis}.{attribute}: {value}")]
    InvalidStyleValue {
        axis: String,
        attribute: String,
        value: String,
    },

    /// Shifts moved a placement above row 1 or left of column 1
    #[error("Placement at row {row}, column {column} is outside the grid")]
    CoordinateOutOfGrid { row: i64, column: i64 },

    /// JSON syntax or shape error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document model rejected an operation
    #[error("Backend error: {0}")]
    Backend(#[from] gridform_core::Error),

    /// Writing the xlsx package failed
    #[error("XLSX error: {0}")]
    Xlsx(#[from] gridform_xlsx::XlsxError),
}

impl Error {
    pub(crate) fn style_attribute(axis: &str, attribute: &str) -> Self {
        Error::InvalidStyleAttribute {
            axis: axis.to_string(),
            attribute: attribute.to_string(),
        }
    }

    pub(crate) fn style_value(axis: &str, attribute: &str, value: &serde_json::Value) -> Self {
        Error::InvalidStyleValue {
            axis: axis.to_string(),
            attribute: attribute.to_string(),
            value: value.to_string(),
        }
    }
}
