//! Sheet descriptor: the JSON input document
//!
//! ```json
//! {
//!   "start_row": 1,
//!   "start_column": 1,
//!   "number_format": "0.00",
//!   "column_widths": [{"column_letter": "A", "width": 20}],
//!   "rows": [
//!     {"rows_shift": 1, "row_height": 30,
//!      "cells": [{"value": "Title", "width": 3, "style": {"font": {"bold": true}}}]}
//!   ]
//! }
//! ```

use serde::Deserialize;
use serde_json::Value;

use gridform_core::CellValue;

use crate::error::Result;
use crate::style::StyleSpec;

/// Root of the input document
#[derive(Debug, Clone, PartialEq)]
pub struct SheetDescriptor {
    pub rows: Vec<RowSpec>,
    /// 1-based row of the first row spec
    pub start_row: i64,
    /// 1-based column every row starts from
    pub start_column: i64,
    pub column_widths: Vec<ColumnSizeSpec>,
    /// Format applied to every numeric cell value
    pub number_format: Option<String>,
}

impl Default for SheetDescriptor {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            start_row: 1,
            start_column: 1,
            column_widths: Vec::new(),
            number_format: None,
        }
    }
}

impl SheetDescriptor {
    /// Parse a descriptor from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Build a descriptor from an already-parsed JSON value
    pub fn from_value(value: &Value) -> Result<Self> {
        let raw = RawSheet::deserialize(value)?;
        let rows = raw
            .rows
            .into_iter()
            .map(RowSpec::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            rows,
            start_row: raw.start_row,
            start_column: raw.start_column,
            column_widths: raw.column_widths,
            number_format: raw.number_format,
        })
    }
}

/// One row of cells
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowSpec {
    pub cells: Vec<CellSpec>,
    /// Added to the row cursor before this row is placed
    pub rows_shift: i64,
    /// Added to the start column for this row only
    pub columns_shift: i64,
    /// Height in points of the row this spec starts on
    pub row_height: Option<f64>,
}

impl RowSpec {
    pub fn new(cells: Vec<CellSpec>) -> Self {
        Self {
            cells,
            ..Default::default()
        }
    }
}

/// One cell and its footprint
#[derive(Debug, Clone, PartialEq)]
pub struct CellSpec {
    /// `None` when the document omits the value or gives `null`
    pub value: Option<CellValue>,
    /// Columns spanned, at least 1
    pub width: u32,
    /// Rows spanned, at least 1
    pub height: u32,
    pub rows_shift: i64,
    pub columns_shift: i64,
    /// Exclude this cell's height from the row advance
    pub ignore_height: bool,
    pub style: StyleSpec,
}

impl Default for CellSpec {
    fn default() -> Self {
        Self {
            value: None,
            width: 1,
            height: 1,
            rows_shift: 0,
            columns_shift: 0,
            ignore_height: false,
            style: StyleSpec::default(),
        }
    }
}

impl CellSpec {
    pub fn new<V: Into<CellValue>>(value: V) -> Self {
        Self {
            value: Some(value.into()),
            ..Default::default()
        }
    }

    /// Set the footprint; zero is raised to 1
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width.max(1);
        self.height = height.max(1);
        self
    }

    pub fn with_shift(mut self, rows_shift: i64, columns_shift: i64) -> Self {
        self.rows_shift = rows_shift;
        self.columns_shift = columns_shift;
        self
    }

    pub fn with_style(mut self, style: StyleSpec) -> Self {
        self.style = style;
        self
    }

    pub fn ignoring_height(mut self) -> Self {
        self.ignore_height = true;
        self
    }
}

/// Explicit width for one column
///
/// When both are given, `column_letter` wins over `column_number`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColumnSizeSpec {
    /// 1-based column number
    #[serde(default)]
    pub column_number: Option<u32>,
    /// Column letters, e.g. `"B"` or `"AA"`
    #[serde(default)]
    pub column_letter: Option<String>,
    pub width: f64,
}

impl ColumnSizeSpec {
    pub fn number(column_number: u32, width: f64) -> Self {
        Self {
            column_number: Some(column_number),
            column_letter: None,
            width,
        }
    }

    pub fn letter<S: Into<String>>(column_letter: S, width: f64) -> Self {
        Self {
            column_number: None,
            column_letter: Some(column_letter.into()),
            width,
        }
    }
}

// === Wire shapes ===

fn one() -> i64 {
    1
}

#[derive(Debug, Deserialize)]
struct RawSheet {
    rows: Vec<RawRow>,
    #[serde(default = "one")]
    start_row: i64,
    #[serde(default = "one")]
    start_column: i64,
    #[serde(default)]
    column_widths: Vec<ColumnSizeSpec>,
    #[serde(default)]
    number_format: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(default)]
    cells: Vec<RawCell>,
    #[serde(default)]
    rows_shift: i64,
    #[serde(default)]
    columns_shift: i64,
    #[serde(default)]
    row_height: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawCell {
    #[serde(default)]
    value: Option<CellValue>,
    #[serde(default = "one")]
    width: i64,
    #[serde(default = "one")]
    height: i64,
    #[serde(default)]
    rows_shift: i64,
    #[serde(default)]
    columns_shift: i64,
    #[serde(default)]
    ignore_height: bool,
    #[serde(default)]
    style: Option<Value>,
}

impl TryFrom<RawRow> for RowSpec {
    type Error = crate::Error;

    fn try_from(raw: RawRow) -> Result<Self> {
        let cells = raw
            .cells
            .into_iter()
            .map(CellSpec::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            cells,
            rows_shift: raw.rows_shift,
            columns_shift: raw.columns_shift,
            row_height: raw.row_height,
        })
    }
}

impl TryFrom<RawCell> for CellSpec {
    type Error = crate::Error;

    fn try_from(raw: RawCell) -> Result<Self> {
        let style = match raw.style {
            Some(value) if !value.is_null() => StyleSpec::from_value(&value)?,
            _ => StyleSpec::default(),
        };
        Ok(Self {
            value: raw.value,
            width: span(raw.width),
            height: span(raw.height),
            rows_shift: raw.rows_shift,
            columns_shift: raw.columns_shift,
            ignore_height: raw.ignore_height,
            style,
        })
    }
}

fn span(n: i64) -> u32 {
    n.clamp(1, u32::MAX as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let sheet = SheetDescriptor::from_json(r#"{"rows": [{}, {"cells": [{"value": 1}]}]}"#)
            .unwrap();

        assert_eq!(sheet.start_row, 1);
        assert_eq!(sheet.start_column, 1);
        assert!(sheet.column_widths.is_empty());
        assert_eq!(sheet.number_format, None);

        assert_eq!(sheet.rows[0], RowSpec::default());
        assert_eq!(sheet.rows[1].cells, vec![CellSpec::new(1.0)]);
    }

    #[test]
    fn test_all_keys() {
        let sheet = SheetDescriptor::from_json(
            r#"{
                "start_row": 3, "start_column": 2, "number_format": "0.0",
                "column_widths": [{"column_number": 1, "width": 10},
                                  {"column_letter": "B", "width": 20.5}],
                "rows": [{"rows_shift": 2, "columns_shift": -1, "row_height": 30,
                          "cells": [{"value": "x", "width": 5, "height": 2,
                                     "rows_shift": 1, "columns_shift": 4,
                                     "ignore_height": true,
                                     "style": {"font": {"bold": true}}}]}]
            }"#,
        )
        .unwrap();

        assert_eq!(sheet.start_row, 3);
        assert_eq!(sheet.start_column, 2);
        assert_eq!(sheet.number_format.as_deref(), Some("0.0"));
        assert_eq!(
            sheet.column_widths,
            vec![ColumnSizeSpec::number(1, 10.0), ColumnSizeSpec::letter("B", 20.5)]
        );

        let row = &sheet.rows[0];
        assert_eq!(row.rows_shift, 2);
        assert_eq!(row.columns_shift, -1);
        assert_eq!(row.row_height, Some(30.0));

        let cell = &row.cells[0];
        assert_eq!(cell.value, Some(CellValue::string("x")));
        assert_eq!((cell.width, cell.height), (5, 2));
        assert_eq!((cell.rows_shift, cell.columns_shift), (1, 4));
        assert!(cell.ignore_height);
        assert_eq!(cell.style.font.as_ref().and_then(|f| f.bold), Some(true));
    }

    #[test]
    fn test_scalar_values() {
        let sheet = SheetDescriptor::from_json(
            r#"{"rows": [{"cells": [{"value": "s"}, {"value": 2.5}, {"value": false},
                                     {"value": null}, {}]}]}"#,
        )
        .unwrap();
        let values: Vec<_> = sheet.rows[0].cells.iter().map(|c| c.value.clone()).collect();

        assert_eq!(
            values,
            vec![
                Some(CellValue::string("s")),
                Some(CellValue::Number(2.5)),
                Some(CellValue::Boolean(false)),
                None,
                None,
            ]
        );
    }

    #[test]
    fn test_zero_and_negative_sizes_clamped() {
        let sheet = SheetDescriptor::from_json(
            r#"{"rows": [{"cells": [{"value": 1, "width": 0, "height": -3}]}]}"#,
        )
        .unwrap();
        let cell = &sheet.rows[0].cells[0];
        assert_eq!((cell.width, cell.height), (1, 1));
    }

    #[test]
    fn test_shape_errors() {
        assert!(matches!(
            SheetDescriptor::from_json(r#"{"start_row": 1}"#),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            SheetDescriptor::from_json(r#"{"rows": [{"cells": [{"value": [1]}]}]}"#),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            SheetDescriptor::from_json("not json"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_style_errors_surface() {
        let err = SheetDescriptor::from_json(
            r#"{"rows": [{"cells": [{"value": 1, "style": {"font": {"colour": "FF0000"}}}]}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidStyleAttribute { .. }));
    }
}
