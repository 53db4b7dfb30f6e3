//! Sparse cell storage
//!
//! Cells live in a row-major `BTreeMap` of `BTreeMap`s so writers can stream
//! rows in order. A cell with no value and the default style is not stored.

use std::collections::BTreeMap;

use super::CellValue;
use crate::style::{Style, StylePool};

/// A stored cell: its value and an index into the sheet's [`StylePool`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellData {
    pub value: CellValue,
    /// 0 is the default style
    pub style_index: u32,
}

impl CellData {
    pub fn new(value: CellValue, style_index: u32) -> Self {
        Self { value, style_index }
    }

    /// No value and the default style
    pub fn is_blank(&self) -> bool {
        self.value.is_empty() && self.style_index == 0
    }
}

/// Cells of one worksheet plus the styles they reference
#[derive(Debug, Default)]
pub struct CellStorage {
    rows: BTreeMap<u32, BTreeMap<u16, CellData>>,
    styles: StylePool,
}

impl CellStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, row: u32, col: u16) -> Option<&CellData> {
        self.rows.get(&row)?.get(&col)
    }

    /// Replace a cell's value, keeping its style
    pub fn set_value(&mut self, row: u32, col: u16, value: CellValue) {
        let style_index = self.get(row, col).map_or(0, |c| c.style_index);
        self.put(row, col, CellData::new(value, style_index));
    }

    /// Replace a cell's style, keeping its value
    pub fn set_style(&mut self, row: u32, col: u16, style: Style) {
        let style_index = self.styles.get_or_insert(style);
        let value = self.get(row, col).map(|c| c.value.clone()).unwrap_or_default();
        self.put(row, col, CellData::new(value, style_index));
    }

    /// Effective style of a cell
    pub fn style(&self, row: u32, col: u16) -> &Style {
        self.get(row, col)
            .and_then(|c| self.styles.get(c.style_index))
            .unwrap_or_else(|| self.styles.default_style())
    }

    pub fn style_pool(&self) -> &StylePool {
        &self.styles
    }

    fn put(&mut self, row: u32, col: u16, data: CellData) {
        if !data.is_blank() {
            self.rows.entry(row).or_default().insert(col, data);
            return;
        }
        if let Some(cols) = self.rows.get_mut(&row) {
            cols.remove(&col);
            if cols.is_empty() {
                self.rows.remove(&row);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// (min_row, min_col, max_row, max_col) over stored cells
    pub fn bounds(&self) -> Option<(u32, u16, u32, u16)> {
        let first_row = *self.rows.keys().next()?;
        let last_row = *self.rows.keys().next_back()?;
        let (first_col, last_col) = self.rows.values().fold((u16::MAX, 0), |(lo, hi), cols| {
            let lo = cols.keys().next().map_or(lo, |&c| lo.min(c));
            let hi = cols.keys().next_back().map_or(hi, |&c| hi.max(c));
            (lo, hi)
        });
        Some((first_row, first_col, last_row, last_col))
    }

    /// All stored cells, row-major
    pub fn iter(&self) -> impl Iterator<Item = (u32, u16, &CellData)> {
        self.rows
            .iter()
            .flat_map(|(&row, cols)| cols.iter().map(move |(&col, data)| (row, col, data)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn test_blank_cells_are_dropped() {
        let mut storage = CellStorage::new();
        storage.set_value(0, 0, CellValue::Number(42.0));
        assert_eq!(storage.len(), 1);

        storage.set_value(0, 0, CellValue::Empty);
        assert!(storage.is_empty());
        assert!(storage.get(0, 0).is_none());
    }

    #[test]
    fn test_value_and_style_are_independent() {
        let mut storage = CellStorage::new();
        let red = Style::new().fill_color(Color::RED);

        storage.set_style(3, 2, red.clone());
        assert_eq!(storage.get(3, 2).map(|c| &c.value), Some(&CellValue::Empty));

        storage.set_value(3, 2, CellValue::string("kept"));
        assert_eq!(storage.style(3, 2), &red);

        storage.set_style(3, 2, Style::default());
        assert_eq!(storage.get(3, 2).map(|c| c.style_index), Some(0));
        assert_eq!(storage.style(9, 9), &Style::default());
    }

    #[test]
    fn test_bounds_and_order() {
        let mut storage = CellStorage::new();
        assert!(storage.bounds().is_none());

        storage.set_value(5, 3, CellValue::Number(1.0));
        storage.set_value(10, 7, CellValue::Number(2.0));
        storage.set_value(2, 1, CellValue::Number(3.0));
        storage.set_value(2, 0, CellValue::Number(4.0));

        assert_eq!(storage.bounds(), Some((2, 0, 10, 7)));
        let order: Vec<_> = storage.iter().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(order, vec![(2, 0), (2, 1), (5, 3), (10, 7)]);
    }
}
