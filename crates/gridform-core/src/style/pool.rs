//! Per-worksheet style interning

use super::Style;
use ahash::AHashMap;

/// Interned styles of one worksheet
///
/// Cells store a `u32` index into the pool. Slot 0 always holds
/// [`Style::default()`], so an unstyled cell and a cell explicitly given the
/// default style are indistinguishable.
#[derive(Debug)]
pub struct StylePool {
    styles: Vec<Style>,
    lookup: AHashMap<Style, u32>,
}

impl StylePool {
    pub fn new() -> Self {
        let mut pool = Self {
            styles: Vec::new(),
            lookup: AHashMap::new(),
        };
        pool.get_or_insert(Style::default());
        pool
    }

    /// Index of `style`, adding it if it is not interned yet
    pub fn get_or_insert(&mut self, style: Style) -> u32 {
        if let Some(&index) = self.lookup.get(&style) {
            return index;
        }
        let index = self.styles.len() as u32;
        self.lookup.insert(style.clone(), index);
        self.styles.push(style);
        index
    }

    pub fn get(&self, index: u32) -> Option<&Style> {
        self.styles.get(index as usize)
    }

    pub fn default_style(&self) -> &Style {
        &self.styles[0]
    }

    /// Number of interned styles, the default included
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// True while only the default style is interned
    pub fn is_empty(&self) -> bool {
        self.styles.len() <= 1
    }
}

impl Default for StylePool {
    fn default() -> Self {
        Self::new()
    }
}
