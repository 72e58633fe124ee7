//! Layout abstraction for testability.
//!
//! The core never touches rendering primitives. The renderer exposes row
//! geometry through [`LayoutProvider`] instead, which keeps the transition
//! logic testable without a real UI.

use std::collections::BTreeMap;

use crate::player::RowKey;
use crate::transition::Rect;

/// Row geometry queries, answered by the rendering collaborator.
pub trait LayoutProvider {
    /// Keys of every row currently mounted.
    fn row_keys(&self) -> Vec<RowKey>;

    /// Current rectangle of a row, if it is mounted.
    fn rect(&self, key: &str) -> Option<Rect>;
}

/// In-memory layout that stacks rows vertically in a fixed order.
///
/// Useful for tests and for headless renderers: calling [`MockLayout::arrange`]
/// with a new row order plays the role of the renderer committing a layout.
#[derive(Debug, Clone)]
pub struct MockLayout {
    row_height: f64,
    left: f64,
    rects: BTreeMap<RowKey, Rect>,
    hidden: Vec<RowKey>,
}

impl MockLayout {
    pub fn new(row_height: f64) -> Self {
        Self {
            row_height,
            left: 0.0,
            rects: BTreeMap::new(),
            hidden: Vec::new(),
        }
    }

    /// Build a layout with `keys` already arranged top to bottom.
    pub fn stacked<I, K>(keys: I, row_height: f64) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<RowKey>,
    {
        let mut layout = Self::new(row_height);
        layout.arrange(keys);
        layout
    }

    /// Replace the mounted rows with `keys`, top to bottom.
    pub fn arrange<I, K>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: Into<RowKey>,
    {
        self.rects = keys
            .into_iter()
            .enumerate()
            .map(|(i, key)| {
                let rect = Rect::new(i as f64 * self.row_height, self.left, 0.0, self.row_height);
                (key.into(), rect)
            })
            .collect();
    }

    /// Shift every row horizontally, e.g. when the container is resized.
    pub fn shift_left(&mut self, left: f64) {
        self.left = left;
        for rect in self.rects.values_mut() {
            rect.left = left;
        }
    }

    /// Keep the row listed but make its geometry unavailable.
    pub fn hide(&mut self, key: impl Into<RowKey>) {
        self.hidden.push(key.into());
    }
}

impl LayoutProvider for MockLayout {
    fn row_keys(&self) -> Vec<RowKey> {
        self.rects.keys().cloned().collect()
    }

    fn rect(&self, key: &str) -> Option<Rect> {
        if self.hidden.iter().any(|h| h == key) {
            return None;
        }
        self.rects.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stacked_positions() {
        let layout = MockLayout::stacked(["a", "b", "c"], 72.0);
        assert_eq!(layout.rect("a").map(|r| r.top), Some(0.0));
        assert_eq!(layout.rect("c").map(|r| r.top), Some(144.0));
        assert_eq!(layout.rect("missing"), None);
    }

    #[test]
    fn test_hidden_row_has_no_rect() {
        let mut layout = MockLayout::stacked(["a", "b"], 10.0);
        layout.hide("b");
        assert_eq!(layout.row_keys().len(), 2);
        assert!(layout.rect("b").is_none());
    }

    #[test]
    fn test_shift_left() {
        let mut layout = MockLayout::stacked(["a"], 10.0);
        layout.shift_left(24.0);
        assert_eq!(layout.rect("a").map(|r| r.left), Some(24.0));
    }
}
