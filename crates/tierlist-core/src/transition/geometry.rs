use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::player::RowKey;
use crate::transition::LayoutProvider;

/// On-screen rectangle of a row.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// A rectangle with only a position, for tests and stacked-list layouts.
    pub fn at(top: f64, left: f64) -> Self {
        Self::new(top, left, 0.0, 0.0)
    }
}

/// Offset from a row's new position back to its old one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Delta {
    pub dx: f64,
    pub dy: f64,
}

impl Delta {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn between(before: &Rect, after: &Rect) -> Self {
        Self {
            dx: before.left - after.left,
            dy: before.top - after.top,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// Row geometry captured at one point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionSnapshot {
    rects: BTreeMap<RowKey, Rect>,
}

impl PositionSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture every row the layout currently knows about.
    ///
    /// Rows that report no rectangle are left out.
    pub fn capture<L: LayoutProvider + ?Sized>(layout: &L) -> Self {
        let rects = layout
            .row_keys()
            .into_iter()
            .filter_map(|key| {
                let rect = layout.rect(&key)?;
                Some((key, rect))
            })
            .collect();
        Self { rects }
    }

    pub fn insert(&mut self, key: impl Into<RowKey>, rect: Rect) {
        self.rects.insert(key.into(), rect);
    }

    pub fn get(&self, key: &str) -> Option<&Rect> {
        self.rects.get(key)
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RowKey, &Rect)> {
        self.rects.iter()
    }
}

impl FromIterator<(RowKey, Rect)> for PositionSnapshot {
    fn from_iter<I: IntoIterator<Item = (RowKey, Rect)>>(iter: I) -> Self {
        Self {
            rects: iter.into_iter().collect(),
        }
    }
}

/// Per-row offsets between two snapshots.
///
/// Only rows present in both snapshots are considered, and rows that did not
/// move are omitted.
pub fn compute_deltas(
    before: &PositionSnapshot,
    after: &PositionSnapshot,
) -> BTreeMap<RowKey, Delta> {
    before
        .iter()
        .filter_map(|(key, old)| {
            let Some(new) = after.get(key) else {
                trace!("Skipping {}: no position after re-rank", key);
                return None;
            };
            let delta = Delta::between(old, new);
            if delta.is_zero() {
                return None;
            }
            Some((key.clone(), delta))
        })
        .collect()
}
