// Coordinate-keyed cell set for generation.
//
// Ring windows overlap, so every candidate cell has to be checked against
// everything emitted so far. A hash set keeps that O(1) per candidate instead
// of scanning the growing position list.

use super::{BaseRegion, Position};
use serde::Serialize;
use std::collections::HashSet;

/// Set of occupied grid cells.
#[derive(Debug, Clone, Default)]
pub struct CellSet {
    cells: HashSet<(i32, i32)>,
}

impl CellSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for the number of cells a full generation pass can emit.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: HashSet::with_capacity(capacity),
        }
    }

    /// Insert a cell. Returns false if it was already present.
    pub fn insert(&mut self, x: i32, y: i32) -> bool {
        self.cells.insert((x, y))
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.cells.contains(&(x, y))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Inclusive cell extents of a generated layout, base footprint included.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridBounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl GridBounds {
    pub fn from_positions(base: BaseRegion, positions: &[Position]) -> Self {
        let mut bounds = GridBounds {
            min_x: base.x,
            max_x: base.x + 1,
            min_y: base.y,
            max_y: base.y + 1,
        };
        for p in positions {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        bounds
    }

    pub fn cols(&self) -> i32 {
        self.max_x - self.min_x + 1
    }

    pub fn rows(&self) -> i32 {
        self.max_y - self.min_y + 1
    }
}
