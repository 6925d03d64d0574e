// Ring layout around a fixed 2x2 base region.
//
// Goals:
// - Deterministic: identical inputs give identical ordered output
// - Rings grow outward as clamped square windows (never below coordinate 0)
// - Positions are ranked by distance to the base center; rank k gets player k
// - Pure functions, no shared state between calls
//
// Submodules:
// - cell_set: O(1) coordinate membership + grid bounds
// - rings: position generation and distance ranking
// - assign: rank -> position pairing
// - stats: fill/empty counters
// - grid: cell model for grid renderers

use std::fmt;

use serde::{Deserialize, Serialize};

mod cell_set;
mod rings;
mod assign;
mod stats;
mod grid;

pub use cell_set::{CellSet, GridBounds};
pub use rings::{generate, generate_positions, Position, PositionKind};
pub(crate) use rings::generate_rings;
pub use assign::{assign, unmatched_entities, vacant_positions, Assignment};
pub use stats::{summarize, Summary};
pub use grid::{build_cells, Cell, CellOutput};

/// The 2x2 footprint everything is ranked around.
/// Occupies `{x, x+1} x {y, y+1}`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct BaseRegion {
    pub x: i32,
    pub y: i32,
}

impl BaseRegion {
    pub fn new(x: i32, y: i32) -> Result<Self, InvalidConfiguration> {
        if x < 0 {
            return Err(InvalidConfiguration::new("baseX", x, "base X must not be negative"));
        }
        if y < 0 {
            return Err(InvalidConfiguration::new("baseY", y, "base Y must not be negative"));
        }
        // The footprint spans x+1 / y+1.
        if x == i32::MAX {
            return Err(InvalidConfiguration::new("baseX", x, "base X leaves no room for the 2x2 footprint"));
        }
        if y == i32::MAX {
            return Err(InvalidConfiguration::new("baseY", y, "base Y leaves no room for the 2x2 footprint"));
        }
        Ok(Self { x, y })
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x <= self.x + 1 && y >= self.y && y <= self.y + 1
    }

    /// Center of the four base cells.
    pub fn center(&self) -> (f64, f64) {
        (self.x as f64 + 0.5, self.y as f64 + 0.5)
    }

    /// Axis distance to the nearer of the two base columns / rows.
    pub fn axis_distance(&self, x: i32, y: i32) -> (i32, i32) {
        let dx = (x - self.x).abs().min((x - (self.x + 1)).abs());
        let dy = (y - self.y).abs().min((y - (self.y + 1)).abs());
        (dx, dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingConfig {
    /// Anchor (lowest x/y cell) of the base region.
    pub base_x: i32,
    pub base_y: i32,
    /// Number of rings to generate, at least 1.
    pub ring_count: i32,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            base_x: 0,
            base_y: 0,
            ring_count: 3,
        }
    }
}

impl RingConfig {
    pub fn new(base_x: i32, base_y: i32, ring_count: i32) -> Self {
        Self { base_x, base_y, ring_count }
    }

    pub fn validate(&self) -> Result<BaseRegion, InvalidConfiguration> {
        let base = BaseRegion::new(self.base_x, self.base_y)?;
        if self.ring_count < 1 {
            return Err(InvalidConfiguration::new(
                "ringCount",
                self.ring_count,
                "ring count must be at least 1",
            ));
        }
        // The outermost window is the largest; every cell in it must be addressable.
        if last_window_cell(self.base_x, self.ring_count) > i64::from(i32::MAX) {
            return Err(InvalidConfiguration::new(
                "baseX",
                self.base_x,
                "outer ring extends past the coordinate range",
            ));
        }
        if last_window_cell(self.base_y, self.ring_count) > i64::from(i32::MAX) {
            return Err(InvalidConfiguration::new(
                "baseY",
                self.base_y,
                "outer ring extends past the coordinate range",
            ));
        }
        Ok(base)
    }
}

/// Highest coordinate on one axis covered by the window of ring `ring`.
fn last_window_cell(base: i32, ring: i32) -> i64 {
    let (base, ring) = (i64::from(base), i64::from(ring));
    (base - ring).max(0) + 2 * ring + 1
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidConfiguration {
    /// Request field that was rejected (camelCase, as sent by the front end).
    pub field: &'static str,
    pub value: i64,
    pub msg: String,
}

impl InvalidConfiguration {
    fn new(field: &'static str, value: i32, msg: impl Into<String>) -> Self {
        Self {
            field,
            value: i64::from(value),
            msg: msg.into(),
        }
    }
}

impl fmt::Display for InvalidConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid configuration: {} = {}: {}", self.field, self.value, self.msg)
    }
}

impl std::error::Error for InvalidConfiguration {}
