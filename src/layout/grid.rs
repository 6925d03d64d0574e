//! Cell model for grid renderers.
//!
//! Walks the bounding box of a layout top row first (`y` descending, so `y`
//! grows upward once drawn) and tags every cell with what sits on it.

use std::collections::HashMap;

use serde::Serialize;

use super::{Assignment, BaseRegion, GridBounds, Position};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Cell {
    /// One of the four base cells; `anchor` marks `(base.x, base.y)`.
    Base { anchor: bool },
    #[serde(rename_all = "camelCase")]
    Occupied { rank: usize, entity_index: usize },
    /// A generated position nobody was ranked into.
    Vacant { index: usize },
    /// Inside the bounding box but not a position.
    Blank,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellOutput {
    pub x: i32,
    pub y: i32,
    #[serde(flatten)]
    pub cell: Cell,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ring: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_band: Option<i32>,
}

pub fn build_cells(base: BaseRegion, positions: &[Position], assignments: &[Assignment]) -> Vec<CellOutput> {
    let bounds = GridBounds::from_positions(base, positions);

    let by_coord: HashMap<(i32, i32), &Position> = positions.iter()
        .map(|p| ((p.x, p.y), p))
        .collect();
    let by_index: HashMap<usize, &Assignment> = assignments.iter()
        .map(|a| (a.position.index, a))
        .collect();

    let mut cells = Vec::with_capacity((bounds.cols() * bounds.rows()).max(0) as usize);

    for y in (bounds.min_y..=bounds.max_y).rev() {
        for x in bounds.min_x..=bounds.max_x {
            // Game coordinates are never negative.
            if x < 0 || y < 0 {
                continue;
            }

            if base.contains(x, y) {
                cells.push(CellOutput {
                    x,
                    y,
                    cell: Cell::Base { anchor: x == base.x && y == base.y },
                    ring: None,
                    distance_band: None,
                });
                continue;
            }

            let out = match by_coord.get(&(x, y)) {
                Some(p) => {
                    let cell = match by_index.get(&p.index) {
                        Some(a) => Cell::Occupied { rank: a.rank(), entity_index: a.entity_index },
                        None => Cell::Vacant { index: p.index },
                    };
                    CellOutput {
                        x,
                        y,
                        cell,
                        ring: Some(p.ring),
                        distance_band: Some(p.distance_band()),
                    }
                }
                None => CellOutput { x, y, cell: Cell::Blank, ring: None, distance_band: None },
            };
            cells.push(out);
        }
    }

    cells
}
