// Ring position generator.
//
// For ring r the candidate window is a (2r+2) x (2r+2) square whose low corner
// is (base - r) clamped to 0 on each axis. Clamping moves the window, it never
// shrinks it, so near the origin a window reaches further out on the positive
// side and rings overlap. Each ring contributes only the cells no earlier pass
// has emitted.
//
// After all rings are emitted the whole list is stably sorted by distance to
// the base center and re-indexed; that index is the rank slot used by assign.

use serde::Serialize;

use super::{BaseRegion, CellSet, InvalidConfiguration, RingConfig};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionKind {
    /// Axis distance equals the ring on both axes.
    Corner,
    Edge,
}

/// A cell around the base that a player can be placed on.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    /// Ring pass that first emitted this cell (1-based).
    pub ring: i32,
    pub kind: PositionKind,
    /// Euclidean distance from (x, y) to the base center.
    pub distance: f64,
    /// 0-based rank by ascending distance, ties in generation order.
    pub index: usize,
}

impl Position {
    /// Whole-number distance band, used for colouring cells.
    pub fn distance_band(&self) -> i32 {
        self.distance.floor() as i32
    }
}

/// Generate every position of rings `1..=ring_count` around the base at
/// `(base_x, base_y)`, sorted and indexed by distance.
pub fn generate(base_x: i32, base_y: i32, ring_count: i32) -> Result<Vec<Position>, InvalidConfiguration> {
    generate_positions(&RingConfig::new(base_x, base_y, ring_count))
}

pub fn generate_positions(cfg: &RingConfig) -> Result<Vec<Position>, InvalidConfiguration> {
    let base = cfg.validate()?;
    Ok(generate_rings(base, cfg.ring_count))
}

/// Generate for an already validated base/ring combination.
pub(crate) fn generate_rings(base: BaseRegion, ring_count: i32) -> Vec<Position> {
    let capacity = max_position_count(ring_count);
    let mut positions: Vec<Position> = Vec::with_capacity(capacity);
    let mut seen = CellSet::with_capacity(capacity);
    let (cx, cy) = base.center();

    for ring in 1..=ring_count {
        // Window side is 2r+2; validation guarantees its last cell fits in i32.
        let span = 2 * ring + 1;
        let start_x = (base.x - ring).max(0);
        let start_y = (base.y - ring).max(0);
        let last_x = start_x + span;
        let last_y = start_y + span;

        // x outer, y inner: this order decides distance ties.
        for x in start_x..=last_x {
            for y in start_y..=last_y {
                if base.contains(x, y) {
                    continue;
                }
                if !seen.insert(x, y) {
                    continue;
                }

                let dx = x as f64 - cx;
                let dy = y as f64 - cy;
                positions.push(Position {
                    x,
                    y,
                    ring,
                    kind: classify(base, x, y, ring),
                    distance: (dx * dx + dy * dy).sqrt(),
                    index: positions.len(),
                });
            }
        }
    }

    // sort_by is stable, so equal distances keep generation order.
    positions.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    for (i, p) in positions.iter_mut().enumerate() {
        p.index = i;
    }

    positions
}

fn classify(base: BaseRegion, x: i32, y: i32, ring: i32) -> PositionKind {
    let (dx, dy) = base.axis_distance(x, y);
    if dx == ring && dy == ring {
        PositionKind::Corner
    } else {
        PositionKind::Edge
    }
}

/// Unclamped cell count `(2n+2)^2 - 4`; an upper bound once clamping kicks in.
fn max_position_count(ring_count: i32) -> usize {
    let side = (ring_count.max(0) as usize)
        .checked_mul(2)
        .and_then(|s| s.checked_add(2));
    side.and_then(|s| s.checked_mul(s))
        .map(|area| area.saturating_sub(4))
        .unwrap_or(0)
        // Only a capacity hint; don't pre-allocate absurd sizes.
        .min(1 << 16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn coords(positions: &[Position]) -> HashSet<(i32, i32)> {
        positions.iter().map(|p| (p.x, p.y)).collect()
    }

    fn find(positions: &[Position], x: i32, y: i32) -> Position {
        *positions.iter().find(|p| p.x == x && p.y == y).unwrap()
    }

    #[test]
    fn test_origin_single_ring() {
        let positions = generate(0, 0, 1).unwrap();
        assert_eq!(positions.len(), 12);
        assert!(positions.iter().all(|p| p.ring == 1));

        let expected: HashSet<(i32, i32)> = (0..4)
            .flat_map(|x| (0..4).map(move |y| (x, y)))
            .filter(|&(x, y)| !(x <= 1 && y <= 1))
            .collect();
        assert_eq!(coords(&positions), expected);

        assert_eq!(find(&positions, 2, 2).kind, PositionKind::Corner);
        assert_eq!(find(&positions, 0, 2).kind, PositionKind::Edge);
        // Pulled into ring 1 by clamping; axis distance 2 is not the ring.
        assert_eq!(find(&positions, 3, 3).kind, PositionKind::Edge);
        let corners = positions.iter().filter(|p| p.kind == PositionKind::Corner).count();
        assert_eq!(corners, 1);
    }

    #[test]
    fn test_unclamped_ring_has_four_corners() {
        let positions = generate(5, 5, 1).unwrap();
        assert_eq!(positions.len(), 12);

        let mut corners: Vec<(i32, i32)> = positions.iter()
            .filter(|p| p.kind == PositionKind::Corner)
            .map(|p| (p.x, p.y))
            .collect();
        corners.sort();
        assert_eq!(corners, vec![(4, 4), (4, 7), (7, 4), (7, 7)]);
    }

    #[test]
    fn test_unclamped_counts_match_square_formula() {
        for n in 1..=6 {
            let positions = generate(10, 10, n).unwrap();
            let side = (2 * n + 2) as usize;
            assert_eq!(positions.len(), side * side - 4, "ring count {}", n);
            for ring in 1..=n {
                let in_ring = positions.iter().filter(|p| p.ring == ring).count();
                let outer = (2 * ring + 2) as usize;
                let inner = (2 * (ring - 1) + 2) as usize;
                assert_eq!(in_ring, outer * outer - inner * inner, "ring {}", ring);
            }
        }
    }

    #[test]
    fn test_clamped_rings_are_not_padded() {
        let positions = generate(0, 0, 2).unwrap();
        // Window [0, 6) x [0, 6) minus the base, not the unclamped 56.
        assert_eq!(positions.len(), 32);
        assert_eq!(positions.iter().filter(|p| p.ring == 1).count(), 12);
        assert_eq!(positions.iter().filter(|p| p.ring == 2).count(), 20);
    }

    #[test]
    fn test_no_duplicates_and_outside_base() {
        for &(bx, by) in &[(0, 0), (0, 3), (1, 1), (2, 0), (6, 6)] {
            let base = BaseRegion::new(bx, by).unwrap();
            let positions = generate(bx, by, 5).unwrap();
            assert_eq!(coords(&positions).len(), positions.len());
            for p in &positions {
                assert!(!base.contains(p.x, p.y));
                assert!(p.x >= 0 && p.y >= 0);
            }
        }
    }

    #[test]
    fn test_more_rings_is_strict_superset() {
        for &(bx, by) in &[(0, 0), (1, 4), (3, 3), (8, 2)] {
            for n in 1..6 {
                let smaller = coords(&generate(bx, by, n).unwrap());
                let larger = coords(&generate(bx, by, n + 1).unwrap());
                assert!(smaller.is_subset(&larger));
                assert!(larger.len() > smaller.len());
            }
        }
    }

    #[test]
    fn test_classification_matches_axis_distance() {
        let base = BaseRegion::new(1, 2).unwrap();
        for p in generate(1, 2, 4).unwrap() {
            let (dx, dy) = base.axis_distance(p.x, p.y);
            assert_eq!(p.kind == PositionKind::Corner, dx == p.ring && dy == p.ring);
        }
    }

    #[test]
    fn test_sorted_by_distance_and_reindexed() {
        let positions = generate(2, 3, 4).unwrap();
        for (i, p) in positions.iter().enumerate() {
            assert_eq!(p.index, i);
        }
        for pair in positions.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
    }

    #[test]
    fn test_distance_ties_keep_generation_order() {
        let positions = generate(5, 5, 1).unwrap();
        let first: Vec<(i32, i32)> = positions.iter().take(4).map(|p| (p.x, p.y)).collect();
        assert_eq!(first, vec![(4, 5), (4, 6), (5, 4), (5, 7)]);
        assert!((positions[0].distance - 2.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_generation_is_idempotent() {
        let a = generate(1, 0, 3).unwrap();
        let b = generate(1, 0, 3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_arguments_fail_fast() {
        assert_eq!(generate(0, 0, 0).unwrap_err().field, "ringCount");
        assert_eq!(generate(-2, 0, 1).unwrap_err().field, "baseX");
        assert_eq!(generate(0, -1, 1).unwrap_err().field, "baseY");
    }

    #[test]
    fn test_base_near_coordinate_limit() {
        assert_eq!(generate(i32::MAX, 5, 1).unwrap_err().field, "baseX");
        assert_eq!(generate(i32::MAX - 1, 5, 1).unwrap_err().field, "baseX");

        // Largest base whose ring-1 window still fits keeps the full 12 cells.
        let bx = i32::MAX - 2;
        let positions = generate(bx, 5, 1).unwrap();
        assert_eq!(positions.len(), 12);
        assert!(positions.iter().any(|p| p.x == i32::MAX));
        assert_eq!(positions.iter().filter(|p| p.kind == PositionKind::Corner).count(), 4);
    }

    #[test]
    fn test_distance_band() {
        let positions = generate(5, 5, 2).unwrap();
        let far_corner = find(&positions, 3, 3);
        // (2.5^2 + 2.5^2).sqrt() ~ 3.54
        assert_eq!(far_corner.distance_band(), 3);
        assert_eq!(far_corner.kind, PositionKind::Corner);
    }
}
