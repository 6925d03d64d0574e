//! Rank assignment: the k-th entity (0-based, caller's order) is placed on the
//! position whose `index == k`.

use std::ops::Range;

use serde::Serialize;

use super::Position;

/// One placed entity.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Index into the entity slice passed to [`assign`].
    pub entity_index: usize,
    pub position: Position,
}

impl Assignment {
    /// 1-based rank shown to users.
    pub fn rank(&self) -> usize {
        self.position.index + 1
    }
}

/// Pair entities with positions by rank. Only the first
/// `min(entities.len(), positions.len())` entities are placed; the caller
/// surfaces the rest through [`unmatched_entities`] / [`vacant_positions`].
pub fn assign<T>(entities: &[T], positions: &[Position]) -> Vec<Assignment> {
    let mut ordered: Vec<&Position> = positions.iter().collect();
    ordered.sort_by_key(|p| p.index);

    ordered.into_iter()
        .take(entities.len())
        .enumerate()
        .map(|(entity_index, &position)| Assignment { entity_index, position })
        .collect()
}

/// Entities that got no position because the rings ran out.
pub fn unmatched_entities(entity_count: usize, position_count: usize) -> Range<usize> {
    entity_count.min(position_count)..entity_count
}

/// Positions left empty because there were fewer entities than slots.
pub fn vacant_positions(entity_count: usize, positions: &[Position]) -> impl Iterator<Item = &Position> {
    positions.iter().filter(move |p| p.index >= entity_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::generate;

    #[test]
    fn test_fewer_entities_than_positions() {
        let positions: Vec<Position> = generate(5, 5, 1).unwrap().into_iter().take(5).collect();
        let entities = ["A", "B", "C"];

        let placed = assign(&entities, &positions);
        assert_eq!(placed.len(), 3);
        for (k, a) in placed.iter().enumerate() {
            assert_eq!(a.entity_index, k);
            assert_eq!(a.position, positions[k]);
            assert_eq!(a.rank(), k + 1);
        }

        let vacant: Vec<usize> = vacant_positions(entities.len(), &positions).map(|p| p.index).collect();
        assert_eq!(vacant, vec![3, 4]);
        assert!(unmatched_entities(entities.len(), positions.len()).is_empty());
    }

    #[test]
    fn test_more_entities_than_positions() {
        let positions = generate(0, 0, 1).unwrap();
        let entities: Vec<u32> = (0..15).collect();

        let placed = assign(&entities, &positions);
        assert_eq!(placed.len(), 12);
        assert_eq!(placed.last().unwrap().position.index, 11);
        assert_eq!(unmatched_entities(entities.len(), positions.len()), 12..15);
        assert_eq!(vacant_positions(entities.len(), &positions).count(), 0);
    }

    #[test]
    fn test_pairs_by_index_not_slice_order() {
        let mut positions = generate(3, 3, 1).unwrap();
        positions.reverse();

        let placed = assign(&["first", "second"], &positions);
        assert_eq!(placed[0].position.index, 0);
        assert_eq!(placed[1].position.index, 1);
    }

    #[test]
    fn test_empty_inputs() {
        let positions = generate(0, 0, 1).unwrap();
        let none: [&str; 0] = [];
        assert!(assign(&none, &positions).is_empty());
        assert!(assign(&["A"], &[]).is_empty());
        assert_eq!(unmatched_entities(1, 0), 0..1);
    }
}
