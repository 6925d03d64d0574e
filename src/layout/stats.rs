use serde::Serialize;

/// Fill counters for a ranking run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    /// Entities supplied for placement.
    pub total: usize,
    /// Positions generated.
    pub capacity: usize,
    pub filled: usize,
    pub empty: usize,
}

pub fn summarize(entity_count: usize, position_count: usize) -> Summary {
    Summary {
        total: entity_count,
        capacity: position_count,
        filled: entity_count.min(position_count),
        empty: position_count.saturating_sub(entity_count),
    }
}
