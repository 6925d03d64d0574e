//! Player roster and ranking order.
//!
//! The layout only consumes an ordered slice; this module owns how that order
//! is produced: sort by one metric (descending, stable) and drop excluded
//! players.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Unique display name.
    pub name: String,
    /// Sum of the four base stats; primary ranking metric.
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub defense: f64,
    #[serde(default)]
    pub attack: f64,
    /// Excluded players stay in the table but are not placed.
    #[serde(default)]
    pub excluded: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    #[serde(alias = "stats")]
    Total,
    Attack,
    Defense,
    /// Keep the order players were supplied in.
    AsGiven,
}

impl SortKey {
    fn metric(self, p: &Player) -> Option<f64> {
        match self {
            SortKey::Total => Some(p.total),
            SortKey::Attack => Some(p.attack),
            SortKey::Defense => Some(p.defense),
            SortKey::AsGiven => None,
        }
    }

    /// Descending by metric; equal metrics compare equal so a stable sort
    /// keeps input order.
    fn compare(self, a: &Player, b: &Player) -> Ordering {
        match (self.metric(a), self.metric(b)) {
            (Some(x), Some(y)) => y.total_cmp(&x),
            _ => Ordering::Equal,
        }
    }
}

/// A player in ranking order together with its slot in the sorted roster.
#[derive(Debug, Clone, Copy)]
pub struct ActivePlayer<'a> {
    pub sorted_index: usize,
    pub player: &'a Player,
}

#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Build a roster, trimming names and skipping players without one.
    pub fn new(players: impl IntoIterator<Item = Player>) -> Self {
        let players = players.into_iter()
            .filter_map(|mut p| {
                let trimmed = p.name.trim();
                if trimmed.is_empty() {
                    return None;
                }
                if trimmed.len() != p.name.len() {
                    p.name = trimmed.to_string();
                }
                Some(p)
            })
            .collect();
        Self { players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// All players, excluded ones included, in ranking order.
    pub fn sorted(&self, key: SortKey) -> Vec<&Player> {
        let mut out: Vec<&Player> = self.players.iter().collect();
        out.sort_by(|a, b| key.compare(a, b));
        out
    }

    /// Players to place, in ranking order. Each keeps its index into
    /// `sorted(key)` so results can be mapped back onto the full table.
    pub fn active(&self, key: SortKey) -> Vec<ActivePlayer<'_>> {
        self.sorted(key)
            .into_iter()
            .enumerate()
            .filter(|(_, p)| !p.excluded)
            .map(|(sorted_index, player)| ActivePlayer { sorted_index, player })
            .collect()
    }

    pub fn excluded_count(&self) -> usize {
        self.players.iter().filter(|p| p.excluded).count()
    }
}
