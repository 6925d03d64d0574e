pub mod layout;
pub mod output;
pub mod roster;
mod wasm;

pub use layout::{
    assign, generate, generate_positions, summarize, Assignment, BaseRegion,
    InvalidConfiguration, Position, PositionKind, RingConfig, Summary,
};
pub use output::{rank, rank_json, PlacementRow, RankingOutput, RankingRequest};
pub use roster::{Player, Roster, SortKey};
