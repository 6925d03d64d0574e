//! Request and output types for the JS frontend.
//!
//! The frontend sends one JSON request describing the base, ring count, sort
//! order and players, and gets back everything it needs to draw the grid and
//! the results table.

use serde::{Deserialize, Serialize};

use crate::layout::{
    assign, build_cells, generate_rings, summarize, CellOutput, GridBounds,
    InvalidConfiguration, Position, PositionKind, RingConfig, Summary,
};
use crate::roster::{Player, Roster, SortKey};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RankingRequest {
    pub base_x: i32,
    pub base_y: i32,
    pub ring_count: i32,
    pub sort_by: SortKey,
    pub players: Vec<Player>,
}

impl Default for RankingRequest {
    fn default() -> Self {
        let cfg = RingConfig::default();
        Self {
            base_x: cfg.base_x,
            base_y: cfg.base_y,
            ring_count: cfg.ring_count,
            sort_by: SortKey::default(),
            players: Vec::new(),
        }
    }
}

impl RankingRequest {
    pub fn ring_config(&self) -> RingConfig {
        RingConfig::new(self.base_x, self.base_y, self.ring_count)
    }
}

/// One line of the results table. Every player gets a row; spatial fields are
/// null for players that were excluded or did not fit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementRow {
    pub rank: Option<usize>,
    pub name: String,
    pub total: f64,
    pub defense: f64,
    pub attack: f64,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub ring: Option<i32>,
    pub kind: Option<PositionKind>,
    /// Rounded to two decimals for display.
    pub distance: Option<f64>,
    pub excluded: bool,
}

impl PlacementRow {
    fn unplaced(p: &Player) -> Self {
        Self {
            rank: None,
            name: p.name.clone(),
            total: p.total,
            defense: p.defense,
            attack: p.attack,
            x: None,
            y: None,
            ring: None,
            kind: None,
            distance: None,
            excluded: p.excluded,
        }
    }

    fn place(&mut self, pos: &Position) {
        self.rank = Some(pos.index + 1);
        self.x = Some(pos.x);
        self.y = Some(pos.y);
        self.ring = Some(pos.ring);
        self.kind = Some(pos.kind);
        self.distance = Some(round2(pos.distance));
    }
}

/// Error information for the frontend's message banner
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorInfo {
    pub message: String,
    /// Offending request field, if the error is tied to one.
    pub field: Option<String>,
}

impl From<&InvalidConfiguration> for ErrorInfo {
    fn from(e: &InvalidConfiguration) -> Self {
        Self {
            message: e.msg.clone(),
            field: Some(e.field.to_string()),
        }
    }
}

/// Bare `{"error": ...}` body for calls that have no ranking to report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorOutput {
    pub error: ErrorInfo,
}

impl From<&InvalidConfiguration> for ErrorOutput {
    fn from(e: &InvalidConfiguration) -> Self {
        Self { error: ErrorInfo::from(e) }
    }
}

/// The combined output sent to the frontend
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub positions: Vec<Position>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<PlacementRow>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cells: Vec<CellOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<GridBounds>,
    pub excluded_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl RankingOutput {
    pub fn from_error(error: ErrorInfo) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }
}

/// Run a full ranking: generate positions, order players, place them and
/// build the table, grid and counters.
pub fn rank(req: &RankingRequest) -> Result<RankingOutput, InvalidConfiguration> {
    let cfg = req.ring_config();
    let base = cfg.validate()?;
    let positions = generate_rings(base, cfg.ring_count);

    let roster = Roster::new(req.players.iter().cloned());
    let sorted = roster.sorted(req.sort_by);
    let active = roster.active(req.sort_by);
    let assignments = assign(&active, &positions);

    let mut rows: Vec<PlacementRow> = sorted.iter().map(|p| PlacementRow::unplaced(p)).collect();
    for a in &assignments {
        rows[active[a.entity_index].sorted_index].place(&a.position);
    }

    let cells = build_cells(base, &positions, &assignments);
    let bounds = GridBounds::from_positions(base, &positions);
    let summary = summarize(active.len(), positions.len());

    Ok(RankingOutput {
        positions,
        rows,
        cells,
        summary: Some(summary),
        bounds: Some(bounds),
        excluded_count: roster.excluded_count(),
        error: None,
    })
}

/// JSON front door used by the wasm bindings. Never fails: problems are
/// reported through `error`.
pub fn rank_json(input: &str) -> RankingOutput {
    let req: RankingRequest = match serde_json::from_str(input) {
        Ok(req) => req,
        Err(e) => {
            return RankingOutput::from_error(ErrorInfo {
                message: format!("Invalid request: {}", e),
                field: None,
            });
        }
    };
    match rank(&req) {
        Ok(out) => out,
        Err(e) => RankingOutput::from_error(ErrorInfo::from(&e)),
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
