//! WASM bindings for the ringrank-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.

use wasm_bindgen::prelude::*;
use serde_json::to_string;

use crate::layout::{generate, summarize};
use crate::output::{rank_json, ErrorOutput, RankingOutput};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    pub fn console_log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

/// Rank players onto the rings around the base.
/// Takes a JSON `RankingRequest` and returns a JSON `RankingOutput`.
#[wasm_bindgen]
pub fn rank_players(input: &str) -> String {
    let output = rank_json(input);

    match (&output.error, &output.summary, &output.bounds) {
        (Some(e), _, _) => {
            console_error(&format!("Error ranking players: {:?}", e));
        }
        (None, Some(s), Some(b)) => {
            console_log(&format!(
                "Ranked {} players: {} placed, {} empty, grid x {}..={} y {}..={}",
                s.total, s.filled, s.empty, b.min_x, b.max_x, b.min_y, b.max_y
            ));
        }
        _ => {}
    }

    to_json(&output)
}

/// Positions only, for previewing a base/ring setup before players are loaded.
/// Returns a JSON array of positions, or `{"error": ...}`.
#[wasm_bindgen]
pub fn generate_positions_json(base_x: i32, base_y: i32, ring_count: i32) -> String {
    match generate(base_x, base_y, ring_count) {
        Ok(positions) => to_string(&positions).unwrap_or_else(|_| "[]".to_string()),
        Err(e) => {
            console_error(&format!("Error generating positions: {}", e));
            to_string(&ErrorOutput::from(&e)).unwrap_or_else(|_| {
                "{\"error\": {\"message\": \"Serialization error\", \"field\": null}}".to_string()
            })
        }
    }
}

/// Fill counters as JSON.
#[wasm_bindgen]
pub fn summarize_counts(entity_count: usize, position_count: usize) -> String {
    to_string(&summarize(entity_count, position_count)).unwrap_or_else(|_| "{}".to_string())
}

fn to_json(output: &RankingOutput) -> String {
    match to_string(output) {
        Ok(s) => s,
        Err(e) => {
            console_error(&format!("Error serializing output: {:?}", e));
            "{\"error\": {\"message\": \"Serialization error\", \"field\": null}}".to_string()
        }
    }
}
