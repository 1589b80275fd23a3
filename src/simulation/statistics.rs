//! Proportion aggregation from trial results.
//!
//! Groups the flat 2N-record batch by strategy, counts WIN/LOSE outcomes,
//! and normalizes by group total, so each strategy row sums to 1.0. Counts
//! and full-precision rates are kept in the table; 2-decimal rounding is
//! applied only at the presentation edge ([`round2`], [`format_table`]).

use serde::Serialize;
use std::fmt::Write as _;

use crate::types::{Outcome, Strategy, TrialResult};

/// Win/lose counts and row-normalized proportions for one strategy.
#[derive(Serialize, Clone, Debug)]
pub struct StrategyRow {
    pub strategy: Strategy,
    pub wins: u64,
    pub losses: u64,
    /// wins / (wins + losses)
    pub win_rate: f64,
    /// losses / (wins + losses)
    pub loss_rate: f64,
}

/// The 2×2 proportion summary derived from a batch result.
#[derive(Serialize, Clone, Debug)]
pub struct ProportionTable {
    pub num_trials: usize,
    pub seed: u64,
    /// One row per strategy, stay before switch.
    pub rows: Vec<StrategyRow>,
}

/// Aggregate per-strategy proportions: group by strategy, count outcomes,
/// normalize by group total.
pub fn aggregate_proportions(
    results: &[TrialResult],
    num_trials: usize,
    seed: u64,
) -> ProportionTable {
    let rows = Strategy::ALL
        .iter()
        .map(|&strategy| {
            let mut wins = 0u64;
            let mut losses = 0u64;
            for result in results.iter().filter(|r| r.strategy == strategy) {
                match result.outcome {
                    Outcome::Win => wins += 1,
                    Outcome::Lose => losses += 1,
                }
            }
            let total = (wins + losses).max(1) as f64;
            StrategyRow {
                strategy,
                wins,
                losses,
                win_rate: wins as f64 / total,
                loss_rate: losses as f64 / total,
            }
        })
        .collect();

    ProportionTable {
        num_trials,
        seed,
        rows,
    }
}

/// Round to the 2-decimal display precision used by the text table.
#[inline(always)]
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Render the proportion table as fixed-width text, 2-decimal proportions.
pub fn format_table(table: &ProportionTable) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  {:>8} {:>8} {:>8}", "", "WIN", "LOSE");
    for row in &table.rows {
        let _ = writeln!(
            out,
            "  {:>8} {:>8.2} {:>8.2}",
            row.strategy.name(),
            round2(row.win_rate),
            round2(row.loss_rate)
        );
    }
    out
}

/// Save the proportion table as pretty-printed JSON.
pub fn save_proportions(table: &ProportionTable, path: &str) {
    if let Some(parent) = std::path::Path::new(path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let json = serde_json::to_string_pretty(table).expect("Failed to serialize proportions");
    std::fs::write(path, json).expect("Failed to write proportions file");
}
