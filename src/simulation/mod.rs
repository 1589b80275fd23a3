//! Trial simulation and statistics.
//!
//! - [`engine`]: trial orchestration and the batch runner (N trials, both
//!   strategies evaluated per trial)
//! - [`statistics`]: per-strategy win/lose proportion aggregation and
//!   JSON output

pub mod engine;
pub mod statistics;

pub use engine::{
    simulate_batch, simulate_batch_sequential, simulate_batch_timed, simulate_trial, BatchSummary,
};
pub use statistics::{
    aggregate_proportions, format_table, round2, save_proportions, ProportionTable, StrategyRow,
};
