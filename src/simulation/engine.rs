//! Trial simulation engine — plays N Monty Hall trials and collects results.
//!
//! Each trial builds one random game (assignment, initial pick, host reveal)
//! and evaluates *both* strategies against it, so stay and switch are
//! compared on identical randomness. With 3 doors the two outcomes of a
//! trial are always opposite: switching moves to the unique remaining door.
//!
//! The batch runner seeds one `SmallRng` per trial from `seed + trial_index`,
//! which keeps trials statistically independent and makes a fixed-seed batch
//! reproducible regardless of thread count.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::time::Instant;

use crate::game_mechanics::{
    host_reveal, initial_pick, judge_outcome, random_assignment, resolve_final_pick,
};
use crate::types::{SimulationError, Strategy, TrialResult};

/// Results of a batch run plus wall-clock timing.
pub struct BatchSummary {
    /// 2N trial results in trial order, stay before switch within a trial.
    pub results: Vec<TrialResult>,
    pub num_trials: usize,
    pub seed: u64,
    pub elapsed: std::time::Duration,
}

/// Play one trial, returning the stay result then the switch result.
///
/// The assignment, initial pick, and opened door are drawn once and shared
/// by both strategy evaluations.
pub fn simulate_trial(rng: &mut SmallRng) -> [TrialResult; 2] {
    let assignment = random_assignment(rng);
    let pick = initial_pick(rng);
    let opened_door = host_reveal(&assignment, pick, rng);

    Strategy::ALL.map(|strategy| {
        let final_pick = resolve_final_pick(strategy, opened_door, pick);
        let outcome = judge_outcome(&assignment, final_pick)
            .expect("resolved picks are always in range");
        TrialResult { strategy, outcome }
    })
}

/// Run `num_trials` trials in parallel, flattening into 2N results.
///
/// Fails fast with [`SimulationError::InvalidTrialCount`] when asked for
/// zero trials. Result order is trial order (rayon's collect preserves it),
/// stay before switch within each trial.
pub fn simulate_batch(num_trials: usize, seed: u64) -> Result<Vec<TrialResult>, SimulationError> {
    if num_trials == 0 {
        return Err(SimulationError::InvalidTrialCount(num_trials));
    }

    Ok((0..num_trials)
        .into_par_iter()
        .flat_map_iter(|i| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
            simulate_trial(&mut rng)
        })
        .collect())
}

/// Run the batch on a single seeded stream, sequentially.
///
/// Matches the classic one-generator formulation; use [`simulate_batch`]
/// unless the single-stream draw order matters.
pub fn simulate_batch_sequential(
    num_trials: usize,
    seed: u64,
) -> Result<Vec<TrialResult>, SimulationError> {
    if num_trials == 0 {
        return Err(SimulationError::InvalidTrialCount(num_trials));
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::with_capacity(2 * num_trials);
    for _ in 0..num_trials {
        results.extend(simulate_trial(&mut rng));
    }
    Ok(results)
}

/// Run the parallel batch and capture wall-clock timing.
pub fn simulate_batch_timed(
    num_trials: usize,
    seed: u64,
) -> Result<BatchSummary, SimulationError> {
    let start = Instant::now();
    let results = simulate_batch(num_trials, seed)?;
    Ok(BatchSummary {
        results,
        num_trials,
        seed,
        elapsed: start.elapsed(),
    })
}
