//! # Monty — Monty Hall strategy simulator
//!
//! Empirically compares the two contestant strategies in the Monty Hall
//! puzzle — **stay** (keep the initial pick) vs **switch** (move to the only
//! remaining unopened door) — by playing N independent trials and measuring
//! per-strategy win proportions.
//!
//! ## Pipeline
//!
//! Each trial flows strictly downward through the game state machine:
//!
//! | Step | Function | Module |
//! |------|----------|--------|
//! | Door assignment | [`game_mechanics::random_assignment`] | [`game_mechanics`] |
//! | Initial pick | [`game_mechanics::initial_pick`] | [`game_mechanics`] |
//! | Host reveal | [`game_mechanics::host_reveal`] | [`game_mechanics`] |
//! | Strategy resolution | [`game_mechanics::resolve_final_pick`] | [`game_mechanics`] |
//! | Outcome judgment | [`game_mechanics::judge_outcome`] | [`game_mechanics`] |
//! | Trial orchestration | [`simulation::engine::simulate_trial`] | [`simulation::engine`] |
//! | Batch run + aggregation | [`simulation::engine::simulate_batch`] | [`simulation`] |
//!
//! Both strategies are evaluated against the *same* random game within each
//! trial (paired comparison), so their outcomes are always opposite and the
//! variance of the measured gap is lower than with independent games.
//!
//! ## Randomness
//!
//! Every randomness-consuming function takes an explicit `&mut SmallRng`
//! handle; there is no global generator. The parallel batch runner seeds one
//! stream per trial from `seed + trial_index`, making runs reproducible for
//! a fixed seed regardless of thread count.

pub mod env_config;
pub mod game_mechanics;
pub mod simulation;
pub mod types;
