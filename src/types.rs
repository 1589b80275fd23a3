//! Core data structures: prizes, door assignments, strategy/outcome tags,
//! and the simulation error type.
//!
//! Door positions are plain 0-indexed `usize` values in `0..NUM_DOORS`.
//! Prize labels are a closed two-value enum, so a door that is neither a
//! goat nor a car is unrepresentable.

use serde::Serialize;
use thiserror::Error;

/// Number of doors in the game: one car, two goats.
pub const NUM_DOORS: usize = 3;

/// What a door hides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prize {
    Goat,
    Car,
}

/// Car/goat assignment for one trial.
///
/// Exactly one door hides the car; the assignment is immutable after
/// construction and scoped to a single trial. Built either uniformly at
/// random ([`crate::game_mechanics::random_assignment`]) or at a fixed
/// position ([`GameAssignment::with_car_at`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameAssignment {
    prizes: [Prize; NUM_DOORS],
}

impl GameAssignment {
    /// Build an assignment with the car behind `car_position`.
    pub fn with_car_at(car_position: usize) -> Self {
        debug_assert!(
            car_position < NUM_DOORS,
            "car_position {} out of range",
            car_position
        );
        let mut prizes = [Prize::Goat; NUM_DOORS];
        prizes[car_position] = Prize::Car;
        GameAssignment { prizes }
    }

    /// Prize behind the given door.
    #[inline(always)]
    pub fn prize_at(&self, door: usize) -> Prize {
        self.prizes[door]
    }

    /// Position of the single car door.
    #[inline(always)]
    pub fn car_position(&self) -> usize {
        self.prizes
            .iter()
            .position(|&p| p == Prize::Car)
            .expect("assignment always holds exactly one car")
    }
}

/// Contestant policy for the final choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Keep the initial pick.
    Stay,
    /// Move to the only remaining unopened door.
    Switch,
}

impl Strategy {
    /// Both strategies in evaluation order (stay before switch).
    pub const ALL: [Strategy; 2] = [Strategy::Stay, Strategy::Switch];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Stay => "stay",
            Strategy::Switch => "switch",
        }
    }
}

/// Result classification for one strategy in one trial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    pub fn name(self) -> &'static str {
        match self {
            Outcome::Win => "WIN",
            Outcome::Lose => "LOSE",
        }
    }
}

/// One row of the batch result: a strategy paired with its outcome.
///
/// Each trial produces exactly two of these (stay first, then switch),
/// sharing the same underlying game assignment and initial pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TrialResult {
    pub strategy: Strategy,
    pub outcome: Outcome,
}

/// Contract violations surfaced at the boundary components.
///
/// The game logic itself is total; these cover the two ways a caller can
/// hand the simulator inconsistent input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    /// A door position outside `0..NUM_DOORS` reached the outcome judge.
    #[error("door position {0} is out of range (expected 0..3)")]
    InvalidDoorPosition(usize),
    /// The batch runner was asked for zero trials.
    #[error("trial count must be positive, got {0}")]
    InvalidTrialCount(usize),
}
