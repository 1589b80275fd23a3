//! Monty Hall game rules: door assignment, contestant pick, host reveal,
//! strategy resolution, and outcome judgment.
//!
//! The host reveal carries the asymmetry that produces the 2/3 switch
//! advantage: when the contestant sits on the car the host picks randomly
//! between the two goat doors, but when the contestant sits on a goat the
//! reveal is forced — exactly one unpicked goat door remains. The two
//! branches must stay split; collapsing them into a single random choice
//! over valid candidates happens to work only because the goat branch has a
//! one-element candidate set.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::types::{GameAssignment, Outcome, Prize, SimulationError, Strategy, NUM_DOORS};

/// Sum of all door indices (0+1+2). Subtracting two distinct doors from
/// this yields the third.
const DOOR_INDEX_SUM: usize = NUM_DOORS * (NUM_DOORS - 1) / 2;

/// Place the car behind a uniformly random door.
///
/// Equivalent to a uniform permutation of the multiset {goat, goat, car}:
/// each of the 3 distinct arrangements has probability 1/3.
#[inline(always)]
pub fn random_assignment(rng: &mut SmallRng) -> GameAssignment {
    GameAssignment::with_car_at(rng.random_range(0..NUM_DOORS))
}

/// Contestant's first pick: uniform over the doors, independent of the
/// assignment.
#[inline(always)]
pub fn initial_pick(rng: &mut SmallRng) -> usize {
    rng.random_range(0..NUM_DOORS)
}

/// Open one goat door that is not the contestant's pick.
///
/// - Pick holds the car: both other doors are goats, choose one uniformly.
/// - Pick holds a goat: the reveal is forced, no randomness consumed.
pub fn host_reveal(assignment: &GameAssignment, pick: usize, rng: &mut SmallRng) -> usize {
    debug_assert!(pick < NUM_DOORS, "pick {} out of range", pick);

    if assignment.prize_at(pick) == Prize::Car {
        // Uniform over the two non-pick doors, both goats.
        let offset = rng.random_range(1..NUM_DOORS);
        (pick + offset) % NUM_DOORS
    } else {
        // Pick and car occupy two distinct doors; the third is the lone goat.
        DOOR_INDEX_SUM - pick - assignment.car_position()
    }
}

/// Derive the final pick from the strategy, the opened door, and the
/// initial pick.
///
/// Stay keeps the initial pick. Switch moves to the unique door that is
/// neither opened nor picked (two of three doors excluded).
pub fn resolve_final_pick(strategy: Strategy, opened_door: usize, pick: usize) -> usize {
    debug_assert!(opened_door < NUM_DOORS, "opened_door {} out of range", opened_door);
    debug_assert!(pick < NUM_DOORS, "pick {} out of range", pick);
    debug_assert_ne!(opened_door, pick, "host never opens the picked door");

    match strategy {
        Strategy::Stay => pick,
        Strategy::Switch => DOOR_INDEX_SUM - opened_door - pick,
    }
}

/// Classify the final pick as WIN or LOSE.
///
/// Fails fast with [`SimulationError::InvalidDoorPosition`] if the door is
/// out of range — a contract violation upstream, never coerced silently.
pub fn judge_outcome(
    assignment: &GameAssignment,
    final_pick: usize,
) -> Result<Outcome, SimulationError> {
    if final_pick >= NUM_DOORS {
        return Err(SimulationError::InvalidDoorPosition(final_pick));
    }
    Ok(match assignment.prize_at(final_pick) {
        Prize::Car => Outcome::Win,
        Prize::Goat => Outcome::Lose,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_random_assignment_valid() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..100 {
            let assignment = random_assignment(&mut rng);
            assert!(assignment.car_position() < NUM_DOORS);
        }
    }

    #[test]
    fn test_random_assignment_hits_every_door() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut seen = [false; NUM_DOORS];
        for _ in 0..200 {
            seen[random_assignment(&mut rng).car_position()] = true;
        }
        assert!(seen.iter().all(|&s| s), "some car position never drawn");
    }

    #[test]
    fn test_initial_pick_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(initial_pick(&mut rng) < NUM_DOORS);
        }
    }

    #[test]
    fn test_host_reveal_constraints_exhaustive() {
        let mut rng = SmallRng::seed_from_u64(123);
        for car in 0..NUM_DOORS {
            let assignment = GameAssignment::with_car_at(car);
            for pick in 0..NUM_DOORS {
                for _ in 0..50 {
                    let opened = host_reveal(&assignment, pick, &mut rng);
                    assert_ne!(opened, pick, "car={} pick={}", car, pick);
                    assert_eq!(
                        assignment.prize_at(opened),
                        Prize::Goat,
                        "car={} pick={}",
                        car,
                        pick
                    );
                }
            }
        }
    }

    #[test]
    fn test_host_reveal_goat_branch_forced() {
        // Pick != car: the reveal is the unique remaining goat, independent
        // of the rng state.
        for car in 0..NUM_DOORS {
            let assignment = GameAssignment::with_car_at(car);
            for pick in (0..NUM_DOORS).filter(|&p| p != car) {
                let expected = DOOR_INDEX_SUM - pick - car;
                for seed in 0..10 {
                    let mut rng = SmallRng::seed_from_u64(seed);
                    assert_eq!(host_reveal(&assignment, pick, &mut rng), expected);
                }
            }
        }
    }

    #[test]
    fn test_host_reveal_car_branch_covers_both_goats() {
        // Pick == car: over many draws the host must open each goat door.
        let mut rng = SmallRng::seed_from_u64(99);
        for car in 0..NUM_DOORS {
            let assignment = GameAssignment::with_car_at(car);
            let mut seen = [false; NUM_DOORS];
            for _ in 0..100 {
                seen[host_reveal(&assignment, car, &mut rng)] = true;
            }
            for door in 0..NUM_DOORS {
                assert_eq!(seen[door], door != car, "car={} door={}", car, door);
            }
        }
    }

    #[test]
    fn test_resolve_final_pick() {
        for pick in 0..NUM_DOORS {
            for opened in (0..NUM_DOORS).filter(|&d| d != pick) {
                assert_eq!(resolve_final_pick(Strategy::Stay, opened, pick), pick);

                let switched = resolve_final_pick(Strategy::Switch, opened, pick);
                assert_ne!(switched, pick);
                assert_ne!(switched, opened);
                assert!(switched < NUM_DOORS);
            }
        }
    }

    #[test]
    fn test_judge_outcome() {
        let assignment = GameAssignment::with_car_at(1);
        assert_eq!(judge_outcome(&assignment, 1), Ok(Outcome::Win));
        assert_eq!(judge_outcome(&assignment, 0), Ok(Outcome::Lose));
        assert_eq!(judge_outcome(&assignment, 2), Ok(Outcome::Lose));
    }

    #[test]
    fn test_judge_outcome_rejects_out_of_range() {
        let assignment = GameAssignment::with_car_at(0);
        assert_eq!(
            judge_outcome(&assignment, NUM_DOORS),
            Err(SimulationError::InvalidDoorPosition(NUM_DOORS))
        );
        assert_eq!(
            judge_outcome(&assignment, 17),
            Err(SimulationError::InvalidDoorPosition(17))
        );
    }
}
