//! Random position generation for property tests and benchmarks.

use crate::core::{DiceRng, CHECKERS, HOME_POINTS, POINTS};

use super::position::Position;

const BAR_SLOT: usize = POINTS;
const OFF_SLOT: usize = POINTS + 1;

/// Generate a random position that respects checker conservation and never
/// mixes both sides on one point.
///
/// About a third of the positions keep every mover checker in the home
/// quadrant or off, so bear-off play gets exercised as often as entry and
/// normal movement.
pub fn random_position(rng: &mut DiceRng) -> Position {
    let mut board_points = [0i8; POINTS];
    let (mut player_bar, mut player_off) = (0u8, 0u8);
    let (mut opponent_bar, mut opponent_off) = (0u8, 0u8);

    let bearing_off = rng.gen_range_usize(0..3) == 0;
    for _ in 0..CHECKERS {
        let slot = if bearing_off {
            match rng.gen_range_usize(0..HOME_POINTS + 1) {
                HOME_POINTS => OFF_SLOT,
                point => point,
            }
        } else {
            rng.gen_range_usize(0..POINTS + 2)
        };

        match slot {
            BAR_SLOT => player_bar += 1,
            OFF_SLOT => player_off += 1,
            point => board_points[point] += 1,
        }
    }

    for _ in 0..CHECKERS {
        // Bar and off are always free, so this terminates.
        let slot = loop {
            let slot = rng.gen_range_usize(0..POINTS + 2);
            if slot >= POINTS || board_points[slot] <= 0 {
                break slot;
            }
        };

        match slot {
            BAR_SLOT => opponent_bar += 1,
            OFF_SLOT => opponent_off += 1,
            point => board_points[point] -= 1,
        }
    }

    Position::from_raw(board_points, player_bar, player_off, opponent_bar, opponent_off)
}
