//! Rules constants and match configuration.
//!
//! The board geometry is fixed at compile time. Everything a caller may want
//! to vary per match (the RNG seed, who opens) lives in `MatchConfig`.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Checkers per side.
pub const CHECKERS: u8 = 8;

/// Points on the board.
pub const POINTS: usize = 12;

/// Points in each side's home quadrant.
pub const HOME_POINTS: usize = POINTS / 4;

/// Faces on each die. Never larger than `HOME_POINTS`.
pub const PIPS_COUNT: u8 = 3;

/// Player zero's view of the opening layout.
///
/// Player zero moves from high index to low index, player one the other way.
pub const INITIAL_POSITION: [i8; POINTS] = [-2, 0, 3, 0, 0, -3, 3, 0, 0, -3, 0, 2];

/// Width of one die block in the action space and of a legal-points row:
/// `[off][POINTS][bar]`.
pub const LEGAL_POINTS_WIDTH: usize = POINTS + 2;

/// Number of flat action ids: the skip sentinel plus one block per die.
pub const ACTION_SPACE: usize = 1 + LEGAL_POINTS_WIDTH * 2;

const _: () = assert!(PIPS_COUNT as usize <= HOME_POINTS);

/// Per-match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Seed for the dice RNG.
    /// Same seed produces the same sequence of rolls.
    pub seed: u64,

    /// Side that plays the opening roll.
    pub first_player: Player,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            first_player: Player::Zero,
        }
    }
}

impl MatchConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom opening player.
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }
}
