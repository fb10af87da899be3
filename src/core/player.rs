//! Player identification.
//!
//! The engine itself only ever sees the side to move. `Player` exists for the
//! layers that need to know which absolute side that is: the action codec
//! mirrors ids for `Player::One`, and the match driver tracks whose turn it is.

use serde::{Deserialize, Serialize};

/// One of the two sides.
///
/// `Zero` moves from high point index to low, `One` from low to high.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    #[default]
    Zero,
    One,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::Zero, Player::One];

    /// The other side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::Zero => Player::One,
            Player::One => Player::Zero,
        }
    }

    /// Raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::Zero => 0,
            Player::One => 1,
        }
    }

    /// Whether this side's board is the engine's canonical orientation.
    #[must_use]
    pub const fn is_canonical(self) -> bool {
        matches!(self, Player::Zero)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index())
    }
}
