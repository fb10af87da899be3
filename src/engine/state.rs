//! Result of applying one submove.

use serde::{Deserialize, Serialize};

/// What the caller has to do after a submove.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchState {
    /// Same side, next submove (possibly a forced skip).
    Nothing,
    /// The mover's turn is done. Call `swap_players`, `roll` and
    /// `generate_plays` before the next submove.
    TurnOver,
    /// The mover has borne off every checker.
    GameOver,
}

impl MatchState {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, MatchState::GameOver)
    }
}
