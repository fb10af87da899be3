//! Engine checkpoints.
//!
//! A snapshot captures everything a `TurnEngine` holds, including the RNG
//! position, so a restored engine rolls the same dice the source engine would
//! have. Snapshots stay in memory; `to_bytes` only hands the caller a buffer.

use serde::{Deserialize, Serialize};

use crate::board::{Move, Position};
use crate::core::{Dice, DiceRngState, Result, UsedDice};

/// Serializable copy of a `TurnEngine`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub position: Position,
    pub dice: Dice,
    pub used_dice: UsedDice,
    pub legal_plays: Vec<Move>,
    pub legal_plays_depth: usize,
    pub move_number: usize,
    pub rng: DiceRngState,
}

impl EngineSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a buffer produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
