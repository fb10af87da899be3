//! Legal source/destination grid.
//!
//! Four rows of `POINTS + 2` columns, laid out like one action block
//! (`[off | points | bar]` in player zero's frame):
//!
//! 0. left die, sources
//! 1. left die, destinations
//! 2. right die, sources
//! 3. right die, destinations
//!
//! The source rows, flattened, are exactly the legal action ids minus one.

use serde::{Deserialize, Serialize};

use crate::board::Move;
use crate::core::{Dice, Die, Player, LEGAL_POINTS_WIDTH};

use super::action::{destination_column, source_column, ActionCodec};

/// Which first submoves are legal right now, per die.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LegalPoints {
    rows: [[u8; LEGAL_POINTS_WIDTH]; 4],
}

impl LegalPoints {
    /// Mark every root move of a frontier, in player zero's frame.
    ///
    /// On a double every move is reported under the left die.
    #[must_use]
    pub fn from_plays(plays: &[Move], dice: Dice) -> Self {
        let mut rows = [[0u8; LEGAL_POINTS_WIDTH]; 4];

        for mv in plays {
            let Some(die) = dice.die_for(mv.pips) else {
                continue;
            };
            rows[die.index() * 2][source_column(mv.source)] = 1;
            rows[die.index() * 2 + 1][destination_column(mv.destination)] = 1;
        }

        Self { rows }
    }

    /// The grid as `perspective` sees it: columns reversed for player one.
    #[must_use]
    pub fn for_player(self, perspective: Player) -> Self {
        if perspective.is_canonical() {
            self
        } else {
            self.mirrored()
        }
    }

    /// Columns reversed.
    #[must_use]
    pub fn mirrored(mut self) -> Self {
        for row in &mut self.rows {
            row.reverse();
        }
        self
    }

    #[must_use]
    pub fn rows(&self) -> &[[u8; LEGAL_POINTS_WIDTH]; 4] {
        &self.rows
    }

    #[must_use]
    pub fn sources(&self, die: Die) -> &[u8; LEGAL_POINTS_WIDTH] {
        &self.rows[die.index() * 2]
    }

    #[must_use]
    pub fn destinations(&self, die: Die) -> &[u8; LEGAL_POINTS_WIDTH] {
        &self.rows[die.index() * 2 + 1]
    }

    /// Legal action ids in ascending order, or just the skip id if there are none.
    #[must_use]
    pub fn action_ids(&self) -> Vec<usize> {
        let ids: Vec<usize> = Die::BOTH
            .iter()
            .flat_map(|&die| self.sources(die).iter())
            .enumerate()
            .filter(|&(_, &marked)| marked != 0)
            .map(|(index, _)| index + 1)
            .collect();

        if ids.is_empty() {
            vec![ActionCodec::SKIP]
        } else {
            ids
        }
    }
}
