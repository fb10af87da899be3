//! Flat action ids.
//!
//! Layout, in player zero's frame:
//!
//! ```text
//! [skip] [off | point 0 .. point 11 | bar] [off | point 0 .. point 11 | bar]
//!   0          left die block                    right die block
//! ```
//!
//! An id names a die and the point a checker leaves from. The off column
//! never names a source; it is there so the block lines up with the legal
//! points grid. Player one sees every block mirrored, so its bar sits next
//! to the skip id and the off column at the end of each block.

use serde::{Deserialize, Serialize};

use crate::board::{Destination, Source};
use crate::core::{Die, Player, ACTION_SPACE, LEGAL_POINTS_WIDTH, POINTS};

const OFF_COLUMN: usize = 0;
const BAR_COLUMN: usize = POINTS + 1;

/// A decoded action: skip the submove, or play one die from one source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    Skip,
    Play { die: Die, source: Source },
}

/// Bidirectional mapping between action ids and selections.
#[derive(Clone, Copy, Debug, Default)]
pub struct ActionCodec;

impl ActionCodec {
    /// Id of the skip sentinel.
    pub const SKIP: usize = 0;

    /// Encode a selection as seen by `perspective`.
    #[must_use]
    pub fn encode(selection: Selection, perspective: Player) -> usize {
        match selection {
            Selection::Skip => Self::SKIP,
            Selection::Play { die, source } => {
                1 + die.index() * LEGAL_POINTS_WIDTH + frame(source_column(source), perspective)
            }
        }
    }

    /// Decode an id submitted by `perspective`.
    ///
    /// Returns `None` for ids outside the action space and for the off
    /// column, which no checker can leave from.
    #[must_use]
    pub fn decode(action: usize, perspective: Player) -> Option<Selection> {
        if action == Self::SKIP {
            return Some(Selection::Skip);
        }
        if action >= ACTION_SPACE {
            return None;
        }

        let slot = action - 1;
        let die = Die::BOTH[slot / LEGAL_POINTS_WIDTH];
        let source = match frame(slot % LEGAL_POINTS_WIDTH, perspective) {
            OFF_COLUMN => return None,
            BAR_COLUMN => Source::Bar,
            column => Source::Point(column - 1),
        };

        Some(Selection::Play { die, source })
    }
}

/// Column of a source in player zero's frame.
pub(crate) fn source_column(source: Source) -> usize {
    match source {
        Source::Bar => BAR_COLUMN,
        Source::Point(point) => point + 1,
    }
}

/// Column of a destination in player zero's frame.
pub(crate) fn destination_column(destination: Destination) -> usize {
    match destination {
        Destination::Off => OFF_COLUMN,
        Destination::Point(point) => point + 1,
    }
}

// Mirror a column for player one. Its own inverse.
fn frame(column: usize, perspective: Player) -> usize {
    if perspective.is_canonical() {
        column
    } else {
        BAR_COLUMN - column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(die: Die, source: Source) -> Selection {
        Selection::Play { die, source }
    }

    #[test]
    fn test_skip() {
        for player in Player::BOTH {
            assert_eq!(ActionCodec::encode(Selection::Skip, player), 0);
            assert_eq!(ActionCodec::decode(0, player), Some(Selection::Skip));
        }
    }

    #[test]
    fn test_player_zero_vectors() {
        let zero = Player::Zero;
        for p in 0..POINTS {
            assert_eq!(ActionCodec::encode(play(Die::Left, Source::Point(p)), zero), p + 2);
            assert_eq!(ActionCodec::encode(play(Die::Right, Source::Point(p)), zero), p + 16);
        }
        assert_eq!(ActionCodec::encode(play(Die::Left, Source::Bar), zero), 14);
        assert_eq!(ActionCodec::encode(play(Die::Right, Source::Bar), zero), 28);
    }

    #[test]
    fn test_player_one_vectors() {
        let one = Player::One;
        for p in 0..POINTS {
            assert_eq!(ActionCodec::encode(play(Die::Left, Source::Point(p)), one), 13 - p);
            assert_eq!(ActionCodec::encode(play(Die::Right, Source::Point(p)), one), 27 - p);
        }
        assert_eq!(ActionCodec::encode(play(Die::Left, Source::Bar), one), 1);
        assert_eq!(ActionCodec::encode(play(Die::Right, Source::Bar), one), 15);
    }

    #[test]
    fn test_decode_inverts_encode() {
        let sources = (0..POINTS).map(Source::Point).chain(std::iter::once(Source::Bar));
        for source in sources {
            for die in Die::BOTH {
                for player in Player::BOTH {
                    let selection = play(die, source);
                    let id = ActionCodec::encode(selection, player);
                    assert!(id > 0 && id < ACTION_SPACE);
                    assert_eq!(ActionCodec::decode(id, player), Some(selection));
                }
            }
        }
    }

    #[test]
    fn test_decode_rejects_off_column_and_out_of_range() {
        // Off column: first slot of each block for player zero, last for player one
        assert_eq!(ActionCodec::decode(1, Player::Zero), None);
        assert_eq!(ActionCodec::decode(15, Player::Zero), None);
        assert_eq!(ActionCodec::decode(14, Player::One), None);
        assert_eq!(ActionCodec::decode(28, Player::One), None);

        assert_eq!(ActionCodec::decode(ACTION_SPACE, Player::Zero), None);
        assert_eq!(ActionCodec::decode(usize::MAX, Player::One), None);
    }
}
