//! Legal play generation.
//!
//! A roll is expanded into a tree of single-checker moves. Each root is a
//! legal first submove, each child a legal continuation with the remaining
//! dice. Only lines that use as many dice as possible survive, and when just
//! one die of a non-double can be played, only the higher one may be.
//!
//! Depth is at most four plies and fan-out at most `POINTS`, so the whole tree
//! is built eagerly every turn.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::{Dice, HOME_POINTS, POINTS};

use super::position::{Destination, Position, Source};

/// One submove plus every legal way to continue the turn after it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub pips: u8,
    pub source: Source,
    pub destination: Destination,
    pub next_moves: Vec<Move>,
}

/// Root moves of a roll and the number of dice the longest line consumes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalPlays {
    pub plays: Vec<Move>,
    pub depth: usize,
}

impl LegalPlays {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }
}

/// Generate every maximal legal play for `dice` from `position`.
///
/// A double is played as four submoves of the same value. A non-double is
/// tried in both die orders:
/// - the order that plays more dice wins outright;
/// - if each order can only play one die, the higher die must be played;
/// - otherwise both orders are legal and their roots are concatenated,
///   left die first.
///
/// Unrolled dice (zero pips) have no plays.
#[must_use]
pub fn generate_plays(position: &Position, dice: Dice) -> LegalPlays {
    if dice.left == 0 || dice.right == 0 {
        return LegalPlays::default();
    }

    if dice.is_double() {
        let (plays, depth) = generate(position, &dice.pips());
        return LegalPlays { plays, depth };
    }

    let (left_plays, left_depth) = generate(position, &dice.pips());
    let (right_plays, right_depth) = generate(position, &dice.swapped().pips());

    let (plays, depth) = match left_depth.cmp(&right_depth) {
        Ordering::Less => (right_plays, right_depth),
        Ordering::Greater => (left_plays, left_depth),
        Ordering::Equal if left_depth == 1 => {
            if dice.left < dice.right {
                (right_plays, 1)
            } else {
                (left_plays, 1)
            }
        }
        Ordering::Equal => {
            let mut plays = left_plays;
            plays.extend(right_plays);
            (plays, left_depth)
        }
    };

    LegalPlays { plays, depth }
}

// Plays for the first pip in `pips`, each carrying its own continuation.
// Returns the kept roots and their depth, or `([], 0)` for a dead ply.
fn generate(position: &Position, pips: &[u8]) -> (Vec<Move>, usize) {
    let Some((&die, rest)) = pips.split_first() else {
        return (Vec::new(), 0);
    };

    let mut plays: Vec<Move> = Vec::new();
    let mut max_depth = 0;

    let mut consider = |source: Source, (next, destination): (Position, Destination)| {
        let (next_moves, depth) = generate(&next, rest);
        match depth.cmp(&max_depth) {
            Ordering::Less => return,
            Ordering::Greater => {
                plays.clear();
                max_depth = depth;
            }
            Ordering::Equal => {}
        }
        plays.push(Move {
            pips: die,
            source,
            destination,
            next_moves,
        });
    };

    if position.player_bar() > 0 {
        // A checker on the bar must enter before anything else moves.
        if let Some(step) = position.enter(die) {
            consider(Source::Bar, step);
        }
    } else if position.all_home() {
        for point in 0..HOME_POINTS {
            if let Some(step) = position.off(point, die) {
                consider(Source::Point(point), step);
            }
        }
    } else {
        for point in 0..POINTS {
            if let Some(step) = position.move_checker(point, die) {
                consider(Source::Point(point), step);
            }
        }
    }

    if plays.is_empty() {
        (plays, 0)
    } else {
        (plays, max_depth + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CHECKERS;

    fn position(board_points: [i8; POINTS], player_bar: u8, player_off: u8, opponent_bar: u8) -> Position {
        let theirs: u8 = board_points.iter().filter(|&&p| p < 0).map(|&p| p.unsigned_abs()).sum();
        Position::new(
            board_points,
            player_bar,
            player_off,
            opponent_bar,
            CHECKERS - theirs - opponent_bar,
        )
        .unwrap()
    }

    fn roots(plays: &LegalPlays) -> Vec<(u8, Source)> {
        plays.plays.iter().map(|m| (m.pips, m.source)).collect()
    }

    #[test]
    fn test_unrolled_dice_have_no_plays() {
        let plays = generate_plays(&Position::default(), Dice::default());
        assert!(plays.is_empty());
        assert_eq!(plays.depth, 0);
    }

    #[test]
    fn test_opening_roll_plays_both_dice() {
        let plays = generate_plays(&Position::default(), Dice::new(1, 2));
        assert_eq!(plays.depth, 2);
        assert!(!plays.is_empty());

        // Left-first roots come before right-first roots
        let first_right = plays.plays.iter().position(|m| m.pips == 2).unwrap();
        assert!(plays.plays[..first_right].iter().all(|m| m.pips == 1));
        assert!(plays.plays[first_right..].iter().all(|m| m.pips == 2));
    }

    #[test]
    fn test_every_leaf_is_at_full_depth() {
        fn check(moves: &[Move], remaining: usize) {
            assert!(!moves.is_empty() || remaining == 0);
            for m in moves {
                check(&m.next_moves, remaining - 1);
            }
        }

        let plays = generate_plays(&Position::default(), Dice::new(3, 3));
        check(&plays.plays, plays.depth);
    }

    #[test]
    fn test_forced_entry_blocks_other_moves() {
        // One checker on the bar; entering with the 3 is blocked on point 9.
        let pos = position([2, 2, 0, 0, 0, 0, 0, 0, 0, -2, 0, 0], 1, 3, 0);
        let plays = generate_plays(&pos, Dice::new(1, 3));

        assert_eq!(plays.depth, 2);
        assert_eq!(roots(&plays), vec![(1, Source::Bar)]);
    }

    #[test]
    fn test_closed_entry_kills_the_turn() {
        // Every entry point (9, 10, 11) is blocked
        let pos = position([5, 0, 0, 0, 0, 0, 0, 0, 0, -2, -2, -2], 3, 0, 0);
        let plays = generate_plays(&pos, Dice::new(1, 2));

        assert!(plays.is_empty());
        assert_eq!(plays.depth, 0);
    }

    #[test]
    fn test_deeper_order_wins() {
        // Lone straggler on point 5, opponent points on 3 and 2.
        let pos = position([0, 0, -2, -2, 0, 1, 0, 0, 0, 0, 0, 0], 0, 7, 0);

        // 1 then 3 (5 -> 4 -> 1) plays both dice; 3 first is blocked.
        let plays = generate_plays(&pos, Dice::new(1, 3));
        assert_eq!(plays.depth, 2);
        assert_eq!(roots(&plays), vec![(1, Source::Point(5))]);

        // 1 then 2 stalls on point 4; 2 first is blocked. Only the 1 is playable.
        let plays = generate_plays(&pos, Dice::new(1, 2));
        assert_eq!(plays.depth, 1);
        assert_eq!(roots(&plays), vec![(1, Source::Point(5))]);
    }

    #[test]
    fn test_only_playable_order_survives() {
        // 2 then 1 reaches point 2 and stalls; 1 first is blocked on point 3.
        let pos = position([0, -2, 0, -2, 1, 0, 0, 0, 0, 0, 0, 0], 0, 7, 0);

        let plays = generate_plays(&pos, Dice::new(2, 1));
        assert_eq!(plays.depth, 1);
        assert_eq!(roots(&plays), vec![(2, Source::Point(4))]);
    }

    #[test]
    fn test_higher_die_wins_tie_at_depth_one() {
        // Lone straggler on point 6, opponent points on 4 and 2.
        // 1 pip: 6 -> 5, then 3 pips to 2 is blocked.
        // 3 pips: 6 -> 3, then 1 pip to 2 is blocked.
        let pos = position([0, 0, -2, 0, -2, 0, 1, 0, 0, 0, 0, 0], 0, 7, 0);

        let plays = generate_plays(&pos, Dice::new(1, 3));
        assert_eq!(plays.depth, 1);
        assert_eq!(roots(&plays), vec![(3, Source::Point(6))]);

        let plays = generate_plays(&pos, Dice::new(3, 1));
        assert_eq!(plays.depth, 1);
        assert_eq!(roots(&plays), vec![(3, Source::Point(6))]);
    }

    #[test]
    fn test_bear_off_only_when_all_home() {
        // Mover has a straggler on point 3 (outside home)
        let pos = position([2, 2, 3, 1, 0, 0, 0, 0, 0, 0, 0, -2], 0, 0, 0);
        let plays = generate_plays(&pos, Dice::new(3, 3));

        assert!(plays.plays.iter().all(|m| m.destination != Destination::Off));
        assert_eq!(roots(&plays), vec![(3, Source::Point(3))]);
        assert_eq!(plays.depth, 4);
    }

    #[test]
    fn test_bear_off_generated_when_all_home() {
        let pos = position([2, 2, 3, 0, 0, 0, 0, 0, 0, 0, 0, -2], 0, 1, 0);
        let plays = generate_plays(&pos, Dice::new(3, 3));

        assert_eq!(plays.depth, 4);
        assert!(plays.plays.iter().all(|m| m.destination == Destination::Off));
        assert_eq!(roots(&plays), vec![(3, Source::Point(2))]);
    }
}
