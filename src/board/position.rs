//! Immutable board position, seen from the side to move.
//!
//! Positive counts belong to the mover, negative counts to the opponent. The
//! mover always travels from high point index to low index and bears off past
//! index 0. `swap_players` turns the board around so the other side can be
//! handled by exactly the same code.

use serde::{Deserialize, Serialize};

use crate::core::{GammonError, Result, CHECKERS, HOME_POINTS, INITIAL_POSITION, POINTS};

/// Where a moving checker starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    /// Entering from the bar.
    Bar,
    Point(usize),
}

/// Where a moving checker ends up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    Point(usize),
    /// Borne off.
    Off,
}

/// One side's view of the board.
///
/// Every transition returns a new value; the receiver is never modified.
/// Deserialization goes through `Position::new`, so a decoded position always
/// conserves checkers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PositionParts", into = "PositionParts")]
pub struct Position {
    board_points: [i8; POINTS],
    player_bar: u8,
    player_off: u8,
    opponent_bar: u8,
    opponent_off: u8,
}

// Wire form of `Position`.
#[derive(Clone, Copy, Serialize, Deserialize)]
struct PositionParts {
    board_points: [i8; POINTS],
    player_bar: u8,
    player_off: u8,
    opponent_bar: u8,
    opponent_off: u8,
}

impl TryFrom<PositionParts> for Position {
    type Error = GammonError;

    fn try_from(parts: PositionParts) -> Result<Self> {
        Position::new(
            parts.board_points,
            parts.player_bar,
            parts.player_off,
            parts.opponent_bar,
            parts.opponent_off,
        )
    }
}

impl From<Position> for PositionParts {
    fn from(position: Position) -> Self {
        Self {
            board_points: position.board_points,
            player_bar: position.player_bar,
            player_off: position.player_off,
            opponent_bar: position.opponent_bar,
            opponent_off: position.opponent_off,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self {
            board_points: INITIAL_POSITION,
            player_bar: 0,
            player_off: 0,
            opponent_bar: 0,
            opponent_off: 0,
        }
    }
}

impl Position {
    /// Build a position from its parts, checking that both sides still own
    /// exactly `CHECKERS` checkers.
    pub fn new(
        board_points: [i8; POINTS],
        player_bar: u8,
        player_off: u8,
        opponent_bar: u8,
        opponent_off: u8,
    ) -> Result<Self> {
        let position = Self {
            board_points,
            player_bar,
            player_off,
            opponent_bar,
            opponent_off,
        };

        let (mine, theirs) = (position.player_checkers(), position.opponent_checkers());
        if mine != CHECKERS as u32 {
            return Err(GammonError::InvalidPosition {
                reason: format!("player has {mine} checkers, expected {CHECKERS}"),
            });
        }
        if theirs != CHECKERS as u32 {
            return Err(GammonError::InvalidPosition {
                reason: format!("opponent has {theirs} checkers, expected {CHECKERS}"),
            });
        }

        Ok(position)
    }

    // Caller guarantees conservation.
    pub(crate) fn from_raw(
        board_points: [i8; POINTS],
        player_bar: u8,
        player_off: u8,
        opponent_bar: u8,
        opponent_off: u8,
    ) -> Self {
        let position = Self {
            board_points,
            player_bar,
            player_off,
            opponent_bar,
            opponent_off,
        };
        debug_assert_eq!(position.player_checkers(), CHECKERS as u32);
        debug_assert_eq!(position.opponent_checkers(), CHECKERS as u32);
        position
    }

    #[must_use]
    pub fn board_points(&self) -> &[i8; POINTS] {
        &self.board_points
    }

    #[must_use]
    pub fn player_bar(&self) -> u8 {
        self.player_bar
    }

    #[must_use]
    pub fn player_off(&self) -> u8 {
        self.player_off
    }

    #[must_use]
    pub fn opponent_bar(&self) -> u8 {
        self.opponent_bar
    }

    #[must_use]
    pub fn opponent_off(&self) -> u8 {
        self.opponent_off
    }

    /// Mover's checkers on the board, on the bar and borne off.
    #[must_use]
    pub fn player_checkers(&self) -> u32 {
        let on_board: u32 = self.board_points.iter().filter(|&&p| p > 0).map(|&p| p as u32).sum();
        on_board + self.player_bar as u32 + self.player_off as u32
    }

    /// Opponent's checkers on the board, on the bar and borne off.
    #[must_use]
    pub fn opponent_checkers(&self) -> u32 {
        let on_board: u32 = self
            .board_points
            .iter()
            .filter(|&&p| p < 0)
            .map(|&p| p.unsigned_abs() as u32)
            .sum();
        on_board + self.opponent_bar as u32 + self.opponent_off as u32
    }

    /// Mover's checkers on each home point, opponent checkers counted as 0.
    #[must_use]
    pub fn player_home(&self) -> [u8; HOME_POINTS] {
        let mut home = [0u8; HOME_POINTS];
        for (slot, &count) in home.iter_mut().zip(&self.board_points[..HOME_POINTS]) {
            *slot = count.max(0) as u8;
        }
        home
    }

    /// All of the mover's checkers are in the home quadrant or already off.
    #[must_use]
    pub fn all_home(&self) -> bool {
        let home: u8 = self.player_home().iter().sum();
        home + self.player_off == CHECKERS
    }

    /// The mover has borne off every checker.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.player_off == CHECKERS
    }

    /// Try to enter a checker from the bar.
    ///
    /// The mover enters on `POINTS - pips`. Returns `None` when that point is
    /// held by two or more opposing checkers.
    #[must_use]
    pub fn enter(&self, pips: u8) -> Option<(Position, Destination)> {
        let destination = POINTS.checked_sub(pips as usize)?;
        if self.is_open(destination) {
            let to = Destination::Point(destination);
            Some((self.apply_move(Source::Bar, to), to))
        } else {
            None
        }
    }

    /// Try to move a checker from `point` toward index 0 without bearing off.
    #[must_use]
    pub fn move_checker(&self, point: usize, pips: u8) -> Option<(Position, Destination)> {
        if self.board_points[point] <= 0 {
            return None;
        }
        let destination = point.checked_sub(pips as usize)?;
        self.step(point, destination)
    }

    /// Try to move a checker from a home point, bearing it off if the pips
    /// carry it past index 0.
    ///
    /// An exact bear-off (landing one past index 0) is always allowed. A
    /// larger die may only bear off from the highest occupied home point.
    #[must_use]
    pub fn off(&self, point: usize, pips: u8) -> Option<(Position, Destination)> {
        if self.board_points[point] <= 0 {
            return None;
        }

        match point.checked_sub(pips as usize) {
            Some(destination) => self.step(point, destination),
            None => {
                let exact = point + 1 == pips as usize;
                let higher: u8 = self.player_home().iter().skip(point + 1).sum();
                if exact || higher == 0 {
                    Some((self.apply_move(Source::Point(point), Destination::Off), Destination::Off))
                } else {
                    None
                }
            }
        }
    }

    /// Apply a single checker move and return the resulting position.
    ///
    /// Landing on a lone opposing checker hits it onto the opponent's bar.
    /// No legality checks beyond debug assertions.
    #[must_use]
    pub fn apply_move(&self, source: Source, destination: Destination) -> Position {
        let mut next = *self;

        match source {
            Source::Bar => {
                debug_assert!(next.player_bar > 0, "no checker on the bar in {next}");
                next.player_bar -= 1;
            }
            Source::Point(point) => {
                debug_assert!(next.board_points[point] > 0, "no checker on point {point} in {next}");
                next.board_points[point] -= 1;
            }
        }

        match destination {
            Destination::Off => next.player_off += 1,
            Destination::Point(point) => {
                if next.board_points[point] == -1 {
                    next.board_points[point] = 1;
                    next.opponent_bar += 1;
                } else {
                    debug_assert!(next.board_points[point] >= 0, "point {point} is blocked in {next}");
                    next.board_points[point] += 1;
                }
            }
        }

        debug_assert_eq!(next.player_checkers(), CHECKERS as u32);
        debug_assert_eq!(next.opponent_checkers(), CHECKERS as u32);
        next
    }

    /// The same position seen by the opponent.
    #[must_use]
    pub fn swap_players(&self) -> Position {
        let mut board_points = self.board_points;
        board_points.reverse();
        for count in &mut board_points {
            *count = -*count;
        }

        Position {
            board_points,
            player_bar: self.opponent_bar,
            player_off: self.opponent_off,
            opponent_bar: self.player_bar,
            opponent_off: self.player_off,
        }
    }

    // A point the mover may land on: empty, own, or a single opposing blot.
    fn is_open(&self, point: usize) -> bool {
        self.board_points[point] >= -1
    }

    fn step(&self, from: usize, to: usize) -> Option<(Position, Destination)> {
        if self.is_open(to) {
            let destination = Destination::Point(to);
            Some((self.apply_move(Source::Point(from), destination), destination))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[off {}]", self.player_off)?;
        for count in &self.board_points {
            write!(f, " {count}")?;
        }
        write!(
            f,
            " [bar {}] | opponent bar {} off {}",
            self.player_bar, self.opponent_bar, self.opponent_off
        )
    }
}
