//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{MatchConfig, Player, LEGAL_POINTS_WIDTH, POINTS};
use crate::game::Backgammon;

fn first_player(turn_zero: bool) -> Player {
    if turn_zero {
        Player::Zero
    } else {
        Player::One
    }
}

/// Python wrapper for `Backgammon`.
///
/// Action ids are always in the frame of the side to move.
#[pyclass(name = "Backgammon")]
pub struct PyBackgammon {
    game: Backgammon,
}

#[pymethods]
impl PyBackgammon {
    /// Create a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed for the dice
    /// - turn_zero: whether player zero moves first
    #[new]
    #[pyo3(signature = (seed = 42, turn_zero = true))]
    fn new(seed: u64, turn_zero: bool) -> Self {
        let config = MatchConfig::default()
            .with_seed(seed)
            .with_first_player(first_player(turn_zero));
        Self {
            game: Backgammon::new(&config),
        }
    }

    /// Start a new game on the same dice stream.
    #[pyo3(signature = (turn_zero = true))]
    fn reset(&mut self, turn_zero: bool) {
        self.game.reset(first_player(turn_zero));
    }

    /// Legal action ids for the side to move. `[0]` means skip.
    fn legal_actions(&self) -> Vec<usize> {
        self.game.legal_actions()
    }

    /// Play one submove. Returns True when the game is over.
    ///
    /// Raises ValueError if the action is not legal.
    fn action(&mut self, action: usize) -> PyResult<bool> {
        self.game
            .action(action)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Four rows of legal sources/destinations: left die sources, left die
    /// destinations, right die sources, right die destinations.
    fn legal_points(&self) -> Vec<[u8; LEGAL_POINTS_WIDTH]> {
        self.game.legal_points().rows().to_vec()
    }

    /// Side to move: 0 or 1.
    #[getter]
    fn turn(&self) -> usize {
        self.game.turn().index()
    }

    #[getter]
    fn dice(&self) -> (u8, u8) {
        let dice = self.game.dice();
        (dice.left, dice.right)
    }

    #[getter]
    fn used_dice(&self) -> Vec<u8> {
        self.game.used_dice().as_slice().to_vec()
    }

    /// Board from player zero's side: positive counts are player zero's.
    #[getter]
    fn board_points(&self) -> [i8; POINTS] {
        *self.game.position().board_points()
    }

    /// Checkers on the bar: (player zero, player one).
    #[getter]
    fn bars(&self) -> (u8, u8) {
        let position = self.game.position();
        (position.player_bar(), position.opponent_bar())
    }

    /// Checkers borne off: (player zero, player one).
    #[getter]
    fn offs(&self) -> (u8, u8) {
        let position = self.game.position();
        (position.player_off(), position.opponent_off())
    }

    #[getter]
    fn legal_plays_depth(&self) -> usize {
        self.game.legal_plays_depth()
    }

    #[getter]
    fn move_number(&self) -> usize {
        self.game.move_number()
    }

    fn __str__(&self) -> String {
        self.game.position().to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Backgammon(turn={}, dice={}, move_number={})",
            self.game.turn().index(),
            self.game.dice(),
            self.game.move_number()
        )
    }
}
