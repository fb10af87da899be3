//! Two-player match driver.

use crate::board::Position;
use crate::codec::LegalPoints;
use crate::core::{Dice, MatchConfig, Player, Result, UsedDice};
use crate::engine::{MatchState, TurnEngine};

/// A game between player zero and player one.
///
/// Wraps a `TurnEngine`, keeps track of whose turn it is and runs the
/// turn-boundary sequence itself, so callers only submit action ids in their
/// own frame.
#[derive(Clone, Debug)]
pub struct Backgammon {
    engine: TurnEngine,
    turn: Player,
}

impl Backgammon {
    /// Start a game: opening roll (never a double) for `config.first_player`.
    #[must_use]
    pub fn new(config: &MatchConfig) -> Self {
        let mut game = Self {
            engine: TurnEngine::from_config(config),
            turn: config.first_player,
        };
        game.start(config.first_player);
        game
    }

    /// Start a new game on the same dice stream.
    pub fn reset(&mut self, first_player: Player) {
        self.engine.reset();
        self.start(first_player);
    }

    fn start(&mut self, first_player: Player) {
        self.turn = first_player;
        self.engine.first_roll();
        self.engine.generate_plays();
    }

    /// Legal action ids for the side to move, ascending. `[0]` means skip.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<usize> {
        self.engine.legal_actions(self.turn)
    }

    /// Play one submove for the side to move.
    ///
    /// Returns `true` once the mover has borne off every checker. When the
    /// turn ends the board is handed over and the next side's dice are rolled
    /// before this returns.
    pub fn action(&mut self, action: usize) -> Result<bool> {
        match self.engine.action_as(action, self.turn)? {
            MatchState::Nothing => Ok(false),
            MatchState::TurnOver => {
                self.engine.swap_players();
                self.engine.roll();
                self.engine.generate_plays();
                self.turn = self.turn.other();
                Ok(false)
            }
            MatchState::GameOver => Ok(true),
        }
    }

    /// Side to move.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Board as player zero sees it, whoever is to move.
    #[must_use]
    pub fn position(&self) -> Position {
        match self.turn {
            Player::Zero => *self.engine.position(),
            Player::One => self.engine.position().swap_players(),
        }
    }

    #[must_use]
    pub fn dice(&self) -> Dice {
        self.engine.dice()
    }

    #[must_use]
    pub fn used_dice(&self) -> &UsedDice {
        self.engine.used_dice()
    }

    /// Legal source/destination grid in the mover's frame.
    #[must_use]
    pub fn legal_points(&self) -> LegalPoints {
        self.engine.legal_points().for_player(self.turn)
    }

    #[must_use]
    pub fn legal_plays_depth(&self) -> usize {
        self.engine.legal_plays_depth()
    }

    #[must_use]
    pub fn move_number(&self) -> usize {
        self.engine.move_number()
    }

    /// Underlying engine, canonical frame.
    #[must_use]
    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }
}
