//! Turn engine: dice, legal plays and submove bookkeeping for the side to move.
//!
//! The engine only ever sees the canonical board, where the mover travels
//! toward index 0. A turn runs as:
//!
//! 1. `roll()` (or `first_roll()` at the start of a game)
//! 2. `generate_plays()`
//! 3. one `action()` per submove until it reports `TurnOver` or `GameOver`;
//!    an empty frontier means the next submove must be a skip
//! 4. on `TurnOver`: `swap_players()`, then back to 1
//!
//! Step 4 is the caller's job. The engine does not switch sides on its own.

use rustc_hash::FxHashSet;

use crate::board::{generate_plays, Move, Position};
use crate::codec::{ActionCodec, LegalPoints, Selection};
use crate::core::{Dice, DiceRng, GammonError, MatchConfig, Player, Result, UsedDice, CHECKERS};

use super::snapshot::EngineSnapshot;
use super::state::MatchState;

/// Single-owner state machine for one game.
#[derive(Clone, Debug)]
pub struct TurnEngine {
    position: Position,
    dice: Dice,
    used_dice: UsedDice,
    /// Moves playable right now; each carries its own continuations.
    legal_plays: Vec<Move>,
    legal_plays_depth: usize,
    /// Submoves taken this turn, skips included.
    move_number: usize,
    rng: DiceRng,
}

impl TurnEngine {
    /// Create an engine at the opening position with no dice rolled.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            position: Position::default(),
            dice: Dice::default(),
            used_dice: UsedDice::new(),
            legal_plays: Vec::new(),
            legal_plays_depth: 0,
            move_number: 0,
            rng: DiceRng::new(seed),
        }
    }

    #[must_use]
    pub fn from_config(config: &MatchConfig) -> Self {
        Self::new(config.seed)
    }

    /// Back to the opening position. The RNG keeps its stream.
    pub fn reset(&mut self) {
        self.position = Position::default();
        self.dice = Dice::default();
        self.used_dice = UsedDice::new();
        self.legal_plays.clear();
        self.legal_plays_depth = 0;
        self.move_number = 0;
    }

    /// Roll both dice.
    pub fn roll(&mut self) {
        let left = self.rng.roll_die();
        let right = self.rng.roll_die();
        self.dice = Dice::new(left, right);
    }

    /// Roll until the dice differ. The opening roll is never a double.
    pub fn first_roll(&mut self) {
        loop {
            self.roll();
            if !self.dice.is_double() {
                return;
            }
        }
    }

    /// Build the legal play tree for the current position and dice.
    pub fn generate_plays(&mut self) {
        let plays = generate_plays(&self.position, self.dice);
        self.legal_plays = plays.plays;
        self.legal_plays_depth = plays.depth;
    }

    /// Hand the board to the other side and clear the used-dice ledger.
    pub fn swap_players(&mut self) {
        self.position = self.position.swap_players();
        self.used_dice = UsedDice::new();
    }

    /// Apply an action id in the canonical (player zero) frame.
    pub fn action(&mut self, action: usize) -> Result<MatchState> {
        self.action_as(action, Player::Zero)
    }

    /// Apply an action id as submitted by `perspective`.
    ///
    /// Fails with `GammonError::InvalidAction` if the id does not name a move
    /// in the current frontier, or is a skip while moves remain. A failed
    /// action leaves the engine untouched.
    ///
    /// Precondition: after a `TurnOver`, `swap_players`, `roll` and
    /// `generate_plays` have been called.
    pub fn action_as(&mut self, action: usize, perspective: Player) -> Result<MatchState> {
        ActionCodec::decode(action, perspective)
            .and_then(|selection| self.try_apply(selection))
            .ok_or_else(|| GammonError::InvalidAction {
                action,
                legal: self.legal_actions(perspective),
            })
    }

    /// Apply an already decoded selection.
    pub fn apply(&mut self, selection: Selection) -> Result<MatchState> {
        self.try_apply(selection).ok_or_else(|| GammonError::InvalidAction {
            action: ActionCodec::encode(selection, Player::Zero),
            legal: self.legal_actions(Player::Zero),
        })
    }

    fn try_apply(&mut self, selection: Selection) -> Option<MatchState> {
        match selection {
            Selection::Skip => {
                if !self.legal_plays.is_empty() {
                    return None;
                }
                self.used_dice.count(0);
            }
            Selection::Play { die, source } => {
                let pips = self.dice.get(die);
                // On a double only the left die is listed, so only it is accepted.
                if self.dice.die_for(pips) != Some(die) {
                    return None;
                }
                let index = self
                    .legal_plays
                    .iter()
                    .position(|m| m.pips == pips && m.source == source)?;

                let chosen = self.legal_plays.swap_remove(index);
                self.position = self.position.apply_move(chosen.source, chosen.destination);
                self.legal_plays = chosen.next_moves;
                self.used_dice.count(pips);
            }
        }

        Some(self.advance())
    }

    // Submove bookkeeping once the frontier has moved on.
    fn advance(&mut self) -> MatchState {
        if !self.legal_plays.is_empty() {
            self.move_number += 1;
            return MatchState::Nothing;
        }

        if self.position.is_won() {
            MatchState::GameOver
        } else if self.move_number + 1 >= self.submove_cap() {
            self.move_number = 0;
            MatchState::TurnOver
        } else {
            self.move_number += 1;
            MatchState::Nothing
        }
    }

    /// Distinct selections playable right now, in frontier order.
    /// Empty means the only legal submove is a skip.
    #[must_use]
    pub fn legal_selections(&self) -> Vec<Selection> {
        let mut seen = FxHashSet::default();
        self.legal_plays
            .iter()
            .filter_map(|m| {
                let die = self.dice.die_for(m.pips)?;
                let selection = Selection::Play { die, source: m.source };
                seen.insert(selection).then_some(selection)
            })
            .collect()
    }

    /// Legal action ids as `perspective` numbers them, ascending.
    /// `[0]` (skip) when the frontier is empty.
    #[must_use]
    pub fn legal_actions(&self, perspective: Player) -> Vec<usize> {
        self.legal_points().for_player(perspective).action_ids()
    }

    /// Legal source/destination grid in the canonical frame.
    #[must_use]
    pub fn legal_points(&self) -> LegalPoints {
        LegalPoints::from_plays(&self.legal_plays, self.dice)
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn dice(&self) -> Dice {
        self.dice
    }

    #[must_use]
    pub fn used_dice(&self) -> &UsedDice {
        &self.used_dice
    }

    #[must_use]
    pub fn legal_plays(&self) -> &[Move] {
        &self.legal_plays
    }

    #[must_use]
    pub fn legal_plays_depth(&self) -> usize {
        self.legal_plays_depth
    }

    #[must_use]
    pub fn move_number(&self) -> usize {
        self.move_number
    }

    /// Submoves in the current turn: 4 on a double, 2 otherwise.
    #[must_use]
    pub fn submove_cap(&self) -> usize {
        self.dice.submove_cap()
    }

    /// Replace the position, e.g. to set up a scenario. Clears the frontier;
    /// call `generate_plays` afterwards.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
        self.legal_plays.clear();
        self.legal_plays_depth = 0;
        self.move_number = 0;
    }

    /// Replace the dice. Clears the frontier; call `generate_plays` afterwards.
    pub fn set_dice(&mut self, dice: Dice) {
        self.dice = dice;
        self.legal_plays.clear();
        self.legal_plays_depth = 0;
        self.move_number = 0;
    }

    /// Capture the full engine state.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            position: self.position,
            dice: self.dice,
            used_dice: self.used_dice.clone(),
            legal_plays: self.legal_plays.clone(),
            legal_plays_depth: self.legal_plays_depth,
            move_number: self.move_number,
            rng: self.rng.state(),
        }
    }

    /// Rebuild an engine from a snapshot.
    ///
    /// Fails with `GammonError::InvalidSnapshot` if the position breaks
    /// checker conservation or the submove counter has run past the turn.
    pub fn restore(snapshot: &EngineSnapshot) -> Result<Self> {
        let position = snapshot.position;
        if position.player_checkers() != CHECKERS as u32 || position.opponent_checkers() != CHECKERS as u32 {
            return Err(GammonError::InvalidSnapshot {
                reason: format!("position {position} does not hold {CHECKERS} checkers per side"),
            });
        }
        if snapshot.move_number >= snapshot.dice.submove_cap() {
            return Err(GammonError::InvalidSnapshot {
                reason: format!(
                    "move number {} exceeds the {} submoves of roll {}",
                    snapshot.move_number,
                    snapshot.dice.submove_cap(),
                    snapshot.dice
                ),
            });
        }

        Ok(Self {
            position,
            dice: snapshot.dice,
            used_dice: snapshot.used_dice.clone(),
            legal_plays: snapshot.legal_plays.clone(),
            legal_plays_depth: snapshot.legal_plays_depth,
            move_number: snapshot.move_number,
            rng: DiceRng::from_state(&snapshot.rng),
        })
    }
}
