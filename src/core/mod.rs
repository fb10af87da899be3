//! Core types: constants, configuration, players, dice, RNG and errors.
//!
//! Everything here is a leaf: no module in `core` depends on the board,
//! the generator or the engine.

pub mod config;
pub mod dice;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{
    MatchConfig, ACTION_SPACE, CHECKERS, HOME_POINTS, INITIAL_POSITION, LEGAL_POINTS_WIDTH, PIPS_COUNT,
    POINTS,
};
pub use dice::{Dice, Die, PipSequence, UsedDice};
pub use error::{GammonError, Result};
pub use player::Player;
pub use rng::{DiceRng, DiceRngState};
