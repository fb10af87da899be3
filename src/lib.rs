//! # rust-gammon
//!
//! A reduced-board backgammon rules engine built for RL self-play.
//!
//! ## Design Principles
//!
//! 1. **One-way board**: The engine only ever sees the board from the side
//!    to move, who always travels toward index 0. Handing the turn over
//!    reverses and negates the board.
//!
//! 2. **Move trees**: A roll is expanded once into a tree of submoves that
//!    already obeys the "use as many pips as possible" and "play the higher
//!    die" rules. Playing a submove just descends the tree.
//!
//! 3. **Flat actions**: Submoves are addressed by integer ids in a fixed
//!    action space shared by both players, ready for a policy head.
//!
//! ## Modules
//!
//! - `core`: Constants, configuration, players, dice, RNG and errors
//! - `board`: Position model, legal play generator, random positions
//! - `codec`: Action id codec and the legal-points grid
//! - `engine`: Per-turn state machine and snapshots
//! - `game`: Two-player driver that runs turn hand-over itself

pub mod core;
pub mod board;
pub mod codec;
pub mod engine;
pub mod game;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    MatchConfig, Player,
    Dice, Die, UsedDice,
    DiceRng, DiceRngState,
    GammonError, Result,
    ACTION_SPACE, CHECKERS, HOME_POINTS, INITIAL_POSITION, PIPS_COUNT, POINTS,
};

pub use crate::board::{generate_plays, random_position, Destination, LegalPlays, Move, Position, Source};

pub use crate::codec::{ActionCodec, LegalPoints, Selection};

pub use crate::engine::{EngineSnapshot, MatchState, TurnEngine};

pub use crate::game::Backgammon;
