//! Turn engine and match state.
//!
//! `TurnEngine` owns the live position, the dice, the legal-move frontier
//! and the RNG. It never switches sides by itself; see `game::Backgammon`
//! for a driver that does.

pub mod snapshot;
pub mod state;
pub mod turn;

pub use snapshot::EngineSnapshot;
pub use state::MatchState;
pub use turn::TurnEngine;
