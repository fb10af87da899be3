//! Two-player game built on the turn engine.

mod backgammon;

pub use backgammon::Backgammon;
