//! Board model and legal play generation.
//!
//! - `Position`: immutable mover's-eye view of the board
//! - `movegen`: the roll → move-tree generator
//! - `board_gen`: random positions for tests and benches

pub mod board_gen;
pub mod movegen;
pub mod position;

pub use board_gen::random_position;
pub use movegen::{generate_plays, LegalPlays, Move};
pub use position::{Destination, Position, Source};
