//! Action codec: flat integer ids ⇄ engine selections.
//!
//! Both players share one action space. The engine always works on the
//! canonical (mover's) board, so ids coming from player one are mirrored on
//! the way in, and legal ids and grids are mirrored on the way out.

pub mod action;
pub mod points;

pub use action::{ActionCodec, Selection};
pub use points::LegalPoints;
