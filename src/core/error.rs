//! Crate error type.
//!
//! Illegal single-checker transitions are not errors: `Position::enter`,
//! `move_checker` and `off` return `None` and the generator moves on to the
//! next candidate. Errors are reserved for protocol violations by the caller.

use thiserror::Error;

/// Errors surfaced to callers of the engine.
#[derive(Debug, Error)]
pub enum GammonError {
    /// The action id does not name a currently legal play.
    #[error("action {action} is not legal here (legal actions: {legal:?})")]
    InvalidAction { action: usize, legal: Vec<usize> },

    /// A hand-built position breaks checker conservation.
    #[error("invalid position: {reason}")]
    InvalidPosition { reason: String },

    /// An engine snapshot could not be encoded or decoded.
    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[from] bincode::Error),

    /// A decoded snapshot holds state no engine could have reached.
    #[error("invalid snapshot: {reason}")]
    InvalidSnapshot { reason: String },
}

pub type Result<T> = std::result::Result<T, GammonError>;
