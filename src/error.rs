//! Errors

use thiserror::Error;

/// Crate result type
pub type Result<T> = std::result::Result<T, Error>;

/// Parser errors. None of these are transient: a transition either fits the
/// state or the caller broke the legality contract.
#[derive(Debug, Error)]
pub enum Error {
    #[error("illegal transition {transition}: {reason}")]
    IllegalTransition { transition: String, reason: String },

    #[error("malformed sentence: {0}")]
    MalformedSentence(String),

    #[error("invalid transition: {0}")]
    InvalidTransition(String),

    #[error("cannot parse notation: {0}")]
    Notation(String),

    #[error("no transition chosen at position {position} with {stack_size} trees on the stack")]
    Stalled { position: usize, stack_size: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
