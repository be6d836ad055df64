//! Error types for the crate.
//!
//! The search engine itself is total over well-formed input and never
//! returns these. They cover parsing of names and moves at the driver
//! boundary and I/O while prompting.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("unknown pile '{0}' (expected 'red' or 'blue')")]
    UnknownPile(String),

    #[error("unknown variant '{0}' (expected 'standard' or 'misere')")]
    UnknownVariant(String),

    #[error("unknown player '{0}' (expected 'first' or 'second')")]
    UnknownPlayer(String),

    #[error("invalid marble count '{0}' (expected 1 or 2)")]
    InvalidCount(String),

    #[error("illegal move {action} in state {state}")]
    IllegalMove { action: String, state: String },

    #[error("input closed before a move was entered")]
    InputClosed,

    #[error("no legal action available in state {0}")]
    NoAction(String),

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Wrap an I/O error with the operation that caused it.
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }
}

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, Error>;
