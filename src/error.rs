//! Crate error type.
//!
//! Parsing itself is total and never fails. Errors only come from the edges:
//! reading configuration values from text, and the I/O done by the CLI.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown entity type '{0}'")]
    UnknownEntityType(String),

    #[error("invalid value '{value}' for {option} (expected one of: {expected})")]
    InvalidOption { option: &'static str, value: String, expected: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize result: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
