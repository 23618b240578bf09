//! Errors raised at the fetch boundary.
//!
//! A load can fail in exactly two ways as far as the catalog is concerned:
//! the rows could not be fetched, or they could not be decoded. The variants
//! below keep enough detail for the debug log; [`SourceError::kind`] is the
//! coarse classification.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    /// The sheet API answered with a non-success status.
    #[error("sheet API returned HTTP {status}")]
    Status { status: u16, body: String },

    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("request to sheet API failed: {0}")]
    Transport(String),

    /// A local export could not be read.
    #[error("could not read {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    /// The body was not a JSON array of row objects.
    #[error("response is not a recipe row list: {0}")]
    Parse(String),
}

/// Coarse failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Fetch,
    Parse,
}

impl SourceError {
    pub fn kind(&self) -> FailureKind {
        match self {
            SourceError::Status { .. } | SourceError::Transport(_) | SourceError::Io { .. } => {
                FailureKind::Fetch
            }
            SourceError::Parse(_) => FailureKind::Parse,
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Parse(err.to_string())
    }
}
