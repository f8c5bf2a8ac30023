//! Error types for detector element identifiers

use thiserror::Error;

/// Errors raised while building identifiers or their attributes from raw data.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdError {
    /// Raw value does not name one of the known signal types.
    #[error("unexpected signal type #{0}")]
    UnknownSignalType(i32),

    /// Text is not a rendered identifier (`C:1 T:5 P:2 ...`).
    #[error("cannot parse identifier from '{input}': {reason}")]
    Parse { input: String, reason: String },
}
