//! Error types for summary records

use thiserror::Error;

/// Errors raised while merging summary records.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SummaryError {
    /// Two records of the same run describe different detectors.
    #[error("inconsistent run data: detector '{ours}' cannot be merged with detector '{theirs}'")]
    InconsistentRunData { ours: String, theirs: String },
}
