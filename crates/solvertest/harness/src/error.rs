//! Harness error types

use thiserror::Error;

/// Errors surfaced at the orchestrator boundary.
///
/// Missing capabilities and unavailable solvers are not errors: they are
/// normal synthesis outcomes (skip or omit) carrying a reason string.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Invalid filter pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Duplicate generated test name: {0}")]
    DuplicateTest(String),
}

/// Result type for harness operations
pub type Result<T> = std::result::Result<T, HarnessError>;
