//! Error types

use thiserror::Error;

/// Contract violations reported by [`EditDistanceState`](crate::state::EditDistanceState).
///
/// Both kinds are programming errors on the caller's side, not transient faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    /// Asked to roll back more characters than the source holds
    #[error("unexpected rollback: out of range (requested {requested}, available {available})")]
    OutOfRangeRollback { requested: usize, available: usize },

    /// Rollback or distance query before any extension
    #[error("unexpected: current state is empty")]
    EmptyState,
}

/// Common error type for typeflow operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Incremental distance state misuse
    #[error("distance state error: {0}")]
    State(#[from] StateError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using the typeflow [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
