//! Shared error types for the engine

use crate::core::types::BatchStatus;
use thiserror::Error;

/// Main error type for spoilmap operations
///
/// Only two conditions are genuine engine errors: a violated scoring
/// contract (`InvalidConfiguration`) and a lifecycle transition attempted
/// from a state that forbids it (`InvalidTransition`). Missing or malformed
/// sensor telemetry is never an error; it degrades to documented defaults.
#[derive(Debug, Error)]
pub enum Error {
    /// Scoring policy or snapshot contract violations
    #[error("Configuration error: {0}")]
    InvalidConfiguration(String),

    /// Lifecycle transition attempted from a state that does not allow it
    #[error("Invalid transition for batch {batch_id}: {from} -> {attempted}")]
    InvalidTransition {
        batch_id: String,
        from: BatchStatus,
        attempted: BatchStatus,
    },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Config file parse errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// Wrapped external errors
    #[error(transparent)]
    External(#[from] anyhow::Error),
}

impl Error {
    /// Create a configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }

    /// Create a lifecycle transition error
    pub fn invalid_transition(
        batch_id: impl Into<String>,
        from: BatchStatus,
        attempted: BatchStatus,
    ) -> Self {
        Self::InvalidTransition {
            batch_id: batch_id.into(),
            from,
            attempted,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
