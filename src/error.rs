//! Error types for the match oracle
//!
//! Typed domain errors are defined with thiserror and carried through the
//! crate inside anyhow results, so callers can recover them with
//! `downcast_ref::<OracleError>()`.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific prediction scenarios
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OracleError {
    #[error("team not found: {name}")]
    TeamNotFound { name: String },

    #[error("Invalid team data: {reason}")]
    InvalidTeamData { reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
