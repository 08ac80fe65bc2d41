//! Error types for vitrine

use thiserror::Error;

/// Result type alias using VitrineError
pub type Result<T> = std::result::Result<T, VitrineError>;

/// Error type alias for convenience
pub type Error = VitrineError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const OFF_TOPIC: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
}

/// Main error type for vitrine
///
/// Query parsing itself never fails; see [`crate::ParseOutcome`] for the
/// off-topic and ambiguity branches. These errors cover catalog loading
/// and other boundary concerns.
#[derive(Debug, Error)]
pub enum VitrineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl VitrineError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Catalog(_) | Self::InvalidInput(_) => exit_codes::INVALID_INPUT,
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}
