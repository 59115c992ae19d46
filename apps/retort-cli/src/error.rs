//! # CLI Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in retort-cli                             │
//! │                                                                         │
//! │  Command Function                                                       │
//! │  Result<(), CliError>                                                   │
//! │         │                                                               │
//! │         ├── Bad arguments? ──────── CliError::Usage ─────────┐          │
//! │         ├── Bad env config? ─────── CliError::Config ────────┤          │
//! │         ├── Cannot read form? ───── CliError::Io ────────────┤          │
//! │         ├── Form is not JSON? ───── CliError::InvalidForm ───┤          │
//! │         ├── Unknown tier? ───────── CliError::Core ──────────┤          │
//! │         │                                                    ▼          │
//! │         │                                      ErrorReport { code, msg }│
//! │         │                                      → stderr, exit code 1    │
//! │         ▼                                                               │
//! │  Success → stdout, exit code 0                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use retort_core::CoreError;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Command line could not be understood.
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Reading the form or writing the result failed.
    #[error("I/O error on {target}: {source}")]
    Io {
        target: String,
        #[source]
        source: std::io::Error,
    },

    /// The form could not be deserialized.
    #[error("Invalid calculation form: {0}")]
    InvalidForm(#[source] serde_json::Error),

    /// Serializing the result failed.
    #[error("Could not encode result: {0}")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CliError {
    pub fn io(target: impl Into<String>, source: std::io::Error) -> Self {
        CliError::Io {
            target: target.into(),
            source,
        }
    }

    /// Machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CliError::Usage(_) => ErrorCode::Usage,
            CliError::Config(_) => ErrorCode::ConfigError,
            CliError::Io { .. } => ErrorCode::IoError,
            CliError::InvalidForm(_) => ErrorCode::InvalidInput,
            CliError::Encode(_) => ErrorCode::Internal,
            CliError::Core(CoreError::UnknownPackagingTier { .. }) => ErrorCode::UnknownTier,
        }
    }
}

/// Error codes printed with every failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Bad command-line arguments
    Usage,

    /// Invalid environment configuration
    ConfigError,

    /// Form could not be read or result could not be written
    IoError,

    /// Form is not valid JSON for a calculation form
    InvalidInput,

    /// Packaging tier key is not one of the known tiers
    UnknownTier,

    /// Unexpected failure
    Internal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Usage => "USAGE",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::IoError => "IO_ERROR",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::UnknownTier => "UNKNOWN_TIER",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// What gets printed to stderr when a command fails.
///
/// ## Serialization
/// ```json
/// {
///   "code": "UNKNOWN_TIER",
///   "message": "Unknown packaging tier: 300g (expected one of 100g, 250g, 500g)"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
}

impl From<&CliError> for ErrorReport {
    fn from(err: &CliError) -> Self {
        ErrorReport {
            code: err.code(),
            message: err.to_string(),
        }
    }
}
