//! # Error Types
//!
//! Domain-specific error types for retort-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  retort-core errors (this file)                                        │
//! │  └── CoreError        - Structural domain errors                       │
//! │                                                                         │
//! │  retort-cli errors (in app)                                            │
//! │  └── CliError         - What the terminal sees (code + message)        │
//! │                                                                         │
//! │  Flow: CoreError → CliError → stderr / exit code                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! A blank or non-numeric price, labor, or shipping field is recovered by
//! substituting zero (see [`crate::parse`]). Only a broken contract between the
//! tier selector and the tier table is surfaced.

use thiserror::Error;

use crate::types::TierId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The packaging tier key does not match any entry of the tier table.
    ///
    /// ## When This Occurs
    /// - The form's tier selector sends a key the engine does not know
    ///   (e.g. `"300g"`, or an empty selection)
    ///
    /// ## User Workflow
    /// ```text
    /// Tier selector: "300g"
    ///      │
    ///      ▼
    /// PackagingTier::lookup("300g")
    ///      │
    ///      ▼
    /// UnknownPackagingTier { key: "300g" }
    ///      │
    ///      ▼
    /// No result is rendered; the caller reports the broken selector
    /// ```
    #[error("Unknown packaging tier: {key} (expected one of {})", TierId::KEYS.join(", "))]
    UnknownPackagingTier { key: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
