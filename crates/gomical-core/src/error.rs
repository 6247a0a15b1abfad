//! Error types for gomical-core.
//!
//! Errors only arise at the data-loading boundary: registry lookups, JSON
//! parsing, and date-string parsing. The resolution paths themselves never
//! fail — malformed reference data degrades to "not collected".

use thiserror::Error;

/// The main error type for gomical operations.
#[derive(Debug, Error)]
pub enum GomicalError {
    /// No municipality with this identifier is registered.
    #[error("Unknown municipality: {0}")]
    UnknownMunicipality(String),

    /// A date string was not a valid `YYYY-MM-DD` calendar date.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Reference data did not match the expected JSON shape.
    #[error("Data error: {0}")]
    Data(#[from] serde_json::Error),
}

/// Result type alias for gomical operations.
pub type Result<T> = std::result::Result<T, GomicalError>;
