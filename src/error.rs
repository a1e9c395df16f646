//! Custom error types for PennyWise
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for PennyWise operations
#[derive(Error, Debug)]
pub enum PennyError {
    /// A payer or lookup name that matches neither party of a ledger
    #[error("Unknown person: {0}")]
    UnknownPerson(String),

    /// Category mapping source exists but has the wrong shape
    #[error("Failed to load category mapping: {0}")]
    ConfigLoad(String),

    /// File format outside the recognized set
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Statement import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl PennyError {
    /// Create a "not found" error for transactions addressed by position
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an unknown-person error
    pub fn is_unknown_person(&self) -> bool {
        matches!(self, Self::UnknownPerson(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for PennyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PennyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for PennyError {
    fn from(err: csv::Error) -> Self {
        Self::Import(err.to_string())
    }
}

/// Result type alias for PennyWise operations
pub type PennyResult<T> = Result<T, PennyError>;
