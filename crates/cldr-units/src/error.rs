//! Error types for unit pattern resolution and blob decoding

use thiserror::Error;

/// Errors that can occur while loading or resolving unit patterns
#[derive(Error, Debug)]
pub enum CldrUnitsError {
    /// No persisted blob exists for the requested unit index
    #[error("No pattern data found for unit index {unit}")]
    DataNotFound {
        /// Index of the unit whose blob is missing
        unit: u32,
    },

    /// The language cannot be resolved through any fallback step
    #[error("Language '{language}' is not supported")]
    UnsupportedLanguage {
        /// The language tag as requested by the caller
        language: String,
    },

    /// The language resolved to a node that carries no pattern data at all
    #[error("No pattern available for unit index {unit} in language '{language}'")]
    MissingPattern {
        /// Index of the queried unit
        unit: u32,
        /// The language tag as requested by the caller
        language: String,
    },

    /// A blob could not be decoded back into a pattern structure
    #[error("Corrupt unit blob: {0}")]
    CorruptBlob(String),

    /// The unit manifest could not be parsed
    #[error("Failed to parse unit manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for unit pattern operations
pub type CldrUnitsResult<T> = Result<T, CldrUnitsError>;
