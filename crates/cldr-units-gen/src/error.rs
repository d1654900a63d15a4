//! Error types for dataset parsing and blob generation

use thiserror::Error;

/// Errors that abort a generation run.
///
/// Every parsing variant is fatal: an unrecognized shape in the dataset
/// means corrupt or unexpectedly structured input, which must surface
/// loudly instead of producing silently incomplete blobs.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// A pattern name matched neither an extra-info token nor the
    /// `<case>-count-<category>` shape.
    #[error("Cannot parse unit pattern name '{name}' (unit '{unit}', language '{language}')")]
    UnrecognizedPatternName {
        /// The offending pattern name.
        name: String,
        /// Unit the pattern belongs to.
        unit: String,
        /// Language the pattern belongs to.
        language: String,
    },

    /// A gender value outside the five known gender tokens.
    #[error("Cannot parse unit gender '{value}' (unit '{unit}', language '{language}')")]
    UnknownGender {
        /// The offending gender token.
        value: String,
        /// Unit the gender belongs to.
        unit: String,
        /// Language the gender belongs to.
        language: String,
    },

    /// The same key was inserted twice into one of the pattern tables.
    #[error("Duplicate entry '{name}' for unit '{unit}' in language '{language}'")]
    DuplicateEntry {
        /// Pattern name of the duplicate.
        name: String,
        /// Unit of the duplicate.
        unit: String,
        /// Language of the duplicate.
        language: String,
    },

    /// Two distinct unit names collapse to the same generated identifier.
    #[error("Units '{first}' and '{second}' both map to identifier '{identifier}'")]
    IdentifierCollision {
        /// First unit name.
        first: String,
        /// Second unit name.
        second: String,
        /// The shared identifier.
        identifier: String,
    },

    /// Encoding a unit blob failed.
    #[error("Failed to encode unit blob: {0}")]
    Codec(#[from] cldr_units::CldrUnitsError),

    /// A dataset document could not be deserialized.
    #[error("Failed to parse dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for generator operations.
pub type GeneratorResult<T> = Result<T, GeneratorError>;
