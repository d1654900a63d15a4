//! # cldr-units-gen
//!
//! Offline generator that compiles the CLDR unit dataset into the compact
//! per-unit binary blobs consumed by the `cldr-units` runtime crate.
//!
//! The pipeline is a single-threaded batch run:
//!
//! 1. [`dataset`] deserializes `units.json` documents.
//! 2. [`parser`] classifies every pattern name and fills the write-once
//!    pattern tables; anything unclassifiable aborts the run.
//! 3. [`index`] assigns each unit its stable index and generated
//!    identifier.
//! 4. [`fallback`] synthesizes the per-unit ultimate-fallback patterns.
//! 5. [`generator`] encodes one blob per unit through the shared codec and
//!    writes the manifest plus the generated `Unit` enum source.

pub mod codegen;
pub mod dataset;
pub mod error;
pub mod fallback;
pub mod generator;
pub mod index;
pub mod parser;

pub use dataset::CldrDoc;
pub use error::{GeneratorError, GeneratorResult};
pub use fallback::FallbackTriple;
pub use generator::{GenerationSummary, Generator, UNIT_ENUM_FILE_NAME};
pub use index::UnitIndexTable;
pub use parser::PatternTable;
