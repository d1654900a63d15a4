//! # cldr-units
//!
//! Runtime resolver for compiled CLDR unit formatting patterns.
//!
//! The companion generator crate (`cldr-units-gen`) compiles the CLDR unit
//! dataset into one compressed blob per unit plus a manifest. This crate
//! loads those blobs lazily, caches the decoded structures for the process
//! lifetime and resolves `(language, count, length, grammatical case)`
//! queries to a single format string through multi-level fallback:
//!
//! - Language: exact tag, then primary subtag, then `"en"`.
//! - Length: Long → Short → Narrow (and the analogous chains for Short and
//!   Narrow).
//! - Case: requested case, then the unmarked case, then `Oblique`.
//! - Count: 0/1/2 select Zero/One/Two when present, everything else
//!   resolves to Other.
//!
//! The returned pattern contains a `{0}` placeholder; substituting the
//! formatted number is the caller's job (see [`substitute`]).
//!
//! # Example
//!
//! ```no_run
//! use cldr_units::{CldrUnits, GrammaticalCase, PluralFormLength};
//!
//! # fn example() -> cldr_units::CldrUnitsResult<()> {
//! let units = CldrUnits::open("data")?;
//! let week = units.unit_index("duration-week").expect("unit exists");
//!
//! let pattern = units.format_pattern(
//!     week,
//!     "de",
//!     3,
//!     PluralFormLength::Long,
//!     GrammaticalCase::Accusative,
//! )?;
//! assert_eq!(pattern, "{0} Wochen");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod codec;
pub mod enums;
pub mod error;
pub mod manifest;
pub mod patterns;
pub mod store;
pub mod units;

pub use cache::UnitPatternCache;
pub use codec::{decode_unit, encode_unit, ExtraInfoRecord, GenderRecord, PatternRecord, UnitRecordSet};
pub use enums::{GrammaticalCase, PluralCategory, PluralFormLength, UnitGender};
pub use error::{CldrUnitsError, CldrUnitsResult};
pub use manifest::{UnitEntry, UnitManifest, MANIFEST_FILE_NAME};
pub use patterns::{
    substitute, CasePatterns, LanguagePatterns, LengthPatterns, UnitPatterns, FALLBACK_LANGUAGE,
};
pub use store::{DirPatternStore, MemoryPatternStore, PatternStore};
pub use units::CldrUnits;
