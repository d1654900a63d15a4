//! Unit manifest: the load-time table describing every generated unit
//!
//! The manifest is written by the generator next to the blobs. It maps each
//! unit index to the unit's canonical CLDR name, its generated identifier
//! and the three synthesized ultimate-fallback patterns. Entries are stored
//! in index order, which by construction is also alphabetical order of the
//! canonical names.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::enums::PluralFormLength;
use crate::error::CldrUnitsResult;

/// File name of the manifest inside a generated data directory.
pub const MANIFEST_FILE_NAME: &str = "units-manifest.json";

/// Manifest entry for one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitEntry {
    /// Canonical CLDR unit name, e.g. `duration-week`.
    pub name: String,
    /// Generated human identifier, e.g. `DurationWeek`.
    pub identifier: String,
    /// Ultimate-fallback pattern for the Long length.
    pub long_fallback: String,
    /// Ultimate-fallback pattern for the Short length.
    pub short_fallback: String,
    /// Ultimate-fallback pattern for the Narrow length.
    pub narrow_fallback: String,
}

impl UnitEntry {
    /// Fallback pattern for a presentation length.
    pub fn fallback(&self, length: PluralFormLength) -> &str {
        match length {
            PluralFormLength::Long => &self.long_fallback,
            PluralFormLength::Short => &self.short_fallback,
            PluralFormLength::Narrow => &self.narrow_fallback,
        }
    }
}

/// Ordered table of all generated units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitManifest {
    units: Vec<UnitEntry>,
}

impl UnitManifest {
    /// Create a manifest from entries already ordered by unit index.
    pub fn new(units: Vec<UnitEntry>) -> Self {
        Self { units }
    }

    /// Read a manifest from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> CldrUnitsResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse a manifest from its JSON representation.
    pub fn from_json(json: &str) -> CldrUnitsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the manifest to pretty-printed JSON.
    pub fn to_json(&self) -> CldrUnitsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of units in the manifest.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the manifest contains no units.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Entry for a unit index.
    pub fn entry(&self, unit: u32) -> Option<&UnitEntry> {
        self.units.get(unit as usize)
    }

    /// Index of a unit by canonical name.
    ///
    /// Entries are sorted by name, so this is a binary search.
    pub fn index_of(&self, name: &str) -> Option<u32> {
        self.units
            .binary_search_by(|entry| entry.name.as_str().cmp(name))
            .ok()
            .map(|index| index as u32)
    }

    /// Ultimate-fallback pattern for a unit and length.
    pub fn fallback(&self, unit: u32, length: PluralFormLength) -> Option<&str> {
        self.entry(unit).map(|entry| entry.fallback(length))
    }

    /// Iterate over entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = &UnitEntry> {
        self.units.iter()
    }
}
