//! Top-level query surface over cached unit pattern data

use std::path::Path;

use tracing::{debug, warn};

use crate::cache::UnitPatternCache;
use crate::enums::{GrammaticalCase, PluralFormLength, UnitGender};
use crate::error::{CldrUnitsError, CldrUnitsResult};
use crate::manifest::{UnitManifest, MANIFEST_FILE_NAME};
use crate::store::{DirPatternStore, PatternStore};

/// Pattern used when a unit has no data anywhere and no synthesized
/// fallback is available.
const UNIVERSAL_FALLBACK: &str = "{0}";

/// Query interface for CLDR unit patterns.
///
/// Owns the unit pattern cache and the unit manifest; units are addressed
/// by their generated integer index (see [`CldrUnits::unit_index`] for
/// lookup by canonical name). All queries are safe for unlimited concurrent
/// callers.
pub struct CldrUnits {
    cache: UnitPatternCache,
    manifest: UnitManifest,
}

impl CldrUnits {
    /// Create a query interface over an arbitrary blob store and manifest.
    pub fn new(store: impl PatternStore + 'static, manifest: UnitManifest) -> Self {
        Self {
            cache: UnitPatternCache::new(store),
            manifest,
        }
    }

    /// Open a generated data directory: `<index>.bin` blobs plus the unit
    /// manifest.
    pub fn open(data_dir: impl AsRef<Path>) -> CldrUnitsResult<Self> {
        let data_dir = data_dir.as_ref();
        let manifest = UnitManifest::load(data_dir.join(MANIFEST_FILE_NAME))?;
        Ok(Self::new(DirPatternStore::new(data_dir), manifest))
    }

    /// The unit manifest this instance was opened with.
    pub fn manifest(&self) -> &UnitManifest {
        &self.manifest
    }

    /// Index of a unit by canonical CLDR name.
    pub fn unit_index(&self, name: &str) -> Option<u32> {
        self.manifest.index_of(name)
    }

    /// Number of units known to the manifest.
    pub fn unit_count(&self) -> usize {
        self.manifest.len()
    }

    /// Format pattern for the given settings, e.g. `"{0} Wochen"`.
    ///
    /// Fails with [`CldrUnitsError::UnsupportedLanguage`] when the language
    /// resolves through no fallback step, and with
    /// [`CldrUnitsError::MissingPattern`] when the language resolves but
    /// carries no pattern data at all. Some units exist only in a single
    /// language (several Japanese measures, for example), so the strict
    /// path is the right tool for detecting genuinely missing coverage.
    pub fn format_pattern(
        &self,
        unit: u32,
        language: &str,
        count: i64,
        length: PluralFormLength,
        case: GrammaticalCase,
    ) -> CldrUnitsResult<String> {
        let patterns = self.cache.patterns(unit)?;

        if let Some(pattern) = patterns.resolve(language, count, length, case) {
            return Ok(pattern.to_owned());
        }

        if patterns.language(language).is_none() {
            return Err(CldrUnitsError::UnsupportedLanguage {
                language: language.to_owned(),
            });
        }
        Err(CldrUnitsError::MissingPattern {
            unit,
            language: language.to_owned(),
        })
    }

    /// Format pattern that never fails.
    ///
    /// Falls back to the unit's synthesized pattern for the requested
    /// length, and to the literal `"{0}"` when the unit has no data
    /// anywhere.
    pub fn format_pattern_safe(
        &self,
        unit: u32,
        language: &str,
        count: i64,
        length: PluralFormLength,
        case: GrammaticalCase,
    ) -> String {
        match self.format_pattern(unit, language, count, length, case) {
            Ok(pattern) => pattern,
            Err(err) => {
                debug!(
                    "Falling back to synthesized pattern for unit {}: {}",
                    unit, err
                );
                self.manifest
                    .fallback(unit, length)
                    .unwrap_or(UNIVERSAL_FALLBACK)
                    .to_owned()
            }
        }
    }

    /// Localized display name of a unit, if the data provides one.
    pub fn display_name(
        &self,
        unit: u32,
        language: &str,
        length: PluralFormLength,
    ) -> CldrUnitsResult<Option<String>> {
        let patterns = self.cache.patterns(unit)?;
        Ok(patterns.display_name(language, length).map(str::to_owned))
    }

    /// Per-unit pattern of a unit ("{0} per hour" style), if present.
    pub fn per_unit_pattern(
        &self,
        unit: u32,
        language: &str,
        length: PluralFormLength,
    ) -> CldrUnitsResult<Option<String>> {
        let patterns = self.cache.patterns(unit)?;
        Ok(patterns
            .per_unit_pattern(language, length)
            .map(str::to_owned))
    }

    /// Grammatical gender of a unit in a language.
    ///
    /// Returns [`UnitGender::Unknown`] when the data declares no gender,
    /// including for languages the unit does not support at all.
    pub fn gender(&self, unit: u32, language: &str) -> CldrUnitsResult<UnitGender> {
        let patterns = self.cache.patterns(unit)?;
        Ok(patterns.gender(language).unwrap_or_else(|| {
            debug!("No gender data for unit {} in '{}'", unit, language);
            UnitGender::Unknown
        }))
    }

    /// All language tags with data for a unit, sorted.
    pub fn supported_languages(&self, unit: u32) -> CldrUnitsResult<Vec<String>> {
        let patterns = self.cache.patterns(unit)?;
        let languages = patterns.supported_languages();
        if languages.is_empty() {
            warn!("Unit {} has an empty pattern blob", unit);
        }
        Ok(languages)
    }
}

impl std::fmt::Debug for CldrUnits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CldrUnits")
            .field("units", &self.manifest.len())
            .field("cache", &self.cache)
            .finish()
    }
}
