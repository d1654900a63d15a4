//! In-memory pattern structure and multi-level fallback resolution
//!
//! One [`UnitPatterns`] holds everything known about a single unit: per
//! language, up to three per-length nodes plus an optional gender; per
//! length, an optional display name, an optional per-unit pattern and the
//! per-case plural patterns. The structure is immutable after decoding, so
//! it can be shared freely across threads behind an `Arc`.

use std::collections::HashMap;

use tracing::debug;

use crate::enums::{GrammaticalCase, PluralCategory, PluralFormLength, UnitGender};

/// Language tried when neither the requested tag nor its primary subtag has
/// data.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Plural-category pattern strings for one grammatical case.
///
/// `other` is required for every case that exists at all; the remaining
/// categories are optional and fall back to `other`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CasePatterns {
    other: String,
    zero: Option<String>,
    one: Option<String>,
    two: Option<String>,
    few: Option<String>,
    many: Option<String>,
}

impl CasePatterns {
    /// Pattern for a literal count value.
    ///
    /// Counts 0, 1 and 2 select the `Zero`, `One` and `Two` categories when
    /// present; every other count, and every absent category, resolves to
    /// `Other`. This deliberately does not evaluate CLDR plural rules.
    pub fn format_for_count(&self, count: i64) -> &str {
        match count {
            0 => self.zero.as_deref().unwrap_or(&self.other),
            1 => self.one.as_deref().unwrap_or(&self.other),
            2 => self.two.as_deref().unwrap_or(&self.other),
            _ => &self.other,
        }
    }

    /// Raw pattern for a plural category, if present.
    pub fn category(&self, category: PluralCategory) -> Option<&str> {
        match category {
            PluralCategory::Other if self.other.is_empty() => None,
            PluralCategory::Other => Some(&self.other),
            PluralCategory::Zero => self.zero.as_deref(),
            PluralCategory::One => self.one.as_deref(),
            PluralCategory::Two => self.two.as_deref(),
            PluralCategory::Few => self.few.as_deref(),
            PluralCategory::Many => self.many.as_deref(),
        }
    }

    pub(crate) fn set_category(&mut self, category: PluralCategory, text: String) {
        match category {
            PluralCategory::Other => self.other = text,
            PluralCategory::Zero => self.zero = Some(text),
            PluralCategory::One => self.one = Some(text),
            PluralCategory::Two => self.two = Some(text),
            PluralCategory::Few => self.few = Some(text),
            PluralCategory::Many => self.many = Some(text),
        }
    }
}

/// Patterns for one (language, presentation length) pair.
///
/// Case nodes live in a slot array indexed by the case discriminant, so case
/// fallback is a plain walk over [`GrammaticalCase::fallback_chain`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LengthPatterns {
    display_name: Option<String>,
    per_unit_pattern: Option<String>,
    cases: [Option<Box<CasePatterns>>; GrammaticalCase::COUNT],
}

impl LengthPatterns {
    /// Localized display name for the unit at this length, if present.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Pattern for expressing this unit per another unit, if present.
    pub fn per_unit_pattern(&self) -> Option<&str> {
        self.per_unit_pattern.as_deref()
    }

    /// Case node for exactly this case, without fallback.
    pub fn case(&self, case: GrammaticalCase) -> Option<&CasePatterns> {
        self.cases[case.as_index()].as_deref()
    }

    /// First existing case node along the case's fallback chain.
    pub fn resolve_case(&self, case: GrammaticalCase) -> Option<&CasePatterns> {
        case.fallback_chain()
            .iter()
            .find_map(|candidate| self.case(*candidate))
    }

    pub(crate) fn set_display_name(&mut self, name: String) {
        self.display_name = Some(name);
    }

    pub(crate) fn set_per_unit_pattern(&mut self, pattern: String) {
        self.per_unit_pattern = Some(pattern);
    }

    pub(crate) fn case_mut(&mut self, case: GrammaticalCase) -> &mut CasePatterns {
        self.cases[case.as_index()].get_or_insert_with(Box::default)
    }
}

/// Everything known about one unit in one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguagePatterns {
    lengths: [Option<Box<LengthPatterns>>; 3],
    gender: Option<UnitGender>,
}

impl LanguagePatterns {
    /// Length node for exactly this length, without fallback.
    pub fn length(&self, length: PluralFormLength) -> Option<&LengthPatterns> {
        self.lengths[length.as_byte() as usize].as_deref()
    }

    /// First existing length node along the length's fallback chain.
    pub fn resolve_length(&self, length: PluralFormLength) -> Option<&LengthPatterns> {
        length
            .fallback_chain()
            .iter()
            .find_map(|candidate| self.length(*candidate))
    }

    /// Grammatical gender of the unit in this language, if declared.
    pub fn gender(&self) -> Option<UnitGender> {
        self.gender
    }

    pub(crate) fn set_gender(&mut self, gender: UnitGender) {
        self.gender = Some(gender);
    }

    pub(crate) fn length_mut(&mut self, length: PluralFormLength) -> &mut LengthPatterns {
        self.lengths[length.as_byte() as usize].get_or_insert_with(Box::default)
    }
}

/// Complete pattern data for a single unit, keyed by language tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitPatterns {
    languages: HashMap<String, LanguagePatterns>,
}

impl UnitPatterns {
    /// Resolve a language tag to its pattern node.
    ///
    /// Tries the exact tag, then the primary subtag when the tag carries a
    /// region or script part, then [`FALLBACK_LANGUAGE`].
    pub fn language(&self, language: &str) -> Option<&LanguagePatterns> {
        if let Some(node) = self.languages.get(language) {
            return Some(node);
        }

        if let Some((primary, _)) = language.split_once('-') {
            if let Some(node) = self.languages.get(primary) {
                debug!(
                    "Language '{}' not found, using primary subtag '{}'",
                    language, primary
                );
                return Some(node);
            }
        }

        self.languages.get(FALLBACK_LANGUAGE)
    }

    /// Resolve a format pattern, walking language, length, case and count
    /// fallback in that order. Returns `None` only when no data is reachable
    /// through any chain.
    pub fn resolve(
        &self,
        language: &str,
        count: i64,
        length: PluralFormLength,
        case: GrammaticalCase,
    ) -> Option<&str> {
        let node = self.language(language)?;
        let length_node = node.resolve_length(length)?;
        let case_node = length_node.resolve_case(case)?;
        Some(case_node.format_for_count(count))
    }

    /// Localized display name for the unit.
    ///
    /// Walks the length chain until a node that actually carries a display
    /// name turns up, since a length node may exist purely for patterns.
    pub fn display_name(&self, language: &str, length: PluralFormLength) -> Option<&str> {
        let node = self.language(language)?;
        length
            .fallback_chain()
            .iter()
            .find_map(|candidate| node.length(*candidate).and_then(LengthPatterns::display_name))
    }

    /// Per-unit pattern ("{0} per hour" style) for the resolved length node.
    pub fn per_unit_pattern(&self, language: &str, length: PluralFormLength) -> Option<&str> {
        self.language(language)?
            .resolve_length(length)?
            .per_unit_pattern()
    }

    /// Grammatical gender for the unit in this language, if declared.
    pub fn gender(&self, language: &str) -> Option<UnitGender> {
        self.language(language)?.gender()
    }

    /// Language tags with data for this unit, sorted for determinism.
    pub fn supported_languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.languages.keys().cloned().collect();
        languages.sort_unstable();
        languages
    }

    /// Whether the unit has no data for any language.
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    pub(crate) fn language_mut(&mut self, language: &str) -> &mut LanguagePatterns {
        self.languages.entry(language.to_owned()).or_default()
    }
}

/// Replace the `{0}` placeholder in a resolved pattern with an already
/// rendered count.
///
/// Number formatting is the caller's responsibility; this performs plain
/// string substitution only.
pub fn substitute(pattern: &str, rendered_count: &str) -> String {
    pattern.replace("{0}", rendered_count)
}
