//! Pattern-name classification and the per-unit pattern tables
//!
//! The builder consumes flattened `(language, length, unit, pattern name,
//! pattern text)` records from the dataset and files each one into one of
//! two tables: plural patterns keyed by case and category, and extra infos
//! (display name, gender, per-unit pattern). Anything it cannot classify is
//! a fatal error; the dataset is assumed internally consistent and a
//! surprise shape means the generation run must not continue.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use cldr_units::{GrammaticalCase, PluralCategory, PluralFormLength, UnitGender};

use crate::dataset::CldrDoc;
use crate::error::{GeneratorError, GeneratorResult};

/// Units with binary/decimal power prefixes, e.g. `10p-2` or `1024p3`.
/// Compound prefix units are not supported and are skipped silently.
static POWER_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(10|1024)p-?\d+$").expect("power prefix regex is valid"));

/// Compound-unit markers that carry no standalone unit data.
const COMPOUND_MARKERS: [&str; 5] = ["per", "power2", "power3", "times", "coordinateUnit"];

/// Kinds of extra info attached to a unit besides plural patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtraInfoKind {
    /// Localized name of the unit itself.
    DisplayName,
    /// Grammatical gender token of the unit.
    Gender,
    /// Pattern for expressing the unit per another unit.
    PerUnitPattern,
}

/// Key of the plural pattern table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatternKey {
    /// Language tag.
    pub language: String,
    /// Presentation length.
    pub length: PluralFormLength,
    /// Canonical unit name.
    pub unit: String,
    /// Grammatical case.
    pub case: GrammaticalCase,
    /// Plural category.
    pub category: PluralCategory,
}

/// Key of the extra-info table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtraInfoKey {
    /// Language tag.
    pub language: String,
    /// Presentation length.
    pub length: PluralFormLength,
    /// Canonical unit name.
    pub unit: String,
    /// Kind of extra info.
    pub kind: ExtraInfoKind,
}

/// Write-once tables of everything parsed from the dataset.
#[derive(Debug, Default)]
pub struct PatternTable {
    patterns: HashMap<PatternKey, String>,
    extra_infos: HashMap<ExtraInfoKey, String>,
}

impl PatternTable {
    /// Create empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest every locale of a deserialized `units.json` document.
    pub fn add_document(&mut self, doc: &CldrDoc) -> GeneratorResult<()> {
        for (language, locale) in &doc.main {
            for (length, units) in locale.units.lengths() {
                for (unit, unit_patterns) in units {
                    if is_skipped_unit(unit) {
                        trace!("Skipping unsupported unit '{}'", unit);
                        continue;
                    }
                    for (name, text) in unit_patterns {
                        self.add_record(language, length, unit, name, text)?;
                    }
                }
            }
            debug!("Ingested unit patterns for language '{}'", language);
        }
        Ok(())
    }

    /// Classify one dataset record and file it into the matching table.
    pub fn add_record(
        &mut self,
        language: &str,
        length: PluralFormLength,
        unit: &str,
        name: &str,
        text: &str,
    ) -> GeneratorResult<()> {
        match name {
            "displayName" => {
                self.store_extra_info(language, length, unit, ExtraInfoKind::DisplayName, name, text)
            }
            "gender" => {
                if gender_from_token(text).is_none() {
                    return Err(GeneratorError::UnknownGender {
                        value: text.to_owned(),
                        unit: unit.to_owned(),
                        language: language.to_owned(),
                    });
                }
                self.store_extra_info(language, length, unit, ExtraInfoKind::Gender, name, text)
            }
            "perUnitPattern" => self.store_extra_info(
                language,
                length,
                unit,
                ExtraInfoKind::PerUnitPattern,
                name,
                text,
            ),
            _ => {
                let (case, category) =
                    classify_pattern_name(name).ok_or_else(|| {
                        GeneratorError::UnrecognizedPatternName {
                            name: name.to_owned(),
                            unit: unit.to_owned(),
                            language: language.to_owned(),
                        }
                    })?;
                self.store_pattern(language, length, unit, case, category, name, text)
            }
        }
    }

    fn store_pattern(
        &mut self,
        language: &str,
        length: PluralFormLength,
        unit: &str,
        case: GrammaticalCase,
        category: PluralCategory,
        name: &str,
        text: &str,
    ) -> GeneratorResult<()> {
        let key = PatternKey {
            language: language.to_owned(),
            length,
            unit: unit.to_owned(),
            case,
            category,
        };
        if self.patterns.insert(key, text.to_owned()).is_some() {
            return Err(GeneratorError::DuplicateEntry {
                name: name.to_owned(),
                unit: unit.to_owned(),
                language: language.to_owned(),
            });
        }
        Ok(())
    }

    fn store_extra_info(
        &mut self,
        language: &str,
        length: PluralFormLength,
        unit: &str,
        kind: ExtraInfoKind,
        name: &str,
        text: &str,
    ) -> GeneratorResult<()> {
        let key = ExtraInfoKey {
            language: language.to_owned(),
            length,
            unit: unit.to_owned(),
            kind,
        };
        if self.extra_infos.insert(key, text.to_owned()).is_some() {
            return Err(GeneratorError::DuplicateEntry {
                name: name.to_owned(),
                unit: unit.to_owned(),
                language: language.to_owned(),
            });
        }
        Ok(())
    }

    /// The plural pattern table.
    pub fn patterns(&self) -> &HashMap<PatternKey, String> {
        &self.patterns
    }

    /// The extra-info table.
    pub fn extra_infos(&self) -> &HashMap<ExtraInfoKey, String> {
        &self.extra_infos
    }

    /// Distinct unit names present in the pattern table, sorted byte-wise.
    ///
    /// Units that only ever contributed extra info do not get an index.
    pub fn unit_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .patterns
            .keys()
            .map(|key| key.unit.clone())
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Extra-info value for one exact key, if present.
    pub fn extra_info(
        &self,
        language: &str,
        length: PluralFormLength,
        unit: &str,
        kind: ExtraInfoKind,
    ) -> Option<&str> {
        self.extra_infos
            .get(&ExtraInfoKey {
                language: language.to_owned(),
                length,
                unit: unit.to_owned(),
                kind,
            })
            .map(String::as_str)
    }
}

/// Whether a unit is excluded from generation entirely.
fn is_skipped_unit(unit: &str) -> bool {
    COMPOUND_MARKERS.contains(&unit) || POWER_PREFIX.is_match(unit)
}

/// Split a `<case>-count-<category>` pattern name into its parts.
fn classify_pattern_name(name: &str) -> Option<(GrammaticalCase, PluralCategory)> {
    let (case_token, category_token) = name.split_once("-count-")?;
    Some((
        case_from_token(case_token)?,
        category_from_token(category_token)?,
    ))
}

/// Map a dataset case token to its grammatical case.
///
/// The bare `unitPattern` token stands for the unmarked case.
fn case_from_token(token: &str) -> Option<GrammaticalCase> {
    match token {
        "unitPattern" => Some(GrammaticalCase::None),
        "accusative" => Some(GrammaticalCase::Accusative),
        "dative" => Some(GrammaticalCase::Dative),
        "genitive" => Some(GrammaticalCase::Genitive),
        "instrumental" => Some(GrammaticalCase::Instrumental),
        "locative" => Some(GrammaticalCase::Locative),
        "elative" => Some(GrammaticalCase::Elative),
        "illative" => Some(GrammaticalCase::Illative),
        "partitive" => Some(GrammaticalCase::Partitive),
        "oblique" => Some(GrammaticalCase::Oblique),
        "terminative" => Some(GrammaticalCase::Terminative),
        "translative" => Some(GrammaticalCase::Translative),
        "ablative" => Some(GrammaticalCase::Ablative),
        "sociative" => Some(GrammaticalCase::Sociative),
        "ergative" => Some(GrammaticalCase::Ergative),
        "vocative" => Some(GrammaticalCase::Vocative),
        "prepositional" => Some(GrammaticalCase::Prepositional),
        _ => None,
    }
}

/// Map a dataset category token to its plural category.
fn category_from_token(token: &str) -> Option<PluralCategory> {
    match token {
        "other" => Some(PluralCategory::Other),
        "zero" => Some(PluralCategory::Zero),
        "one" => Some(PluralCategory::One),
        "two" => Some(PluralCategory::Two),
        "few" => Some(PluralCategory::Few),
        "many" => Some(PluralCategory::Many),
        _ => None,
    }
}

/// Map a dataset gender token to its gender value.
pub(crate) fn gender_from_token(token: &str) -> Option<UnitGender> {
    match token {
        "feminine" => Some(UnitGender::Feminine),
        "masculine" => Some(UnitGender::Masculine),
        "inanimate" => Some(UnitGender::Inanimate),
        "neuter" => Some(UnitGender::Neuter),
        "common" => Some(UnitGender::Common),
        _ => None,
    }
}
