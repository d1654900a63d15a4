//! Deserialization model for CLDR `units.json` documents
//!
//! One document carries the unit data of a single locale:
//!
//! ```json
//! {
//!   "main": {
//!     "de": {
//!       "identity": { "language": "de" },
//!       "units": {
//!         "long":   { "duration-week": { "displayName": "Wochen", ... } },
//!         "short":  { ... },
//!         "narrow": { ... }
//!       }
//!     }
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use cldr_units::PluralFormLength;

/// Unit name → pattern name → pattern text, for one presentation length.
pub type UnitMap = BTreeMap<String, BTreeMap<String, String>>;

/// Root of a `units.json` document.
#[derive(Debug, Deserialize)]
pub struct CldrDoc {
    /// Locale tag → per-locale data. Usually a single entry.
    pub main: BTreeMap<String, LocaleData>,
}

/// Data of one locale inside a document.
#[derive(Debug, Deserialize)]
pub struct LocaleData {
    /// Dataset identity metadata; informational only.
    #[serde(default)]
    pub identity: Option<Identity>,
    /// The actual unit pattern maps.
    pub units: UnitsData,
}

/// Identity metadata of a dataset document.
#[derive(Debug, Default, Deserialize)]
pub struct Identity {
    /// ISO 639 language code.
    #[serde(default)]
    pub language: Option<String>,
    /// ISO 3166-1 territory code.
    #[serde(default)]
    pub territory: Option<String>,
    /// ISO 15924 script code.
    #[serde(default)]
    pub script: Option<String>,
    /// Language variant.
    #[serde(default)]
    pub variant: Option<String>,
}

/// Unit pattern maps per presentation length, plus compound duration
/// patterns that are deserialized for completeness but never compiled.
#[derive(Debug, Default, Deserialize)]
pub struct UnitsData {
    /// Spelled-out unit patterns.
    #[serde(default)]
    pub long: UnitMap,
    /// Abbreviated unit patterns.
    #[serde(default)]
    pub short: UnitMap,
    /// Narrow unit patterns.
    #[serde(default)]
    pub narrow: UnitMap,
    /// Hour/minute composite duration pattern.
    #[serde(rename = "durationUnit-type-hm", default)]
    pub duration_unit_hm: Option<DurationUnit>,
    /// Hour/minute/second composite duration pattern.
    #[serde(rename = "durationUnit-type-hms", default)]
    pub duration_unit_hms: Option<DurationUnit>,
    /// Minute/second composite duration pattern.
    #[serde(rename = "durationUnit-type-ms", default)]
    pub duration_unit_ms: Option<DurationUnit>,
}

impl UnitsData {
    /// The three compiled pattern maps, tagged with their length.
    pub fn lengths(&self) -> [(PluralFormLength, &UnitMap); 3] {
        [
            (PluralFormLength::Long, &self.long),
            (PluralFormLength::Short, &self.short),
            (PluralFormLength::Narrow, &self.narrow),
        ]
    }
}

/// Composite duration pattern, e.g. `"h:mm"`. Not compiled into blobs.
#[derive(Debug, Deserialize)]
pub struct DurationUnit {
    /// The duration pattern itself.
    #[serde(rename = "durationUnitPattern", default)]
    pub pattern: Option<String>,
    /// Alternative variant of the pattern.
    #[serde(rename = "durationUnitPattern-alt-variant", default)]
    pub pattern_alt_variant: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_document() {
        let json = r#"{
            "main": {
                "de": {
                    "identity": { "language": "de" },
                    "units": {
                        "long": {
                            "duration-week": {
                                "displayName": "Wochen",
                                "unitPattern-count-one": "{0} Woche",
                                "unitPattern-count-other": "{0} Wochen"
                            }
                        },
                        "short": {},
                        "narrow": {},
                        "durationUnit-type-hm": { "durationUnitPattern": "h:mm" }
                    }
                }
            }
        }"#;

        let doc: CldrDoc = serde_json::from_str(json).unwrap();
        let locale = &doc.main["de"];
        assert_eq!(
            locale.identity.as_ref().unwrap().language.as_deref(),
            Some("de")
        );
        assert_eq!(
            locale.units.long["duration-week"]["displayName"],
            "Wochen"
        );
        assert_eq!(
            locale.units.duration_unit_hm.as_ref().unwrap().pattern.as_deref(),
            Some("h:mm")
        );
    }

    #[test]
    fn missing_length_maps_default_to_empty() {
        let json = r#"{ "main": { "en": { "units": { "long": {} } } } }"#;
        let doc: CldrDoc = serde_json::from_str(json).unwrap();
        assert!(doc.main["en"].units.short.is_empty());
        assert!(doc.main["en"].units.narrow.is_empty());
    }
}
