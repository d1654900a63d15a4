//! Integration tests for the full query surface.
//!
//! Builds blobs through the codec into an in-memory store, so the tests
//! exercise the same decode path the generated data directory goes through.

use cldr_units::{
    encode_unit, CldrUnits, CldrUnitsError, GenderRecord, GrammaticalCase, MemoryPatternStore,
    PatternRecord, PluralCategory, PluralFormLength, UnitEntry, UnitGender, UnitManifest,
    UnitRecordSet,
};

const WEEK: u32 = 0;
const JP_MEASURE: u32 = 1;

fn pattern(
    language: &str,
    length: PluralFormLength,
    case: GrammaticalCase,
    category: PluralCategory,
    text: &str,
) -> PatternRecord {
    PatternRecord {
        language: language.to_owned(),
        length,
        case,
        category,
        text: text.to_owned(),
    }
}

/// Two units: a well-covered "week" and a measure that exists only in "ja"
/// (mirroring units like volume-koku in the real dataset).
fn test_units() -> CldrUnits {
    use GrammaticalCase::{Accusative, None as Unmarked};
    use PluralCategory::{One, Other};
    use PluralFormLength::{Long, Narrow, Short};

    let week = UnitRecordSet {
        patterns: vec![
            pattern("en", Long, Unmarked, One, "{0} week"),
            pattern("en", Long, Unmarked, Other, "{0} weeks"),
            pattern("en", Short, Unmarked, Other, "{0} wks."),
            pattern("de", Long, Accusative, One, "{0} Woche"),
            pattern("de", Long, Accusative, Other, "{0} Wochen"),
            pattern("de", Narrow, Unmarked, Other, "{0} Wo."),
        ],
        genders: vec![GenderRecord {
            language: "de".to_owned(),
            gender: UnitGender::Feminine,
        }],
        extra_infos: vec![],
    };

    let jp_measure = UnitRecordSet {
        patterns: vec![pattern("ja", Long, Unmarked, Other, "{0}勺")],
        ..Default::default()
    };

    let mut store = MemoryPatternStore::new();
    store.insert(WEEK, encode_unit(&week).unwrap());
    store.insert(JP_MEASURE, encode_unit(&jp_measure).unwrap());

    let manifest = UnitManifest::new(vec![
        UnitEntry {
            name: "duration-week".to_owned(),
            identifier: "DurationWeek".to_owned(),
            long_fallback: "{0} weeks".to_owned(),
            short_fallback: "{0} wks.".to_owned(),
            narrow_fallback: "{0} wks.".to_owned(),
        },
        UnitEntry {
            name: "volume-shaku".to_owned(),
            identifier: "VolumeShaku".to_owned(),
            long_fallback: "{0}勺".to_owned(),
            short_fallback: "{0}勺".to_owned(),
            narrow_fallback: "{0}勺".to_owned(),
        },
    ]);

    CldrUnits::new(store, manifest)
}

#[test]
fn week_scenario_accusative_counts() {
    let units = test_units();

    let three = units
        .format_pattern(
            WEEK,
            "de",
            3,
            PluralFormLength::Long,
            GrammaticalCase::Accusative,
        )
        .unwrap();
    assert_eq!(three, "{0} Wochen");

    let one = units
        .format_pattern(
            WEEK,
            "de",
            1,
            PluralFormLength::Long,
            GrammaticalCase::Accusative,
        )
        .unwrap();
    assert_eq!(one, "{0} Woche");
}

#[test]
fn regional_variant_resolves_like_base_language() {
    let units = test_units();

    let base = units
        .format_pattern(
            WEEK,
            "de",
            3,
            PluralFormLength::Long,
            GrammaticalCase::Accusative,
        )
        .unwrap();
    let regional = units
        .format_pattern(
            WEEK,
            "de-AT",
            3,
            PluralFormLength::Long,
            GrammaticalCase::Accusative,
        )
        .unwrap();
    assert_eq!(base, regional);
}

#[test]
fn strict_and_safe_disagree_only_on_missing_coverage() {
    let units = test_units();

    // "xx" has no data and the Japanese measure has no "en" chain to land on.
    let err = units
        .format_pattern(
            JP_MEASURE,
            "xx",
            3,
            PluralFormLength::Long,
            GrammaticalCase::None,
        )
        .unwrap_err();
    assert!(matches!(err, CldrUnitsError::UnsupportedLanguage { .. }));

    let safe = units.format_pattern_safe(
        JP_MEASURE,
        "xx",
        3,
        PluralFormLength::Long,
        GrammaticalCase::None,
    );
    assert_eq!(safe, "{0}勺");
}

#[test]
fn safe_resolution_is_total_and_parametric() {
    let units = test_units();
    let counts = [0i64, 1, 2, 3, 11, 21, 111, 121];

    for unit in [WEEK, JP_MEASURE] {
        for language in units.supported_languages(unit).unwrap() {
            for length in PluralFormLength::ALL {
                for case in GrammaticalCase::ALL {
                    for count in counts {
                        let pattern =
                            units.format_pattern_safe(unit, &language, count, length, case);
                        assert!(
                            !pattern.is_empty(),
                            "empty pattern for unit {unit} lang {language} count {count}"
                        );
                        if count > 2 {
                            assert!(
                                pattern.contains("{0}"),
                                "non-parametric pattern '{pattern}' for count {count}"
                            );
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn missing_blob_is_not_conflated_with_missing_language() {
    let units = test_units();

    let err = units
        .format_pattern(
            99,
            "de",
            1,
            PluralFormLength::Long,
            GrammaticalCase::None,
        )
        .unwrap_err();
    assert!(matches!(err, CldrUnitsError::DataNotFound { unit: 99 }));

    // The safe path still absorbs it, via the universal fallback.
    let safe =
        units.format_pattern_safe(99, "de", 1, PluralFormLength::Long, GrammaticalCase::None);
    assert_eq!(safe, "{0}");
}

#[test]
fn gender_defaults_to_unknown() {
    let units = test_units();

    assert_eq!(units.gender(WEEK, "de").unwrap(), UnitGender::Feminine);
    assert_eq!(units.gender(WEEK, "de-CH").unwrap(), UnitGender::Feminine);
    assert_eq!(units.gender(WEEK, "en").unwrap(), UnitGender::Unknown);
    // Unsupported language degrades to Unknown rather than failing.
    assert_eq!(units.gender(JP_MEASURE, "xx").unwrap(), UnitGender::Unknown);
}

#[test]
fn supported_languages_lists_data_languages() {
    let units = test_units();
    assert_eq!(units.supported_languages(WEEK).unwrap(), vec!["de", "en"]);
    assert_eq!(units.supported_languages(JP_MEASURE).unwrap(), vec!["ja"]);
}

#[test]
fn unit_lookup_by_name() {
    let units = test_units();
    assert_eq!(units.unit_index("duration-week"), Some(WEEK));
    assert_eq!(units.unit_index("volume-shaku"), Some(JP_MEASURE));
    assert_eq!(units.unit_index("length-meter"), None);
    assert_eq!(units.unit_count(), 2);
}

#[test]
fn repeated_queries_return_identical_strings() {
    let units = test_units();
    let first = units.format_pattern_safe(
        WEEK,
        "de",
        3,
        PluralFormLength::Long,
        GrammaticalCase::Accusative,
    );
    let second = units.format_pattern_safe(
        WEEK,
        "de",
        3,
        PluralFormLength::Long,
        GrammaticalCase::Accusative,
    );
    assert_eq!(first, second);
}
