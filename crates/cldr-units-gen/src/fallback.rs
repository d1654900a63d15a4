//! Ultimate-fallback synthesis
//!
//! For each unit the generator picks one "safest" pattern per presentation
//! length. These strings are only consulted at run time when a query finds
//! no data for any language, so the selection is deliberately conservative:
//! prefer English, prefer the catch-all `Other` category, prefer the
//! unmarked case, and only then fall back to a fixed list of well-covered
//! languages.

use std::cmp::Ordering;

use cldr_units::{GrammaticalCase, PluralCategory, PluralFormLength};

use crate::parser::{PatternKey, PatternTable};

/// Pattern used when a unit has no data for any length at all.
pub const DEFAULT_PATTERN: &str = "{0}";

/// The synthesized fallback patterns of one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackTriple {
    /// Fallback for the Long length.
    pub long: String,
    /// Fallback for the Short length.
    pub short: String,
    /// Fallback for the Narrow length.
    pub narrow: String,
}

/// Synthesize the fallback triple for one unit.
///
/// Each length first tries its own best candidate, then borrows from the
/// other lengths (Short and Narrow prefer each other before Long; Long
/// prefers Short), and finally degrades to the literal `"{0}"`.
pub fn synthesize(table: &PatternTable, unit: &str) -> FallbackTriple {
    let long = best_candidate(table, unit, PluralFormLength::Long);
    let short = best_candidate(table, unit, PluralFormLength::Short);
    let narrow = best_candidate(table, unit, PluralFormLength::Narrow);

    FallbackTriple {
        long: long
            .or(short)
            .or(narrow)
            .unwrap_or(DEFAULT_PATTERN)
            .to_owned(),
        short: short
            .or(narrow)
            .or(long)
            .unwrap_or(DEFAULT_PATTERN)
            .to_owned(),
        narrow: narrow
            .or(short)
            .or(long)
            .unwrap_or(DEFAULT_PATTERN)
            .to_owned(),
    }
}

/// Best fallback candidate among all patterns of one (unit, length).
fn best_candidate<'a>(
    table: &'a PatternTable,
    unit: &str,
    length: PluralFormLength,
) -> Option<&'a str> {
    table
        .patterns()
        .iter()
        .filter(|(key, _)| key.unit == unit && key.length == length)
        .min_by(|(a, _), (b, _)| candidate_order(a, b))
        .map(|(_, text)| text.as_str())
}

/// Total preference order over fallback candidates.
///
/// Language rank first (then the tag itself, so ties cannot cross
/// languages), then `Other` before every other category, categories in
/// ascending enumeration order, and the unmarked case before marked ones.
fn candidate_order(a: &PatternKey, b: &PatternKey) -> Ordering {
    (language_rank(&a.language), &a.language)
        .cmp(&(language_rank(&b.language), &b.language))
        .then_with(|| {
            (a.category != PluralCategory::Other).cmp(&(b.category != PluralCategory::Other))
        })
        .then_with(|| a.category.as_byte().cmp(&b.category.as_byte()))
        .then_with(|| {
            (a.case != GrammaticalCase::None).cmp(&(b.case != GrammaticalCase::None))
        })
        // Final case tie-break keeps the pick independent of table
        // iteration order.
        .then_with(|| a.case.as_byte().cmp(&b.case.as_byte()))
}

/// Rank in the fixed fallback language preference list.
fn language_rank(language: &str) -> u8 {
    match language {
        "en" => 0,
        "de" => 2,
        "fr" => 4,
        "es" => 6,
        "it" => 8,
        _ if language.starts_with("en-") => 1,
        _ if language.starts_with("de-") => 3,
        _ if language.starts_with("fr-") => 5,
        _ if language.starts_with("es-") => 7,
        _ if language.starts_with("it-") => 9,
        _ => 10,
    }
}

#[cfg(test)]
mod tests {
    use cldr_units::PluralFormLength::{Long, Narrow, Short};

    use super::*;

    fn add(
        table: &mut PatternTable,
        language: &str,
        length: PluralFormLength,
        name: &str,
        text: &str,
    ) {
        table
            .add_record(language, length, "duration-week", name, text)
            .unwrap();
    }

    #[test]
    fn prefers_english_other_unmarked() {
        let mut table = PatternTable::new();
        add(&mut table, "de", Long, "unitPattern-count-other", "{0} Wochen");
        add(&mut table, "en", Long, "unitPattern-count-one", "{0} week");
        add(&mut table, "en", Long, "unitPattern-count-other", "{0} weeks");
        add(&mut table, "en", Long, "accusative-count-other", "{0} weeks acc");

        let triple = synthesize(&table, "duration-week");
        assert_eq!(triple.long, "{0} weeks");
    }

    #[test]
    fn category_order_breaks_ties_without_other() {
        let mut table = PatternTable::new();
        // No Other entry at all: One (byte 1) wins over Zero (byte 2).
        add(&mut table, "en", Long, "unitPattern-count-zero", "{0} z");
        add(&mut table, "en", Long, "unitPattern-count-one", "{0} o");

        let triple = synthesize(&table, "duration-week");
        assert_eq!(triple.long, "{0} o");
    }

    #[test]
    fn language_priority_list_applies_without_english() {
        let mut table = PatternTable::new();
        add(&mut table, "zh", Long, "unitPattern-count-other", "{0} 周");
        add(&mut table, "fr", Long, "unitPattern-count-other", "{0} semaines");
        add(&mut table, "de-CH", Long, "unitPattern-count-other", "{0} Wuche");
        add(&mut table, "de", Long, "unitPattern-count-other", "{0} Wochen");

        let triple = synthesize(&table, "duration-week");
        assert_eq!(triple.long, "{0} Wochen");
    }

    #[test]
    fn regional_english_beats_german() {
        let mut table = PatternTable::new();
        add(&mut table, "de", Long, "unitPattern-count-other", "{0} Wochen");
        add(&mut table, "en-GB", Long, "unitPattern-count-other", "{0} weeks");

        let triple = synthesize(&table, "duration-week");
        assert_eq!(triple.long, "{0} weeks");
    }

    #[test]
    fn unlisted_languages_fall_back_alphabetically() {
        let mut table = PatternTable::new();
        add(&mut table, "sv", Long, "unitPattern-count-other", "{0} veckor");
        add(&mut table, "ja", Long, "unitPattern-count-other", "{0} 週間");

        let triple = synthesize(&table, "duration-week");
        assert_eq!(triple.long, "{0} 週間");
    }

    #[test]
    fn lengths_borrow_from_each_other() {
        let mut table = PatternTable::new();
        add(&mut table, "en", Short, "unitPattern-count-other", "{0} wks.");

        let triple = synthesize(&table, "duration-week");
        // Long borrows Short; Narrow prefers Short over Long too.
        assert_eq!(triple.long, "{0} wks.");
        assert_eq!(triple.short, "{0} wks.");
        assert_eq!(triple.narrow, "{0} wks.");
    }

    #[test]
    fn narrow_only_data_feeds_all_lengths() {
        let mut table = PatternTable::new();
        add(&mut table, "en", Narrow, "unitPattern-count-other", "{0}w");

        let triple = synthesize(&table, "duration-week");
        assert_eq!(triple.long, "{0}w");
        assert_eq!(triple.short, "{0}w");
        assert_eq!(triple.narrow, "{0}w");
    }

    #[test]
    fn no_data_degrades_to_placeholder() {
        let table = PatternTable::new();
        let triple = synthesize(&table, "duration-week");
        assert_eq!(triple.long, DEFAULT_PATTERN);
        assert_eq!(triple.short, DEFAULT_PATTERN);
        assert_eq!(triple.narrow, DEFAULT_PATTERN);
    }
}
