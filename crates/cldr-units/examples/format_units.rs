//! Formats a few unit quantities from a generated data directory.
//!
//! Usage: `cargo run --example format_units -- <data-dir>`

use cldr_units::{substitute, CldrUnits, GrammaticalCase, PluralFormLength};

fn main() -> cldr_units::CldrUnitsResult<()> {
    let data_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data".to_owned());
    let units = CldrUnits::open(&data_dir)?;

    let week = units
        .unit_index("duration-week")
        .expect("duration-week is part of every CLDR dataset");

    for count in [1i64, 3, 42] {
        let pattern = units.format_pattern_safe(
            week,
            "de",
            count,
            PluralFormLength::Long,
            GrammaticalCase::Accusative,
        );
        println!("{}", substitute(&pattern, &count.to_string()));
    }

    if let Some(name) = units.display_name(week, "ja", PluralFormLength::Long)? {
        println!("duration-week in Japanese: {name}");
    }

    Ok(())
}
