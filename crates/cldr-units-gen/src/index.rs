//! Unit index assignment and identifier derivation
//!
//! Unit indices are a pure function of the sorted set of unit names:
//! regenerating from an unchanged dataset always yields the same mapping.
//! Renumbering would invalidate every persisted blob, so indices are only
//! allowed to change together with a full regeneration.

use std::collections::HashMap;

use crate::error::{GeneratorError, GeneratorResult};

/// The stable unit → index assignment plus generated identifiers.
#[derive(Debug, Clone)]
pub struct UnitIndexTable {
    names: Vec<String>,
    identifiers: Vec<String>,
}

impl UnitIndexTable {
    /// Build the table from the distinct unit names of a generation run.
    ///
    /// Names are sorted byte-wise; the index of each unit is its position
    /// in that order. Fails when two units collapse to the same identifier.
    pub fn build(mut names: Vec<String>) -> GeneratorResult<Self> {
        names.sort_unstable();
        names.dedup();

        let identifiers: Vec<String> = names.iter().map(|name| human_identifier(name)).collect();

        let mut seen: HashMap<&str, &str> = HashMap::new();
        for (name, identifier) in names.iter().zip(&identifiers) {
            if let Some(first) = seen.insert(identifier.as_str(), name.as_str()) {
                return Err(GeneratorError::IdentifierCollision {
                    first: first.to_owned(),
                    second: name.clone(),
                    identifier: identifier.clone(),
                });
            }
        }

        Ok(Self { names, identifiers })
    }

    /// Number of units.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Index assigned to a unit name.
    pub fn index_of(&self, name: &str) -> Option<u32> {
        self.names
            .binary_search_by(|candidate| candidate.as_str().cmp(name))
            .ok()
            .map(|index| index as u32)
    }

    /// Iterate `(index, name, identifier)` in index order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str, &str)> {
        self.names
            .iter()
            .zip(&self.identifiers)
            .enumerate()
            .map(|(index, (name, identifier))| (index as u32, name.as_str(), identifier.as_str()))
    }
}

/// Derive the generated identifier for a unit name.
///
/// Every non-alphanumeric character becomes a word boundary; words are
/// title-cased with invariant ASCII rules and concatenated, so
/// `duration-week` becomes `DurationWeek` and `consumption-liter-per-100-kilometer`
/// becomes `ConsumptionLiterPer100Kilometer`.
pub fn human_identifier(name: &str) -> String {
    let spaced: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();

    spaced
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_title_cases_words() {
        assert_eq!(human_identifier("duration-week"), "DurationWeek");
        assert_eq!(human_identifier("length-meter"), "LengthMeter");
        assert_eq!(
            human_identifier("consumption-liter-per-100-kilometer"),
            "ConsumptionLiterPer100Kilometer"
        );
        assert_eq!(human_identifier("graphics-dot-per-inch"), "GraphicsDotPerInch");
        // Mixed-case input is normalized before title-casing.
        assert_eq!(human_identifier("Duration-WEEK"), "DurationWeek");
    }

    #[test]
    fn indices_follow_sorted_names() {
        let table = UnitIndexTable::build(vec![
            "length-meter".to_owned(),
            "duration-week".to_owned(),
            "angle-degree".to_owned(),
        ])
        .unwrap();

        assert_eq!(table.index_of("angle-degree"), Some(0));
        assert_eq!(table.index_of("duration-week"), Some(1));
        assert_eq!(table.index_of("length-meter"), Some(2));
        assert_eq!(table.index_of("mass-gram"), None);
    }

    #[test]
    fn assignment_is_stable_across_input_order() {
        let forward = UnitIndexTable::build(vec![
            "duration-week".to_owned(),
            "length-meter".to_owned(),
        ])
        .unwrap();
        let reversed = UnitIndexTable::build(vec![
            "length-meter".to_owned(),
            "duration-week".to_owned(),
        ])
        .unwrap();

        let forward: Vec<_> = forward.iter().map(|(i, n, _)| (i, n.to_owned())).collect();
        let reversed: Vec<_> = reversed.iter().map(|(i, n, _)| (i, n.to_owned())).collect();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn identifier_collision_is_fatal() {
        let err = UnitIndexTable::build(vec![
            "duration-week".to_owned(),
            "duration_week".to_owned(),
        ])
        .unwrap_err();

        assert!(matches!(
            err,
            GeneratorError::IdentifierCollision { ref identifier, .. } if identifier == "DurationWeek"
        ));
    }

    #[test]
    fn iteration_yields_index_order() {
        let table = UnitIndexTable::build(vec![
            "mass-gram".to_owned(),
            "angle-degree".to_owned(),
        ])
        .unwrap();

        let rows: Vec<_> = table.iter().collect();
        assert_eq!(
            rows,
            vec![(0, "angle-degree", "AngleDegree"), (1, "mass-gram", "MassGram")]
        );
    }
}
