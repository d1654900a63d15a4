//! Generation pipeline: dataset → tables → blobs, manifest and enum source

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use cldr_units::{
    encode_unit, ExtraInfoRecord, GenderRecord, PatternRecord, PluralFormLength, UnitEntry,
    UnitManifest, UnitRecordSet, MANIFEST_FILE_NAME,
};

use crate::codegen;
use crate::dataset::CldrDoc;
use crate::error::{GeneratorError, GeneratorResult};
use crate::fallback;
use crate::index::UnitIndexTable;
use crate::parser::{gender_from_token, ExtraInfoKind, PatternTable};

/// File name of the generated unit enum source.
pub const UNIT_ENUM_FILE_NAME: &str = "unit.rs";

/// Counts reported after a successful generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Number of units written.
    pub units: usize,
    /// Number of dataset documents ingested.
    pub documents: usize,
}

/// Offline batch generator for the complete per-unit data set.
#[derive(Debug, Default)]
pub struct Generator {
    table: PatternTable,
    documents: usize,
}

impl Generator {
    /// Create a generator with empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest every `main/<locale>/units.json` document under a dataset
    /// root, in locale order.
    pub fn ingest_dataset_root(&mut self, root: &Path) -> GeneratorResult<()> {
        let main = root.join("main");
        let mut locale_dirs: Vec<_> = fs::read_dir(&main)?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        locale_dirs.sort();

        for dir in locale_dirs {
            let file = dir.join("units.json");
            if file.is_file() {
                self.ingest_file(&file)?;
            }
        }

        info!("Ingested {} dataset documents", self.documents);
        Ok(())
    }

    /// Ingest a single `units.json` document from disk.
    pub fn ingest_file(&mut self, path: &Path) -> GeneratorResult<()> {
        debug!("Parsing file {}", path.display());
        self.ingest_json(&fs::read_to_string(path)?)
    }

    /// Ingest a single `units.json` document from a JSON string.
    pub fn ingest_json(&mut self, json: &str) -> GeneratorResult<()> {
        let doc: CldrDoc = serde_json::from_str(json)?;
        self.table.add_document(&doc)?;
        self.documents += 1;
        Ok(())
    }

    /// The tables accumulated so far.
    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    /// Write blobs, manifest and the generated enum source into `out_dir`.
    pub fn write_output(&self, out_dir: &Path) -> GeneratorResult<GenerationSummary> {
        let index = UnitIndexTable::build(self.table.unit_names())?;
        fs::create_dir_all(out_dir)?;

        let mut entries = Vec::with_capacity(index.len());
        for (unit_index, name, identifier) in index.iter() {
            let records = self.records_for_unit(name)?;
            let blob = encode_unit(&records)?;
            fs::write(out_dir.join(format!("{unit_index}.bin")), blob)?;

            let triple = fallback::synthesize(&self.table, name);
            entries.push(UnitEntry {
                name: name.to_owned(),
                identifier: identifier.to_owned(),
                long_fallback: triple.long,
                short_fallback: triple.short,
                narrow_fallback: triple.narrow,
            });
            debug!("Wrote blob {} for unit '{}'", unit_index, name);
        }

        let manifest = UnitManifest::new(entries);
        fs::write(out_dir.join(MANIFEST_FILE_NAME), manifest.to_json()?)?;
        fs::write(
            out_dir.join(UNIT_ENUM_FILE_NAME),
            codegen::unit_enum_source(&manifest, &self.table),
        )?;

        info!("Wrote {} unit blobs to {}", index.len(), out_dir.display());
        Ok(GenerationSummary {
            units: index.len(),
            documents: self.documents,
        })
    }

    /// Collect the complete record set of one unit from the tables.
    fn records_for_unit(&self, unit: &str) -> GeneratorResult<UnitRecordSet> {
        let patterns: Vec<PatternRecord> = self
            .table
            .patterns()
            .iter()
            .filter(|(key, _)| key.unit == unit)
            .map(|(key, text)| PatternRecord {
                language: key.language.clone(),
                length: key.length,
                case: key.case,
                category: key.category,
                text: text.clone(),
            })
            .collect();

        // Genders are declared per length in the dataset but only the Long
        // declaration is persisted.
        let mut genders = Vec::new();
        for (key, value) in self.table.extra_infos() {
            if key.unit == unit
                && key.kind == ExtraInfoKind::Gender
                && key.length == PluralFormLength::Long
            {
                let gender =
                    gender_from_token(value).ok_or_else(|| GeneratorError::UnknownGender {
                        value: value.clone(),
                        unit: unit.to_owned(),
                        language: key.language.clone(),
                    })?;
                genders.push(GenderRecord {
                    language: key.language.clone(),
                    gender,
                });
            }
        }

        // Display name and per-unit pattern are combined per (language,
        // length) group; absent halves are persisted as empty strings.
        let mut groups: BTreeMap<(String, PluralFormLength), (Option<String>, Option<String>)> =
            BTreeMap::new();
        for (key, value) in self.table.extra_infos() {
            if key.unit != unit {
                continue;
            }
            let slot = groups
                .entry((key.language.clone(), key.length))
                .or_default();
            match key.kind {
                ExtraInfoKind::DisplayName => slot.0 = Some(value.clone()),
                ExtraInfoKind::PerUnitPattern => slot.1 = Some(value.clone()),
                ExtraInfoKind::Gender => {}
            }
        }
        let extra_infos: Vec<ExtraInfoRecord> = groups
            .into_iter()
            .filter(|(_, (display_name, per_unit))| display_name.is_some() || per_unit.is_some())
            .map(|((language, length), (display_name, per_unit))| ExtraInfoRecord {
                language,
                length,
                display_name: display_name.unwrap_or_default(),
                per_unit_pattern: per_unit.unwrap_or_default(),
            })
            .collect();

        Ok(UnitRecordSet {
            patterns,
            genders,
            extra_infos,
        })
    }
}
