//! Emission of the generated `Unit` enum source
//!
//! The enum is the human-readable face of the index table: one variant per
//! unit, discriminant equal to the blob index, doc comment carrying the
//! English long display name and the synthesized fallback patterns.

use cldr_units::{PluralFormLength, UnitManifest};

use crate::parser::{ExtraInfoKind, PatternTable};

/// Render the Rust source of the `Unit` enum for a finished generation run.
pub fn unit_enum_source(manifest: &UnitManifest, table: &PatternTable) -> String {
    let mut out = String::new();
    out.push_str("// Generated by cldr-units-gen. Do not edit.\n\n");
    out.push_str("/// CLDR units, ordered by blob index.\n");
    out.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]\n");
    out.push_str("#[repr(u32)]\n");
    out.push_str("pub enum Unit {\n");

    for (index, entry) in manifest.iter().enumerate() {
        let description = table
            .extra_info(
                "en",
                PluralFormLength::Long,
                &entry.name,
                ExtraInfoKind::DisplayName,
            )
            .unwrap_or(entry.identifier.as_str());
        out.push_str(&format!(
            "    /// {} ({})\n",
            doc_text(description),
            entry.name
        ));
        out.push_str(&format!(
            "    /// Fallbacks: long `{}`, short `{}`, narrow `{}`\n",
            doc_text(&entry.long_fallback),
            doc_text(&entry.short_fallback),
            doc_text(&entry.narrow_fallback)
        ));
        out.push_str(&format!("    {} = {},\n", entry.identifier, index));
        if index + 1 < manifest.len() {
            out.push('\n');
        }
    }

    out.push_str("}\n\n");
    out.push_str("impl Unit {\n");
    out.push_str("    /// Blob index of this unit.\n");
    out.push_str("    pub fn index(self) -> u32 {\n");
    out.push_str("        self as u32\n");
    out.push_str("    }\n");
    out.push_str("}\n");
    out
}

/// Keep generated doc comments on a single line.
fn doc_text(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}
