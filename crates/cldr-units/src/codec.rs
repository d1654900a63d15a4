//! Binary codec for per-unit pattern blobs
//!
//! One blob holds the complete record set of a single unit:
//!
//! 1. `u32` (LE) pattern count, then per pattern: language string, length
//!    byte, case byte, category byte, pattern text string.
//! 2. `u32` gender count, then per gender: language string, gender byte.
//!    Only genders declared at the Long length are persisted.
//! 3. `u32` extra-info count, then per (language, length) group: language
//!    string, length byte, display name string, per-unit pattern string.
//!    An empty string means the field is absent.
//!
//! Strings carry an unsigned LEB128 byte-length prefix followed by UTF-8
//! bytes. The whole sequence is written through a raw deflate stream. The
//! encoder sorts records before writing so an identical record set always
//! produces identical bytes.

use std::io::{Read, Write};

use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;

use crate::enums::{GrammaticalCase, PluralCategory, PluralFormLength, UnitGender};
use crate::error::{CldrUnitsError, CldrUnitsResult};
use crate::patterns::UnitPatterns;

/// One serialized plural pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRecord {
    /// Language tag the pattern belongs to.
    pub language: String,
    /// Presentation length of the pattern.
    pub length: PluralFormLength,
    /// Grammatical case of the pattern.
    pub case: GrammaticalCase,
    /// Plural category of the pattern.
    pub category: PluralCategory,
    /// The pattern text, containing at most one `{0}` placeholder.
    pub text: String,
}

/// One serialized gender declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenderRecord {
    /// Language tag the gender belongs to.
    pub language: String,
    /// Declared grammatical gender.
    pub gender: UnitGender,
}

/// Display name and per-unit pattern for one (language, length) pair.
///
/// Empty strings stand for absent values on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraInfoRecord {
    /// Language tag the info belongs to.
    pub language: String,
    /// Presentation length the info belongs to.
    pub length: PluralFormLength,
    /// Localized display name, empty when absent.
    pub display_name: String,
    /// Per-unit pattern, empty when absent.
    pub per_unit_pattern: String,
}

/// Complete logical record set of one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitRecordSet {
    /// Plural patterns across all languages, lengths, cases and categories.
    pub patterns: Vec<PatternRecord>,
    /// Per-language gender declarations.
    pub genders: Vec<GenderRecord>,
    /// Per (language, length) display names and per-unit patterns.
    pub extra_infos: Vec<ExtraInfoRecord>,
}

/// Serialize and compress one unit's record set.
pub fn encode_unit(records: &UnitRecordSet) -> CldrUnitsResult<Vec<u8>> {
    let mut patterns: Vec<&PatternRecord> = records.patterns.iter().collect();
    patterns.sort_by(|a, b| {
        a.language
            .cmp(&b.language)
            .then_with(|| a.category.as_byte().cmp(&b.category.as_byte()))
            .then_with(|| a.length.as_byte().cmp(&b.length.as_byte()))
            .then_with(|| a.case.as_byte().cmp(&b.case.as_byte()))
    });

    let mut genders: Vec<&GenderRecord> = records.genders.iter().collect();
    genders.sort_by(|a, b| a.language.cmp(&b.language));

    let mut extra_infos: Vec<&ExtraInfoRecord> = records.extra_infos.iter().collect();
    extra_infos.sort_by(|a, b| {
        a.language
            .cmp(&b.language)
            .then_with(|| a.length.as_byte().cmp(&b.length.as_byte()))
    });

    let mut raw = Vec::new();
    write_u32(&mut raw, patterns.len() as u32);
    for pattern in patterns {
        write_str(&mut raw, &pattern.language);
        raw.push(pattern.length.as_byte());
        raw.push(pattern.case.as_byte());
        raw.push(pattern.category.as_byte());
        write_str(&mut raw, &pattern.text);
    }

    write_u32(&mut raw, genders.len() as u32);
    for gender in genders {
        write_str(&mut raw, &gender.language);
        raw.push(gender.gender.as_byte());
    }

    write_u32(&mut raw, extra_infos.len() as u32);
    for info in extra_infos {
        write_str(&mut raw, &info.language);
        raw.push(info.length.as_byte());
        write_str(&mut raw, &info.display_name);
        write_str(&mut raw, &info.per_unit_pattern);
    }

    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(&raw)?;
    Ok(encoder.finish()?)
}

/// Decompress and deserialize one unit's blob into its runtime structure.
pub fn decode_unit(blob: &[u8]) -> CldrUnitsResult<UnitPatterns> {
    // Inflate everything up front; reading byte-wise through the inflate
    // stream is around two orders of magnitude slower.
    let mut raw = Vec::new();
    DeflateDecoder::new(blob)
        .read_to_end(&mut raw)
        .map_err(|err| CldrUnitsError::CorruptBlob(format!("inflate failed: {err}")))?;

    let records = read_records(&raw)?;
    Ok(build_patterns(&records))
}

/// Rebuild the lookup structure from a decoded record set.
pub(crate) fn build_patterns(records: &UnitRecordSet) -> UnitPatterns {
    let mut patterns = UnitPatterns::default();

    for record in &records.patterns {
        patterns
            .language_mut(&record.language)
            .length_mut(record.length)
            .case_mut(record.case)
            .set_category(record.category, record.text.clone());
    }

    for info in &records.extra_infos {
        let node = patterns
            .language_mut(&info.language)
            .length_mut(info.length);
        if !info.display_name.is_empty() {
            node.set_display_name(info.display_name.clone());
        }
        if !info.per_unit_pattern.is_empty() {
            node.set_per_unit_pattern(info.per_unit_pattern.clone());
        }
    }

    for gender in &records.genders {
        patterns
            .language_mut(&gender.language)
            .set_gender(gender.gender);
    }

    patterns
}

fn read_records(raw: &[u8]) -> CldrUnitsResult<UnitRecordSet> {
    let mut reader = Reader::new(raw);

    let pattern_count = reader.read_u32()?;
    let mut patterns = Vec::with_capacity(pattern_count as usize);
    for _ in 0..pattern_count {
        let language = reader.read_str()?;
        let length = reader.read_length()?;
        let case = reader.read_case()?;
        let category = reader.read_category()?;
        let text = reader.read_str()?;
        patterns.push(PatternRecord {
            language,
            length,
            case,
            category,
            text,
        });
    }

    let gender_count = reader.read_u32()?;
    let mut genders = Vec::with_capacity(gender_count as usize);
    for _ in 0..gender_count {
        let language = reader.read_str()?;
        let gender = reader.read_gender()?;
        genders.push(GenderRecord { language, gender });
    }

    let extra_count = reader.read_u32()?;
    let mut extra_infos = Vec::with_capacity(extra_count as usize);
    for _ in 0..extra_count {
        let language = reader.read_str()?;
        let length = reader.read_length()?;
        let display_name = reader.read_str()?;
        let per_unit_pattern = reader.read_str()?;
        extra_infos.push(ExtraInfoRecord {
            language,
            length,
            display_name,
            per_unit_pattern,
        });
    }

    if !reader.is_at_end() {
        return Err(CldrUnitsError::CorruptBlob(format!(
            "{} trailing bytes after record set",
            reader.remaining()
        )));
    }

    Ok(UnitRecordSet {
        patterns,
        genders,
        extra_infos,
    })
}

fn write_u32(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

fn write_str(buf: &mut Vec<u8>, value: &str) {
    let mut remaining = value.len();
    loop {
        let byte = (remaining & 0x7f) as u8;
        remaining >>= 7;
        if remaining == 0 {
            buf.push(byte);
            break;
        }
        buf.push(byte | 0x80);
    }
    buf.extend_from_slice(value.as_bytes());
}

/// Sequential reader over a fully inflated blob.
struct Reader<'a> {
    raw: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(raw: &'a [u8]) -> Self {
        Self { raw, pos: 0 }
    }

    fn is_at_end(&self) -> bool {
        self.pos == self.raw.len()
    }

    fn remaining(&self) -> usize {
        self.raw.len() - self.pos
    }

    fn read_u8(&mut self) -> CldrUnitsResult<u8> {
        let byte = self
            .raw
            .get(self.pos)
            .copied()
            .ok_or_else(|| CldrUnitsError::CorruptBlob("unexpected end of blob".to_owned()))?;
        self.pos += 1;
        Ok(byte)
    }

    fn read_u32(&mut self) -> CldrUnitsResult<u32> {
        if self.remaining() < 4 {
            return Err(CldrUnitsError::CorruptBlob(
                "unexpected end of blob in count field".to_owned(),
            ));
        }
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&self.raw[self.pos..self.pos + 4]);
        self.pos += 4;
        Ok(u32::from_le_bytes(bytes))
    }

    fn read_varint(&mut self) -> CldrUnitsResult<usize> {
        let mut value = 0usize;
        let mut shift = 0u32;
        loop {
            let byte = self.read_u8()?;
            value |= usize::from(byte & 0x7f) << shift;
            if byte & 0x80 == 0 {
                return Ok(value);
            }
            shift += 7;
            if shift >= 35 {
                return Err(CldrUnitsError::CorruptBlob(
                    "string length prefix overflows".to_owned(),
                ));
            }
        }
    }

    fn read_str(&mut self) -> CldrUnitsResult<String> {
        let len = self.read_varint()?;
        if self.remaining() < len {
            return Err(CldrUnitsError::CorruptBlob(format!(
                "string of {len} bytes exceeds remaining blob"
            )));
        }
        let bytes = &self.raw[self.pos..self.pos + len];
        self.pos += len;
        String::from_utf8(bytes.to_vec())
            .map_err(|err| CldrUnitsError::CorruptBlob(format!("invalid UTF-8 string: {err}")))
    }

    fn read_length(&mut self) -> CldrUnitsResult<PluralFormLength> {
        let byte = self.read_u8()?;
        PluralFormLength::from_byte(byte)
            .ok_or_else(|| CldrUnitsError::CorruptBlob(format!("unknown length byte {byte}")))
    }

    fn read_case(&mut self) -> CldrUnitsResult<GrammaticalCase> {
        let byte = self.read_u8()?;
        GrammaticalCase::from_byte(byte)
            .ok_or_else(|| CldrUnitsError::CorruptBlob(format!("unknown case byte {byte}")))
    }

    fn read_category(&mut self) -> CldrUnitsResult<PluralCategory> {
        let byte = self.read_u8()?;
        PluralCategory::from_byte(byte)
            .ok_or_else(|| CldrUnitsError::CorruptBlob(format!("unknown category byte {byte}")))
    }

    fn read_gender(&mut self) -> CldrUnitsResult<UnitGender> {
        let byte = self.read_u8()?;
        UnitGender::from_byte(byte)
            .ok_or_else(|| CldrUnitsError::CorruptBlob(format!("unknown gender byte {byte}")))
    }
}
