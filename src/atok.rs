use crate::entry::Entry;
use crate::error::{ConvertError, Result};
use crate::reading::{is_hiragana, normalize_reading};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

/// Word type categories whose `@`-prefixed readings are emoticon shortcuts
const EMOTICON_CATEGORIES: [&str; 3] = ["顔文字", "単漢字", "短縮読み"];

/// Word types of auto-registered (learned) words end with this marker
const AUTO_REGISTERED_MARKER: char = '$';

/// Filters applied while extracting entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Skip `@`-prefixed emoticon, single-kanji and abbreviated-reading records
    pub skip_emoticons: bool,
    /// Skip auto-registered words
    pub skip_auto: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            skip_emoticons: true,
            skip_auto: false,
        }
    }
}

/// Number of records dropped per reason
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConvertStats {
    pub skipped_emoticons: usize,
    pub skipped_auto: usize,
    pub skipped_invalid: usize,
    pub skipped_duplicates: usize,
}

/// Result of converting one ATOK export
#[derive(Debug, Default, Clone)]
pub struct Conversion {
    /// Unique entries in input order
    pub entries: Vec<Entry>,
    pub stats: ConvertStats,
}

/// One tab-separated line of an ATOK export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    pub reading: &'a str,
    pub word: &'a str,
    /// Classification label, e.g. `名詞*` or `顔文字$`
    pub word_type: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Emoticon,
    AutoRegistered,
    InvalidReading,
    Duplicate,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Emoticon => write!(f, "emoticon"),
            SkipReason::AutoRegistered => write!(f, "auto-registered"),
            SkipReason::InvalidReading => write!(f, "invalid reading"),
            SkipReason::Duplicate => write!(f, "duplicate"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Added,
    Skipped(SkipReason),
}

/// Decode a UTF-16LE byte stream, dropping a leading byte-order mark.
pub fn decode_utf16le(bytes: &[u8]) -> Result<String, String> {
    if bytes.len() % 2 != 0 {
        return Err(format!("odd byte length {}", bytes.len()));
    }

    let units = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));

    let mut text = String::with_capacity(bytes.len() / 2);
    for decoded in char::decode_utf16(units) {
        match decoded {
            Ok(c) => text.push(c),
            Err(e) => {
                return Err(format!(
                    "unpaired surrogate {:#06x}",
                    e.unpaired_surrogate()
                ));
            }
        }
    }

    if text.starts_with('\u{FEFF}') {
        text.remove(0);
    }

    Ok(text)
}

/// Split one line into its first three fields.
///
/// Returns `None` for blank lines, `!!` header lines and lines with fewer
/// than three tab-separated fields. Extra fields are ignored.
pub fn parse_record(line: &str) -> Option<RawRecord<'_>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with("!!") {
        return None;
    }

    let mut fields = line.split('\t');
    let reading = fields.next()?.trim();
    let word = fields.next()?.trim();
    let word_type = fields.next()?.trim();

    Some(RawRecord {
        reading,
        word,
        word_type,
    })
}

fn is_emoticon(record: &RawRecord<'_>) -> bool {
    EMOTICON_CATEGORIES
        .iter()
        .any(|category| record.word_type.contains(category))
        && (record.reading.starts_with('＠') || record.reading.starts_with('@'))
}

/// Filters and deduplicates records one at a time.
///
/// The seen-key set lives only as long as the extractor, so separate runs
/// never share state.
#[derive(Debug, Default)]
pub struct Extractor {
    options: ConvertOptions,
    seen: HashSet<(String, String)>,
    conversion: Conversion,
}

impl Extractor {
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            options,
            seen: HashSet::new(),
            conversion: Conversion::default(),
        }
    }

    pub fn push(&mut self, record: RawRecord<'_>) -> Outcome {
        let stats = &mut self.conversion.stats;

        if self.options.skip_emoticons && is_emoticon(&record) {
            stats.skipped_emoticons += 1;
            return Outcome::Skipped(SkipReason::Emoticon);
        }

        if self.options.skip_auto && record.word_type.ends_with(AUTO_REGISTERED_MARKER) {
            stats.skipped_auto += 1;
            return Outcome::Skipped(SkipReason::AutoRegistered);
        }

        let reading = normalize_reading(record.reading);
        if !is_hiragana(&reading) {
            stats.skipped_invalid += 1;
            return Outcome::Skipped(SkipReason::InvalidReading);
        }

        let entry = Entry::new(record.word, reading);
        if !self.seen.insert(entry.key()) {
            stats.skipped_duplicates += 1;
            return Outcome::Skipped(SkipReason::Duplicate);
        }

        self.conversion.entries.push(entry);
        Outcome::Added
    }

    pub fn finish(self) -> Conversion {
        self.conversion
    }
}

/// Run every line of a decoded export through the filters.
pub fn extract(text: &str, options: ConvertOptions) -> Conversion {
    let mut extractor = Extractor::new(options);

    for record in text.split(['\r', '\n']).filter_map(parse_record) {
        if let Outcome::Skipped(reason) = extractor.push(record) {
            tracing::debug!(
                reading = record.reading,
                word = record.word,
                word_type = record.word_type,
                "Skipped {reason} record"
            );
        }
    }

    extractor.finish()
}

/// Read, decode and convert an ATOK export file.
pub fn convert_file(path: &Path, options: ConvertOptions) -> Result<Conversion> {
    let bytes = fs::read(path).map_err(|source| ConvertError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;

    let text = decode_utf16le(&bytes).map_err(|reason| ConvertError::Decode {
        path: path.to_path_buf(),
        reason,
    })?;

    tracing::info!("Parsing ATOK export: {:?}", path);
    let conversion = extract(&text, options);
    tracing::info!("Extracted {} entries", conversion.entries.len());

    Ok(conversion)
}
