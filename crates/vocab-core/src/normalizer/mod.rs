//! Normalizer — turns one raw vocabulary line into a [`WordEntry`].
//!
//! The pieces are applied in this order for every row shape:
//! field extraction → level resolution → headword canonicalization → lookup URL.

pub mod columns;
pub mod extract;
pub mod headword;
pub mod level;
pub mod lookup;

pub use columns::ColumnMap;
pub use extract::{extract_fields, extract_single, extract_tabular, split_fields, Extracted};
pub use headword::canonicalize;
pub use level::{parse_level, parse_level_header};
pub use lookup::{lookup_url, LOOKUP_BASE};

use crate::error::RowError;
use crate::types::{Level, WordEntry};

/// Build an entry from a raw word token, canonicalizing it and deriving the
/// lookup URL from the canonical form.
pub fn build_entry(
    raw_word: &str,
    part_of_speech: &str,
    translation: &str,
    level: Level,
) -> Result<WordEntry, RowError> {
    let word = canonicalize(raw_word).ok_or_else(|| RowError::NoBaseWord(raw_word.to_string()))?;
    let cambridge_url = lookup_url(&word);
    Ok(WordEntry {
        word,
        translation: translation.trim().to_string(),
        part_of_speech: part_of_speech.trim().to_string(),
        example_en: String::new(),
        example_zh: String::new(),
        cambridge_url,
        level,
        audio_url: String::new(),
    })
}
