//! Field extraction for the three row shapes.
//!
//! - [`extract_single`]: `<word-and-variants> <pos>` lines under a level header.
//! - [`extract_fields`]: `level, word, pos, display, translation` rows.
//! - [`extract_tabular`]: rows of a table whose columns were sniffed from its
//!   header.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use super::columns::{cell, ColumnMap};
use super::level::{parse_level, parse_level_header};
use super::build_entry;
use crate::error::RowError;
use crate::types::{Level, UnknownLevelPolicy, WordEntry};

/// Logical fields in a delimited row.
pub const FIELD_COUNT: usize = 5;

/// A trailing part-of-speech token in a word cell is shorter than this.
const MAX_INLINE_POS_CHARS: usize = 10;

static SINGLE_COLUMN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^((?:[A-Za-z'/\s-]|\([^)]*\))+?)\s+([a-z./()]+)$").unwrap());

static WIDE_GAP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// Word cells that mark a column header row rather than data.
static HEADER_LABELS: phf::Set<&'static str> = phf::phf_set! {
    "單字",
    "word",
    "級別",
    "level",
};

/// Result of extracting one non-blank row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extracted {
    Entry(WordEntry),
    /// A header row. Carries a level when the row opens a level section.
    Header(Option<Level>),
}

/// Level context for rows that carry their own level token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelContext {
    pub policy: UnknownLevelPolicy,
    pub default_level: Level,
    /// Last level recognised in the stream, if any.
    pub current: Option<Level>,
}

impl LevelContext {
    pub fn new(policy: UnknownLevelPolicy, default_level: Level) -> Self {
        Self { policy, default_level, current: None }
    }

    /// Apply the unknown-level policy to a parse result.
    pub fn resolve(&self, parsed: Result<Level, RowError>) -> Result<Level, RowError> {
        match (parsed, self.policy) {
            (Ok(level), _) => Ok(level),
            (Err(err), UnknownLevelPolicy::Drop) => Err(err),
            (Err(_), UnknownLevelPolicy::Carry) => Ok(self.current.unwrap_or(self.default_level)),
            (Err(_), UnknownLevelPolicy::Default) => Ok(self.default_level),
        }
    }
}

/// Extract a `<word> <pos>` line. The level comes from the enclosing section.
pub fn extract_single(line: &str, level: Level) -> Result<WordEntry, RowError> {
    let caps = SINGLE_COLUMN.captures(line.trim()).ok_or(RowError::MalformedRow)?;
    let word = caps.get(1).map_or("", |m| m.as_str());
    let pos = caps.get(2).map_or("", |m| m.as_str());
    build_entry(word, pos, "", level)
}

/// Whether a trimmed line has the `<word> <pos>` shape of a level-list entry.
pub(crate) fn is_single_column(line: &str) -> bool {
    SINGLE_COLUMN.is_match(line.trim())
}

/// Split a delimited row into its fields.
///
/// Tab if present, else comma if that gives five fields, else runs of two or
/// more spaces. When the split yields fewer than five fields the line is split
/// on single spaces into at most five pieces instead, if that reaches five.
pub fn split_fields(line: &str) -> Vec<&str> {
    let line = line.trim_matches(|c: char| c == ' ' || c == '\r' || c == '\n');
    let fields = primary_fields(line);
    let fields = if fields.len() < FIELD_COUNT {
        let spaced: Vec<&str> = line.splitn(FIELD_COUNT, ' ').collect();
        if spaced.len() == FIELD_COUNT {
            spaced
        } else {
            fields
        }
    } else {
        fields
    };
    fields.into_iter().map(str::trim).collect()
}

/// Split on tab, comma or wide gaps only, without the single-space fallback.
pub(crate) fn primary_fields(line: &str) -> Vec<&str> {
    if line.contains('\t') {
        return line.split('\t').collect();
    }
    let commas: Vec<&str> = line.split(',').collect();
    if commas.len() >= FIELD_COUNT {
        commas
    } else {
        WIDE_GAP.split(line).collect()
    }
}

/// Extract a `level, word, pos, display, translation` row.
///
/// The display field is ignored. Word and translation must both be present.
pub fn extract_fields(line: &str, ctx: &LevelContext) -> Result<Extracted, RowError> {
    let fields = split_fields(line);
    if fields.len() < FIELD_COUNT {
        return Err(RowError::MalformedRow);
    }

    let word = fields[1];
    if is_header_label(word) {
        return Ok(Extracted::Header(None));
    }
    let translation = fields[4];
    if word.is_empty() || translation.is_empty() {
        return Err(RowError::MalformedRow);
    }

    let level = ctx.resolve(parse_level(fields[0]))?;
    build_entry(word, fields[2], translation, level).map(Extracted::Entry)
}

/// Extract one data row of a sniffed table.
///
/// A word cell holding `第X級` opens a level section. When the level cell is
/// unreadable the word cell is tried, then the unknown-level policy. An empty
/// part-of-speech cell is filled from a short trailing token of the word cell
/// (`"a/an art."`). Translation may be empty.
pub fn extract_tabular(
    cells: &[Cow<'_, str>],
    columns: &ColumnMap,
    ctx: &LevelContext,
) -> Result<Extracted, RowError> {
    let mut word = cell(cells, Some(columns.word));
    if let Some(level) = parse_level_header(word) {
        return Ok(Extracted::Header(Some(level)));
    }
    if word.is_empty() {
        return Err(RowError::MalformedRow);
    }
    if is_header_label(word) {
        return Ok(Extracted::Header(None));
    }

    let level = ctx.resolve(parse_level(cell(cells, columns.level)).or_else(|_| parse_level(word)))?;

    let mut pos = cell(cells, columns.part_of_speech);
    if pos.is_empty() {
        if let Some((head, tail)) = word.rsplit_once(' ') {
            if tail.chars().count() < MAX_INLINE_POS_CHARS {
                word = head;
                pos = tail;
            }
        }
    }

    build_entry(word, pos, cell(cells, columns.translation), level).map(Extracted::Entry)
}

fn is_header_label(word: &str) -> bool {
    HEADER_LABELS.contains(word.trim().to_lowercase().as_str())
}
