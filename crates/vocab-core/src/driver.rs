//! Ingest driver — feeds lines through the normalizer and collects entries.
//!
//! The only mutable context is the level. In level-list input it is set by
//! `第X級` section headers and every data line is read under it; in delimited
//! and tabular input rows carry their own level and the context only backs the
//! `carry` unknown-level policy.

use std::collections::BTreeMap;

use crate::dedupe::dedupe;
use crate::error::{Result, RowError};
use crate::normalizer::columns::ColumnMap;
use crate::normalizer::extract::{
    extract_fields, extract_single, extract_tabular, is_single_column, primary_fields, Extracted, LevelContext,
    FIELD_COUNT,
};
use crate::normalizer::level::{parse_level_header, LEVEL_MARK};
use crate::types::{DedupePolicy, Level, SourceFormat, UnknownLevelPolicy, WordEntry};

/// Knobs for one ingest run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestOptions {
    pub format: SourceFormat,
    pub unknown_level: UnknownLevelPolicy,
    pub default_level: Level,
    /// How many skipped lines to keep in [`IngestStats::skipped_preview`].
    pub skip_preview: usize,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            format: SourceFormat::Auto,
            unknown_level: UnknownLevelPolicy::Drop,
            default_level: Level::FIRST,
            skip_preview: 10,
        }
    }
}

/// A line that produced no entry, kept for the operator report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the input.
    pub line_no: usize,
    pub text: String,
    pub reason: RowError,
}

/// Counters gathered during a run. Advisory only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub lines: usize,
    pub blank: usize,
    pub headers: usize,
    pub accepted: usize,
    pub skipped: usize,
    pub duplicates_removed: usize,
    /// Entries per level in the final output.
    pub per_level: BTreeMap<Level, usize>,
    pub skipped_preview: Vec<SkippedLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestOutcome {
    /// The format actually used, after `auto` was resolved.
    pub format: SourceFormat,
    pub entries: Vec<WordEntry>,
    pub stats: IngestStats,
}

impl IngestOutcome {
    /// Apply a dedupe post-pass and recount the per-level totals.
    pub fn dedupe(&mut self, policy: DedupePolicy) {
        let entries = std::mem::take(&mut self.entries);
        let (kept, removed) = dedupe(entries, policy);
        self.entries = kept;
        self.stats.duplicates_removed += removed;
        self.stats.per_level = count_levels(&self.entries);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReadState {
    /// No level header seen yet.
    Seeking,
    Reading(Level),
}

/// Line-at-a-time driver. Build with [`Ingest::new`], push lines with
/// [`Ingest::feed_line`], then [`Ingest::finish`].
#[derive(Debug)]
pub struct Ingest {
    format: SourceFormat,
    skip_preview: usize,
    state: ReadState,
    levels: LevelContext,
    columns: Option<ColumnMap>,
    entries: Vec<WordEntry>,
    stats: IngestStats,
}

impl Ingest {
    /// `format` must already be resolved; `Auto` is read as delimited.
    pub fn new(opts: &IngestOptions, format: SourceFormat) -> Self {
        let format = match format {
            SourceFormat::Auto => SourceFormat::Delimited,
            other => other,
        };
        Self {
            format,
            skip_preview: opts.skip_preview,
            state: ReadState::Seeking,
            levels: LevelContext::new(opts.unknown_level, opts.default_level),
            columns: None,
            entries: Vec::new(),
            stats: IngestStats::default(),
        }
    }

    /// Process one raw line. Only a tabular header without a word column is
    /// an error; every other problem is counted as a skip.
    pub fn feed_line(&mut self, line_no: usize, line: &str) -> Result<()> {
        self.stats.lines += 1;
        let line = line.trim();
        if line.is_empty() {
            self.stats.blank += 1;
            return Ok(());
        }

        match self.format {
            SourceFormat::Tabular => self.feed_tabular(line_no, line)?,
            SourceFormat::LevelList => {
                let result = if let Some(level) = section_header(line) {
                    Ok(Extracted::Header(Some(level)))
                } else if line.contains(LEVEL_MARK) {
                    Err(RowError::MalformedRow)
                } else {
                    match self.state {
                        ReadState::Seeking => Err(RowError::OutsideLevel),
                        ReadState::Reading(level) => extract_single(line, level).map(Extracted::Entry),
                    }
                };
                self.record(line_no, line, result);
            }
            SourceFormat::Delimited | SourceFormat::Auto => {
                let result = match section_header(line) {
                    Some(level) => Ok(Extracted::Header(Some(level))),
                    None => extract_fields(line, &self.levels),
                };
                self.record(line_no, line, result);
            }
        }
        Ok(())
    }

    fn feed_tabular(&mut self, line_no: usize, line: &str) -> Result<()> {
        let Some(columns) = self.columns.as_ref() else {
            let columns = ColumnMap::from_header_line(line)?;
            let named = columns.named;
            self.columns = Some(columns);
            if named {
                self.stats.headers += 1;
                return Ok(());
            }
            tracing::debug!(line_no, "no named columns, reading the first row as data");
            return self.feed_tabular(line_no, line);
        };
        let result = extract_tabular(&columns.split(line), columns, &self.levels);
        self.record(line_no, line, result);
        Ok(())
    }

    fn record(&mut self, line_no: usize, line: &str, result: Result<Extracted, RowError>) {
        match result {
            Ok(Extracted::Entry(entry)) => {
                self.levels.current = Some(entry.level);
                self.stats.accepted += 1;
                self.entries.push(entry);
            }
            Ok(Extracted::Header(level)) => {
                self.stats.headers += 1;
                if let Some(level) = level {
                    tracing::debug!(line_no, %level, "entering level section");
                    self.state = ReadState::Reading(level);
                    self.levels.current = Some(level);
                }
            }
            Err(reason) => {
                tracing::debug!(line_no, %reason, line, "skipped line");
                self.stats.skipped += 1;
                if self.stats.skipped_preview.len() < self.skip_preview {
                    self.stats.skipped_preview.push(SkippedLine {
                        line_no,
                        text: line.to_string(),
                        reason,
                    });
                }
            }
        }
    }

    pub fn finish(mut self) -> IngestOutcome {
        self.stats.per_level = count_levels(&self.entries);
        tracing::info!(
            format = %self.format,
            accepted = self.stats.accepted,
            skipped = self.stats.skipped,
            "ingest finished"
        );
        IngestOutcome {
            format: self.format,
            entries: self.entries,
            stats: self.stats,
        }
    }
}

/// Run a whole text through the driver, resolving `auto` from the content.
pub fn ingest(text: &str, opts: &IngestOptions) -> Result<IngestOutcome> {
    let format = match opts.format {
        SourceFormat::Auto => detect_format(text),
        other => other,
    };
    let mut driver = Ingest::new(opts, format);
    for (idx, line) in text.lines().enumerate() {
        driver.feed_line(idx + 1, line)?;
    }
    Ok(driver.finish())
}

/// Level-list if there is a clean section header and more data lines have the
/// `<word> <pos>` shape than the five-field shape; delimited otherwise.
pub fn detect_format(text: &str) -> SourceFormat {
    let mut has_header = false;
    let (mut single, mut delimited) = (0usize, 0usize);
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if section_header(line).is_some() {
            has_header = true;
        } else if primary_fields(line).len() >= FIELD_COUNT {
            delimited += 1;
        } else if is_single_column(line) {
            single += 1;
        }
    }
    if has_header && single > delimited {
        SourceFormat::LevelList
    } else {
        SourceFormat::Delimited
    }
}

/// A `第X級` line that is not itself a delimited data row. Single-space rows
/// are indistinguishable from a spaced-out header and count as headers.
fn section_header(line: &str) -> Option<Level> {
    if line.contains('\t') || primary_fields(line).len() >= FIELD_COUNT {
        return None;
    }
    parse_level_header(line)
}

fn count_levels(entries: &[WordEntry]) -> BTreeMap<Level, usize> {
    let mut counts = BTreeMap::new();
    for entry in entries {
        *counts.entry(entry.level).or_insert(0) += 1;
    }
    counts
}
