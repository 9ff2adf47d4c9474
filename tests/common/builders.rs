//! Test builders for `WordEntry` values and ingest options.
//!
//! They panic on invalid input rather than returning `Result`.

use vocab_core::normalizer::build_entry;
use vocab_core::{IngestOptions, Level, SourceFormat, UnknownLevelPolicy, WordEntry};

/// Fluent builder for expected [`WordEntry`] values.
///
/// ```rust
/// let expected = EntryBuilder::new("a/an").pos("art.").translation("一個").level(1).build();
/// ```
pub struct EntryBuilder {
    raw_word: String,
    pos: String,
    translation: String,
    level: u8,
}

impl EntryBuilder {
    pub fn new(raw_word: impl Into<String>) -> Self {
        Self {
            raw_word: raw_word.into(),
            pos: String::new(),
            translation: String::new(),
            level: 1,
        }
    }

    pub fn pos(mut self, pos: impl Into<String>) -> Self {
        self.pos = pos.into();
        self
    }

    pub fn translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = translation.into();
        self
    }

    pub fn level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn build(self) -> WordEntry {
        let level = Level::new(self.level).expect("builder level must be 1..=6");
        build_entry(&self.raw_word, &self.pos, &self.translation, level)
            .expect("builder word must have a base word")
    }
}

/// Driver options for `format` with every other knob at its default.
pub fn options(format: SourceFormat) -> IngestOptions {
    IngestOptions { format, ..IngestOptions::default() }
}

/// Driver options with an explicit unknown-level policy.
pub fn options_with_policy(format: SourceFormat, policy: UnknownLevelPolicy) -> IngestOptions {
    IngestOptions {
        format,
        unknown_level: policy,
        ..IngestOptions::default()
    }
}
