//! Core types shared by every layer: the emitted [`WordEntry`], its
//! [`Level`], and the policy enums that configure a run.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{LevelOutOfRange, UnknownVariant};

/// A normalised vocabulary entry, serialised in camelCase for the app.
///
/// The reserved fields (`example_en`, `example_zh`, `audio_url`) are always
/// empty at generation time and are filled in by the app later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    /// Canonical lowercase headword. Never empty, never contains `/` or
    /// parentheses.
    pub word: String,
    /// Target-language gloss. Empty when the source has none.
    pub translation: String,
    /// Abbreviated grammatical tag as written in the source, e.g. `art.`.
    pub part_of_speech: String,
    pub example_en: String,
    pub example_zh: String,
    /// Dictionary lookup URL derived from `word`.
    pub cambridge_url: String,
    pub level: Level,
    pub audio_url: String,
}

/// Difficulty tier, 1 through 6 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;
    pub const FIRST: Level = Level(Self::MIN);

    /// Build a level, returning `None` outside `1..=6`.
    pub fn new(n: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&n).then_some(Self(n))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Every level in ascending order.
    pub fn all() -> impl Iterator<Item = Level> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl TryFrom<u8> for Level {
    type Error = LevelOutOfRange;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n).ok_or(LevelOutOfRange(n))
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shape of the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceFormat {
    /// Decide from the file extension and the content.
    #[default]
    Auto,
    /// `第X級` section headers followed by `<word> <pos>` lines.
    LevelList,
    /// `level, word, pos, display, translation` rows split by tab, comma or
    /// runs of spaces.
    Delimited,
    /// Delimited text whose first row names the columns.
    Tabular,
}

/// What to do with a row whose level token is not recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownLevelPolicy {
    /// Skip the row.
    #[default]
    Drop,
    /// Reuse the last level seen in the stream (initially the default level).
    Carry,
    /// Use the configured default level.
    Default,
}

/// Post-pass applied to the collected entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DedupePolicy {
    /// Keep every entry, duplicates included.
    #[default]
    None,
    /// Keep the first entry for each word.
    KeepFirst,
    /// Keep the highest-level entry for each word, at the position of the
    /// word's first occurrence.
    KeepHighest,
}

macro_rules! kebab_names {
    ($ty:ty, $kind:literal, { $($variant:path => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($name => Ok($variant),)+
                    other => Err(UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                        expected: &[$($name),+],
                    }),
                }
            }
        }
    };
}

kebab_names!(SourceFormat, "format", {
    SourceFormat::Auto => "auto",
    SourceFormat::LevelList => "level-list",
    SourceFormat::Delimited => "delimited",
    SourceFormat::Tabular => "tabular",
});

kebab_names!(UnknownLevelPolicy, "unknown-level policy", {
    UnknownLevelPolicy::Drop => "drop",
    UnknownLevelPolicy::Carry => "carry",
    UnknownLevelPolicy::Default => "default",
});

kebab_names!(DedupePolicy, "dedupe policy", {
    DedupePolicy::None => "none",
    DedupePolicy::KeepFirst => "keep-first",
    DedupePolicy::KeepHighest => "keep-highest",
});
