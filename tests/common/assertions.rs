//! Domain-specific assertions for vocab harnesses.
//!
//! Failure messages name the violated property and the offending entry.

use vocab_core::normalizer::lookup_url;
use vocab_core::{IngestStats, Level, WordEntry};

/// Assert the headwords of `entries`, in order.
///
/// ```rust
/// assert_words!(outcome.entries, ["a", "able"]);
/// ```
#[macro_export]
macro_rules! assert_words {
    ($entries:expr, [$($word:expr),* $(,)?]) => {{
        let entries = &$entries;
        let actual: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();
        let expected: Vec<&str> = vec![$($word),*];
        pretty_assertions::assert_eq!(actual, expected, "headwords differ");
    }};
}

/// Assert the level of every entry, in order.
///
/// ```rust
/// assert_levels!(outcome.entries, [1, 1, 2]);
/// ```
#[macro_export]
macro_rules! assert_levels {
    ($entries:expr, [$($level:expr),* $(,)?]) => {{
        let entries = &$entries;
        let actual: Vec<u8> = entries.iter().map(|e| e.level.get()).collect();
        let expected: Vec<u8> = vec![$($level),*];
        pretty_assertions::assert_eq!(actual, expected, "levels differ");
    }};
}

/// Assert the level of a single entry.
///
/// ```rust
/// assert_level!(entry, 3);
/// ```
#[macro_export]
macro_rules! assert_level {
    ($entry:expr, $level:expr) => {{
        let entry = &$entry;
        pretty_assertions::assert_eq!(entry.level.get(), $level, "level differs: {:?}", entry);
    }};
}

/// Assert every property an emitted entry must satisfy.
pub fn assert_entry_invariants(entry: &WordEntry) {
    assert!(!entry.word.is_empty(), "word must not be empty: {entry:?}");
    assert_eq!(entry.word, entry.word.to_lowercase(), "word must be lowercase: {entry:?}");
    assert_eq!(entry.word, entry.word.trim(), "word must be trimmed: {entry:?}");
    assert!(
        !entry.word.contains(['/', '(', ')']),
        "word must not carry variants: {entry:?}"
    );
    assert!(
        (Level::MIN..=Level::MAX).contains(&entry.level.get()),
        "level out of range: {entry:?}"
    );
    assert_eq!(entry.cambridge_url, lookup_url(&entry.word), "url must derive from word: {entry:?}");
    assert!(
        entry.example_en.is_empty() && entry.example_zh.is_empty() && entry.audio_url.is_empty(),
        "reserved fields must be empty: {entry:?}"
    );
}

/// Every input line lands in exactly one bucket.
pub fn assert_lines_accounted(stats: &IngestStats) {
    assert_eq!(
        stats.accepted + stats.skipped + stats.headers + stats.blank,
        stats.lines,
        "line accounting mismatch: {stats:?}"
    );
}
