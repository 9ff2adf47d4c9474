//! Dictionary lookup URL.

use super::headword::canonicalize;

/// Prefix of every lookup URL; the sanitized headword is appended.
pub const LOOKUP_BASE: &str = "https://dictionary.cambridge.org/dictionary/english-chinese-traditional/";

/// Build the lookup URL for a raw or canonical word.
///
/// The word is canonicalized first, then everything outside `[A-Za-z0-9_-]`
/// is dropped: `don't` → `dont`, `ice cream` → `icecream`.
pub fn lookup_url(word: &str) -> String {
    let base = canonicalize(word).unwrap_or_default();
    let slug: String = base
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();
    format!("{LOOKUP_BASE}{slug}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn apostrophe_is_stripped() {
        assert_eq!(lookup_url("don't"), format!("{LOOKUP_BASE}dont"));
    }

    #[test]
    fn raw_variants_are_canonicalized_first() {
        assert_eq!(lookup_url("a/an"), format!("{LOOKUP_BASE}a"));
        assert_eq!(lookup_url("He (him, his, himself)"), format!("{LOOKUP_BASE}he"));
    }

    #[test]
    fn hyphen_and_underscore_survive() {
        assert_eq!(lookup_url("T-shirt"), format!("{LOOKUP_BASE}t-shirt"));
        assert_eq!(lookup_url("ice cream"), format!("{LOOKUP_BASE}icecream"));
    }

    #[test]
    fn empty_word_yields_bare_prefix() {
        assert_eq!(lookup_url("(abbr.)"), LOOKUP_BASE);
    }

    #[test]
    fn canonical_and_raw_forms_agree() {
        for raw in ["a/an", "agree(ment)", "Monday", "o'clock"] {
            let canonical = canonicalize(raw).unwrap();
            assert_eq!(lookup_url(raw), lookup_url(&canonical));
        }
    }
}
