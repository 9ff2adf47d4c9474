//! Headword canonicalization.
//!
//! `"he (him, his, himself)"` → `"he"`, `"a/an"` → `"a"`,
//! `"agree(ment)"` → `"agree"`. Parenthesized spans are removed before the
//! slash split, always.

use once_cell::sync::Lazy;
use regex::Regex;

static PARENTHETICAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^)]*\)").unwrap());

/// Reduce a raw word token to its canonical lookup form.
///
/// Returns `None` when nothing is left, e.g. for `"(abbr.)"` or `"/"`.
pub fn canonicalize(raw: &str) -> Option<String> {
    let stripped = PARENTHETICAL.replace_all(raw, "");
    // An unclosed group runs to the end of the token.
    let stripped = match stripped.find('(') {
        Some(open) => &stripped[..open],
        None => &stripped[..],
    };
    let base = stripped.split('/').next().unwrap_or_default();
    let base = base.replace(')', "");
    let base = base.trim().to_lowercase();
    (!base.is_empty()).then_some(base)
}
