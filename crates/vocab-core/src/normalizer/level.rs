//! Level markers: bare digits, Chinese numerals, and `第X級` section headers.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::RowError;
use crate::types::Level;

/// Checked in order; the first level whose numeral or digit appears wins.
const MARKERS: [(char, char); 6] = [
    ('一', '1'),
    ('二', '2'),
    ('三', '3'),
    ('四', '4'),
    ('五', '5'),
    ('六', '6'),
];

/// The character every level header and level column label carries.
pub const LEVEL_MARK: char = '級';

static LEVEL_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"第\s*([一二三四五六1-6])\s*級").unwrap());

/// Resolve a level token such as `"3"`, `"第三級"` or `"一"`.
///
/// An all-digit token in 1..=6 is read as a number. Anything else, including
/// numbers outside that range, is tested for containment of each level's
/// numeral or digit, lowest first, so `"10"` reads as level 1.
pub fn parse_level(token: &str) -> Result<Level, RowError> {
    let token = token.trim();
    let unrecognized = || RowError::UnrecognizedLevel(token.to_string());

    if let Some(level) = token.parse::<u8>().ok().and_then(Level::new) {
        return Ok(level);
    }

    MARKERS
        .iter()
        .zip(Level::all())
        .find(|((numeral, digit), _)| token.contains(*numeral) || token.contains(*digit))
        .map(|(_, level)| level)
        .ok_or_else(unrecognized)
}

/// Recognise a whole line as a level section header (`第三級`, `第 2 級 單字`).
pub fn parse_level_header(line: &str) -> Option<Level> {
    let caps = LEVEL_HEADER.captures(line.trim())?;
    parse_level(caps.get(1)?.as_str()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn level(n: u8) -> Level {
        Level::new(n).unwrap()
    }

    #[rstest]
    #[case("3", 3)]
    #[case(" 6 ", 6)]
    #[case("第三級", 3)]
    #[case("一", 1)]
    #[case("第1級", 1)]
    #[case("Level 5", 5)]
    #[case("六級", 6)]
    #[case("10", 1)]
    #[case("12", 1)]
    #[case("63", 3)]
    fn recognised_tokens(#[case] token: &str, #[case] expected: u8) {
        assert_eq!(parse_level(token), Ok(level(expected)));
    }

    #[rstest]
    #[case("foo")]
    #[case("")]
    #[case("0")]
    #[case("7")]
    #[case("90")]
    #[case("第十級")]
    #[case("級別")]
    fn unrecognised_tokens(#[case] token: &str) {
        assert_eq!(parse_level(token), Err(RowError::UnrecognizedLevel(token.trim().to_string())));
    }

    #[test]
    fn lower_level_wins_when_several_markers_appear() {
        assert_eq!(parse_level("二三"), Ok(level(2)));
        assert_eq!(parse_level("三 or 2"), Ok(level(2)));
    }

    #[rstest]
    #[case("第一級", Some(1))]
    #[case("  第四級  ", Some(4))]
    #[case("第 2 級", Some(2))]
    #[case("學測 第六級 單字", Some(6))]
    #[case("第七級", None)]
    #[case("級別", None)]
    #[case("a/an art.", None)]
    #[case("", None)]
    fn level_headers(#[case] line: &str, #[case] expected: Option<u8>) {
        assert_eq!(parse_level_header(line), expected.map(level));
    }
}
