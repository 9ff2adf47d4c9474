//! Column sniffing for tabular input with a header row.
//!
//! Each role has an ordered list of header predicates. The first header that
//! satisfies any predicate of a role is taken for that role; roles left
//! unassigned fall back to fixed positions. When no role matches by name, or
//! the line holds a bare number, the first line is not a header at all and the
//! map is purely positional.

use std::borrow::Cow;

use crate::error::{Error, Result};

/// A header predicate: CJK labels are matched as substrings of the raw header,
/// English labels as substrings of the lowercased header.
struct Candidates {
    labels: &'static [&'static str],
    english: &'static [&'static str],
}

impl Candidates {
    fn matches(&self, header: &str) -> bool {
        let lower = header.to_lowercase();
        self.labels.iter().any(|l| header.contains(l)) || self.english.iter().any(|e| lower.contains(e))
    }

    fn position(&self, headers: &[String]) -> Option<usize> {
        headers.iter().position(|h| self.matches(h))
    }
}

const LEVEL: Candidates = Candidates { labels: &["級"], english: &["level"] };
const WORD: Candidates = Candidates { labels: &["單字"], english: &["word"] };
const PART_OF_SPEECH: Candidates = Candidates {
    labels: &["屬性", "詞性"],
    english: &["pos", "part"],
};
const TRANSLATION: Candidates = Candidates {
    labels: &["中文", "翻譯"],
    english: &["translation", "chinese"],
};

/// Where each field lives in a tabular row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub delimiter: char,
    pub headers: Vec<String>,
    pub level: Option<usize>,
    pub word: usize,
    pub part_of_speech: Option<usize>,
    pub translation: Option<usize>,
    /// Whether any role was found by header name. A map without named roles
    /// came from a data row and that row must still be read.
    pub named: bool,
}

impl ColumnMap {
    /// Sniff the delimiter and the column roles from a header line.
    pub fn from_header_line(line: &str) -> Result<Self> {
        let delimiter = if line.contains('\t') { '\t' } else { ',' };
        let headers: Vec<String> = split_cells(line, delimiter).into_iter().map(Cow::into_owned).collect();
        Self::sniff(headers, delimiter)
    }

    pub fn sniff(headers: Vec<String>, delimiter: char) -> Result<Self> {
        let n = headers.len();
        let positional = |idx: usize| (n > idx).then_some(idx);

        // Header rows carry no bare numbers; data rows carry their level as one.
        let bare_number = headers
            .iter()
            .any(|h| !h.is_empty() && h.chars().all(|c| c.is_ascii_digit()));
        let by_name = if bare_number {
            [None; 4]
        } else {
            [
                LEVEL.position(&headers),
                WORD.position(&headers),
                PART_OF_SPEECH.position(&headers),
                TRANSLATION.position(&headers),
            ]
        };
        let named = by_name.iter().any(Option::is_some);
        let [level, word, part_of_speech, translation] = by_name;

        let level = level.or_else(|| positional(0));
        let word = word.or_else(|| positional(1));
        let part_of_speech = part_of_speech.or_else(|| positional(2));
        let translation = translation.or_else(|| positional(4)).or_else(|| positional(3));

        let Some(word) = word else {
            return Err(Error::NoWordColumn(headers));
        };

        tracing::debug!(?level, word, ?part_of_speech, ?translation, named, "sniffed columns");

        Ok(Self { delimiter, headers, level, word, part_of_speech, translation, named })
    }

    /// Split a data row with the sniffed delimiter.
    pub fn split<'a>(&self, line: &'a str) -> Vec<Cow<'a, str>> {
        split_cells(line, self.delimiter)
    }
}

/// Cell `idx` of a row, or `""` if the row is short.
pub fn cell<'a>(cells: &'a [Cow<'_, str>], idx: Option<usize>) -> &'a str {
    idx.and_then(|i| cells.get(i)).map_or("", |c| c.as_ref())
}

/// Split a row into trimmed cells. A cell that opens with `"` runs to the
/// matching closing quote, so it may contain the delimiter; `""` inside it is
/// a literal quote. Text between a closing quote and the next delimiter is
/// dropped.
fn split_cells(line: &str, delimiter: char) -> Vec<Cow<'_, str>> {
    let mut cells = Vec::new();
    let mut rest = line;
    loop {
        let start = rest.trim_start_matches(|c: char| c.is_whitespace() && c != delimiter);
        let (cell, after) = match start.strip_prefix('"') {
            Some(body) => quoted_cell(body),
            None => match start.find(delimiter) {
                Some(end) => (Cow::Borrowed(start[..end].trim()), &start[end..]),
                None => (Cow::Borrowed(start.trim()), ""),
            },
        };
        cells.push(cell);
        match after.find(delimiter) {
            Some(end) => rest = &after[end + delimiter.len_utf8()..],
            None => return cells,
        }
    }
}

/// Split the text after an opening quote into the unescaped cell and the text
/// after the closing quote. An unterminated quote runs to the end of the line.
fn quoted_cell(body: &str) -> (Cow<'_, str>, &str) {
    let mut escaped = false;
    let mut chars = body.char_indices();
    while let Some((i, c)) = chars.next() {
        if c != '"' {
            continue;
        }
        if body[i + 1..].starts_with('"') {
            escaped = true;
            chars.next();
            continue;
        }
        return (unescape(&body[..i], escaped), &body[i + 1..]);
    }
    (unescape(body, escaped), "")
}

fn unescape(raw: &str, escaped: bool) -> Cow<'_, str> {
    if escaped {
        Cow::Owned(raw.replace("\"\"", "\"").trim().to_string())
    } else {
        Cow::Borrowed(raw.trim())
    }
}
