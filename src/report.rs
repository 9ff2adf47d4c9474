//! Operator report printed after a run.

use std::fmt::Write;

use crate::RunSummary;

/// Render the run summary: counts, per-level totals, the first skipped lines
/// and where the output went.
pub fn render(summary: &RunSummary) -> String {
    let stats = &summary.outcome.stats;
    let mut out = String::new();

    let _ = writeln!(out, "source: {} ({})", summary.source, summary.outcome.format);
    let _ = writeln!(
        out,
        "read {} lines: {} words, {} headers, {} skipped, {} blank",
        stats.lines, stats.accepted, stats.headers, stats.skipped, stats.blank
    );
    if stats.duplicates_removed > 0 {
        let _ = writeln!(out, "removed {} duplicate words", stats.duplicates_removed);
    }
    for (level, count) in &stats.per_level {
        let _ = writeln!(out, "level {level}: {count}");
    }

    if !stats.skipped_preview.is_empty() {
        let _ = writeln!(out, "skipped lines (first {}):", stats.skipped_preview.len());
        for skipped in &stats.skipped_preview {
            let _ = writeln!(
                out,
                "  line {}: {} ({})",
                skipped.line_no,
                preview(&skipped.text),
                skipped.reason
            );
        }
        let rest = stats.skipped.saturating_sub(stats.skipped_preview.len());
        if rest > 0 {
            let _ = writeln!(out, "  ... and {rest} more");
        }
    }

    let words = summary.outcome.entries.len();
    match (&summary.output, summary.bytes) {
        (Some(path), Some(bytes)) => {
            let _ = writeln!(
                out,
                "saved {words} words to {} ({:.2} KB)",
                path.display(),
                bytes as f64 / 1024.0
            );
        }
        _ => {
            let _ = writeln!(out, "wrote {words} words to stdout");
        }
    }
    out
}

/// First 60 characters of a skipped line.
fn preview(text: &str) -> String {
    const MAX_CHARS: usize = 60;
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(MAX_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
