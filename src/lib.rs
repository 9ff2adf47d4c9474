//! vocab — graded vocabulary lists to normalized JSON.
//!
//! Reads a vocabulary list (level-tagged sections, delimited rows, or a table
//! with a header row), normalizes every row into a [`WordEntry`], and writes
//! the collected entries as one JSON array for the learning app.
//!
//! # Architecture
//!
//! ```text
//! Feed ──► Ingest ──► Dedupe ──► Sink
//!             │
//!             └──► Report
//! ```
//!
//! [`run`] wires the layers together; the binary adds argument parsing,
//! logging and the printed report on top.

pub mod report;

use std::io::Write;
use std::path::{Path, PathBuf};

use vocab_core::config::Config;
use vocab_core::{ingest, IngestOutcome, Result, SourceFormat};
use vocab_feeds::{Feed, STDIO_PATH};

pub use vocab_core::WordEntry;

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Name of the input (a path or `<stdin>`).
    pub source: String,
    /// Output path, or `None` when the JSON went to stdout.
    pub output: Option<PathBuf>,
    /// Size of the written file in bytes.
    pub bytes: Option<u64>,
    pub outcome: IngestOutcome,
}

/// Read the input, normalize it and write the JSON array to `output`
/// (`-` for stdout). Nothing is written when reading or parsing the input
/// fails.
pub fn run(input: Option<&Path>, output: &Path, cfg: &Config) -> Result<RunSummary> {
    let mut feed = vocab_feeds::open(input, &cfg.input)?;
    let source = feed.name();
    let text = feed.read_text()?;

    let mut opts = cfg.ingest.options()?;
    if opts.format == SourceFormat::Auto {
        if let Some(hint) = feed.format_hint() {
            opts.format = hint;
        }
    }
    tracing::info!(%source, format = %opts.format, "ingesting");

    let mut outcome = ingest(&text, &opts)?;
    outcome.dedupe(cfg.ingest.dedupe);

    if output.as_os_str() == STDIO_PATH {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        vocab_feeds::write_json_to(&mut lock, &outcome.entries)?;
        lock.flush()?;
        return Ok(RunSummary { source, output: None, bytes: None, outcome });
    }

    let bytes = vocab_feeds::write_json(output, &outcome.entries)?;
    Ok(RunSummary {
        source,
        output: Some(output.to_path_buf()),
        bytes: Some(bytes),
        outcome,
    })
}
