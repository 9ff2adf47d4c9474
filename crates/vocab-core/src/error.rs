//! Error taxonomy.
//!
//! [`Error`] covers run-level failures that end a run before any output is
//! written. [`RowError`] covers a single line that could not be turned into an
//! entry; the driver counts those and moves on.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("input not found; looked for {}", join_paths(.looked_for))]
    MissingSource { looked_for: Vec<PathBuf> },
    #[error("{} is a spreadsheet workbook and cannot be read directly", .path.display())]
    DependencyMissing { path: PathBuf },
    #[error("could not identify a word column in header {0:?}")]
    NoWordColumn(Vec<String>),
    #[error("error reading input: {0}")]
    Io(#[from] std::io::Error),
    #[error("error writing json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("invalid configuration: {0}")]
    Level(#[from] LevelOutOfRange),
}

impl Error {
    /// Operator-facing advice printed alongside the error, if any.
    pub fn guidance(&self) -> Option<&'static str> {
        match self {
            Error::MissingSource { .. } => Some(
                "save the vocabulary list to one of the paths above, or pass --input <file> (use - for stdin)",
            ),
            Error::DependencyMissing { .. } => Some(
                "export the sheet as CSV (UTF-8) and pass that file instead; columns are matched by header name",
            ),
            Error::NoWordColumn(_) => Some(
                "name the word column \"word\" or \"單字\", or put it second",
            ),
            _ => None,
        }
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Why a single line produced no entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    #[error("line does not match a recognised row shape")]
    MalformedRow,
    #[error("line precedes any level header")]
    OutsideLevel,
    #[error("unrecognised level token {0:?}")]
    UnrecognizedLevel(String),
    #[error("word token {0:?} has no base word")]
    NoBaseWord(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("level {0} is outside 1..=6")]
pub struct LevelOutOfRange(pub u8);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} {value:?}; expected one of {}", .expected.join(", "))]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static [&'static str],
}
