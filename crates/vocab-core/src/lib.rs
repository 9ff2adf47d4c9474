//! vocab-core — normalization core for graded vocabulary lists.
//!
//! This crate turns raw vocabulary lines into [`WordEntry`] values. It exposes
//! the normalizer building blocks as public modules so the feeds crate, the
//! binary and the integration harnesses can use them directly.
//!
//! # Architecture
//!
//! ```text
//! Feed ──► Ingest driver ──► Normalizer ──► Dedupe ──► Sink
//!              │
//!              └──► IngestStats ──► Report
//! ```
//!
//! Everything runs on one thread in a single pass over the input.

pub mod config;
pub mod dedupe;
pub mod driver;
pub mod error;
pub mod normalizer;
pub mod types;

pub use driver::{ingest, Ingest, IngestOptions, IngestOutcome, IngestStats, SkippedLine};
pub use error::{Error, Result, RowError};
pub use types::{DedupePolicy, Level, SourceFormat, UnknownLevelPolicy, WordEntry};
