//! Configuration types for vocab.
//!
//! [`Config::load`] layers, lowest priority first: the embedded defaults,
//! `~/.config/vocab/config.toml`, an explicit file, and `VOCAB_*` environment
//! variables (`VOCAB_INGEST__UNKNOWN_LEVEL=carry`). [`Config::defaults`]
//! returns the embedded defaults without touching the filesystem.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::driver::IngestOptions;
use crate::error::Result;
use crate::types::{DedupePolicy, Level, SourceFormat, UnknownLevelPolicy};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[ingest]
format        = "auto"
unknown_level = "drop"
default_level = 1
skip_preview  = 10
dedupe        = "none"

[input]
search_dir = "."
candidates = ["vocab_data.txt", "words_input.txt", "vocab_data.csv"]

[output]
path = "assets/data/words.json"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ingest: IngestConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[ingest]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct IngestConfig {
    #[serde(default)]
    pub format: SourceFormat,
    #[serde(default)]
    pub unknown_level: UnknownLevelPolicy,
    #[serde(default = "default_level")]
    pub default_level: u8,
    /// How many skipped lines to keep for the report.
    #[serde(default = "default_skip_preview")]
    pub skip_preview: usize,
    #[serde(default)]
    pub dedupe: DedupePolicy,
}

fn default_level() -> u8 { 1 }
fn default_skip_preview() -> usize { 10 }

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            format: SourceFormat::default(),
            unknown_level: UnknownLevelPolicy::default(),
            default_level: default_level(),
            skip_preview: default_skip_preview(),
            dedupe: DedupePolicy::default(),
        }
    }
}

impl IngestConfig {
    /// Validated driver options. Fails if `default_level` is outside 1..=6.
    pub fn options(&self) -> Result<IngestOptions> {
        Ok(IngestOptions {
            format: self.format,
            unknown_level: self.unknown_level,
            default_level: Level::try_from(self.default_level)?,
            skip_preview: self.skip_preview,
        })
    }
}

/// `[input]` section: where to look when no input path is given.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_search_dir")]
    pub search_dir: PathBuf,
    /// File names tried in order inside `search_dir`.
    #[serde(default = "default_candidates")]
    pub candidates: Vec<String>,
}

fn default_search_dir() -> PathBuf { PathBuf::from(".") }
fn default_candidates() -> Vec<String> {
    vec!["vocab_data.txt".to_string(), "words_input.txt".to_string(), "vocab_data.csv".to_string()]
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            search_dir: default_search_dir(),
            candidates: default_candidates(),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

fn default_output_path() -> PathBuf { PathBuf::from("assets/data/words.json") }

impl Default for OutputConfig {
    fn default() -> Self {
        Self { path: default_output_path() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the layered configuration. `explicit` must exist if given; the
    /// user config file is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(config_path().as_path()).required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let cfg: Self = builder
            .add_source(
                config::Environment::with_prefix("VOCAB")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        tracing::debug!(?cfg, "configuration loaded");
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("vocab")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
