//! vocab-feeds — input sources and the output sink for vocab.
//!
//! Each feed reads a whole vocabulary list into memory as UTF-8 text. The
//! sink writes the collected entries as one pretty-printed JSON array.

pub mod discover;
pub mod file;
pub mod sink;
pub mod stdin;

use std::path::Path;

use vocab_core::config::InputConfig;
use vocab_core::{Result, SourceFormat};

pub use discover::discover;
pub use file::FileFeed;
pub use sink::{write_json, write_json_to};
pub use stdin::ReaderFeed;

/// Path value that selects stdin for input or stdout for output.
pub const STDIO_PATH: &str = "-";

/// Trait implemented by each input source.
pub trait Feed {
    /// Name used in logs and the report (a path, or `<stdin>`).
    fn name(&self) -> String;

    /// Format implied by the source itself, e.g. a `.csv` extension.
    fn format_hint(&self) -> Option<SourceFormat> {
        None
    }

    /// Read the whole source. A leading byte-order mark is removed.
    fn read_text(&mut self) -> Result<String>;
}

/// Open the input: `-` for stdin, an explicit path, or the first configured
/// candidate found in the search directory.
pub fn open(input: Option<&Path>, cfg: &InputConfig) -> Result<Box<dyn Feed>> {
    match input {
        Some(path) if path.as_os_str() == STDIO_PATH => Ok(Box::new(stdin::stdin())),
        Some(path) => Ok(Box::new(FileFeed::open(path)?)),
        None => {
            let path = discover(&cfg.search_dir, &cfg.candidates)?;
            tracing::info!(path = %path.display(), "found input file");
            Ok(Box::new(FileFeed::open(&path)?))
        }
    }
}

pub(crate) fn strip_bom(text: String) -> String {
    match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocab_core::Error;

    #[test]
    fn bom_is_removed_once() {
        assert_eq!(strip_bom("\u{feff}1\ta".to_string()), "1\ta");
        assert_eq!(strip_bom("plain".to_string()), "plain");
    }

    #[test]
    fn open_falls_back_to_discovery() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("words_input.txt"), "第一級\napple n.\n").unwrap();
        let cfg = InputConfig {
            search_dir: dir.path().to_path_buf(),
            candidates: vec!["vocab_data.txt".into(), "words_input.txt".into()],
        };
        let mut feed = open(None, &cfg).unwrap();
        assert!(feed.name().ends_with("words_input.txt"));
        assert_eq!(feed.read_text().unwrap(), "第一級\napple n.\n");
    }

    #[test]
    fn open_missing_explicit_path() {
        let cfg = InputConfig::default();
        let err = open(Some(Path::new("/definitely/not/here.txt")), &cfg).err().unwrap();
        assert!(matches!(err, Error::MissingSource { .. }));
    }
}
