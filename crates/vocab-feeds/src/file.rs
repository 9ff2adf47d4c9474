//! File feed.

use std::path::{Path, PathBuf};

use vocab_core::{Error, Result, SourceFormat};

use crate::{strip_bom, Feed};

/// Workbook extensions that need a spreadsheet reader.
const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "ods"];

#[derive(Debug, Clone)]
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    /// Check the path up front so a missing file or a workbook fails before
    /// any work is done.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::MissingSource { looked_for: vec![path.to_path_buf()] });
        }
        if is_workbook(path) {
            return Err(Error::DependencyMissing { path: path.to_path_buf() });
        }
        Ok(Self { path: path.to_path_buf() })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Feed for FileFeed {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn format_hint(&self) -> Option<SourceFormat> {
        match extension(&self.path).as_deref() {
            Some("csv") => Some(SourceFormat::Tabular),
            _ => None,
        }
    }

    fn read_text(&mut self) -> Result<String> {
        let text = std::fs::read_to_string(&self.path)?;
        tracing::debug!(path = %self.path.display(), bytes = text.len(), "read input file");
        Ok(strip_bom(text))
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}

fn is_workbook(path: &Path) -> bool {
    extension(path).is_some_and(|e| WORKBOOK_EXTENSIONS.contains(&e.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_and_strips_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab_data.txt");
        std::fs::write(&path, "\u{feff}1\ta/an\tart.\ta/an (art.)\t一個").unwrap();
        let mut feed = FileFeed::open(&path).unwrap();
        assert_eq!(feed.read_text().unwrap(), "1\ta/an\tart.\ta/an (art.)\t一個");
        assert_eq!(feed.format_hint(), None);
    }

    #[test]
    fn csv_hints_tabular() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Vocab.CSV");
        std::fs::write(&path, "level,word\n").unwrap();
        assert_eq!(FileFeed::open(&path).unwrap().format_hint(), Some(SourceFormat::Tabular));
    }

    #[test]
    fn workbook_needs_a_spreadsheet_reader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("學測6000字.xlsx");
        std::fs::write(&path, b"PK\x03\x04").unwrap();
        assert!(matches!(FileFeed::open(&path), Err(Error::DependencyMissing { .. })));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileFeed::open(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, Error::MissingSource { looked_for } if looked_for.len() == 1));
    }
}
