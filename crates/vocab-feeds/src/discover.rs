//! Input discovery: the first configured candidate that exists.

use std::path::{Path, PathBuf};

use vocab_core::{Error, Result};

/// Return `dir/<candidate>` for the first candidate that is a file.
pub fn discover(dir: &Path, candidates: &[String]) -> Result<PathBuf> {
    let looked_for: Vec<PathBuf> = candidates.iter().map(|c| dir.join(c)).collect();
    match looked_for.iter().find(|p| p.is_file()) {
        Some(found) => Ok(found.clone()),
        None => Err(Error::MissingSource { looked_for }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names() -> Vec<String> {
        vec!["vocab_data.txt".into(), "words_input.txt".into()]
    }

    #[test]
    fn candidates_are_tried_in_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("words_input.txt"), "").unwrap();
        std::fs::write(dir.path().join("vocab_data.txt"), "").unwrap();
        assert_eq!(discover(dir.path(), &names()).unwrap(), dir.path().join("vocab_data.txt"));
    }

    #[test]
    fn directories_do_not_count() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("vocab_data.txt")).unwrap();
        std::fs::write(dir.path().join("words_input.txt"), "").unwrap();
        assert_eq!(discover(dir.path(), &names()).unwrap(), dir.path().join("words_input.txt"));
    }

    #[test]
    fn nothing_found_lists_every_candidate() {
        let dir = tempfile::tempdir().unwrap();
        match discover(dir.path(), &names()) {
            Err(Error::MissingSource { looked_for }) => assert_eq!(
                looked_for,
                vec![dir.path().join("vocab_data.txt"), dir.path().join("words_input.txt")]
            ),
            other => panic!("expected MissingSource, got {other:?}"),
        }
    }
}
