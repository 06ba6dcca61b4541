use crate::models::Deck;
use crate::serialize::serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Deck file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a deck document and return its text.
pub fn read_deck(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write a deck to `path` in the canonical serialized form.
pub fn export_deck(path: &Path, deck: &Deck) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }
    fs::write(path, serialize(deck)).map_err(IoError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse;
    use crate::tests::create_deck_file;
    use tempfile::TempDir;

    #[test]
    fn test_read_deck_success() {
        let dir = TempDir::new().unwrap();
        let path = create_deck_file(&dir, "talk.md", "# Intro\nChapter: A\n");

        let content = read_deck(&path).unwrap();
        assert_eq!(content, "# Intro\nChapter: A\n");
    }

    #[test]
    fn test_read_deck_not_found() {
        let dir = TempDir::new().unwrap();
        let result = read_deck(&dir.path().join("missing.md"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_export_then_read_round_trips() {
        let dir = TempDir::new().unwrap();
        let deck = parse("# Intro\nChapter: A\nBody:\n- one\n---\n# Next\nChapter: A\n");

        let out = dir.path().join("export.md");
        export_deck(&out, &deck).unwrap();

        let reparsed = parse(&read_deck(&out).unwrap());
        assert_eq!(reparsed, deck);
    }

    #[test]
    fn test_export_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let deck = parse("# Intro\nChapter: A\n");

        let out = dir.path().join("nested").join("deep").join("export.md");
        export_deck(&out, &deck).unwrap();

        assert!(out.exists());
    }
}
