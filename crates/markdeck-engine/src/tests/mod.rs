//! Shared helpers for unit tests across the engine.

use crate::models::Slide;
use std::path::PathBuf;
use tempfile::TempDir;

/// A minimal valid slide in the given chapter.
pub fn slide_in_chapter(id: u32, chapter: &str) -> Slide {
    Slide::new(id, chapter, format!("Slide {id}"))
}

/// Write a deck file into a temp directory and return its path.
pub fn create_deck_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}
