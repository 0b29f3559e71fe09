//! Root-word lists
//!
//! The session picks its root word from a list supplied by a
//! [`WordListSource`]. The crate bundles a list of eight-letter start words;
//! players can point at their own file instead.

use once_cell::sync::Lazy;
use std::path::PathBuf;

/// Embedded start words, one per line
static START_WORDS_DATA: &str = include_str!("../../data/start.txt");

static START_WORDS: Lazy<Vec<String>> = Lazy::new(|| parse_word_list(START_WORDS_DATA));

/// Errors that can occur while loading a word list.
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("could not read word list {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Supplier of candidate root words.
pub trait WordListSource: Send + Sync {
    /// Load the full list. An empty list is not an error here; session start
    /// falls back to the default root word for both.
    fn load_word_list(&self) -> Result<Vec<String>, WordListError>;
}

/// The start words compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledStartWords;

impl WordListSource for BundledStartWords {
    fn load_word_list(&self) -> Result<Vec<String>, WordListError> {
        Ok(START_WORDS.clone())
    }
}

/// A newline-separated word list on disk.
#[derive(Debug, Clone)]
pub struct FileWordList {
    path: PathBuf,
}

impl FileWordList {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordListSource for FileWordList {
    fn load_word_list(&self) -> Result<Vec<String>, WordListError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| WordListError::Read {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("read word list from {}", self.path.display());
        Ok(parse_word_list(&text))
    }
}

/// A fixed in-memory list.
impl WordListSource for Vec<String> {
    fn load_word_list(&self) -> Result<Vec<String>, WordListError> {
        Ok(self.clone())
    }
}

/// Split newline-separated text into normalized words, skipping blank lines.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(super::normalize)
        .filter(|w| !w.is_empty())
        .collect()
}
