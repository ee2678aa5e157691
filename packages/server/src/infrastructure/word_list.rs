//! Word list loading.
//!
//! The word list is a JSON array of strings, read once at startup.

use std::path::Path;

use thiserror::Error;

use crate::domain::{ValidationError, Word, WordList};

/// Errors raised while loading the word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse word list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Empty(#[from] ValidationError),
}

/// Load the word list from a JSON file
pub fn load_word_list(path: impl AsRef<Path>) -> Result<WordList, WordListError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let list = parse_word_list(&json)?;
    tracing::info!("Loaded {} words from {}", list.len(), path.display());
    Ok(list)
}

/// Parse a JSON array of strings into a word list
pub fn parse_word_list(json: &str) -> Result<WordList, WordListError> {
    let words: Vec<String> = serde_json::from_str(json)?;
    Ok(WordList::new(words.into_iter().map(Word::from).collect())?)
}
