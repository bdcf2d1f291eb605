//! Root-word list asset.

use std::path::Path;

use crate::core::normalize;
use crate::error::{Result, ScrambleError};

const START_WORDS: &str = include_str!("../../assets/start.txt");

/// Candidate root words, one per line in the asset file.
///
/// Blank lines, including the one a trailing newline leaves behind, are
/// dropped so they can never be picked as a root word.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Build a list from words, normalizing each one and dropping blanks.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| normalize(w.as_ref()))
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Parse newline-separated text.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    /// Load the word list file. A missing or unreadable file is fatal.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ScrambleError::MissingWordList {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// The start words bundled with the crate.
    #[must_use]
    pub fn bundled() -> Self {
        Self::parse(START_WORDS)
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
