//! Round state: root word, accepted words and score.
//!
//! The score is the length of the accepted list, so
//! `score == accepted_words().len()` always holds. Deserialized sessions are
//! checked too: a payload that lists a word twice, lists the root word or
//! lists a blank word is rejected.
//!
//! The accepted list is an `im::Vector`, so front ends can take snapshots
//! with an O(1) clone.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::rng::RoundRng;
use crate::error::{Result, ScrambleError};

/// State of the round in progress.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionData")]
pub struct Session {
    root_word: String,

    /// Newest first.
    accepted_words: Vector<String>,
}

/// Unchecked wire form of a [`Session`].
#[derive(Deserialize)]
struct SessionData {
    root_word: String,
    accepted_words: Vector<String>,
}

impl TryFrom<SessionData> for Session {
    type Error = String;

    fn try_from(data: SessionData) -> std::result::Result<Self, Self::Error> {
        let mut seen = FxHashSet::default();
        for word in &data.accepted_words {
            if word.is_empty() {
                return Err("accepted words contain a blank word".to_string());
            }
            if *word == data.root_word {
                return Err(format!("accepted words contain the root word '{word}'"));
            }
            if !seen.insert(word.as_str()) {
                return Err(format!("'{word}' is accepted more than once"));
            }
        }

        Ok(Self {
            root_word: data.root_word,
            accepted_words: data.accepted_words,
        })
    }
}

impl Session {
    /// Create a session already playing `root_word`.
    #[must_use]
    pub fn with_root_word(root_word: impl Into<String>) -> Self {
        Self {
            root_word: root_word.into(),
            accepted_words: Vector::new(),
        }
    }

    /// Start a new round with a root word picked uniformly from `word_list`.
    ///
    /// Clears the accepted words and resets the score. An empty list is a
    /// missing required asset and leaves the session untouched.
    pub fn start_round<S: AsRef<str>>(&mut self, word_list: &[S], rng: &mut RoundRng) -> Result<()> {
        let root_word = rng.choose(word_list).ok_or(ScrambleError::EmptyWordList)?;

        self.root_word = root_word.as_ref().to_string();
        self.accepted_words.clear();
        Ok(())
    }

    /// Record a word that already passed validation.
    pub fn accept_word(&mut self, word: impl Into<String>) {
        self.accepted_words.push_front(word.into());
    }

    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, newest first.
    #[must_use]
    pub fn accepted_words(&self) -> &Vector<String> {
        &self.accepted_words
    }

    /// One point per accepted word.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.accepted_words.len() as u32
    }

    /// Check if `word` was already accepted this round.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.accepted_words.iter().any(|w| w == word)
    }
}
