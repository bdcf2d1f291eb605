//! Game configuration.
//!
//! Front ends configure the game at startup with a `ScrambleConfig`. Word
//! sources are passed separately to the builder; the config only carries
//! plain values so it can be serialized alongside a session.

use serde::{Deserialize, Serialize};

/// Language tag passed to the spell checker when none is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Shortest candidate, in characters, that counts as a word.
pub const MIN_WORD_LENGTH: usize = 3;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrambleConfig {
    /// Language tag handed to the spell checker with every lookup.
    pub language: String,

    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            seed: None,
        }
    }
}

impl ScrambleConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the spell-check language tag.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Fix the RNG seed for reproducible rounds.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
