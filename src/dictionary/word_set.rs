//! Static in-memory dictionary.

use std::path::Path;

use log::warn;
use rustc_hash::FxHashSet;

use super::checker::SpellChecker;
use crate::core::{normalize, DEFAULT_LANGUAGE};
use crate::error::{Result, ScrambleError};

const ENGLISH_WORDS: &str = include_str!("../../assets/dictionary.txt");

/// A fixed set of known words for one language.
///
/// ## Example
///
/// ```
/// use word_scramble::dictionary::{SpellChecker, WordSet};
///
/// let words = WordSet::from_text("en", "silk\nworm\n");
///
/// assert!(words.is_word("silk", "en"));
/// assert!(!words.is_word("slik", "en"));
/// ```
#[derive(Clone, Debug)]
pub struct WordSet {
    language: String,
    words: FxHashSet<String>,
}

impl WordSet {
    /// Create an empty set for `language`.
    #[must_use]
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            words: FxHashSet::default(),
        }
    }

    /// Build a set from words, normalizing each one.
    pub fn from_words<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new(language);
        for word in words {
            set.insert(word.as_ref());
        }
        set
    }

    /// Parse newline-separated text. Blank lines are skipped.
    #[must_use]
    pub fn from_text(language: impl Into<String>, text: &str) -> Self {
        Self::from_words(language, text.lines())
    }

    /// Load a newline-separated dictionary file.
    pub fn load(language: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ScrambleError::MissingDictionary {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(language, &text))
    }

    /// The English dictionary bundled with the crate.
    #[must_use]
    pub fn english() -> Self {
        Self::from_text(DEFAULT_LANGUAGE, ENGLISH_WORDS)
    }

    /// Add a word. Returns false if it was already present or blank.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = normalize(word);
        if word.is_empty() {
            return false;
        }
        self.words.insert(word)
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
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

impl SpellChecker for WordSet {
    fn is_word(&self, word: &str, language: &str) -> bool {
        if !self.supports_language(language) {
            warn!(
                "Dictionary for '{}' asked about a '{}' word; treating '{}' as unknown",
                self.language, language, word
            );
            return false;
        }
        self.contains(word)
    }

    /// Matches the set's tag exactly or as the primary subtag, so an `"en"`
    /// set serves `"en-US"` and `"en_GB"`. Case is ignored.
    fn supports_language(&self, language: &str) -> bool {
        let primary = language.split(['-', '_']).next().unwrap_or(language);
        language.eq_ignore_ascii_case(&self.language) || primary.eq_ignore_ascii_case(&self.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_normalizes() {
        let set = WordSet::from_text("en", "Silk\n  worm \n\n\nMILK\n");

        assert_eq!(set.len(), 3);
        assert!(set.contains("silk"));
        assert!(set.contains("worm"));
        assert!(set.contains("milk"));
        assert!(!set.contains(""));
    }

    #[test]
    fn test_insert_duplicate() {
        let mut set = WordSet::new("en");

        assert!(set.insert("silk"));
        assert!(!set.insert("SILK"));
        assert!(!set.insert("   "));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_is_word_checks_language() {
        let set = WordSet::from_words("en", ["silk"]);

        assert!(set.is_word("silk", "en"));
        assert!(!set.is_word("silk", "fr"));
        assert!(!set.is_word("soie", "en"));
    }

    #[test]
    fn test_regional_tags_use_primary_language() {
        let set = WordSet::from_words("en", ["silk"]);

        assert!(set.supports_language("en-US"));
        assert!(set.supports_language("EN_gb"));
        assert!(set.is_word("silk", "en-US"));
        assert!(!set.supports_language("fr-CA"));
        assert!(!set.supports_language("eng"));
        assert!(!set.is_word("silk", "fr-CA"));
    }

    #[test]
    fn test_english_dictionary() {
        let set = WordSet::english();

        assert_eq!(set.language(), "en");
        assert!(!set.is_empty());
        assert!(set.is_word("silk", "en"));
        assert!(set.is_word("worm", "en"));
        for word in ["rows", "owls", "silo", "milks", "swirl", "works", "worms", "slim"] {
            assert!(set.is_word(word, "en"), "{word} missing from dictionary");
        }
    }

    #[test]
    fn test_load_missing_file() {
        let result = WordSet::load("en", "/nonexistent/dictionary.txt");
        assert!(matches!(result, Err(ScrambleError::MissingDictionary { .. })));
    }

    #[test]
    fn test_checker_through_box() {
        let boxed: Box<dyn SpellChecker> = Box::new(WordSet::from_words("en", ["silk"]));
        assert!(boxed.is_word("silk", "en"));
    }
}
