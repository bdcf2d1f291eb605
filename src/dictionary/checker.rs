//! Spell-check capability.
//!
//! The validator only needs to know whether a word exists in a language.
//! Anything that answers that question can back the dictionary check: the
//! in-memory [`WordSet`](super::WordSet), a platform spelling service, or a
//! remote lookup.

/// Decides whether a word is a recognized word of a language.
///
/// ## Implementation Notes
///
/// - `word` is already lower-cased and trimmed
/// - `language` is a tag such as `"en"`
/// - Must be deterministic within a round, or a word could be accepted and
///   later look unknown
pub trait SpellChecker {
    /// Returns true if `word` is spelled correctly in `language`.
    fn is_word(&self, word: &str, language: &str) -> bool;

    /// Returns false if this checker can't answer for `language` at all.
    ///
    /// Checked once when a game is built, so a game can't start with a
    /// dictionary that would reject every word.
    fn supports_language(&self, _language: &str) -> bool {
        true
    }
}

impl<T: SpellChecker + ?Sized> SpellChecker for &T {
    fn is_word(&self, word: &str, language: &str) -> bool {
        (**self).is_word(word, language)
    }

    fn supports_language(&self, language: &str) -> bool {
        (**self).supports_language(language)
    }
}

impl<T: SpellChecker + ?Sized> SpellChecker for Box<T> {
    fn is_word(&self, word: &str, language: &str) -> bool {
        (**self).is_word(word, language)
    }

    fn supports_language(&self, language: &str) -> bool {
        (**self).supports_language(language)
    }
}
