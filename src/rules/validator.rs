//! Candidate validation.
//!
//! A candidate is checked against the round in a fixed order, stopping at
//! the first failure:
//!
//! 1. Originality: not accepted already this round
//! 2. Letter availability: buildable from the root word's letters
//! 3. Dictionary membership: the spell checker knows it
//! 4. Minimum length: at least three letters
//! 5. Not the root word itself
//!
//! The order matters: "ab" against root "silkworm" is `ImpossibleWord`,
//! not `TooShort`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{can_build_from, letter_count, Session, MIN_WORD_LENGTH};
use crate::dictionary::SpellChecker;

/// Why a candidate was rejected.
///
/// Rejections are never fatal. The session is left untouched and the
/// player can try again straight away.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordError {
    #[error("Word used already: Be original!")]
    DuplicateWord,
    #[error("Word not possible: That doesn't work!")]
    ImpossibleWord,
    #[error("Word not recognized: That word doesn't exist!")]
    UnknownWord,
    #[error("Word too short: Must be at least 3 letters!")]
    TooShort,
    #[error("Word not allowed: Can't use the root word!")]
    IsRootWord,
}

impl WordError {
    /// Alert title shown to the player.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            WordError::DuplicateWord => "Word used already",
            WordError::ImpossibleWord => "Word not possible",
            WordError::UnknownWord => "Word not recognized",
            WordError::TooShort => "Word too short",
            WordError::IsRootWord => "Word not allowed",
        }
    }

    /// Alert message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            WordError::DuplicateWord => "Be original!",
            WordError::ImpossibleWord => "That doesn't work!",
            WordError::UnknownWord => "That word doesn't exist!",
            WordError::TooShort => "Must be at least 3 letters!",
            WordError::IsRootWord => "Can't use the root word!",
        }
    }

    #[must_use]
    pub fn alert(self) -> Alert {
        Alert {
            title: self.title().to_string(),
            message: self.message().to_string(),
        }
    }
}

/// Title and message pair for the front end to display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// One step of the validation chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Check {
    Original,
    Possible,
    Real,
    LongEnough,
    NotRoot,
}

impl Check {
    /// All checks, in evaluation order.
    pub const ORDER: [Check; 5] = [
        Check::Original,
        Check::Possible,
        Check::Real,
        Check::LongEnough,
        Check::NotRoot,
    ];

    /// Error reported when this check fails.
    #[must_use]
    pub const fn error(self) -> WordError {
        match self {
            Check::Original => WordError::DuplicateWord,
            Check::Possible => WordError::ImpossibleWord,
            Check::Real => WordError::UnknownWord,
            Check::LongEnough => WordError::TooShort,
            Check::NotRoot => WordError::IsRootWord,
        }
    }

    fn passes<S: SpellChecker + ?Sized>(self, word: &str, ctx: &Validator<'_, S>) -> bool {
        match self {
            Check::Original => is_original(word, ctx.session),
            Check::Possible => is_possible(word, ctx.session.root_word()),
            Check::Real => is_real(word, ctx.checker, ctx.language),
            Check::LongEnough => is_long_enough(word),
            Check::NotRoot => is_not_root(word, ctx.session.root_word()),
        }
    }
}

/// Validates candidates against one round.
pub struct Validator<'a, S: SpellChecker + ?Sized> {
    session: &'a Session,
    checker: &'a S,
    language: &'a str,
}

impl<'a, S: SpellChecker + ?Sized> Validator<'a, S> {
    #[must_use]
    pub fn new(session: &'a Session, checker: &'a S, language: &'a str) -> Self {
        Self {
            session,
            checker,
            language,
        }
    }

    /// Run every check in order and report the first failure.
    ///
    /// `word` must already be lower-cased and trimmed.
    pub fn validate(&self, word: &str) -> Result<(), WordError> {
        for check in Check::ORDER {
            if !check.passes(word, self) {
                return Err(check.error());
            }
        }
        Ok(())
    }
}

/// The word hasn't been accepted yet this round.
#[must_use]
pub fn is_original(word: &str, session: &Session) -> bool {
    !session.contains(word)
}

/// Every letter of the word can be drawn from the root, one use per letter.
#[must_use]
pub fn is_possible(word: &str, root_word: &str) -> bool {
    can_build_from(word, root_word)
}

/// The spell checker recognizes the word.
#[must_use]
pub fn is_real<S: SpellChecker + ?Sized>(word: &str, checker: &S, language: &str) -> bool {
    checker.is_word(word, language)
}

#[must_use]
pub fn is_long_enough(word: &str) -> bool {
    letter_count(word) >= MIN_WORD_LENGTH
}

#[must_use]
pub fn is_not_root(word: &str, root_word: &str) -> bool {
    word != root_word
}
