//! # word-scramble
//!
//! An anagram word game. A root word is picked at random and the player
//! finds the words hidden in it.
//!
//! ## Rules
//!
//! A submitted word is accepted when it:
//!
//! 1. hasn't been accepted already this round,
//! 2. uses only letters of the root word, each at most as often as it appears there,
//! 3. is a real word according to the spell checker,
//! 4. is at least three letters long,
//! 5. isn't the root word itself.
//!
//! Checks run in that order and stop at the first failure. Every accepted
//! word scores one point.
//!
//! ## Modules
//!
//! - `core`: Session state, word helpers, RNG, configuration
//! - `dictionary`: Root-word list and spell checking
//! - `rules`: The validation chain and its errors
//! - `game`: The game facade front ends drive

pub mod core;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{RoundRng, ScrambleConfig, Session};

pub use crate::dictionary::{SpellChecker, WordList, WordSet};

pub use crate::error::ScrambleError;

pub use crate::rules::{Alert, Validator, WordError};

pub use crate::game::{AcceptedWord, RoundView, SubmitOutcome, WordScramble, WordScrambleBuilder};
