//! Core game types: session state, words, RNG, configuration.
//!
//! This module holds the state of a round and the word helpers the
//! validator builds on. It knows nothing about dictionaries or front ends.

pub mod config;
pub mod rng;
pub mod session;
pub mod word;

pub use config::{ScrambleConfig, DEFAULT_LANGUAGE, MIN_WORD_LENGTH};
pub use rng::RoundRng;
pub use session::Session;
pub use word::{can_build_from, letter_count, normalize, LetterPool};
