//! The playable game built from session, dictionary and rules.
//!
//! Start a game with `WordScrambleBuilder`, feed it submissions, and
//! render `RoundView` snapshots:
//!
//! ```
//! use word_scramble::dictionary::{WordList, WordSet};
//! use word_scramble::game::{SubmitOutcome, WordScrambleBuilder};
//!
//! let mut game = WordScrambleBuilder::new()
//!     .word_list(WordList::from_words(["silkworm"]))
//!     .spell_checker(WordSet::from_words("en", ["silk"]))
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(game.submit("silk"), SubmitOutcome::Accepted("silk".to_string()));
//! assert_eq!(game.view().score, 1);
//! ```

mod scramble;

pub use scramble::{AcceptedWord, RoundView, SubmitOutcome, WordScramble, WordScrambleBuilder};
