//! Word sources: the root-word list and the spell checker.
//!
//! - `WordList`: the words a round can start from
//! - `SpellChecker`: decides whether a candidate is a real word
//! - `WordSet`: static dictionary implementing `SpellChecker`

pub mod checker;
pub mod word_list;
pub mod word_set;

pub use checker::SpellChecker;
pub use word_list::WordList;
pub use word_set::WordSet;
