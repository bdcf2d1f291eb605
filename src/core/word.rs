//! Candidate normalization and letter-pool matching.

use smallvec::SmallVec;

/// Letters of a root word, consumed one instance at a time.
///
/// Most root words fit inline, so matching a candidate doesn't allocate.
#[derive(Clone, Debug)]
pub struct LetterPool {
    letters: SmallVec<[char; 16]>,
}

impl LetterPool {
    /// Build a pool from the lower-cased letters of `root`.
    #[must_use]
    pub fn new(root: &str) -> Self {
        Self {
            letters: root.chars().flat_map(char::to_lowercase).collect(),
        }
    }

    /// Remove the first instance of `letter`. Returns false if none is left.
    pub fn take(&mut self, letter: char) -> bool {
        match self.letters.iter().position(|&c| c == letter) {
            Some(pos) => {
                self.letters.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Letters still available.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.letters.len()
    }
}

/// Check that every letter of `word` can be drawn from `root`.
///
/// Each letter of the root satisfies at most one letter of the word, so
/// "silkworms" cannot be built from "silkworm".
#[must_use]
pub fn can_build_from(word: &str, root: &str) -> bool {
    let mut pool = LetterPool::new(root);
    word.chars().all(|letter| pool.take(letter))
}

/// Lower-case and trim a raw submission.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Length of a word in characters.
///
/// Counts Unicode scalar values, not grapheme clusters: "cafe\u{301}"
/// (e + combining accent) counts 5 while "caf\u{e9}" counts 4.
#[must_use]
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}
