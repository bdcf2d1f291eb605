//! Game bindings for Python.

use pyo3::prelude::*;

use crate::core::DEFAULT_LANGUAGE;
use crate::dictionary::{WordList, WordSet};
use crate::game::{SubmitOutcome, WordScramble, WordScrambleBuilder};

use super::py_core::{to_py_err, PyRoundView};

/// Python wrapper for WordScramble.
///
/// Uses the bundled word lists unless `start_words` or `dictionary` is given.
#[pyclass(name = "WordScramble")]
pub struct PyWordScramble {
    game: WordScramble,
}

#[pymethods]
impl PyWordScramble {
    /// Create a game and start its first round.
    ///
    /// # Arguments
    /// - start_words: Root words to pick from
    /// - dictionary: Words the spell checker accepts
    /// - language: Language tag for the dictionary
    /// - seed: RNG seed for reproducible rounds
    #[new]
    #[pyo3(signature = (
        start_words = None,
        dictionary = None,
        language = DEFAULT_LANGUAGE.to_string(),
        seed = None
    ))]
    fn new(
        start_words: Option<Vec<String>>,
        dictionary: Option<Vec<String>>,
        language: String,
        seed: Option<u64>,
    ) -> PyResult<Self> {
        let mut builder = WordScrambleBuilder::new().language(language.clone());
        if let Some(words) = start_words {
            builder = builder.word_list(WordList::from_words(words));
        }
        if let Some(words) = dictionary {
            builder = builder.spell_checker(WordSet::from_words(language, words));
        }
        if let Some(seed) = seed {
            builder = builder.seed(seed);
        }

        let game = builder.build().map_err(to_py_err)?;
        Ok(Self { game })
    }

    /// Submit a word.
    ///
    /// Returns None if the word was accepted or ignored, otherwise the
    /// `(title, message)` explaining the rejection.
    fn submit(&mut self, word: &str) -> Option<(String, String)> {
        match self.game.submit(word) {
            SubmitOutcome::Rejected(error) => {
                Some((error.title().to_string(), error.message().to_string()))
            }
            SubmitOutcome::Accepted(_) | SubmitOutcome::Ignored => None,
        }
    }

    /// Start a new round with a fresh root word.
    fn start_round(&mut self) -> PyResult<()> {
        self.game.start_round().map_err(to_py_err)
    }

    fn dismiss_alert(&mut self) {
        self.game.dismiss_alert();
    }

    fn view(&self) -> PyRoundView {
        PyRoundView(self.game.view())
    }

    #[getter]
    fn root_word(&self) -> String {
        self.game.session().root_word().to_string()
    }

    /// Accepted words, newest first.
    #[getter]
    fn accepted_words(&self) -> Vec<String> {
        self.game.session().accepted_words().iter().cloned().collect()
    }

    #[getter]
    fn score(&self) -> u32 {
        self.game.session().score()
    }

    /// Seed that replays this game's rounds.
    #[getter]
    fn seed(&self) -> u64 {
        self.game.seed()
    }

    fn __repr__(&self) -> String {
        format!(
            "WordScramble(root_word={:?}, score={})",
            self.game.session().root_word(),
            self.game.session().score()
        )
    }
}
