//! Python bindings for the word-scramble game.
//!
//! # Quick Start
//!
//! ```python
//! import word_scramble as ws
//!
//! game = ws.WordScramble(start_words=["silkworm"], dictionary=["silk", "worm"], seed=42)
//!
//! assert game.submit("silk") is None
//! title, message = game.submit("silk")   # ("Word used already", "Be original!")
//!
//! view = game.view()
//! print(view.root_word, view.score, view.accepted_words)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// word_scramble: find the words hidden in a root word.
#[pymodule]
fn word_scramble(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRoundView>()?;
    m.add_class::<PyWordScramble>()?;

    Ok(())
}
