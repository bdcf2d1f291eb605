//! Core type bindings for Python.

use pyo3::exceptions::{PyFileNotFoundError, PyValueError};
use pyo3::prelude::*;

use crate::error::ScrambleError;
use crate::game::RoundView;

/// Map a fatal setup error onto the closest Python exception.
pub(crate) fn to_py_err(err: ScrambleError) -> PyErr {
    match err {
        ScrambleError::MissingWordList { .. } | ScrambleError::MissingDictionary { .. } => {
            PyFileNotFoundError::new_err(err.to_string())
        }
        ScrambleError::EmptyWordList | ScrambleError::UnsupportedLanguage { .. } => {
            PyValueError::new_err(err.to_string())
        }
    }
}

/// Python wrapper for RoundView.
#[pyclass(name = "RoundView")]
#[derive(Clone, Debug)]
pub struct PyRoundView(pub RoundView);

#[pymethods]
impl PyRoundView {
    #[getter]
    fn root_word(&self) -> String {
        self.0.root_word.clone()
    }

    /// Accepted words, newest first.
    #[getter]
    fn accepted_words(&self) -> Vec<String> {
        self.0.accepted.iter().map(|a| a.word.clone()).collect()
    }

    #[getter]
    fn score(&self) -> u32 {
        self.0.score
    }

    /// Pending `(title, message)` alert, if any.
    #[getter]
    fn alert(&self) -> Option<(String, String)> {
        self.0
            .alert
            .as_ref()
            .map(|a| (a.title.clone(), a.message.clone()))
    }

    fn __repr__(&self) -> String {
        format!(
            "RoundView(root_word={:?}, score={}, words={})",
            self.0.root_word,
            self.0.score,
            self.0.accepted.len()
        )
    }
}
