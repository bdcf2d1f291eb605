//! Fatal setup errors.
//!
//! Rejected submissions are not errors of this kind; see
//! [`WordError`](crate::rules::WordError).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrambleError {
    #[error("could not load word list from {path}")]
    MissingWordList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not load dictionary from {path}")]
    MissingDictionary {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("the word list has no words to start a round with")]
    EmptyWordList,
    #[error("the dictionary has no words for language '{language}'")]
    UnsupportedLanguage { language: String },
}

pub type Result<T> = std::result::Result<T, ScrambleError>;
