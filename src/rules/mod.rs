//! Rules deciding which candidates a round accepts.
//!
//! The validator reads the session but never modifies it. Accepting a word
//! is left to the caller once validation passes.

pub mod validator;

pub use validator::{
    is_long_enough, is_not_root, is_original, is_possible, is_real, Alert, Check, Validator,
    WordError,
};
