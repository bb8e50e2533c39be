//! Typed generation errors.
//!
//! Every failure is reported synchronously with enough detail for a
//! corrective message; none are fatal to the process.

use thiserror::Error;

use super::config::{MAX_LENGTH, MIN_LENGTH};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("password length {0} is out of range ({MIN_LENGTH}-{MAX_LENGTH})")]
    InvalidLength(usize),

    #[error("select at least one character class")]
    NoClasses,

    #[error("no characters remain after exclusions; loosen the settings")]
    EmptyAlphabet,

    #[error(
        "cannot avoid repeats: alphabet has {alphabet} characters but {length} are needed"
    )]
    InsufficientAlphabet { alphabet: usize, length: usize },

    #[error("gave up after {attempts} redraws while satisfying constraints")]
    ConstraintUnsatisfiable { attempts: usize },

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}
