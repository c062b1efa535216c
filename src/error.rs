use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures a generator can report to the caller. The CLI renders each as a
/// single line; none of these carry nested diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{what} must be greater than {min} {unit}")]
    InvalidLength {
        what: &'static str,
        min: usize,
        unit: &'static str,
    },

    #[error("word list does not exist: {0}")]
    WordListMissing(PathBuf),

    #[error("word list not found; please provide a word-list file")]
    WordListNotFound,

    #[error("word list contains no words: {0}")]
    WordListEmpty(PathBuf),

    #[error("cannot compute the entropy of an empty string")]
    InvalidInput,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
