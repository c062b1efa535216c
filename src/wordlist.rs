use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Probed in order when no explicit word list is given. `words.txt` is
/// relative to the working directory; the rest are conventional system
/// dictionary locations on Linux.
pub const FALLBACK_PATHS: &[&str] = &[
    "words.txt",
    "/usr/share/dict/words",
    "/usr/dict/words",
    "/etc/dictionaries-common/words",
];

/// An ordered word collection loaded from a newline-delimited file.
///
/// Lines are trimmed and empty lines dropped. Duplicates are kept: a list
/// with repeated words skews sampling and entropy accounting, and that is
/// accepted rather than corrected.
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Resolve a word-list path: an explicit path must exist as a regular file,
/// otherwise the first existing fallback path wins.
pub fn resolve(explicit: Option<&Path>) -> Result<PathBuf> {
    resolve_from(explicit, FALLBACK_PATHS)
}

fn resolve_from(explicit: Option<&Path>, candidates: &[&str]) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(Error::WordListMissing(path.to_path_buf()));
    }

    candidates
        .iter()
        .map(Path::new)
        .find(|path| path.is_file())
        .map(Path::to_path_buf)
        .ok_or(Error::WordListNotFound)
}

/// Load a resolved word list. Fails with `WordListEmpty` when trimming
/// leaves no words at all.
pub fn load(path: &Path) -> Result<WordList> {
    let contents = fs::read_to_string(path)?;

    let words: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    if words.is_empty() {
        return Err(Error::WordListEmpty(path.to_path_buf()));
    }

    Ok(WordList { words })
}
