use std::path::PathBuf;

/// Lengths at or below these minimums are rejected with `InvalidLength`.
pub const MIN_PASSWORD_LENGTH: usize = 13;
pub const MIN_PASSPHRASE_WORDS: usize = 3;
pub const MIN_TOKEN_BYTES: usize = 31;

/// The delimiter symbols a passphrase may be joined with. A random delimiter
/// is drawn uniformly from this set once per invocation.
pub const DELIMITERS: &[char] = &['-', '@', '#', '!', '$', '&'];

/// How loaded words are cased before sampling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CasingPolicy {
    /// Each word is independently rendered fully uppercase or fully
    /// lowercase, doubling the distinct surface forms.
    Random,
    /// Every word is title-cased (first letter uppercase, rest lowercase).
    Capitalize,
}

/// How the joining delimiter is chosen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DelimiterPolicy {
    /// One uniform draw from [`DELIMITERS`], reused between every word pair.
    Random,
    /// A caller-supplied symbol; contributes nothing to the keyspace.
    Fixed(char),
}

pub struct PasswordRequest {
    pub length: usize,
    pub punctuation: bool,
}

pub struct PassphraseRequest {
    pub word_count: usize,
    pub casing: CasingPolicy,
    pub delimiter: DelimiterPolicy,
    pub wordlist_path: Option<PathBuf>,
}

pub struct TokenRequest {
    pub byte_length: usize,
}
