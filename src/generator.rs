use crate::config::{
    CasingPolicy, DelimiterPolicy, PassphraseRequest, PasswordRequest, TokenRequest, DELIMITERS,
    MIN_PASSPHRASE_WORDS, MIN_PASSWORD_LENGTH, MIN_TOKEN_BYTES,
};
use crate::entropy::{self, EntropyReport};
use crate::error::{Error, Result};
use crate::wordlist;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::{CryptoRng, Rng};
use zeroize::Zeroizing;

const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const PUNCTUATION: &[u8] = b"!#$%&()*+,-.:;<=>?@[\\]^_`{|}~";

/// Symbol space reported for URL-safe tokens. The true base64url alphabet
/// has 64 symbols including `-` and `_`; 62 is a deliberate, slightly
/// conservative approximation.
const URL_TOKEN_SYMBOLS: usize = 62;

/// A generated secret together with its keyspace estimate. The secret is
/// zeroized on drop; the report is safe to keep.
pub struct Generated {
    pub secret: Zeroizing<String>,
    pub report: EntropyReport,
}

/// Generate an alphanumeric password containing at least one lowercase
/// letter, one uppercase letter, and one digit.
///
/// Candidates are drawn by rejection sampling: each is `length` independent
/// uniform draws from the alphabet, redrawn whole until the composition
/// constraint holds. The expected number of attempts is below two for any
/// accepted length, but the loop is deliberately unbounded.
pub fn generate_password<R>(rng: &mut R, request: &PasswordRequest) -> Result<Generated>
where
    R: Rng + CryptoRng,
{
    if request.length <= MIN_PASSWORD_LENGTH {
        return Err(Error::InvalidLength {
            what: "password length",
            min: MIN_PASSWORD_LENGTH,
            unit: "characters",
        });
    }

    let mut alphabet = ALPHANUMERIC.to_vec();
    if request.punctuation {
        alphabet.extend_from_slice(PUNCTUATION);
    }

    loop {
        let mut secret = Zeroizing::new(String::with_capacity(request.length));
        for _ in 0..request.length {
            let index = rng.gen_range(0..alphabet.len());
            secret.push(alphabet[index] as char);
        }

        let satisfied = secret.bytes().any(|b| b.is_ascii_lowercase())
            && secret.bytes().any(|b| b.is_ascii_uppercase())
            && secret.bytes().any(|b| b.is_ascii_digit());

        if satisfied {
            let report = entropy::keyspace(request.length, alphabet.len());
            return Ok(Generated { secret, report });
        }
    }
}

/// Generate a passphrase of `word_count` words sampled with replacement from
/// a resolved word list.
///
/// Entropy accounting: each word draw is one symbol over the distinct
/// surface forms (2x the list under random casing). A randomly chosen
/// delimiter is one extra draw from the 6-symbol delimiter set; a fixed
/// delimiter contributes nothing.
pub fn generate_passphrase<R>(rng: &mut R, request: &PassphraseRequest) -> Result<Generated>
where
    R: Rng + CryptoRng,
{
    if request.word_count <= MIN_PASSPHRASE_WORDS {
        return Err(Error::InvalidLength {
            what: "passphrase length",
            min: MIN_PASSPHRASE_WORDS,
            unit: "words",
        });
    }

    let path = wordlist::resolve(request.wordlist_path.as_deref())?;
    let list = wordlist::load(&path)?;

    let words: Vec<String> = match request.casing {
        CasingPolicy::Capitalize => list.words().iter().map(|w| title_case(w)).collect(),
        CasingPolicy::Random => list
            .words()
            .iter()
            .map(|w| {
                if rng.gen_bool(0.5) {
                    w.to_uppercase()
                } else {
                    w.to_lowercase()
                }
            })
            .collect(),
    };

    let delimiter = match request.delimiter {
        DelimiterPolicy::Fixed(c) => c,
        DelimiterPolicy::Random => DELIMITERS[rng.gen_range(0..DELIMITERS.len())],
    };

    let mut picks = Vec::with_capacity(request.word_count);
    for _ in 0..request.word_count {
        picks.push(words[rng.gen_range(0..words.len())].as_str());
    }
    let secret = Zeroizing::new(picks.join(&delimiter.to_string()));

    let surface_forms = match request.casing {
        CasingPolicy::Capitalize => list.len(),
        CasingPolicy::Random => list.len() * 2,
    };
    let (symbols, effective_length) = match request.delimiter {
        DelimiterPolicy::Random => (surface_forms + DELIMITERS.len(), request.word_count + 1),
        DelimiterPolicy::Fixed(_) => (surface_forms, request.word_count),
    };

    Ok(Generated {
        secret,
        report: entropy::keyspace(effective_length, symbols),
    })
}

/// Generate `byte_length` random bytes rendered as lowercase hex, two
/// characters per byte.
pub fn generate_hex_token<R>(rng: &mut R, request: &TokenRequest) -> Result<Generated>
where
    R: Rng + CryptoRng,
{
    let bytes = random_bytes(rng, request)?;
    let secret = Zeroizing::new(hex::encode(bytes.as_slice()));
    let report = entropy::keyspace(secret.len(), 16);
    Ok(Generated { secret, report })
}

/// Generate `byte_length` random bytes rendered as URL-safe base64 without
/// padding.
pub fn generate_url_token<R>(rng: &mut R, request: &TokenRequest) -> Result<Generated>
where
    R: Rng + CryptoRng,
{
    let bytes = random_bytes(rng, request)?;
    let secret = Zeroizing::new(URL_SAFE_NO_PAD.encode(bytes.as_slice()));
    let report = entropy::keyspace(secret.len(), URL_TOKEN_SYMBOLS);
    Ok(Generated { secret, report })
}

fn random_bytes<R>(rng: &mut R, request: &TokenRequest) -> Result<Zeroizing<Vec<u8>>>
where
    R: Rng + CryptoRng,
{
    if request.byte_length <= MIN_TOKEN_BYTES {
        return Err(Error::InvalidLength {
            what: "token length",
            min: MIN_TOKEN_BYTES,
            unit: "bytes",
        });
    }

    let mut bytes = Zeroizing::new(vec![0u8; request.byte_length]);
    rng.fill_bytes(&mut bytes);
    Ok(bytes)
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
