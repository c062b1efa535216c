pub mod config;
pub mod entropy;
pub mod error;
pub mod generator;
pub mod ui;
pub mod wordlist;

pub use config::{CasingPolicy, DelimiterPolicy, PassphraseRequest, PasswordRequest, TokenRequest};
pub use entropy::{shannon_entropy, EntropyReport};
pub use error::{Error, Result};
pub use generator::{
    generate_hex_token, generate_passphrase, generate_password, generate_url_token, Generated,
};
pub use wordlist::WordList;
