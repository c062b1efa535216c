use clap::{Parser, Subcommand};
use rand::rngs::OsRng;
use std::path::PathBuf;

use pwgen::config::{
    CasingPolicy, DelimiterPolicy, PassphraseRequest, PasswordRequest, TokenRequest, DELIMITERS,
};
use pwgen::{entropy, generator, ui};

#[derive(Parser)]
#[command(
    name = "pwgen",
    version,
    about = "Generate cryptographically strong random passwords, passphrases, and tokens"
)]
struct Cli {
    /// Print an entropy report alongside the secret
    #[arg(short, long, global = true)]
    entropy: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a random password with at least one lowercase character, one
    /// uppercase character, and one digit
    Password {
        /// Character length of the password
        #[arg(short, long, default_value_t = 40)]
        length: usize,

        /// Include punctuation in the password
        #[arg(short, long)]
        punctuation: bool,
    },

    /// Generate a random XKCD-style passphrase from a word list
    Passphrase {
        /// Number of words in the passphrase
        #[arg(short, long, default_value_t = 5)]
        length: usize,

        /// Join words with this delimiter instead of a random one
        #[arg(short, long, value_parser = parse_delimiter)]
        delimiter: Option<char>,

        /// Title-case every word instead of random upper/lower casing
        #[arg(short, long)]
        capitalize: bool,

        /// Word-list file used to generate the passphrase
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Generate a random hexadecimal token
    Token {
        /// Number of random bytes in the token
        #[arg(short, long, default_value_t = 32)]
        length: usize,
    },

    /// Generate a random URL-safe token
    UrlToken {
        /// Number of random bytes in the token
        #[arg(short, long, default_value_t = 32)]
        length: usize,
    },

    /// Compute the Shannon entropy of a string
    Entropy {
        /// The string to measure
        string: String,
    },
}

fn parse_delimiter(s: &str) -> Result<char, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if DELIMITERS.contains(&c) => Ok(c),
        _ => Err(format!(
            "delimiter must be one of: {}",
            DELIMITERS
                .iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        )),
    }
}

fn main() {
    let cli = Cli::parse();

    // A validation or resolution failure is part of normal operation: render
    // the single error line on stdout and exit cleanly.
    if let Err(err) = run(cli) {
        println!("{}", err);
    }
}

fn run(cli: Cli) -> pwgen::Result<()> {
    let generated = match cli.command {
        Command::Password {
            length,
            punctuation,
        } => generator::generate_password(&mut OsRng, &PasswordRequest {
            length,
            punctuation,
        })?,

        Command::Passphrase {
            length,
            delimiter,
            capitalize,
            file,
        } => {
            let request = PassphraseRequest {
                word_count: length,
                casing: if capitalize {
                    CasingPolicy::Capitalize
                } else {
                    CasingPolicy::Random
                },
                delimiter: match delimiter {
                    Some(c) => DelimiterPolicy::Fixed(c),
                    None => DelimiterPolicy::Random,
                },
                wordlist_path: file,
            };
            generator::generate_passphrase(&mut OsRng, &request)?
        }

        Command::Token { length } => {
            generator::generate_hex_token(&mut OsRng, &TokenRequest {
                byte_length: length,
            })?
        }

        Command::UrlToken { length } => {
            generator::generate_url_token(&mut OsRng, &TokenRequest {
                byte_length: length,
            })?
        }

        Command::Entropy { string } => {
            let bits = entropy::shannon_entropy(&string)?;
            ui::print_shannon_entropy(bits);
            return Ok(());
        }
    };

    ui::print_secret(&generated.secret);

    if cli.entropy {
        let options = ui::DisplayOptions {
            unicode_support: ui::detect_unicode_support(),
            color_support: ui::detect_color_support(),
        };
        ui::print_report(&generated.report, &options);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_subcommands() {
        Cli::parse_from(["pwgen", "password", "-l", "20", "-p"]);
        Cli::parse_from(["pwgen", "-e", "passphrase", "-l", "6", "-d", "@", "-c"]);
        Cli::parse_from(["pwgen", "token", "-l", "64"]);
        Cli::parse_from(["pwgen", "url-token"]);
        Cli::parse_from(["pwgen", "entropy", "hello"]);
    }

    #[test]
    fn test_parse_delimiter_accepts_enumerated_set() {
        for &d in DELIMITERS {
            assert_eq!(parse_delimiter(&d.to_string()).unwrap(), d);
        }
    }

    #[test]
    fn test_parse_delimiter_rejects_other_input() {
        assert!(parse_delimiter("_").is_err());
        assert!(parse_delimiter("--").is_err());
        assert!(parse_delimiter("").is_err());
    }
}
