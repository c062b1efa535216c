use crate::error::{Error, Result};
use std::collections::HashMap;

/// Keyspace estimate for a (length, symbol-space) pair.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EntropyReport {
    pub bits: u64,
    pub combinations: f64,
}

/// Information entropy of `length` uniform draws from a space of
/// `symbol_space` symbols, in whole bits.
///
/// `symbol_space` must be at least 2; the result is undefined below that.
pub fn bits(length: usize, symbol_space: usize) -> u64 {
    debug_assert!(symbol_space >= 2, "symbol space must hold at least 2 symbols");
    (length as f64 * (symbol_space as f64).log2()).floor() as u64
}

/// Size of the keyspace, `symbol_space ^ length`, as a float. Overflows to
/// infinity for large inputs; callers display it as-is.
pub fn combinations(length: usize, symbol_space: usize) -> f64 {
    (symbol_space as f64).powf(length as f64)
}

pub fn keyspace(length: usize, symbol_space: usize) -> EntropyReport {
    EntropyReport {
        bits: bits(length, symbol_space),
        combinations: combinations(length, symbol_space),
    }
}

/// Shannon entropy of `input` in bits per symbol, computed from its own
/// character-frequency distribution.
pub fn shannon_entropy(input: &str) -> Result<f64> {
    if input.is_empty() {
        return Err(Error::InvalidInput);
    }

    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in input.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }

    let total = input.chars().count() as f64;
    let entropy = counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();

    Ok(entropy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_reference_value() {
        assert_eq!(bits(10, 62), 59);
    }

    #[test]
    fn test_bits_hex_token() {
        // 64 hex characters carry exactly 256 bits.
        assert_eq!(bits(64, 16), 256);
    }

    #[test]
    fn test_bits_monotonic_in_length() {
        let mut previous = 0;
        for length in 1..=128 {
            let current = bits(length, 62);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_bits_monotonic_in_symbol_space() {
        let mut previous = 0;
        for symbol_space in 2..=256 {
            let current = bits(20, symbol_space);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_combinations_small() {
        assert_eq!(combinations(3, 10), 1000.0);
        assert_eq!(combinations(0, 62), 1.0);
    }

    #[test]
    fn test_combinations_overflow_to_infinity() {
        let huge = combinations(1000, 62);
        assert!(huge.is_infinite());
    }

    #[test]
    fn test_keyspace_pairs_fields() {
        let report = keyspace(40, 62);
        assert_eq!(report.bits, bits(40, 62));
        assert_eq!(report.combinations, combinations(40, 62));
    }

    #[test]
    fn test_shannon_single_symbol() {
        assert_eq!(shannon_entropy("aaaa").unwrap(), 0.0);
    }

    #[test]
    fn test_shannon_two_equiprobable_symbols() {
        assert_eq!(shannon_entropy("ab").unwrap(), 1.0);
        assert_eq!(shannon_entropy("abab").unwrap(), 1.0);
    }

    #[test]
    fn test_shannon_four_equiprobable_symbols() {
        assert_eq!(shannon_entropy("abcd").unwrap(), 2.0);
    }

    #[test]
    fn test_shannon_empty_input() {
        assert!(matches!(shannon_entropy(""), Err(Error::InvalidInput)));
    }

    #[test]
    fn test_shannon_multibyte_characters() {
        // Counted per char, not per byte.
        assert_eq!(shannon_entropy("éé").unwrap(), 0.0);
        assert_eq!(shannon_entropy("éa").unwrap(), 1.0);
    }
}
