//! Bareword classification.
//!
//! A completed bareword is tried against each token class in a fixed order
//! and the first match wins:
//!
//! 1. number ([`as_number`])
//! 2. symbol ([`as_symbol`])
//! 3. name ([`as_name`])
//!
//! A word matching none of them is an invalid token. The number attempt
//! runs unconditionally, so `-` and `+` reach the symbol check only after
//! failing to parse as numbers.

use std::ops::RangeInclusive;

use crate::token::{is_symbol_char, Token};

/// First characters accepted for a name.
///
/// The range spans `'A'` through `'z'`, which also admits `[ \ ] ^ _` and
/// the backtick between the two letter blocks.
pub const NAME_START: RangeInclusive<char> = 'A'..='z';

/// Classify a bareword, or `None` if it is not a valid token.
pub fn classify_bareword(word: &str) -> Option<Token> {
    as_number(word)
        .map(Token::Number)
        .or_else(|| as_symbol(word).map(Token::Symbol))
        .or_else(|| as_name(word).map(|name| Token::Name(name.to_owned())))
}

/// Parse `word` as a decimal number.
///
/// Accepts `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`.
/// Rejects `inf`, `NaN` and the other special spellings `f64::from_str`
/// would otherwise take.
pub fn as_number(word: &str) -> Option<f64> {
    if !is_decimal_literal(word) {
        return None;
    }
    word.parse().ok()
}

/// The symbol character if `word` is exactly one symbol.
pub fn as_symbol(word: &str) -> Option<char> {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if is_symbol_char(c) => Some(c),
        _ => None,
    }
}

/// `word` itself if its first character is in [`NAME_START`].
pub fn as_name(word: &str) -> Option<&str> {
    word.chars()
        .next()
        .filter(|c| NAME_START.contains(c))
        .map(|_| word)
}

/// Returns `true` if `word` consists only of ASCII digits and `.`.
///
/// While a bareword is a numeric run, a following digit extends it instead
/// of ending it.
pub fn is_numeric_run(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit() || b == b'.')
}

fn is_decimal_literal(word: &str) -> bool {
    let bytes = word.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        frac_digits = count_digits(&bytes[i..]);
        i += frac_digits;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_digits = count_digits(&bytes[i..]);
        if exp_digits == 0 {
            return false;
        }
        i += exp_digits;
    }

    i == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests;
