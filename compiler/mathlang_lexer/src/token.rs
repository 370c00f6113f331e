//! Token values handed to the parser.

use std::fmt;

use crate::Span;

/// Single-character operators that may also appear inside a bareword
/// boundary check. `;` is dispatched separately and is not in this set.
pub const SYMBOLS: [char; 3] = ['-', '=', '+'];

/// Returns `true` if `c` is one of the bareword-terminating [`SYMBOLS`].
#[inline]
pub fn is_symbol_char(c: char) -> bool {
    SYMBOLS.contains(&c)
}

/// A scanned token.
///
/// Tokens carry only their payload; positions live in [`SpannedToken`].
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// `;`, `-`, `=` or `+`.
    Symbol(char),
    /// Text between a pair of double quotes, quotes excluded.
    StringLiteral(String),
    /// A decimal number.
    Number(f64),
    /// An identifier-like word.
    Name(String),
}

impl Token {
    /// Returns `true` if this is `Symbol(c)`.
    pub fn is_symbol(&self, c: char) -> bool {
        matches!(self, Token::Symbol(s) if *s == c)
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Token::Name(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Token::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_string_literal(&self) -> Option<&str> {
        match self {
            Token::StringLiteral(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Symbol(c) => write!(f, "{c}"),
            Token::StringLiteral(text) => write!(f, "\"{text}\""),
            Token::Number(value) => write!(f, "{value}"),
            Token::Name(name) => f.write_str(name),
        }
    }
}

/// A token plus the source bytes it was scanned from.
///
/// For string literals the span includes both quotes.
#[derive(Clone, Debug, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
}

impl SpannedToken {
    pub fn new(token: Token, span: Span) -> Self {
        Self { token, span }
    }
}

#[cfg(test)]
mod tests;
