//! Token reader for the mathlang expression language.
//!
//! Converts a source string into [`Token`]s for the parser: `;` and the
//! operator symbols `-`, `=`, `+`, double-quoted string literals, decimal
//! numbers, and names.
//!
//! ```
//! use mathlang_lexer::{tokenize, Token};
//!
//! let tokens = tokenize("x=5;").unwrap();
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::Name("x".into()),
//!         Token::Symbol('='),
//!         Token::Number(5.0),
//!         Token::Symbol(';'),
//!     ]
//! );
//! ```
//!
//! # Tracing
//!
//! Scanning emits `tracing` events: `trace` per token, `debug` at end of
//! input and on errors. Enable with `RUST_LOG=mathlang_lexer=trace` in a
//! binary that installs a subscriber.

pub mod classify;
mod cursor;
mod lex_error;
mod span;
mod token;
mod tokenizer;

pub use cursor::Cursor;
pub use lex_error::{LexError, LexErrorKind};
pub use span::{Span, SpanError};
pub use token::{is_symbol_char, SpannedToken, Token, SYMBOLS};
pub use tokenizer::{read_to_end, TokenReader, Tokenizer, VecTokenReader};

/// Scan all of `source`, stopping at the first error.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    read_to_end(&mut Tokenizer::new(source))
}

/// Like [`tokenize`], keeping each token's span.
pub fn tokenize_spanned(source: &str) -> Result<Vec<SpannedToken>, LexError> {
    let mut tokenizer = Tokenizer::new(source);
    let mut tokens = Vec::new();
    while let Some(token) = tokenizer.next_spanned()? {
        tokens.push(token);
    }
    Ok(tokens)
}
