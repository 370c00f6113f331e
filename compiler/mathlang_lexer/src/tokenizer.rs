//! The token reader.
//!
//! [`Tokenizer`] turns a source string into tokens one call at a time.
//! Each call skips whitespace, then dispatches on the next character:
//!
//! - `;` is a one-character symbol.
//! - `"` opens a string literal that runs to the next `"`.
//! - anything else starts a bareword, which is classified once complete
//!   (see [`crate::classify`]).
//!
//! # Bareword boundaries
//!
//! A bareword grows one character at a time. After each character the
//! scanner looks at the *next* character and stops if it is whitespace,
//! `;`, a symbol character, or a digit. The character just appended is
//! never inspected, so a leading symbol or digit always lands in the word
//! before the boundary check can end it. A digit does not end a word that
//! is still a numeric run, which keeps `12` and `3.14` whole.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::classify::{classify_bareword, is_numeric_run};
use crate::token::is_symbol_char;
use crate::{Cursor, LexError, Span, SpannedToken, Token};

/// A source of tokens for the parser.
///
/// `Ok(None)` signals end of input and keeps being returned on later
/// calls. `Err` is fatal: callers stop reading at the first error.
pub trait TokenReader {
    fn next_token(&mut self) -> Result<Option<Token>, LexError>;
}

/// Drain `reader` into a vector, stopping at the first error.
pub fn read_to_end<R: TokenReader + ?Sized>(reader: &mut R) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    while let Some(token) = reader.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

/// Scanner over a single source string.
///
/// Not meant for shared use: the cursor and scratch buffer are mutated in
/// place on every call. Independent tokenizers over independent sources
/// share nothing.
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    /// Text of the token being built. Cleared per token, capacity kept.
    scratch: String,
    /// Set once the iterator has yielded an error.
    failed: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            scratch: String::new(),
            failed: false,
        }
    }

    /// The source being scanned.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }

    /// Byte offset of the cursor. Never decreases.
    pub fn position(&self) -> usize {
        self.cursor.pos()
    }

    /// Scan the next token.
    ///
    /// Returns `Ok(None)` at end of input, and again on every later call.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        Ok(self.next_spanned()?.map(|spanned| spanned.token))
    }

    /// Scan the next token along with the source bytes it consumed.
    pub fn next_spanned(&mut self) -> Result<Option<SpannedToken>, LexError> {
        self.cursor.eat_while(char::is_whitespace);
        if self.cursor.is_eof() {
            debug!(pos = self.cursor.pos(), "end of input");
            return Ok(None);
        }

        let start = self.cursor.pos();
        let token = match self.scan(start) {
            Ok(token) => token,
            Err(err) => {
                debug!(error = %err, "scan failed");
                return Err(err);
            }
        };

        let span = self.span_from(start);
        trace!(?token, %span, "scanned token");
        Ok(Some(SpannedToken::new(token, span)))
    }

    fn scan(&mut self, start: usize) -> Result<Token, LexError> {
        match self.current()? {
            ';' => {
                self.cursor.advance();
                Ok(Token::Symbol(';'))
            }
            '"' => self.quoted(start),
            _ => self.bareword(start),
        }
    }

    fn current(&self) -> Result<char, LexError> {
        self.cursor
            .current()
            .ok_or_else(|| LexError::unexpected_end(self.offset()))
    }

    // ─── String literals ───────────────────────────────────────────────

    /// Scan `"..."`. No escapes: the body ends at the first `"`.
    fn quoted(&mut self, start: usize) -> Result<Token, LexError> {
        self.scratch.clear();
        self.cursor.advance(); // opening quote
        let body = self.cursor.pos();

        if !self.cursor.eat_until(b'"') {
            return Err(LexError::unterminated_string(self.span_from(start)));
        }
        self.scratch.push_str(self.cursor.slice_from(body));
        self.cursor.advance(); // closing quote

        Ok(Token::StringLiteral(self.scratch.clone()))
    }

    // ─── Barewords ─────────────────────────────────────────────────────

    fn bareword(&mut self, start: usize) -> Result<Token, LexError> {
        self.scratch.clear();

        while let Some(c) = self.cursor.advance() {
            self.scratch.push(c);
            if let Some(next) = self.cursor.current() {
                if ends_bareword(&self.scratch, next) {
                    break;
                }
            }
        }

        classify_bareword(&self.scratch)
            .ok_or_else(|| LexError::invalid_token(self.span_from(start), self.scratch.as_str()))
    }

    // ─── Positions ─────────────────────────────────────────────────────

    fn span_from(&self, start: usize) -> Span {
        Span::saturating_from_range(start..self.cursor.pos())
    }

    fn offset(&self) -> u32 {
        u32::try_from(self.cursor.pos()).unwrap_or(u32::MAX)
    }
}

/// Lookahead boundary check for a bareword whose text so far is `word`.
#[inline]
fn ends_bareword(word: &str, next: char) -> bool {
    next.is_whitespace()
        || next == ';'
        || is_symbol_char(next)
        || (next.is_ascii_digit() && !is_numeric_run(word))
}

impl TokenReader for Tokenizer<'_> {
    fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        Tokenizer::next_token(self)
    }
}

/// Yields tokens until end of input or the first error, then `None` forever.
impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Tokenizer<'_> {}

/// Replays a pre-scanned token list.
///
/// Lets a parser be driven without a source string, e.g. from tokens
/// collected by [`crate::tokenize`] or built by hand in tests.
#[derive(Clone, Debug)]
pub struct VecTokenReader {
    tokens: std::vec::IntoIter<Token>,
}

impl VecTokenReader {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }
}

impl TokenReader for VecTokenReader {
    fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        Ok(self.tokens.next())
    }
}
