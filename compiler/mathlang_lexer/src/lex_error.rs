//! Lexer error types.
//!
//! Every error is fatal for the scan that produced it: the tokenizer does
//! no recovery, and callers are expected to stop at the first `Err`.
//!
//! Errors carry WHERE (`span`) and WHAT (`kind`); [`LexError::hint`]
//! supplies the HOW when there is a concrete fix to suggest.

use crate::Span;

/// A lexer error located in the source.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at {span}")]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// Missing closing `"` for a string literal.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// A bareword that is not a number, a symbol, or a name.
    #[error("invalid token `{text}`")]
    InvalidToken { text: String },
    /// The scanner tried to read past the end of the source.
    ///
    /// Never produced by well-formed scanning; seeing one means the
    /// boundary logic is wrong, not the input.
    #[error("unexpected end of input")]
    UnexpectedEnd,
}

impl LexError {
    /// String opened at `span.start` and never closed. The span runs to EOF.
    #[cold]
    pub fn unterminated_string(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnterminatedString,
        }
    }

    #[cold]
    pub fn invalid_token(span: Span, text: impl Into<String>) -> Self {
        Self {
            span,
            kind: LexErrorKind::InvalidToken { text: text.into() },
        }
    }

    #[cold]
    pub fn unexpected_end(pos: u32) -> Self {
        Self {
            span: Span::point(pos),
            kind: LexErrorKind::UnexpectedEnd,
        }
    }

    /// `true` for errors that indicate a scanner defect rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(self.kind, LexErrorKind::UnexpectedEnd)
    }

    /// A short suggestion for fixing the input, if there is one.
    pub fn hint(&self) -> Option<&'static str> {
        match &self.kind {
            LexErrorKind::UnterminatedString => {
                Some("add a closing `\"`; string literals cannot contain `\"`")
            }
            LexErrorKind::InvalidToken { text } => {
                if text.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
                    Some("numbers must be plain decimals such as `42`, `3.14` or `.5`")
                } else {
                    Some("names must start with an ASCII letter")
                }
            }
            LexErrorKind::UnexpectedEnd => None,
        }
    }
}
