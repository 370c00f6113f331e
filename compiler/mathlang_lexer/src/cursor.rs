//! Character cursor over a borrowed source string.
//!
//! The cursor walks the source one `char` at a time while reporting
//! positions as byte offsets, so every position it hands out lies on a
//! UTF-8 character boundary and can be sliced without re-validation.
//!
//! EOF is `current() == None`. There is no sentinel: the source is a
//! plain `&str` owned by the caller.

/// Copyable character cursor.
///
/// The cursor is [`Copy`], enabling cheap state snapshots.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte offset into `source`).
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Returns the character at the current position, or `None` at EOF.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Returns the character one position ahead of current.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Consume the current character and return it.
    ///
    /// Returns `None` (and does not move) at EOF.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Returns `true` if the cursor has consumed the whole source.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// Number of unread bytes.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.source.len() - self.pos
    }

    /// The full source this cursor walks.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Extract a source substring.
    ///
    /// # Contract
    ///
    /// `start..end` must come from positions this cursor reported, so both
    /// fall on character boundaries and `end <= source_len()`.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.source[start..end]
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current character.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Advance to the next occurrence of the ASCII `byte`.
    ///
    /// Returns `true` with the cursor on the byte if it was found, or
    /// `false` with the cursor at EOF if it was not. Uses memchr, so long
    /// string bodies are skipped without per-character decoding.
    pub fn eat_until(&mut self, byte: u8) -> bool {
        debug_assert!(byte.is_ascii(), "eat_until needle must be ASCII");
        let rest = &self.source.as_bytes()[self.pos..];
        if let Some(offset) = memchr::memchr(byte, rest) {
            self.pos += offset;
            true
        } else {
            self.pos = self.source.len();
            false
        }
    }
}
