//! Scanner: a character cursor over one fully materialized line of text.
//!
//! What it does
//! - Walks a borrowed `&'src str` one Unicode scalar at a time via
//!   `peek()`/`advance()`/`read_char()`, keeping a character position and the
//!   matching byte offset side by side.
//! - Hands out borrowed slices of the buffer for text-returning readers (see
//!   `readers.rs`), so no reader allocates.
//! - Saves and restores a single checkpoint with `mark()`/`reset()`.
//!
//! Invariants
//! - `0 <= pos.char_idx <= len` and `pos.byte_idx` is always a char boundary
//!   of `src` that corresponds to `pos.char_idx`.
//! - The buffer is never modified; only the position (and the mark) change.
//! - There is one mark slot. `mark()` overwrites it; it is not a stack.
//!
//! Failure model
//! - Every operation is total. End-of-input reads as `None`, `""` or
//!   `false`; advancing past the end is a no-op.

mod readers;


use crate::{
    ScanError,
    chars::{is_identifier_char, is_scan_whitespace},
    options::ScannerOptions,
};

/// A position in the buffer, as a character index plus its byte offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Position {
    char_idx: usize,
    byte_idx: usize,
}

/// A stateful cursor over an immutable line of text.
///
/// Positions count characters (Unicode scalar values), not bytes.
///
/// Typical loop:
/// ```rust
/// use linescan::Scanner;
///
/// let mut scanner = Scanner::new("alpha, \"beta gamma\" ,delta");
/// let mut fields = Vec::new();
/// loop {
///     scanner.eat_whitespace();
///     let field = if scanner.peek() == Some('"') {
///         scanner.read_quoted_string()
///     } else {
///         scanner.read_to_whitespace().trim_end_matches(',')
///     };
///     fields.push(field);
///     if scanner.eol() {
///         break;
///     }
///     scanner.parse_through_comma();
/// }
/// assert_eq!(fields, ["alpha", "beta gamma", "delta"]);
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'src> {
    src: &'src str,
    /// Buffer length in characters.
    len: usize,
    pos: Position,
    /// Single checkpoint slot, overwritten by every `mark()`.
    marked: Position,
    options: ScannerOptions,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner at position 0 with default options.
    ///
    /// Complexity: O(n) once, to count the characters of `src`.
    #[must_use]
    pub fn new(src: &'src str) -> Self {
        Self::with_options(src, ScannerOptions::default())
    }

    /// Creates a scanner at position 0 with the given options.
    #[must_use]
    pub fn with_options(src: &'src str, options: ScannerOptions) -> Self {
        Self {
            src,
            len: src.chars().count(),
            pos: Position::default(),
            marked: Position::default(),
            options,
        }
    }

    /// Creates a scanner over raw bytes that must be valid UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidUtf8`] if `bytes` is not UTF-8.
    pub fn from_utf8(bytes: &'src [u8]) -> Result<Self, ScanError> {
        let src = core::str::from_utf8(bytes)?;
        Ok(Self::new(src))
    }

    /// The whole buffer, regardless of position.
    #[inline]
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.src
    }

    /// The unread suffix of the buffer.
    #[inline]
    #[must_use]
    pub fn rest(&self) -> &'src str {
        &self.src[self.pos.byte_idx..]
    }

    /// The options this scanner was built with.
    #[inline]
    #[must_use]
    pub fn options(&self) -> &ScannerOptions {
        &self.options
    }

    /// Character index of the next character to be read.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos.char_idx
    }

    /// Character index currently held in the mark slot.
    #[inline]
    #[must_use]
    pub fn marked(&self) -> usize {
        self.marked.char_idx
    }

    /// Buffer length in characters.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer has no characters at all.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of characters left to read.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.len.saturating_sub(self.pos.char_idx)
    }

    /// Whether the cursor has reached end-of-input.
    #[inline]
    #[must_use]
    pub fn eol(&self) -> bool {
        self.pos.char_idx >= self.len
    }

    /// Decodes but does not consume the character at the cursor.
    ///
    /// Returns `None` at end-of-input. A genuine U+0000 in the buffer reads
    /// as `Some('\0')`.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        if self.eol() {
            return None;
        }
        let (ch, _) = bstr::decode_utf8(&self.src.as_bytes()[self.pos.byte_idx..]);
        ch
    }

    /// Moves the cursor one character forward. No-op at end-of-input.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(ch) = self.peek() {
            self.step(ch);
        }
    }

    /// Moves the cursor `n` characters forward, stopping at end-of-input.
    pub fn advance_by(&mut self, n: usize) {
        let n = n.min(self.remaining());
        let rest = self.rest();
        let bytes = rest.char_indices().nth(n).map_or(rest.len(), |(i, _)| i);
        self.pos.char_idx += n;
        self.pos.byte_idx += bytes;
    }

    /// Consumes and returns the character at the cursor, or `None` at
    /// end-of-input (in which case nothing moves).
    #[inline]
    pub fn read_char(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.step(ch);
        Some(ch)
    }

    /// Whether the character at the cursor is a space, tab, line feed or
    /// carriage return. False at end-of-input.
    #[inline]
    #[must_use]
    pub fn is_whitespace(&self) -> bool {
        self.peek().is_some_and(is_scan_whitespace)
    }

    /// Whether the character at the cursor is a letter, digit or underscore.
    ///
    /// Only the current character is checked, not a whole identifier.
    #[inline]
    #[must_use]
    pub fn is_identifier(&self) -> bool {
        self.peek().is_some_and(is_identifier_char)
    }

    /// Skips the (possibly empty) run of whitespace at the cursor.
    pub fn eat_whitespace(&mut self) {
        self.take_while(is_scan_whitespace);
    }

    /// Saves the current position into the mark slot, replacing whatever was
    /// saved before.
    #[inline]
    pub fn mark(&mut self) {
        self.marked = self.pos;
    }

    /// Moves the cursor back (or forward) to the marked position, or to 0 if
    /// [`mark`](Self::mark) was never called.
    #[inline]
    pub fn reset(&mut self) {
        self.pos = self.marked;
    }

    #[inline]
    fn step(&mut self, ch: char) {
        self.pos.char_idx += 1;
        self.pos.byte_idx += ch.len_utf8();
    }

    /// Consumes characters while `pred` holds and returns them as one slice.
    fn take_while(&mut self, mut pred: impl FnMut(char) -> bool) -> &'src str {
        let rest = self.rest();
        let mut chars = 0;
        let mut bytes = 0;
        for ch in rest.chars() {
            if !pred(ch) {
                break;
            }
            chars += 1;
            bytes += ch.len_utf8();
        }
        self.pos.char_idx += chars;
        self.pos.byte_idx += bytes;
        &rest[..bytes]
    }
}
