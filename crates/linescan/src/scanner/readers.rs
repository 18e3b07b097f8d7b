//! Compound readers built from the primitive cursor operations.

use tracing::{debug, trace};

use super::Scanner;
use crate::{
    ScanError,
    chars::{chars_match, is_scan_whitespace},
};

impl<'src> Scanner<'src> {
    /// Skips whitespace, then consumes `delimiter` if it is next.
    ///
    /// Returns `false` when the next non-whitespace character is anything
    /// else (or the input ended). The skipped whitespace stays consumed in
    /// both cases, so the cursor always rests on the next meaningful
    /// character.
    pub fn parse_through(&mut self, delimiter: char) -> bool {
        self.eat_whitespace();
        if self.peek() == Some(delimiter) {
            self.advance();
            trace!(%delimiter, position = self.position(), "parsed through delimiter");
            true
        } else {
            false
        }
    }

    /// [`parse_through`](Self::parse_through) with `','`.
    ///
    /// ```rust
    /// use linescan::Scanner;
    ///
    /// let mut scanner = Scanner::new("  ,abc");
    /// assert!(scanner.parse_through_comma());
    /// assert_eq!(scanner.position(), 3);
    /// ```
    pub fn parse_through_comma(&mut self) -> bool {
        self.parse_through(',')
    }

    /// [`parse_through`](Self::parse_through) with the configured
    /// [`separator`](crate::ScannerOptions::separator).
    pub fn parse_through_separator(&mut self) -> bool {
        self.parse_through(self.options.separator)
    }

    /// Consumes and returns the run of non-whitespace characters at the
    /// cursor. Empty when the cursor is on whitespace or at end-of-input.
    pub fn read_to_whitespace(&mut self) -> &'src str {
        let word = self.take_while(|ch| !is_scan_whitespace(ch));
        trace!(word, position = self.position(), "read to whitespace");
        word
    }

    /// Whether the next characters spell `pattern`, without consuming them.
    ///
    /// With `ignore_case`, characters are compared through their lowercase
    /// forms. Returns `false` straight away when fewer characters remain than
    /// `pattern` has. An empty pattern always matches.
    #[must_use]
    pub fn look_ahead(&self, pattern: &str, ignore_case: bool) -> bool {
        if self.remaining() < pattern.chars().count() {
            return false;
        }
        pattern
            .chars()
            .zip(self.rest().chars())
            .all(|(want, have)| chars_match(want, have, ignore_case))
    }

    /// Reads a quoted literal starting at the cursor.
    ///
    /// If the cursor is not on the quote character, returns `""` and does not
    /// move. Otherwise consumes the opening quote, the literal text and the
    /// closing quote, and returns the text between the quotes. There are no
    /// escapes: the first quote after the opening one ends the literal.
    ///
    /// An unterminated literal is not an error here: everything up to
    /// end-of-input is returned and the cursor is left at end-of-input. Use
    /// [`try_read_quoted_string`](Self::try_read_quoted_string) to tell the
    /// two cases apart.
    pub fn read_quoted_string(&mut self) -> &'src str {
        let quote = self.options.quote;
        if self.peek() != Some(quote) {
            return "";
        }
        let start = self.position();
        self.advance();
        let literal = self.take_while(|ch| ch != quote);
        if self.eol() {
            debug!(start, "unterminated quoted literal");
        }
        // closing quote; clamped at end-of-input
        self.advance();
        trace!(literal, start, "read quoted literal");
        literal
    }

    /// Strict form of [`read_quoted_string`](Self::read_quoted_string).
    ///
    /// Returns `Ok(None)` without moving when the cursor is not on the quote
    /// character, and `Ok(Some(text))` with the cursor after the closing
    /// quote for a complete literal.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::UnterminatedQuote`] when end-of-input is reached
    /// before the closing quote. The cursor is then put back on the opening
    /// quote; the mark slot is not touched.
    pub fn try_read_quoted_string(&mut self) -> Result<Option<&'src str>, ScanError> {
        let quote = self.options.quote;
        if self.peek() != Some(quote) {
            return Ok(None);
        }
        let saved = self.pos;
        self.advance();
        let literal = self.take_while(|ch| ch != quote);
        if self.read_char() == Some(quote) {
            Ok(Some(literal))
        } else {
            self.pos = saved;
            Err(ScanError::UnterminatedQuote {
                start: saved.char_idx,
            })
        }
    }
}
