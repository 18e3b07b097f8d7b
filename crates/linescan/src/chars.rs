//! Character classes recognized by the scanner.

/// The four whitespace characters the scanner skips over: space, tab, line
/// feed and carriage return.
///
/// Other Unicode whitespace (e.g. U+00A0) is *not* whitespace here.
#[inline]
#[must_use]
pub const fn is_scan_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

/// Letters, digits and underscore.
#[inline]
#[must_use]
pub fn is_identifier_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Compares two characters, folding case when `ignore_case` is set.
///
/// Case folding goes through `char::to_lowercase`, so a character whose
/// lowercase form expands to several characters only matches an identical
/// expansion.
#[inline]
pub(crate) fn chars_match(a: char, b: char, ignore_case: bool) -> bool {
    a == b || (ignore_case && a.to_lowercase().eq(b.to_lowercase()))
}
