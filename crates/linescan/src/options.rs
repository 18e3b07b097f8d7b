/// Configuration options for a [`Scanner`](crate::Scanner).
///
/// The defaults reproduce the classic comma-separated, double-quoted line
/// format. Options are fixed at construction and never change during a scan.
///
/// # Examples
///
/// ```rust
/// use linescan::{Scanner, ScannerOptions};
///
/// let options = ScannerOptions {
///     quote: '\'',
///     separator: ';',
/// };
/// let mut scanner = Scanner::with_options("'a b' ; next", options);
/// assert_eq!(scanner.read_quoted_string(), "a b");
/// assert!(scanner.parse_through_separator());
/// ```
///
/// # Default
///
/// `quote` is `'"'` and `separator` is `','`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScannerOptions {
    /// The character that opens and closes a quoted literal.
    ///
    /// Used by [`Scanner::read_quoted_string`](crate::Scanner::read_quoted_string)
    /// and [`Scanner::try_read_quoted_string`](crate::Scanner::try_read_quoted_string).
    /// There is no escape character: the first quote after the opening one
    /// always ends the literal.
    ///
    /// # Default
    ///
    /// `'"'`
    pub quote: char,

    /// The field separator consumed by
    /// [`Scanner::parse_through_separator`](crate::Scanner::parse_through_separator).
    ///
    /// [`Scanner::parse_through_comma`](crate::Scanner::parse_through_comma)
    /// always uses `','` regardless of this setting.
    ///
    /// # Default
    ///
    /// `','`
    pub separator: char,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        Self {
            quote: '"',
            separator: ',',
        }
    }
}
