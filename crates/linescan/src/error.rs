use core::str::Utf8Error;

use thiserror::Error;

/// Errors reported by the strict scanner entry points.
///
/// The primitive operations and compound readers never fail; they signal
/// "nothing here" with `None`, `""` or `false`. Only the `try_*` readers and
/// the byte-slice constructor return a `ScanError`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// A quoted literal reached end-of-input before its closing quote.
    #[error("unterminated quoted literal starting at position {start}")]
    UnterminatedQuote {
        /// Character position of the opening quote.
        start: usize,
    },
    /// The input bytes were not valid UTF-8.
    #[error("invalid utf-8 input: {0}")]
    InvalidUtf8(#[from] Utf8Error),
}
