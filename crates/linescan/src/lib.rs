//! A small character-cursor scanner for hand-written line parsing.
//!
//! [`Scanner`] walks an immutable, fully materialized `&str` one character
//! at a time. On top of the primitive cursor operations (`peek`, `advance`,
//! `read_char`, `mark`/`reset`, ...) it offers a handful of compound readers
//! for comma and whitespace separated fields, quoted literals and
//! case-insensitive lookahead.
//!
//! The scanner fails soft: running out of input reads as `None`, `""` or
//! `false`, never as an error. The `try_*` readers report malformed input
//! through [`ScanError`] for callers that need to tell the difference.
//!
//! ```rust
//! use linescan::Scanner;
//!
//! let mut scanner = Scanner::new("LAYER \"input\" 3, 4");
//! assert!(scanner.look_ahead("layer", true));
//! assert_eq!(scanner.read_to_whitespace(), "LAYER");
//! scanner.eat_whitespace();
//! assert_eq!(scanner.read_quoted_string(), "input");
//! scanner.eat_whitespace();
//! assert_eq!(scanner.read_char(), Some('3'));
//! assert!(scanner.parse_through_comma());
//! scanner.eat_whitespace();
//! assert_eq!(scanner.read_to_whitespace(), "4");
//! assert!(scanner.eol());
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;
#[cfg(test)]
extern crate std;

mod chars;
mod error;
mod options;
mod scanner;

#[cfg(test)]
mod tests;

pub use chars::{is_identifier_char, is_scan_whitespace};
pub use error::ScanError;
pub use options::ScannerOptions;
pub use scanner::Scanner;
