use rstest::rstest;

use crate::{Scanner, ScannerOptions};

#[rstest]
#[case('a', true)]
#[case('Z', true)]
#[case('3', true)]
#[case('_', true)]
#[case('ß', true)]
#[case(' ', false)]
#[case('!', false)]
#[case('-', false)]
#[case('"', false)]
fn is_identifier_current_char(#[case] ch: char, #[case] expected: bool) {
    let mut buf = [0u8; 4];
    let s = Scanner::new(ch.encode_utf8(&mut buf));
    assert_eq!(s.is_identifier(), expected);
}

#[test]
fn is_identifier_false_at_eol() {
    let mut s = Scanner::new("x");
    s.advance();
    assert!(!s.is_identifier());
}

#[rstest]
#[case("  ,abc", true, 3)]
#[case(",", true, 1)]
#[case("abc", false, 0)]
#[case(" \t abc", false, 3)]
#[case("", false, 0)]
#[case("\r\n,\n", true, 3)]
fn parse_through_comma_cases(
    #[case] line: &str,
    #[case] expected: bool,
    #[case] position: usize,
) {
    let mut s = Scanner::new(line);
    assert_eq!(s.parse_through_comma(), expected);
    assert_eq!(s.position(), position);
}

#[rstest]
#[case("hello world", "hello", 5)]
#[case("hello", "hello", 5)]
#[case(" hello", "", 0)]
#[case("a,b\tc", "a,b", 3)]
#[case("\"quoted text\"", "\"quoted", 7)]
#[case("", "", 0)]
fn read_to_whitespace_cases(#[case] line: &str, #[case] word: &str, #[case] position: usize) {
    let mut s = Scanner::new(line);
    assert_eq!(s.read_to_whitespace(), word);
    assert_eq!(s.position(), position);
}

#[rstest]
#[case("Hello", "Hello", false, true)]
#[case("Hello", "hello", false, false)]
#[case("Hello", "hELLO", true, true)]
#[case("Hello", "Help", true, false)]
#[case("Hello", "Hello!", true, false)]
#[case("ÄRGER", "ärg", true, true)]
#[case("ÄRGER", "ärg", false, false)]
#[case("", "", false, true)]
fn look_ahead_cases(
    #[case] line: &str,
    #[case] pattern: &str,
    #[case] ignore_case: bool,
    #[case] expected: bool,
) {
    let s = Scanner::new(line);
    assert_eq!(s.look_ahead(pattern, ignore_case), expected);
    assert_eq!(s.position(), 0);
}

#[rstest]
#[case("\"abc\"", "abc", 5)]
#[case("\"abc\" tail", "abc", 5)]
#[case("\"\"", "", 2)]
#[case("\"a,b c\",", "a,b c", 7)]
#[case("\"unterminated", "unterminated", 13)]
#[case("abc", "", 0)]
#[case(" \"abc\"", "", 0)]
fn read_quoted_string_cases(#[case] line: &str, #[case] literal: &str, #[case] position: usize) {
    let mut s = Scanner::new(line);
    assert_eq!(s.read_quoted_string(), literal);
    assert_eq!(s.position(), position);
}

#[rstest]
#[case('\'', "'x y' z", "x y")]
#[case('|', "|a\"b|", "a\"b")]
fn read_quoted_string_custom_quote(#[case] quote: char, #[case] line: &str, #[case] literal: &str) {
    let options = ScannerOptions {
        quote,
        ..ScannerOptions::default()
    };
    let mut s = Scanner::with_options(line, options);
    assert_eq!(s.read_quoted_string(), literal);
    assert_eq!(s.try_read_quoted_string(), Ok(None));
}
