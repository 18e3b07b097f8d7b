#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use linescan::{ScanError, Scanner, ScannerOptions};

#[derive(Arbitrary, Debug, Clone, Copy)]
enum Op {
    Peek,
    Advance,
    AdvanceBy(u8),
    ReadChar,
    EatWhitespace,
    Mark,
    Reset,
    ParseThroughComma,
    ParseThroughSeparator,
    ReadToWhitespace,
    ReadQuotedString,
    TryReadQuotedString,
    LookAhead { len: u8, ignore_case: bool },
}

#[derive(Arbitrary, Debug)]
struct Input {
    quote: char,
    separator: char,
    line: String,
    ops: Vec<Op>,
}

fn run(input: &Input) {
    let options = ScannerOptions {
        quote: input.quote,
        separator: input.separator,
    };
    let mut s = Scanner::with_options(&input.line, options);
    let len = input.line.chars().count();
    assert_eq!(s.len(), len);

    for &op in &input.ops {
        let before = s.position();
        match op {
            Op::Peek => {
                assert_eq!(s.peek(), input.line.chars().nth(before));
            }
            Op::Advance => s.advance(),
            Op::AdvanceBy(n) => s.advance_by(usize::from(n)),
            Op::ReadChar => {
                let peeked = s.peek();
                assert_eq!(s.read_char(), peeked);
            }
            Op::EatWhitespace => s.eat_whitespace(),
            Op::Mark => s.mark(),
            Op::Reset => {
                s.reset();
                assert_eq!(s.position(), s.marked());
            }
            Op::ParseThroughComma => {
                let _ = s.parse_through_comma();
            }
            Op::ParseThroughSeparator => {
                let _ = s.parse_through_separator();
            }
            Op::ReadToWhitespace => {
                let word = s.read_to_whitespace();
                assert_eq!(s.position(), before + word.chars().count());
            }
            Op::ReadQuotedString => {
                let literal = s.read_quoted_string();
                assert!(!literal.contains(input.quote));
            }
            Op::TryReadQuotedString => match s.try_read_quoted_string() {
                Ok(Some(literal)) => {
                    assert_eq!(s.position(), before + literal.chars().count() + 2);
                }
                Ok(None) | Err(ScanError::UnterminatedQuote { .. }) => {
                    assert_eq!(s.position(), before);
                }
                Err(err) => panic!("unexpected error: {err}"),
            },
            Op::LookAhead { len, ignore_case } => {
                let pattern: String = s.rest().chars().take(usize::from(len)).collect();
                assert!(s.look_ahead(&pattern, ignore_case));
                assert_eq!(s.position(), before);
            }
        }

        assert!(s.position() <= len);
        assert_eq!(s.position() + s.remaining(), len);
        assert_eq!(s.rest().chars().count(), s.remaining());
    }
}

fuzz_target!(|input: Input| run(&input));
