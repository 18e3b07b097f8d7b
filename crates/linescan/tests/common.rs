#![allow(missing_docs)]
#![allow(dead_code)]

/// A layer definition line: keyword, quoted name, then comma separated sizes.
/// The trailing literal is deliberately left unterminated.
pub const LAYER_LINE: &str = r#"LAYER "input" 3 , 4,5 "open"#;

/// Empty literal and doubled separators.
pub const SPARSE_LINE: &str = r#"  "" ,, x"#;

/// Comma separated records with optional quoting.
pub const RECORDS: &[&str] = &[
    r#"1, "Ada Lovelace", true"#,
    r#"2,"Grace, Hopper",FALSE"#,
    "3 ,  plain text  ,  True",
    r#"4,,"""#,
];
