//! Parsing of one menu input line.

use alloc::string::{String, ToString};

/// What the user asked the menu to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `*`
    All,
    /// `[tag]`, kept verbatim including the bracket.
    Tag(String),
    /// `"name"`, kept verbatim including the quotes.
    Name(String),
    /// Anything else, parsed as a 1-based menu number. Garbage parses to 0.
    Index(i64),
}

impl Command {
    /// Classify an already trimmed, non-empty line by its first character.
    pub fn parse(line: &str) -> Self {
        match line.as_bytes().first() {
            Some(b'*') => Command::All,
            Some(b'[') => Command::Tag(line.to_string()),
            Some(b'"') => Command::Name(line.to_string()),
            _ => Command::Index(parse_index(line)),
        }
    }
}

/// C `isspace` set, which includes vertical tab unlike `char::is_ascii_whitespace`.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

pub fn trim_trailing_space(line: &str) -> &str {
    line.trim_end_matches(is_space)
}

/// Leading base-10 integer in the manner of `strtol(s, NULL, 10)`.
///
/// Leading whitespace and one sign are accepted, parsing stops at the first
/// non-digit, and a line without digits yields 0. Overflow saturates.
pub fn parse_index(s: &str) -> i64 {
    let s = s.trim_start_matches(is_space);
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }
    value
}
