//! Turns user text into a 32-bit code.
//!
//! Accepted forms: decimal (`3221225786`, `-1073741510`) and hexadecimal with
//! a `0x` prefix (`0xC000013A`). A leading sign may be `-` or the Unicode
//! minus sign. Anything else is rejected before it reaches the resolver.

use logos::Logos;

/// Longest input accepted, in characters.
pub const MAX_INPUT_LEN: usize = 30;

#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum Token {
    #[token("-")]
    #[token("\u{2212}")]
    Minus,
    #[regex("0[xX][0-9a-fA-F]*")]
    Hex,
    #[regex("[0-9]+")]
    Decimal,
}

/// A validated code together with the text it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCode {
    raw: String,
    value: u32,
}

impl ParsedCode {
    /// The trimmed input text, suitable for caching and re-parsing.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("no code given")]
    Empty,
    #[error("input is {len} characters long, at most {max} are accepted", max = MAX_INPUT_LEN)]
    TooLong { len: usize },
    #[error("unexpected '{snippet}' at position {position}. {suggestion}")]
    UnexpectedChar {
        position: usize, // 1-based character position
        snippet: String,
        suggestion: String,
    },
    #[error("'{text}' does not fit in 32 bits")]
    OutOfRange { text: String },
    #[error("'{text}' is not a number")]
    Malformed { text: String },
}

/// Parse `text` into a code. Surrounding whitespace is ignored.
pub fn parse_code(text: &str) -> Result<ParsedCode, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }
    let len = text.chars().count();
    if len > MAX_INPUT_LEN {
        return Err(InputError::TooLong { len });
    }

    let tokens = lex(text)?;
    let (negative, body) = match tokens.as_slice() {
        [(Token::Minus, _), rest @ ..] => (true, rest),
        rest => (false, rest),
    };

    let value = match body {
        [(Token::Decimal, span)] => decimal(&text[span.clone()], negative, text)?,
        [(Token::Hex, span)] if span.len() == 2 => {
            return Err(unexpected(text, span.start + 1, "A 0x prefix must be followed by hex digits."));
        }
        [(Token::Hex, span)] => {
            let bits = hex(&text[span.start + 2..span.end], text)?;
            if negative { bits.wrapping_neg() } else { bits }
        }
        [] => return Err(InputError::Malformed { text: text.to_string() }),
        [(Token::Minus, span), ..] | [_, (_, span), ..] => {
            return Err(unexpected(text, span.start, "A sign is only allowed once, at the start."));
        }
    };

    Ok(ParsedCode { raw: text.to_string(), value })
}

fn lex(text: &str) -> Result<Vec<(Token, std::ops::Range<usize>)>, InputError> {
    let mut lexer = Token::lexer(text);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                let start = lexer.span().start;
                return Err(unexpected(text, start, &suggest_fix(text, start)));
            }
        }
    }

    Ok(tokens)
}

fn decimal(digits: &str, negative: bool, text: &str) -> Result<u32, InputError> {
    let out_of_range = || InputError::OutOfRange { text: text.to_string() };
    let significant = digits.trim_start_matches('0');
    if significant.len() > 10 {
        return Err(out_of_range());
    }
    let magnitude: u64 = if significant.is_empty() { 0 } else { significant.parse().map_err(|_| out_of_range())? };
    if negative {
        if magnitude > 1 << 31 {
            return Err(out_of_range());
        }
        Ok((magnitude as u32).wrapping_neg())
    } else {
        u32::try_from(magnitude).map_err(|_| out_of_range())
    }
}

fn hex(digits: &str, text: &str) -> Result<u32, InputError> {
    let significant = digits.trim_start_matches('0');
    if significant.len() > 8 {
        return Err(InputError::OutOfRange { text: text.to_string() });
    }
    if significant.is_empty() {
        return Ok(0);
    }
    u32::from_str_radix(significant, 16).map_err(|_| InputError::Malformed { text: text.to_string() })
}

fn unexpected(text: &str, byte_pos: usize, suggestion: &str) -> InputError {
    let snippet = text[byte_pos..].chars().next().map(String::from).unwrap_or_default();
    InputError::UnexpectedChar {
        position: text[..byte_pos].chars().count() + 1,
        snippet,
        suggestion: suggestion.to_string(),
    }
}

/// Every rejection names a way forward.
fn suggest_fix(text: &str, byte_pos: usize) -> String {
    let bad = text[byte_pos..].chars().next().unwrap_or(' ');
    let unsigned = text.trim_start_matches(['-', '\u{2212}']);
    let sign = &text[..text.len() - unsigned.len()];

    if matches!(bad, '_' | ',' | '.' | '\'') {
        let cleaned: String = text.chars().filter(|c| !matches!(c, '_' | ',' | '.' | '\'')).collect();
        format!("Digit separators are not supported: '{cleaned}'")
    } else if bad.is_whitespace() {
        "Remove the whitespace inside the number.".to_string()
    } else if matches!(bad, 'h' | 'H')
        && byte_pos == text.len() - 1
        && unsigned[..unsigned.len() - 1].chars().all(|c| c.is_ascii_hexdigit())
    {
        format!("Use a 0x prefix instead of an h suffix: '{sign}0x{}'", &unsigned[..unsigned.len() - 1])
    } else if bad.is_ascii_hexdigit() && unsigned.chars().all(|c| c.is_ascii_hexdigit()) {
        format!("Hexadecimal values need a 0x prefix: '{sign}0x{unsigned}'")
    } else if matches!(bad, 'x' | 'X') {
        "A 0x prefix must come first and be followed by hex digits.".to_string()
    } else {
        "Only decimal digits, a 0x prefix with hex digits a-f, and a leading '-' are accepted.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(text: &str) -> u32 {
        parse_code(text).unwrap_or_else(|e| panic!("{text:?} should parse: {e}")).value()
    }

    #[test]
    fn parse_decimal() {
        assert_eq!(value("0"), 0);
        assert_eq!(value("5"), 5);
        assert_eq!(value("3221225786"), 0xC000_013A);
        assert_eq!(value("4294967295"), u32::MAX);
        assert_eq!(value("0000000000000000000042"), 42);
    }

    #[test]
    fn parse_negative_decimal() {
        assert_eq!(value("-1073741510"), 0xC000_013A);
        assert_eq!(value("-1"), u32::MAX);
        assert_eq!(value("-2147483648"), 0x8000_0000);
        assert_eq!(value("-0"), 0);
    }

    #[test]
    fn parse_unicode_minus() {
        assert_eq!(value("\u{2212}1"), u32::MAX);
    }

    #[test]
    fn parse_hex() {
        assert_eq!(value("0xC0000056"), 0xC000_0056);
        assert_eq!(value("0xc0000056"), 0xC000_0056);
        assert_eq!(value("0X240005"), 0x0024_0005);
        assert_eq!(value("0xDEADDEAD"), 0xDEAD_DEAD);
        assert_eq!(value("0x0000000009"), 9);
        assert_eq!(value("0x0"), 0);
    }

    #[test]
    fn parse_negative_hex_negates_bits() {
        assert_eq!(value("-0x1"), u32::MAX);
        assert_eq!(value("-0x80000000"), 0x8000_0000);
        assert_eq!(value("-0xC0000056"), 0x3FFF_FFAA);
    }

    #[test]
    fn decimal_and_hex_spellings_agree() {
        assert_eq!(value("3221225786"), value("0xC000013A"));
        assert_eq!(value("-1073741510"), value("0xC000013A"));
        assert_eq!(value("3221225558"), value("0xC0000056"));
        assert_eq!(value("-1073741738"), value("0xC0000056"));
    }

    #[test]
    fn surrounding_whitespace_ignored_and_raw_kept() {
        let p = parse_code("  0x09\t").unwrap();
        assert_eq!(p.value(), 9);
        assert_eq!(p.raw(), "0x09");
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(parse_code(""), Err(InputError::Empty));
        assert_eq!(parse_code("   "), Err(InputError::Empty));
    }

    #[test]
    fn too_long_rejected() {
        let text = "1".repeat(MAX_INPUT_LEN + 1);
        assert_eq!(parse_code(&text), Err(InputError::TooLong { len: MAX_INPUT_LEN + 1 }));
        assert!(parse_code(&"0".repeat(MAX_INPUT_LEN)).is_ok());
    }

    #[test]
    fn out_of_range_rejected() {
        for text in ["4294967296", "-2147483649", "0x100000000", "99999999999999999999"] {
            assert!(
                matches!(parse_code(text), Err(InputError::OutOfRange { .. })),
                "{text} should be out of range"
            );
        }
    }

    #[test]
    fn bare_sign_is_malformed() {
        assert!(matches!(parse_code("-"), Err(InputError::Malformed { .. })));
    }

    #[test]
    fn misplaced_sign_rejected() {
        match parse_code("12-3") {
            Err(InputError::UnexpectedChar { position, snippet, .. }) => {
                assert_eq!(position, 3);
                assert_eq!(snippet, "-");
            }
            other => panic!("expected UnexpectedChar, got {other:?}"),
        }
        assert!(matches!(parse_code("--5"), Err(InputError::UnexpectedChar { position: 2, .. })));
    }

    #[test]
    fn hex_without_prefix_suggests_prefix() {
        match parse_code("DEADDEAD") {
            Err(InputError::UnexpectedChar { position, suggestion, .. }) => {
                assert_eq!(position, 1);
                assert!(suggestion.contains("'0xDEADDEAD'"), "got: {suggestion}");
            }
            other => panic!("expected UnexpectedChar, got {other:?}"),
        }
        match parse_code("80070005h") {
            Err(InputError::UnexpectedChar { suggestion, .. }) => {
                assert!(suggestion.contains("'0x80070005'"), "got: {suggestion}");
            }
            other => panic!("expected UnexpectedChar, got {other:?}"),
        }
    }

    #[test]
    fn digit_separators_rejected_with_cleaned_suggestion() {
        match parse_code("1_000") {
            Err(InputError::UnexpectedChar { snippet, suggestion, .. }) => {
                assert_eq!(snippet, "_");
                assert!(suggestion.contains("'1000'"), "got: {suggestion}");
            }
            other => panic!("expected UnexpectedChar, got {other:?}"),
        }
    }

    #[test]
    fn prefix_without_digits_rejected() {
        match parse_code("0x") {
            Err(InputError::UnexpectedChar { position, snippet, .. }) => {
                assert_eq!(position, 2);
                assert_eq!(snippet, "x");
            }
            other => panic!("expected UnexpectedChar, got {other:?}"),
        }
    }

    #[test]
    fn non_ascii_reports_character_position() {
        match parse_code("12é") {
            Err(InputError::UnexpectedChar { position, snippet, .. }) => {
                assert_eq!(position, 3);
                assert_eq!(snippet, "é");
            }
            other => panic!("expected UnexpectedChar, got {other:?}"),
        }
    }

    #[test]
    fn error_messages_are_readable() {
        let e = parse_code("0x1FFFFFFFF").unwrap_err();
        assert_eq!(e.to_string(), "'0x1FFFFFFFF' does not fit in 32 bits");
        let e = parse_code(&"9".repeat(31)).unwrap_err();
        assert_eq!(e.to_string(), "input is 31 characters long, at most 30 are accepted");
    }
}
