//!
//! String literals, and the quoted-text scanner
//! shared with action code.
//!

use crate::{
    common::LineColumn,
    lexing::{LexError, LexT, ScanStream},
};

use super::{Token, TokenKind};

///
/// Takes a quoted run of text, starting at its opening
/// `terminator`, up to and including the closing one.
///
/// The text is returned verbatim, quotes included. The literal
/// closes on the next `terminator`, backslash or not.
///
pub fn scan_quoted(input: &mut ScanStream, terminator: char) -> Result<String, LexError> {
    let opened = input.position();
    let mut raw = String::new();

    match input.take() {
        Some(ch) if ch == terminator => raw.push(ch),
        _ => return Err(input.unknown_token()),
    }

    while let Some(ch) = input.take() {
        raw.push(ch);

        if ch == terminator {
            return Ok(raw);
        }
    }

    Err(input.quote_mismatch(terminator, opened))
}

///
/// `"..."`
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    ///
    /// Quotes included.
    ///
    raw: String,
    position: LineColumn,
}

impl StringLiteral {
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl LexT for StringLiteral {
    fn peek(input: &ScanStream) -> bool {
        input.upcoming('"')
    }

    fn lex(input: &mut ScanStream) -> Result<Self, LexError> {
        let position = input.position();
        let raw = scan_quoted(input, '"')?;
        Ok(Self { raw, position })
    }
}

impl From<StringLiteral> for Token {
    fn from(value: StringLiteral) -> Self {
        Token::text(TokenKind::String, value.raw, value.position)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        common::LineColumn,
        lexing::{LexError, ScanStream},
    };

    use super::{scan_quoted, StringLiteral};

    #[test]
    fn double() {
        let input = &mut ScanStream::new(r#""+" rest"#, 1);
        let string: StringLiteral = input.lex().expect("Valid parse");
        assert_eq!(string.raw(), r#""+""#);
        assert_eq!(input.rest(), " rest");
    }

    #[test]
    fn backslash_does_not_escape() {
        let input = &mut ScanStream::new(r#""a\" B"#, 3);
        let string: StringLiteral = input.lex().expect("Valid parse");
        assert_eq!(string.raw(), r#""a\""#);
        assert_eq!(input.rest(), " B");

        let input = &mut ScanStream::new(r"'\' c", 1);
        assert_eq!(scan_quoted(input, '\''), Ok(r"'\'".to_string()));
    }

    #[test]
    fn multi_line() {
        let input = &mut ScanStream::new("\"one\ntwo\" x", 4);
        assert_eq!(scan_quoted(input, '"'), Ok("\"one\ntwo\"".to_string()));
        assert_eq!(input.position(), LineColumn::new(5, 5));
    }

    #[test]
    fn unterminated() {
        let input = &mut ScanStream::new("'abc\ndef", 2);
        let err = scan_quoted(input, '\'').unwrap_err();

        assert_eq!(
            err,
            LexError::QuoteMismatch {
                terminator: '\'',
                opened: LineColumn::new(2, 1),
                position: LineColumn::new(3, 4),
                snippet: "def".to_string(),
            }
        );
    }
}
