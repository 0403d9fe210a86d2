//!
//! ## Numbers
//!
//! Plain decimal integers, as in `%expect 2`.
//!

use crate::{
    common::LineColumn,
    lexing::{LexError, LexT, ScanStream},
};

use super::{Token, TokenKind, TokenValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Number {
    value: u64,
    position: LineColumn,
}

impl Number {
    pub fn value(&self) -> u64 {
        self.value
    }
}

///
/// Parses a run of ASCII digits, reporting digits
/// too large for a `u64` as an unknown token at `input`.
///
pub(crate) fn parse_digits(digits: &str, input: &ScanStream) -> Result<u64, LexError> {
    digits.parse().map_err(|_| LexError::UnknownToken {
        found: digits.to_string(),
        position: input.position(),
        snippet: input.snippet().to_string(),
    })
}

impl LexT for Number {
    fn peek(input: &ScanStream) -> bool {
        input.upcoming(char::is_ascii_digit)
    }

    fn lex(input: &mut ScanStream) -> Result<Self, LexError> {
        let position = input.position();
        let fork = input.fork();
        let digits = input.take_while(char::is_ascii_digit).unwrap_or_default();

        Ok(Self {
            value: parse_digits(digits, &fork)?,
            position,
        })
    }
}

impl From<Number> for Token {
    fn from(value: Number) -> Self {
        Token::new(TokenKind::Number, TokenValue::Number(value.value), value.position)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        common::LineColumn,
        lexing::{LexError, ScanStream},
    };

    use super::Number;

    #[test]
    fn decimal() {
        let input = &mut ScanStream::new("0042 7", 1);
        let number: Number = input.lex().expect("Valid parse");
        assert_eq!(number.value(), 42);
        assert_eq!(input.rest(), " 7");
    }

    #[test]
    fn too_large() {
        let input = &mut ScanStream::new("99999999999999999999999", 3);
        let err = input.lex::<Number>().into_result().unwrap_err();
        assert!(matches!(
            err,
            LexError::UnknownToken { position: LineColumn { line: 3, column: 1 }, .. }
        ));
    }
}
