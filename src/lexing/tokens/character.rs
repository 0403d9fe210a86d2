//!
//! ## Character literals
//!
//! `'x'`, `'\n'` and `'\013'` used as token names.
//!

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    common::LineColumn,
    lexing::{LexError, LexT, ScanStream},
};

use super::{Token, TokenKind};

lazy_static! {
    ///
    /// Escaped forms are tried first, so `'\''` is one literal.
    /// A lone backslash is still a character: `'\'`.
    ///
    static ref CHARACTER: Regex = Regex::new(r"^'(?:\\[0-9]+|\\.|[^\n])'").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharLiteral {
    ///
    /// Quotes included.
    ///
    raw: String,
    position: LineColumn,
}

impl CharLiteral {
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl LexT for CharLiteral {
    fn peek(input: &ScanStream) -> bool {
        input.upcoming(&*CHARACTER)
    }

    fn lex(input: &mut ScanStream) -> Result<Self, LexError> {
        let position = input.position();
        let Some(captures) = input.take_match(&CHARACTER) else {
            return Err(input.unknown_token());
        };

        Ok(Self {
            raw: captures[0].to_string(),
            position,
        })
    }
}

impl From<CharLiteral> for Token {
    fn from(value: CharLiteral) -> Self {
        Token::text(TokenKind::Char, value.raw, value.position)
    }
}

#[cfg(test)]
mod tests {
    use crate::lexing::ScanStream;

    use super::CharLiteral;

    #[test]
    fn forms() {
        for src in ["'+'", "'''", r"'\''", r"'\\'", r"'\n'", r"'\013'"] {
            let input = &mut ScanStream::new(src, 1);
            let literal: CharLiteral = input.lex().expect("Valid parse");
            assert_eq!(literal.raw(), src);
            assert!(input.at_end(), "{src}");
        }
    }

    #[test]
    fn lone_backslash() {
        let input = &mut ScanStream::new(r"'\' x", 1);
        let literal: CharLiteral = input.lex().expect("Valid parse");
        assert_eq!(literal.raw(), r"'\'");
        assert_eq!(input.rest(), " x");
    }

    #[test]
    fn not_characters() {
        for src in ["'ab'", "''", "'\n'", "'\\"] {
            let input = &mut ScanStream::new(src, 1);
            assert!(input.lex::<CharLiteral>().into_result().unwrap().is_none(), "{src:?}");
        }
    }
}
