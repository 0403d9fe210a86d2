//!
//! ## Tags
//!
//! Type annotations in angle brackets: `<int>`.
//!

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    common::LineColumn,
    lexing::{LexError, LexT, ScanStream},
};

use super::{Token, TokenKind};

lazy_static! {
    static ref TAG: Regex = Regex::new(r"^<[A-Za-z0-9_]+>").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    ///
    /// Brackets included.
    ///
    raw: String,
    position: LineColumn,
}

impl Tag {
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl LexT for Tag {
    fn peek(input: &ScanStream) -> bool {
        input.upcoming(&*TAG)
    }

    fn lex(input: &mut ScanStream) -> Result<Self, LexError> {
        let position = input.position();
        let Some(captures) = input.take_match(&TAG) else {
            return Err(input.unknown_token());
        };

        Ok(Self {
            raw: captures[0].to_string(),
            position,
        })
    }
}

impl From<Tag> for Token {
    fn from(value: Tag) -> Self {
        Token::text(TokenKind::Tag, value.raw, value.position)
    }
}
