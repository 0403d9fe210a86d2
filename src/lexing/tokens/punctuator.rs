//!
//! ## Punctuators
//!
//! Pieces of punctuation: `;` and `|`.
//!

use crate::{
    common::LineColumn,
    lexing::{LexError, LexT, ScanStream},
};

use super::{Token, TokenKind};

///
/// `; |`
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punctuator {
    Semicolon(LineColumn),
    Bar(LineColumn),
}

impl LexT for Punctuator {
    fn peek(input: &ScanStream) -> bool {
        input.upcoming(';') || input.upcoming('|')
    }

    fn lex(input: &mut ScanStream) -> Result<Self, LexError> {
        let position = input.position();
        match input.take() {
            Some(';') => Ok(Self::Semicolon(position)),
            Some('|') => Ok(Self::Bar(position)),
            _ => Err(input.unknown_token()),
        }
    }
}

impl From<Punctuator> for Token {
    fn from(value: Punctuator) -> Self {
        match value {
            Punctuator::Semicolon(position) => Token::text(TokenKind::Semicolon, ";", position),
            Punctuator::Bar(position) => Token::text(TokenKind::Bar, "|", position),
        }
    }
}
