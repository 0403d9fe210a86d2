//!
//! ## Identifiers
//!
//! Symbol names, and symbol names which start a rule (`expr:`).
//!

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    common::LineColumn,
    lexing::{LexError, LexT, ScanStream},
    BisonRef,
};

use super::{Token, TokenKind};

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_.][-A-Za-z0-9_.]*").unwrap();
}

#[BisonRef("Symbols", "Symbols, Terminal and Nonterminal")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    name: String,
    position: LineColumn,

    ///
    /// Was this followed by a `:`?
    ///
    colon: bool,
}

impl Identifier {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_colon(&self) -> bool {
        self.colon
    }
}

impl LexT for Identifier {
    fn peek(input: &ScanStream) -> bool {
        input.upcoming(&*IDENTIFIER)
    }

    fn lex(input: &mut ScanStream) -> Result<Self, LexError> {
        let position = input.position();
        let Some(captures) = input.take_match(&IDENTIFIER) else {
            return Err(input.unknown_token());
        };
        let name = captures[0].to_string();

        // Only commit to eating the whitespace if a colon follows it.
        let mut fork = input.fork();
        fork.take_while(|ch| ch.is_whitespace());
        let colon = fork.upcoming(':');
        if colon {
            fork.take();
            input.advance_to(fork);
        }

        Ok(Self {
            name,
            position,
            colon,
        })
    }
}

impl From<Identifier> for Token {
    fn from(value: Identifier) -> Self {
        let kind = match value.colon {
            true => TokenKind::IdentColon,
            false => TokenKind::Ident,
        };

        Token::text(kind, value.name, value.position)
    }
}
