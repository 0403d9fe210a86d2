//!
//! ## Directives
//!
//! The `%`-keywords of the declarations section: `%token`, `%type`, ...
//!

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    common::LineColumn,
    lexing::{LexError, LexT, ScanStream},
    BisonRef, Keywords,
};

///
/// Spelling of the directive marking an empty rule.
///
/// It is consumed, but no token is made for it.
///
pub const EMPTY: &str = "%empty";

lazy_static! {
    static ref PERCENT_WORD: Regex = Regex::new(r"^%[A-Za-z_.][-A-Za-z0-9_.]*").unwrap();
}

#[BisonRef("Decl-Summary", "Bison Declaration Summary")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Keywords)]
pub enum Directive {
    #[keyword("%expect")]
    Expect,
    #[keyword("%define")]
    Define,
    #[keyword("%printer")]
    Printer,
    #[keyword("%lex-param")]
    LexParam,
    #[keyword("%parse-param")]
    ParseParam,
    #[keyword("%initial-action")]
    InitialAction,
    #[keyword("%union")]
    Union,
    #[keyword("%token")]
    Token,
    #[keyword("%type")]
    Type,
    #[keyword("%nonassoc")]
    Nonassoc,
    #[keyword("%left")]
    Left,
    #[keyword("%right")]
    Right,
    #[keyword("%prec")]
    Prec,
}

impl std::fmt::Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

///
/// A whole `%word`.
///
/// Words are read to their end before being looked up,
/// so `%lefty` is never `%left` followed by `y`.
///
#[derive(Debug)]
pub enum PercentWord {
    Directive(Directive, LineColumn),

    ///
    /// `%empty`.
    ///
    Empty,

    ///
    /// A directive (or `%empty`) run on into a longer word,
    /// like `%lefty`. Kept whole.
    ///
    Other(String, LineColumn),
}

impl LexT for PercentWord {
    fn peek(input: &ScanStream) -> bool {
        input.upcoming(&*PERCENT_WORD)
    }

    fn lex(input: &mut ScanStream) -> Result<Self, LexError> {
        let start = input.fork();
        let position = input.position();
        let Some(captures) = input.take_match(&PERCENT_WORD) else {
            return Err(input.unknown_token());
        };
        let word = &captures[0];

        if word == EMPTY {
            return Ok(Self::Empty);
        }

        if let Some(directive) = Directive::from_keyword(word) {
            return Ok(Self::Directive(directive, position));
        }

        if extends_keyword(word) {
            return Ok(Self::Other(word.to_string(), position));
        }

        Err(start.unknown_token())
    }
}

///
/// Does `word` start with a directive or `%empty`, and go on past it?
///
fn extends_keyword(word: &str) -> bool {
    Directive::ALL
        .iter()
        .map(Directive::keyword)
        .chain([EMPTY])
        .any(|keyword| word.len() > keyword.len() && word.starts_with(keyword))
}
