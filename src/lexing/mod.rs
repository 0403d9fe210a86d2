//!
//! The process of lexing involves splitting a grammar file
//! into its sections, then converting the declarations and rules
//! into lexical tokens according to bison's
//! [lexical grammar](https://www.gnu.org/software/bison/manual/html_node/Grammar-File.html).
//!

mod lexer;
pub mod scanner;
pub mod sections;
pub mod tokens;
pub mod utils;

pub use self::{
    lexer::{Lexer, LexerConfig},
    sections::{Section, SectionLine},
    utils::{Lex, LexError, LexResult, LexT, ScanStream},
};
