//!
//! ## bisonlex
//! > The lexical front end of a bison-style grammar compiler.
//!
//! Splits a grammar file into its prologue, declarations, rules
//! and epilogue, then tokenizes the declarations and the rules,
//! action code and its `$n`/`@n` placeholders included.
//!
//! ```ignore
//! use bisonlex::Lexer;
//!
//! let lexer = Lexer::new("%{\n%}\n%token NUM\n%%\nexpr: NUM;\n%%\n")?;
//! for token in lexer.grammar_rules_tokens() {
//!     println!("{token}");
//! }
//! ```
//!

pub mod common;
pub mod instrument;
pub mod lexing;

use bisonlex_macros::{BisonRef, Keywords};

pub use lexing::{
    tokens::{Directive, Reference, ReferenceForm, ReferenceTarget, Token, TokenKind, TokenValue},
    LexError, Lexer, LexerConfig, Section, SectionLine,
};
