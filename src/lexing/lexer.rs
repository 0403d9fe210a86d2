//!
//! ## Lexer
//!
//! Splits a grammar file and tokenizes its declarations and rules,
//! all at construction.
//!

use crate::instrument::report_duration;

use super::{
    scanner::scan,
    sections::{split, Section, SectionLine, Sections},
    tokens::Token,
    LexError,
};

///
/// Construction-time options for the [Lexer].
///
/// None of these change the tokens produced.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LexerConfig {
    ///
    /// Emit a `trace` event for every token lexed.
    ///
    pub debug: bool,
}

///
/// A fully lexed grammar file.
///
/// Either every phase succeeds and all buffers are filled,
/// or construction fails with the first [LexError].
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexer {
    sections: Sections,
    bison_declarations_tokens: Vec<Token>,
    grammar_rules_tokens: Vec<Token>,
}

impl Lexer {
    pub fn new(text: &str) -> Result<Self, LexError> {
        Self::with_config(text, LexerConfig::default())
    }

    pub fn with_config(text: &str, config: LexerConfig) -> Result<Self, LexError> {
        report_duration("lex", || {
            let sections = report_duration("split", || split(text))?;

            let bison_declarations_tokens = report_duration("bison_declarations", || {
                scan(&sections.bison_declarations, &config)
            })?;
            let grammar_rules_tokens =
                report_duration("grammar_rules", || scan(&sections.grammar_rules, &config))?;

            Ok(Self {
                sections,
                bison_declarations_tokens,
                grammar_rules_tokens,
            })
        })
    }

    ///
    /// The `%{ ... %}` block, bracketed by an empty
    /// entry for each of its delimiter lines.
    ///
    pub fn prologue(&self) -> &[SectionLine] {
        &self.sections.prologue
    }

    pub fn bison_declarations(&self) -> &[SectionLine] {
        &self.sections.bison_declarations
    }

    pub fn grammar_rules(&self) -> &[SectionLine] {
        &self.sections.grammar_rules
    }

    pub fn epilogue(&self) -> &[SectionLine] {
        &self.sections.epilogue
    }

    pub fn bison_declarations_tokens(&self) -> &[Token] {
        &self.bison_declarations_tokens
    }

    pub fn grammar_rules_tokens(&self) -> &[Token] {
        &self.grammar_rules_tokens
    }

    pub fn section(&self, section: Section) -> &[SectionLine] {
        self.sections.get(section)
    }

    ///
    /// The lines of `section`, joined back into text.
    ///
    pub fn section_text(&self, section: Section) -> String {
        self.section(section).iter().map(SectionLine::text).collect()
    }
}
