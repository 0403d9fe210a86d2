//!
//! Lexical tokens.
//!

pub mod character;
pub mod comment;
pub mod directive;
pub mod identifier;
pub mod literal;
pub mod number;
pub mod punctuator;
pub mod tag;
pub mod user_code;

use std::fmt::Formatter;

use crate::common::LineColumn;

pub use self::{
    directive::Directive,
    user_code::{Reference, ReferenceForm, ReferenceTarget},
};

///
/// What sort of token this is.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    ///
    /// A `%`-keyword, see [Directive].
    ///
    Directive(Directive),

    ///
    /// `{ ... }` action code.
    ///
    UserCode,

    ///
    /// `<type>`
    ///
    Tag,

    Number,

    ///
    /// An identifier followed by `:`, which starts a rule.
    ///
    IdentColon,

    Ident,
    Semicolon,
    Bar,
    String,
    Char,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Directive(directive) => write!(f, "{directive}"),
            TokenKind::UserCode => f.write_str("User_code"),
            TokenKind::Tag => f.write_str("Tag"),
            TokenKind::Number => f.write_str("Number"),
            TokenKind::IdentColon => f.write_str("Ident_Colon"),
            TokenKind::Ident => f.write_str("Ident"),
            TokenKind::Semicolon => f.write_str("Semicolon"),
            TokenKind::Bar => f.write_str("Bar"),
            TokenKind::String => f.write_str("String"),
            TokenKind::Char => f.write_str("Char"),
        }
    }
}

///
/// The value carried by a token.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenValue {
    ///
    /// Only for [TokenKind::Number].
    ///
    Number(u64),

    ///
    /// The matched text; all of `{ ... }` for [TokenKind::UserCode].
    ///
    Text(String),
}

impl std::fmt::Display for TokenValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Number(n) => write!(f, "{n}"),
            TokenValue::Text(text) => write!(f, "{text:?}"),
        }
    }
}

///
/// A token of the declarations or rules section.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    value: TokenValue,
    position: LineColumn,
    references: Vec<Reference>,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, value: TokenValue, position: LineColumn) -> Self {
        Self {
            kind,
            value,
            position,
            references: vec![],
        }
    }

    pub(crate) fn text(kind: TokenKind, text: impl ToString, position: LineColumn) -> Self {
        Self::new(kind, TokenValue::Text(text.to_string()), position)
    }

    pub(crate) fn with_references(mut self, references: Vec<Reference>) -> Self {
        self.references = references;
        self
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn value(&self) -> &TokenValue {
        &self.value
    }

    ///
    /// The text of this token, unless it is a [TokenKind::Number].
    ///
    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Text(text) => Some(text),
            TokenValue::Number(_) => None,
        }
    }

    ///
    /// The value of a [TokenKind::Number].
    ///
    pub fn number(&self) -> Option<u64> {
        match self.value {
            TokenValue::Number(n) => Some(n),
            TokenValue::Text(_) => None,
        }
    }

    ///
    /// Where the first character of this token is.
    ///
    pub fn position(&self) -> LineColumn {
        self.position
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    ///
    /// Placeholders found in [TokenKind::UserCode], in source order.
    ///
    /// Empty for every other kind.
    ///
    pub fn references(&self) -> &[Reference] {
        &self.references
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}) @ {}", self.kind, self.value, self.position)
    }
}

#[cfg(test)]
mod tests {
    use crate::common::LineColumn;

    use super::{Directive, Token, TokenKind, TokenValue};

    #[test]
    fn display() {
        let ident = Token::text(TokenKind::IdentColon, "expr", LineColumn::new(5, 1));
        assert_eq!(ident.to_string(), "Ident_Colon(\"expr\") @ 5:1");

        let number = Token::new(TokenKind::Number, TokenValue::Number(3), LineColumn::new(1, 9));
        assert_eq!(number.to_string(), "Number(3) @ 1:9");

        let token = Token::text(
            TokenKind::Directive(Directive::Token),
            "%token",
            LineColumn::new(2, 1),
        );
        assert_eq!(token.to_string(), "%token(\"%token\") @ 2:1");
    }

    #[test]
    fn accessors() {
        let number = Token::new(TokenKind::Number, TokenValue::Number(42), LineColumn::new(3, 7));
        assert_eq!(number.number(), Some(42));
        assert_eq!(number.as_str(), None);
        assert_eq!((number.line(), number.column()), (3, 7));
        assert!(number.references().is_empty());
    }
}
