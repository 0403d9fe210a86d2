//!
//! ## Action code
//!
//! Brace-delimited host-language code, and the semantic-value
//! placeholders (`$$`, `$1`, `$<tag>2`, `@$`, `@1`) inside it.
//!

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    common::{LineColumn, Span},
    lexing::{Lex, LexError, LexT, ScanStream},
    BisonRef,
};

use super::{comment::Comment, literal::scan_quoted, number::parse_digits, Token, TokenKind};

lazy_static! {
    static ref DOLLAR: Regex = Regex::new(r"^\$(<[A-Za-z0-9_]+>)?(?:(\$)|([0-9]+))").unwrap();
    static ref AT: Regex = Regex::new(r"^@(?:(\$)|([0-9]+))").unwrap();
}

///
/// `$...` or `@...`
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceForm {
    ///
    /// A semantic value.
    ///
    Dollar,

    ///
    /// A location.
    ///
    At,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceTarget {
    ///
    /// The rule's own left-hand side: `$$`, `@$`.
    ///
    Whole,

    ///
    /// The n-th symbol of the right-hand side: `$n`, `@n`.
    ///
    Index(u64),
}

///
/// A placeholder found inside action code.
///
#[BisonRef("Actions")]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    form: ReferenceForm,
    target: ReferenceTarget,

    ///
    /// The `<tag>` of `$<tag>n`, as a [TokenKind::Tag] token.
    ///
    tag: Option<Token>,

    ///
    /// Where the placeholder sits inside the code's text.
    ///
    span: Span,
}

impl Reference {
    pub fn form(&self) -> ReferenceForm {
        self.form
    }

    pub fn target(&self) -> ReferenceTarget {
        self.target
    }

    pub fn tag(&self) -> Option<&Token> {
        self.tag.as_ref()
    }

    ///
    /// Byte offset of the placeholder's first character in the code.
    ///
    pub fn start(&self) -> usize {
        self.span.start
    }

    ///
    /// Byte offset of the placeholder's last character in the code (inclusive).
    ///
    pub fn end(&self) -> usize {
        self.span.end - 1
    }

    ///
    /// The placeholder's text, given the code it was found in.
    ///
    pub fn placeholder<'a>(&self, code: &'a str) -> Option<&'a str> {
        code.get(self.span.as_range())
    }
}

///
/// A placeholder, before it is placed in its code.
///
#[derive(Debug)]
struct Placeholder {
    form: ReferenceForm,
    target: ReferenceTarget,
    tag: Option<Token>,
    len: usize,
}

impl Placeholder {
    ///
    /// Anchors this placeholder at byte `offset` of the code.
    ///
    fn at(self, offset: usize) -> Reference {
        Reference {
            form: self.form,
            target: self.target,
            tag: self.tag,
            span: Span::new(offset, offset + self.len),
        }
    }
}

impl LexT for Placeholder {
    fn peek(input: &ScanStream) -> bool {
        input.upcoming(&*DOLLAR) || input.upcoming(&*AT)
    }

    fn lex(input: &mut ScanStream) -> Result<Self, LexError> {
        let start = input.fork();
        let position = input.position();

        if let Some(captures) = input.take_match(&DOLLAR) {
            let tag = captures
                .get(1)
                .map(|tag| Token::text(TokenKind::Tag, tag.as_str(), position.shifted(1)));
            let target = match captures.get(3) {
                Some(digits) => ReferenceTarget::Index(parse_digits(digits.as_str(), &start)?),
                None => ReferenceTarget::Whole,
            };

            return Ok(Self {
                form: ReferenceForm::Dollar,
                target,
                tag,
                len: captures[0].len(),
            });
        }

        if let Some(captures) = input.take_match(&AT) {
            let target = match captures.get(2) {
                Some(digits) => ReferenceTarget::Index(parse_digits(digits.as_str(), &start)?),
                None => ReferenceTarget::Whole,
            };

            return Ok(Self {
                form: ReferenceForm::At,
                target,
                tag: None,
                len: captures[0].len(),
            });
        }

        Err(input.unknown_token())
    }
}

///
/// `{ ... }`: the code of an action, a `%union`, a `%printer` ...
///
#[BisonRef("Actions")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCode {
    ///
    /// Verbatim, outer braces included.
    ///
    code: String,
    references: Vec<Reference>,
    position: LineColumn,
}

impl UserCode {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn references(&self) -> &[Reference] {
        &self.references
    }
}

impl LexT for UserCode {
    fn peek(input: &ScanStream) -> bool {
        input.upcoming('{')
    }

    fn lex(input: &mut ScanStream) -> Result<Self, LexError> {
        let position = input.position();
        if input.take() != Some('{') {
            return Err(input.unknown_token());
        }

        let mut code = String::from("{");
        let mut references = vec![];
        let mut depth = 1usize;

        while let Some(ch) = input.peek() {
            match ch {
                '"' | '\'' => {
                    code.push_str(&scan_quoted(input, ch)?);
                }
                '$' | '@' if Placeholder::starts_here(input) => {
                    let fork = input.fork();
                    let placeholder = <Placeholder as LexT>::lex(input)?;
                    let reference = placeholder.at(code.len());

                    // Copy the placeholder over exactly as written.
                    code.push_str(&fork.rest()[..reference.span.len()]);
                    references.push(reference);
                }
                '/' if input.upcoming("/*") => {
                    let comment = <Comment as LexT>::lex(input)?;
                    code.push_str(comment.raw());
                }
                '{' => {
                    input.take();
                    code.push(ch);
                    depth += 1;
                }
                '}' => {
                    input.take();
                    code.push(ch);
                    depth -= 1;

                    if depth == 0 {
                        return Ok(Self {
                            code,
                            references,
                            position,
                        });
                    }
                }
                _ => {
                    input.take();
                    code.push(ch);
                }
            }
        }

        Err(input.brace_mismatch(position))
    }
}

impl From<UserCode> for Token {
    fn from(value: UserCode) -> Self {
        Token::text(TokenKind::UserCode, value.code, value.position)
            .with_references(value.references)
    }
}
