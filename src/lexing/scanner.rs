//!
//! ## Token scanning
//!
//! Turns the lines of the declarations or rules section
//! into a stream of [Token]s.
//!

use tracing::trace;

use super::{
    sections::SectionLine,
    tokens::{
        character::CharLiteral, comment::Comment, directive::PercentWord,
        identifier::Identifier, literal::StringLiteral, number::Number, punctuator::Punctuator,
        tag::Tag, user_code::UserCode, Token, TokenKind,
    },
    LexError, LexResult, LexerConfig, ScanStream,
};

///
/// Scan the lines of one section, in order.
///
pub fn scan(lines: &[SectionLine], config: &LexerConfig) -> Result<Vec<Token>, LexError> {
    let Some(first) = lines.first() else {
        return Ok(vec![]);
    };

    let text = lines.iter().map(SectionLine::text).collect::<String>();
    let input = &mut ScanStream::new(&text, first.line());
    let mut tokens = vec![];

    while !input.at_end() {
        if input.take_while(|ch| ch.is_whitespace()).is_some() {
            continue;
        }

        match lex_one(input) {
            LexResult::Lexed(Some(token)) => {
                if config.debug {
                    trace!(%token, "lexed");
                }
                tokens.push(token);
            }
            LexResult::Lexed(None) => {}
            LexResult::Errant(err) => return Err(err),
            LexResult::Nothing => return Err(input.unknown_token()),
        }
    }

    Ok(tokens)
}

///
/// Try every lexical form at the current position, in priority order.
///
/// `Lexed(None)` means something was consumed which makes no token
/// (comments, `%empty`).
///
fn lex_one(input: &mut ScanStream) -> LexResult<Option<Token>> {
    input
        .lex()
        .map(|punct: Punctuator| Some(Token::from(punct)))
        .or(|| input.lex().map(|number: Number| Some(Token::from(number))))
        .or(|| input.lex().map(|tag: Tag| Some(Token::from(tag))))
        .or(|| input.lex().map(|ident: Identifier| Some(Token::from(ident))))
        .or(|| input.lex().map(percent_word))
        .or(|| input.lex().map(|code: UserCode| Some(Token::from(code))))
        .or(|| input.lex().map(|string: StringLiteral| Some(Token::from(string))))
        .or(|| input.lex().map(|_: Comment| None))
        .or(|| input.lex().map(|ch: CharLiteral| Some(Token::from(ch))))
}

fn percent_word(word: PercentWord) -> Option<Token> {
    match word {
        PercentWord::Directive(directive, position) => Some(Token::text(
            TokenKind::Directive(directive),
            directive.keyword(),
            position,
        )),
        PercentWord::Empty => None,
        PercentWord::Other(word, position) => Some(Token::text(TokenKind::Ident, word, position)),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        common::LineColumn,
        lexing::{
            sections::SectionLine,
            tokens::{Directive, ReferenceTarget, Token, TokenKind},
            LexError, LexerConfig,
        },
    };

    use super::scan;

    fn scan_text(text: &str, first_line: usize) -> Result<Vec<Token>, LexError> {
        let lines = text
            .split_inclusive('\n')
            .enumerate()
            .map(|(i, line)| SectionLine::new(line, first_line + i))
            .collect::<Vec<_>>();

        scan(&lines, &LexerConfig::default())
    }

    fn kinds_and_text(tokens: &[Token]) -> Vec<(TokenKind, String)> {
        tokens
            .iter()
            .map(|t| {
                let text = t.as_str().map(str::to_string);
                (t.kind(), text.unwrap_or_else(|| t.value().to_string()))
            })
            .collect()
    }

    fn owned(expected: &[(TokenKind, &str)]) -> Vec<(TokenKind, String)> {
        expected
            .iter()
            .map(|&(kind, text)| (kind, text.to_string()))
            .collect()
    }

    #[test]
    fn declarations() {
        let tokens = scan_text("%token tFOO\n%type <int> expr\n", 1).unwrap();

        assert_eq!(
            kinds_and_text(&tokens),
            owned(&[
                (TokenKind::Directive(Directive::Token), "%token"),
                (TokenKind::Ident, "tFOO"),
                (TokenKind::Directive(Directive::Type), "%type"),
                (TokenKind::Tag, "<int>"),
                (TokenKind::Ident, "expr"),
            ])
        );

        let positions = tokens.iter().map(Token::position).collect::<Vec<_>>();
        assert_eq!(
            positions,
            vec![
                LineColumn::new(1, 1),
                LineColumn::new(1, 8),
                LineColumn::new(2, 1),
                LineColumn::new(2, 7),
                LineColumn::new(2, 13),
            ]
        );
    }

    #[test]
    fn every_directive() {
        let text = Directive::ALL
            .iter()
            .map(|d| d.keyword())
            .collect::<Vec<_>>()
            .join(" ");
        let tokens = scan_text(&text, 1).unwrap();

        let kinds = tokens.iter().map(Token::kind).collect::<Vec<_>>();
        let expected = Directive::ALL
            .iter()
            .map(|d| TokenKind::Directive(*d))
            .collect::<Vec<_>>();
        assert_eq!(kinds, expected);
    }

    #[test]
    fn rules() {
        let tokens = scan_text("expr: expr '+' NUM\n    | NUM %prec UMINUS\n    | %empty\n    ;\n", 9)
            .unwrap();

        assert_eq!(
            kinds_and_text(&tokens),
            owned(&[
                (TokenKind::IdentColon, "expr"),
                (TokenKind::Ident, "expr"),
                (TokenKind::Char, "'+'"),
                (TokenKind::Ident, "NUM"),
                (TokenKind::Bar, "|"),
                (TokenKind::Ident, "NUM"),
                (TokenKind::Directive(Directive::Prec), "%prec"),
                (TokenKind::Ident, "UMINUS"),
                (TokenKind::Bar, "|"),
                (TokenKind::Semicolon, ";"),
            ])
        );

        assert_eq!(tokens[4].position(), LineColumn::new(10, 5));
        assert_eq!(tokens[9].position(), LineColumn::new(12, 5));
    }

    #[test]
    fn numbers_strings_and_comments() {
        let tokens = scan_text("%expect 2 /* two\nconflicts */ %token PLUS \"+\"\n", 3).unwrap();

        assert_eq!(tokens[1].number(), Some(2));
        assert_eq!(tokens[2].position(), LineColumn::new(4, 14));
        assert_eq!(tokens[4].kind(), TokenKind::String);
        assert_eq!(tokens[4].as_str(), Some("\"+\""));
        assert_eq!(tokens.len(), 5);
    }

    #[test]
    fn actions() {
        let tokens = scan_text("line: expr '\\n' { printf(\"%d\", $1); }\n  ;\n", 1).unwrap();

        let code = &tokens[3];
        assert_eq!(code.kind(), TokenKind::UserCode);
        assert_eq!(code.as_str(), Some("{ printf(\"%d\", $1); }"));
        assert_eq!(code.position(), LineColumn::new(1, 17));
        assert_eq!(code.references()[0].target(), ReferenceTarget::Index(1));

        assert_eq!(tokens[4].kind(), TokenKind::Semicolon);
        assert_eq!(tokens[4].position(), LineColumn::new(2, 3));
    }

    #[test]
    fn backslash_characters() {
        let tokens = scan_text("%left '\\' '+'\n", 1).unwrap();

        assert_eq!(
            kinds_and_text(&tokens),
            owned(&[
                (TokenKind::Directive(Directive::Left), "%left"),
                (TokenKind::Char, r"'\'"),
                (TokenKind::Char, "'+'"),
            ])
        );
    }

    #[test]
    fn positions_after_multi_line_action() {
        let tokens = scan_text("a: {\n  x;\n} b\n", 1).unwrap();
        assert_eq!(tokens[2].as_str(), Some("b"));
        assert_eq!(tokens[2].position(), LineColumn::new(3, 3));
    }

    #[test]
    fn keyword_boundaries() {
        let tokens = scan_text("%lefty %left y %prec1 %tokens %emptyish\n", 1).unwrap();

        assert_eq!(
            kinds_and_text(&tokens),
            owned(&[
                (TokenKind::Ident, "%lefty"),
                (TokenKind::Directive(Directive::Left), "%left"),
                (TokenKind::Ident, "y"),
                (TokenKind::Ident, "%prec1"),
                (TokenKind::Ident, "%tokens"),
                (TokenKind::Ident, "%emptyish"),
            ])
        );
    }

    #[test]
    fn unknown_token() {
        let err = scan_text("a: b\n  c # d\n", 5).unwrap_err();

        assert_eq!(
            err,
            LexError::UnknownToken {
                found: "#".to_string(),
                position: LineColumn::new(6, 5),
                snippet: "  c # d".to_string(),
            }
        );
    }

    #[test]
    fn unlisted_directives_are_unknown() {
        let err = scan_text("%token A\n%start expr\n", 3).unwrap_err();

        assert_eq!(
            err,
            LexError::UnknownToken {
                found: "%start".to_string(),
                position: LineColumn::new(4, 1),
                snippet: "%start expr".to_string(),
            }
        );
    }

    #[test]
    fn single_line_comments_are_unknown() {
        let err = scan_text("// nope\n", 1).unwrap_err();
        assert!(matches!(err, LexError::UnknownToken { .. }));
    }

    #[test]
    fn empty_section() {
        assert_eq!(scan(&[], &LexerConfig::default()), Ok(vec![]));
    }
}
