//!
//! Comments.
//!

use crate::{
    common::LineColumn,
    lexing::{LexError, LexT, ScanStream},
};

///
/// ```c
/// /* Multi-line comment. */
/// ```
///
/// Single-line comments are not recognised.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    ///
    /// The whole comment, `/*` and `*/` included.
    ///
    raw: String,
    position: LineColumn,
}

impl Comment {
    pub fn raw(&self) -> &str {
        &self.raw
    }

    ///
    /// The contents of this comment, without its markers.
    ///
    pub fn inner(&self) -> &str {
        &self.raw[2..self.raw.len() - 2]
    }

    pub fn position(&self) -> LineColumn {
        self.position
    }
}

impl LexT for Comment {
    fn peek(input: &ScanStream) -> bool {
        input.upcoming("/*")
    }

    fn lex(input: &mut ScanStream) -> Result<Self, LexError> {
        let position = input.position();
        let mut raw = String::from("/*");
        input.advance(2);

        while !input.at_end() {
            if input.upcoming("*/") {
                input.advance(2);
                raw.push_str("*/");
                return Ok(Self { raw, position });
            }

            if let Some(ch) = input.take() {
                raw.push(ch);
            }
        }

        Err(input.comment_mismatch(position))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        common::LineColumn,
        lexing::{LexError, ScanStream},
    };

    use super::Comment;

    #[test]
    fn multi_line_comment() {
        let input = &mut ScanStream::new("/* An apple a day\nKeeps the doctor away! */ x", 10);
        let comment: Comment = input.lex().expect("Valid parse");

        assert_eq!(comment.inner(), " An apple a day\nKeeps the doctor away! ");
        assert_eq!(comment.position(), LineColumn::new(10, 1));
        assert_eq!(input.position(), LineColumn::new(11, 26));
    }

    #[test]
    fn empty_comment() {
        let input = &mut ScanStream::new("/**/", 1);
        let comment: Comment = input.lex().expect("Valid parse");
        assert_eq!(comment.inner(), "");
        assert_eq!(comment.raw(), "/**/");
    }

    #[test]
    fn single_line_comments_are_not_comments() {
        let input = &mut ScanStream::new("// nope", 1);
        assert!(input.lex::<Comment>().into_result().unwrap().is_none());
    }

    #[test]
    fn unterminated() {
        let input = &mut ScanStream::new("/* never\nclosed *", 1);
        let err = input.lex::<Comment>().into_result().unwrap_err();
        assert!(matches!(
            err,
            LexError::CommentMismatch {
                opened: LineColumn { line: 1, column: 1 },
                position: LineColumn { line: 2, column: 9 },
                ..
            }
        ));
    }
}
