use thiserror::Error;

use crate::common::LineColumn;

use super::ScanStream;

///
/// Errors that can occur during lexing.
///
/// All of them are fatal: the lexer stops at the first one.
///
#[derive(Debug, Clone, Error, PartialEq, Eq, Hash)]
pub enum LexError {
    ///
    /// Nothing in the lexical grammar starts here.
    ///
    #[error("Parse error (unknown token): `{found}`\n\tat {position}\n\t{snippet}")]
    UnknownToken {
        found: String,
        position: LineColumn,
        snippet: String,
    },

    ///
    /// A `{` of some action code is never closed.
    ///
    #[error("Parse error (brace mismatch): `{{` opened at {opened}\n\tat {position}\n\t{snippet}")]
    BraceMismatch {
        opened: LineColumn,
        position: LineColumn,
        snippet: String,
    },

    ///
    /// A string or character literal is never closed.
    ///
    #[error("Parse error (quote mismatch): `{terminator}` opened at {opened}\n\tat {position}\n\t{snippet}")]
    QuoteMismatch {
        terminator: char,
        opened: LineColumn,
        position: LineColumn,
        snippet: String,
    },

    ///
    /// A `/*` comment is never closed.
    ///
    #[error("Parse error (comment mismatch): `/*` opened at {opened}\n\tat {position}\n\t{snippet}")]
    CommentMismatch {
        opened: LineColumn,
        position: LineColumn,
        snippet: String,
    },

    ///
    /// The section splitter was asked to move past its last state.
    ///
    /// This is a bug in the splitter, not in the grammar file.
    ///
    #[error("Unknown state: the section splitter cannot leave `{state}`")]
    UnreachableState { state: &'static str },
}

impl LexError {
    ///
    /// Where the error was detected, if it came from the input.
    ///
    pub fn position(&self) -> Option<LineColumn> {
        match self {
            LexError::UnknownToken { position, .. }
            | LexError::BraceMismatch { position, .. }
            | LexError::QuoteMismatch { position, .. }
            | LexError::CommentMismatch { position, .. } => Some(*position),
            LexError::UnreachableState { .. } => None,
        }
    }

    ///
    /// The offending line of source, if it came from the input.
    ///
    pub fn snippet(&self) -> Option<&str> {
        match self {
            LexError::UnknownToken { snippet, .. }
            | LexError::BraceMismatch { snippet, .. }
            | LexError::QuoteMismatch { snippet, .. }
            | LexError::CommentMismatch { snippet, .. } => Some(snippet),
            LexError::UnreachableState { .. } => None,
        }
    }
}

impl<'a> ScanStream<'a> {
    ///
    /// Nothing can be lexed at the stream's current location.
    ///
    pub fn unknown_token(&self) -> LexError {
        let found = self
            .rest()
            .split(char::is_whitespace)
            .next()
            .filter(|word| !word.is_empty())
            .unwrap_or("<end of input>")
            .to_string();

        LexError::UnknownToken {
            found,
            position: self.position(),
            snippet: self.snippet().to_string(),
        }
    }

    ///
    /// Ran out of input inside action code opened at `opened`.
    ///
    pub fn brace_mismatch(&self, opened: LineColumn) -> LexError {
        LexError::BraceMismatch {
            opened,
            position: self.position(),
            snippet: self.snippet().to_string(),
        }
    }

    ///
    /// Ran out of input inside a literal opened at `opened`.
    ///
    pub fn quote_mismatch(&self, terminator: char, opened: LineColumn) -> LexError {
        LexError::QuoteMismatch {
            terminator,
            opened,
            position: self.position(),
            snippet: self.snippet().to_string(),
        }
    }

    ///
    /// Ran out of input inside a comment opened at `opened`.
    ///
    pub fn comment_mismatch(&self, opened: LineColumn) -> LexError {
        LexError::CommentMismatch {
            opened,
            position: self.position(),
            snippet: self.snippet().to_string(),
        }
    }
}

///
/// The result of attempting to lex token `L`
/// from a [ScanStream].
///
#[derive(Debug, PartialEq, Eq)]
pub enum LexResult<L> {
    ///
    /// Valid token.
    ///
    Lexed(L),

    ///
    /// An attempt was made to lex a token,
    /// but it did not fully abide by the lexical grammar.
    ///
    Errant(LexError),

    ///
    /// The token `L` was not found,
    /// so the lexing was skipped.
    ///
    Nothing,
}

impl<L> From<Result<L, LexError>> for LexResult<L> {
    fn from(value: Result<L, LexError>) -> Self {
        match value {
            Ok(lexed) => LexResult::Lexed(lexed),
            Err(errant) => LexResult::Errant(errant),
        }
    }
}

impl<L> LexResult<L> {
    ///
    /// Transform the token, if one was lexed.
    ///
    pub fn map<T>(self, f: impl FnOnce(L) -> T) -> LexResult<T> {
        match self {
            LexResult::Lexed(l) => LexResult::Lexed(f(l)),
            LexResult::Errant(err) => LexResult::Errant(err),
            LexResult::Nothing => LexResult::Nothing,
        }
    }

    ///
    /// Try another alternative, only if this one
    /// found [LexResult::Nothing].
    ///
    pub fn or(self, f: impl FnOnce() -> LexResult<L>) -> LexResult<L> {
        match self {
            LexResult::Nothing => f(),
            other => other,
        }
    }

    ///
    /// Errors become `Err`, and a missing token becomes `Ok(None)`.
    ///
    pub fn into_result(self) -> Result<Option<L>, LexError> {
        match self {
            LexResult::Lexed(l) => Ok(Some(l)),
            LexResult::Errant(err) => Err(err),
            LexResult::Nothing => Ok(None),
        }
    }

    ///
    /// Panics if no valid token was lexed.
    ///
    #[cfg(test)]
    pub fn expect(self, msg: &str) -> L {
        match self {
            LexResult::Lexed(l) => l,
            LexResult::Errant(err) => panic!("{msg}: {err}"),
            LexResult::Nothing => panic!("{msg}: nothing lexed"),
        }
    }
}
