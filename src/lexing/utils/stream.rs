use regex::{Captures, Regex};

use crate::common::{snippet_at, LineColumn};

use super::{Lex, LexResult};

///
/// Things that [ScanStream] can
/// check are coming up.
///
pub trait Lookahead {
    fn upcoming(self, input: &ScanStream) -> bool;
}

impl<'a> Lookahead for &'a str {
    fn upcoming(self, input: &ScanStream) -> bool {
        input.rest().starts_with(self)
    }
}

impl Lookahead for char {
    fn upcoming(self, input: &ScanStream) -> bool {
        input.peek() == Some(self)
    }
}

///
/// Patterns must be anchored with `^`.
///
impl<'a> Lookahead for &'a Regex {
    fn upcoming(self, input: &ScanStream) -> bool {
        self.is_match(input.rest())
    }
}

impl<F: Fn(&char) -> bool> Lookahead for F {
    fn upcoming(self, input: &ScanStream) -> bool {
        input.peek().as_ref().map(self).unwrap_or(false)
    }
}

///
/// A cursor over the concatenated text of one section.
///
/// Keeps track of the line it is on, and where that line
/// starts, as characters are taken.
///
#[derive(Debug, Clone)]
pub struct ScanStream<'a> {
    text: &'a str,
    index: usize,
    line: usize,
    line_start: usize,
}

impl<'a> ScanStream<'a> {
    ///
    /// Create a new stream over `text`, whose first
    /// character sits on line `first_line` of the grammar file.
    ///
    pub fn new(text: &'a str, first_line: usize) -> Self {
        Self {
            text,
            index: 0,
            line: first_line,
            line_start: 0,
        }
    }

    ///
    /// The whole text this stream scans.
    ///
    pub fn text(&self) -> &'a str {
        self.text
    }

    ///
    /// Byte index of the next character.
    ///
    pub fn index(&self) -> usize {
        self.index
    }

    ///
    /// Everything not yet taken.
    ///
    pub fn rest(&self) -> &'a str {
        &self.text[self.index..]
    }

    pub fn at_end(&self) -> bool {
        self.index >= self.text.len()
    }

    ///
    /// Line and column of the next character.
    ///
    pub fn position(&self) -> LineColumn {
        let column = self.text[self.line_start..self.index].chars().count() + 1;
        LineColumn::new(self.line, column)
    }

    ///
    /// The line the stream is currently on.
    ///
    pub fn snippet(&self) -> &'a str {
        snippet_at(self.text, self.index)
    }

    ///
    /// Peeks at the next upcoming character.
    ///
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    ///
    /// Take the next character in this [ScanStream].
    ///
    pub fn take(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.bump(ch);
        Some(ch)
    }

    ///
    /// Take characters in this [ScanStream] whilst they
    /// satisfy some predicate.
    ///
    pub fn take_while(&mut self, pred: impl Fn(&char) -> bool) -> Option<&'a str> {
        let start = self.index;
        while let Some(ch) = self.peek() {
            if !pred(&ch) {
                break;
            }

            self.bump(ch);
        }

        (self.index > start).then(|| &self.text[start..self.index])
    }

    ///
    /// Take the text matched by an anchored pattern,
    /// returning its captures.
    ///
    pub fn take_match(&mut self, pattern: &Regex) -> Option<Captures<'a>> {
        let rest = self.rest();
        let captures = pattern.captures(rest)?;
        let len = captures.get(0).map(|m| m.end()).unwrap_or(0);
        self.advance(len);

        Some(captures)
    }

    ///
    /// Skip forward `len` bytes, counting any newlines passed.
    ///
    pub fn advance(&mut self, len: usize) {
        let end = (self.index + len).min(self.text.len());
        while self.index < end {
            match self.peek() {
                Some(ch) => self.bump(ch),
                None => break,
            }
        }
    }

    ///
    /// Move this stream to wherever a fork of it got to.
    ///
    pub fn advance_to(&mut self, fork: Self) {
        *self = fork;
    }

    ///
    /// Make a copy of this stream to scan ahead with,
    /// without committing.
    ///
    pub fn fork(&self) -> Self {
        self.clone()
    }

    ///
    /// Attempt to lex for token `L`.
    ///
    pub fn lex<L: Lex>(&mut self) -> LexResult<L> {
        Lex::lex(self)
    }

    ///
    /// Checks if a lookahead pattern is next in the stream.
    ///
    pub fn upcoming<L: Lookahead>(&self, lookahead: L) -> bool {
        lookahead.upcoming(self)
    }

    fn bump(&mut self, ch: char) {
        self.index += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.line_start = self.index;
        }
    }
}
