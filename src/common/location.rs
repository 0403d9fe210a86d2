//!
//! Things that help trace errors and tokens: [Span] and [LineColumn].
//!

use std::{fmt::Formatter, ops::Range};

///
/// Line and column information for
/// a particular location in a grammar file.
///
/// Both are 1-based; columns count characters, not bytes.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineColumn {
    pub line: usize,
    pub column: usize,
}

impl LineColumn {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    ///
    /// The location `n` characters further along the same line.
    ///
    pub fn shifted(self, n: usize) -> Self {
        Self {
            line: self.line,
            column: self.column + n,
        }
    }
}

impl std::fmt::Display for LineColumn {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

///
/// Represents a run of bytes inside some text.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    ///
    /// Start index: inclusive lower bound.
    ///
    pub(crate) start: usize,

    ///
    /// End index: exclusive upper bound.
    ///
    pub(crate) end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    ///
    /// Returns the length of this span in bytes.
    ///
    pub(crate) fn len(&self) -> usize {
        self.end - self.start
    }

    ///
    /// Return the start and end bounds as a Rust [Range]
    ///
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}
