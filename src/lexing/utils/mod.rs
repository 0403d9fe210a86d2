//!
//! The machinery every token scanner shares: the [ScanStream]
//! cursor, and the two lexing traits.
//!

pub mod result;
pub mod stream;

pub use self::{
    result::{LexError, LexResult},
    stream::{Lookahead, ScanStream},
};

///
/// Implemented by each token scanner.
///
/// [LexT::lex] is only ever called once [LexT::peek] has agreed
/// the token starts at the cursor, so it may rely on that.
///
#[doc(hidden)]
pub trait LexT: Sized {
    ///
    /// Could this token start at the cursor?
    ///
    /// Must not consume anything.
    ///
    fn peek(input: &ScanStream) -> bool;

    ///
    /// Consume the token, or fail with a located error.
    ///
    fn lex(input: &mut ScanStream) -> Result<Self, LexError>;
}

///
/// Lexing as the scanner sees it: a token is either lexed,
/// malformed, or does not start here at all.
///
pub trait Lex: Sized {
    fn starts_here(input: &ScanStream) -> bool;

    fn lex(input: &mut ScanStream) -> LexResult<Self>;
}

impl<L: LexT> Lex for L {
    #[inline]
    fn starts_here(input: &ScanStream) -> bool {
        <L as LexT>::peek(input)
    }

    fn lex(input: &mut ScanStream) -> LexResult<Self> {
        if !<L as LexT>::peek(input) {
            return LexResult::Nothing;
        }

        <L as LexT>::lex(input).into()
    }
}
