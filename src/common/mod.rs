//!
//! Common utilities across section splitting and token scanning.
//!

pub mod location;
pub mod source;

pub use location::*;
pub use source::*;
