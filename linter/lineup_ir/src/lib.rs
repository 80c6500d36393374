//! Shared data model for the lineup linter.
//!
//! Everything downstream crates need to talk about source text lives here:
//! byte [`Span`]s, the [`Dialect`] capability tag, [`Token`]s with their
//! source lines, the [`TokenList`] arena, the [`PairTable`] mapping each
//! delimiter to its matched partner, and the read-only [`TokenView`] that
//! layout rules query.
//!
//! The token list and pair table are produced once per file by the lexer
//! and are treated as immutable for the duration of a validation pass.
//! Rules never mutate source text through this crate; corrective edits go
//! through a fix engine instead.

mod dialect;
mod span;
pub mod token;

pub use dialect::Dialect;
pub use span::{Span, SpanOutOfRange};
pub use token::{PairError, PairTable, Token, TokenIdx, TokenKind, TokenList, TokenView};
