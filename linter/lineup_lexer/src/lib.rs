//! Tokenizer for the source dialects lineup understands.
//!
//! Produces a [`TokenList`] with per-token source lines plus the matched
//! delimiter [`PairTable`] the layout rules query. Raw scanning is
//! delegated to a logos-generated scanner; dialect keyword resolution and
//! closure re-tagging happen in a cooking pass afterwards.
//!
//! Bracket-like characters inside string literals and comments are part of
//! those single tokens and never participate in delimiter pairing.

mod cook;
mod lex_error;
mod raw;

pub use lex_error::LexError;

use lineup_ir::{Dialect, PairTable, TokenList, TokenView};

/// A lexed source file: tokens plus the delimiter pair table.
#[derive(Clone, Debug)]
pub struct Lexed {
    pub tokens: TokenList,
    pub pairs: PairTable,
}

impl Lexed {
    /// Read-only view over the lexed file, borrowing the source it came
    /// from.
    pub fn view<'a>(&'a self, source: &'a str) -> TokenView<'a> {
        TokenView::new(source, &self.tokens, &self.pairs)
    }
}

/// Tokenize `source` under `dialect` keyword rules.
pub fn lex(source: &str, dialect: Dialect) -> Result<Lexed, LexError> {
    let tokens = cook::cook(source, dialect);
    let pairs = PairTable::build(&tokens)?;
    Ok(Lexed { tokens, pairs })
}

#[cfg(test)]
mod tests;
