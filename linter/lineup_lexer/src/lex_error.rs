//! Lexer error type.

use lineup_ir::PairError;
use thiserror::Error;

/// Error from tokenizing one source file.
///
/// Scanning itself cannot fail (unknown bytes become symbol tokens); the
/// only failure is delimiter pairing over the cooked token list.
#[derive(Debug, Error)]
pub enum LexError {
    /// Delimiters could not be paired.
    #[error("unbalanced delimiters: {0}")]
    Unbalanced(#[from] PairError),
}
