//! Typed index into a token list.

/// Typed index into a [`TokenList`](super::TokenList).
///
/// Provides type safety over raw `u32` indices when referring to token
/// positions. `u32::MAX` is the "no token" sentinel used inside the pair
/// table.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(transparent)]
pub struct TokenIdx(u32);

impl TokenIdx {
    /// Sentinel value indicating no token.
    pub const NONE: TokenIdx = TokenIdx(u32::MAX);

    /// Create a `TokenIdx` from a raw index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        TokenIdx(raw)
    }

    /// Get the raw `u32` index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the index as `usize` for slice access.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is a valid index (not the `NONE` sentinel).
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }

    /// The position immediately after this one.
    #[inline]
    pub const fn next(self) -> TokenIdx {
        TokenIdx(self.0 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_idx_roundtrip() {
        let idx = TokenIdx::from_raw(7);
        assert_eq!(idx.raw(), 7);
        assert_eq!(idx.index(), 7);
        assert_eq!(idx.next().raw(), 8);
        assert!(idx.is_valid());
    }

    #[test]
    fn test_token_idx_none() {
        assert!(!TokenIdx::NONE.is_valid());
    }

    #[test]
    fn test_token_idx_ordering() {
        assert!(TokenIdx::from_raw(3) < TokenIdx::from_raw(4));
    }
}
