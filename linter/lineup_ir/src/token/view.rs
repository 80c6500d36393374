//! Read-only query facade over a lexed file.

use crate::Span;

use super::{PairTable, Token, TokenIdx, TokenKind, TokenList};

/// Read-only view of one file's tokens and delimiter pairs.
///
/// Every query borrows; nothing here can mutate the underlying buffer.
/// Layout rules receive a `TokenView` and route all edit requests through
/// a fix engine instead of touching the source.
///
/// Position arguments must be in bounds for the token list the view was
/// built over.
#[derive(Copy, Clone)]
pub struct TokenView<'a> {
    source: &'a str,
    tokens: &'a TokenList,
    pairs: &'a PairTable,
}

impl<'a> TokenView<'a> {
    pub fn new(source: &'a str, tokens: &'a TokenList, pairs: &'a PairTable) -> Self {
        TokenView {
            source,
            tokens,
            pairs,
        }
    }

    /// Number of tokens in the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the view holds no tokens.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    fn token(&self, pos: TokenIdx) -> &'a Token {
        &self.tokens.as_slice()[pos.index()]
    }

    /// Kind of the token at `pos`.
    #[inline]
    pub fn kind_of(&self, pos: TokenIdx) -> TokenKind {
        self.token(pos).kind
    }

    /// 1-based source line of the token at `pos`.
    #[inline]
    pub fn line_of(&self, pos: TokenIdx) -> u32 {
        self.token(pos).line
    }

    /// Byte span of the token at `pos`.
    #[inline]
    pub fn span_of(&self, pos: TokenIdx) -> Span {
        self.token(pos).span
    }

    /// Source text of the token at `pos` (whitespace width checks slice
    /// this).
    #[inline]
    pub fn text_of(&self, pos: TokenIdx) -> &'a str {
        &self.source[self.token(pos).span.to_range()]
    }

    /// Matched closer of the opener at `open`.
    ///
    /// Returns `None` when `open` is not an opener kind, or when the pair
    /// table has no partner recorded for it.
    #[inline]
    pub fn matched_closer_of(&self, open: TokenIdx) -> Option<TokenIdx> {
        if self.kind_of(open).is_opener() {
            self.pairs.partner_of(open)
        } else {
            None
        }
    }

    /// Matched opener of the closer at `close`.
    #[inline]
    pub fn matched_opener_of(&self, close: TokenIdx) -> Option<TokenIdx> {
        if self.kind_of(close).is_closer() {
            self.pairs.partner_of(close)
        } else {
            None
        }
    }

    /// First non-whitespace token strictly after `pos`, strictly before
    /// `upper` when bounded.
    ///
    /// Comments count as significant here; only whitespace is skipped.
    pub fn first_non_whitespace_after(
        &self,
        pos: TokenIdx,
        upper: Option<TokenIdx>,
    ) -> Option<TokenIdx> {
        self.scan_after(pos, upper, |kind| kind != TokenKind::Whitespace)
    }

    /// First token of `kind` strictly after `pos`, strictly before `upper`
    /// when bounded.
    pub fn first_of_kind_after(
        &self,
        kind: TokenKind,
        pos: TokenIdx,
        upper: Option<TokenIdx>,
    ) -> Option<TokenIdx> {
        self.scan_after(pos, upper, |k| k == kind)
    }

    fn scan_after(
        &self,
        pos: TokenIdx,
        upper: Option<TokenIdx>,
        pred: impl Fn(TokenKind) -> bool,
    ) -> Option<TokenIdx> {
        let end = upper.map_or_else(
            || u32::try_from(self.tokens.len()).unwrap_or(u32::MAX),
            TokenIdx::raw,
        );
        let mut cur = pos.next();
        while cur.raw() < end {
            if pred(self.kind_of(cur)) {
                return Some(cur);
            }
            cur = cur.next();
        }
        None
    }
}
