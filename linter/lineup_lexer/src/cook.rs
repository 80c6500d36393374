//! Dialect-aware cooking of raw tokens.

use lineup_ir::{Dialect, Span, Token, TokenKind, TokenList};
use logos::Logos;

use crate::raw::RawToken;

/// Scan `source` and cook raw tokens into dialect-resolved kinds, with
/// 1-based source lines assigned as the scan progresses.
pub(crate) fn cook(source: &str, dialect: Dialect) -> TokenList {
    let mut tokens: Vec<Token> = Vec::new();
    let mut line: u32 = 1;

    for (raw, range) in RawToken::lexer(source).spanned() {
        let slice = &source[range.clone()];
        let kind = match raw {
            Ok(raw) => resolve(raw, slice, dialect),
            // No rule matched; treat the bytes as plain symbol text.
            Err(()) => TokenKind::Other,
        };
        tokens.push(Token::new(kind, Span::from_range(range), line));
        line += newline_count(slice);
    }

    retag_closures(&mut tokens, source);
    TokenList::from_vec(tokens)
}

fn newline_count(text: &str) -> u32 {
    let count = text.bytes().filter(|&b| b == b'\n').count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Map a raw token to its cooked kind under the dialect's keyword rules.
fn resolve(raw: RawToken, slice: &str, dialect: Dialect) -> TokenKind {
    match raw {
        RawToken::Whitespace => TokenKind::Whitespace,
        RawToken::Comment => TokenKind::Comment,
        RawToken::Variable => TokenKind::Variable,
        RawToken::Ident => resolve_keyword(slice, dialect),
        RawToken::Int => TokenKind::Int,
        RawToken::Str => TokenKind::Str,
        RawToken::OpenParen => TokenKind::OpenParen,
        RawToken::CloseParen => TokenKind::CloseParen,
        RawToken::OpenBracket => TokenKind::OpenBracket,
        RawToken::CloseBracket => TokenKind::CloseBracket,
        RawToken::OpenBrace => TokenKind::OpenBrace,
        RawToken::CloseBrace => TokenKind::CloseBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Equals => TokenKind::Equals,
        RawToken::Other => TokenKind::Other,
    }
}

fn resolve_keyword(slice: &str, dialect: Dialect) -> TokenKind {
    if keyword_eq(slice, "function", dialect) {
        TokenKind::Function
    } else if dialect.has_capture_clause() && keyword_eq(slice, "use", dialect) {
        TokenKind::Use
    } else {
        TokenKind::Ident
    }
}

fn keyword_eq(slice: &str, keyword: &str, dialect: Dialect) -> bool {
    if dialect.keywords_case_insensitive() {
        slice.eq_ignore_ascii_case(keyword)
    } else {
        slice == keyword
    }
}

/// Re-tag declaration keywords that introduce anonymous functions.
///
/// A declaration keyword whose next significant token, skipping trivia and
/// an optional by-reference `&` marker, is an opening parenthesis has no
/// name, so it declares a closure.
fn retag_closures(tokens: &mut [Token], source: &str) {
    for i in 0..tokens.len() {
        if tokens[i].kind != TokenKind::Function {
            continue;
        }
        let mut j = i + 1;
        while j < tokens.len() && skippable_before_params(&tokens[j], source) {
            j += 1;
        }
        if j < tokens.len() && tokens[j].kind == TokenKind::OpenParen {
            tokens[i].kind = TokenKind::Closure;
        }
    }
}

fn skippable_before_params(token: &Token, source: &str) -> bool {
    token.kind.is_trivia()
        || (token.kind == TokenKind::Other && &source[token.span.to_range()] == "&")
}
