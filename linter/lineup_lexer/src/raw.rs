//! Raw scanner tokens, before dialect cooking.

use logos::Logos;

/// Raw token from the logos scanner.
///
/// Keyword resolution is dialect-sensitive and happens in the cooking
/// pass, so the scanner only distinguishes shapes.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawToken {
    /// Whitespace run, newlines included.
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    #[regex(r"#[^\n]*")]
    #[regex(r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/")]
    Comment,

    /// `$`-prefixed variable.
    #[regex(r"\$[A-Za-z_][A-Za-z0-9_]*")]
    Variable,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+")]
    Int,

    #[regex(r#""([^"\\]|\\.)*""#)]
    #[regex(r"'([^'\\]|\\.)*'")]
    Str,

    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("=")]
    Equals,

    /// Any other non-whitespace character.
    #[regex(r"[^ \t\r\n]", priority = 0)]
    Other,
}
