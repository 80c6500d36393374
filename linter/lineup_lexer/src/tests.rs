use lineup_ir::{Dialect, PairError, TokenIdx, TokenKind};
use pretty_assertions::assert_eq;

use crate::{lex, LexError, Lexed};

fn lex_ok(source: &str, dialect: Dialect) -> Lexed {
    match lex(source, dialect) {
        Ok(lexed) => lexed,
        Err(e) => panic!("lex failed for {source:?}: {e}"),
    }
}

/// Non-trivia kinds, in order.
fn kinds(source: &str, dialect: Dialect) -> Vec<TokenKind> {
    lex_ok(source, dialect)
        .tokens
        .iter()
        .map(|t| t.kind)
        .filter(|k| !k.is_trivia())
        .collect()
}

#[test]
fn test_php_function_declaration() {
    assert_eq!(
        kinds("function foo($a, $b) {}", Dialect::Php),
        vec![
            TokenKind::Function,
            TokenKind::Ident,
            TokenKind::OpenParen,
            TokenKind::Variable,
            TokenKind::Comma,
            TokenKind::Variable,
            TokenKind::CloseParen,
            TokenKind::OpenBrace,
            TokenKind::CloseBrace,
        ]
    );
}

#[test]
fn test_php_keywords_are_case_insensitive() {
    assert_eq!(kinds("FUNCTION foo() {}", Dialect::Php)[0], TokenKind::Function);
    assert_eq!(kinds("USE", Dialect::Php), vec![TokenKind::Use]);
}

#[test]
fn test_js_keywords_are_case_sensitive() {
    assert_eq!(kinds("Function foo() {}", Dialect::Js)[0], TokenKind::Ident);
    assert_eq!(kinds("function foo() {}", Dialect::Js)[0], TokenKind::Function);
}

#[test]
fn test_use_is_a_keyword_only_in_php() {
    assert_eq!(kinds("use", Dialect::Php), vec![TokenKind::Use]);
    assert_eq!(kinds("use", Dialect::Js), vec![TokenKind::Ident]);
}

#[test]
fn test_anonymous_function_is_retagged_as_closure() {
    let found = kinds("$f = function ($a) {};", Dialect::Php);
    assert!(found.contains(&TokenKind::Closure));
    assert!(!found.contains(&TokenKind::Function));
}

#[test]
fn test_by_reference_closure_is_retagged() {
    let found = kinds("$f = function &($a) {};", Dialect::Php);
    assert!(found.contains(&TokenKind::Closure));
}

#[test]
fn test_named_function_keeps_its_kind() {
    let found = kinds("function foo() {}", Dialect::Php);
    assert!(found.contains(&TokenKind::Function));
    assert!(!found.contains(&TokenKind::Closure));
}

#[test]
fn test_lines_advance_at_newlines() {
    let source = "function foo(\n    $a\n) {}";
    let lexed = lex_ok(source, Dialect::Php);
    let view = lexed.view(source);

    let lines: Vec<(TokenKind, u32)> = lexed
        .tokens
        .iter()
        .filter(|t| !t.kind.is_trivia())
        .map(|t| (t.kind, t.line))
        .collect();
    assert_eq!(
        lines,
        vec![
            (TokenKind::Function, 1),
            (TokenKind::Ident, 1),
            (TokenKind::OpenParen, 1),
            (TokenKind::Variable, 2),
            (TokenKind::CloseParen, 3),
            (TokenKind::OpenBrace, 3),
            (TokenKind::CloseBrace, 3),
        ]
    );
    assert_eq!(view.line_of(TokenIdx::from_raw(0)), 1);
}

#[test]
fn test_multi_line_comment_advances_lines() {
    let source = "/* a\nb */ $x";
    let lexed = lex_ok(source, Dialect::Php);
    let last = lexed.tokens.iter().last();
    assert_eq!(last.map(|t| (t.kind, t.line)), Some((TokenKind::Variable, 2)));
}

#[test]
fn test_delimiters_inside_strings_do_not_pair() {
    let source = "f(\"(\", $a)";
    let lexed = lex_ok(source, Dialect::Php);
    let view = lexed.view(source);

    // Token 1 is the real opener; its partner is the final closer.
    let open = TokenIdx::from_raw(1);
    assert_eq!(view.kind_of(open), TokenKind::OpenParen);
    let close = view.matched_closer_of(open);
    assert_eq!(close.map(|c| view.kind_of(c)), Some(TokenKind::CloseParen));
    assert_eq!(close.map(|c| view.text_of(c)), Some(")"));
}

#[test]
fn test_delimiters_inside_comments_do_not_pair() {
    let source = "f( // )\n$a)";
    let lexed = lex_ok(source, Dialect::Php);
    let view = lexed.view(source);

    let open = TokenIdx::from_raw(1);
    assert_eq!(view.kind_of(open), TokenKind::OpenParen);
    let close = view.matched_closer_of(open);
    assert_eq!(close.map(|c| view.line_of(c)), Some(2));
}

#[test]
fn test_unclosed_opener_is_an_error() {
    let result = lex("function f(", Dialect::Php);
    assert!(matches!(
        result,
        Err(LexError::Unbalanced(PairError::UnclosedOpener { .. }))
    ));
}

#[test]
fn test_stray_closer_is_an_error() {
    let result = lex(") {}", Dialect::Php);
    assert!(matches!(
        result,
        Err(LexError::Unbalanced(PairError::StrayCloser { .. }))
    ));
}

#[test]
fn test_mismatched_closer_is_an_error() {
    let result = lex("(]", Dialect::Php);
    assert!(matches!(
        result,
        Err(LexError::Unbalanced(PairError::MismatchedCloser { .. }))
    ));
}

#[test]
fn test_unknown_characters_become_symbols() {
    let found = kinds("<?php ?>", Dialect::Php);
    assert!(found.iter().all(|&k| k == TokenKind::Other || k == TokenKind::Ident));
}
