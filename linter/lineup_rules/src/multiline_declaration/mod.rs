//! Multi-line declaration layout checking.
//!
//! A declaration whose parameter-list opener and closer sit on different
//! source lines must spread its parameters one per line: the opener ends
//! its line, the first parameter starts the next one, and every separator
//! is followed by a line break. A closure's capture list gets the same
//! treatment under its own diagnostic-code namespace.

mod bracket;
mod role;

pub use bracket::check_bracket;
pub use role::ParamSpanRole;

use lineup_diagnostic::{Diagnostic, DiagnosticSink, FixEngine};
use lineup_ir::{Dialect, TokenIdx, TokenKind, TokenView};
use tracing::trace;

/// A bracketed parameter span tagged with its role.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParamSpan {
    pub open: TokenIdx,
    pub close: TokenIdx,
    pub role: ParamSpanRole,
}

/// Locate the bracketed parameter spans of the declaration at `decl`.
///
/// Always yields the declaration's own parameter list: the span of the
/// first opening parenthesis after the declaration keyword. For closures,
/// also yields the capture list when a capture keyword appears between
/// the parameter-list closer and the body's opening brace.
pub fn locate_param_spans(view: &TokenView<'_>, decl: TokenIdx) -> Vec<ParamSpan> {
    let mut spans = Vec::new();

    let Some(open) = view.first_of_kind_after(TokenKind::OpenParen, decl, None) else {
        return spans;
    };
    let Some(close) = view.matched_closer_of(open) else {
        return spans;
    };
    spans.push(ParamSpan {
        open,
        close,
        role: ParamSpanRole::FunctionParams,
    });

    if view.kind_of(decl) != TokenKind::Closure {
        return spans;
    }

    // The capture clause sits between the parameter list and the body.
    let Some(body_open) = view.first_of_kind_after(TokenKind::OpenBrace, close, None) else {
        return spans;
    };
    let Some(use_kw) = view.first_of_kind_after(TokenKind::Use, close, Some(body_open)) else {
        return spans;
    };
    let Some(use_open) = view.first_of_kind_after(TokenKind::OpenParen, use_kw, None) else {
        return spans;
    };
    let Some(use_close) = view.matched_closer_of(use_open) else {
        return spans;
    };
    trace!(open = use_open.raw(), "capture list located");
    spans.push(ParamSpan {
        open: use_open,
        close: use_close,
        role: ParamSpanRole::ClosureUseParams,
    });

    spans
}

/// Layout rule for multi-line function, method, and closure declarations.
pub struct DeclarationLayoutRule;

impl DeclarationLayoutRule {
    /// Source dialects this rule applies to.
    pub const DIALECTS: [Dialect; 2] = [Dialect::Php, Dialect::Js];

    /// Check whether the rule applies to a dialect.
    pub fn applies_to(dialect: Dialect) -> bool {
        Self::DIALECTS.contains(&dialect)
    }

    /// Validate every parameter span of the declaration at `decl`.
    ///
    /// Diagnostics from all spans are pooled and returned in position
    /// order.
    pub fn process(
        view: &TokenView<'_>,
        decl: TokenIdx,
        sink: &mut dyn DiagnosticSink,
        fixes: &mut dyn FixEngine,
    ) -> Vec<Diagnostic> {
        let mut pooled = Vec::new();
        for span in locate_param_spans(view, decl) {
            pooled.extend(check_bracket(view, span.open, span.role, sink, fixes));
        }
        pooled.sort_unstable_by_key(|diagnostic| diagnostic.token);
        pooled
    }
}
