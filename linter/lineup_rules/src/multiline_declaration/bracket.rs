//! Bracketed parameter span validation.

use lineup_diagnostic::{Diagnostic, DiagnosticSink, FixEngine, LintCode};
use lineup_ir::{TokenIdx, TokenKind, TokenView};
use tracing::{debug, trace};

use super::ParamSpanRole;

/// Validate the layout of one bracketed parameter span.
///
/// No-op for spans whose opener and closer share a source line. Two
/// checks run over multi-line spans: the first parameter must begin on
/// the line after the opener, and every top-level separator must be the
/// last significant token on its line. Nested bracketed regions are
/// jumped via the pair table, so their separators are never inspected.
///
/// Each violation is reported to `sink` exactly once; when the sink arms
/// the report, exactly one insertion is requested from `fixes`, never
/// retried within the pass. Returns the diagnostics in position order.
pub fn check_bracket(
    view: &TokenView<'_>,
    open: TokenIdx,
    role: ParamSpanRole,
    sink: &mut dyn DiagnosticSink,
    fixes: &mut dyn FixEngine,
) -> Vec<Diagnostic> {
    let Some(close) = view.matched_closer_of(open) else {
        return Vec::new();
    };
    if view.line_of(open) == view.line_of(close) {
        return Vec::new();
    }
    trace!(
        open = open.raw(),
        close = close.raw(),
        role = ?role,
        "checking parameter span"
    );

    let mut check = SpanCheck {
        view,
        role,
        sink,
        fixes,
        found: Vec::new(),
    };
    check.first_param(open);
    check.params_per_line(open, close);
    check.found
}

/// One span's worth of checking state.
struct SpanCheck<'a> {
    view: &'a TokenView<'a>,
    role: ParamSpanRole,
    sink: &'a mut dyn DiagnosticSink,
    fixes: &'a mut dyn FixEngine,
    found: Vec<Diagnostic>,
}

impl SpanCheck<'_> {
    /// The first parameter belongs on the line after the opener.
    fn first_param(&mut self, open: TokenIdx) {
        let Some(next) = self.view.first_non_whitespace_after(open, None) else {
            return;
        };
        if self.view.line_of(next) == self.view.line_of(open) + 1 {
            return;
        }
        let message = format!(
            "The first parameter of a multi-line {} declaration must be on the line \
             after the opening bracket",
            self.role.noun()
        );
        self.report(self.role.first_param_code(), message, next, open);
    }

    /// Every top-level separator ends its line.
    fn params_per_line(&mut self, open: TokenIdx, close: TokenIdx) {
        let mut pos = open.next();
        while pos < close {
            if self.view.kind_of(pos).is_opener() {
                if let Some(nested_close) = self.view.matched_closer_of(pos) {
                    trace!(
                        from = pos.raw(),
                        to = nested_close.raw(),
                        "skipping nested span"
                    );
                    pos = nested_close.next();
                    continue;
                }
            }
            if self.view.kind_of(pos) == TokenKind::Comma {
                self.check_separator(pos);
            }
            pos = pos.next();
        }
    }

    /// A trailing separator before the closer is checked like any other.
    fn check_separator(&mut self, comma: TokenIdx) {
        let Some(next) = self.view.first_non_whitespace_after(comma, None) else {
            return;
        };
        if self.view.line_of(next) == self.view.line_of(comma) + 1 {
            return;
        }
        let message = format!(
            "Multi-line {} declarations must define one parameter per line",
            self.role.noun()
        );
        self.report(self.role.one_per_line_code(), message, next, comma);
    }

    /// Report one violation and, when armed, request its fix.
    fn report(&mut self, code: LintCode, message: String, anchor: TokenIdx, insert_after: TokenIdx) {
        let diagnostic = Diagnostic::error(code)
            .with_message(message)
            .at(anchor, self.view.span_of(anchor))
            .fixable();
        debug!(code = %code, anchor = anchor.raw(), "layout violation");
        if self.sink.report(&diagnostic) {
            self.fixes.insert_line_break_after(self.view, insert_after);
        }
        self.found.push(diagnostic);
    }
}
