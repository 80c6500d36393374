//! Layout rules for multi-line function, method, and closure
//! declarations.
//!
//! The host drives this crate one declaration at a time: after
//! classifying the declaration as multi-line and running its own baseline
//! declaration checks (name-to-bracket spacing, closing-bracket
//! indentation), it hands the declaration keyword's position to
//! [`DeclarationLayoutRule::process`], which locates the declaration's
//! bracketed parameter spans and validates the layout of each one.
//!
//! Violations are reported through a
//! [`DiagnosticSink`](lineup_diagnostic::DiagnosticSink); corrective line
//! breaks are requested from a [`FixEngine`](lineup_diagnostic::FixEngine)
//! only when the sink arms them.

mod multiline_declaration;

pub use multiline_declaration::{
    check_bracket, locate_param_spans, DeclarationLayoutRule, ParamSpan, ParamSpanRole,
};
