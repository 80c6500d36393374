//! Diagnostic type for layout violations.

use std::fmt;

use lineup_ir::{Span, TokenIdx};

use crate::LintCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A reported layout violation, anchored at one token.
///
/// `fixable` marks that a corrective single-point insertion is offered
/// alongside the report; whether it is applied is the sink's call.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: LintCode,
    pub severity: Severity,
    pub message: String,
    /// Anchor token position.
    pub token: TokenIdx,
    /// Byte span of the anchor token.
    pub span: Span,
    pub fixable: bool,
}

impl Diagnostic {
    fn new_with_severity(code: LintCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            token: TokenIdx::NONE,
            span: Span::point(0),
            fixable: false,
        }
    }

    /// Create a new error diagnostic.
    pub fn error(code: LintCode) -> Self {
        Self::new_with_severity(code, Severity::Error)
    }

    /// Create a new warning diagnostic.
    pub fn warning(code: LintCode) -> Self {
        Self::new_with_severity(code, Severity::Warning)
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Anchor the diagnostic at a token.
    pub fn at(mut self, token: TokenIdx, span: Span) -> Self {
        self.token = token;
        self.span = span;
        self
    }

    /// Mark that a corrective edit is offered.
    pub fn fixable(mut self) -> Self {
        self.fixable = true;
        self
    }

    /// Check if this is an error (vs warning).
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message)?;
        if self.token.is_valid() {
            write!(f, " at {}", self.span)?;
        }
        Ok(())
    }
}
