//! Diagnostic sinks.

use rustc_hash::FxHashSet;

use crate::{Diagnostic, LintCode};

/// Receiver for reported diagnostics.
///
/// The return value of [`report`](DiagnosticSink::report) arms the
/// offered fix: `true` tells the rule to request the corrective edit now,
/// `false` leaves the source untouched (check-only mode, or a diagnostic
/// the host dropped).
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: &Diagnostic) -> bool;
}

/// Configuration for diagnostic recording.
#[derive(Clone, Debug, Default)]
pub struct SinkConfig {
    /// Arm fixes for fixable diagnostics.
    pub apply_fixes: bool,
    /// Maximum number of recorded diagnostics (0 = unlimited). Reports
    /// past the limit are dropped and never armed.
    pub error_limit: usize,
    /// Codes to drop entirely: neither recorded nor armed.
    pub disabled: FxHashSet<LintCode>,
}

/// Sink that records a copy of everything it accepts.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    config: SinkConfig,
    diagnostics: Vec<Diagnostic>,
}

impl RecordingSink {
    /// Check-only recording sink.
    pub fn new() -> Self {
        RecordingSink::default()
    }

    /// Recording sink that also arms fixes.
    pub fn fixing() -> Self {
        Self::with_config(SinkConfig {
            apply_fixes: true,
            ..SinkConfig::default()
        })
    }

    /// Recording sink with explicit configuration.
    pub fn with_config(config: SinkConfig) -> Self {
        RecordingSink {
            config,
            diagnostics: Vec::new(),
        }
    }

    /// The recorded diagnostics, in report order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the sink and take the recorded diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Number of recorded diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&mut self, diagnostic: &Diagnostic) -> bool {
        if self.config.disabled.contains(&diagnostic.code) {
            return false;
        }
        if self.config.error_limit != 0 && self.diagnostics.len() >= self.config.error_limit {
            return false;
        }
        self.diagnostics.push(diagnostic.clone());
        self.config.apply_fixes && diagnostic.fixable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineup_ir::{Span, TokenIdx};

    fn fixable(code: LintCode) -> Diagnostic {
        Diagnostic::error(code)
            .with_message("m")
            .at(TokenIdx::from_raw(0), Span::new(0, 1))
            .fixable()
    }

    #[test]
    fn test_check_only_never_arms() {
        let mut sink = RecordingSink::new();
        let armed = sink.report(&fixable(LintCode::OneParamPerLine));
        assert!(!armed);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_fixing_arms_fixable_reports() {
        let mut sink = RecordingSink::fixing();
        assert!(sink.report(&fixable(LintCode::OneParamPerLine)));

        let unfixable = Diagnostic::error(LintCode::OneParamPerLine).with_message("m");
        assert!(!sink.report(&unfixable));
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_disabled_codes_are_dropped() {
        let mut disabled = FxHashSet::default();
        disabled.insert(LintCode::FirstParamSpacing);
        let mut sink = RecordingSink::with_config(SinkConfig {
            apply_fixes: true,
            disabled,
            ..SinkConfig::default()
        });

        assert!(!sink.report(&fixable(LintCode::FirstParamSpacing)));
        assert!(sink.is_empty());
        assert!(sink.report(&fixable(LintCode::OneParamPerLine)));
    }

    #[test]
    fn test_error_limit_caps_recording() {
        let mut sink = RecordingSink::with_config(SinkConfig {
            apply_fixes: true,
            error_limit: 1,
            ..SinkConfig::default()
        });

        assert!(sink.report(&fixable(LintCode::OneParamPerLine)));
        assert!(!sink.report(&fixable(LintCode::OneParamPerLine)));
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_into_diagnostics() {
        let mut sink = RecordingSink::new();
        let _ = sink.report(&fixable(LintCode::UseOneParamPerLine));
        let recorded = sink.into_diagnostics();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].code, LintCode::UseOneParamPerLine);
    }
}
