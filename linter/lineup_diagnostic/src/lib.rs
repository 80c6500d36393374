//! Diagnostics and fix plumbing for layout rules.
//!
//! Reporting and fix application are decoupled: rules report through a
//! [`DiagnosticSink`] and only request an edit from a [`FixEngine`] when
//! the sink arms the offered fix. Check-only hosts arm nothing and still
//! see every diagnostic.

mod code;
mod diagnostic;
mod fixes;
mod sink;

pub use code::LintCode;
pub use diagnostic::{Diagnostic, Severity};
pub use fixes::{EditBuffer, FixEngine, TextEdit};
pub use sink::{DiagnosticSink, RecordingSink, SinkConfig};
