//! Roles of bracketed parameter spans.

use lineup_diagnostic::LintCode;

/// Role of a bracketed span within a declaration.
///
/// The role selects the diagnostic-code namespace; validation logic is
/// identical for both.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParamSpanRole {
    /// The declaration's own parameter list.
    FunctionParams,
    /// A closure's capture list.
    ClosureUseParams,
}

impl ParamSpanRole {
    /// Code for a misplaced first parameter.
    pub const fn first_param_code(self) -> LintCode {
        match self {
            ParamSpanRole::FunctionParams => LintCode::FirstParamSpacing,
            ParamSpanRole::ClosureUseParams => LintCode::UseFirstParamSpacing,
        }
    }

    /// Code for a parameter that does not start its own line.
    pub const fn one_per_line_code(self) -> LintCode {
        match self {
            ParamSpanRole::FunctionParams => LintCode::OneParamPerLine,
            ParamSpanRole::ClosureUseParams => LintCode::UseOneParamPerLine,
        }
    }

    /// Noun used in diagnostic messages.
    pub(crate) const fn noun(self) -> &'static str {
        match self {
            ParamSpanRole::FunctionParams => "function",
            ParamSpanRole::ClosureUseParams => "use",
        }
    }
}
