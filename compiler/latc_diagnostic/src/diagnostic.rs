//! The single error type produced by every fallible compiler stage.

use latc_ir::Span;

use crate::ErrorCode;

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
}

impl Diagnostic {
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Diagnostic {
            code,
            message: message.into(),
            span,
        }
    }

    #[must_use]
    pub fn redeclaration(name: &str, span: Span) -> Self {
        Self::new(
            ErrorCode::E2001,
            format!("redeclaration of `{name}` in this scope"),
            span,
        )
    }

    #[must_use]
    pub fn undeclared(name: &str, span: Span) -> Self {
        Self::new(ErrorCode::E2002, format!("undeclared name `{name}`"), span)
    }

    #[must_use]
    pub fn duplicate_function(name: &str, span: Span) -> Self {
        Self::new(
            ErrorCode::E2003,
            format!("duplicate function `{name}`"),
            span,
        )
    }

    #[must_use]
    pub fn type_mismatch(expected: impl std::fmt::Display, found: impl std::fmt::Display, span: Span) -> Self {
        Self::new(
            ErrorCode::E2004,
            format!("type mismatch: expected {expected}, found {found}"),
            span,
        )
    }

    #[must_use]
    pub fn invalid_return(expected: impl std::fmt::Display, found: impl std::fmt::Display, span: Span) -> Self {
        Self::new(
            ErrorCode::E2005,
            format!("invalid return: function declared to return {expected}, found {found}"),
            span,
        )
    }

    #[must_use]
    pub fn arity_mismatch(name: &str, expected: usize, found: usize, span: Span) -> Self {
        Self::new(
            ErrorCode::E2006,
            format!("`{name}` expects {expected} argument(s), found {found}"),
            span,
        )
    }

    #[must_use]
    pub fn missing_return(name: &str, span: Span) -> Self {
        Self::new(
            ErrorCode::E2007,
            format!("function `{name}` does not guarantee a return on every path"),
            span,
        )
    }

    #[must_use]
    pub fn invalid_operator_type(op: &str, ty: impl std::fmt::Display, span: Span) -> Self {
        Self::new(
            ErrorCode::E2008,
            format!("operator `{op}` cannot be applied to {ty}"),
            span,
        )
    }

    #[must_use]
    pub fn void_variable(name: &str, span: Span) -> Self {
        Self::new(
            ErrorCode::E2009,
            format!("variable `{name}` declared with type void"),
            span,
        )
    }

    #[must_use]
    pub fn missing_main(span: Span) -> Self {
        Self::new(
            ErrorCode::E2010,
            "no function `main` of type () -> int".to_string(),
            span,
        )
    }

    #[must_use]
    pub fn invalid_main_signature(span: Span) -> Self {
        Self::new(
            ErrorCode::E2010,
            "`main` must be declared `int main()`".to_string(),
            span,
        )
    }

    #[must_use]
    pub fn extension_not_implemented(span: Span) -> Self {
        Self::new(
            ErrorCode::E2011,
            "Latte extension, not implemented".to_string(),
            span,
        )
    }

    #[must_use]
    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorCode::E1001, message, span)
    }
}
