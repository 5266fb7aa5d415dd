//! Error codes for all `latc` diagnostics.
//!
//! First digit indicates the compiler phase: `E1xxx` lexer/parser, `E2xxx`
//! checker, `E3xxx` the driver's external toolchain calls. Right-sized to
//! the handful of diagnoses this system actually names — no fix-it
//! registry, no `--explain` documentation lookup.

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Parser errors (E1xxx) — `spec.md` §7 item (1).
    /// Generic syntax error surfaced by the parser.
    E1001,

    // Semantic errors (E2xxx) — `spec.md` §7 item (2).
    /// Name already declared in the innermost scope.
    E2001,
    /// Name not found in any enclosing scope.
    E2002,
    /// Function name collides with a built-in or another user function.
    E2003,
    /// Expression type does not match the type required by context.
    E2004,
    /// `return` statement incompatible with the enclosing function's signature.
    E2005,
    /// Call argument count does not match the declared parameter count.
    E2006,
    /// A non-`Void` function has a control path that falls off the end.
    E2007,
    /// Operator applied to an operand type it does not accept.
    E2008,
    /// A variable was declared with type `Void`.
    E2009,
    /// `main` is missing, or declared with the wrong signature.
    E2010,
    /// Reserved extension syntax used (classes, arrays, `null`, `for`).
    E2011,

    // Toolchain errors (E3xxx) — `spec.md` §6 exit codes 3/4.
    /// `llvm-as` failed.
    E3001,
    /// `llvm-link` failed.
    E3002,
    /// The Jasmin assembler failed.
    E3003,
}

impl ErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            ErrorCode::E2008 => "E2008",
            ErrorCode::E2009 => "E2009",
            ErrorCode::E2010 => "E2010",
            ErrorCode::E2011 => "E2011",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
        }
    }

    /// Whether this code belongs to the parser phase.
    #[must_use]
    pub const fn is_syntax(self) -> bool {
        matches!(self, ErrorCode::E1001)
    }

    /// Whether this code belongs to the toolchain phase (`spec.md` §6 exit
    /// codes 3 and 4, distinct from the `ERROR`-prefixed semantic/syntax
    /// diagnostics).
    #[must_use]
    pub const fn is_toolchain(self) -> bool {
        matches!(self, ErrorCode::E3001 | ErrorCode::E3002 | ErrorCode::E3003)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
