//! L0 AST: the minimal expression-and-print language (`spec.md` §4.F).
//!
//! A program is a sequence of statements; a statement is either an
//! assignment or a bare expression (printed). The expression grammar is
//! `*`/`/` (left-associative) over `+`/`-` (right-associative "in the
//! source" per `spec.md` §4.F — preserved exactly as documented rather than
//! "corrected" to the usual left-associative reading, since right-vs-left
//! associativity of `-` is semantically observable).

use crate::{Span, Spanned};

#[derive(Clone, Debug)]
pub struct Program {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub enum Stmt {
    Assign {
        name: String,
        value: Expr,
        span: Span,
    },
    Print {
        value: Expr,
        span: Span,
    },
}

impl Spanned for Stmt {
    fn span(&self) -> Span {
        match self {
            Stmt::Assign { span, .. } | Stmt::Print { span, .. } => *span,
        }
    }
}

/// `*`/`/`, L0 has no `%`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MulOp {
    Mul,
    Div,
}

impl MulOp {
    #[must_use]
    pub const fn is_commutative(self) -> bool {
        matches!(self, MulOp::Mul)
    }
}

/// `+`/`-`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AddOp {
    Add,
    Sub,
}

impl AddOp {
    #[must_use]
    pub const fn is_commutative(self) -> bool {
        matches!(self, AddOp::Add)
    }
}

#[derive(Clone, Debug)]
pub enum Expr {
    IntLit(i64, Span),
    Var(String, Span),
    Paren(Box<Expr>, Span),
    Mul(Box<Expr>, MulOp, Box<Expr>, Span),
    Add(Box<Expr>, AddOp, Box<Expr>, Span),
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        match self {
            Expr::IntLit(_, s)
            | Expr::Var(_, s)
            | Expr::Paren(_, s)
            | Expr::Mul(_, _, _, s)
            | Expr::Add(_, _, _, s) => *s,
        }
    }
}
