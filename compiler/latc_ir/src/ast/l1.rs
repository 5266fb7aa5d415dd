//! L1 AST: the statically-typed procedural language (`spec.md` §4.A).
//!
//! A closed set of tagged variants, matched exhaustively downstream instead
//! of the runtime type-tests a parser-generated visitor would use
//! (`spec.md` §9 "Visitor dispatch by variant").

use crate::operators::{AddOp, LogicOp, MulOp, RelOp};
use crate::types::Type;
use crate::{Span, Spanned};

#[derive(Clone, Debug)]
pub struct Program {
    pub defs: Vec<TopDef>,
    pub span: Span,
}

/// A top-level definition. `ClassDef` and `For` statements are parsed (the
/// grammar reserves the syntax) but rejected by the checker with
/// `Latte extension, not implemented` (`spec.md` §7 item 3).
#[derive(Clone, Debug)]
pub enum TopDef {
    Function(FunctionDef),
    ClassDef { name: String, span: Span },
}

impl Spanned for TopDef {
    fn span(&self) -> Span {
        match self {
            TopDef::Function(f) => f.span,
            TopDef::ClassDef { span, .. } => *span,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FunctionDef {
    pub name: String,
    pub ret_type: Type,
    pub params: Vec<Param>,
    pub body: Block,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct Param {
    pub name: String,
    pub ty: Type,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct DeclItem {
    pub name: String,
    pub init: Option<Expr>,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub enum Stmt {
    Empty(Span),
    Block(Block),
    Decl {
        ty: Type,
        items: Vec<DeclItem>,
        span: Span,
    },
    Assign {
        target: String,
        value: Expr,
        span: Span,
    },
    Incr {
        target: String,
        span: Span,
    },
    Decr {
        target: String,
        span: Span,
    },
    ReturnValue {
        value: Expr,
        span: Span,
    },
    ReturnVoid {
        span: Span,
    },
    If {
        cond: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
        span: Span,
    },
    While {
        cond: Expr,
        body: Box<Stmt>,
        span: Span,
    },
    /// Reserved extension syntax (`spec.md` §1 Non-goals): parsed so a
    /// program using it fails with a proper diagnostic rather than a parse
    /// error, but never lowered.
    For {
        span: Span,
    },
    ExprStmt {
        expr: Expr,
        span: Span,
    },
}

impl Spanned for Stmt {
    fn span(&self) -> Span {
        match self {
            Stmt::Empty(s)
            | Stmt::Decl { span: s, .. }
            | Stmt::Assign { span: s, .. }
            | Stmt::Incr { span: s, .. }
            | Stmt::Decr { span: s, .. }
            | Stmt::ReturnValue { span: s, .. }
            | Stmt::ReturnVoid { span: s }
            | Stmt::If { span: s, .. }
            | Stmt::While { span: s, .. }
            | Stmt::For { span: s }
            | Stmt::ExprStmt { span: s, .. } => *s,
            Stmt::Block(b) => b.span,
        }
    }
}

#[derive(Clone, Debug)]
pub enum Expr {
    IntLit(i64, Span),
    BoolLit(bool, Span),
    StrLit(String, Span),
    Var(String, Span),
    Paren(Box<Expr>, Span),
    /// `f(e1, .., en)`.
    App {
        callee: String,
        args: Vec<Expr>,
        span: Span,
    },
    /// `-e`, `Int`-only.
    Neg(Box<Expr>, Span),
    /// `!e`, `Bool`-only.
    Not(Box<Expr>, Span),
    Mul(Box<Expr>, MulOp, Box<Expr>, Span),
    Add(Box<Expr>, AddOp, Box<Expr>, Span),
    Rel(Box<Expr>, RelOp, Box<Expr>, Span),
    Logic(Box<Expr>, LogicOp, Box<Expr>, Span),
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        match self {
            Expr::IntLit(_, s)
            | Expr::BoolLit(_, s)
            | Expr::StrLit(_, s)
            | Expr::Var(_, s)
            | Expr::Paren(_, s)
            | Expr::App { span: s, .. }
            | Expr::Neg(_, s)
            | Expr::Not(_, s)
            | Expr::Mul(_, _, _, s)
            | Expr::Add(_, _, _, s)
            | Expr::Rel(_, _, _, s)
            | Expr::Logic(_, _, _, s) => *s,
        }
    }
}
