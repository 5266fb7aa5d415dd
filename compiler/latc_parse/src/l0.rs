//! Recursive-descent parser for L0 (`spec.md` §4.F).
//!
//! Grammar: a program is a sequence of statements; a statement is either
//! `x = e;` or a bare `e;` (printed). Expressions: `*`/`/`
//! left-associative over `+`/`-` right-associative — preserved exactly as
//! `spec.md` documents it, not "corrected" to the usual left-associative
//! reading.

use latc_diagnostic::Diagnostic;
use latc_ir::ast::l0::{AddOp, Expr, MulOp, Program, Stmt};
use latc_ir::Span;
use latc_lexer::Token;

use crate::cursor::Cursor;

pub fn parse_program(source: &str) -> Result<Program, Vec<Diagnostic>> {
    let (tokens, lex_errors) = latc_lexer::lex(source);
    if !lex_errors.is_empty() {
        return Err(lex_errors);
    }
    let eof = Span::new(source.len() as u32, source.len() as u32);
    let mut cur = Cursor::new(&tokens, eof);
    let mut stmts = Vec::new();
    while !cur.is_at_end() {
        match parse_stmt(&mut cur) {
            Ok(s) => stmts.push(s),
            Err(e) => return Err(vec![e]),
        }
    }
    Ok(Program {
        span: Span::new(0, source.len() as u32),
        stmts,
    })
}

fn parse_stmt(cur: &mut Cursor) -> Result<Stmt, Diagnostic> {
    let start = cur.peek_span();
    // `x = e;` requires looking two tokens ahead to distinguish from a
    // bare expression statement starting with the same identifier
    // (`x;` or `x + 1;`).
    if let Some(Token::Ident(name)) = cur.peek().cloned() {
        if is_assignment(cur) {
            cur.bump();
            cur.bump(); // `=`
            let value = parse_expr(cur)?;
            let (_, end) = cur.expect(|t| matches!(t, Token::Semi), "`;`")?;
            return Ok(Stmt::Assign {
                name,
                value,
                span: start.to(end),
            });
        }
    }
    let value = parse_expr(cur)?;
    let (_, end) = cur.expect(|t| matches!(t, Token::Semi), "`;`")?;
    Ok(Stmt::Print {
        value,
        span: start.to(end),
    })
}

/// True when the cursor is positioned at `Ident =` (and not `Ident ==`,
/// which the lexer already tokenizes as a single `EqEq`, so a plain
/// one-token lookahead after the identifier is enough).
fn is_assignment(cur: &Cursor) -> bool {
    cur.peek_nth(1).is_some_and(|t| matches!(t, Token::Eq))
}

fn parse_expr(cur: &mut Cursor) -> Result<Expr, Diagnostic> {
    parse_add(cur)
}

/// Right-associative: `a - b - c` parses as `a - (b - c)`.
fn parse_add(cur: &mut Cursor) -> Result<Expr, Diagnostic> {
    let lhs = parse_mul(cur)?;
    let op = match cur.peek() {
        Some(Token::Plus) => AddOp::Add,
        Some(Token::Minus) => AddOp::Sub,
        _ => return Ok(lhs),
    };
    cur.bump();
    let rhs = parse_add(cur)?;
    let span = Span::new(
        latc_ir::Spanned::span(&lhs).start,
        latc_ir::Spanned::span(&rhs).end,
    );
    Ok(Expr::Add(Box::new(lhs), op, Box::new(rhs), span))
}

fn parse_mul(cur: &mut Cursor) -> Result<Expr, Diagnostic> {
    let mut lhs = parse_atom(cur)?;
    loop {
        let op = match cur.peek() {
            Some(Token::Star) => MulOp::Mul,
            Some(Token::Slash) => MulOp::Div,
            _ => break,
        };
        cur.bump();
        let rhs = parse_atom(cur)?;
        let span = Span::new(
            latc_ir::Spanned::span(&lhs).start,
            latc_ir::Spanned::span(&rhs).end,
        );
        lhs = Expr::Mul(Box::new(lhs), op, Box::new(rhs), span);
    }
    Ok(lhs)
}

fn parse_atom(cur: &mut Cursor) -> Result<Expr, Diagnostic> {
    let start = cur.peek_span();
    match cur.bump() {
        Some((Token::IntLit(n), span)) => Ok(Expr::IntLit(n, span)),
        Some((Token::Ident(name), span)) => Ok(Expr::Var(name, span)),
        Some((Token::LParen, _)) => {
            let inner = parse_expr(cur)?;
            let (_, end) = cur.expect(|t| matches!(t, Token::RParen), "`)`")?;
            Ok(Expr::Paren(Box::new(inner), start.to(end)))
        }
        Some((other, span)) => Err(Diagnostic::syntax(
            format!("expected an expression, found {other:?}"),
            span,
        )),
        None => Err(Diagnostic::syntax(
            "expected an expression, found end of input",
            start,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_assignment_then_print() {
        let program = parse_program("a = 1 + 2;\na").unwrap();
        assert_eq!(program.stmts.len(), 2);
        assert!(matches!(program.stmts[0], Stmt::Assign { .. }));
        assert!(matches!(program.stmts[1], Stmt::Print { .. }));
    }

    #[test]
    fn additive_chain_is_right_associative() {
        let program = parse_program("1 - 2 - 3;").unwrap();
        let Stmt::Print { value, .. } = &program.stmts[0] else {
            panic!("expected a print statement");
        };
        // `1 - (2 - 3)`: top-level rhs must itself be a Sub.
        match value {
            Expr::Add(_, AddOp::Sub, rhs, _) => assert!(matches!(**rhs, Expr::Add(..))),
            other => panic!("expected Sub at top level, got {other:?}"),
        }
    }

    #[test]
    fn multiplicative_chain_is_left_associative() {
        let program = parse_program("1 * 2 * 3;").unwrap();
        let Stmt::Print { value, .. } = &program.stmts[0] else {
            panic!("expected a print statement");
        };
        // `(1 * 2) * 3`: top-level lhs must itself be a Mul.
        match value {
            Expr::Mul(lhs, MulOp::Mul, _, _) => assert!(matches!(**lhs, Expr::Mul(..))),
            other => panic!("expected Mul at top level, got {other:?}"),
        }
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let program = parse_program("1 + 2 * 3;").unwrap();
        let Stmt::Print { value, .. } = &program.stmts[0] else {
            panic!("expected a print statement");
        };
        match value {
            Expr::Add(_, AddOp::Add, rhs, _) => assert!(matches!(**rhs, Expr::Mul(..))),
            other => panic!("expected Add at top level, got {other:?}"),
        }
    }

    #[test]
    fn parenthesized_expression_overrides_precedence() {
        let program = parse_program("(1 + 2) * 3;").unwrap();
        let Stmt::Print { value, .. } = &program.stmts[0] else {
            panic!("expected a print statement");
        };
        assert!(matches!(value, Expr::Mul(..)));
    }
}
