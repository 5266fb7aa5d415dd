//! Recursive-descent parser for L1 (`spec.md` §4.A).
//!
//! Expression precedence, loosest to tightest: `||` then `&&` then
//! relational then additive then multiplicative then unary then
//! postfix/atom — the standard Latte-family precedence ladder.

use latc_diagnostic::Diagnostic;
use latc_ir::ast::l1::{Block, DeclItem, Expr, FunctionDef, Param, Program, Stmt, TopDef};
use latc_ir::{AddOp, LogicOp, MulOp, RelOp, Span, Spanned, Type};
use latc_lexer::Token;

use crate::cursor::Cursor;

pub fn parse_program(source: &str) -> Result<Program, Vec<Diagnostic>> {
    let (tokens, lex_errors) = latc_lexer::lex(source);
    if !lex_errors.is_empty() {
        return Err(lex_errors);
    }
    let eof = Span::new(source.len() as u32, source.len() as u32);
    let mut cur = Cursor::new(&tokens, eof);
    let mut defs = Vec::new();
    let mut errors = Vec::new();
    while !cur.is_at_end() {
        match parse_top_def(&mut cur) {
            Ok(def) => defs.push(def),
            Err(e) => {
                errors.push(e);
                break;
            }
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(Program {
        span: Span::new(0, source.len() as u32),
        defs,
    })
}

fn parse_top_def(cur: &mut Cursor) -> Result<TopDef, Diagnostic> {
    if matches!(cur.peek(), Some(Token::Class)) {
        let (_, start) = cur.bump().expect("peek confirmed Class");
        let (name_tok, _) = cur.expect(|t| matches!(t, Token::Ident(_)), "class name")?;
        let name = ident_text(name_tok);
        // Skip an optional `extends Ident`, then the (unsupported) body.
        if matches!(cur.peek(), Some(Token::Extends)) {
            cur.bump();
            cur.expect(|t| matches!(t, Token::Ident(_)), "superclass name")?;
        }
        cur.expect(|t| matches!(t, Token::LBrace), "`{`")?;
        let mut depth = 1;
        let end = loop {
            let (tok, span) = cur
                .bump()
                .ok_or_else(|| Diagnostic::syntax("unterminated class body", cur.peek_span()))?;
            match tok {
                Token::LBrace => depth += 1,
                Token::RBrace => {
                    depth -= 1;
                    if depth == 0 {
                        break span;
                    }
                }
                _ => {}
            }
        };
        return Ok(TopDef::ClassDef {
            name,
            span: start.to(end),
        });
    }
    parse_function_def(cur).map(TopDef::Function)
}

fn parse_function_def(cur: &mut Cursor) -> Result<FunctionDef, Diagnostic> {
    let start = cur.peek_span();
    let ret_type = parse_type(cur)?;
    let (name_tok, _) = cur.expect(|t| matches!(t, Token::Ident(_)), "function name")?;
    let name = ident_text(name_tok);
    cur.expect(|t| matches!(t, Token::LParen), "`(`")?;
    let mut params = Vec::new();
    if !matches!(cur.peek(), Some(Token::RParen)) {
        loop {
            let pspan_start = cur.peek_span();
            let ty = parse_type(cur)?;
            let (pname, pspan_end) =
                cur.expect(|t| matches!(t, Token::Ident(_)), "parameter name")?;
            params.push(Param {
                name: ident_text(pname),
                ty,
                span: pspan_start.to(pspan_end),
            });
            if matches!(cur.peek(), Some(Token::Comma)) {
                cur.bump();
                continue;
            }
            break;
        }
    }
    cur.expect(|t| matches!(t, Token::RParen), "`)`")?;
    let body = parse_block(cur)?;
    let end = body.span;
    Ok(FunctionDef {
        name,
        ret_type,
        params,
        span: start.to(end),
        body,
    })
}

fn parse_type(cur: &mut Cursor) -> Result<Type, Diagnostic> {
    let (tok, _) = cur.bump().ok_or_else(|| {
        Diagnostic::syntax("expected a type, found end of input", cur.peek_span())
    })?;
    match tok {
        Token::Int => Ok(Type::Int),
        Token::Boolean => Ok(Type::Bool),
        Token::String => Ok(Type::Str),
        Token::Void => Ok(Type::Void),
        other => Err(Diagnostic::syntax(
            format!("expected a type, found {other:?}"),
            cur.peek_span(),
        )),
    }
}

fn parse_block(cur: &mut Cursor) -> Result<Block, Diagnostic> {
    let (_, start) = cur.expect(|t| matches!(t, Token::LBrace), "`{`")?;
    let mut stmts = Vec::new();
    while !matches!(cur.peek(), Some(Token::RBrace)) {
        if cur.is_at_end() {
            return Err(Diagnostic::syntax("unterminated block", cur.peek_span()));
        }
        stmts.push(parse_stmt(cur)?);
    }
    let (_, end) = cur.expect(|t| matches!(t, Token::RBrace), "`}`")?;
    Ok(Block {
        stmts,
        span: start.to(end),
    })
}

fn parse_stmt(cur: &mut Cursor) -> Result<Stmt, Diagnostic> {
    match cur.peek() {
        Some(Token::LBrace) => Ok(Stmt::Block(parse_block(cur)?)),
        Some(Token::Semi) => {
            let (_, span) = cur.bump().expect("peek confirmed Semi");
            Ok(Stmt::Empty(span))
        }
        Some(Token::If) => parse_if(cur),
        Some(Token::While) => parse_while(cur),
        Some(Token::For) => {
            let (_, start) = cur.bump().expect("peek confirmed For");
            // Reserved extension syntax: skip to the matching body so the
            // checker — not the parser — is what rejects it
            // (`spec.md` §3 Non-goals).
            cur.expect(|t| matches!(t, Token::LParen), "`(`")?;
            let mut depth = 1;
            while depth > 0 {
                match cur.bump() {
                    Some((Token::LParen, _)) => depth += 1,
                    Some((Token::RParen, _)) => depth -= 1,
                    Some(_) => {}
                    None => {
                        return Err(Diagnostic::syntax(
                            "unterminated `for` header",
                            cur.peek_span(),
                        ))
                    }
                }
            }
            let body = parse_stmt(cur)?;
            Ok(Stmt::For {
                span: start.to(body.span_end()),
            })
        }
        Some(Token::Return) => parse_return(cur),
        Some(t) if starts_type(t) => parse_decl(cur),
        Some(Token::Ident(_)) => parse_assign_incr_decr_or_expr(cur),
        _ => parse_expr_stmt(cur),
    }
}

/// Disambiguates `T x ...;` (a declaration) from a bare call like
/// `int();` which cannot occur since `int`/`string`/etc. are keywords, not
/// identifiers — so seeing a type keyword always starts a declaration.
fn starts_type(tok: &Token) -> bool {
    matches!(tok, Token::Int | Token::Boolean | Token::String | Token::Void)
}

fn parse_decl(cur: &mut Cursor) -> Result<Stmt, Diagnostic> {
    let start = cur.peek_span();
    let ty = parse_type(cur)?;
    let mut items = Vec::new();
    loop {
        let item_start = cur.peek_span();
        let (name_tok, name_span) =
            cur.expect(|t| matches!(t, Token::Ident(_)), "variable name")?;
        let name = ident_text(name_tok);
        let (init, item_end) = if matches!(cur.peek(), Some(Token::Eq)) {
            cur.bump();
            let e = parse_expr(cur)?;
            let end = e.span_end();
            (Some(e), end)
        } else {
            (None, name_span)
        };
        items.push(DeclItem {
            name,
            init,
            span: item_start.to(item_end),
        });
        if matches!(cur.peek(), Some(Token::Comma)) {
            cur.bump();
            continue;
        }
        break;
    }
    let (_, end) = cur.expect(|t| matches!(t, Token::Semi), "`;`")?;
    Ok(Stmt::Decl {
        ty,
        items,
        span: start.to(end),
    })
}

fn parse_assign_incr_decr_or_expr(cur: &mut Cursor) -> Result<Stmt, Diagnostic> {
    let start = cur.peek_span();
    let (name_tok, _) = cur.bump().expect("caller peeked an Ident");
    let name = ident_text(name_tok);
    match cur.peek() {
        Some(Token::Eq) => {
            cur.bump();
            let value = parse_expr(cur)?;
            let (_, end) = cur.expect(|t| matches!(t, Token::Semi), "`;`")?;
            Ok(Stmt::Assign {
                target: name,
                value,
                span: start.to(end),
            })
        }
        Some(Token::PlusPlus) => {
            cur.bump();
            let (_, end) = cur.expect(|t| matches!(t, Token::Semi), "`;`")?;
            Ok(Stmt::Incr {
                target: name,
                span: start.to(end),
            })
        }
        Some(Token::MinusMinus) => {
            cur.bump();
            let (_, end) = cur.expect(|t| matches!(t, Token::Semi), "`;`")?;
            Ok(Stmt::Decr {
                target: name,
                span: start.to(end),
            })
        }
        _ => {
            // It's the start of an expression-statement after all
            // (e.g. a bare call `f();`); re-parse from the name as an
            // expression continuation.
            let expr = parse_expr_continuation_from_ident(cur, name, start)?;
            let (_, end) = cur.expect(|t| matches!(t, Token::Semi), "`;`")?;
            Ok(Stmt::ExprStmt {
                span: start.to(end),
                expr,
            })
        }
    }
}

fn parse_if(cur: &mut Cursor) -> Result<Stmt, Diagnostic> {
    let (_, start) = cur.bump().expect("caller peeked If");
    cur.expect(|t| matches!(t, Token::LParen), "`(`")?;
    let cond = parse_expr(cur)?;
    cur.expect(|t| matches!(t, Token::RParen), "`)`")?;
    let then_branch = Box::new(parse_stmt(cur)?);
    let (else_branch, end) = if matches!(cur.peek(), Some(Token::Else)) {
        cur.bump();
        let s = parse_stmt(cur)?;
        let end = s.span_end();
        (Some(Box::new(s)), end)
    } else {
        let end = then_branch.span_end();
        (None, end)
    };
    Ok(Stmt::If {
        cond,
        then_branch,
        else_branch,
        span: start.to(end),
    })
}

fn parse_while(cur: &mut Cursor) -> Result<Stmt, Diagnostic> {
    let (_, start) = cur.bump().expect("caller peeked While");
    cur.expect(|t| matches!(t, Token::LParen), "`(`")?;
    let cond = parse_expr(cur)?;
    cur.expect(|t| matches!(t, Token::RParen), "`)`")?;
    let body = Box::new(parse_stmt(cur)?);
    let end = body.span_end();
    Ok(Stmt::While {
        cond,
        body,
        span: start.to(end),
    })
}

fn parse_return(cur: &mut Cursor) -> Result<Stmt, Diagnostic> {
    let (_, start) = cur.bump().expect("caller peeked Return");
    if matches!(cur.peek(), Some(Token::Semi)) {
        let (_, end) = cur.bump().expect("peek confirmed Semi");
        return Ok(Stmt::ReturnVoid {
            span: start.to(end),
        });
    }
    let value = parse_expr(cur)?;
    let (_, end) = cur.expect(|t| matches!(t, Token::Semi), "`;`")?;
    Ok(Stmt::ReturnValue {
        value,
        span: start.to(end),
    })
}

fn parse_expr_stmt(cur: &mut Cursor) -> Result<Stmt, Diagnostic> {
    let start = cur.peek_span();
    let expr = parse_expr(cur)?;
    let (_, end) = cur.expect(|t| matches!(t, Token::Semi), "`;`")?;
    Ok(Stmt::ExprStmt {
        expr,
        span: start.to(end),
    })
}

// --- Expressions, loosest to tightest: || , && , relational , additive ,
// multiplicative , unary , postfix/atom.

pub fn parse_expr(cur: &mut Cursor) -> Result<Expr, Diagnostic> {
    parse_or(cur)
}

fn parse_or(cur: &mut Cursor) -> Result<Expr, Diagnostic> {
    let mut lhs = parse_and(cur)?;
    while matches!(cur.peek(), Some(Token::OrOr)) {
        cur.bump();
        let rhs = parse_and(cur)?;
        let span = lhs.span_start().to(rhs.span_end());
        lhs = Expr::Logic(Box::new(lhs), LogicOp::Or, Box::new(rhs), span);
    }
    Ok(lhs)
}

fn parse_and(cur: &mut Cursor) -> Result<Expr, Diagnostic> {
    let mut lhs = parse_rel(cur)?;
    while matches!(cur.peek(), Some(Token::AndAnd)) {
        cur.bump();
        let rhs = parse_rel(cur)?;
        let span = lhs.span_start().to(rhs.span_end());
        lhs = Expr::Logic(Box::new(lhs), LogicOp::And, Box::new(rhs), span);
    }
    Ok(lhs)
}

fn parse_rel(cur: &mut Cursor) -> Result<Expr, Diagnostic> {
    let mut lhs = parse_add(cur)?;
    loop {
        let op = match cur.peek() {
            Some(Token::Lt) => RelOp::Lt,
            Some(Token::LtEq) => RelOp::Le,
            Some(Token::Gt) => RelOp::Gt,
            Some(Token::GtEq) => RelOp::Ge,
            Some(Token::EqEq) => RelOp::Eq,
            Some(Token::NotEq) => RelOp::Ne,
            _ => break,
        };
        cur.bump();
        let rhs = parse_add(cur)?;
        let span = lhs.span_start().to(rhs.span_end());
        lhs = Expr::Rel(Box::new(lhs), op, Box::new(rhs), span);
    }
    Ok(lhs)
}

fn parse_add(cur: &mut Cursor) -> Result<Expr, Diagnostic> {
    let mut lhs = parse_mul(cur)?;
    loop {
        let op = match cur.peek() {
            Some(Token::Plus) => AddOp::Add,
            Some(Token::Minus) => AddOp::Sub,
            _ => break,
        };
        cur.bump();
        let rhs = parse_mul(cur)?;
        let span = lhs.span_start().to(rhs.span_end());
        lhs = Expr::Add(Box::new(lhs), op, Box::new(rhs), span);
    }
    Ok(lhs)
}

fn parse_mul(cur: &mut Cursor) -> Result<Expr, Diagnostic> {
    let mut lhs = parse_unary(cur)?;
    loop {
        let op = match cur.peek() {
            Some(Token::Star) => MulOp::Mul,
            Some(Token::Slash) => MulOp::Div,
            Some(Token::Percent) => MulOp::Mod,
            _ => break,
        };
        cur.bump();
        let rhs = parse_unary(cur)?;
        let span = lhs.span_start().to(rhs.span_end());
        lhs = Expr::Mul(Box::new(lhs), op, Box::new(rhs), span);
    }
    Ok(lhs)
}

fn parse_unary(cur: &mut Cursor) -> Result<Expr, Diagnostic> {
    match cur.peek() {
        Some(Token::Minus) => {
            let (_, start) = cur.bump().expect("peek confirmed Minus");
            let e = parse_unary(cur)?;
            let span = start.to(e.span_end());
            Ok(Expr::Neg(Box::new(e), span))
        }
        Some(Token::Bang) => {
            let (_, start) = cur.bump().expect("peek confirmed Bang");
            let e = parse_unary(cur)?;
            let span = start.to(e.span_end());
            Ok(Expr::Not(Box::new(e), span))
        }
        _ => parse_postfix(cur),
    }
}

fn parse_postfix(cur: &mut Cursor) -> Result<Expr, Diagnostic> {
    parse_atom(cur)
}

fn parse_atom(cur: &mut Cursor) -> Result<Expr, Diagnostic> {
    let start = cur.peek_span();
    match cur.bump() {
        Some((Token::IntLit(n), span)) => Ok(Expr::IntLit(n, span)),
        Some((Token::True, span)) => Ok(Expr::BoolLit(true, span)),
        Some((Token::False, span)) => Ok(Expr::BoolLit(false, span)),
        Some((Token::StrLit(bytes), span)) => {
            Ok(Expr::StrLit(String::from_utf8_lossy(&bytes).into_owned(), span))
        }
        Some((Token::LParen, _)) => {
            let inner = parse_expr(cur)?;
            let (_, end) = cur.expect(|t| matches!(t, Token::RParen), "`)`")?;
            Ok(Expr::Paren(Box::new(inner), start.to(end)))
        }
        Some((Token::Ident(name), span)) => parse_expr_continuation_from_ident(cur, name, span),
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

/// After consuming an identifier as the start of a primary expression,
/// decides whether it's a call `name(...)` or a bare variable reference.
fn parse_expr_continuation_from_ident(
    cur: &mut Cursor,
    name: String,
    name_span: Span,
) -> Result<Expr, Diagnostic> {
    if matches!(cur.peek(), Some(Token::LParen)) {
        cur.bump();
        let mut args = Vec::new();
        if !matches!(cur.peek(), Some(Token::RParen)) {
            loop {
                args.push(parse_expr(cur)?);
                if matches!(cur.peek(), Some(Token::Comma)) {
                    cur.bump();
                    continue;
                }
                break;
            }
        }
        let (_, end) = cur.expect(|t| matches!(t, Token::RParen), "`)`")?;
        Ok(Expr::App {
            callee: name,
            args,
            span: name_span.to(end),
        })
    } else {
        Ok(Expr::Var(name, name_span))
    }
}

fn ident_text(tok: Token) -> String {
    match tok {
        Token::Ident(name) => name,
        _ => unreachable!("caller already matched Token::Ident"),
    }
}

/// Small span-reading helpers kept local to the parser: `Spanned::span`
/// already gives the whole span, these just name the two ends for
/// readability at call sites above.
trait SpanEnds {
    fn span_start(&self) -> Span;
    fn span_end(&self) -> Span;
}

impl<T: latc_ir::Spanned> SpanEnds for T {
    fn span_start(&self) -> Span {
        Span::new(self.span().start, self.span().start)
    }
    fn span_end(&self) -> Span {
        Span::new(self.span().end, self.span().end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_main() {
        let program = parse_program("int main() { return 0; }").unwrap();
        assert_eq!(program.defs.len(), 1);
        let TopDef::Function(f) = &program.defs[0] else {
            panic!("expected a function def");
        };
        assert_eq!(f.name, "main");
        assert_eq!(f.ret_type, Type::Int);
        assert_eq!(f.body.stmts.len(), 1);
    }

    #[test]
    fn parses_params_and_decl_with_initializer() {
        let program = parse_program("int f(int x, boolean b) { int y = x + 1; return y; }").unwrap();
        let TopDef::Function(f) = &program.defs[0] else {
            panic!("expected a function def");
        };
        assert_eq!(f.params.len(), 2);
        assert!(matches!(f.body.stmts[0], Stmt::Decl { .. }));
    }

    #[test]
    fn respects_standard_precedence() {
        let program = parse_program("int f() { return 1 + 2 * 3; }").unwrap();
        let TopDef::Function(f) = &program.defs[0] else {
            panic!("expected a function def");
        };
        let Stmt::ReturnValue { value, .. } = &f.body.stmts[0] else {
            panic!("expected a return");
        };
        // Top level must be `Add`, whose rhs is the `Mul` subtree.
        match value {
            Expr::Add(_, AddOp::Add, rhs, _) => {
                assert!(matches!(**rhs, Expr::Mul(..)));
            }
            other => panic!("expected an Add at the top, got {other:?}"),
        }
    }

    #[test]
    fn parses_if_else_and_while() {
        let program = parse_program(
            "int f() { if (True) { return 1; } else { return 2; } while (False) {} return 0; }",
        )
        .unwrap();
        let TopDef::Function(f) = &program.defs[0] else {
            panic!("expected a function def");
        };
        assert!(matches!(f.body.stmts[0], Stmt::If { .. }));
        assert!(matches!(f.body.stmts[1], Stmt::While { .. }));
    }

    #[test]
    fn parses_short_circuit_operators_with_and_binding_tighter_than_or() {
        let program = parse_program("int f() { return True || False && True; }").unwrap();
        let TopDef::Function(f) = &program.defs[0] else {
            panic!("expected a function def");
        };
        let Stmt::ReturnValue { value, .. } = &f.body.stmts[0] else {
            panic!("expected a return");
        };
        match value {
            Expr::Logic(_, LogicOp::Or, rhs, _) => {
                assert!(matches!(**rhs, Expr::Logic(_, LogicOp::And, _, _)));
            }
            other => panic!("expected Or at the top, got {other:?}"),
        }
    }

    #[test]
    fn parses_a_call_expression_statement() {
        let program = parse_program("int f() { printInt(1); return 0; }").unwrap();
        let TopDef::Function(f) = &program.defs[0] else {
            panic!("expected a function def");
        };
        assert!(matches!(f.body.stmts[0], Stmt::ExprStmt { .. }));
    }

    #[test]
    fn parses_increment_and_decrement() {
        let program = parse_program("int f() { int x = 0; x++; x--; return x; }").unwrap();
        let TopDef::Function(f) = &program.defs[0] else {
            panic!("expected a function def");
        };
        assert!(matches!(f.body.stmts[1], Stmt::Incr { .. }));
        assert!(matches!(f.body.stmts[2], Stmt::Decr { .. }));
    }

    #[test]
    fn reports_a_syntax_error_for_unbalanced_parens() {
        let result = parse_program("int f() { return (1 + 2; }");
        assert!(result.is_err());
    }
}
