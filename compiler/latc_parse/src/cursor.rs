//! Token cursor shared by the L0 and L1 parsers.
//!
//! A thin peek/bump wrapper over the token vector the lexer produced; a
//! parse failure raises `Diagnostic::syntax` rather than panicking, so the
//! driver can surface it as the `ERROR` / "Syntax error in line L:C:" exit
//! path (`spec.md` §6 exit code 1).

use latc_diagnostic::Diagnostic;
use latc_ir::Span;
use latc_lexer::Token;

pub struct Cursor<'a> {
    tokens: &'a [(Token, Span)],
    pos: usize,
    /// Span used when the cursor is past the last token (end-of-input
    /// errors still need somewhere to point).
    eof_span: Span,
}

impl<'a> Cursor<'a> {
    #[must_use]
    pub fn new(tokens: &'a [(Token, Span)], eof_span: Span) -> Self {
        Cursor {
            tokens,
            pos: 0,
            eof_span,
        }
    }

    #[must_use]
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    #[must_use]
    pub fn peek_nth(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.pos + n).map(|(t, _)| t)
    }

    #[must_use]
    pub fn peek_span(&self) -> Span {
        self.tokens
            .get(self.pos)
            .map_or(self.eof_span, |(_, s)| *s)
    }

    pub fn bump(&mut self) -> Option<(Token, Span)> {
        let item = self.tokens.get(self.pos).cloned();
        if item.is_some() {
            self.pos += 1;
        }
        item
    }

    /// Consumes the next token if `pred` accepts it, reporting *syntax
    /// error* otherwise.
    pub fn expect(
        &mut self,
        pred: impl FnOnce(&Token) -> bool,
        what: &str,
    ) -> Result<(Token, Span), Diagnostic> {
        match self.peek() {
            Some(tok) if pred(tok) => Ok(self.bump().expect("peek just confirmed a token")),
            Some(other) => Err(Diagnostic::syntax(
                format!("expected {what}, found {other:?}"),
                self.peek_span(),
            )),
            None => Err(Diagnostic::syntax(
                format!("expected {what}, found end of input"),
                self.peek_span(),
            )),
        }
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}
