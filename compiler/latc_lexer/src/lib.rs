//! Shared lexer for L0 and L1 source (`spec.md` §1 "Out of scope" notes
//! lexing as an external collaborator; built here anyway so the crate is
//! runnable end to end — `SPEC_FULL.md` §1).

mod escape;
mod token;

pub use token::RawToken as Token;

use latc_diagnostic::Diagnostic;
use latc_ir::Span;
use logos::Logos as _;

/// Runs the lexer over `source`, returning every recognized token with its
/// span. Unrecognized input is collected as diagnostics rather than
/// aborting, so the driver can report every lexical error in one pass.
#[must_use]
pub fn lex(source: &str) -> (Vec<(Token, Span)>, Vec<Diagnostic>) {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let span = Span::new(span.start as u32, span.end as u32);
        match result {
            Ok(tok) => tokens.push((tok, span)),
            Err(()) => errors.push(Diagnostic::syntax(
                format!("unrecognized token {:?}", lexer.slice()),
                span,
            )),
        }
    }
    (tokens, errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexes_l0_assignment_and_print() {
        let (tokens, errors) = lex("a = 1 + 2;\na");
        assert!(errors.is_empty());
        let kinds: Vec<&Token> = tokens.iter().map(|(t, _)| t).collect();
        assert_eq!(
            kinds,
            vec![
                &Token::Ident("a".to_string()),
                &Token::Eq,
                &Token::IntLit(1),
                &Token::Plus,
                &Token::IntLit(2),
                &Token::Semi,
                &Token::Ident("a".to_string()),
            ]
        );
    }

    #[test]
    fn lexes_l1_keywords_and_punctuation() {
        let (tokens, errors) = lex("int f(int x) { return x + 1; }");
        assert!(errors.is_empty());
        let kinds: Vec<&Token> = tokens.iter().map(|(t, _)| t).collect();
        assert_eq!(kinds[0], &Token::Int);
        assert!(kinds.contains(&&Token::Return));
        assert!(kinds.contains(&&Token::LBrace));
        assert!(kinds.contains(&&Token::RBrace));
    }

    #[test]
    fn comments_and_whitespace_are_skipped() {
        let (tokens, errors) = lex("// a comment\nint /* inline */ x;");
        assert!(errors.is_empty());
        let kinds: Vec<&Token> = tokens.iter().map(|(t, _)| t).collect();
        assert_eq!(
            kinds,
            vec![&Token::Int, &Token::Ident("x".to_string()), &Token::Semi]
        );
    }

    #[test]
    fn string_literal_escapes_are_cooked() {
        let (tokens, _) = lex(r#""a\nb""#);
        assert_eq!(tokens[0].0, Token::StrLit(b"a\nb".to_vec()));
    }

    #[test]
    fn unrecognized_character_becomes_a_diagnostic() {
        let (_, errors) = lex("int x = 1 $ 2;");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn spans_track_byte_offsets() {
        let (tokens, _) = lex("int x;");
        assert_eq!(tokens[0].1, Span::new(0, 3));
        assert_eq!(tokens[1].1, Span::new(4, 5));
    }
}
