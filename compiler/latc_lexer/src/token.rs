//! Token kinds for the combined L0/L1 surface syntax (`spec.md` §4.A).
//!
//! Both grammars are tokenized with the same lexer; L0 source simply never
//! produces the L1-only keyword tokens, since it has no keywords of its
//! own at all.

use logos::Logos;

#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*([^*]|\*[^/])*\*/")]
pub enum RawToken {
    // L1 type keywords
    #[token("int")]
    Int,
    #[token("string")]
    String,
    #[token("boolean")]
    Boolean,
    #[token("void")]
    Void,

    // L1 control-flow keywords
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("return")]
    Return,

    // Boolean literals. The grammar's own examples spell these lowercase
    // (`true`/`false`); `True`/`False` are accepted too since spec.md's
    // `if (True && False)`-style snippets use the capitalized form.
    #[token("true")]
    #[token("True")]
    True,
    #[token("false")]
    #[token("False")]
    False,

    // Reserved extension keywords (`spec.md` §3 Non-goals: diagnosed, not
    // lowered)
    #[token("class")]
    Class,
    #[token("extends")]
    Extends,
    #[token("null")]
    Null,
    #[token("for")]
    For,
    #[token("new")]
    New,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    IntLit(i64),
    #[regex(r#""([^"\\]|\\.)*""#, |lex| crate::escape::cook(lex.slice()))]
    StrLit(Vec<u8>),

    // Multi-character operators (must precede their single-character
    // prefixes so logos' longest-match still picks the right one, but
    // listing order doesn't actually matter to logos — kept here for
    // readability).
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,

    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("=")]
    Eq,
    #[token("!")]
    Bang,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semi,
    #[token(",")]
    Comma,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_and_capitalized_bool_literals_both_lex() {
        let mut lexer = RawToken::lexer("true false True False");
        assert_eq!(lexer.next(), Some(Ok(RawToken::True)));
        assert_eq!(lexer.next(), Some(Ok(RawToken::False)));
        assert_eq!(lexer.next(), Some(Ok(RawToken::True)));
        assert_eq!(lexer.next(), Some(Ok(RawToken::False)));
        assert_eq!(lexer.next(), None);
    }
}
