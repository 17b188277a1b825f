//! Lexer tests module
//!
//! - basic: numbers, symbols, operators, whitespace
//! - implicit: implicit multiplication and function/group detection
//! - errors: error reasons and indices


use crate::frontend::lexer::{tokenize, TokenKind};

/// Kinds and texts of a successfully lexed formula
fn lex(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|t| (t.kind, t.text))
        .collect()
}

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).into_iter().map(|(kind, _)| kind).collect()
}
