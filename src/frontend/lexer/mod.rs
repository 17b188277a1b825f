//! Lexer module
//! Turns formula text into a flat token sequence
//!
//! Implicit multiplication (`2x`, `2(z)`, `(a)(b)`) is made explicit here as
//! [`TokenKind::ImplicitMultiply`] tokens, and the lexer already knows whether
//! a `)` closes a parenthesized group or a function argument list.

pub mod state;
pub mod tokenizer;
pub mod tokens;
#[cfg(test)]
mod tests;

// Re-export types
pub use tokenizer::Lexer;
pub use tokens::{LexError, LexErrorReason, Token, TokenKind};

/// Tokenize a formula
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    tracing::debug!("Lexing formula ({} chars)", source.chars().count());

    match Lexer::new(source).run() {
        Ok(tokens) => {
            tracing::debug!("Lexed {} tokens", tokens.len());
            Ok(tokens)
        }
        Err(err) => {
            tracing::debug!("Lexing failed: {}", err);
            Err(err)
        }
    }
}
