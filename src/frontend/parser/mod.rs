//! Parser module
//!
//! Builds an [`ExpressionTree`] from the lexer's token stream in a single
//! pass, using precedence climbing over the partially built tree.

pub mod parser_state;
pub mod precedence;
pub mod tree;
#[cfg(test)]
mod tests;

pub use parser_state::{ParseError, ParseState, ParserState, PRECEDENCE_ATTRIBUTE};
pub use precedence::{Operator, PrecedenceMode, PrecedenceTable};
pub use tree::{ExpressionNode, ExpressionTree, NodeId, NodeKind};

use crate::frontend::lexer::tokens::Token;

/// Parse tokens with the default precedence table
pub fn parse(tokens: &[Token]) -> Result<ExpressionTree, ParseError> {
    parse_with(tokens, PrecedenceTable::for_mode(PrecedenceMode::default()))
}

/// Parse tokens with an explicit precedence table
pub fn parse_with(
    tokens: &[Token],
    table: &'static PrecedenceTable,
) -> Result<ExpressionTree, ParseError> {
    tracing::debug!(
        "Parsing {} tokens ({:?} precedence)",
        tokens.len(),
        table.mode()
    );

    let mut state = ParserState::new(table);
    for token in tokens {
        if let Err(err) = state.feed(token) {
            tracing::debug!("Parsing failed: {}", err);
            return Err(err);
        }
    }

    let tree = state.finish()?;
    tracing::debug!("Parsed tree with {} nodes", tree.len());
    Ok(tree)
}
