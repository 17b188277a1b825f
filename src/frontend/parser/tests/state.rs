//! Parser state tests

use crate::frontend::lexer::tokenize;
use crate::frontend::parser::precedence::DISTINCT;
use crate::frontend::parser::{ParseState, ParserState};

#[test]
fn test_parser_state_new() {
    let state = ParserState::new(&DISTINCT);
    assert_eq!(state.state(), ParseState::ExpectValue);
    assert!(state.tree().is_empty());
}

#[test]
fn test_state_transitions() {
    let tokens = tokenize("sin(z)+2").unwrap();
    let mut state = ParserState::new(&DISTINCT);
    let mut seen = Vec::new();
    for token in &tokens {
        state.feed(token).unwrap();
        seen.push(state.state());
    }
    assert_eq!(
        seen,
        vec![
            ParseState::ExpectArgListOpen,
            ParseState::ExpectValue,
            ParseState::AfterValue,
            ParseState::AfterValue,
            ParseState::ExpectValue,
            ParseState::AfterValue,
        ]
    );
    assert!(state.finish().is_ok());
}

#[test]
fn test_finish_rejects_dangling_operator() {
    let tokens = tokenize("2+3").unwrap();
    let mut state = ParserState::new(&DISTINCT);
    for token in &tokens[..2] {
        state.feed(token).unwrap();
    }
    assert!(state.finish().is_err());
}

#[test]
fn test_state_display() {
    assert_eq!(ParseState::ExpectValue.to_string(), "expecting a value");
    assert_eq!(ParseState::AfterValue.to_string(), "after a complete value");
}
