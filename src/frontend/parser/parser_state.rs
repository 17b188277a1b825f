//! Parser state and error handling
//!
//! The parser never looks ahead: each token is applied to the tree as it is
//! read. A cursor marks the node last inserted, the scope stack bounds how
//! far operator insertion may climb, and an argument-list scope remembers
//! which function a `,` returns to.

use super::precedence::{Operator, PrecedenceTable};
use super::tree::{ExpressionTree, NodeId, NodeKind};
use crate::frontend::lexer::tokens::{Token, TokenKind};
use std::fmt;

/// Attribute caching an operation's precedence
pub const PRECEDENCE_ATTRIBUTE: &str = "precedence";

/// Parser state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    ExpectValue,
    AfterValue,
    ExpectArgListOpen,
}

impl fmt::Display for ParseState {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let text = match self {
            ParseState::ExpectValue => "expecting a value",
            ParseState::AfterValue => "after a complete value",
            ParseState::ExpectArgListOpen => "expecting an argument list",
        };
        f.write_str(text)
    }
}

/// Parse error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Token kind not legal in the current state
    #[error("unexpected {} at index {index} while {state}", describe(.kind, .text))]
    UnexpectedToken {
        kind: TokenKind,
        text: String,
        index: usize,
        state: ParseState,
    },
    #[error("unknown operator \"{text}\" at index {index}")]
    UnknownOperator { text: String, index: usize },
    #[error("token stream ended while {state}")]
    UnexpectedEnd { state: ParseState },
    #[error("token stream ended with {open} unclosed group(s)")]
    UnclosedScope { open: usize },
}

impl ParseError {
    fn unexpected(
        token: &Token,
        state: ParseState,
    ) -> Self {
        ParseError::UnexpectedToken {
            kind: token.kind,
            text: token.text.clone(),
            index: token.span.start,
            state,
        }
    }

    /// Stable diagnostic code
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::UnexpectedToken { .. } => "E1001",
            ParseError::UnknownOperator { .. } => "E1002",
            ParseError::UnexpectedEnd { .. } => "E1003",
            ParseError::UnclosedScope { .. } => "E1004",
        }
    }

    /// Index of the offending token, if any
    pub fn index(&self) -> Option<usize> {
        match self {
            ParseError::UnexpectedToken { index, .. } | ParseError::UnknownOperator { index, .. } => {
                Some(*index)
            }
            ParseError::UnexpectedEnd { .. } | ParseError::UnclosedScope { .. } => None,
        }
    }
}

fn describe(
    kind: &TokenKind,
    text: &str,
) -> String {
    if text.is_empty() {
        kind.to_string()
    } else {
        format!("{} \"{}\"", kind, text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScopeKind {
    Group,
    Call,
}

/// Boundary that operator insertion may not climb past
#[derive(Debug, Clone, Copy)]
struct Scope {
    node: NodeId,
    kind: ScopeKind,
}

/// Incremental tree builder
pub struct ParserState {
    tree: ExpressionTree,
    table: &'static PrecedenceTable,
    state: ParseState,
    cursor: NodeId,
    /// The base entry is the root and is never popped
    scopes: Vec<Scope>,
}

impl ParserState {
    pub fn new(table: &'static PrecedenceTable) -> Self {
        let tree = ExpressionTree::new();
        let root = tree.root();
        Self {
            tree,
            table,
            state: ParseState::ExpectValue,
            cursor: root,
            scopes: vec![Scope {
                node: root,
                kind: ScopeKind::Group,
            }],
        }
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    pub fn tree(&self) -> &ExpressionTree {
        &self.tree
    }

    /// Apply one token
    pub fn feed(
        &mut self,
        token: &Token,
    ) -> Result<(), ParseError> {
        use ParseState::*;

        let unexpected = |state| ParseError::unexpected(token, state);

        self.state = match (token.kind, self.state) {
            (TokenKind::Number, ExpectValue) => {
                self.insert_value(NodeKind::Number, &token.text);
                AfterValue
            }
            (TokenKind::Symbol, ExpectValue) => {
                self.insert_value(NodeKind::Symbol, &token.text);
                AfterValue
            }
            (TokenKind::Operator, AfterValue) => {
                let op = Operator::from_symbol(&token.text).ok_or_else(|| {
                    ParseError::UnknownOperator {
                        text: token.text.clone(),
                        index: token.span.start,
                    }
                })?;
                self.insert_operator(op);
                ExpectValue
            }
            (TokenKind::ImplicitMultiply, AfterValue) => {
                self.insert_operator(Operator::Mul);
                ExpectValue
            }
            (TokenKind::FunctionName, ExpectValue) => {
                let function = self.insert_function(&token.text);
                self.open(function, ScopeKind::Call);
                ExpectArgListOpen
            }
            (TokenKind::FunctionArgsStart, ExpectArgListOpen) => ExpectValue,
            (TokenKind::FunctionArgsEnd, AfterValue) if self.in_scope(ScopeKind::Call) => {
                if let Some(scope) = self.scopes.pop() {
                    self.cursor = scope.node;
                }
                AfterValue
            }
            (TokenKind::ArgSeparator, AfterValue) if self.in_scope(ScopeKind::Call) => {
                self.cursor = self.scope();
                ExpectValue
            }
            (TokenKind::ParenthesisOpen, ExpectValue) => {
                self.open(self.cursor, ScopeKind::Group);
                ExpectValue
            }
            (TokenKind::ParenthesisClose, AfterValue)
                if self.scopes.len() > 1 && self.in_scope(ScopeKind::Group) =>
            {
                if let Some(scope) = self.scopes.pop() {
                    // the group's own top node becomes the value just read
                    self.cursor = self.tree.last_child(scope.node).unwrap_or(scope.node);
                }
                AfterValue
            }
            (_, state) => return Err(unexpected(state)),
        };
        tracing::trace!("{} -> {}, cursor {}", token.describe(), self.state, self.cursor);
        Ok(())
    }

    /// Check the end state and hand out the tree
    pub fn finish(self) -> Result<ExpressionTree, ParseError> {
        if self.state != ParseState::AfterValue {
            return Err(ParseError::UnexpectedEnd { state: self.state });
        }
        if self.scopes.len() > 1 {
            return Err(ParseError::UnclosedScope {
                open: self.scopes.len() - 1,
            });
        }
        Ok(self.tree)
    }

    fn open(
        &mut self,
        node: NodeId,
        kind: ScopeKind,
    ) {
        self.scopes.push(Scope { node, kind });
    }

    fn scope(&self) -> NodeId {
        self.scopes
            .last()
            .map(|scope| scope.node)
            .unwrap_or_else(|| self.tree.root())
    }

    fn in_scope(
        &self,
        kind: ScopeKind,
    ) -> bool {
        self.scopes.last().is_some_and(|scope| scope.kind == kind)
    }

    fn is_operation(
        &self,
        id: NodeId,
    ) -> bool {
        self.tree.kind(id) == NodeKind::Operation
    }

    fn precedence_of(
        &self,
        id: NodeId,
    ) -> u8 {
        self.tree
            .attribute(id, PRECEDENCE_ATTRIBUTE)
            .and_then(|value| value.parse().ok())
            .unwrap_or(0)
    }

    /// Move the cursor up to the nearest operation or the scope boundary
    fn climb_to_operation(&mut self) {
        let scope = self.scope();
        while self.cursor != scope && !self.is_operation(self.cursor) {
            match self.tree.parent(self.cursor) {
                Some(parent) => self.cursor = parent,
                None => break,
            }
        }
    }

    /// Highest node the new operation must take over.
    ///
    /// Walks the operations strictly above the cursor, innermost first, and
    /// stops at the scope boundary or the first one that binds looser.
    fn insertion_point(
        &self,
        incoming: Option<Operator>,
    ) -> NodeId {
        let scope = self.scope();
        let mut point = self.cursor;
        if point == scope {
            return point;
        }
        let mut current = self.tree.parent(self.cursor);
        while let Some(id) = current {
            if id == scope {
                break;
            }
            if self.is_operation(id) {
                if !self.table.must_climb(self.precedence_of(id), incoming) {
                    break;
                }
                point = id;
            }
            current = self.tree.parent(id);
        }
        point
    }

    fn insert_value(
        &mut self,
        kind: NodeKind,
        text: &str,
    ) {
        self.climb_to_operation();
        let node = self.tree.create_node(kind, text);
        self.tree.append_child(self.cursor, node);
        self.cursor = node;
    }

    fn insert_operator(
        &mut self,
        op: Operator,
    ) {
        let point = self.insertion_point(Some(op));
        let node = self.tree.create_node(NodeKind::Operation, op.symbol());
        self.tree.set_attribute(
            node,
            PRECEDENCE_ATTRIBUTE,
            self.table.precedence(op).to_string(),
        );
        self.tree.insert_above(point, node);
        self.cursor = node;
    }

    fn insert_function(
        &mut self,
        name: &str,
    ) -> NodeId {
        let point = self.insertion_point(None);
        let node = self.tree.create_node(NodeKind::Operation, name);
        self.tree.set_attribute(
            node,
            PRECEDENCE_ATTRIBUTE,
            self.table.function_precedence().to_string(),
        );
        self.tree.append_child(point, node);
        self.cursor = node;
        node
    }
}
