//! Token types

use crate::util::span::Span;
use serde::Serialize;
use std::fmt;

/// Token kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Number,
    Symbol,
    Operator,
    /// Multiplication inferred from adjacency (`2x`, `2(z)`); carries no text
    ImplicitMultiply,
    ParenthesisOpen,
    ParenthesisClose,
    FunctionName,
    FunctionArgsStart,
    FunctionArgsEnd,
    ArgSeparator,
}

impl TokenKind {
    /// Kinds that stand for a binary operator
    #[inline]
    pub fn is_operator(self) -> bool {
        matches!(self, TokenKind::Operator | TokenKind::ImplicitMultiply)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let name = match self {
            TokenKind::Number => "number",
            TokenKind::Symbol => "symbol",
            TokenKind::Operator => "operator",
            TokenKind::ImplicitMultiply => "implicit multiplication",
            TokenKind::ParenthesisOpen => "opening parenthesis",
            TokenKind::ParenthesisClose => "closing parenthesis",
            TokenKind::FunctionName => "function name",
            TokenKind::FunctionArgsStart => "argument list start",
            TokenKind::FunctionArgsEnd => "argument list end",
            TokenKind::ArgSeparator => "argument separator",
        };
        f.write_str(name)
    }
}

/// Token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        text: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Human-friendly description used in diagnostics
    pub fn describe(&self) -> String {
        if self.text.is_empty() {
            self.kind.to_string()
        } else {
            format!("{} \"{}\"", self.kind, self.text)
        }
    }
}

/// Why the lexer gave up
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexErrorReason {
    #[error("unmatched closing parenthesis")]
    UnmatchedClosingParenthesis,
    #[error("a decimal point may only appear once, inside a number literal")]
    MisplacedDecimalPoint,
    #[error("commas may only appear within a function argument list")]
    CommaOutsideArgumentList,
    #[error("the preceding function argument is incomplete")]
    IncompleteArgument,
    #[error("a minus sign must be followed by digits")]
    DanglingSign,
    #[error("expected a number, variable or function name")]
    ExpectedValue,
    #[error("this character cannot appear inside a number literal")]
    InvalidInNumber,
    #[error("this character cannot appear inside a variable or function name")]
    InvalidInIdentifier,
    #[error("this character cannot appear after a complete value")]
    InvalidAfterValue,
    #[error("incomplete expression, expected a number, variable or function name")]
    IncompleteExpression,
    #[error("{0} unclosed group(s) at end of input")]
    UnclosedGroup(usize),
}

/// Lexer error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unexpected {} at index {index}: {reason}", describe_char(.character))]
pub struct LexError {
    /// Offending character, `None` at end of input
    pub character: Option<char>,
    pub index: usize,
    pub reason: LexErrorReason,
}

impl LexError {
    pub fn new(
        character: Option<char>,
        index: usize,
        reason: LexErrorReason,
    ) -> Self {
        Self {
            character,
            index,
            reason,
        }
    }

    /// Stable diagnostic code
    pub fn code(&self) -> &'static str {
        match self.reason {
            LexErrorReason::UnmatchedClosingParenthesis => "E0001",
            LexErrorReason::MisplacedDecimalPoint => "E0002",
            LexErrorReason::CommaOutsideArgumentList => "E0003",
            LexErrorReason::IncompleteArgument => "E0004",
            LexErrorReason::DanglingSign => "E0005",
            LexErrorReason::ExpectedValue
            | LexErrorReason::InvalidInNumber
            | LexErrorReason::InvalidInIdentifier
            | LexErrorReason::InvalidAfterValue => "E0006",
            LexErrorReason::IncompleteExpression => "E0007",
            LexErrorReason::UnclosedGroup(_) => "E0008",
        }
    }

    /// Location of the offending character
    pub fn span(&self) -> Span {
        match self.character {
            Some(_) => Span::at(self.index),
            None => Span::empty(self.index),
        }
    }
}

fn describe_char(character: &Option<char>) -> String {
    match character {
        Some(c) => format!("character '{}'", c),
        None => "end of input".to_string(),
    }
}
