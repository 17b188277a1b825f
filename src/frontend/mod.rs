//! Frontend compilation pipeline
//!
//! Tokenizer and parser, plus the [`Compiler`] that chains them with the
//! code generator.

use crate::middle::codegen::{self, CodegenError};
use thiserror::Error;
use tracing::debug;

pub mod lexer;
pub mod parser;

use lexer::{LexError, Token};
use parser::{ExpressionTree, ParseError, PrecedenceMode, PrecedenceTable};

/// Compiler context
///
/// Holds only immutable settings, so one instance can be shared between
/// threads.
#[derive(Debug, Clone, Copy)]
pub struct Compiler {
    table: &'static PrecedenceTable,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::with_precedence(PrecedenceMode::default())
    }
}

impl Compiler {
    /// Create a new compiler
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_precedence(mode: PrecedenceMode) -> Self {
        Self {
            table: PrecedenceTable::for_mode(mode),
        }
    }

    pub fn precedence(&self) -> PrecedenceMode {
        self.table.mode()
    }

    pub fn tokenize(
        &self,
        source: &str,
    ) -> Result<Vec<Token>, CompileError> {
        Ok(lexer::tokenize(source)?)
    }

    /// Tokenize and parse
    pub fn parse(
        &self,
        source: &str,
    ) -> Result<ExpressionTree, CompileError> {
        let tokens = self.tokenize(source)?;
        Ok(parser::parse_with(&tokens, self.table)?)
    }

    /// Compile a formula to a GLSL expression
    pub fn compile(
        &self,
        source: &str,
    ) -> Result<String, CompileError> {
        debug!("Compiling formula {:?}", source);
        let tree = self.parse(source)?;
        let output = codegen::generate(&tree)?;
        debug!("Compilation successful");
        Ok(output)
    }
}

/// Compilation errors
///
/// Each stage's error is passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Codegen(#[from] CodegenError),
}

impl CompileError {
    /// Stable error code, see [`crate::util::diagnostic::codes`]
    pub fn code(&self) -> &'static str {
        match self {
            CompileError::Lex(err) => err.code(),
            CompileError::Parse(err) => err.code(),
            CompileError::Codegen(err) => err.code(),
        }
    }

    pub fn stage(&self) -> &'static str {
        match self {
            CompileError::Lex(_) => "lex",
            CompileError::Parse(_) => "parse",
            CompileError::Codegen(_) => "codegen",
        }
    }

    /// Character index the error points at, if it has one
    pub fn index(&self) -> Option<usize> {
        match self {
            CompileError::Lex(err) => Some(err.index),
            CompileError::Parse(err) => err.index(),
            CompileError::Codegen(_) => None,
        }
    }
}
