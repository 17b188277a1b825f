//! 统一诊断系统
//!
//! Turns compiler errors into [`Diagnostic`]s and renders them for people.
//!
//! # 示例
//!
//! ```
//! use cmplx_glsl::util::diagnostic::{Diagnostic, TextEmitter, EmitterConfig};
//!
//! let err = cmplx_glsl::compile("2+").unwrap_err();
//! let emitter = TextEmitter::with_config(EmitterConfig { use_colors: false, ..Default::default() });
//! let text = emitter.render(&Diagnostic::from(&err), Some("2+"));
//! assert!(text.starts_with("error[E0007]"));
//! ```

pub mod codes;
pub mod emitter;

pub use codes::{ErrorCategory, ErrorCodeDefinition};
pub use emitter::{EmitterConfig, TextEmitter};

use crate::frontend::lexer::LexErrorReason;
use crate::frontend::CompileError;
use crate::middle::codegen::{tables, CodegenError};
use crate::util::span::Span;
use serde::Serialize;

/// 严重级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// A renderable report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: String,
    pub message: String,
    pub help: Option<String>,
    /// Character span in the formula
    pub span: Option<Span>,
}

impl Diagnostic {
    pub fn error(
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Error,
            code: code.into(),
            message: message.into(),
            help: None,
            span: None,
        }
    }

    pub fn at(
        mut self,
        span: Span,
    ) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_help(
        mut self,
        help: impl Into<String>,
    ) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Registry entry for this diagnostic's code
    pub fn definition(&self) -> Option<&'static ErrorCodeDefinition> {
        ErrorCodeDefinition::find(&self.code)
    }
}

impl From<&CompileError> for Diagnostic {
    fn from(err: &CompileError) -> Self {
        let mut diagnostic = Diagnostic::error(err.code(), err.to_string());
        match err {
            CompileError::Lex(lex) => {
                diagnostic = diagnostic.at(lex.span());
                if lex.reason == LexErrorReason::DanglingSign {
                    diagnostic = diagnostic.with_help("to negate a variable or group, write `-1*` before it");
                }
            }
            CompileError::Parse(parse) => {
                if let Some(index) = parse.index() {
                    diagnostic = diagnostic.at(Span::at(index));
                }
            }
            CompileError::Codegen(CodegenError::UnknownSymbol { .. }) => {
                let known: Vec<&str> = tables::SYMBOLS.keys().copied().collect();
                diagnostic = diagnostic.with_help(format!("known symbols: {}", known.join(", ")));
            }
            CompileError::Codegen(CodegenError::ArityMismatch { name, expected, .. }) => {
                diagnostic = diagnostic.with_help(format!(
                    "`{}` takes exactly {} argument(s)",
                    name, expected
                ));
            }
            CompileError::Codegen(_) => {}
        }
        diagnostic
    }
}
