//! Per-line evaluation, independent of the terminal

use crate::frontend::Compiler;
use crate::util::config::Config;
use crate::util::diagnostic::{Diagnostic, EmitterConfig, TextEmitter};

/// Outcome of one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalResult {
    /// Generated GLSL
    Output(String),
    /// Rendered diagnostic
    Error(String),
    /// Blank line
    Empty,
}

/// Compiler plus the renderer for its errors
#[derive(Debug, Clone, Default)]
pub struct ReplSession {
    compiler: Compiler,
    emitter: TextEmitter,
}

impl ReplSession {
    pub fn new(
        compiler: Compiler,
        emitter: TextEmitter,
    ) -> Self {
        Self { compiler, emitter }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Compiler::with_precedence(config.compiler.precedence),
            TextEmitter::with_config(EmitterConfig::from(&config.diagnostics)),
        )
    }

    pub fn compiler(&self) -> &Compiler {
        &self.compiler
    }

    pub fn emitter(&self) -> &TextEmitter {
        &self.emitter
    }

    pub fn eval(
        &self,
        line: &str,
    ) -> EvalResult {
        let formula = line.trim();
        if formula.is_empty() {
            return EvalResult::Empty;
        }
        match self.compiler.compile(formula) {
            Ok(output) => EvalResult::Output(output),
            Err(err) => EvalResult::Error(self.render_error(&err, formula)),
        }
    }

    pub fn render_error(
        &self,
        err: &crate::frontend::CompileError,
        formula: &str,
    ) -> String {
        self.emitter
            .render(&Diagnostic::from(err), Some(formula))
            .trim_end()
            .to_string()
    }
}
