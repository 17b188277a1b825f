//! REPL Command Handler
//!
//! Handles special commands starting with ':'.

use super::session::ReplSession;
use crate::util::diagnostic::ErrorCodeDefinition;

/// Command result
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// Exit the REPL
    Exit,
    /// Continue to next input
    Continue,
    /// Output a message
    Output(String),
}

/// Command handler for REPL
pub struct CommandHandler<'a> {
    session: &'a ReplSession,
}

impl<'a> CommandHandler<'a> {
    pub fn new(session: &'a ReplSession) -> Self {
        Self { session }
    }

    /// Handle a command line (leading `:` optional)
    pub fn handle(
        &self,
        line: &str,
    ) -> CommandResult {
        let cmd = line.trim().trim_start_matches(':');
        let (name, argument) = match cmd.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (cmd, ""),
        };

        match name {
            "quit" | "q" => CommandResult::Exit,
            "help" | "h" => CommandResult::Output(Self::help()),
            "tokens" | "t" => self.with_formula(argument, |formula| self.tokens(formula)),
            "tree" => self.with_formula(argument, |formula| self.tree(formula)),
            "explain" | "e" => match ErrorCodeDefinition::find(argument) {
                Some(definition) => CommandResult::Output(definition.to_string()),
                None => CommandResult::Output(format!("Unknown error code: {}", argument)),
            },
            "precedence" => CommandResult::Output(format!(
                "{:?}",
                self.session.compiler().precedence()
            )),
            "" => CommandResult::Continue,
            _ => CommandResult::Output(format!("Unknown command: {}", line.trim())),
        }
    }

    fn with_formula(
        &self,
        formula: &str,
        render: impl FnOnce(&str) -> String,
    ) -> CommandResult {
        if formula.is_empty() {
            return CommandResult::Output("Usage: :<command> <formula>".to_string());
        }
        CommandResult::Output(render(formula))
    }

    fn tokens(
        &self,
        formula: &str,
    ) -> String {
        match self.session.compiler().tokenize(formula) {
            Ok(tokens) => tokens
                .iter()
                .map(|token| format!("{:<24} {}", token.describe(), token.span))
                .collect::<Vec<_>>()
                .join("\n"),
            Err(err) => self.session.render_error(&err, formula),
        }
    }

    fn tree(
        &self,
        formula: &str,
    ) -> String {
        match self.session.compiler().parse(formula) {
            Ok(tree) => tree.to_string().trim_end().to_string(),
            Err(err) => self.session.render_error(&err, formula),
        }
    }

    fn help() -> String {
        [
            "Type a formula to compile it. Available commands:",
            "  :tokens, :t <formula>  - Show the token stream",
            "  :tree <formula>        - Show the expression tree",
            "  :explain, :e <code>    - Explain an error code",
            "  :precedence            - Show the precedence table in use",
            "  :help, :h              - Show this help",
            "  :quit, :q              - Exit the REPL",
        ]
        .join("\n")
    }
}
