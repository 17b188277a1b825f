//! REPL Completer
//!
//! Completes symbol names, function names and `:` commands.

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::Helper;

use crate::middle::codegen::tables::{FUNCTIONS, SYMBOLS};

const COMMANDS: [&str; 6] = [":tokens", ":tree", ":explain", ":precedence", ":help", ":quit"];

/// rustyline helper for formula input
#[derive(Debug, Default)]
pub struct FormulaHelper;

impl FormulaHelper {
    pub fn new() -> Self {
        Self
    }

    /// Candidates for the word ending at `pos`
    pub fn candidates(
        &self,
        line: &str,
        pos: usize,
    ) -> (usize, Vec<Pair>) {
        let head = &line[..pos];
        let start = head
            .rfind(|c: char| !c.is_ascii_alphanumeric() && c != '_' && c != ':')
            .map_or(0, |i| i + 1);
        let word = &head[start..];
        if word.is_empty() {
            return (start, Vec::new());
        }

        let mut candidates: Vec<Pair> = Vec::new();
        if word.starts_with(':') {
            for command in COMMANDS.iter().filter(|c| c.starts_with(word)) {
                candidates.push(Pair {
                    display: command.to_string(),
                    replacement: command.to_string(),
                });
            }
            return (start, candidates);
        }

        for symbol in SYMBOLS.keys().filter(|s| s.starts_with(word)) {
            candidates.push(Pair {
                display: symbol.to_string(),
                replacement: symbol.to_string(),
            });
        }
        for (name, target) in FUNCTIONS.iter().filter(|(name, _)| name.starts_with(word)) {
            candidates.push(Pair {
                display: format!("{}/{}", name, target.arity),
                replacement: format!("{}(", name),
            });
        }

        candidates.sort_by(|a, b| a.replacement.cmp(&b.replacement));
        candidates.dedup_by(|a, b| a.replacement == b.replacement);
        (start, candidates)
    }
}

impl Completer for FormulaHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        Ok(self.candidates(line, pos))
    }
}

impl Hinter for FormulaHelper {
    type Hint = String;
}

impl Highlighter for FormulaHelper {}

impl Validator for FormulaHelper {}

impl Helper for FormulaHelper {}
