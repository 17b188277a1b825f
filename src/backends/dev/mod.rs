//! Development tools
//!
//! - REPL: compile formulas interactively

pub mod repl;

pub use repl::{LineREPL, LineREPLConfig, ReplSession};
