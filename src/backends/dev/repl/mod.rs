//! REPL Module
//!
//! - [`session::ReplSession`] - compiles one line and formats the outcome
//! - [`commands::CommandHandler`] - `:` commands
//! - [`line::LineREPL`] - rustyline front end

pub mod commands;
pub mod line;
pub mod session;

pub use commands::{CommandHandler, CommandResult};
pub use line::{LineREPL, LineREPLConfig};
pub use session::{EvalResult, ReplSession};
