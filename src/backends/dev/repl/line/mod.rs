//! Line-based REPL with rustyline
//!
//! Provides a REPL using rustyline for editing, completion and history.

use std::path::PathBuf;

use rustyline::config::Config;
use rustyline::error::ReadlineError;
use rustyline::history::FileHistory;
use rustyline::{CompletionType, EditMode, Editor};
use tracing::{debug, warn};

use crate::backends::dev::repl::commands::{CommandHandler, CommandResult};
use crate::backends::dev::repl::session::{EvalResult, ReplSession};
use crate::util::config::ReplConfig;

mod completer;
pub use completer::FormulaHelper;

/// Line REPL configuration
#[derive(Debug, Clone)]
pub struct LineREPLConfig {
    /// Prompt to display
    pub prompt: String,
    /// Enable VI mode
    pub vi_mode: bool,
    /// History file path
    pub history_file: Option<PathBuf>,
    /// Maximum history size
    pub history_size: usize,
}

impl Default for LineREPLConfig {
    fn default() -> Self {
        ReplConfig::default().into()
    }
}

impl From<ReplConfig> for LineREPLConfig {
    fn from(config: ReplConfig) -> Self {
        Self {
            prompt: config.prompt,
            vi_mode: false,
            history_file: config.history_file,
            history_size: config.history_size,
        }
    }
}

/// Line REPL
pub struct LineREPL {
    config: LineREPLConfig,
    editor: Editor<FormulaHelper, FileHistory>,
    session: ReplSession,
}

impl LineREPL {
    pub fn new(session: ReplSession) -> Result<Self> {
        Self::with_config(session, LineREPLConfig::default())
    }

    pub fn with_config(
        session: ReplSession,
        config: LineREPLConfig,
    ) -> Result<Self> {
        let rl_config = Config::builder()
            .history_ignore_space(true)
            .max_history_size(config.history_size)?
            .completion_type(CompletionType::List)
            .edit_mode(if config.vi_mode {
                EditMode::Vi
            } else {
                EditMode::Emacs
            })
            .build();

        let mut editor: Editor<FormulaHelper, FileHistory> = Editor::with_config(rl_config)?;
        editor.set_helper(Some(FormulaHelper::new()));

        if let Some(history_file) = &config.history_file {
            if history_file.exists() {
                if let Err(err) = editor.load_history(history_file) {
                    warn!("Could not load history from {}: {}", history_file.display(), err);
                }
            }
        }

        Ok(Self {
            config,
            editor,
            session,
        })
    }

    /// Run until `:quit` or Ctrl+D
    pub fn run(&mut self) -> Result<()> {
        println!("{} {} - Type :help for assistance", crate::NAME, crate::VERSION);
        println!("Press Ctrl+D or :quit to exit\n");

        loop {
            match self.editor.readline(&self.config.prompt) {
                Ok(line) => {
                    if let Err(err) = self.editor.add_history_entry(line.as_str()) {
                        debug!("History entry rejected: {}", err);
                    }

                    if line.trim_start().starts_with(':') {
                        match CommandHandler::new(&self.session).handle(&line) {
                            CommandResult::Exit => break,
                            CommandResult::Continue => {}
                            CommandResult::Output(msg) => println!("{}", msg),
                        }
                        continue;
                    }

                    match self.session.eval(&line) {
                        EvalResult::Output(glsl) => println!("{}", glsl),
                        EvalResult::Error(report) => println!("{}", report),
                        EvalResult::Empty => {}
                    }
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl-D pressed
                    break;
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl-C pressed
                    println!("(Interrupted)");
                    continue;
                }
                Err(err) => return Err(err),
            }
        }

        self.save_history();
        Ok(())
    }

    fn save_history(&mut self) {
        let Some(history_file) = &self.config.history_file else {
            return;
        };
        if let Some(dir) = history_file.parent() {
            if let Err(err) = std::fs::create_dir_all(dir) {
                warn!("Could not create {}: {}", dir.display(), err);
                return;
            }
        }
        if let Err(err) = self.editor.save_history(history_file) {
            warn!("Could not save history to {}: {}", history_file.display(), err);
        }
    }

    pub fn session(&self) -> &ReplSession {
        &self.session
    }
}

type Result<T> = std::result::Result<T, ReadlineError>;
