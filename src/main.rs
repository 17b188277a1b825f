//! cmplx-glsl - CLI

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use cmplx_glsl::backends::dev::{LineREPL, LineREPLConfig, ReplSession};
use cmplx_glsl::util::config::load_config;
use cmplx_glsl::util::diagnostic::{Diagnostic, ErrorCodeDefinition, TextEmitter};
use cmplx_glsl::util::logger::{self, LogLevel};
use cmplx_glsl::{compile_batch, CompileError, NAME, VERSION};
use std::fs;
use std::path::PathBuf;

/// Compile complex-valued formulas into GLSL expressions
#[derive(Parser, Debug)]
#[command(name = "cmplx-glsl")]
#[command(version = VERSION)]
#[command(about = "Compile complex-valued formulas into GLSL expressions", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile a formula and print the GLSL expression
    Compile {
        #[arg(value_name = "FORMULA")]
        formula: String,
    },

    /// Print the token stream of a formula
    Tokens {
        #[arg(value_name = "FORMULA")]
        formula: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the expression tree of a formula
    Tree {
        #[arg(value_name = "FORMULA")]
        formula: String,

        /// Emit JSON instead of the outline
        #[arg(long)]
        json: bool,
    },

    /// Compile one formula per line, in parallel
    Batch {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Start an interactive session
    Repl,

    /// Explain an error code
    Explain {
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Print version information
    Version,
}

fn main() -> Result<()> {
    let args = Args::parse();

    logger::init_with_level(LogLevel::from_verbosity(args.verbose));

    let config = load_config(args.config.as_deref()).context("Failed to load configuration")?;
    let session = ReplSession::from_config(&config);
    let compiler = *session.compiler();
    let emitter = session.emitter().clone();

    match args.command {
        Commands::Compile { formula } => {
            let glsl = compiler
                .compile(&formula)
                .map_err(|err| report(&emitter, &err, &formula))?;
            println!("{}", glsl);
        }
        Commands::Tokens { formula, json } => {
            let tokens = compiler
                .tokenize(&formula)
                .map_err(|err| report(&emitter, &err, &formula))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tokens)?);
            } else {
                for token in &tokens {
                    println!("{:<24} {}", token.describe(), token.span);
                }
            }
        }
        Commands::Tree { formula, json } => {
            let tree = compiler
                .parse(&formula)
                .map_err(|err| report(&emitter, &err, &formula))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tree.to_json())?);
            } else {
                println!("{}", tree);
            }
        }
        Commands::Batch { file } => {
            let content = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read: {}", file.display()))?;
            let formulas: Vec<&str> = content.lines().map(str::trim).collect();

            let mut failures = 0;
            for (line, (formula, result)) in formulas
                .iter()
                .zip(compile_batch(&compiler, &formulas))
                .enumerate()
            {
                if formula.is_empty() {
                    continue;
                }
                match result {
                    Ok(glsl) => println!("{}", glsl),
                    Err(err) => {
                        failures += 1;
                        eprintln!("{}:{}:", file.display(), line + 1);
                        eprint!("{}", emitter.render(&Diagnostic::from(&err), Some(*formula)));
                    }
                }
            }
            if failures > 0 {
                bail!("{} formula(s) failed to compile", failures);
            }
        }
        Commands::Repl => {
            let mut repl = LineREPL::with_config(session, LineREPLConfig::from(config.repl))
                .context("Failed to start the line editor")?;
            repl.run().context("REPL terminated")?;
        }
        Commands::Explain { code } => match ErrorCodeDefinition::find(&code) {
            Some(definition) => println!("{}", definition),
            None => bail!("Unknown error code: {}", code),
        },
        Commands::Version => {
            println!("{} {}", NAME, VERSION);
        }
    }

    Ok(())
}

/// Print the rendered diagnostic and hand back a terse error for the exit status
fn report(
    emitter: &TextEmitter,
    err: &CompileError,
    formula: &str,
) -> anyhow::Error {
    eprint!("{}", emitter.render(&Diagnostic::from(err), Some(formula)));
    anyhow::anyhow!("compilation failed ({})", err.code())
}
