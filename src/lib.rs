//! cmplx-glsl
//!
//! Compiles complex-valued formulas such as `z^2 + 0.3i` into GLSL
//! expressions built from `cmplx*` function calls.
//!
//! # Example
//!
//! ```
//! assert_eq!(
//!     cmplx_glsl::compile("(2+3)*z").unwrap(),
//!     "cmplxMult(cmplxAdd(2, 3), z)"
//! );
//! ```

#![warn(rust_2018_idioms)]

// Public modules
pub mod backends;
pub mod frontend;
pub mod middle;

// Utility modules
pub mod util;

// Re-exports
pub use frontend::parser::PrecedenceMode;
pub use frontend::{CompileError, Compiler};

use rayon::prelude::*;
use tracing::debug;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tool name
pub const NAME: &str = "cmplx-glsl";

/// Compile a formula with the default precedence table
pub fn compile(formula: &str) -> Result<String, CompileError> {
    Compiler::new().compile(formula)
}

/// Compile many formulas in parallel, results in input order
pub fn compile_batch<S>(
    compiler: &Compiler,
    formulas: &[S],
) -> Vec<Result<String, CompileError>>
where
    S: AsRef<str> + Sync,
{
    debug!("Compiling batch of {} formulas", formulas.len());
    formulas
        .par_iter()
        .map(|formula| compiler.compile(formula.as_ref()))
        .collect()
}
