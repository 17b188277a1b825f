//! Middle end
//!
//! Turns the parsed expression tree into target source.

pub mod codegen;

pub use codegen::{generate, CodegenError};
