//! Code generator tests

mod errors;

use crate::frontend::lexer::tokenize;
use crate::frontend::parser::parse;
use crate::middle::codegen::{generate, CodegenError};

pub(super) fn emit(source: &str) -> Result<String, CodegenError> {
    let tokens = tokenize(source).unwrap();
    let tree = parse(&tokens).unwrap();
    generate(&tree)
}
