//! Code generator
//!
//! Walks a parsed [`ExpressionTree`] depth-first and emits a single GLSL
//! expression made of nested `cmplx*` calls, the complex constants and
//! numeric literals copied verbatim.

pub mod tables;
#[cfg(test)]
mod tests;

use crate::frontend::parser::tree::{ExpressionTree, NodeId, NodeKind};
use tables::{lookup_operation, lookup_symbol};
use tracing::debug;

/// Code generation error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodegenError {
    #[error("expected exactly one top-level expression, found {found}")]
    TopLevelCount { found: usize },

    #[error("unknown symbol \"{name}\"")]
    UnknownSymbol { name: String },

    #[error("unknown operator or function \"{name}\"")]
    UnknownOperation { name: String },

    #[error("\"{name}\" expects {expected} argument(s), found {found}")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    /// A root marker below the top of the tree
    #[error("malformed expression tree: unexpected {kind} node {node}")]
    MalformedNode { kind: NodeKind, node: NodeId },
}

impl CodegenError {
    pub fn code(&self) -> &'static str {
        match self {
            CodegenError::TopLevelCount { .. } => "E2001",
            CodegenError::UnknownSymbol { .. } => "E2002",
            CodegenError::UnknownOperation { .. } => "E2003",
            CodegenError::ArityMismatch { .. } => "E2004",
            CodegenError::MalformedNode { .. } => "E2005",
        }
    }
}

/// Generate the GLSL expression for a tree
pub fn generate(tree: &ExpressionTree) -> Result<String, CodegenError> {
    let top = tree.children(tree.root());
    let [expression] = top else {
        return Err(CodegenError::TopLevelCount { found: top.len() });
    };

    let mut output = String::new();
    let mut pending = vec![Step::Node(*expression)];
    while let Some(step) = pending.pop() {
        match step {
            Step::Node(id) => emit(tree, id, &mut output, &mut pending)?,
            Step::Separator => output.push_str(", "),
            Step::Close => output.push(')'),
        }
    }
    debug!("Generated {} bytes of GLSL", output.len());
    Ok(output)
}

/// Pending emitter work, kept off the call stack
#[derive(Debug, Clone, Copy)]
enum Step {
    Node(NodeId),
    Separator,
    Close,
}

/// Write one node's own text and schedule its children
fn emit(
    tree: &ExpressionTree,
    id: NodeId,
    output: &mut String,
    pending: &mut Vec<Step>,
) -> Result<(), CodegenError> {
    let node = tree.node(id);
    match node.kind() {
        NodeKind::Number => output.push_str(node.text()),
        NodeKind::Symbol => {
            let constant = lookup_symbol(node.text()).ok_or_else(|| CodegenError::UnknownSymbol {
                name: node.text().to_string(),
            })?;
            output.push_str(constant);
        }
        NodeKind::Operation => {
            let target =
                lookup_operation(node.text()).ok_or_else(|| CodegenError::UnknownOperation {
                    name: node.text().to_string(),
                })?;
            let children = node.children();
            if children.len() != target.arity {
                return Err(CodegenError::ArityMismatch {
                    name: node.text().to_string(),
                    expected: target.arity,
                    found: children.len(),
                });
            }

            output.push_str(&target.name);
            output.push('(');
            pending.push(Step::Close);
            for (position, &child) in children.iter().enumerate().rev() {
                pending.push(Step::Node(child));
                if position > 0 {
                    pending.push(Step::Separator);
                }
            }
        }
        NodeKind::Root => {
            return Err(CodegenError::MalformedNode {
                kind: NodeKind::Root,
                node: id,
            })
        }
    }
    Ok(())
}
