//! Parser tests module

mod state;

use crate::frontend::lexer::tokenize;
use crate::frontend::parser::{parse, parse_with, ExpressionTree, NodeId, PrecedenceMode, PrecedenceTable};

/// Compact prefix rendering: `+(2, *(3, 4))`
pub(super) fn shape_of(
    tree: &ExpressionTree,
    id: NodeId,
) -> String {
    let node = tree.node(id);
    if node.children().is_empty() {
        return node.text().to_string();
    }
    let children: Vec<String> = node
        .children()
        .iter()
        .map(|&child| shape_of(tree, child))
        .collect();
    format!("{}({})", node.text(), children.join(", "))
}

/// Shape of the single top-level expression
pub(super) fn shape(source: &str) -> String {
    let tokens = tokenize(source).unwrap();
    let tree = parse(&tokens).unwrap();
    render(&tree)
}

pub(super) fn shape_in(
    mode: PrecedenceMode,
    source: &str,
) -> String {
    let tokens = tokenize(source).unwrap();
    let tree = parse_with(&tokens, PrecedenceTable::for_mode(mode)).unwrap();
    render(&tree)
}

fn render(tree: &ExpressionTree) -> String {
    let top = tree.children(tree.root());
    assert_eq!(top.len(), 1, "root must hold exactly one expression");
    shape_of(tree, top[0])
}
