//! 错误处理测试

use super::emit;
use crate::frontend::parser::tree::{ExpressionTree, NodeKind};
use crate::middle::codegen::{generate, CodegenError};

#[test]
fn test_unknown_symbol() {
    let err = emit("q").unwrap_err();
    assert_eq!(
        err,
        CodegenError::UnknownSymbol {
            name: "q".to_string()
        }
    );
    assert_eq!(err.to_string(), "unknown symbol \"q\"");
    assert_eq!(err.code(), "E2002");
}

#[test]
fn test_unknown_function() {
    let err = emit("foo(z)").unwrap_err();
    assert_eq!(
        err,
        CodegenError::UnknownOperation {
            name: "foo".to_string()
        }
    );
}

#[test]
fn test_arity_mismatch() {
    assert_eq!(
        emit("log(2)").unwrap_err(),
        CodegenError::ArityMismatch {
            name: "log".to_string(),
            expected: 2,
            found: 1,
        }
    );
    let err = emit("sqrt(1,2)").unwrap_err();
    assert_eq!(
        err.to_string(),
        "\"sqrt\" expects 1 argument(s), found 2"
    );
}

#[test]
fn test_empty_tree() {
    let tree = ExpressionTree::new();
    assert_eq!(
        generate(&tree).unwrap_err(),
        CodegenError::TopLevelCount { found: 0 }
    );
}

#[test]
fn test_two_top_level_expressions() {
    let mut tree = ExpressionTree::new();
    let root = tree.root();
    let a = tree.create_node(NodeKind::Number, "1");
    let b = tree.create_node(NodeKind::Number, "2");
    tree.append_child(root, a);
    tree.append_child(root, b);
    assert_eq!(
        generate(&tree).unwrap_err().to_string(),
        "expected exactly one top-level expression, found 2"
    );
}

#[test]
fn test_nested_root_marker() {
    let mut tree = ExpressionTree::new();
    let root = tree.root();
    let op = tree.create_node(NodeKind::Operation, "sin");
    let marker = tree.create_node(NodeKind::Root, "");
    tree.append_child(root, op);
    tree.append_child(op, marker);
    assert!(matches!(
        generate(&tree).unwrap_err(),
        CodegenError::MalformedNode {
            kind: NodeKind::Root,
            ..
        }
    ));
}

#[test]
fn test_binary_operator_with_one_operand() {
    let mut tree = ExpressionTree::new();
    let root = tree.root();
    let op = tree.create_node(NodeKind::Operation, "+");
    let one = tree.create_node(NodeKind::Number, "1");
    tree.append_child(root, op);
    tree.append_child(op, one);
    assert_eq!(
        generate(&tree).unwrap_err(),
        CodegenError::ArityMismatch {
            name: "+".to_string(),
            expected: 2,
            found: 1,
        }
    );
}
