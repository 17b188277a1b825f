//! Error handling integration tests
//!
//! Each stage's error reaches the caller unchanged.

use cmplx_glsl::frontend::lexer::LexErrorReason;
use cmplx_glsl::middle::CodegenError;
use cmplx_glsl::{compile, CompileError};

#[test]
fn test_unmatched_close_is_lex_error_at_zero() {
    match compile(")").unwrap_err() {
        CompileError::Lex(err) => {
            assert_eq!(err.index, 0);
            assert_eq!(err.reason, LexErrorReason::UnmatchedClosingParenthesis);
        }
        other => panic!("expected lex error, got {:?}", other),
    }
}

#[test]
fn test_trailing_operator_is_incomplete_expression() {
    let err = compile("2+").unwrap_err();
    assert!(matches!(
        &err,
        CompileError::Lex(lex) if lex.reason == LexErrorReason::IncompleteExpression && lex.character.is_none()
    ));
    assert_eq!(err.index(), Some(2));
    assert!(err.to_string().contains("incomplete expression"));
}

#[test]
fn test_unknown_symbol_is_named() {
    let err = compile("q").unwrap_err();
    assert_eq!(
        err,
        CompileError::Codegen(CodegenError::UnknownSymbol {
            name: "q".to_string()
        })
    );
    assert!(err.to_string().contains("\"q\""));
    assert_eq!(err.stage(), "codegen");
}

#[test]
fn test_arity_errors() {
    assert!(matches!(
        compile("log(2)").unwrap_err(),
        CompileError::Codegen(CodegenError::ArityMismatch {
            expected: 2,
            found: 1,
            ..
        })
    ));
    assert!(matches!(
        compile("sqrt(1,2)").unwrap_err(),
        CompileError::Codegen(CodegenError::ArityMismatch {
            expected: 1,
            found: 2,
            ..
        })
    ));
}

#[test]
fn test_message_is_stage_message() {
    let err = compile("1.2.3").unwrap_err();
    let CompileError::Lex(lex) = &err else {
        panic!("expected lex error, got {:?}", err);
    };
    assert_eq!(err.to_string(), lex.to_string());
    assert_eq!(err.code(), "E0002");
}

#[test]
fn test_unclosed_group_is_rejected() {
    assert!(matches!(
        compile("sin(z").unwrap_err(),
        CompileError::Lex(lex) if lex.reason == LexErrorReason::UnclosedGroup(1)
    ));
}
