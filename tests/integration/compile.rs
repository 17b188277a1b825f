//! End-to-end compilation tests

use cmplx_glsl::{compile, Compiler, PrecedenceMode};

#[test]
fn test_each_binary_operator() {
    let cases = [
        ("+", "cmplxAdd"),
        ("-", "cmplxSub"),
        ("*", "cmplxMult"),
        ("/", "cmplxDiv"),
        ("^", "cmplxPow"),
    ];
    for (op, function) in cases {
        let source = format!("1.5{}2", op);
        assert_eq!(compile(&source).unwrap(), format!("{}(1.5, 2)", function));
    }
}

#[test]
fn test_implicit_multiplication_equivalence() {
    assert_eq!(compile("2z").unwrap(), compile("2*z").unwrap());
    assert_eq!(compile("2(z+1)").unwrap(), compile("2*(z+1)").unwrap());
    assert_eq!(compile("(z)(z)").unwrap(), compile("(z)*(z)").unwrap());
}

#[test]
fn test_log_takes_two_arguments() {
    assert_eq!(compile("log(2,3)").unwrap(), "cmplxLog(2, 3)");
    assert_eq!(compile("log(z, 10)").unwrap(), "cmplxLog(z, 10)");
}

#[test]
fn test_precedence_nesting_matches_explicit_grouping() {
    assert_eq!(
        compile("2+3*4^5").unwrap(),
        compile("2+(3*(4^5))").unwrap()
    );
    assert_eq!(
        compile("2+3*4^5").unwrap(),
        "cmplxAdd(2, cmplxMult(3, cmplxPow(4, 5)))"
    );
}

#[test]
fn test_parentheses_scope_operators() {
    assert_eq!(compile("(2+3)*4").unwrap(), "cmplxMult(cmplxAdd(2, 3), 4)");
}

#[test]
fn test_constants() {
    assert_eq!(
        compile("e^(i*pi)").unwrap(),
        "cmplxPow(CMPLX_E, cmplxMult(I, CMPLX_PI))"
    );
    assert_eq!(compile("tau").unwrap(), "CMPLX_TAU");
}

#[test]
fn test_realistic_formulas() {
    assert_eq!(
        compile("z^2 + 0.3i").unwrap(),
        "cmplxAdd(cmplxPow(z, 2), cmplxMult(0.3, I))"
    );
    assert_eq!(
        compile("sin(1/z)").unwrap(),
        "cmplxSin(cmplxDiv(1, z))"
    );
    assert_eq!(
        compile("abs(Re(z))+arg(z)").unwrap(),
        "cmplxAdd(cmplxAbs(cmplxRe(z)), cmplxArg(z))"
    );
}

#[test]
fn test_negative_literals() {
    assert_eq!(compile("-2").unwrap(), "-2");
    assert_eq!(compile("z*-0.5").unwrap(), "cmplxMult(z, -0.5)");
    assert_eq!(compile("z-1").unwrap(), "cmplxSub(z, 1)");
}

#[test]
fn test_precedence_modes_differ_only_on_ties() {
    let distinct = Compiler::with_precedence(PrecedenceMode::Distinct);
    let conventional = Compiler::with_precedence(PrecedenceMode::Conventional);

    assert_eq!(
        distinct.compile("1-2-3").unwrap(),
        "cmplxSub(1, cmplxSub(2, 3))"
    );
    assert_eq!(
        conventional.compile("1-2-3").unwrap(),
        "cmplxSub(cmplxSub(1, 2), 3)"
    );
    assert_eq!(
        distinct.compile("1+2*3").unwrap(),
        conventional.compile("1+2*3").unwrap()
    );
}

#[test]
fn test_deep_formula_compiles_in_batch() {
    let depth = 5_000;
    let deep = format!("{}z{}", "sqrt(".repeat(depth), ")".repeat(depth));
    let formulas = [deep.as_str(), "2x"];
    let results = cmplx_glsl::compile_batch(&Compiler::new(), &formulas);
    assert_eq!(
        results[0].as_deref().unwrap(),
        format!("{}z{}", "cmplxSqrt(".repeat(depth), ")".repeat(depth))
    );
    assert!(results[1].is_err());
}
