//! Concurrent compilation tests

use cmplx_glsl::{compile, compile_batch, Compiler};
use std::thread;

const FORMULAS: [&str; 6] = [
    "z^2+0.3i",
    "(2+3)*4",
    "log(z,2)",
    "sin(z)cos(z)",
    "q",
    "2+",
];

#[test]
fn test_threads_agree_with_sequential_results() {
    let expected: Vec<_> = FORMULAS.iter().map(|f| compile(f)).collect();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| FORMULAS.iter().map(|f| compile(f)).collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_batch_preserves_input_order() {
    let compiler = Compiler::new();
    let formulas: Vec<String> = (0..200).map(|n| format!("{}z", n)).collect();
    let results = compile_batch(&compiler, &formulas);

    assert_eq!(results.len(), formulas.len());
    for (n, result) in results.into_iter().enumerate() {
        assert_eq!(result.unwrap(), format!("cmplxMult({}, z)", n));
    }
}

#[test]
fn test_batch_keeps_errors_in_place() {
    let compiler = Compiler::new();
    let results = compile_batch(&compiler, &FORMULAS);
    assert!(results[0].is_ok());
    assert!(results[4].is_err());
    assert!(results[5].is_err());
}
