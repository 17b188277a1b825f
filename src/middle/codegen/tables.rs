//! Lookup tables for code generation
//!
//! Built once on first use and never mutated afterwards.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Generated name and operand count of an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: String,
    pub arity: usize,
}

/// Formula symbols and the constants they stand for
pub static SYMBOLS: Lazy<IndexMap<&'static str, &'static str>> = Lazy::new(|| {
    IndexMap::from([
        ("z", "z"),
        ("i", "I"),
        ("pi", "CMPLX_PI"),
        ("tau", "CMPLX_TAU"),
        ("e", "CMPLX_E"),
    ])
});

/// Binary operators
pub static OPERATORS: Lazy<IndexMap<&'static str, Target>> = Lazy::new(|| {
    [
        ("+", "cmplxAdd"),
        ("-", "cmplxSub"),
        ("*", "cmplxMult"),
        ("/", "cmplxDiv"),
        ("^", "cmplxPow"),
    ]
    .into_iter()
    .map(|(symbol, name)| {
        (
            symbol,
            Target {
                name: name.to_string(),
                arity: 2,
            },
        )
    })
    .collect()
});

const FUNCTION_NAMES: [&str; 23] = [
    "sqrt", "cbrt", "exp", "ln", "log", "log2", "log10", "sin", "cos", "tan", "sinh", "cosh",
    "tanh", "asin", "acos", "atan", "asinh", "acosh", "atanh", "abs", "arg", "Re", "Im",
];

/// Functions that do not take a single argument
const ARITY_OVERRIDES: [(&str, usize); 1] = [("log", 2)];

/// Whitelisted functions
pub static FUNCTIONS: Lazy<IndexMap<&'static str, Target>> = Lazy::new(|| {
    FUNCTION_NAMES
        .iter()
        .map(|&name| {
            let arity = ARITY_OVERRIDES
                .iter()
                .find(|(overridden, _)| *overridden == name)
                .map_or(1, |&(_, arity)| arity);
            (
                name,
                Target {
                    name: format!("cmplx{}", capitalize(name)),
                    arity,
                },
            )
        })
        .collect()
});

/// Operator first, then function
pub fn lookup_operation(text: &str) -> Option<&'static Target> {
    OPERATORS.get(text).or_else(|| FUNCTIONS.get(text))
}

pub fn lookup_symbol(text: &str) -> Option<&'static str> {
    SYMBOLS.get(text).copied()
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("sqrt"), "Sqrt");
        assert_eq!(capitalize("log10"), "Log10");
        assert_eq!(capitalize("Re"), "Re");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_function_table() {
        assert_eq!(FUNCTIONS.len(), 23);
        let log = lookup_operation("log").unwrap();
        assert_eq!(log.name, "cmplxLog");
        assert_eq!(log.arity, 2);
        let im = lookup_operation("Im").unwrap();
        assert_eq!(im.name, "cmplxIm");
        assert_eq!(im.arity, 1);
        assert!(FUNCTIONS
            .iter()
            .filter(|(name, _)| **name != "log")
            .all(|(_, target)| target.arity == 1));
    }

    #[test]
    fn test_operator_table() {
        assert_eq!(lookup_operation("*").unwrap().name, "cmplxMult");
        assert_eq!(lookup_operation("^").unwrap().name, "cmplxPow");
        assert!(OPERATORS.values().all(|target| target.arity == 2));
        assert_eq!(lookup_operation("%"), None);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(lookup_symbol("i"), Some("I"));
        assert_eq!(lookup_symbol("tau"), Some("CMPLX_TAU"));
        assert_eq!(lookup_symbol("I"), None);
    }
}
