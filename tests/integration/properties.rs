//! Property tests over generated formulas

use cmplx_glsl::compile;
use proptest::prelude::*;

fn number() -> impl Strategy<Value = String> {
    prop_oneof!["[0-9]{1,3}", "[0-9]{1,2}\\.[0-9]{1,2}"]
}

fn symbol() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("z"), Just("i"), Just("pi"), Just("tau"), Just("e")]
}

proptest! {
    #[test]
    fn prop_compile_is_deterministic(source in "[0-9a-z+*/^(),. -]{0,24}") {
        prop_assert_eq!(compile(&source), compile(&source));
    }

    #[test]
    fn prop_arbitrary_input_never_panics(source in "\\PC{0,32}") {
        let _ = compile(&source);
    }

    #[test]
    fn prop_number_symbol_adjacency_multiplies(n in number(), s in symbol()) {
        let implicit = compile(&format!("{}{}", n, s)).unwrap();
        let explicit = compile(&format!("{}*{}", n, s)).unwrap();
        prop_assert_eq!(implicit, explicit);
    }

    #[test]
    fn prop_group_adjacency_multiplies(n in number(), s in symbol()) {
        let implicit = compile(&format!("({})({})", n, s)).unwrap();
        let explicit = compile(&format!("({})*({})", n, s)).unwrap();
        prop_assert_eq!(implicit, explicit);
    }

    #[test]
    fn prop_literals_are_copied_verbatim(n in number()) {
        prop_assert_eq!(compile(&n).unwrap(), n);
    }
}
