//! Precedence handling for the tree parser
//!
//! Two tables are available. [`PrecedenceMode::Distinct`] gives every
//! operator its own rank (`+`=0 `-`=1 `*`=2 `/`=3 `^`=4) and only lets a
//! strictly tighter ancestor win, which makes equal operators group to the
//! right. [`PrecedenceMode::Conventional`] ranks `+ -` and `* /` together and
//! groups them to the left; `^` stays right-associative in both.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Pow,
    ];

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            "^" => Some(Operator::Pow),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Pow => "^",
        }
    }

    #[inline]
    pub fn is_right_associative(self) -> bool {
        matches!(self, Operator::Pow)
    }
}

impl fmt::Display for Operator {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Which precedence table the parser uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrecedenceMode {
    #[default]
    Distinct,
    Conventional,
}

/// Immutable operator ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecedenceTable {
    mode: PrecedenceMode,
}

/// Process-wide tables, one per mode
pub static DISTINCT: PrecedenceTable = PrecedenceTable {
    mode: PrecedenceMode::Distinct,
};
pub static CONVENTIONAL: PrecedenceTable = PrecedenceTable {
    mode: PrecedenceMode::Conventional,
};

impl PrecedenceTable {
    pub fn for_mode(mode: PrecedenceMode) -> &'static PrecedenceTable {
        match mode {
            PrecedenceMode::Distinct => &DISTINCT,
            PrecedenceMode::Conventional => &CONVENTIONAL,
        }
    }

    pub fn mode(&self) -> PrecedenceMode {
        self.mode
    }

    pub fn precedence(
        &self,
        op: Operator,
    ) -> u8 {
        match (self.mode, op) {
            (PrecedenceMode::Distinct, Operator::Add) => 0,
            (PrecedenceMode::Distinct, Operator::Sub) => 1,
            (PrecedenceMode::Distinct, Operator::Mul) => 2,
            (PrecedenceMode::Distinct, Operator::Div) => 3,
            (PrecedenceMode::Distinct, Operator::Pow) => 4,
            (PrecedenceMode::Conventional, Operator::Add | Operator::Sub) => 0,
            (PrecedenceMode::Conventional, Operator::Mul | Operator::Div) => 1,
            (PrecedenceMode::Conventional, Operator::Pow) => 2,
        }
    }

    /// One above the tightest operator
    pub fn function_precedence(&self) -> u8 {
        Operator::ALL
            .iter()
            .map(|&op| self.precedence(op))
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Whether `incoming` (an operator, or a function call for `None`) must
    /// climb above an enclosing operation of precedence `existing`.
    pub fn must_climb(
        &self,
        existing: u8,
        incoming: Option<Operator>,
    ) -> bool {
        let incoming_precedence = match incoming {
            Some(op) => self.precedence(op),
            None => self.function_precedence(),
        };
        if existing != incoming_precedence {
            return existing > incoming_precedence;
        }
        match (self.mode, incoming) {
            (PrecedenceMode::Conventional, Some(op)) => !op.is_right_associative(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_symbols_roundtrip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol("%"), None);
        assert_eq!(Operator::from_symbol(""), None);
    }

    #[test]
    fn test_distinct_table() {
        let table = PrecedenceTable::for_mode(PrecedenceMode::Distinct);
        let ranks: Vec<u8> = Operator::ALL.iter().map(|&op| table.precedence(op)).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4]);
        assert_eq!(table.function_precedence(), 5);
    }

    #[test]
    fn test_conventional_table() {
        let table = PrecedenceTable::for_mode(PrecedenceMode::Conventional);
        let ranks: Vec<u8> = Operator::ALL.iter().map(|&op| table.precedence(op)).collect();
        assert_eq!(ranks, vec![0, 0, 1, 1, 2]);
        assert_eq!(table.function_precedence(), 3);
    }

    #[test]
    fn test_distinct_equal_precedence_does_not_climb() {
        let table = &DISTINCT;
        assert!(!table.must_climb(1, Some(Operator::Sub)));
        assert!(table.must_climb(2, Some(Operator::Add)));
        assert!(!table.must_climb(0, Some(Operator::Mul)));
    }

    #[test]
    fn test_conventional_left_associativity() {
        let table = &CONVENTIONAL;
        assert!(table.must_climb(0, Some(Operator::Sub)));
        assert!(table.must_climb(1, Some(Operator::Mul)));
        assert!(!table.must_climb(2, Some(Operator::Pow)));
    }

    #[test]
    fn test_functions_never_climb() {
        for table in [&DISTINCT, &CONVENTIONAL] {
            let fp = table.function_precedence();
            assert!(!table.must_climb(fp, None));
        }
    }

    #[test]
    fn test_mode_deserializes_from_kebab_case() {
        #[derive(Deserialize)]
        struct Holder {
            mode: PrecedenceMode,
        }
        let holder: Holder = serde_json::from_str(r#"{"mode":"conventional"}"#).unwrap();
        assert_eq!(holder.mode, PrecedenceMode::Conventional);
    }
}
