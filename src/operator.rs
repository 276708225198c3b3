//! Logical operators and their precedence table.

use std::fmt;

/// Declared associativity of an operator.
///
/// The parser currently groups every operator to the left regardless of this value
/// (see [`crate::parser`]); it is kept as metadata.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Associativity {
    Left,
    Right,
}

/// Static description of a logical operator.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct OpSpec {
    pub symbol: char,
    pub name: &'static str,
    /// Higher binds tighter.
    pub precedence: u8,
    pub associativity: Associativity,
    pub arity: u8,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Op {
    Not,
    And,
    Or,
    Xor,
    Implies,
    Iff,
}

static SPECS: [OpSpec; 6] = [
    OpSpec {
        symbol: '¬',
        name: "NOT",
        precedence: 4,
        associativity: Associativity::Right,
        arity: 1,
    },
    OpSpec {
        symbol: '∧',
        name: "AND",
        precedence: 3,
        associativity: Associativity::Left,
        arity: 2,
    },
    OpSpec {
        symbol: '∨',
        name: "OR",
        precedence: 2,
        associativity: Associativity::Left,
        arity: 2,
    },
    OpSpec {
        symbol: '⊕',
        name: "XOR",
        precedence: 2,
        associativity: Associativity::Left,
        arity: 2,
    },
    OpSpec {
        symbol: '→',
        name: "IMPLIES",
        precedence: 1,
        associativity: Associativity::Right,
        arity: 2,
    },
    OpSpec {
        symbol: '↔',
        name: "IFF",
        precedence: 1,
        associativity: Associativity::Left,
        arity: 2,
    },
];

impl Op {
    pub const ALL: [Op; 6] = [Op::Not, Op::And, Op::Or, Op::Xor, Op::Implies, Op::Iff];

    pub fn spec(self) -> &'static OpSpec {
        &SPECS[self as usize]
    }

    /// Returns the operator written as the canonical `symbol`.
    pub fn from_symbol(symbol: char) -> Option<Op> {
        Op::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    pub fn symbol(self) -> char {
        self.spec().symbol
    }
    pub fn name(self) -> &'static str {
        self.spec().name
    }
    pub fn precedence(self) -> u8 {
        self.spec().precedence
    }
    pub fn associativity(self) -> Associativity {
        self.spec().associativity
    }
    pub fn arity(self) -> u8 {
        self.spec().arity
    }

    pub fn is_unary(self) -> bool {
        self.arity() == 1
    }
    pub fn is_binary(self) -> bool {
        self.arity() == 2
    }

    /// Applies a binary operator to its operands.
    ///
    /// # Panics
    ///
    /// Panics when called on [`Op::Not`].
    pub fn apply(self, left: bool, right: bool) -> bool {
        match self {
            Op::And => left && right,
            Op::Or => left || right,
            Op::Xor => left != right,
            Op::Implies => !left || right,
            Op::Iff => left == right,
            Op::Not => panic!("NOT is not a binary operator"),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    const PAIRS: [(bool, bool); 4] = [(true, true), (true, false), (false, true), (false, false)];

    fn column(op: Op) -> Vec<bool> {
        PAIRS.iter().map(|&(a, b)| op.apply(a, b)).collect()
    }

    #[test]
    fn test_and() {
        assert_eq!(column(Op::And), vec![true, false, false, false]);
    }

    #[test]
    fn test_or() {
        assert_eq!(column(Op::Or), vec![true, true, true, false]);
    }

    #[test]
    fn test_xor() {
        assert_eq!(column(Op::Xor), vec![false, true, true, false]);
    }

    #[test]
    fn test_implies() {
        assert_eq!(column(Op::Implies), vec![true, false, true, true]);
    }

    #[test]
    fn test_iff() {
        assert_eq!(column(Op::Iff), vec![true, false, false, true]);
    }

    #[test]
    #[should_panic(expected = "NOT is not a binary operator")]
    fn test_apply_not_panics() {
        Op::Not.apply(true, true);
    }

    #[test]
    fn test_precedence_table() {
        assert_eq!(Op::Not.precedence(), 4);
        assert_eq!(Op::And.precedence(), 3);
        assert_eq!(Op::Or.precedence(), 2);
        assert_eq!(Op::Xor.precedence(), 2);
        assert_eq!(Op::Implies.precedence(), 1);
        assert_eq!(Op::Iff.precedence(), 1);
    }

    #[test]
    fn test_symbols_round_trip() {
        for op in Op::ALL {
            assert_eq!(Op::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Op::from_symbol('&'), None);
    }

    #[test]
    fn test_arity_and_associativity() {
        assert!(Op::Not.is_unary());
        assert!(Op::ALL.iter().filter(|op| **op != Op::Not).all(|op| op.is_binary()));
        assert_eq!(Op::Implies.associativity(), Associativity::Right);
        assert_eq!(Op::And.associativity(), Associativity::Left);
    }
}
