//! Errors produced while building a truth table.
//!
//! Every error is a deterministic function of the input text. All of them abort
//! table generation except [`Error::UnevaluableSubexpression`], which only marks
//! the cells of one intermediate column.

use crate::operator::Op;
use crate::types::Var;

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("expression is empty")]
    EmptyExpression,

    #[error("no variables found (use the letters p..y)")]
    NoVariablesFound,

    #[error("too many variables: {count} (at most {max} allowed)")]
    TooManyVariables { count: usize, max: usize },

    #[error("unbalanced parentheses")]
    UnbalancedParentheses,

    #[error("unexpected character {ch:?} at position {position} (variables are the letters p..y)")]
    UnexpectedCharacter { ch: char, position: usize },

    #[error("operator {0} has no operand")]
    MissingOperand(Op),

    #[error("operator {0} needs two operands")]
    MissingOperands(Op),

    #[error("invalid expression: {remaining} values left after evaluation")]
    InvalidExpression { remaining: usize },

    #[error("variable {0} has no assigned value")]
    UnassignedVariable(Var),

    #[error("subexpression {fragment} cannot be evaluated: {reason}")]
    UnevaluableSubexpression { fragment: String, reason: Box<Error> },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::TooManyVariables { count: 11, max: 10 }.to_string(),
            "too many variables: 11 (at most 10 allowed)"
        );
        assert_eq!(Error::MissingOperands(Op::And).to_string(), "operator ∧ needs two operands");
        assert_eq!(
            Error::UnexpectedCharacter { ch: 'z', position: 2 }.to_string(),
            "unexpected character 'z' at position 2 (variables are the letters p..y)"
        );
    }

    #[test]
    fn test_unevaluable_wraps_reason() {
        let err = Error::UnevaluableSubexpression {
            fragment: "¬".to_string(),
            reason: Box::new(Error::MissingOperand(Op::Not)),
        };
        assert_eq!(err.to_string(), "subexpression ¬ cannot be evaluated: operator ¬ has no operand");
    }
}
