//! Evaluation of postfix token streams under an assignment.

use log::trace;

use crate::error::{Error, Result};
use crate::operator::Op;
use crate::parser::{parse, Postfix, Token};
use crate::types::Assignment;

/// Anything that can be evaluated to a boolean under an [`Assignment`].
pub trait Eval {
    fn eval(&self, assignment: &Assignment) -> Result<bool>;
}

impl Assignment {
    pub fn eval(&self, value: &(impl Eval + ?Sized)) -> Result<bool> {
        value.eval(self)
    }
}

impl Eval for Postfix {
    /// Runs the token stream on a boolean stack.
    ///
    /// Binary operators pop the right operand first, then the left one.
    /// Exactly one value must remain at the end.
    fn eval(&self, assignment: &Assignment) -> Result<bool> {
        let mut stack: Vec<bool> = Vec::with_capacity(self.len());

        for &token in self.tokens() {
            match token {
                Token::Var(var) => {
                    let value = assignment.get(var).ok_or(Error::UnassignedVariable(var))?;
                    stack.push(value);
                }
                Token::Op(Op::Not) => {
                    let operand = stack.pop().ok_or(Error::MissingOperand(Op::Not))?;
                    stack.push(!operand);
                }
                Token::Op(op) => {
                    let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                        return Err(Error::MissingOperands(op));
                    };
                    stack.push(op.apply(left, right));
                }
            }
            trace!("eval: {} -> {:?}", token, stack);
        }

        match stack.as_slice() {
            &[value] => Ok(value),
            rest => Err(Error::InvalidExpression { remaining: rest.len() }),
        }
    }
}

impl Eval for str {
    /// Parses canonical text and evaluates it.
    fn eval(&self, assignment: &Assignment) -> Result<bool> {
        parse(self)?.eval(assignment)
    }
}
