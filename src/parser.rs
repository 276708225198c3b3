//! Infix to postfix conversion (Shunting-Yard).
//!
//! # Grouping
//!
//! An operator on the stack is popped while its precedence is greater than *or equal to*
//! the precedence of the incoming binary operator. This makes every binary operator
//! group to the left, including `→`: `p→q→r` reads as `(p→q)→r`. The declared
//! [`Associativity`][crate::operator::Associativity] is not consulted.
//!
//! `¬` is pushed without popping anything, since nothing binds tighter.

use std::fmt;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::operator::Op;
use crate::types::Var;

/// A single postfix token.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Token {
    Var(Var),
    Op(Op),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Var(var) => write!(f, "{}", var),
            Token::Op(op) => write!(f, "{}", op),
        }
    }
}

/// Expression in postfix (reverse Polish) order.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Postfix {
    tokens: Vec<Token>,
}

impl Postfix {
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl FromIterator<Token> for Postfix {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

/// Entry of the operator stack.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Pending {
    Op(Op),
    Open,
}

/// Converts canonical infix text into postfix.
///
/// Parenthesis balance is checked here; operand counts are only checked on evaluation.
pub fn parse(expression: &str) -> Result<Postfix> {
    debug!("parse({:?})", expression);

    let mut output: Vec<Token> = Vec::with_capacity(expression.len());
    let mut stack: Vec<Pending> = Vec::new();

    for (position, ch) in expression.chars().enumerate() {
        trace!("parse: {:?}, stack = {:?}", ch, stack);
        if let Some(var) = Var::from_char(ch) {
            output.push(Token::Var(var));
            continue;
        }
        match ch {
            '(' => stack.push(Pending::Open),
            ')' => loop {
                match stack.pop() {
                    Some(Pending::Op(op)) => output.push(Token::Op(op)),
                    Some(Pending::Open) => break,
                    None => return Err(Error::UnbalancedParentheses),
                }
            },
            _ => match Op::from_symbol(ch) {
                Some(Op::Not) => stack.push(Pending::Op(Op::Not)),
                Some(op) => {
                    while let Some(&Pending::Op(top)) = stack.last() {
                        if top.precedence() < op.precedence() {
                            break;
                        }
                        output.push(Token::Op(top));
                        stack.pop();
                    }
                    stack.push(Pending::Op(op));
                }
                None => return Err(Error::UnexpectedCharacter { ch, position }),
            },
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Op(op) => output.push(Token::Op(op)),
            Pending::Open => return Err(Error::UnbalancedParentheses),
        }
    }

    let postfix = Postfix { tokens: output };
    debug!("parse: {}", postfix);
    Ok(postfix)
}
