//! Heuristic decomposition of an expression into intermediate columns.
//!
//! The expression is split recursively at its loosest top-level binary operator
//! (or stripped of a leading `¬`), and every composite piece met on the way is
//! recorded once. This is not a full parse-tree enumeration: the goal is a short
//! list of useful, non-redundant columns, not every distinct subformula.
//!
//! Fragments are ordered by length, then by where they first occur in the
//! expression. The whole expression always comes last.

use std::collections::HashSet;

use log::debug;

use crate::operator::Op;
use crate::types::Var;

/// Splits `expression` into subexpression fragments, the full expression last.
///
/// Returns an empty list when the expression is a single (possibly parenthesized) variable.
pub fn decompose(expression: &str) -> Vec<String> {
    let chars: Vec<char> = expression.chars().collect();

    let mut fragments = Fragments::default();
    walk(&chars, &mut fragments);
    let mut result = fragments.list;

    if result.is_empty() && is_atom(trim_outer_parens(&chars)) {
        debug!("decompose({:?}) -> atom", expression);
        return result;
    }

    result.sort_by_key(|f| (f.chars().count(), expression.find(f.as_str())));

    if let Some(i) = result.iter().position(|f| f == expression) {
        result.remove(i);
    }
    result.push(expression.to_string());

    debug!("decompose({:?}) -> {:?}", expression, result);
    result
}

#[derive(Debug, Default)]
struct Fragments {
    list: Vec<String>,
    seen: HashSet<String>,
}

impl Fragments {
    fn record(&mut self, fragment: &[char]) {
        let fragment: String = trim_outer_parens(fragment).iter().collect();
        if !fragment.is_empty() && self.seen.insert(fragment.clone()) {
            self.list.push(fragment);
        }
    }
}

/// Records the composite pieces of `expr`, innermost first.
///
/// A negated composite operand keeps one pair of parentheses, so `¬((p∨q))`
/// yields `¬(p∨q)` rather than `¬p∨q`.
fn walk(expr: &[char], fragments: &mut Fragments) {
    let e = trim_outer_parens(expr);
    if e.is_empty() {
        return;
    }

    if let Some(i) = split_point(e) {
        walk(&e[..i], fragments);
        walk(&e[i + 1..], fragments);
        fragments.record(e);
        return;
    }

    if e[0] == Op::Not.symbol() {
        let operand = &e[1..];
        walk(operand, fragments);
        let inner = trim_outer_parens(operand);
        let mut negated = vec![e[0]];
        // `¬(p∧q)` must not lose its parentheses and turn into `¬p∧q`.
        if split_point(inner).is_some() {
            negated.push('(');
            negated.extend_from_slice(inner);
            negated.push(')');
        } else {
            negated.extend_from_slice(inner);
        }
        fragments.record(&negated);
    }

    // A bare variable (or anything else without operators) adds no column.
}

/// Strips parentheses that enclose the whole of `e`, repeatedly.
///
/// `(p)∧(q)` is left alone: its first `(` closes before the end.
fn trim_outer_parens(mut e: &[char]) -> &[char] {
    while e.len() > 1 && e[0] == '(' && e[e.len() - 1] == ')' {
        let mut depth = 0i32;
        let wraps = e[..e.len() - 1].iter().all(|&c| {
            match c {
                '(' => depth += 1,
                ')' => depth -= 1,
                _ => {}
            }
            depth != 0
        });
        if !wraps {
            break;
        }
        e = &e[1..e.len() - 1];
    }
    e
}

/// Position of the first top-level binary operator with the lowest precedence.
fn split_point(e: &[char]) -> Option<usize> {
    let mut depth = 0i32;
    let mut best: Option<(usize, u8)> = None;
    for (i, &c) in e.iter().enumerate() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ if depth == 0 => {
                if let Some(op) = Op::from_symbol(c).filter(|op| op.is_binary()) {
                    if best.map_or(true, |(_, p)| op.precedence() < p) {
                        best = Some((i, op.precedence()));
                    }
                }
            }
            _ => {}
        }
    }
    best.map(|(i, _)| i)
}

fn is_atom(e: &[char]) -> bool {
    matches!(e, &[c] if Var::from_char(c).is_some())
}
