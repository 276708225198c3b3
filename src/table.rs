//! Truth table assembly.
//!
//! A [`TruthTable`] has one column per variable, one per intermediate
//! subexpression, and a final column for the whole expression. Rows follow
//! [`combinations`] order: all-true first, all-false last.
//!
//! Errors in the whole expression abort the table. Errors in an intermediate
//! column only turn its cells into [`Cell::Unevaluable`].

use std::fmt;

use log::{debug, trace, warn};

use crate::combinations::combinations;
use crate::decompose::decompose;
use crate::error::{Error, Result};
use crate::normalize::normalize;
use crate::parser::{parse, Postfix};
use crate::types::{Assignment, Var, VarSet, MAX_VARIABLES};

/// Sample expressions that always produce a table.
pub const EXAMPLES: [&str; 5] = [
    "(p ∧ q) ∨ (¬r → s)",
    "p ∧ (q ∨ r)",
    "(p → q) ↔ (¬q → ¬p)",
    "p ⊕ q ⊕ r",
    "¬(p ∧ q) ∨ (p ∨ q)",
];

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Cell {
    Value(bool),
    /// The subexpression of this column could not be evaluated.
    Unevaluable,
}

impl Cell {
    pub fn value(&self) -> Option<bool> {
        match self {
            Cell::Value(b) => Some(*b),
            Cell::Unevaluable => None,
        }
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Value(value)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Value(true) => write!(f, "V"),
            Cell::Value(false) => write!(f, "F"),
            Cell::Unevaluable => write!(f, "?"),
        }
    }
}

/// One row: the combination, the subexpression cells, and the final value.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthRow {
    combination: Vec<bool>,
    subexpressions: Vec<Cell>,
    result: bool,
}

impl TruthRow {
    pub fn combination(&self) -> &[bool] {
        &self.combination
    }
    pub fn subexpressions(&self) -> &[Cell] {
        &self.subexpressions
    }
    pub fn result(&self) -> bool {
        self.result
    }

    /// All cells of the row, left to right.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.combination
            .iter()
            .map(|&b| Cell::Value(b))
            .chain(self.subexpressions.iter().cloned())
            .chain(std::iter::once(Cell::Value(self.result)))
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Classification {
    /// True in every row.
    Tautology,
    /// False in every row.
    Contradiction,
    Contingency,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Tautology => write!(f, "tautology"),
            Classification::Contradiction => write!(f, "contradiction"),
            Classification::Contingency => write!(f, "contingency"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TruthTable {
    expression: String,
    variables: VarSet,
    subexpressions: Vec<String>,
    rows: Vec<TruthRow>,
}

impl TruthTable {
    /// Normalizes `input` and builds its table.
    pub fn generate(input: &str) -> Result<Self> {
        Self::from_canonical(normalize(input))
    }

    /// Builds the table of an already canonical expression.
    pub fn from_canonical(expression: impl Into<String>) -> Result<Self> {
        let expression = expression.into();
        debug!("from_canonical({:?})", expression);

        if expression.is_empty() {
            return Err(Error::EmptyExpression);
        }

        let variables = VarSet::extract(&expression);
        if variables.is_empty() {
            return Err(Error::NoVariablesFound);
        }
        if variables.len() > MAX_VARIABLES {
            return Err(Error::TooManyVariables {
                count: variables.len(),
                max: MAX_VARIABLES,
            });
        }

        let postfix = parse(&expression)?;

        let mut subexpressions = decompose(&expression);
        // The whole expression is the final column, not an intermediate one.
        if subexpressions.last() == Some(&expression) {
            subexpressions.pop();
        }

        Self::assemble(expression, variables, postfix, subexpressions)
    }

    fn assemble(
        expression: String,
        variables: VarSet,
        postfix: Postfix,
        subexpressions: Vec<String>,
    ) -> Result<Self> {
        let columns: Vec<Option<Postfix>> = subexpressions
            .iter()
            .map(|fragment| match parse(fragment) {
                Ok(postfix) => Some(postfix),
                Err(e) => {
                    warn!("{}", unevaluable(fragment, e));
                    None
                }
            })
            .collect();

        let mut rows = Vec::with_capacity(1 << variables.len());
        for combination in combinations(variables.len()) {
            let assignment = Assignment::new(&variables, &combination);
            let result = assignment.eval(&postfix)?;
            let cells = subexpressions
                .iter()
                .zip(&columns)
                .map(|(fragment, column)| match column {
                    Some(postfix) => match assignment.eval(postfix) {
                        Ok(value) => Cell::Value(value),
                        Err(e) => {
                            debug!("{}", unevaluable(fragment, e));
                            Cell::Unevaluable
                        }
                    },
                    None => Cell::Unevaluable,
                })
                .collect();
            trace!("row {:?} -> {}", combination, result);
            rows.push(TruthRow {
                combination,
                subexpressions: cells,
                result,
            });
        }

        debug!(
            "assemble: {} variables, {} subexpressions, {} rows",
            variables.len(),
            subexpressions.len(),
            rows.len()
        );

        Ok(Self {
            expression,
            variables,
            subexpressions,
            rows,
        })
    }
}

fn unevaluable(fragment: &str, reason: Error) -> Error {
    Error::UnevaluableSubexpression {
        fragment: fragment.to_string(),
        reason: Box::new(reason),
    }
}

impl TruthTable {
    /// The canonical expression.
    pub fn expression(&self) -> &str {
        &self.expression
    }
    pub fn variables(&self) -> &VarSet {
        &self.variables
    }
    /// Intermediate columns, without the whole expression.
    pub fn subexpressions(&self) -> &[String] {
        &self.subexpressions
    }
    pub fn rows(&self) -> &[TruthRow] {
        &self.rows
    }

    pub fn num_vars(&self) -> usize {
        self.variables.len()
    }
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }
    pub fn num_columns(&self) -> usize {
        self.variables.len() + self.subexpressions.len() + 1
    }

    /// Column labels: variables, subexpressions, then the expression.
    pub fn headers(&self) -> Vec<String> {
        self.variables
            .iter()
            .map(|v: Var| v.to_string())
            .chain(self.subexpressions.iter().cloned())
            .chain(std::iter::once(self.expression.clone()))
            .collect()
    }

    /// The final column.
    pub fn results(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().map(TruthRow::result)
    }

    /// Number of rows in which the expression holds.
    pub fn count_true(&self) -> usize {
        self.results().filter(|&b| b).count()
    }

    pub fn classify(&self) -> Classification {
        match self.count_true() {
            0 => Classification::Contradiction,
            n if n == self.rows.len() => Classification::Tautology,
            _ => Classification::Contingency,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn results(input: &str) -> Vec<bool> {
        TruthTable::generate(input).unwrap().results().collect()
    }

    #[test]
    fn test_and() {
        assert_eq!(results("p∧q"), vec![true, false, false, false]);
    }

    #[test]
    fn test_implies() {
        assert_eq!(results("p→q"), vec![true, false, true, true]);
    }

    #[test]
    fn test_not() {
        assert_eq!(results("¬p"), vec![false, true]);
    }

    #[test]
    fn test_shape() {
        let table = TruthTable::generate("(p ∧ q) ∨ r").unwrap();
        assert_eq!(table.expression(), "(p∧q)∨r");
        assert_eq!(table.num_vars(), 3);
        assert_eq!(table.num_rows(), 8);
        assert_eq!(table.subexpressions(), &["p∧q".to_string()]);
        assert_eq!(table.headers(), vec!["p", "q", "r", "p∧q", "(p∧q)∨r"]);
        for row in table.rows() {
            assert_eq!(row.cells().count(), table.num_columns());
        }
    }

    #[test]
    fn test_subexpression_cells() {
        let table = TruthTable::generate("(p∧q)∨r").unwrap();
        let column: Vec<Option<bool>> = table
            .rows()
            .iter()
            .map(|row| row.subexpressions()[0].value())
            .collect();
        let expected: Vec<Option<bool>> = combinations(3).map(|c| Some(c[0] && c[1])).collect();
        assert_eq!(column, expected);
    }

    #[test]
    fn test_single_variable_has_no_subexpressions() {
        let table = TruthTable::generate("p").unwrap();
        assert!(table.subexpressions().is_empty());
        assert_eq!(table.num_columns(), 2);
        assert_eq!(table.results().collect::<Vec<_>>(), vec![true, false]);
    }

    #[test]
    fn test_errors() {
        assert_eq!(TruthTable::generate("").unwrap_err(), Error::EmptyExpression);
        assert_eq!(TruthTable::generate("   ").unwrap_err(), Error::EmptyExpression);
        assert_eq!(TruthTable::generate("¬()").unwrap_err(), Error::NoVariablesFound);
        assert_eq!(TruthTable::generate("(p∧q").unwrap_err(), Error::UnbalancedParentheses);
        assert_eq!(TruthTable::generate("p∧q)").unwrap_err(), Error::UnbalancedParentheses);
        assert_eq!(
            TruthTable::generate("p∧").unwrap_err(),
            Error::MissingOperands(crate::operator::Op::And)
        );
        assert_eq!(
            TruthTable::generate("p q").unwrap_err(),
            Error::InvalidExpression { remaining: 2 }
        );
    }

    #[test]
    fn test_unevaluable_subexpression_does_not_abort() {
        let expression = "p∨q".to_string();
        let variables = VarSet::extract(&expression);
        let postfix = parse(&expression).unwrap();
        let subexpressions = vec!["p∧".to_string(), "(q".to_string(), "¬q".to_string()];

        let table = TruthTable::assemble(expression, variables, postfix, subexpressions).unwrap();
        assert_eq!(table.num_rows(), 4);
        for (row, combination) in table.rows().iter().zip(combinations(2)) {
            assert_eq!(row.subexpressions()[0], Cell::Unevaluable);
            assert_eq!(row.subexpressions()[1], Cell::Unevaluable);
            assert_eq!(row.subexpressions()[2], Cell::Value(!combination[1]));
            assert_eq!(row.result(), combination[0] || combination[1]);
        }
        assert_eq!(table.rows()[0].cells().map(|c| c.to_string()).collect::<String>(), "VV??FV");
    }

    #[test]
    fn test_classification() {
        assert_eq!(TruthTable::generate("p ∨ ¬p").unwrap().classify(), Classification::Tautology);
        assert_eq!(TruthTable::generate("p ∧ ¬p").unwrap().classify(), Classification::Contradiction);
        assert_eq!(TruthTable::generate("p → q").unwrap().classify(), Classification::Contingency);
        assert_eq!(TruthTable::generate("p → q").unwrap().count_true(), 3);
    }

    #[test]
    fn test_examples_generate() {
        for example in EXAMPLES {
            let table = TruthTable::generate(example).unwrap();
            assert!(table.num_rows() >= 2, "{}", example);
            assert!(table
                .rows()
                .iter()
                .all(|row| row.subexpressions().iter().all(|c| c.value().is_some())));
        }
        let table = TruthTable::generate(EXAMPLES[2]).unwrap();
        assert_eq!(table.classify(), Classification::Tautology);
    }
}
