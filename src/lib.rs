//! # truth-table: truth tables for propositional formulas
//!
//! **`truth-table`** evaluates a propositional formula over up to ten variables
//! and produces its complete truth table, including intermediate
//! *subexpression* columns that show how the final value is reached.
//!
//! ## Input
//!
//! - Variables: the letters `p q r s t u v w x y`.
//! - Operators, loosest to tightest: `→ ↔`, then `∨ ⊕`, then `∧`, then `¬`.
//! - Aliases: `and`/`&`, `or`/`|`, `not`/`!`, `xor`/`^`, `->`, `<->`/`<=>`
//!   (words are case-insensitive). `[ ]` and `{ }` work as parentheses.
//!
//! ## Basic Usage
//!
//! ```rust
//! use truth_table::table::{Classification, TruthTable};
//!
//! let table = TruthTable::generate("(p and q) or r").unwrap();
//!
//! assert_eq!(table.expression(), "(p∧q)∨r");
//! assert_eq!(table.headers(), vec!["p", "q", "r", "p∧q", "(p∧q)∨r"]);
//! assert_eq!(table.num_rows(), 8);
//!
//! // Rows run from all-true to all-false.
//! assert!(table.rows()[0].result());
//! assert!(!table.rows()[7].result());
//! assert_eq!(table.classify(), Classification::Contingency);
//! ```
//!
//! ## Pipeline
//!
//! - **[`normalize`]**: aliases, brackets and whitespace to canonical text.
//! - **[`types`]**: variable extraction and assignments.
//! - **[`combinations`]**: all assignments, all-true first.
//! - **[`parser`]**: Shunting-Yard conversion to postfix.
//! - **[`eval`]**: postfix evaluation.
//! - **[`decompose`]**: heuristic split into intermediate columns.
//! - **[`table`]**: the assembled [`TruthTable`][crate::table::TruthTable].
//! - **[`session`]**: an editable expression for interactive front ends.

pub mod combinations;
pub mod decompose;
pub mod error;
pub mod eval;
pub mod normalize;
pub mod operator;
pub mod parser;
pub mod session;
pub mod table;
pub mod types;

pub use error::{Error, Result};
