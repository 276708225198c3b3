//! Editable expression text owned by a front end.

use std::fmt;

use crate::error::{Error, Result};
use crate::table::TruthTable;

/// An expression under construction, edited one character at a time.
///
/// Front ends own one of these and feed it with button presses or keystrokes;
/// [`generate`][ExpressionBuilder::generate] hands the finished text to the engine.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ExpressionBuilder {
    text: String,
}

impl ExpressionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ch: char) {
        self.text.push(ch);
    }

    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    /// Removes the last character, if any.
    pub fn backspace(&mut self) -> Option<char> {
        self.text.pop()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Builds the truth table of the current text.
    pub fn generate(&self) -> Result<TruthTable> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(Error::EmptyExpression);
        }
        TruthTable::generate(text)
    }
}

impl From<&str> for ExpressionBuilder {
    fn from(text: &str) -> Self {
        Self { text: text.to_string() }
    }
}

impl fmt::Display for ExpressionBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
