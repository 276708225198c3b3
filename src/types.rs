//! Propositional variables, variable sets and assignments.
//!
//! Variables are drawn from a fixed ten-letter alphabet (`p` through `y`).
//! A [`Var`] is a newtype over the position of its letter in that alphabet,
//! so the natural ordering of variables matches the lexicographic ordering
//! of their letters.
use std::fmt;

/// The recognized variable letters, in order.
pub const ALPHABET: [char; 10] = ['p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y'];

/// Maximum number of distinct variables in a single expression.
pub const MAX_VARIABLES: usize = ALPHABET.len();

/// A propositional variable.
///
/// # Invariants
///
/// - The wrapped index is always a valid position in [`ALPHABET`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(u8);

impl Var {
    /// Creates the variable at the given alphabet position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`MAX_VARIABLES`].
    pub fn new(index: usize) -> Self {
        assert!(index < MAX_VARIABLES, "Variable index must be < {}", MAX_VARIABLES);
        Var(index as u8)
    }

    /// Returns the variable named by `letter`, if it is in the alphabet.
    pub fn from_char(letter: char) -> Option<Self> {
        ALPHABET.iter().position(|&c| c == letter).map(|i| Var(i as u8))
    }

    /// Returns the position of the variable in the alphabet.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the letter naming this variable.
    pub fn letter(self) -> char {
        ALPHABET[self.index()]
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl From<Var> for char {
    fn from(var: Var) -> Self {
        var.letter()
    }
}

/// Sorted set of distinct variables occurring in an expression.
///
/// The order of the set is the column order of the table and the
/// bit-significance order of combinations (first variable is the most significant).
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct VarSet {
    vars: Vec<Var>,
}

impl VarSet {
    /// Scans `expression` for alphabet letters and collects them, sorted and deduplicated.
    ///
    /// Letters outside the alphabet are ignored. An empty result is not an error here;
    /// the caller decides what to do with it.
    pub fn extract(expression: &str) -> Self {
        let mut vars: Vec<Var> = expression
            .chars()
            .filter(char::is_ascii_lowercase)
            .filter_map(Var::from_char)
            .collect();
        vars.sort();
        vars.dedup();
        Self { vars }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Var> + '_ {
        self.vars.iter().copied()
    }

    pub fn as_slice(&self) -> &[Var] {
        &self.vars
    }

    pub fn contains(&self, var: Var) -> bool {
        self.vars.binary_search(&var).is_ok()
    }
}

impl FromIterator<Var> for VarSet {
    fn from_iter<I: IntoIterator<Item = Var>>(iter: I) -> Self {
        let mut vars: Vec<Var> = iter.into_iter().collect();
        vars.sort();
        vars.dedup();
        Self { vars }
    }
}

impl fmt::Display for VarSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, var) in self.vars.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", var)?;
        }
        write!(f, "}}")
    }
}

/// Boolean values assigned to (some of) the variables of the alphabet.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Assignment {
    values: [Option<bool>; MAX_VARIABLES],
}

impl Assignment {
    /// Pairs the variables of `vars` with the values of `combination`, in order.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    pub fn new(vars: &VarSet, combination: &[bool]) -> Self {
        assert_eq!(
            vars.len(),
            combination.len(),
            "Combination length must match the number of variables"
        );
        let mut assignment = Self::default();
        for (var, &value) in vars.iter().zip(combination) {
            assignment.set(var, value);
        }
        assignment
    }

    pub fn get(&self, var: Var) -> Option<bool> {
        self.values[var.index()]
    }

    pub fn set(&mut self, var: Var, value: bool) {
        self.values[var.index()] = Some(value);
    }
}

impl FromIterator<(Var, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (Var, bool)>>(iter: I) -> Self {
        let mut assignment = Self::default();
        for (var, value) in iter {
            assignment.set(var, value);
        }
        assignment
    }
}
