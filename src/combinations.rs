//! Enumeration of all assignments for `n` variables.
//!
//! Combinations are produced for the integers `2^n - 1` down to `0`, each
//! expanded most-significant bit first. The first combination is therefore
//! all-true and the last all-false, which is the conventional row order of a
//! printed truth table.

use std::iter::FusedIterator;

use crate::types::MAX_VARIABLES;

#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    /// Number of combinations still to be produced; the next one encodes `remaining - 1`.
    remaining: usize,
}

impl Combinations {
    /// # Panics
    ///
    /// Panics if `n` exceeds [`MAX_VARIABLES`].
    pub fn new(n: usize) -> Self {
        assert!(n <= MAX_VARIABLES, "At most {} variables are supported", MAX_VARIABLES);
        Self { n, remaining: 1 << n }
    }

    pub fn num_vars(&self) -> usize {
        self.n
    }
}

/// Shorthand for [`Combinations::new`].
pub fn combinations(n: usize) -> Combinations {
    Combinations::new(n)
}

impl Iterator for Combinations {
    type Item = Vec<bool>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let i = self.remaining;
        Some((0..self.n).rev().map(|j| (i >> j) & 1 == 1).collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Combinations {}

impl FusedIterator for Combinations {}
