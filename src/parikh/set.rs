// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Parikh sets Π_k and their sum/difference closures.
//!
//! # Examples
//!
//! ```
//! use parikh_search::parikh::{Alphabet, ParikhSet, ParikhVector, Word};
//!
//! let word = Word::parse("aaba", Alphabet::new(2).unwrap()).unwrap();
//! let pi2 = ParikhSet::compute(&word, 2).unwrap();
//! let expected: ParikhSet = [[2, 0], [1, 1]].into_iter().map(ParikhVector::from).collect();
//! assert_eq!(pi2, expected);
//! ```

use super::{ParikhVector, Symbol, Word};
use crate::error::{ParikhError, Result};
use serde::{Deserialize, Serialize};
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

/// A set of Parikh vectors, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParikhSet(BTreeSet<ParikhVector>);

impl ParikhSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Π_k(word): the distinct count vectors of all length-`k` factors.
    ///
    /// Fails with [`ParikhError::WindowOutOfRange`] unless `1 <= k <= len(word)`.
    pub fn compute(word: &Word, k: usize) -> Result<ParikhSet> {
        if k == 0 || k > word.len() {
            return Err(ParikhError::WindowOutOfRange { k, len: word.len() });
        }
        Ok(Self::sliding_window(word.symbols(), k, word.alphabet().size()))
    }

    /// Slide a width-`k` window over `symbols`, keeping one running count
    /// vector. Requires `1 <= k <= symbols.len()`.
    pub(crate) fn sliding_window(symbols: &[Symbol], k: usize, sigma: usize) -> ParikhSet {
        debug_assert!(k >= 1 && k <= symbols.len());
        let mut counts = vec![0i32; sigma];
        for symbol in &symbols[..k] {
            counts[symbol.as_usize()] += 1;
        }
        let mut result = BTreeSet::new();
        // Each window is inserted as its own copy of the running counts.
        result.insert(ParikhVector::new(counts.clone()));
        for i in 1..=symbols.len() - k {
            counts[symbols[i - 1].as_usize()] -= 1;
            counts[symbols[i + k - 1].as_usize()] += 1;
            result.insert(ParikhVector::new(counts.clone()));
        }
        ParikhSet(result)
    }

    /// `{a + b | a ∈ self, b ∈ other}`.
    pub fn sum_closure(&self, other: &ParikhSet) -> ParikhSet {
        let mut result = BTreeSet::new();
        for a in &self.0 {
            for b in &other.0 {
                result.insert(a.add(b));
            }
        }
        ParikhSet(result)
    }

    /// `{a - b | a ∈ self, b ∈ other}`, where `self` is the higher level.
    ///
    /// Vectors with negative components are kept. They can never match a
    /// member of a level set, which is always non-negative, so they do not
    /// affect subset tests against levels.
    pub fn diff_closure(&self, other: &ParikhSet) -> ParikhSet {
        let mut result = BTreeSet::new();
        for a in &self.0 {
            for b in &other.0 {
                result.insert(a.sub(b));
            }
        }
        ParikhSet(result)
    }

    pub fn insert(&mut self, vector: ParikhVector) -> bool {
        self.0.insert(vector)
    }

    pub fn contains(&self, vector: &ParikhVector) -> bool {
        self.0.contains(vector)
    }

    pub fn is_subset(&self, other: &ParikhSet) -> bool {
        self.0.is_subset(&other.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, ParikhVector> {
        self.0.iter()
    }

    pub fn is_non_negative(&self) -> bool {
        self.0.iter().all(ParikhVector::is_non_negative)
    }
}

impl FromIterator<ParikhVector> for ParikhSet {
    fn from_iter<I: IntoIterator<Item = ParikhVector>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ParikhSet {
    type Item = ParikhVector;
    type IntoIter = btree_set::IntoIter<ParikhVector>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParikhSet {
    type Item = &'a ParikhVector;
    type IntoIter = btree_set::Iter<'a, ParikhVector>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ParikhSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, vector) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", vector)?;
        }
        write!(f, "}}")
    }
}
