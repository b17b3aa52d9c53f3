// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Families {Π_1, ..., Π_n} of Parikh sets.
//!
//! A family is either derived from a concrete word or built abstractly by
//! the enumerator. Levels are always filled in increasing order, so a family
//! of depth n has every level 1..=n.

use super::{Alphabet, ParikhSet};
use crate::error::{ParikhError, Result};
use serde::Serialize;
use std::fmt;

/// A mapping from level index k (1-based) to Π_k.
///
/// Extending a family with [`Family::with_level`] produces a new family;
/// sibling branches of the enumeration never share levels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Family {
    alphabet: Alphabet,
    levels: Vec<ParikhSet>,
}

impl Family {
    /// A family with no levels yet.
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            levels: Vec::new(),
        }
    }

    /// Build a family from Π_1, Π_2, ... in order, validating each level.
    pub fn from_levels(alphabet: Alphabet, levels: Vec<ParikhSet>) -> Result<Self> {
        let mut family = Family::new(alphabet);
        for level in levels {
            family.push_level(level)?;
        }
        Ok(family)
    }

    /// Levels computed from a word are valid by construction.
    pub(crate) fn from_trusted_levels(alphabet: Alphabet, levels: Vec<ParikhSet>) -> Self {
        Self { alphabet, levels }
    }

    /// Append Π_{depth+1}.
    ///
    /// Every vector must have dimension σ, non-negative components and
    /// weight equal to the new level index; the level must not be empty.
    pub fn push_level(&mut self, level: ParikhSet) -> Result<()> {
        let k = self.levels.len() + 1;
        self.validate_level(k, &level)?;
        self.levels.push(level);
        Ok(())
    }

    /// A copy of this family with Π_{depth+1} attached.
    pub fn with_level(&self, level: ParikhSet) -> Result<Family> {
        let mut extended = self.clone();
        extended.push_level(level)?;
        Ok(extended)
    }

    fn validate_level(&self, k: usize, level: &ParikhSet) -> Result<()> {
        if level.is_empty() {
            return Err(ParikhError::EmptyLevel { level: k });
        }
        for vector in level {
            if vector.dimension() != self.alphabet.size() {
                return Err(ParikhError::DimensionMismatch {
                    vector: vector.to_string(),
                    expected: self.alphabet.size(),
                    found: vector.dimension(),
                });
            }
            if !vector.is_non_negative() || vector.weight() != k as i64 {
                return Err(ParikhError::LevelWeightMismatch {
                    level: k,
                    vector: vector.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// The number of levels, n.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Π_k, or `None` if `k` is 0 or beyond the depth.
    pub fn level(&self, k: usize) -> Option<&ParikhSet> {
        k.checked_sub(1).and_then(|index| self.levels.get(index))
    }

    /// Π_k, failing with [`ParikhError::MissingLevel`] if absent.
    pub fn require_level(&self, k: usize) -> Result<&ParikhSet> {
        self.level(k).ok_or(ParikhError::MissingLevel {
            level: k,
            depth: self.depth(),
        })
    }

    /// Iterate over `(k, Π_k)` in increasing k.
    pub fn levels(&self) -> impl Iterator<Item = (usize, &ParikhSet)> {
        self.levels.iter().enumerate().map(|(i, set)| (i + 1, set))
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, level) in self.levels() {
            if k > 1 {
                write!(f, " ")?;
            }
            write!(f, "Π{}={}", k, level)?;
        }
        Ok(())
    }
}
