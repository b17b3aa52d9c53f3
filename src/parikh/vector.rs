// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Parikh vectors: per-symbol occurrence counts.
//!
//! Components are signed because the difference closure produces vectors
//! with negative entries. Vectors derived from words, and every level of a
//! [`Family`](super::Family), are non-negative.
//!
//! # Examples
//!
//! ```
//! use parikh_search::parikh::ParikhVector;
//!
//! let v = ParikhVector::new(vec![2, 1]);
//! assert_eq!(v.weight(), 3);
//! assert_eq!(format!("{}", v), "(2,1)");
//! assert!(ParikhVector::new(vec![1, 1]).is_dominated_by(&v));
//! ```

use super::Symbol;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed-length tuple of σ occurrence counts.
///
/// Two vectors are equal iff all components match. The ordering is
/// lexicographic, which keeps [`ParikhSet`](super::ParikhSet) iteration
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParikhVector(Box<[i32]>);

impl ParikhVector {
    pub fn new(counts: Vec<i32>) -> Self {
        Self(counts.into_boxed_slice())
    }

    /// The all-zero vector of dimension `dimension`.
    pub fn zero(dimension: usize) -> Self {
        Self::new(vec![0; dimension])
    }

    /// The standard basis vector for `symbol`.
    pub fn unit(dimension: usize, symbol: Symbol) -> Self {
        let mut counts = vec![0; dimension];
        counts[symbol.as_usize()] = 1;
        Self::new(counts)
    }

    pub fn counts(&self) -> &[i32] {
        &self.0
    }

    /// Number of components (σ).
    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    /// Sum of all components, i.e. the window length for a word-derived vector.
    pub fn weight(&self) -> i64 {
        self.0.iter().map(|&c| c as i64).sum()
    }

    pub fn is_non_negative(&self) -> bool {
        self.0.iter().all(|&c| c >= 0)
    }

    /// Componentwise `self <= other`.
    pub fn is_dominated_by(&self, other: &ParikhVector) -> bool {
        debug_assert_eq!(self.dimension(), other.dimension());
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a <= b)
    }

    /// Componentwise sum.
    pub fn add(&self, other: &ParikhVector) -> ParikhVector {
        debug_assert_eq!(self.dimension(), other.dimension());
        Self(self.0.iter().zip(other.0.iter()).map(|(a, b)| a + b).collect())
    }

    /// Componentwise difference; entries may go negative.
    pub fn sub(&self, other: &ParikhVector) -> ParikhVector {
        debug_assert_eq!(self.dimension(), other.dimension());
        Self(self.0.iter().zip(other.0.iter()).map(|(a, b)| a - b).collect())
    }
}

impl From<Vec<i32>> for ParikhVector {
    fn from(counts: Vec<i32>) -> Self {
        Self::new(counts)
    }
}

impl<const N: usize> From<[i32; N]> for ParikhVector {
    fn from(counts: [i32; N]) -> Self {
        Self(Box::new(counts))
    }
}

impl fmt::Display for ParikhVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, count) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", count)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_and_zero() {
        assert_eq!(ParikhVector::zero(3), ParikhVector::from([0, 0, 0]));
        assert_eq!(
            ParikhVector::unit(3, Symbol::new(1)),
            ParikhVector::from([0, 1, 0])
        );
    }

    #[test]
    fn test_add_sub() {
        let a = ParikhVector::from([2, 1]);
        let b = ParikhVector::from([1, 1]);
        assert_eq!(a.add(&b), ParikhVector::from([3, 2]));
        assert_eq!(a.sub(&b), ParikhVector::from([1, 0]));
        let negative = b.sub(&a);
        assert_eq!(negative, ParikhVector::from([-1, 0]));
        assert!(!negative.is_non_negative());
    }

    #[test]
    fn test_domination() {
        let small = ParikhVector::from([1, 0, 1]);
        let big = ParikhVector::from([2, 0, 1]);
        assert!(small.is_dominated_by(&big));
        assert!(!big.is_dominated_by(&small));
        assert!(small.is_dominated_by(&small));
        assert!(!ParikhVector::from([0, 1, 0]).is_dominated_by(&big));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ParikhVector::from([3, 1, 1])), "(3,1,1)");
        assert_eq!(format!("{}", ParikhVector::from([-1, 2])), "(-1,2)");
    }

    #[test]
    fn test_serializes_as_sequence() {
        let json = serde_json::to_string(&ParikhVector::from([2, 0, 1])).unwrap();
        assert_eq!(json, "[2,0,1]");
    }
}
