// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Which closure law a family broke.

use std::fmt;
use strum_macros::EnumCount as EnumCountMacro;

/// The first closure law found to fail for a family.
#[derive(Debug, Clone, PartialEq, Eq, EnumCountMacro)]
pub enum MonotonicityViolation {
    /// Π_{i+j} ⊄ Π_i + Π_j.
    SumClosure { i: usize, j: usize },

    /// Π_{j−i} ⊄ Π_j − Π_i.
    DifferenceClosure { j: usize, i: usize },
}

impl MonotonicityViolation {
    /// Dense index of the variant, for per-kind counters.
    pub fn index(&self) -> usize {
        match self {
            MonotonicityViolation::SumClosure { .. } => 0,
            MonotonicityViolation::DifferenceClosure { .. } => 1,
        }
    }
}

impl fmt::Display for MonotonicityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonotonicityViolation::SumClosure { i, j } => {
                write!(f, "Π{} is not contained in Π{} + Π{}", i + j, i, j)
            }
            MonotonicityViolation::DifferenceClosure { j, i } => {
                write!(f, "Π{} is not contained in Π{} - Π{}", j - i, j, i)
            }
        }
    }
}
