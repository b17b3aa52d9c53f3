// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Monotonicity: the closure laws every word-derived family satisfies.
//!
//! For a family {Π_1, ..., Π_n} and a level k, two passes are run:
//!
//! 1. For every i in 1..=⌊k/2⌋ with j = k − i: Π_k ⊆ Π_i + Π_j.
//! 2. For every j from k down to 1 and i from j − 1 down to 1:
//!    Π_{j−i} ⊆ Π_j − Π_i.
//!
//! Pass 2 covers every j ≤ k, so lower levels are re-validated on each call.
//! [`DifferencePass::TopLevelOnly`] restricts it to j = k. When levels are
//! added one at a time and each is checked as it is added, both modes accept
//! the same families.
//!
//! # Examples
//!
//! ```
//! use parikh_search::monotonicity::is_monotonic;
//! use parikh_search::parikh::{Alphabet, Word};
//!
//! let family = Word::parse("aaba", Alphabet::new(2).unwrap()).unwrap().family();
//! for k in 1..=3 {
//!     assert!(is_monotonic(&family, k).unwrap());
//! }
//! // Π_1 ⊄ Π_4 − Π_3: the interior b is not at either end of a length-3 window.
//! assert!(!is_monotonic(&family, 4).unwrap());
//! ```
//!
//! The sum law holds for every word. The difference law, as checked here,
//! can fail near the ends of a word, so a word-derived family is not
//! monotonic at every level.

pub mod violation;

pub use violation::MonotonicityViolation;

use crate::error::Result;
use crate::parikh::Family;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Which levels the difference-closure pass re-checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifferencePass {
    /// Every j in 1..=k.
    #[default]
    AllLevels,
    /// Only j = k.
    TopLevelOnly,
}

/// Checks the closure laws for one level of a family.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicityChecker {
    difference_pass: DifferencePass,
}

impl MonotonicityChecker {
    pub fn new(difference_pass: DifferencePass) -> Self {
        Self { difference_pass }
    }

    pub fn difference_pass(&self) -> DifferencePass {
        self.difference_pass
    }

    /// The first violated law at level `k`, or `None` if both passes hold.
    ///
    /// Fails with [`crate::ParikhError::MissingLevel`] if `k` is 0 or
    /// exceeds the depth of `family`.
    pub fn check(&self, family: &Family, k: usize) -> Result<Option<MonotonicityViolation>> {
        let pi_k = family.require_level(k)?;

        for i in 1..=k / 2 {
            let j = k - i;
            let sums = family.require_level(i)?.sum_closure(family.require_level(j)?);
            if !pi_k.is_subset(&sums) {
                trace!(k, i, j, "sum closure fails");
                return Ok(Some(MonotonicityViolation::SumClosure { i, j }));
            }
        }

        let lowest_j = match self.difference_pass {
            DifferencePass::AllLevels => 1,
            DifferencePass::TopLevelOnly => k,
        };
        for j in (lowest_j..=k).rev() {
            let pi_j = family.require_level(j)?;
            for i in (1..j).rev() {
                let target = family.require_level(j - i)?;
                // Levels are non-negative, so negative differences never match.
                debug_assert!(target.is_non_negative());
                let diffs = pi_j.diff_closure(family.require_level(i)?);
                if !target.is_subset(&diffs) {
                    trace!(k, j, i, "difference closure fails");
                    return Ok(Some(MonotonicityViolation::DifferenceClosure { j, i }));
                }
            }
        }
        Ok(None)
    }

    /// True iff both closure passes hold at level `k`.
    pub fn is_monotonic(&self, family: &Family, k: usize) -> Result<bool> {
        Ok(self.check(family, k)?.is_none())
    }
}

/// [`MonotonicityChecker::is_monotonic`] with the default (all levels) pass.
pub fn is_monotonic(family: &Family, k: usize) -> Result<bool> {
    MonotonicityChecker::default().is_monotonic(family, k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParikhError;
    use crate::parikh::{Alphabet, ParikhSet, ParikhVector, Word};

    fn set<const N: usize>(vectors: &[[i32; N]]) -> ParikhSet {
        vectors.iter().map(|v| ParikhVector::from(*v)).collect()
    }

    fn binary() -> Alphabet {
        Alphabet::new(2).unwrap()
    }

    #[test]
    fn test_word_family_through_level_three() {
        let family = Word::parse("aaba", binary()).unwrap().family();
        for k in 1..=3 {
            assert!(is_monotonic(&family, k).unwrap(), "k = {}", k);
        }
    }

    #[test]
    fn test_word_family_fails_difference_law_at_full_length() {
        let family = Word::parse("aaba", binary()).unwrap().family();
        assert_eq!(
            MonotonicityChecker::default().check(&family, 4).unwrap(),
            Some(MonotonicityViolation::DifferenceClosure { j: 4, i: 3 })
        );
    }

    #[test]
    fn test_level_one_is_vacuous() {
        let family = Family::from_levels(binary(), vec![set(&[[1, 0]])]).unwrap();
        assert!(is_monotonic(&family, 1).unwrap());
    }

    #[test]
    fn test_sum_closure_violation() {
        // (1,1) cannot be written as a sum of two level-1 vectors from {(1,0)}.
        let family =
            Family::from_levels(binary(), vec![set(&[[1, 0]]), set(&[[1, 1]])]).unwrap();
        assert_eq!(
            MonotonicityChecker::default().check(&family, 2).unwrap(),
            Some(MonotonicityViolation::SumClosure { i: 1, j: 1 })
        );
    }

    #[test]
    fn test_difference_closure_violation() {
        // (0,1) is not a difference of (2,0) and a level-1 vector.
        let family = Family::from_levels(
            binary(),
            vec![set(&[[1, 0], [0, 1]]), set(&[[2, 0]])],
        )
        .unwrap();
        assert_eq!(
            MonotonicityChecker::default().check(&family, 2).unwrap(),
            Some(MonotonicityViolation::DifferenceClosure { j: 2, i: 1 })
        );
    }

    #[test]
    fn test_disconnected_family_is_still_monotonic() {
        let family = Family::from_levels(
            binary(),
            vec![set(&[[1, 0], [0, 1]]), set(&[[2, 0], [0, 2]])],
        )
        .unwrap();
        assert!(is_monotonic(&family, 2).unwrap());
    }

    #[test]
    fn test_top_level_only_skips_lower_levels() {
        // Level 2 breaks the difference law, level 3 on its own does not.
        let family = Family::from_levels(
            binary(),
            vec![
                set(&[[1, 0], [0, 1]]),
                set(&[[2, 0]]),
                set(&[[3, 0], [2, 1]]),
            ],
        )
        .unwrap();
        let all = MonotonicityChecker::new(DifferencePass::AllLevels);
        let top = MonotonicityChecker::new(DifferencePass::TopLevelOnly);
        assert_eq!(
            all.check(&family, 3).unwrap(),
            Some(MonotonicityViolation::DifferenceClosure { j: 2, i: 1 })
        );
        assert_eq!(top.check(&family, 3).unwrap(), None);
    }

    #[test]
    fn test_missing_level_is_an_error() {
        let family = Family::from_levels(binary(), vec![set(&[[1, 0]])]).unwrap();
        assert_eq!(
            is_monotonic(&family, 2),
            Err(ParikhError::MissingLevel { level: 2, depth: 1 })
        );
        assert!(is_monotonic(&family, 0).is_err());
    }

    #[test]
    fn test_violation_display() {
        let v = MonotonicityViolation::DifferenceClosure { j: 3, i: 1 };
        assert_eq!(v.to_string(), "Π2 is not contained in Π3 - Π1");
    }
}
