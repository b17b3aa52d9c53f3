// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! The enumerator extends one parent family per search with the sequence
//!
//! ```text
//! CandidateLevel, Counting(MonotonicFamilies), EmitFamily, Fail
//! ```
//!
//! - `candidate`: [`CandidateLevelPredicate`] chooses the new level
//! - `emit`: [`EmitFamilyPredicate`] hands the extended family to the context
//! - Built-in predicates: `FailPredicate`

pub mod candidate;
pub mod emit;

pub use candidate::CandidateLevelPredicate;
pub use emit::EmitFamilyPredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. Ending a sequence
/// with it makes the engine visit every solution before returning `None`.
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn retry_pred(
        &mut self,
        _ctx: &mut SearchContext,
        _round: usize,
        _choice: usize,
    ) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parikh::Alphabet;

    #[test]
    fn test_fail_always_fails() {
        let mut ctx = SearchContext::new(Alphabet::new(1).unwrap(), Default::default());
        assert_eq!(FailPredicate.try_pred(&mut ctx, 0), PredicateResult::Failure);
        assert_eq!(FailPredicate.retry_pred(&mut ctx, 0, 0), PredicateResult::Failure);
    }
}
