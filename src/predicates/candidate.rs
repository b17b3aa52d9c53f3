// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! CandidateLevelPredicate - chooses Π_n for the parent in the context.
//!
//! Round r < m decides whether composition r is in the candidate set, where
//! m is the number of compositions of weight n. Round m assembles the set,
//! appends it to the parent and runs the monotonicity check at level n.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::statistics::Counters;
use tracing::{trace, warn};

const INCLUDE: usize = 0;
const EXCLUDE: usize = 1;

/// Enumerates every non-empty monotonic Π_n extending the parent family.
///
/// Candidates come out in a fixed order: at each composition the branch that
/// includes it is explored before the one that excludes it.
#[derive(Debug)]
pub struct CandidateLevelPredicate;

impl CandidateLevelPredicate {
    fn complete(ctx: &mut SearchContext) -> PredicateResult {
        let level = ctx.selected_set();
        if level.is_empty() {
            return PredicateResult::Failure;
        }
        ctx.statistics.increment_counter(Counters::CandidatesTried);

        let candidate = match ctx.memo.parent.with_level(level) {
            Ok(candidate) => candidate,
            Err(err) => {
                warn!(%err, "candidate level rejected");
                return PredicateResult::Failure;
            }
        };
        match ctx.checker.check(&candidate, ctx.memo.level) {
            Ok(None) => {
                trace!(%candidate, "monotonic");
                ctx.state.candidate = Some(candidate);
                PredicateResult::Success
            }
            Ok(Some(violation)) => {
                trace!(%candidate, %violation, "rejected");
                ctx.statistics.record_violation(&violation);
                PredicateResult::Failure
            }
            Err(err) => {
                warn!(%err, "monotonicity check failed");
                PredicateResult::Failure
            }
        }
    }
}

impl Predicate for CandidateLevelPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        if round < ctx.memo.compositions.len() {
            PredicateResult::Choices(2)
        } else {
            Self::complete(ctx)
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, round: usize, choice: usize) -> PredicateResult {
        match choice {
            INCLUDE => {
                if !ctx.memo.admissible[round] {
                    ctx.statistics.increment_counter(Counters::CandidatesPruned);
                    return PredicateResult::Failure;
                }
                ctx.state.selection[round] = true;
                PredicateResult::SuccessSamePredicate
            }
            EXCLUDE => {
                ctx.state.selection[round] = false;
                PredicateResult::SuccessSamePredicate
            }
            _ => PredicateResult::Failure,
        }
    }

    fn name(&self) -> &str {
        "CandidateLevel"
    }
}
