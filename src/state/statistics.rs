// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context, and can be incremented by special predicates,
//! or by additional methods.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::monotonicity::MonotonicityViolation;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Non-empty candidate sets handed to the monotonicity checker.
    CandidatesTried,
    /// Subtrees cut because a composition lies outside a sum closure.
    CandidatesPruned,
    /// Candidates that passed the checker.
    MonotonicFamilies,
}

const COUNT: usize = Counters::COUNT + MonotonicityViolation::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// A predicate that will increment the given counter, whenever a condition holds (or always).
    pub fn counting_predicate(
        counter: Counters,
        filter: Option<fn(&SearchContext) -> bool>,
    ) -> Box<dyn Predicate> {
        Box::new(CountingPredicate {
            filter: filter.unwrap_or(|_ctx| true),
            counter,
        })
    }

    /// Increment the specified counter by 1.
    pub fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Count one rejection of the given kind.
    pub fn record_violation(&mut self, violation: &MonotonicityViolation) {
        self.stats[Counters::COUNT + violation.index()] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Rejections by the sum-closure law.
    pub fn sum_closure_rejections(&self) -> u64 {
        self.stats[Counters::COUNT + MonotonicityViolation::SumClosure { i: 0, j: 0 }.index()]
    }

    /// Rejections by the difference-closure law.
    pub fn difference_closure_rejections(&self) -> u64 {
        self.stats[Counters::COUNT + MonotonicityViolation::DifferenceClosure { j: 0, i: 0 }.index()]
    }

    /// `(name, value)` for every counter, for logging.
    pub fn entries(&self) -> Vec<(&'static str, u64)> {
        let mut entries: Vec<(&'static str, u64)> =
            Counters::iter().map(|c| (c.into(), self.get(c))).collect();
        entries.push(("SumClosureRejections", self.sum_closure_rejections()));
        entries.push(("DifferenceClosureRejections", self.difference_closure_rejections()));
        entries
    }
}

#[derive(Debug)]
struct CountingPredicate {
    filter: fn(&SearchContext) -> bool,
    counter: Counters,
}

impl Predicate for CountingPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if (self.filter)(ctx) {
            ctx.statistics.increment_counter(self.counter);
        }
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Counting"
    }
}
