// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! EmitFamilyPredicate - records the candidate built by the previous step.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};

#[derive(Debug)]
pub struct EmitFamilyPredicate;

impl Predicate for EmitFamilyPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        match ctx.state.candidate.take() {
            Some(family) => {
                ctx.accept(family);
                PredicateResult::Success
            }
            None => PredicateResult::Failure,
        }
    }

    fn name(&self) -> &str {
        "EmitFamily"
    }
}
