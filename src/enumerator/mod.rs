// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Breadth-first enumeration of monotonic families.
//!
//! The enumerator keeps an explicit worklist of families still to be
//! extended. Each extension runs one [`SearchEngine`] over the parent:
//!
//! ```text
//! CandidateLevel, Counting(MonotonicFamilies), EmitFamily, Fail
//! ```
//!
//! Extending the empty family yields the seeds (every non-empty Π_1), so the
//! seeds come out of the iterator like any other family. Every family of
//! depth n is yielded before any family of depth n + 1.
//!
//! Without a depth bound the iterator never ends; the consumer decides when
//! to stop.
//!
//! # Examples
//!
//! ```
//! use parikh_search::enumerator::{EnumeratorOptions, FamilyEnumerator};
//! use parikh_search::parikh::Alphabet;
//!
//! let options = EnumeratorOptions { max_depth: Some(2), ..Default::default() };
//! let families: Vec<_> = FamilyEnumerator::new(Alphabet::new(2).unwrap(), options).collect();
//! assert_eq!(families.len(), 3 + 7);
//! ```

use crate::context::SearchContext;
use crate::engine::{EngineBuilder, SearchEngine};
use crate::monotonicity::{DifferencePass, MonotonicityChecker};
use crate::parikh::{Alphabet, Family};
use crate::predicates::{CandidateLevelPredicate, EmitFamilyPredicate, FailPredicate};
use crate::state::statistics::{Counters, Statistics};
use std::collections::VecDeque;
use tracing::{debug, info, warn};

/// Bounds and checker settings for a [`FamilyEnumerator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnumeratorOptions {
    /// Deepest level to produce; `None` runs without end.
    pub max_depth: Option<usize>,
    pub difference_pass: DifferencePass,
}

/// Lazily yields every monotonic family over an alphabet, shallowest first.
#[derive(Debug)]
pub struct FamilyEnumerator {
    options: EnumeratorOptions,
    /// Families waiting to be extended.
    worklist: VecDeque<Family>,
    /// Extensions found but not yet yielded.
    ready: VecDeque<Family>,
    ctx: SearchContext,
    current_depth: usize,
}

impl FamilyEnumerator {
    pub fn new(alphabet: Alphabet, options: EnumeratorOptions) -> Self {
        let checker = MonotonicityChecker::new(options.difference_pass);
        let worklist = if options.max_depth == Some(0) {
            VecDeque::new()
        } else {
            VecDeque::from([Family::new(alphabet)])
        };
        Self {
            options,
            worklist,
            ready: VecDeque::new(),
            ctx: SearchContext::new(alphabet, checker),
            current_depth: 0,
        }
    }

    /// Every valid Π_1 over `alphabet`, as depth-1 families.
    pub fn seeds(alphabet: Alphabet) -> Vec<Family> {
        let options = EnumeratorOptions {
            max_depth: Some(1),
            ..Default::default()
        };
        FamilyEnumerator::new(alphabet, options).collect()
    }

    /// Depth of the family most recently yielded.
    pub fn current_depth(&self) -> usize {
        self.current_depth
    }

    /// Number of families waiting to be extended.
    pub fn pending(&self) -> usize {
        self.worklist.len()
    }

    pub fn statistics(&self) -> &Statistics {
        &self.ctx.statistics
    }

    fn engine() -> SearchEngine {
        EngineBuilder::new()
            .add(Box::new(CandidateLevelPredicate))
            .add(Statistics::counting_predicate(Counters::MonotonicFamilies, None))
            .add(Box::new(EmitFamilyPredicate))
            .terminal(Box::new(FailPredicate))
            .build()
    }

    fn extend(&mut self, parent: &Family) {
        self.ctx.prepare(parent);
        debug!(
            depth = parent.depth(),
            compositions = self.ctx.memo.compositions.len(),
            admissible = self.ctx.memo.admissible_count(),
            "extending family"
        );
        let suspended = Self::engine().search(&mut self.ctx).is_some();
        debug_assert!(!suspended, "candidate search must run to exhaustion");
        if suspended {
            warn!(depth = parent.depth(), "candidate search suspended, remaining candidates lost");
        }
        self.ready.extend(self.ctx.take_accepted());
    }

    fn within_depth(&self, depth: usize) -> bool {
        self.options.max_depth.map_or(true, |max| depth < max)
    }
}

impl Iterator for FamilyEnumerator {
    type Item = Family;

    fn next(&mut self) -> Option<Family> {
        loop {
            if let Some(family) = self.ready.pop_front() {
                let depth = family.depth();
                if depth > self.current_depth {
                    info!(depth, "enumerating depth");
                    self.current_depth = depth;
                }
                if self.within_depth(depth) {
                    self.worklist.push_back(family.clone());
                }
                return Some(family);
            }
            let parent = self.worklist.pop_front()?;
            self.extend(&parent);
        }
    }
}
