// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context for enumerating the next level of one parent family.
//!
//! The SearchContext combines:
//! - Tier 1 (MEMO): data fixed for one parent, computed by [`SearchContext::prepare`]
//! - Tier 2 (DYNAMIC): the include/exclude choices of the running search
//!
//! Statistics and accepted families accumulate across parents until taken.

use crate::monotonicity::MonotonicityChecker;
use crate::parikh::{Alphabet, Family, ParikhSet, ParikhVector, WeakCompositions};
use crate::state::statistics::Statistics;
use crate::state::DynamicState;

/// Precomputed data for extending one parent family (Tier 1: MEMO).
#[derive(Debug, Clone)]
pub struct LevelMemo {
    /// The family being extended.
    pub parent: Family,

    /// Index of the level being added: `parent.depth() + 1`.
    pub level: usize,

    /// Every Parikh vector of weight `level`.
    pub compositions: Vec<ParikhVector>,

    /// `admissible[r]` is false if composition r lies outside some
    /// Π_i + Π_{level−i}; no monotonic candidate can contain it.
    pub admissible: Vec<bool>,
}

impl LevelMemo {
    pub fn new(parent: &Family) -> Self {
        let level = parent.depth() + 1;
        let compositions: Vec<ParikhVector> =
            WeakCompositions::new(level, parent.alphabet().size()).collect();

        let sum_closures: Vec<ParikhSet> = (1..=level / 2)
            .filter_map(|i| Some(parent.level(i)?.sum_closure(parent.level(level - i)?)))
            .collect();
        let admissible = compositions
            .iter()
            .map(|c| sum_closures.iter().all(|sums| sums.contains(c)))
            .collect();

        Self {
            parent: parent.clone(),
            level,
            compositions,
            admissible,
        }
    }

    pub fn admissible_count(&self) -> usize {
        self.admissible.iter().filter(|&&a| a).count()
    }
}

/// Search context combining MEMO and DYNAMIC state.
#[derive(Debug)]
pub struct SearchContext {
    /// Data fixed for the current parent (Tier 1)
    pub memo: LevelMemo,
    /// Mutable search state (Tier 2)
    pub state: DynamicState,
    /// Counters accumulated over every parent prepared so far
    pub statistics: Statistics,
    /// Closure-law checker applied to each complete candidate
    pub checker: MonotonicityChecker,
    accepted: Vec<Family>,
}

impl SearchContext {
    /// A context whose parent is the empty family over `alphabet`.
    pub fn new(alphabet: Alphabet, checker: MonotonicityChecker) -> Self {
        let memo = LevelMemo::new(&Family::new(alphabet));
        let state = DynamicState::new(memo.compositions.len());
        Self {
            memo,
            state,
            statistics: Statistics::new(),
            checker,
            accepted: Vec::new(),
        }
    }

    /// Load `parent` as the family to extend.
    pub fn prepare(&mut self, parent: &Family) {
        self.memo = LevelMemo::new(parent);
        self.state = DynamicState::new(self.memo.compositions.len());
    }

    /// Record an extended family found by the search.
    pub fn accept(&mut self, family: Family) {
        self.accepted.push(family);
    }

    /// Remove and return every family accepted so far.
    pub fn take_accepted(&mut self) -> Vec<Family> {
        std::mem::take(&mut self.accepted)
    }

    /// The candidate Π_level described by the current selection.
    pub fn selected_set(&self) -> ParikhSet {
        self.memo
            .compositions
            .iter()
            .zip(&self.state.selection)
            .filter(|(_, &chosen)| chosen)
            .map(|(c, _)| c.clone())
            .collect()
    }
}
