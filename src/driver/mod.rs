// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exploration driver: enumerate families and try to realize each one.
//!
//! Every family the [`FamilyEnumerator`] yields is handed to a
//! [`RealizabilitySearch`]. A family that provably has no word is a
//! counterexample: monotonic, yet not realizable.
//!
//! Progress is reported through an [`ExplorationObserver`], once per
//! completed depth and once per counterexample.

use crate::config::ExplorationConfig;
use crate::enumerator::FamilyEnumerator;
use crate::error::Result;
use crate::parikh::{Alphabet, Family};
use crate::realize::{Realization, RealizabilitySearch};
use crate::state::statistics::Statistics;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Counts for one depth of the exploration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DepthSummary {
    pub depth: usize,
    pub families: u64,
    pub realizable: u64,
    pub non_realizable: u64,
    /// Families whose reconstruction hit the word-length bound.
    pub undecided: u64,
}

impl DepthSummary {
    fn new(depth: usize) -> Self {
        Self {
            depth,
            ..Default::default()
        }
    }

    fn record(&mut self, realization: &Realization) {
        self.families += 1;
        match realization {
            Realization::Realizable(_) => self.realizable += 1,
            Realization::NonRealizable => self.non_realizable += 1,
            Realization::Undecided { .. } => self.undecided += 1,
        }
    }
}

/// Why an exploration ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The enumerator ran out of families within the depth bound.
    Exhausted,
    FamilyLimit,
    TimeBudget,
    CounterexampleFound,
}

/// Everything an exploration found.
#[derive(Debug, Clone)]
pub struct ExplorationReport {
    /// One entry per depth reached, shallowest first. The last entry may be partial.
    pub depths: Vec<DepthSummary>,
    /// Monotonic families that no word realizes.
    pub counterexamples: Vec<Family>,
    /// Families left undecided by the word-length bound.
    pub undecided: Vec<Family>,
    pub stop_reason: StopReason,
    pub statistics: Statistics,
}

impl ExplorationReport {
    pub fn families_examined(&self) -> u64 {
        self.depths.iter().map(|d| d.families).sum()
    }
}

/// Receives progress notifications from the driver.
pub trait ExplorationObserver {
    fn on_depth_complete(&mut self, _summary: &DepthSummary) {}

    fn on_counterexample(&mut self, _family: &Family) {}
}

/// Ignores every notification.
#[derive(Debug, Default)]
pub struct NullObserver;

impl ExplorationObserver for NullObserver {}

/// Forwards notifications to `tracing`.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl ExplorationObserver for TracingObserver {
    fn on_depth_complete(&mut self, summary: &DepthSummary) {
        info!(
            depth = summary.depth,
            families = summary.families,
            realizable = summary.realizable,
            non_realizable = summary.non_realizable,
            undecided = summary.undecided,
            "depth complete"
        );
    }

    fn on_counterexample(&mut self, family: &Family) {
        warn!(depth = family.depth(), %family, "non-realizable monotonic family");
    }
}

/// Runs the enumerator and the realizability search together.
#[derive(Debug, Clone)]
pub struct ExplorationDriver {
    config: ExplorationConfig,
    alphabet: Alphabet,
}

impl ExplorationDriver {
    pub fn new(config: ExplorationConfig) -> Result<Self> {
        config.validate()?;
        let alphabet = config.alphabet()?;
        Ok(Self { config, alphabet })
    }

    pub fn config(&self) -> &ExplorationConfig {
        &self.config
    }

    /// Explore until the enumerator is exhausted or a configured limit is hit.
    ///
    /// Without `max_depth`, `max_families` or `time_budget_secs` this does
    /// not return.
    pub fn run(&self, observer: &mut dyn ExplorationObserver) -> ExplorationReport {
        let start = Instant::now();
        let budget = self.config.time_budget();
        let mut enumerator =
            FamilyEnumerator::new(self.alphabet, self.config.enumerator_options());
        let mut depths = Vec::new();
        let mut current: Option<DepthSummary> = None;
        let mut counterexamples = Vec::new();
        let mut undecided = Vec::new();
        let mut examined = 0u64;

        info!(alphabet_size = self.alphabet.size(), max_depth = ?self.config.max_depth, "exploration started");

        let stop_reason = loop {
            if self.config.max_families.is_some_and(|limit| examined >= limit) {
                break StopReason::FamilyLimit;
            }
            if budget.is_some_and(|budget| start.elapsed() >= budget) {
                break StopReason::TimeBudget;
            }
            let Some(family) = enumerator.next() else {
                break StopReason::Exhausted;
            };
            examined += 1;

            let depth = family.depth();
            if current.is_some_and(|summary| summary.depth != depth) {
                if let Some(done) = current.take() {
                    observer.on_depth_complete(&done);
                    depths.push(done);
                }
            }
            let summary = current.get_or_insert_with(|| DepthSummary::new(depth));

            let search = match self.config.word_length_limit(depth) {
                Some(limit) => RealizabilitySearch::with_max_word_length(limit),
                None => RealizabilitySearch::new(),
            };
            let outcome = search.run(&family);
            summary.record(&outcome.realization);
            debug!(%family, realization = ?outcome.realization, words = outcome.words_examined, "family examined");

            match outcome.realization {
                Realization::Realizable(_) => {}
                Realization::NonRealizable => {
                    observer.on_counterexample(&family);
                    counterexamples.push(family);
                    if self.config.stop_on_counterexample {
                        break StopReason::CounterexampleFound;
                    }
                }
                Realization::Undecided { .. } => undecided.push(family),
            }
        };

        if let Some(last) = current {
            observer.on_depth_complete(&last);
            depths.push(last);
        }

        info!(
            ?stop_reason,
            families = examined,
            counterexamples = counterexamples.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "exploration finished"
        );

        ExplorationReport {
            depths,
            counterexamples,
            undecided,
            stop_reason,
            statistics: enumerator.statistics().clone(),
        }
    }
}
