// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

mod common;

use common::{disconnected_pair, unbounded_frontier};
use parikh_search::driver::{DepthSummary, ExplorationObserver, NullObserver};
use parikh_search::parikh::Family;
use parikh_search::{ExplorationConfig, ExplorationDriver, StopReason};

#[derive(Default)]
struct Recorder {
    depths: Vec<usize>,
    counterexamples: Vec<Family>,
}

impl ExplorationObserver for Recorder {
    fn on_depth_complete(&mut self, summary: &DepthSummary) {
        self.depths.push(summary.depth);
    }

    fn on_counterexample(&mut self, family: &Family) {
        self.counterexamples.push(family.clone());
    }
}

fn config(max_depth: usize) -> ExplorationConfig {
    ExplorationConfig {
        max_depth: Some(max_depth),
        ..Default::default()
    }
}

#[test]
fn test_binary_depth_two_has_one_counterexample() {
    let report = ExplorationDriver::new(config(2)).unwrap().run(&mut NullObserver);
    assert_eq!(report.stop_reason, StopReason::Exhausted);
    assert_eq!(report.counterexamples, vec![disconnected_pair()]);
    assert!(report.undecided.is_empty());
    assert_eq!(
        report.depths[1],
        DepthSummary {
            depth: 2,
            families: 7,
            realizable: 6,
            non_realizable: 1,
            undecided: 0
        }
    );
    assert_eq!(report.families_examined(), 10);
}

#[test]
fn test_stop_on_counterexample() {
    let config = ExplorationConfig {
        stop_on_counterexample: true,
        ..config(4)
    };
    let report = ExplorationDriver::new(config).unwrap().run(&mut NullObserver);
    assert_eq!(report.stop_reason, StopReason::CounterexampleFound);
    assert_eq!(report.counterexamples.len(), 1);
    assert_eq!(report.depths.last().map(|d| d.depth), Some(2));
}

#[test]
fn test_observer_sees_every_depth_and_counterexample() {
    let mut recorder = Recorder::default();
    let report = ExplorationDriver::new(config(2)).unwrap().run(&mut recorder);
    assert_eq!(recorder.depths, vec![1, 2]);
    assert_eq!(recorder.counterexamples, report.counterexamples);
}

#[test]
fn test_unary_alphabet_has_no_counterexamples() {
    let config = ExplorationConfig {
        alphabet_size: 1,
        ..config(5)
    };
    let report = ExplorationDriver::new(config).unwrap().run(&mut NullObserver);
    assert!(report.counterexamples.is_empty());
    assert_eq!(report.depths.len(), 5);
    assert!(report.depths.iter().all(|d| d.realizable == 1));
}

#[test]
fn test_family_limit_is_reported() {
    let config = ExplorationConfig {
        max_families: Some(4),
        ..config(3)
    };
    let report = ExplorationDriver::new(config).unwrap().run(&mut NullObserver);
    assert_eq!(report.stop_reason, StopReason::FamilyLimit);
    assert_eq!(report.families_examined(), 4);
}

#[test]
fn test_bounded_word_search_reports_undecided() {
    let report = ExplorationDriver::new(config(3)).unwrap().run(&mut NullObserver);
    let family = unbounded_frontier();
    assert!(report.undecided.contains(&family));
    assert!(!report.counterexamples.contains(&family));
    assert_eq!(report.stop_reason, StopReason::Exhausted);
    let depth3 = report.depths[2];
    assert_eq!(depth3.families, 28);
    assert_eq!(
        depth3.realizable + depth3.non_realizable + depth3.undecided,
        depth3.families
    );
    assert_eq!(depth3.undecided as usize, report.undecided.len());
}

#[test]
fn test_time_budget_stops_running_exploration() {
    let config = ExplorationConfig {
        time_budget_secs: Some(1),
        ..Default::default()
    };
    let report = ExplorationDriver::new(config).unwrap().run(&mut NullObserver);
    assert_eq!(report.stop_reason, StopReason::TimeBudget);
    assert!(report.families_examined() >= 10);
    assert_eq!(report.depths[0].families, 3);
    assert_eq!(report.depths[1].families, 7);
}
