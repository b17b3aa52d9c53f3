// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

mod common;

use common::{disconnected_pair, spider, unbounded_frontier, word};
use parikh_search::parikh::{Alphabet, Word};
use parikh_search::realize::{find_shortest_word, PosetGraph, Realization, RealizabilitySearch};
use proptest::prelude::*;

#[test]
fn test_spider_is_not_realizable() {
    let spider = spider();
    assert!(PosetGraph::from_family(&spider).is_connected());
    assert_eq!(find_shortest_word(&spider), Realization::NonRealizable);
}

#[test]
fn test_disconnected_pair_is_rejected_before_word_search() {
    let outcome = RealizabilitySearch::new().run(&disconnected_pair());
    assert_eq!(outcome.realization, Realization::NonRealizable);
    assert!(outcome.rejected_by_connectivity);
    assert_eq!(outcome.words_examined, 0);
}

#[test]
fn test_aabac_reconstructs() {
    let family = word("aabac", 3).family();
    let found = find_shortest_word(&family);
    let w = found.word().unwrap();
    assert_eq!(w.family(), family);
    assert_eq!(w.len(), 5);
}

#[test]
fn test_bound_above_shortest_length_still_finds_word() {
    let family = word("aaba", 2).family();
    let found = RealizabilitySearch::with_max_word_length(4).find_shortest_word(&family);
    assert_eq!(found.word().map(Word::len), Some(4));
}

#[test]
fn test_unbounded_frontier_is_undecided_under_a_bound() {
    let family = unbounded_frontier();
    let search = RealizabilitySearch::with_max_word_length(12);
    let outcome = search.run(&family);
    assert_eq!(outcome.realization, Realization::Undecided { max_word_length: 12 });
    assert!(!outcome.rejected_by_connectivity);
    assert!(outcome.words_examined > 0);
}

fn arb_word() -> impl Strategy<Value = Word> {
    prop_oneof![
        prop::collection::vec(0usize..2, 1..=6)
            .prop_map(|indices| Word::from_indices(Alphabet::new(2).unwrap(), &indices).unwrap()),
        prop::collection::vec(0usize..3, 1..=4)
            .prop_map(|indices| Word::from_indices(Alphabet::new(3).unwrap(), &indices).unwrap()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_reconstruction_is_sound_and_minimal(w in arb_word()) {
        let family = w.family();
        let found = find_shortest_word(&family);
        let shortest = found.word();
        prop_assert!(shortest.is_some(), "{} not realized", w);
        let shortest = shortest.unwrap();
        prop_assert_eq!(shortest.family(), family);
        prop_assert!(shortest.len() <= w.len());
    }
}
