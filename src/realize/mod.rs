// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Realizability: find the shortest word whose family equals a given one.
//!
//! The search runs in two phases:
//!
//! 1. **Connectivity.** The poset graph of the family (see [`PosetGraph`])
//!    must be connected. A disconnected graph proves that no word exists,
//!    and the word search is never started. Families of depth below 2 have
//!    no edges and skip this phase.
//! 2. **Breadth-first reconstruction.** Starting from the empty word, each
//!    dequeued word is compared level by level against the family. Branches
//!    that can no longer match are dropped, the others are extended by every
//!    symbol. Breadth-first order makes the first exact match a shortest one.
//!
//! Both phases report failure the same way: [`Realization::NonRealizable`].
//!
//! # Examples
//!
//! ```
//! use parikh_search::parikh::{Alphabet, Word};
//! use parikh_search::realize::find_shortest_word;
//!
//! let word = Word::parse("aaba", Alphabet::new(2).unwrap()).unwrap();
//! let found = find_shortest_word(&word.family());
//! let shortest = found.word().unwrap();
//! assert_eq!(shortest.family(), word.family());
//! assert!(shortest.len() <= word.len());
//! ```

pub mod poset;

pub use poset::PosetGraph;

use crate::parikh::{Family, ParikhSet, Word};
use std::cmp::Ordering;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Outcome of a realizability search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Realization {
    /// A shortest word whose family equals the target.
    Realizable(Word),

    /// No word has this family.
    NonRealizable,

    /// The word-length bound was reached before the search space ran out.
    Undecided { max_word_length: usize },
}

impl Realization {
    pub fn is_realizable(&self) -> bool {
        matches!(self, Realization::Realizable(_))
    }

    pub fn is_non_realizable(&self) -> bool {
        matches!(self, Realization::NonRealizable)
    }

    pub fn word(&self) -> Option<&Word> {
        match self {
            Realization::Realizable(word) => Some(word),
            _ => None,
        }
    }
}

/// A realization together with how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub realization: Realization,
    /// Set when the connectivity check alone decided the result.
    pub rejected_by_connectivity: bool,
    /// Number of words taken off the frontier.
    pub words_examined: u64,
}

/// How a partial word compares with the target family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Viability {
    /// Some level can never be matched by any extension.
    Dead,
    /// Every computed level is a subset of the target; `exact` if all equal.
    Viable { exact: bool },
}

/// Realizability search with an optional bound on word length.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealizabilitySearch {
    max_word_length: Option<usize>,
}

impl RealizabilitySearch {
    /// An unbounded search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop extending words once they reach `limit` symbols.
    pub fn with_max_word_length(limit: usize) -> Self {
        Self {
            max_word_length: Some(limit),
        }
    }

    pub fn max_word_length(&self) -> Option<usize> {
        self.max_word_length
    }

    /// Phase 1 alone: true if the family passes the connectivity check.
    pub fn passes_connectivity(family: &Family) -> bool {
        family.depth() < 2 || PosetGraph::from_family(family).is_connected()
    }

    /// Find a shortest realizing word for `family`.
    pub fn find_shortest_word(&self, family: &Family) -> Realization {
        self.run(family).realization
    }

    /// Run both phases and report how the result was reached.
    pub fn run(&self, family: &Family) -> SearchOutcome {
        if !Self::passes_connectivity(family) {
            debug!(depth = family.depth(), "poset graph is disconnected");
            return SearchOutcome {
                realization: Realization::NonRealizable,
                rejected_by_connectivity: true,
                words_examined: 0,
            };
        }

        let alphabet = family.alphabet();
        let depth = family.depth();
        let mut frontier = VecDeque::from([Word::empty(alphabet)]);
        let mut words_examined = 0u64;
        let mut truncated = false;

        while let Some(word) = frontier.pop_front() {
            words_examined += 1;
            match viability(&word, family) {
                Viability::Dead => continue,
                Viability::Viable { exact } if exact && word.len() >= depth => {
                    debug!(%word, words_examined, "found shortest word");
                    return SearchOutcome {
                        realization: Realization::Realizable(word),
                        rejected_by_connectivity: false,
                        words_examined,
                    };
                }
                Viability::Viable { .. } => {}
            }
            if self.max_word_length.is_some_and(|limit| word.len() >= limit) {
                truncated = true;
                continue;
            }
            for symbol in alphabet.symbols() {
                frontier.push_back(word.extended(symbol));
            }
        }

        let realization = match self.max_word_length {
            Some(max_word_length) if truncated => Realization::Undecided { max_word_length },
            _ => Realization::NonRealizable,
        };
        debug!(words_examined, ?realization, "frontier exhausted");
        SearchOutcome {
            realization,
            rejected_by_connectivity: false,
            words_examined,
        }
    }
}

/// Compare Π_k(word) with the target for every k up to min(len(word), depth).
fn viability(word: &Word, family: &Family) -> Viability {
    let sigma = family.alphabet().size();
    let mut exact = true;
    for (k, target) in family.levels().take(word.len()) {
        let computed = ParikhSet::sliding_window(word.symbols(), k, sigma);
        match computed.len().cmp(&target.len()) {
            // Extending a word never removes a window vector.
            Ordering::Greater => return Viability::Dead,
            Ordering::Less => {
                if !computed.is_subset(target) {
                    return Viability::Dead;
                }
                exact = false;
            }
            Ordering::Equal => {
                if !computed.is_subset(target) {
                    return Viability::Dead;
                }
            }
        }
    }
    trace!(%word, exact, "viable");
    Viability::Viable { exact }
}

/// [`RealizabilitySearch::find_shortest_word`] without a length bound.
pub fn find_shortest_word(family: &Family) -> Realization {
    RealizabilitySearch::new().find_shortest_word(family)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parikh::{Alphabet, ParikhVector};

    fn set<const N: usize>(vectors: &[[i32; N]]) -> ParikhSet {
        vectors.iter().map(|v| ParikhVector::from(*v)).collect()
    }

    fn binary() -> Alphabet {
        Alphabet::new(2).unwrap()
    }

    #[test]
    fn test_reconstructs_aaba() {
        let family = Word::parse("aaba", binary()).unwrap().family();
        let word = find_shortest_word(&family);
        let word = word.word().unwrap();
        assert_eq!(word.len(), 4);
        assert_eq!(word.family(), family);
    }

    #[test]
    fn test_disconnected_family_skips_word_search() {
        let family = Family::from_levels(
            binary(),
            vec![set(&[[1, 0], [0, 1]]), set(&[[2, 0], [0, 2]])],
        )
        .unwrap();
        let outcome = RealizabilitySearch::new().run(&family);
        assert_eq!(outcome.realization, Realization::NonRealizable);
        assert!(outcome.rejected_by_connectivity);
        assert_eq!(outcome.words_examined, 0);
    }

    #[test]
    fn test_single_level_family() {
        // Π1 = {a, b} is realized by "ab"; no connectivity check applies.
        let family = Family::from_levels(binary(), vec![set(&[[1, 0], [0, 1]])]).unwrap();
        let found = find_shortest_word(&family);
        assert_eq!(found.word().map(|w| w.len()), Some(2));
    }

    #[test]
    fn test_empty_family_is_realized_by_empty_word() {
        let family = Family::new(binary());
        assert_eq!(
            find_shortest_word(&family),
            Realization::Realizable(Word::empty(binary()))
        );
    }

    #[test]
    fn test_word_length_bound_reports_undecided() {
        // "ab" is the shortest realization, so a bound of 1 cuts it off.
        let family = Family::from_levels(binary(), vec![set(&[[1, 0], [0, 1]])]).unwrap();
        assert_eq!(
            RealizabilitySearch::with_max_word_length(1).find_shortest_word(&family),
            Realization::Undecided { max_word_length: 1 }
        );
    }

    #[test]
    fn test_viability_rules() {
        let family = Word::parse("aaba", binary()).unwrap().family();
        let check = |text: &str| viability(&Word::parse(text, binary()).unwrap(), &family);
        assert_eq!(check(""), Viability::Viable { exact: true });
        assert_eq!(check("a"), Viability::Viable { exact: false });
        assert_eq!(check("ab"), Viability::Viable { exact: false });
        assert_eq!(check("aab"), Viability::Viable { exact: true });
        // (0,2) is not in Π2.
        assert_eq!(check("abb"), Viability::Dead);
        // Π3 would need {(2,1)}, "aaa" gives {(3,0)}.
        assert_eq!(check("aaa"), Viability::Dead);
    }
}
