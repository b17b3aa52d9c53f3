// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for monotonic families of Parikh sets that no word realizes.
//!
//! For a word w over an alphabet of σ symbols, Π_k(w) is the set of Parikh
//! vectors (symbol counts) of its length-k windows. A family
//! {Π_1, ..., Π_n} is monotonic when each level passes a sum-closure and a
//! difference-closure test against the levels below it. This crate
//! enumerates abstract monotonic families and asks, for each, whether some
//! word produces it.
//!
//! # Architecture
//!
//! - [`parikh`]: words, Parikh vectors, Parikh sets and families
//! - [`monotonicity`]: the closure-law checker
//! - [`realize`]: poset-graph connectivity and shortest-word reconstruction
//! - [`enumerator`]: breadth-first generation of monotonic families
//! - [`driver`]: runs the two together and collects counterexamples
//!
//! Candidate levels are generated by a backtracking predicate engine:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Fixed for one parent family: the compositions of the next weight and
//! which of them lie inside every sum closure ([`context::LevelMemo`]).
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! The include/exclude choice for each composition ([`state::DynamicState`]).
//!
//! # Example
//!
//! ```
//! use parikh_search::parikh::{Alphabet, Word};
//! use parikh_search::realize::find_shortest_word;
//!
//! let word = Word::parse("aabac", Alphabet::new(3).unwrap()).unwrap();
//! let family = word.family();
//! assert_eq!(family.depth(), 5);
//! assert!(find_shortest_word(&family).is_realizable());
//! ```

pub mod config;
pub mod context;
pub mod driver;
pub mod engine;
pub mod enumerator;
pub mod error;
pub mod monotonicity;
pub mod parikh;
pub mod predicates;
pub mod realize;
pub mod state;

// Re-export commonly used types
pub use config::ExplorationConfig;
pub use context::SearchContext;
pub use driver::{ExplorationDriver, ExplorationObserver, ExplorationReport, StopReason};
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use enumerator::FamilyEnumerator;
pub use error::{ParikhError, Result};
pub use monotonicity::MonotonicityChecker;
pub use parikh::{Alphabet, Family, ParikhSet, ParikhVector, Word};
pub use realize::{Realization, RealizabilitySearch};
