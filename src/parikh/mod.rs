// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Words and their Parikh data.
//!
//! This module contains the value types shared by the checker, the
//! enumerator and the realizability search:
//! - Symbol, Alphabet: symbols 0..σ, printed as letters
//! - Word: immutable symbol sequences
//! - ParikhVector: occurrence counts
//! - ParikhSet: Π_k and its sum/difference closures
//! - Family: {Π_1, ..., Π_n}
//! - WeakCompositions: every vector of a given weight

pub mod composition;
pub mod family;
pub mod set;
pub mod symbol;
pub mod vector;
pub mod word;

pub use composition::{composition_count, WeakCompositions};
pub use family::Family;
pub use set::ParikhSet;
pub use symbol::{Alphabet, Symbol, MAX_ALPHABET_SIZE};
pub use vector::ParikhVector;
pub use word::Word;
