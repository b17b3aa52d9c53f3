// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use parikh_search::parikh::{Alphabet, Family, ParikhSet, ParikhVector, Word};

pub fn alphabet(size: usize) -> Alphabet {
    Alphabet::new(size).unwrap()
}

pub fn word(text: &str, size: usize) -> Word {
    Word::parse(text, alphabet(size)).unwrap()
}

pub fn set(vectors: &[&[i32]]) -> ParikhSet {
    vectors.iter().map(|v| ParikhVector::from(v.to_vec())).collect()
}

pub fn family(size: usize, levels: &[&[&[i32]]]) -> Family {
    Family::from_levels(alphabet(size), levels.iter().map(|l| set(l)).collect()).unwrap()
}

/// Π_k by enumerating every window directly.
pub fn brute_force_parikh_set(word: &Word, k: usize) -> ParikhSet {
    let sigma = word.alphabet().size();
    word.symbols()
        .windows(k)
        .map(|window| {
            let mut counts = vec![0; sigma];
            for symbol in window {
                counts[symbol.as_usize()] += 1;
            }
            ParikhVector::from(counts)
        })
        .collect()
}

/// Six levels over six symbols, monotonic up to level 4, realized by no word.
pub fn spider() -> Family {
    family(
        6,
        &[
            &[
                &[1, 0, 0, 0, 0, 0],
                &[0, 1, 0, 0, 0, 0],
                &[0, 0, 1, 0, 0, 0],
                &[0, 0, 0, 1, 0, 0],
                &[0, 0, 0, 0, 1, 0],
                &[0, 0, 0, 0, 0, 1],
            ],
            &[
                &[1, 1, 0, 0, 0, 0],
                &[1, 0, 1, 0, 0, 0],
                &[1, 0, 0, 0, 1, 0],
                &[0, 0, 1, 1, 0, 0],
                &[0, 0, 0, 0, 1, 1],
                &[0, 0, 1, 0, 1, 0],
            ],
            &[
                &[1, 1, 1, 0, 0, 0],
                &[1, 1, 0, 0, 1, 0],
                &[1, 0, 1, 1, 0, 0],
                &[0, 0, 1, 1, 1, 0],
                &[1, 0, 0, 0, 1, 1],
                &[0, 0, 1, 0, 1, 1],
                &[1, 0, 1, 0, 1, 0],
            ],
            &[
                &[1, 1, 1, 1, 0, 0],
                &[1, 1, 0, 0, 1, 1],
                &[1, 1, 1, 0, 1, 0],
                &[1, 0, 1, 1, 1, 0],
                &[1, 0, 1, 0, 1, 1],
                &[0, 0, 1, 1, 1, 1],
            ],
            &[&[1, 1, 1, 1, 1, 0], &[1, 1, 1, 0, 1, 1], &[1, 0, 1, 1, 1, 1]],
            &[&[1, 1, 1, 1, 1, 1]],
        ],
    )
}

/// Π1 = {a, b}, Π2 = {aa, bb}: monotonic but its poset graph is disconnected.
pub fn disconnected_pair() -> Family {
    family(2, &[&[&[1, 0], &[0, 1]], &[&[2, 0], &[0, 2]]])
}

/// Monotonic, connected, and with a viable frontier at every word length:
/// only a length bound ends its word search.
pub fn unbounded_frontier() -> Family {
    family(
        2,
        &[&[&[1, 0], &[0, 1]], &[&[1, 1], &[2, 0]], &[&[1, 2], &[3, 0]]],
    )
}
