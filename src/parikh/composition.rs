// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Weak compositions: every Parikh vector of a given weight.
//!
//! The weak compositions of n into σ parts are exactly the Parikh vectors of
//! the length-n words over σ symbols. There are C(n + σ − 1, σ − 1) of them
//! (stars and bars).
//!
//! # Examples
//!
//! ```
//! use parikh_search::parikh::WeakCompositions;
//!
//! let all: Vec<String> = WeakCompositions::new(2, 2).map(|v| v.to_string()).collect();
//! assert_eq!(all, vec!["(2,0)", "(1,1)", "(0,2)"]);
//! ```

use super::ParikhVector;

/// Iterator over the weak compositions of `total` into `parts` parts,
/// in descending lexicographic order.
#[derive(Debug, Clone)]
pub struct WeakCompositions {
    current: Option<Vec<i32>>,
}

impl WeakCompositions {
    /// # Panics
    ///
    /// Panics if `parts == 0`.
    pub fn new(total: usize, parts: usize) -> Self {
        assert!(parts > 0, "Weak compositions need at least one part");
        let mut first = vec![0; parts];
        first[0] = total as i32;
        Self {
            current: Some(first),
        }
    }

    /// Advance `counts` to its successor, or return false after the last one.
    ///
    /// The last part's content moves, plus one, to the right of the rightmost
    /// other non-zero part, which gives up one unit.
    fn advance(counts: &mut [i32]) -> bool {
        let last = counts.len() - 1;
        let tail = counts[last];
        counts[last] = 0;
        match (0..last).rev().find(|&i| counts[i] > 0) {
            Some(i) => {
                counts[i] -= 1;
                counts[i + 1] = tail + 1;
                true
            }
            None => false,
        }
    }
}

impl Iterator for WeakCompositions {
    type Item = ParikhVector;

    fn next(&mut self) -> Option<ParikhVector> {
        let counts = self.current.as_mut()?;
        let item = ParikhVector::new(counts.clone());
        if !Self::advance(counts) {
            self.current = None;
        }
        Some(item)
    }
}

/// C(total + parts − 1, parts − 1), the number of weak compositions.
///
/// # Panics
///
/// Panics if `parts == 0`.
pub fn composition_count(total: usize, parts: usize) -> usize {
    assert!(parts > 0, "Weak compositions need at least one part");
    let (n, k) = (total + parts - 1, parts - 1);
    let k = k.min(n - k);
    (0..k).fold(1usize, |acc, i| acc * (n - i) / (i + 1))
}
