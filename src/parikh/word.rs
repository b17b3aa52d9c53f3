// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable words over a fixed alphabet.

use super::{Alphabet, Family, ParikhSet, Symbol};
use crate::error::{ParikhError, Result};
use std::fmt;

/// An ordered, finite, immutable sequence of symbols.
///
/// Extending a word always produces a new word; see [`Word::extended`].
///
/// # Examples
///
/// ```
/// use parikh_search::parikh::{Alphabet, Word};
///
/// let alphabet = Alphabet::new(2).unwrap();
/// let word = Word::parse("aaba", alphabet).unwrap();
/// assert_eq!(word.len(), 4);
/// assert_eq!(format!("{}", word), "aaba");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    alphabet: Alphabet,
    symbols: Vec<Symbol>,
}

impl Word {
    /// The empty word.
    pub fn empty(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            symbols: Vec::new(),
        }
    }

    /// Build a word from symbols, checking each belongs to `alphabet`.
    pub fn from_symbols(alphabet: Alphabet, symbols: Vec<Symbol>) -> Result<Self> {
        if let Some(bad) = symbols.iter().find(|s| !alphabet.contains(**s)) {
            return Err(ParikhError::SymbolOutOfRange {
                symbol: bad.as_usize(),
                alphabet_size: alphabet.size(),
            });
        }
        Ok(Self { alphabet, symbols })
    }

    /// Build a word from symbol indices.
    pub fn from_indices(alphabet: Alphabet, indices: &[usize]) -> Result<Self> {
        let symbols = indices
            .iter()
            .map(|&i| alphabet.symbol(i))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { alphabet, symbols })
    }

    /// Parse a word written with letters `a`, `b`, ...
    pub fn parse(text: &str, alphabet: Alphabet) -> Result<Self> {
        let symbols = text
            .chars()
            .map(|c| alphabet.symbol_for(c))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { alphabet, symbols })
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// A new word with `symbol` appended; `self` is left untouched.
    pub fn extended(&self, symbol: Symbol) -> Word {
        debug_assert!(self.alphabet.contains(symbol));
        let mut symbols = Vec::with_capacity(self.symbols.len() + 1);
        symbols.extend_from_slice(&self.symbols);
        symbols.push(symbol);
        Word {
            alphabet: self.alphabet,
            symbols,
        }
    }

    /// Π_k of this word.
    pub fn parikh_set(&self, k: usize) -> Result<ParikhSet> {
        ParikhSet::compute(self, k)
    }

    /// The full family {Π_1, ..., Π_n} with n = len(self).
    pub fn family(&self) -> Family {
        let levels = (1..=self.len())
            .map(|k| ParikhSet::sliding_window(&self.symbols, k, self.alphabet.size()))
            .collect();
        Family::from_trusted_levels(self.alphabet, levels)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.symbols.is_empty() {
            return write!(f, "ε");
        }
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
