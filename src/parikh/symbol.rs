// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symbols and alphabets.
//!
//! A symbol is an integer in `0..σ`. Symbols are written as letters
//! `a`, `b`, `c`, ... so that `"aaba"` is the word `0 0 1 0` over σ = 2.

use crate::error::{ParikhError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest supported alphabet: one letter per symbol.
pub const MAX_ALPHABET_SIZE: usize = 26;

/// A symbol of the alphabet.
///
/// This is a newtype wrapper to prevent mixing symbols with counts
/// and window lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(u8);

impl Symbol {
    /// Create a symbol without checking it against an alphabet.
    ///
    /// # Panics
    ///
    /// Panics if `value >= MAX_ALPHABET_SIZE`.
    pub fn new(value: u8) -> Self {
        assert!(
            (value as usize) < MAX_ALPHABET_SIZE,
            "Symbol out of range: {}",
            value
        );
        Self(value)
    }

    /// Get the underlying value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Get the symbol as a usize (for indexing count vectors).
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// The letter used to print this symbol.
    pub fn to_char(self) -> char {
        (b'a' + self.0) as char
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// An alphabet of fixed size σ, constant for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Alphabet {
    size: usize,
}

impl Alphabet {
    /// Create an alphabet of `size` symbols.
    ///
    /// Fails with [`ParikhError::InvalidAlphabetSize`] unless
    /// `1 <= size <= MAX_ALPHABET_SIZE`.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 || size > MAX_ALPHABET_SIZE {
            return Err(ParikhError::InvalidAlphabetSize {
                size,
                max: MAX_ALPHABET_SIZE,
            });
        }
        Ok(Self { size })
    }

    /// σ, the number of symbols.
    pub fn size(self) -> usize {
        self.size
    }

    /// Look up a symbol by index.
    pub fn symbol(self, index: usize) -> Result<Symbol> {
        if index >= self.size {
            return Err(ParikhError::SymbolOutOfRange {
                symbol: index,
                alphabet_size: self.size,
            });
        }
        Ok(Symbol(index as u8))
    }

    /// Look up a symbol by its letter.
    pub fn symbol_for(self, letter: char) -> Result<Symbol> {
        let invalid = ParikhError::InvalidLetter {
            letter,
            alphabet_size: self.size,
        };
        if !letter.is_ascii_lowercase() {
            return Err(invalid);
        }
        let index = (letter as u8 - b'a') as usize;
        if index >= self.size {
            return Err(invalid);
        }
        Ok(Symbol(index as u8))
    }

    pub fn contains(self, symbol: Symbol) -> bool {
        symbol.as_usize() < self.size
    }

    /// Iterate over all symbols in ascending order.
    pub fn symbols(self) -> impl Iterator<Item = Symbol> {
        (0..self.size as u8).map(Symbol)
    }
}

impl TryFrom<usize> for Alphabet {
    type Error = ParikhError;

    fn try_from(size: usize) -> Result<Self> {
        Alphabet::new(size)
    }
}

impl From<Alphabet> for usize {
    fn from(alphabet: Alphabet) -> usize {
        alphabet.size
    }
}
