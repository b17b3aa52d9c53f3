// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for invalid arguments.
//!
//! Everything here indicates a programming error in the caller. A family
//! that no word realizes is not an error: see [`crate::realize::Realization`].

use thiserror::Error;

/// Errors raised for malformed inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParikhError {
    /// Window length outside `1..=len(word)`.
    #[error("window length {k} is outside 1..={len}")]
    WindowOutOfRange { k: usize, len: usize },

    /// Alphabet size outside `1..=max`.
    #[error("alphabet size must be between 1 and {max}, got {size}")]
    InvalidAlphabetSize { size: usize, max: usize },

    #[error("symbol {symbol} is outside an alphabet of size {alphabet_size}")]
    SymbolOutOfRange { symbol: usize, alphabet_size: usize },

    #[error("letter '{letter}' is not in an alphabet of size {alphabet_size}")]
    InvalidLetter { letter: char, alphabet_size: usize },

    /// A Parikh vector whose length differs from the alphabet size.
    #[error("vector {vector} has dimension {found}, expected {expected}")]
    DimensionMismatch {
        vector: String,
        expected: usize,
        found: usize,
    },

    /// A level-k vector whose components do not sum to k.
    #[error("level {level} contains {vector}, whose weight is not {level}")]
    LevelWeightMismatch { level: usize, vector: String },

    #[error("level {level} is empty")]
    EmptyLevel { level: usize },

    /// A level was requested beyond the depth of the family.
    #[error("level {level} is not present in a family of depth {depth}")]
    MissingLevel { level: usize, depth: usize },

    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ParikhError>;
