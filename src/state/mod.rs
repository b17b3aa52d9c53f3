// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state for one candidate-level enumeration.
//!
//! The selection vector has one slot per composition. Round r of the
//! candidate predicate owns slot r and overwrites it on every retry, so no
//! undo log is needed when the engine backtracks.

pub mod statistics;

use crate::parikh::Family;

/// Choices made so far while enumerating candidates for one parent.
#[derive(Debug, Clone, Default)]
pub struct DynamicState {
    /// `selection[r]` is true if composition r is in the candidate set.
    pub selection: Vec<bool>,

    /// The extended family built by the last successful final round.
    pub candidate: Option<Family>,
}

impl DynamicState {
    pub fn new(compositions: usize) -> Self {
        Self {
            selection: vec![false; compositions],
            candidate: None,
        }
    }
}
