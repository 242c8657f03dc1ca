//! # Calculation History
//!
//! Append-only, chronologically ordered list of `Calculation`s. Each
//! `Calculator` owns exactly one `History`; there is no shared global state,
//! so two calculators never see each other's entries.

use serde::{Deserialize, Serialize};

use crate::calculation::Calculation;

/// Ordered record of completed calculations.
///
/// Entries can only be appended or cleared all at once. Readers get a shared
/// slice, so callers cannot mutate stored records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<Calculation>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a calculation to the end of the history.
    pub fn push(&mut self, calculation: Calculation) {
        self.entries.push(calculation);
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[Calculation] {
        &self.entries
    }

    /// The most recently appended entry, if any.
    pub fn last(&self) -> Option<&Calculation> {
        self.entries.last()
    }

    /// Remove every entry. Clearing an empty history is a no-op.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
