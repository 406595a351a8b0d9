//! Practice set model
//!
//! The user-chosen subset of catalog codes to be quizzed on. Membership is
//! unordered; every code is guaranteed to exist in the catalog.

use crate::catalog::Catalog;
use std::collections::HashSet;

/// User-selected subset of the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PracticeSet {
    codes: HashSet<String>,
}

impl PracticeSet {
    /// Create an empty practice set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a practice set containing every catalog code
    pub fn all_of(catalog: &Catalog) -> Self {
        Self {
            codes: catalog.codes().into_iter().collect(),
        }
    }

    /// Build a practice set from stored codes, discarding any code the
    /// catalog does not know about. Returns `None` when nothing survives,
    /// so callers can fall back to the full catalog.
    pub fn from_stored(codes: Vec<String>, catalog: &Catalog) -> Option<Self> {
        let codes: HashSet<String> = codes
            .into_iter()
            .filter(|code| catalog.contains(code))
            .collect();
        if codes.is_empty() {
            None
        } else {
            Some(Self { codes })
        }
    }

    /// Toggle membership of a code: add if absent, remove if present
    pub fn toggle(&mut self, code: &str) {
        if !self.codes.remove(code) {
            self.codes.insert(code.to_string());
        }
    }

    /// Reset the selection to every catalog code
    pub fn select_all(&mut self, catalog: &Catalog) {
        self.codes = catalog.codes().into_iter().collect();
    }

    /// Whether a code is selected
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// Number of selected codes
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the selection is empty
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Selected codes, in no particular order (for persistence)
    pub fn codes(&self) -> Vec<String> {
        self.codes.iter().cloned().collect()
    }
}
