//! Grammar/parser discrepancy analysis

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Rules lacking a declared and/or implemented parser method.
///
/// Both sets are subsets of the grammar's rule set and iterate in
/// lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscrepancyReport {
    pub missing_declarations: BTreeSet<String>,
    pub missing_implementations: BTreeSet<String>,
}

impl DiscrepancyReport {
    /// True when every rule is both declared and implemented.
    pub fn is_in_sync(&self) -> bool {
        self.missing_declarations.is_empty() && self.missing_implementations.is_empty()
    }

    /// Total number of missing items across both sets.
    pub fn len(&self) -> usize {
        self.missing_declarations.len() + self.missing_implementations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.is_in_sync()
    }
}

/// Compute `rules - declared` and `rules - implemented`.
pub fn analyze(
    rules: &BTreeSet<String>,
    declared: &BTreeSet<String>,
    implemented: &BTreeSet<String>,
) -> DiscrepancyReport {
    DiscrepancyReport {
        missing_declarations: rules.difference(declared).cloned().collect(),
        missing_implementations: rules.difference(implemented).cloned().collect(),
    }
}
