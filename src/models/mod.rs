// Author: kelexine (https://github.com/kelexine)
// models/mod.rs — Core data structures for the review estimate

use std::collections::BTreeMap;

/// Line totals keyed by extension (with leading dot). Sorted for reporting.
pub type ExtensionCounts = BTreeMap<String, usize>;

/// A supplemental review activity priced in hours.
#[derive(Debug, Clone, PartialEq)]
pub struct AdditionalCheck {
    pub name: String,
    pub hours: f64,
    pub description: String,
}

impl AdditionalCheck {
    pub fn new(name: impl Into<String>, hours: f64, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hours,
            description: description.into(),
        }
    }
}

/// Result of turning a line count and a set of checks into time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub total_lines: usize,
    pub lines_per_hour: u32,
    pub base_hours: f64,
    pub additional_hours: f64,
    pub total_hours: f64,
    pub hours_per_day: f64,
    pub days: f64,
}

/// Sum of all per-extension totals.
pub fn total_lines(counts: &ExtensionCounts) -> usize {
    counts.values().sum()
}
