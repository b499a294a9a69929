// Author: kelexine (https://github.com/kelexine)
// config/mod.rs — Estimator settings shared by every stage

use std::collections::HashSet;

use crate::filters::{IGNORE_PATTERNS, TARGET_EXTENSIONS};

/// Assumed review throughput.
pub const LINES_PER_HOUR: u32 = 80;

/// Length of a working day in hours.
pub const HOURS_PER_DAY: f64 = 8.0;

/// Settings for one run, built once in `main` and handed to each stage.
#[derive(Debug, Clone)]
pub struct EstimatorConfig {
    pub lines_per_hour: u32,
    pub hours_per_day: f64,
    pub ignore_patterns: Vec<String>,
    pub extensions: HashSet<String>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            lines_per_hour: LINES_PER_HOUR,
            hours_per_day: HOURS_PER_DAY,
            ignore_patterns: IGNORE_PATTERNS.iter().map(|p| p.to_string()).collect(),
            extensions: TARGET_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}
