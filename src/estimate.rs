// Author: kelexine (https://github.com/kelexine)
// estimate.rs — Lines and checks to hours and working days

use crate::config::EstimatorConfig;
use crate::models::{AdditionalCheck, Estimate};

/// Convert a line count plus supplemental checks into review time.
///
/// No rounding happens here; the report rounds to one decimal place.
pub fn estimate(total_lines: usize, checks: &[AdditionalCheck], config: &EstimatorConfig) -> Estimate {
    let base_hours = total_lines as f64 / config.lines_per_hour as f64;
    let additional_hours: f64 = checks.iter().map(|c| c.hours).sum();
    let total_hours = base_hours + additional_hours;

    Estimate {
        total_lines,
        lines_per_hour: config.lines_per_hour,
        base_hours,
        additional_hours,
        total_hours,
        hours_per_day: config.hours_per_day,
        days: total_hours / config.hours_per_day,
    }
}
