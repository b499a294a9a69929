// Author: kelexine (https://github.com/kelexine)
// display/mod.rs — Plain-text estimation report

use crate::models::{AdditionalCheck, Estimate, ExtensionCounts};

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

pub fn fmt_num(n: usize) -> String {
    // Thousands-separator formatting
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Report
// ─────────────────────────────────────────────────────────────────────────────

/// Render the report. Extensions come out in sorted order; hours and days
/// are rounded to one decimal place.
pub fn format_report(counts: &ExtensionCounts, estimate: &Estimate, checks: &[AdditionalCheck]) -> String {
    let mut report = vec![
        "\n=== Code Review Estimation Report ===\n".to_string(),
        "Lines of Code by File Type:".to_string(),
    ];

    for (ext, count) in counts {
        report.push(format!("  {}: {} lines", ext, fmt_num(*count)));
    }

    report.push(format!("\nTotal Lines of Code: {}", fmt_num(estimate.total_lines)));
    report.push(format!("Code Review Speed: {} lines/hour", estimate.lines_per_hour));
    report.push(format!("Base Code Review Time: {:.1} hours", estimate.base_hours));

    if !checks.is_empty() {
        report.push("\nAdditional Checks:".to_string());
        for check in checks {
            report.push(format!("  {}: {:.1} hours", check.name, check.hours));
            report.push(format!("    Description: {}", check.description));
        }
        report.push(format!(
            "\nAdditional Checks Total Time: {:.1} hours",
            estimate.additional_hours
        ));
    }

    report.push(format!("\nTotal Estimated Review Time: {:.1} hours", estimate.total_hours));
    report.push(format!(
        "Working Days Required: {:.1} ({}-hour days)",
        estimate.days, estimate.hours_per_day
    ));

    report.join("\n")
}
