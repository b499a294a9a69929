// Author: kelexine (https://github.com/kelexine)
// checks/mod.rs — Default check catalog and the interactive check prompts

use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::models::AdditionalCheck;

/// One entry of the built-in catalog.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub default_hours: f64,
}

/// Built-in checks, offered in this order.
pub const DEFAULT_CHECKS: [CatalogEntry; 4] = [
    CatalogEntry {
        id: "configuration",
        name: "Configuration Review",
        description: "Review of configuration files, environment variables, and settings",
        default_hours: 1.0,
    },
    CatalogEntry {
        id: "dependencies",
        name: "Dependency Analysis",
        description: "Review of project dependencies, versions, and security implications",
        default_hours: 1.5,
    },
    CatalogEntry {
        id: "security",
        name: "Security & Cryptography",
        description: "Review of security implementations, crypto usage, and potential vulnerabilities",
        default_hours: 2.0,
    },
    CatalogEntry {
        id: "architecture",
        name: "Architecture Review",
        description: "High-level architecture and design pattern review",
        default_hours: 1.5,
    },
];

const INVALID_NUMBER: &str = "Please enter a valid number.";
const NEGATIVE_NUMBER: &str = "Please enter a non-negative number.";

/// Outcome of validating one hours answer.
#[derive(Debug, PartialEq)]
enum HoursInput {
    Empty,
    Valid(f64),
    Invalid,
    Negative,
}

fn parse_hours(raw: &str) -> HoursInput {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return HoursInput::Empty;
    }
    match trimmed.parse::<f64>() {
        Ok(h) if !h.is_finite() => HoursInput::Invalid,
        Ok(h) if h < 0.0 => HoursInput::Negative,
        Ok(h) => HoursInput::Valid(h),
        Err(_) => HoursInput::Invalid,
    }
}

/// Prompts for check hours on `output` and reads answers from `input`.
pub struct CheckCollector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> CheckCollector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the catalog prompts, then the custom-check loop.
    pub fn collect(&mut self) -> io::Result<Vec<AdditionalCheck>> {
        let mut checks = Vec::new();

        writeln!(self.output, "\n{}", "=== Additional Review Checks Configuration ===".bold())?;
        writeln!(self.output, "Enter the time (in hours) for each additional check.")?;
        writeln!(self.output, "Press Enter to use the default value, or '0' to skip the check.\n")?;

        for entry in DEFAULT_CHECKS.iter() {
            if let Some(check) = self.prompt_catalog_entry(entry)? {
                checks.push(check);
            }
        }

        while let Some(check) = self.prompt_custom_check()? {
            checks.push(check);
        }

        Ok(checks)
    }

    /// `None` when the user answers 0.
    fn prompt_catalog_entry(&mut self, entry: &CatalogEntry) -> io::Result<Option<AdditionalCheck>> {
        loop {
            write!(
                self.output,
                "{} ({})\nDefault time: {:?} hours\nEnter hours (or press Enter for default): ",
                entry.name.cyan(),
                entry.description,
                entry.default_hours
            )?;
            self.output.flush()?;

            let answer = self.read_line()?;
            let hours = match parse_hours(&answer) {
                HoursInput::Empty => entry.default_hours,
                HoursInput::Valid(h) => h,
                HoursInput::Invalid => {
                    self.complain(INVALID_NUMBER)?;
                    continue;
                }
                HoursInput::Negative => {
                    self.complain(NEGATIVE_NUMBER)?;
                    continue;
                }
            };

            if hours > 0.0 {
                tracing::debug!("Check '{}' set to {} hours", entry.id, hours);
                return Ok(Some(AdditionalCheck::new(entry.name, hours, entry.description)));
            }
            tracing::debug!("Check '{}' skipped", entry.id);
            return Ok(None);
        }
    }

    /// `None` once the user submits an empty name.
    fn prompt_custom_check(&mut self) -> io::Result<Option<AdditionalCheck>> {
        write!(self.output, "\nAdd custom check? (Enter name or press Enter to finish): ")?;
        self.output.flush()?;
        let name = self.read_line()?.trim().to_string();
        if name.is_empty() {
            return Ok(None);
        }

        write!(self.output, "Enter description: ")?;
        self.output.flush()?;
        let description = self.read_line()?.trim().to_string();

        let hours = loop {
            write!(self.output, "Enter hours: ")?;
            self.output.flush()?;
            let answer = self.read_line()?;
            match parse_hours(&answer) {
                HoursInput::Valid(h) => break h,
                HoursInput::Negative => self.complain(NEGATIVE_NUMBER)?,
                HoursInput::Empty | HoursInput::Invalid => self.complain(INVALID_NUMBER)?,
            }
        };

        // Zero is kept here, unlike catalog entries.
        Ok(Some(AdditionalCheck::new(name, hours, description)))
    }

    fn complain(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message.red())
    }

    /// Every prompt needs an answer, so end of input is an error.
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended while waiting for an answer",
            ));
        }
        Ok(line)
    }
}
