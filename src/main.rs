// review-estimate — Code review effort estimator
//
// Author : kelexine (https://github.com/kelexine)
// Version: Dynamic (Cargo.toml)
// License: MIT
//
// Counts non-empty lines per source extension, converts them to review hours
// at a fixed throughput, and layers user-priced review checks on top:
//   • Interactive prompts for default and custom review checks
//   • walkdir traversal with ignore-pattern and extension filtering
//   • Remote repositories cloned into a self-cleaning temp directory

mod checks;
mod cli;
mod config;
mod counter;
mod display;
mod estimate;
mod filters;
mod models;
mod repo;

use std::io::{self, IsTerminal};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

use crate::checks::CheckCollector;
use crate::cli::{Args, Source};
use crate::config::EstimatorConfig;
use crate::repo::ClonedRepo;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        tracing::error!("Error during execution: {:#}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let source = args
        .source()
        .context("Either --url or --path must be given")?;

    let config = EstimatorConfig::default();

    let checks = CheckCollector::new(io::stdin().lock(), io::stdout().lock())
        .collect()
        .context("Failed to read review check hours")?;

    let counts = match source {
        Source::Remote(url) => {
            // The clone is deleted when `repo` goes out of scope.
            let repo = ClonedRepo::fetch(&url)?;
            counter::analyze_directory(repo.path(), &config)
        }
        Source::Local(path) => counter::analyze_directory(&path, &config),
    };

    let estimate = estimate::estimate(models::total_lines(&counts), &checks, &config);
    println!("{}", display::format_report(&counts, &estimate, &checks));

    Ok(())
}
