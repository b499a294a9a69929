// Author: kelexine (https://github.com/kelexine)
// cli.rs — CLI argument parsing via clap derive

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Estimate code review time for a repository.
///
/// Counts non-empty lines per source extension, converts them to review hours
/// at a fixed throughput, and adds the supplemental checks entered at the prompt.
#[derive(Parser, Debug)]
#[command(
    name = "review-estimate",
    version,
    author = "kelexine <https://github.com/kelexine>",
    about = "Estimate code review time for a repository",
    group(ArgGroup::new("source").required(true).args(["url", "path"])),
    after_help = "\
EXAMPLES:
  review-estimate --path .                          Estimate the current directory
  review-estimate --url https://github.com/o/r.git  Clone to a temp dir and estimate

PROMPTS:
  Each default check asks for hours: Enter keeps the default, 0 skips it.
  Custom checks follow until an empty name is entered."
)]
pub struct Args {
    /// Remote repository URL to clone and analyze
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Local repository path to analyze
    #[arg(long, value_name = "DIR")]
    pub path: Option<PathBuf>,
}

/// Where the code to analyze comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Remote(String),
    Local(PathBuf),
}

impl Args {
    pub fn source(&self) -> Option<Source> {
        match (&self.url, &self.path) {
            (Some(url), _) => Some(Source::Remote(url.clone())),
            (None, Some(path)) => Some(Source::Local(path.clone())),
            (None, None) => None,
        }
    }
}
