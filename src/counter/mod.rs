// Author: kelexine (https://github.com/kelexine)
// counter/mod.rs — File discovery and non-empty line counting

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::config::EstimatorConfig;
use crate::filters::{extension_of, should_analyze};
use crate::models::ExtensionCounts;

/// Why a file could not be counted.
#[derive(Debug, Error)]
pub enum LineCountError {
    #[error("not valid UTF-8 text")]
    Decode(#[from] std::string::FromUtf8Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Walk `root` and total the non-empty lines of every accepted file, per extension.
pub fn analyze_directory(root: &Path, config: &EstimatorConfig) -> ExtensionCounts {
    tracing::info!("Starting analysis of directory: {}", root.display());
    let mut counts = ExtensionCounts::new();

    for path in discover_files(root) {
        if !should_analyze(&path, config) {
            continue;
        }
        let Some(ext) = extension_of(&path) else {
            continue;
        };

        let lines = count_lines(&path);
        if lines > 0 {
            *counts.entry(ext).or_insert(0) += lines;
        }
    }

    counts
}

/// Count non-blank lines; unreadable files count as zero after a log line.
pub fn count_lines(path: &Path) -> usize {
    match try_count_lines(path) {
        Ok(n) => n,
        Err(LineCountError::Decode(_)) => {
            tracing::warn!("Failed to read file {} - skipping", path.display());
            0
        }
        Err(LineCountError::Io(e)) => {
            tracing::error!("Error processing file {}: {}", path.display(), e);
            0
        }
    }
}

pub fn try_count_lines(path: &Path) -> Result<usize, LineCountError> {
    let bytes = std::fs::read(path)?;
    let content = String::from_utf8(bytes)?;
    Ok(count_non_empty(&content))
}

/// Lines are split on `\n`, `\r\n` and bare `\r`.
pub fn count_non_empty(content: &str) -> usize {
    content
        .split(['\n', '\r'])
        .filter(|line| !line.trim().is_empty())
        .count()
}

/// Every non-directory entry under `dir`, in file-name order.
///
/// Symlinked directories are not descended, so link cycles cannot loop.
/// Other symlinks, dangling ones included, are kept and left to `count_lines`.
/// A root that is not a directory yields nothing.
fn discover_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }

    WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::debug!("Skipping unreadable entry: {}", err);
                None
            }
        })
        .filter(|e| !e.file_type().is_dir() && !(e.path_is_symlink() && e.path().is_dir()))
        .map(|e| e.into_path())
        .collect()
}
