// Author: kelexine (https://github.com/kelexine)
// repo.rs — Cloning remote repositories into a scoped temporary directory

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CloneError {
    #[error("git is not installed or not in PATH")]
    GitMissing,
    #[error("failed to execute git: {0}")]
    Spawn(#[source] io::Error),
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[source] io::Error),
    #[error("git clone failed: {0}")]
    Git(String),
}

/// Clone `url` into `target_dir` with the `git` client.
pub fn clone_repository(url: &str, target_dir: &Path) -> Result<PathBuf, CloneError> {
    tracing::info!("Cloning repository from {}", url);

    let output = Command::new("git")
        .arg("clone")
        .arg(url)
        .arg(target_dir)
        // never block on a credential prompt
        .env("GIT_TERMINAL_PROMPT", "0")
        .output()
        .map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                CloneError::GitMissing
            } else {
                CloneError::Spawn(e)
            }
        });

    let result = output.and_then(|out| {
        if out.status.success() {
            Ok(target_dir.to_path_buf())
        } else {
            let stderr = String::from_utf8_lossy(&out.stderr);
            Err(CloneError::Git(stderr.trim().to_string()))
        }
    });

    if let Err(ref e) = result {
        tracing::error!("Failed to clone repository: {}", e);
    }
    result
}

/// A clone that lives as long as this value; the checkout is removed on drop.
pub struct ClonedRepo {
    dir: TempDir,
}

impl ClonedRepo {
    pub fn fetch(url: &str) -> Result<Self, CloneError> {
        let dir = tempfile::Builder::new()
            .prefix("review-estimate-")
            .tempdir()
            .map_err(CloneError::TempDir)?;
        clone_repository(url, dir.path())?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
