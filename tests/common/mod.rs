// tests/common/mod.rs — Shared helpers for integration tests

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
pub use tempfile::TempDir;

/// Answers that skip all four default checks and add no custom check.
pub const NO_CHECKS: &str = "0\n0\n0\n0\n\n";

/// Resolve the compiled binary from the workspace target directory
pub fn estimator_bin() -> PathBuf {
    let mut path = std::env::current_exe()
        .expect("current_exe")
        .parent()
        .expect("parent")
        .to_path_buf();

    if path.ends_with("deps") {
        path.pop();
    }
    path.join("review-estimate")
}

/// Execute the binary with given arguments, feeding `stdin` to the prompts.
pub fn run_estimate(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(estimator_bin())
        .args(args)
        .env_remove("NO_COLOR")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute review-estimate binary");

    // The process may exit before reading everything (e.g. on a bad argument).
    if let Some(mut input) = child.stdin.take() {
        let _ = input.write_all(stdin.as_bytes());
    }
    child.wait_with_output().expect("wait_with_output")
}

/// Create a temporary directory with a set of named files and content.
pub fn make_fixture(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("TempDir::new");
    for (name, content) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
    }
    dir
}
