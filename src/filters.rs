// Author: kelexine (https://github.com/kelexine)
// filters.rs — Ignore patterns, extension allow-list, and the per-file gate

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::Path;

use crate::config::EstimatorConfig;

/// Path fragments that exclude a file when they appear anywhere in its path.
///
/// Matching is a plain substring test, so `.git` also rejects `.github/` and
/// `.gitignore`, and `venv` rejects `.venv/`.
pub static IGNORE_PATTERNS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "node_modules",
        "venv",
        ".git",
        "package-lock.json",
        "yarn.lock",
        ".env",
        ".gitignore",
        ".dockerignore",
        "requirements.txt",
        "package.json",
    ]
});

/// Source extensions (with leading dot) that are counted.
pub static TARGET_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        ".js", ".ts", ".jsx", ".tsx",   // JavaScript / TypeScript
        ".py",
        ".java",
        ".cpp", ".hpp", ".c", ".h",     // C / C++
        ".cs",
        ".go",
        ".rb",
        ".php",
        ".swift",
        ".rs",
    ]
    .iter()
    .copied()
    .collect()
});

/// Extension of the final path segment with its leading dot, e.g. `".py"`.
///
/// Case is preserved. Dotfiles like `.gitignore` have no extension.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
        .map(|e| format!(".{}", e))
}

/// Decide whether `path` takes part in the line count.
pub fn should_analyze(path: &Path, config: &EstimatorConfig) -> bool {
    let rendered = path.to_string_lossy();
    if config
        .ignore_patterns
        .iter()
        .any(|pattern| rendered.contains(pattern.as_str()))
    {
        return false;
    }

    match extension_of(path) {
        Some(ext) => config.extensions.contains(&ext),
        None => false,
    }
}
