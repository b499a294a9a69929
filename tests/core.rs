// tests/core.rs — End-to-end estimates on local directories

mod common;
use common::{make_fixture, run_estimate, NO_CHECKS};
use std::fs;

fn rust_lines(n: usize) -> String {
    "let x = 1;\n".repeat(n)
}

#[test]
fn test_end_to_end_report() {
    let rs = rust_lines(80);
    let fixture = make_fixture(&[
        ("a.py", "x = 1\n\ny = 2\n\nz = 3\n"),
        ("b.rs", rs.as_str()),
    ]);

    let out = run_estimate(&["--path", fixture.path().to_str().unwrap()], NO_CHECKS);
    assert!(out.status.success(), "exited non-zero: {:?}", out);
    let stdout = String::from_utf8_lossy(&out.stdout);

    assert!(stdout.contains("  .py: 3 lines"), "{}", stdout);
    assert!(stdout.contains("  .rs: 80 lines"), "{}", stdout);
    assert!(stdout.contains("Total Lines of Code: 83"), "{}", stdout);
    assert!(stdout.contains("Code Review Speed: 80 lines/hour"), "{}", stdout);
    assert!(stdout.contains("Base Code Review Time: 1.0 hours"), "{}", stdout);
    assert!(stdout.contains("Total Estimated Review Time: 1.0 hours"), "{}", stdout);
    assert!(stdout.contains("Working Days Required: 0.1"), "{}", stdout);
    assert!(!stdout.contains("Additional Checks:"), "{}", stdout);
}

#[test]
fn test_extensions_sorted_in_report() {
    let fixture = make_fixture(&[
        ("z.ts", "a\n"),
        ("m.go", "b\n"),
        ("a.rs", "c\n"),
    ]);

    let out = run_estimate(&["--path", fixture.path().to_str().unwrap()], NO_CHECKS);
    let stdout = String::from_utf8_lossy(&out.stdout);
    let go = stdout.find(".go:").unwrap();
    let rs = stdout.find(".rs:").unwrap();
    let ts = stdout.find(".ts:").unwrap();
    assert!(go < rs && rs < ts, "{}", stdout);
}

#[test]
fn test_ignored_and_unlisted_files_not_counted() {
    let fixture = make_fixture(&[
        ("src/main.rs", "fn main() {}\n"),
        ("node_modules/dep/index.js", "module.exports = 1;\n"),
        ("venv/lib/site.py", "import os\n"),
        ("README.md", "# Title\n"),
        ("package.json", "{}\n"),
    ]);

    let out = run_estimate(&["--path", fixture.path().to_str().unwrap()], NO_CHECKS);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Total Lines of Code: 1"), "{}", stdout);
    assert!(!stdout.contains(".js:"), "{}", stdout);
    assert!(!stdout.contains(".py:"), "{}", stdout);
}

#[test]
fn test_undecodable_file_warned_once_and_skipped() {
    let fixture = make_fixture(&[("good.c", "int main(void) { return 0; }\n")]);
    fs::write(fixture.path().join("bad.c"), [0xC3, 0x28, b'\n', 0xFF, b'\n']).unwrap();

    let out = run_estimate(&["--path", fixture.path().to_str().unwrap()], NO_CHECKS);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let stderr = String::from_utf8_lossy(&out.stderr);

    assert!(stdout.contains("  .c: 1 lines"), "{}", stdout);
    let warnings: Vec<_> = stderr.lines().filter(|l| l.contains("WARN")).collect();
    assert_eq!(warnings.len(), 1, "{}", stderr);
    assert!(warnings[0].contains("bad.c"), "{}", stderr);
}

#[test]
fn test_thousands_separator() {
    let rs = rust_lines(1200);
    let fixture = make_fixture(&[("big.rs", rs.as_str())]);

    let out = run_estimate(&["--path", fixture.path().to_str().unwrap()], NO_CHECKS);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("  .rs: 1,200 lines"), "{}", stdout);
    assert!(stdout.contains("Total Lines of Code: 1,200"), "{}", stdout);
    assert!(stdout.contains("Base Code Review Time: 15.0 hours"), "{}", stdout);
}

#[test]
fn test_empty_directory() {
    let fixture = make_fixture(&[]);
    let out = run_estimate(&["--path", fixture.path().to_str().unwrap()], NO_CHECKS);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Total Lines of Code: 0"), "{}", stdout);
    assert!(stdout.contains("Working Days Required: 0.0 (8-hour days)"), "{}", stdout);
}
