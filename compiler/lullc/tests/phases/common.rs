//! Shared test utilities for phase tests.

use std::path::Path;

use lullc::{execute, ExecuteOptions, ExecutionResult};

/// Run inline source with the bundled library available.
pub fn run_inline(source: &str) -> ExecutionResult {
    execute(&ExecuteOptions::inline(source))
}

/// Output of a program that must succeed.
pub fn stdout_of(source: &str) -> String {
    let result = run_inline(source);
    assert!(result.is_success(), "program failed: {}", result.stderr);
    result.stdout
}

/// Write `files` (name, content) into `dir`.
pub fn write_files(dir: &Path, files: &[(&str, &str)]) {
    for (name, content) in files {
        std::fs::write(dir.join(name), content).unwrap();
    }
}
