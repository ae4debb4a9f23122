//! The `run` command.

use std::path::{Path, PathBuf};

use crate::execute::{execute, ExecuteOptions};

use super::read_file;

/// What `lull run <path>` should execute for `path`.
///
/// A directory runs its `main.ll`. A file runs as the entry, with its
/// directory as the program root.
pub fn run_target(path: &str) -> ExecuteOptions {
    let target = Path::new(path);
    if target.is_dir() {
        return ExecuteOptions::from_root(target);
    }
    let root = target
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    ExecuteOptions::inline(read_file(path))
        .with_root(root)
        .with_label(path)
}

/// Run a program, streaming its output, and exit with status 1 on failure.
pub fn run_path(path: &str) {
    let options = run_target(path).streaming();
    let result = execute(&options);
    if !result.is_success() {
        eprint!("{}", result.stderr);
        std::process::exit(1);
    }
}
