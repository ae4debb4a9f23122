//! Command handlers for the `lull` CLI.
//!
//! Handlers print their own reports and exit the process with status 1 on
//! failure. Shared helpers live here in the module root.

mod debug;
mod run;

pub use debug::{lex_file, parse_file};
pub use run::{run_path, run_target};

/// Read a source file, or report why not and exit.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
