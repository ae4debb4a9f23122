//! Lull runner: module lookup, the bundled standard library, program
//! execution with captured output, and the `lull` command handlers.
//!
//! # Pipeline
//!
//! ```text
//! entry source ─► lull_parse ─► ModuleResolver ─► Interpreter::run_main
//!                                  │
//!                                  └─ FsSourceProvider, then Library
//! ```

pub mod commands;
mod execute;
mod library;
mod providers;
mod tracing_setup;

pub use execute::{execute, ExecError, ExecuteOptions, ExecutionResult, INLINE_LABEL};
pub use library::{Library, LibraryFile, LIBRARY_DIR};
pub use providers::{module_file_name, FsSourceProvider, ENTRY_FILE, MODULE_EXTENSION, RESOURCE_DIR};
pub use tracing_setup::init_tracing;
