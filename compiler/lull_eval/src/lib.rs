//! Lull Eval - tree-walking interpreter for Lull programs.
//!
//! # Architecture
//!
//! - [`Value`]: the closed set of runtime values; lists and dictionaries are
//!   reference-shared
//! - [`Environment`]: the scope stack
//! - [`evaluate_binary`] / [`evaluate_unary`]: operator dispatch by match
//! - [`Interpreter`]: statements, expressions, calls and built-ins, with a
//!   [`CallStack`] for backtraces
//! - [`ModuleResolver`]: import linking over a [`SourceProvider`]
//! - [`Console`]: the only way a program reads or writes text

mod console;
mod diagnostics;
mod environment;
mod indexing;
pub mod interpreter;
mod modules;
mod operators;
mod unary_operators;
mod value;

#[cfg(test)]
mod tests;

use lull_diagnostic::ScriptResult;
use lull_ir::FunctionTable;

pub use console::{
    buffer_console, scripted_console, stdio_console, BufferConsole, Console, SharedConsole,
    StdioConsole,
};
pub use diagnostics::CallStack;
pub use environment::{Environment, Scope};
pub use indexing::{field_get, index_get, index_set};
pub use interpreter::{Interpreter, Intrinsic, MAIN_FUNCTION};
pub use modules::{InMemorySources, ModuleResolver, ModuleSource, NoModules, SourceProvider};
pub use operators::{coerce_number, evaluate_binary};
pub use unary_operators::evaluate_unary;
pub use value::{Dict, Shared, Value};

/// Parse `source` and link its imports against `provider`.
pub fn link_program(source: &str, provider: &dyn SourceProvider) -> ScriptResult<FunctionTable> {
    let parsed = lull_parse::parse_program(source)?;
    let mut functions = parsed.functions;
    ModuleResolver::new(provider).resolve_imports(&mut functions, &parsed.imports)?;
    Ok(functions)
}

/// Run `main()` from a linked function table.
pub fn run_main(functions: &FunctionTable, console: SharedConsole) -> ScriptResult<Value> {
    Interpreter::new(functions, console).run_main()
}

/// Parse, link and run `source`, returning the value of `main()`.
pub fn run_program(
    source: &str,
    provider: &dyn SourceProvider,
    console: SharedConsole,
) -> ScriptResult<Value> {
    let functions = link_program(source, provider)?;
    run_main(&functions, console)
}
