//! Tree-walking interpreter.
//!
//! # Module Structure
//!
//! - `mod.rs`: [`Interpreter`] state and error construction
//! - `scope_guard.rs`: RAII scope and call-frame guards
//! - `exec.rs`: statements and control flow
//! - `expr.rs`: expressions, indexing and field access
//! - `call.rs`: call resolution, arity and user function invocation
//! - `intrinsics.rs`: built-in functions

mod call;
mod exec;
mod expr;
mod intrinsics;
mod scope_guard;


use lull_diagnostic::{ErrorKind, ScriptError, ScriptResult};
use lull_ir::{FunctionTable, Position};

use crate::console::SharedConsole;
use crate::diagnostics::CallStack;
use crate::environment::Environment;
use crate::Value;

pub use intrinsics::Intrinsic;
pub use scope_guard::ScopedInterpreter;

/// Name of the entry function.
pub const MAIN_FUNCTION: &str = "main";

/// Interpreter state for one run.
pub struct Interpreter<'a> {
    /// Every function callable by name, imports included.
    pub(crate) functions: &'a FunctionTable,
    pub(crate) env: Environment,
    pub(crate) call_stack: CallStack,
    pub(crate) console: SharedConsole,
}

impl<'a> Interpreter<'a> {
    pub fn new(functions: &'a FunctionTable, console: SharedConsole) -> Self {
        Interpreter {
            functions,
            env: Environment::new(),
            call_stack: CallStack::new(),
            console,
        }
    }

    /// Call `main()` as if from 1:1, so every runtime backtrace ends with
    /// `main (1:1)`.
    pub fn run_main(&mut self) -> ScriptResult<Value> {
        self.call_function(MAIN_FUNCTION, Vec::new(), Position::START)
    }

    /// Error at `position` carrying a snapshot of the current call stack.
    #[cold]
    pub(crate) fn error(&self, kind: ErrorKind, position: Position) -> ScriptError {
        ScriptError::new(kind, position).with_backtrace(self.call_stack.capture())
    }
}
