//! Diagnostics for Lull.
//!
//! Every failure the language can report, whether found by the lexer, the
//! parser, the module resolver or the evaluator, is a [`ScriptError`]:
//!
//! - what went wrong ([`ErrorKind`], grouped by [`ErrorCategory`])
//! - where ([`Position`] of the responsible token, expression or statement)
//! - how we got there ([`Backtrace`], an immutable snapshot of the call stack
//!   taken when the error was raised)
//!
//! The `Display` rendering is part of the language's observable behaviour:
//!
//! ```text
//! Index 5 out of bounds for length 3 at 4:10
//!   at pick (9:5)
//!   at main (1:1)
//! ```

mod backtrace;
mod kind;


use std::fmt;

pub use backtrace::{Backtrace, Frame};
pub use kind::{ErrorCategory, ErrorKind};
pub use lull_ir::Position;

/// Result alias used throughout the interpreter.
pub type ScriptResult<T> = Result<T, ScriptError>;

/// A positioned language error carrying a call-stack snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptError {
    pub kind: ErrorKind,
    pub position: Position,
    pub backtrace: Backtrace,
}

impl ScriptError {
    /// Create an error with an empty backtrace.
    ///
    /// Lexer, parser and module-resolution errors use this form: they are
    /// raised before any function is running.
    #[cold]
    pub fn new(kind: ErrorKind, position: Position) -> Self {
        ScriptError {
            kind,
            position,
            backtrace: Backtrace::default(),
        }
    }

    /// Attach a call-stack snapshot.
    #[must_use]
    pub fn with_backtrace(mut self, backtrace: Backtrace) -> Self {
        self.backtrace = backtrace;
        self
    }

    /// The message without position or frames.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    #[inline]
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.position)?;
        for frame in self.backtrace.frames() {
            write!(f, "\n{frame}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ScriptError {}
