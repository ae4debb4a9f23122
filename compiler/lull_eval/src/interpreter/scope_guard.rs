//! RAII guards for scope and call-frame cleanup.
//!
//! [`ScopedInterpreter`] holds `&mut Interpreter` and derefs to it. Dropping
//! the guard pops the scope it pushed, and the call frame too when created
//! by [`Interpreter::scoped_call`], on normal exit, on `?` propagation and
//! during unwinding alike.

use std::ops::{Deref, DerefMut};

use lull_diagnostic::Frame;

use super::Interpreter;

pub struct ScopedInterpreter<'guard, 'interp> {
    interpreter: &'guard mut Interpreter<'interp>,
    pops_frame: bool,
}

impl Drop for ScopedInterpreter<'_, '_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_scope();
        if self.pops_frame {
            self.interpreter.call_stack.pop();
        }
    }
}

impl<'interp> Deref for ScopedInterpreter<'_, 'interp> {
    type Target = Interpreter<'interp>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'a> Interpreter<'a> {
    /// Push a child scope, popped when the guard drops.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_, 'a> {
        self.env.push_scope();
        ScopedInterpreter {
            interpreter: self,
            pops_frame: false,
        }
    }

    /// Push `frame` and a fresh scope for a function body. Both are popped
    /// when the guard drops.
    pub fn scoped_call(&mut self, frame: Frame) -> ScopedInterpreter<'_, 'a> {
        self.call_stack.push(frame);
        self.env.push_scope();
        ScopedInterpreter {
            interpreter: self,
            pops_frame: true,
        }
    }

    /// Run `f` inside a child scope.
    pub fn with_env_scope<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_, 'a>) -> T,
    {
        let mut scoped = self.scoped();
        f(&mut scoped)
    }
}
