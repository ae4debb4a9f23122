//! Function calls.
//!
//! A call site `f(args)` calls the function named by the value of `f` when
//! `f` is a variable holding a function reference, and the function named
//! `f` otherwise. Built-in functions take precedence over user functions of
//! the same name.

use std::rc::Rc;

use lull_diagnostic::{ErrorKind, Frame, ScriptResult};
use lull_ir::{Expr, Function, Position};

use super::exec::Flow;
use super::{Interpreter, Intrinsic};
use crate::Value;

/// What a name resolves to at a call site.
enum Callee {
    Intrinsic(Intrinsic),
    User(Rc<Function>),
}

impl Interpreter<'_> {
    /// Evaluate `callee(args)`. Arity is checked before any argument is
    /// evaluated; arguments are evaluated in the caller's scope.
    pub(crate) fn eval_call(
        &mut self,
        callee: &str,
        args: &[Expr],
        position: Position,
    ) -> ScriptResult<Value> {
        let target = match self.env.lookup(callee) {
            Some(Value::FunctionRef(name)) => name.to_string(),
            _ => callee.to_string(),
        };
        let resolved = self.resolve_callee(&target, position)?;
        self.check_arity(&target, &resolved, args.len(), position)?;
        let values = self.eval_exprs(args)?;
        self.invoke(&target, &resolved, values, position)
    }

    /// Call the function `name` with already evaluated arguments.
    pub fn call_function(
        &mut self,
        name: &str,
        args: Vec<Value>,
        position: Position,
    ) -> ScriptResult<Value> {
        let resolved = self.resolve_callee(name, position)?;
        self.check_arity(name, &resolved, args.len(), position)?;
        self.invoke(name, &resolved, args, position)
    }

    fn resolve_callee(&self, name: &str, position: Position) -> ScriptResult<Callee> {
        if let Some(intrinsic) = Intrinsic::from_name(name) {
            return Ok(Callee::Intrinsic(intrinsic));
        }
        match self.functions.get(name) {
            Some(function) => Ok(Callee::User(Rc::clone(function))),
            None => Err(self.error(
                ErrorKind::UndefinedFunction {
                    name: name.to_string(),
                },
                position,
            )),
        }
    }

    fn check_arity(
        &self,
        name: &str,
        callee: &Callee,
        got: usize,
        position: Position,
    ) -> ScriptResult<()> {
        match callee {
            Callee::Intrinsic(intrinsic) if !intrinsic.accepts(got) => {
                Err(self.error(intrinsic.arity_error(), position))
            }
            Callee::User(function) if function.arity() != got => Err(self.error(
                ErrorKind::FunctionArity {
                    name: name.to_string(),
                    expected: function.arity(),
                    got,
                },
                position,
            )),
            _ => Ok(()),
        }
    }

    fn invoke(
        &mut self,
        name: &str,
        callee: &Callee,
        args: Vec<Value>,
        position: Position,
    ) -> ScriptResult<Value> {
        match callee {
            Callee::Intrinsic(intrinsic) => self.call_intrinsic(*intrinsic, args, position),
            Callee::User(function) => self.call_user(name, function, args, position),
        }
    }

    /// Run a user function body in a new scope stacked on the caller's.
    ///
    /// The frame and scope are popped by the guard whether the body returns,
    /// falls off its end, or fails.
    #[tracing::instrument(level = "debug", skip(self, function, args, position))]
    fn call_user(
        &mut self,
        name: &str,
        function: &Function,
        args: Vec<Value>,
        position: Position,
    ) -> ScriptResult<Value> {
        let mut scoped = self.scoped_call(Frame::new(name, position));
        for (param, value) in function.params.iter().zip(args) {
            scoped
                .env
                .define(param, value)
                .map_err(|kind| scoped.error(kind, position))?;
        }
        match scoped.exec_block(&function.body)? {
            Flow::Return(value) => Ok(value),
            Flow::Normal => Ok(Value::Null),
        }
    }
}
