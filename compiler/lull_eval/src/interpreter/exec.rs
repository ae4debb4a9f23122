//! Statement execution.

use lull_diagnostic::ScriptResult;
use lull_ir::{Expr, Stmt, StmtKind};

use super::Interpreter;
use crate::Value;

/// How a statement finished.
#[derive(Debug)]
pub(crate) enum Flow {
    Normal,
    /// A `return` on its way to the enclosing call.
    Return(Value),
}

impl Interpreter<'_> {
    /// Run statements in the current scope until one returns.
    pub(crate) fn exec_block(&mut self, stmts: &[Stmt]) -> ScriptResult<Flow> {
        for stmt in stmts {
            if let Flow::Return(value) = self.exec_stmt(stmt)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Normal)
    }

    /// Run statements in a fresh child scope.
    fn exec_scoped_block(&mut self, stmts: &[Stmt]) -> ScriptResult<Flow> {
        self.with_env_scope(|scoped| scoped.exec_block(stmts))
    }

    fn exec_stmt(&mut self, stmt: &Stmt) -> ScriptResult<Flow> {
        match &stmt.kind {
            StmtKind::Var { name, init } => {
                let value = self.eval_expr(init)?;
                self.env
                    .define(name, value)
                    .map_err(|kind| self.error(kind, stmt.position))?;
                Ok(Flow::Normal)
            }
            StmtKind::Expr(expr) => {
                self.eval_expr(expr)?;
                Ok(Flow::Normal)
            }
            StmtKind::Return(value) => {
                let value = match value {
                    Some(expr) => self.eval_expr(expr)?,
                    None => Value::Null,
                };
                Ok(Flow::Return(value))
            }
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.eval_expr(condition)?.is_truthy() {
                    self.exec_scoped_block(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.exec_scoped_block(else_branch)
                } else {
                    Ok(Flow::Normal)
                }
            }
            StmtKind::For {
                init,
                condition,
                increment,
                body,
            } => self.with_env_scope(|scoped| {
                scoped.exec_for(init.as_deref(), condition.as_ref(), increment.as_ref(), body)
            }),
            StmtKind::Block(stmts) => self.exec_scoped_block(stmts),
        }
    }

    /// Loop body; runs inside the loop scope that holds the header's
    /// bindings. Each iteration gets its own body scope.
    ///
    /// An assignment in the header to a variable that already exists outside
    /// the loop updates that variable, since `assign` targets the nearest
    /// existing binding.
    fn exec_for(
        &mut self,
        init: Option<&Stmt>,
        condition: Option<&Expr>,
        increment: Option<&Expr>,
        body: &[Stmt],
    ) -> ScriptResult<Flow> {
        if let Some(init) = init {
            self.exec_stmt(init)?;
        }
        loop {
            if let Some(condition) = condition {
                if !self.eval_expr(condition)?.is_truthy() {
                    return Ok(Flow::Normal);
                }
            }
            if let Flow::Return(value) = self.exec_scoped_block(body)? {
                return Ok(Flow::Return(value));
            }
            if let Some(increment) = increment {
                self.eval_expr(increment)?;
            }
        }
    }
}
