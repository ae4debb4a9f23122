//! Expression evaluation.

use lull_diagnostic::{ErrorKind, ScriptResult};
use lull_ir::{DictKey, Expr, ExprKind, Position};
use lull_stack::ensure_sufficient_stack;

use super::{Interpreter, Intrinsic};
use crate::indexing::{field_get, index_get, index_set};
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;
use crate::value::{Dict, Value};

impl Interpreter<'_> {
    /// Every nested expression and script call recurses through here.
    pub(crate) fn eval_expr(&mut self, expr: &Expr) -> ScriptResult<Value> {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr))
    }

    fn eval_expr_inner(&mut self, expr: &Expr) -> ScriptResult<Value> {
        let position = expr.position;
        match &expr.kind {
            ExprKind::Number(n) => Ok(Value::Number(*n)),
            ExprKind::Str(text) => Ok(Value::string(text.as_str())),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::Null => Ok(Value::Null),
            ExprKind::TypeTag(tag) => Ok(Value::TypeTag(*tag)),

            ExprKind::List(items) => {
                let values = self.eval_exprs(items)?;
                Ok(Value::list(values))
            }
            ExprKind::Dict(entries) => self.eval_dict(entries, position),

            ExprKind::Ident(name) => self.eval_ident(name, position),
            ExprKind::Assign { name, value } => {
                let value = self.eval_expr(value)?;
                self.env.assign(name, value.clone());
                Ok(value)
            }

            // Both operands are evaluated before the operator, even for `&`
            // and `|`.
            ExprKind::Binary { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                evaluate_binary(*op, &left, &right).map_err(|kind| self.error(kind, position))
            }
            ExprKind::Unary { op, operand } => {
                let operand = self.eval_expr(operand)?;
                evaluate_unary(*op, &operand).map_err(|kind| self.error(kind, position))
            }

            ExprKind::Index { target, index } => {
                let target = self.eval_expr(target)?;
                let index = self.eval_expr(index)?;
                index_get(&target, &index).map_err(|kind| self.error(kind, position))
            }
            ExprKind::SetIndex {
                target,
                index,
                value,
            } => {
                let target = self.eval_expr(target)?;
                let index = self.eval_expr(index)?;
                let value = self.eval_expr(value)?;
                index_set(&target, &index, value.clone())
                    .map_err(|kind| self.error(kind, position))?;
                Ok(value)
            }
            ExprKind::Field { target, name } => {
                let target = self.eval_expr(target)?;
                field_get(&target, name).map_err(|kind| self.error(kind, position))
            }
            ExprKind::MethodCall { target, method, .. } => {
                self.eval_expr(target)?;
                Err(self.error(
                    ErrorKind::UnknownMethod {
                        method: method.clone(),
                    },
                    position,
                ))
            }

            ExprKind::Call { callee, args } => self.eval_call(callee, args, position),
        }
    }

    pub(crate) fn eval_exprs(&mut self, exprs: &[Expr]) -> ScriptResult<Vec<Value>> {
        exprs.iter().map(|expr| self.eval_expr(expr)).collect()
    }

    /// A variable, or else a reference to the function of that name.
    fn eval_ident(&self, name: &str, position: Position) -> ScriptResult<Value> {
        if let Some(value) = self.env.lookup(name) {
            return Ok(value);
        }
        if self.functions.contains_key(name) || Intrinsic::from_name(name).is_some() {
            return Ok(Value::function_ref(name));
        }
        Err(self.error(
            ErrorKind::UndefinedVariable {
                name: name.to_string(),
            },
            position,
        ))
    }

    fn eval_dict(&mut self, entries: &[(DictKey, Expr)], position: Position) -> ScriptResult<Value> {
        let mut dict = Dict::new();
        for (key, value) in entries {
            let key = self.resolve_dict_key(key, position)?;
            let value = self.eval_expr(value)?;
            dict.insert(key, value);
        }
        Ok(Value::dict(dict))
    }

    /// A bare-name key is the string it is bound to, or its own text when
    /// unbound.
    fn resolve_dict_key(&self, key: &DictKey, position: Position) -> ScriptResult<String> {
        match key {
            DictKey::Literal(text) => Ok(text.clone()),
            DictKey::Name(name) => match self.env.lookup(name) {
                None => Ok(name.clone()),
                Some(Value::Str(text)) => Ok(text.to_string()),
                Some(other) => Err(self.error(
                    ErrorKind::KeyNotString {
                        name: name.clone(),
                        got: other.to_string(),
                    },
                    position,
                )),
            },
        }
    }
}
