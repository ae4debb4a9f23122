//! Binary operator evaluation.
//!
//! Every operator is a match over the operand kinds. Errors are returned as
//! bare [`ErrorKind`]s; the interpreter positions them at the operator.

use std::cmp::Ordering;

use lull_diagnostic::ErrorKind;
use lull_ir::BinaryOp;

use crate::Value;

/// Evaluate `left op right`. Both operands are always evaluated by the
/// caller, including for `&` and `|`.
pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> Result<Value, ErrorKind> {
    match op {
        BinaryOp::Or => Ok(Value::Bool(left.is_truthy() || right.is_truthy())),
        BinaryOp::And => Ok(Value::Bool(left.is_truthy() && right.is_truthy())),
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => Ok(Value::Bool(left != right)),
        BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => {
            let ordering = compare(left, right)?;
            Ok(Value::Bool(comparison_holds(op, ordering)))
        }
        BinaryOp::Add => add(left, right),
        BinaryOp::Sub => arithmetic(left, right, |a, b| a - b),
        BinaryOp::Mul => arithmetic(left, right, |a, b| a * b),
        BinaryOp::Div => arithmetic(left, right, |a, b| a / b),
        BinaryOp::Mod => arithmetic(left, right, |a, b| a % b),
    }
}

/// List concatenation, then string concatenation, then numeric addition.
fn add(left: &Value, right: &Value) -> Result<Value, ErrorKind> {
    match (left, right) {
        (Value::List(a), Value::List(b)) => {
            let mut items = a.borrow().clone();
            items.extend(b.borrow().iter().cloned());
            Ok(Value::list(items))
        }
        (Value::Str(_), _) | (_, Value::Str(_)) => Ok(Value::string(format!("{left}{right}"))),
        _ => arithmetic(left, right, |a, b| a + b),
    }
}

fn arithmetic(left: &Value, right: &Value, f: fn(f64, f64) -> f64) -> Result<Value, ErrorKind> {
    Ok(Value::Number(f(coerce_number(left)?, coerce_number(right)?)))
}

/// Strings compare lexicographically; everything else numerically.
fn compare(left: &Value, right: &Value) -> Result<Option<Ordering>, ErrorKind> {
    if let (Value::Str(a), Value::Str(b)) = (left, right) {
        return Ok(Some(a.cmp(b)));
    }
    let a = coerce_number(left)?;
    let b = coerce_number(right)?;
    Ok(a.partial_cmp(&b))
}

/// NaN operands make every ordering comparison false.
fn comparison_holds(op: BinaryOp, ordering: Option<Ordering>) -> bool {
    let Some(ordering) = ordering else {
        return false;
    };
    match op {
        BinaryOp::Lt => ordering == Ordering::Less,
        BinaryOp::LtEq => ordering != Ordering::Greater,
        BinaryOp::Gt => ordering == Ordering::Greater,
        BinaryOp::GtEq => ordering != Ordering::Less,
        _ => false,
    }
}

/// Numeric coercion: numbers pass through, a one-character string becomes
/// its character code, anything else is a type error.
pub fn coerce_number(value: &Value) -> Result<f64, ErrorKind> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::Str(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Ok(f64::from(u32::from(ch))),
                _ => Err(ErrorKind::NotCoercible { got: s.to_string() }),
            }
        }
        other => Err(ErrorKind::NotANumber {
            got: other.to_string(),
        }),
    }
}
