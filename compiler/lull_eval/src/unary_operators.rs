//! Unary operator evaluation.

use lull_diagnostic::ErrorKind;
use lull_ir::UnaryOp;

use crate::operators::coerce_number;
use crate::Value;

pub fn evaluate_unary(op: UnaryOp, operand: &Value) -> Result<Value, ErrorKind> {
    match op {
        UnaryOp::Neg => Ok(Value::Number(-coerce_number(operand)?)),
        UnaryOp::Not => Ok(Value::Bool(!operand.is_truthy())),
    }
}
