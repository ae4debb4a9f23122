//! Tests for unary operator evaluation.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use lull_diagnostic::ErrorKind;
use lull_ir::UnaryOp;
use pretty_assertions::assert_eq;

use crate::unary_operators::evaluate_unary;
use crate::Value;

#[test]
fn test_negation() {
    assert_eq!(
        evaluate_unary(UnaryOp::Neg, &Value::Number(4.0)).unwrap(),
        Value::Number(-4.0)
    );
    assert_eq!(
        evaluate_unary(UnaryOp::Neg, &Value::string("a")).unwrap(),
        Value::Number(-97.0)
    );
    assert_eq!(
        evaluate_unary(UnaryOp::Neg, &Value::Null).unwrap_err(),
        ErrorKind::NotANumber {
            got: "null".to_string()
        }
    );
}

#[test]
fn test_not() {
    let not = |value: &Value| evaluate_unary(UnaryOp::Not, value).unwrap();
    assert_eq!(not(&Value::Number(0.0)), Value::Bool(true));
    assert_eq!(not(&Value::string("x")), Value::Bool(false));
    assert_eq!(not(&Value::list(Vec::new())), Value::Bool(true));
    assert_eq!(not(&Value::function_ref("main")), Value::Bool(false));
}
