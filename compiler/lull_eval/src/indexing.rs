//! Index and field access on values.
//!
//! Bracket reads on a dictionary miss softly (`null`); dot reads of a
//! missing key are errors.

use lull_diagnostic::ErrorKind;

use crate::Value;

/// `target[index]`
pub fn index_get(target: &Value, index: &Value) -> Result<Value, ErrorKind> {
    match target {
        Value::List(items) => {
            let items = items.borrow();
            let slot = checked_index(index, items.len())?;
            Ok(items[slot].clone())
        }
        Value::Str(text) => {
            let slot = checked_index(index, text.chars().count())?;
            let ch = text.chars().nth(slot).map(String::from).unwrap_or_default();
            Ok(Value::string(ch))
        }
        Value::Dict(dict) => {
            let key = dict_key(index)?;
            Ok(dict.borrow().get(key).cloned().unwrap_or(Value::Null))
        }
        other => Err(ErrorKind::NotIndexable {
            type_name: other.type_name(),
        }),
    }
}

/// `target[index] = value`, in place.
pub fn index_set(target: &Value, index: &Value, value: Value) -> Result<(), ErrorKind> {
    match target {
        Value::List(items) => {
            let mut items = items.borrow_mut();
            let slot = checked_index(index, items.len())?;
            items[slot] = value;
            Ok(())
        }
        Value::Dict(dict) => {
            let key = dict_key(index)?.to_string();
            dict.borrow_mut().insert(key, value);
            Ok(())
        }
        other => Err(ErrorKind::NotIndexAssignable {
            type_name: other.type_name(),
        }),
    }
}

/// `target.name`
pub fn field_get(target: &Value, name: &str) -> Result<Value, ErrorKind> {
    let Value::Dict(dict) = target else {
        return Err(ErrorKind::NotADict {
            field: name.to_string(),
            type_name: target.type_name(),
        });
    };
    dict.borrow()
        .get(name)
        .cloned()
        .ok_or_else(|| ErrorKind::MissingKey {
            key: name.to_string(),
        })
}

/// Validate a list or string index: an integral number in `[0, len)`.
fn checked_index(index: &Value, len: usize) -> Result<usize, ErrorKind> {
    let Value::Number(n) = index else {
        return Err(ErrorKind::NotANumber {
            got: index.to_string(),
        });
    };
    let n = *n;
    if n.fract() != 0.0 || !n.is_finite() {
        return Err(ErrorKind::NonIntegerIndex { index: n });
    }
    if n < 0.0 || n >= len as f64 {
        return Err(ErrorKind::IndexOutOfBounds { index: n, len });
    }
    Ok(n as usize)
}

fn dict_key(index: &Value) -> Result<&str, ErrorKind> {
    match index {
        Value::Str(key) => Ok(key),
        other => Err(ErrorKind::NonStringKey {
            got: other.to_string(),
        }),
    }
}
