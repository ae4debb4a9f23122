//! Built-in functions.

use lull_diagnostic::{ErrorKind, ScriptResult};
use lull_ir::Position;

use super::Interpreter;
use crate::operators::coerce_number;
use crate::Value;

/// Functions provided by the interpreter itself. They are matched by name
/// before user functions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Intrinsic {
    Println,
    Size,
    Map,
    Readln,
    ToNumber,
    ToString,
    TypeOf,
}

impl Intrinsic {
    pub const ALL: [Intrinsic; 7] = [
        Intrinsic::Println,
        Intrinsic::Size,
        Intrinsic::Map,
        Intrinsic::Readln,
        Intrinsic::ToNumber,
        Intrinsic::ToString,
        Intrinsic::TypeOf,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Intrinsic::Println => "println",
            Intrinsic::Size => "size",
            Intrinsic::Map => "map",
            Intrinsic::Readln => "readln",
            Intrinsic::ToNumber => "toNumber",
            Intrinsic::ToString => "toString",
            Intrinsic::TypeOf => "typeOf",
        }
    }

    pub fn from_name(name: &str) -> Option<Intrinsic> {
        Intrinsic::ALL
            .into_iter()
            .find(|intrinsic| intrinsic.name() == name)
    }

    /// Whether `count` arguments are acceptable.
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Intrinsic::Println => count <= 1,
            Intrinsic::Readln => count == 0,
            Intrinsic::Map => count == 2,
            Intrinsic::Size | Intrinsic::ToNumber | Intrinsic::ToString | Intrinsic::TypeOf => {
                count == 1
            }
        }
    }

    pub(crate) fn arity_error(self) -> ErrorKind {
        let expected = match self {
            Intrinsic::Println => "at most 1 argument",
            Intrinsic::Readln => "0 arguments",
            Intrinsic::Map => "2 arguments",
            Intrinsic::Size | Intrinsic::ToNumber | Intrinsic::ToString | Intrinsic::TypeOf => {
                "1 argument"
            }
        };
        ErrorKind::IntrinsicArity {
            name: self.name(),
            expected,
        }
    }
}

impl Interpreter<'_> {
    pub(crate) fn call_intrinsic(
        &mut self,
        intrinsic: Intrinsic,
        args: Vec<Value>,
        position: Position,
    ) -> ScriptResult<Value> {
        match (intrinsic, args.as_slice()) {
            (Intrinsic::Println, []) => {
                self.console.write_line("");
                Ok(Value::Null)
            }
            (Intrinsic::Println, [value]) => {
                self.console.write_line(&value.to_string());
                Ok(Value::Null)
            }
            (Intrinsic::Readln, []) => Ok(Value::string(
                self.console.read_line().unwrap_or_default(),
            )),
            (Intrinsic::Size, [value]) => size_of(value)
                .map(|len| Value::Number(len as f64))
                .map_err(|kind| self.error(kind, position)),
            (Intrinsic::Map, [target, function]) => self.map(target, function, position),
            (Intrinsic::ToNumber, [value]) => coerce_number(value)
                .map(Value::Number)
                .map_err(|kind| self.error(kind, position)),
            (Intrinsic::ToString, [value]) => {
                to_string(value).map_err(|kind| self.error(kind, position))
            }
            (Intrinsic::TypeOf, [value]) => value.type_tag().map(Value::TypeTag).ok_or_else(|| {
                self.error(
                    ErrorKind::UnknownType {
                        value: value.to_string(),
                    },
                    position,
                )
            }),
            _ => Err(self.error(intrinsic.arity_error(), position)),
        }
    }

    /// `map(collection, function)`: a new list of results for a list, or
    /// the concatenated text of results for a string.
    fn map(&mut self, target: &Value, function: &Value, position: Position) -> ScriptResult<Value> {
        let name = match function {
            Value::FunctionRef(name) | Value::Str(name) => name.to_string(),
            _ => {
                return Err(self.error(
                    ErrorKind::InvalidArgument {
                        function: "map",
                        expected: "function reference or name",
                    },
                    position,
                ))
            }
        };
        match target {
            Value::List(items) => {
                // Snapshot so the callback may mutate the list.
                let items = items.borrow().clone();
                let mut results = Vec::with_capacity(items.len());
                for item in items {
                    results.push(self.call_function(&name, vec![item], position)?);
                }
                Ok(Value::list(results))
            }
            Value::Str(text) => {
                let mut out = String::new();
                for ch in text.chars() {
                    let result =
                        self.call_function(&name, vec![Value::string(ch.to_string())], position)?;
                    out.push_str(&result.to_string());
                }
                Ok(Value::string(out))
            }
            _ => Err(self.error(
                ErrorKind::InvalidArgument {
                    function: "map",
                    expected: "list or string",
                },
                position,
            )),
        }
    }
}

fn size_of(value: &Value) -> Result<usize, ErrorKind> {
    match value {
        Value::Str(text) => Ok(text.chars().count()),
        Value::List(items) => Ok(items.borrow().len()),
        Value::Dict(dict) => Ok(dict.borrow().len()),
        _ => Err(ErrorKind::InvalidArgument {
            function: "size",
            expected: "string, list, or map",
        }),
    }
}

/// A number becomes the character with that code; anything else its text.
fn to_string(value: &Value) -> Result<Value, ErrorKind> {
    let Value::Number(n) = value else {
        return Ok(Value::string(value.to_string()));
    };
    let code = n.trunc();
    let ch = if (0.0..=f64::from(u16::MAX)).contains(&code) {
        char::from_u32(code as u32)
    } else {
        None
    };
    match ch {
        Some(ch) => Ok(Value::string(ch.to_string())),
        None => Err(ErrorKind::CharCodeOutOfRange { code: *n }),
    }
}
