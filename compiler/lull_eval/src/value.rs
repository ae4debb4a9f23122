//! Runtime values.
//!
//! Lists and dictionaries are reference-shared: copying a [`Value`] copies
//! the handle, so every alias observes in-place writes. All other variants
//! are immutable.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use lull_ir::TypeTag;
use rustc_hash::FxHashMap;

/// A single-threaded shared, mutable cell.
#[repr(transparent)]
pub struct Shared<T>(Rc<RefCell<T>>);

impl<T> Shared<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        Shared(Rc::new(RefCell::new(value)))
    }

    /// Whether both handles refer to the same storage.
    #[inline]
    pub fn ptr_eq(&self, other: &Shared<T>) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for Shared<T> {
    #[inline]
    fn clone(&self) -> Self {
        Shared(Rc::clone(&self.0))
    }
}

impl<T> Deref for Shared<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Shared").field(&self.0.borrow()).finish()
    }
}

/// String-keyed map that remembers insertion order.
#[derive(Clone, Debug, Default)]
pub struct Dict {
    entries: Vec<(String, Value)>,
    index: FxHashMap<String, usize>,
}

impl Dict {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    /// Insert or overwrite. Overwriting keeps the key's original position.
    pub fn insert(&mut self, key: String, value: Value) {
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot].1 = value;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, value));
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl PartialEq for Dict {
    /// Same keys mapped to equal values; order is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|theirs| theirs == value))
    }
}

impl FromIterator<(String, Value)> for Dict {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut dict = Dict::new();
        for (key, value) in iter {
            dict.insert(key, value);
        }
        dict
    }
}

/// A Lull value.
#[derive(Clone, Debug)]
pub enum Value {
    Null,
    Number(f64),
    Str(Rc<str>),
    Bool(bool),
    List(Shared<Vec<Value>>),
    Dict(Shared<Dict>),
    /// A function named by value, produced by referencing a function name
    /// without calling it.
    FunctionRef(Rc<str>),
    TypeTag(TypeTag),
}

impl Value {
    #[inline]
    pub fn string(text: impl Into<Rc<str>>) -> Self {
        Value::Str(text.into())
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Shared::new(items))
    }

    pub fn dict(dict: Dict) -> Self {
        Value::Dict(Shared::new(dict))
    }

    #[inline]
    pub fn function_ref(name: impl Into<Rc<str>>) -> Self {
        Value::FunctionRef(name.into())
    }

    /// The category reported by `typeOf`. Tags themselves have none.
    pub fn type_tag(&self) -> Option<TypeTag> {
        match self {
            Value::Null => Some(TypeTag::Null),
            Value::Number(_) => Some(TypeTag::Number),
            Value::Str(_) => Some(TypeTag::String),
            Value::Bool(_) => Some(TypeTag::Boolean),
            Value::List(_) => Some(TypeTag::Array),
            Value::Dict(_) => Some(TypeTag::Structure),
            Value::FunctionRef(_) => Some(TypeTag::Function),
            Value::TypeTag(_) => None,
        }
    }

    /// Type name used in error messages.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_tag().map_or("TYPE", TypeTag::name)
    }

    /// Truthiness used by `if`, `for`, `!`, `&` and `|`.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::List(items) => !items.borrow().is_empty(),
            Value::Dict(dict) => !dict.borrow().is_empty(),
            Value::FunctionRef(_) | Value::TypeTag(_) => true,
        }
    }
}

impl PartialEq for Value {
    /// Structural equality: collections compare by contents, not identity.
    /// Values of different kinds are never equal.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::List(a), Value::List(b)) => a.ptr_eq(b) || *a.borrow() == *b.borrow(),
            (Value::Dict(a), Value::Dict(b)) => a.ptr_eq(b) || *a.borrow() == *b.borrow(),
            (Value::FunctionRef(a), Value::FunctionRef(b)) => a == b,
            (Value::TypeTag(a), Value::TypeTag(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    /// Canonical text form, used by `println`, string concatenation and
    /// `toString`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Number(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.borrow().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Dict(dict) => {
                f.write_str("{")?;
                for (i, (key, value)) in dict.borrow().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}={value}")?;
                }
                f.write_str("}")
            }
            Value::FunctionRef(name) => write!(f, "<function {name}>"),
            Value::TypeTag(tag) => f.write_str(tag.name()),
        }
    }
}
