//! Error kinds and their categories.

use std::fmt;

/// Coarse grouping of [`ErrorKind`]s.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Lexical,
    Syntax,
    Name,
    Type,
    Bounds,
    Arity,
    Module,
}

impl ErrorCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCategory::Lexical => "lexical",
            ErrorCategory::Syntax => "syntax",
            ErrorCategory::Name => "name",
            ErrorCategory::Type => "type",
            ErrorCategory::Bounds => "bounds",
            ErrorCategory::Arity => "arity",
            ErrorCategory::Module => "module",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything that can go wrong while lexing, parsing, linking or running a
/// Lull program.
///
/// The `Display` output is the user-visible message; position and frames are
/// added by [`ScriptError`](crate::ScriptError).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ErrorKind {
    // Lexical
    #[error("Unterminated string literal")]
    UnterminatedString,
    #[error("Unknown char: {ch}")]
    UnknownChar { ch: char },
    #[error("Invalid number literal: {text}")]
    InvalidNumber { text: String },

    // Syntax
    #[error("Expected {expected} got {found}")]
    UnexpectedToken { expected: String, found: String },
    #[error("Bad factor: {found}")]
    BadFactor { found: String },
    #[error("Expected dictionary key, got {found}")]
    ExpectedDictKey { found: String },
    #[error("Expected fun or import, got {found}")]
    ExpectedItem { found: String },
    #[error("Expected '.' after module in import, got {found}")]
    MalformedImport { found: String },
    #[error("Function already defined: {name}")]
    DuplicateFunction { name: String },
    #[error("Import already defined: {module}.{name}")]
    DuplicateImport { module: String, name: String },
    #[error("Alias must be different from original name: {name}")]
    AliasSameAsName { name: String },

    // Name resolution
    #[error("Undefined variable {name}")]
    UndefinedVariable { name: String },
    #[error("Undefined function {name}")]
    UndefinedFunction { name: String },
    #[error("Variable already defined: {name}")]
    AlreadyDefined { name: String },
    #[error("Invalid assignment target")]
    InvalidAssignmentTarget,

    // Type / coercion
    #[error("Expected number, got {got}")]
    NotANumber { got: String },
    #[error("Expected number or single-character string, got {got}")]
    NotCoercible { got: String },
    #[error("Dictionary key must be a string, got {got}")]
    NonStringKey { got: String },
    #[error("Dictionary key {name} resolved to non-string value {got}")]
    KeyNotString { name: String, got: String },
    #[error("Index {index} is not an integer")]
    NonIntegerIndex { index: f64 },
    #[error("{function}() expects {expected}")]
    InvalidArgument {
        function: &'static str,
        expected: &'static str,
    },
    #[error("typeOf() unknown type: {value}")]
    UnknownType { value: String },

    // Bounds / shape
    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: f64, len: usize },
    #[error("Missing key: {key}")]
    MissingKey { key: String },
    #[error("Cannot index value of type {type_name}")]
    NotIndexable { type_name: &'static str },
    #[error("Cannot assign by index into value of type {type_name}")]
    NotIndexAssignable { type_name: &'static str },
    #[error("Cannot read field {field} of {type_name}")]
    NotADict {
        field: String,
        type_name: &'static str,
    },
    #[error("Unknown method: {method}")]
    UnknownMethod { method: String },
    #[error("toString() ascii code out of range: {code}")]
    CharCodeOutOfRange { code: f64 },

    // Arity
    #[error("{name}() expects {expected}")]
    IntrinsicArity {
        name: &'static str,
        expected: &'static str,
    },
    #[error("Function {name} expects {expected} args, got {got}")]
    FunctionArity {
        name: String,
        expected: usize,
        got: usize,
    },

    // Modules
    #[error("Module file not found: {module}")]
    ModuleNotFound { module: String },
    #[error("Unknown function in module {module}: {name} (in {label})")]
    FunctionNotInModule {
        module: String,
        name: String,
        label: String,
    },
    #[error("Function already defined: {alias}")]
    AliasCollision { alias: String },
}

impl ErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorKind::UnterminatedString
            | ErrorKind::UnknownChar { .. }
            | ErrorKind::InvalidNumber { .. } => ErrorCategory::Lexical,

            ErrorKind::UnexpectedToken { .. }
            | ErrorKind::BadFactor { .. }
            | ErrorKind::ExpectedDictKey { .. }
            | ErrorKind::ExpectedItem { .. }
            | ErrorKind::MalformedImport { .. }
            | ErrorKind::DuplicateFunction { .. }
            | ErrorKind::DuplicateImport { .. }
            | ErrorKind::AliasSameAsName { .. } => ErrorCategory::Syntax,

            ErrorKind::UndefinedVariable { .. }
            | ErrorKind::UndefinedFunction { .. }
            | ErrorKind::AlreadyDefined { .. }
            | ErrorKind::InvalidAssignmentTarget => ErrorCategory::Name,

            ErrorKind::NotANumber { .. }
            | ErrorKind::NotCoercible { .. }
            | ErrorKind::NonStringKey { .. }
            | ErrorKind::KeyNotString { .. }
            | ErrorKind::NonIntegerIndex { .. }
            | ErrorKind::InvalidArgument { .. }
            | ErrorKind::UnknownType { .. } => ErrorCategory::Type,

            ErrorKind::IndexOutOfBounds { .. }
            | ErrorKind::MissingKey { .. }
            | ErrorKind::NotIndexable { .. }
            | ErrorKind::NotIndexAssignable { .. }
            | ErrorKind::NotADict { .. }
            | ErrorKind::UnknownMethod { .. }
            | ErrorKind::CharCodeOutOfRange { .. } => ErrorCategory::Bounds,

            ErrorKind::IntrinsicArity { .. } | ErrorKind::FunctionArity { .. } => {
                ErrorCategory::Arity
            }

            ErrorKind::ModuleNotFound { .. }
            | ErrorKind::FunctionNotInModule { .. }
            | ErrorKind::AliasCollision { .. } => ErrorCategory::Module,
        }
    }
}
