//! Runtime type categories.

use std::fmt;

/// One of the seven value categories reported by `typeOf`.
///
/// The upper-case names are reserved words in source code and evaluate to
/// the tag itself, so `typeOf(x) == NUMBER` works as a type test.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeTag {
    Null,
    Number,
    String,
    Boolean,
    Array,
    Structure,
    Function,
}

impl TypeTag {
    pub const ALL: [TypeTag; 7] = [
        TypeTag::Null,
        TypeTag::Number,
        TypeTag::String,
        TypeTag::Boolean,
        TypeTag::Array,
        TypeTag::Structure,
        TypeTag::Function,
    ];

    /// Reserved source spelling of the tag.
    pub const fn name(self) -> &'static str {
        match self {
            TypeTag::Null => "NULL",
            TypeTag::Number => "NUMBER",
            TypeTag::String => "STRING",
            TypeTag::Boolean => "BOOLEAN",
            TypeTag::Array => "ARRAY",
            TypeTag::Structure => "STRUCTURE",
            TypeTag::Function => "FUNCTION",
        }
    }

    /// Look up a tag by its reserved spelling.
    pub fn from_name(name: &str) -> Option<TypeTag> {
        TypeTag::ALL.into_iter().find(|tag| tag.name() == name)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
