//! The program tree.
//!
//! Nodes are immutable once parsed and own their children directly. Every
//! node carries the [`Position`] that runtime errors raised while evaluating
//! it will report.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::{Position, TypeTag};

/// Binary operators, from lowest to highest precedence group.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Logical (not short-circuiting)
    Or,
    And,

    // Equality
    Eq,
    NotEq,

    // Comparison
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Or => "|",
            BinaryOp::And => "&",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
        }
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Neg,
    Not,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
        }
    }
}

/// Expression node.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub position: Position,
}

impl Expr {
    pub fn new(kind: ExprKind, position: Position) -> Self {
        Expr { kind, position }
    }
}

/// Key of a dictionary literal entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DictKey {
    /// `"key": value`
    Literal(String),
    /// `key: value`, resolved against the environment at evaluation time.
    /// An unbound name stands for its own text.
    Name(String),
}

/// Expression variants.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    // Literals
    Number(f64),
    Str(String),
    Bool(bool),
    Null,
    TypeTag(TypeTag),

    /// `[a, b, c]`
    List(Vec<Expr>),

    /// `<key: value, ...>`
    Dict(Vec<(DictKey, Expr)>),

    /// Variable or bare function reference.
    Ident(String),

    /// `name = value`
    Assign { name: String, value: Box<Expr> },

    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    Unary { op: UnaryOp, operand: Box<Expr> },

    /// `target[index]`
    Index { target: Box<Expr>, index: Box<Expr> },

    /// `target[index] = value`
    SetIndex {
        target: Box<Expr>,
        index: Box<Expr>,
        value: Box<Expr>,
    },

    /// `target.name`
    Field { target: Box<Expr>, name: String },

    /// `target.method(args)`
    MethodCall {
        target: Box<Expr>,
        method: String,
        args: Vec<Expr>,
    },

    /// `callee(args)`
    Call { callee: String, args: Vec<Expr> },
}

/// Statement node.
#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub position: Position,
}

impl Stmt {
    pub fn new(kind: StmtKind, position: Position) -> Self {
        Stmt { kind, position }
    }
}

/// Statement variants.
#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    /// `var name = init`
    Var { name: String, init: Expr },

    Expr(Expr),

    /// `return value`; a bare `return` yields `null`.
    Return(Option<Expr>),

    If {
        condition: Expr,
        then_branch: Vec<Stmt>,
        else_branch: Option<Vec<Stmt>>,
    },

    /// `for (init; condition; increment) { body }`
    For {
        init: Option<Box<Stmt>>,
        condition: Option<Expr>,
        increment: Option<Expr>,
        body: Vec<Stmt>,
    },

    /// `{ ... }`
    Block(Vec<Stmt>),
}

/// A top-level `fun name(params) { body }` declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct Function {
    pub name: String,
    pub params: Vec<String>,
    pub body: Vec<Stmt>,
    pub position: Position,
}

impl Function {
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Functions visible to a program, keyed by the name they are called by.
///
/// Imported functions are stored under their alias and share the parsed
/// body with the module they came from.
pub type FunctionTable = FxHashMap<String, Rc<Function>>;

/// `import module.name [as alias]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportDecl {
    pub module: String,
    pub name: String,
    pub alias: String,
    pub position: Position,
}

impl ImportDecl {
    /// Whether `other` imports the same function under the same alias.
    pub fn is_redundant_with(&self, other: &ImportDecl) -> bool {
        self.module == other.module && self.name == other.name && self.alias == other.alias
    }
}
