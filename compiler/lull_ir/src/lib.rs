//! Lull IR - shared data types for the Lull interpreter.
//!
//! This crate has no behaviour of its own. It defines the vocabulary the
//! other crates speak:
//!
//! - [`Position`]: 1-based line/column of a token or AST node
//! - [`Token`] / [`TokenKind`]: lexer output
//! - [`Expr`] / [`Stmt`]: the immutable program tree
//! - [`Function`] / [`FunctionTable`] / [`ImportDecl`]: top-level items
//! - [`TypeTag`]: the seven runtime type categories

mod ast;
mod position;
mod token;
mod type_tag;

pub use ast::{
    BinaryOp, DictKey, Expr, ExprKind, Function, FunctionTable, ImportDecl, Stmt, StmtKind,
    UnaryOp,
};
pub use position::Position;
pub use token::{Token, TokenKind};
pub use type_tag::TypeTag;
