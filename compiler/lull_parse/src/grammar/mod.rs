//! Grammar productions, split by syntactic category.
//!
//! - `expr.rs`: entry point (`parse_expr`) and the binary precedence chain
//! - `primary.rs`: literals, identifiers, calls, postfix accesses
//! - `stmt.rs`: statements and blocks
//! - `item.rs`: top-level `import` and `fun` declarations

mod expr;
mod item;
mod primary;
mod stmt;
