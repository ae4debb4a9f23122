//! Unit tests for values, operators and import resolution.

mod modules_tests;
mod unary_operators_tests;
mod value_tests;
