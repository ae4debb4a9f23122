// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Phase-based tests for the whole pipeline.
//!
//! # Organization
//!
//! - `parse` - Lexing and parsing of complete programs and the bundled library
//! - `eval` - Programs run against the bundled standard library
//! - `harness` - `execute`, filesystem lookup and error reports
//! - `common` - Shared test utilities
//!
//! # Running Phase Tests
//!
//! ```bash
//! cargo test -p lullc --test phases
//! cargo test -p lullc --test phases harness
//! ```

#[path = "phases/common.rs"]
mod common;

#[path = "phases/parse.rs"]
mod parse;

#[path = "phases/eval.rs"]
mod eval;

#[path = "phases/harness.rs"]
mod harness;
