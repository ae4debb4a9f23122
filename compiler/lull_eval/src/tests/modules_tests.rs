//! Tests for import resolution.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use lull_diagnostic::{ErrorCategory, ErrorKind};
use lull_ir::Position;
use pretty_assertions::assert_eq;

use crate::{
    buffer_console, link_program, run_program, InMemorySources, ModuleResolver, SourceProvider,
    Value,
};

const UTIL: &str = "fun double(x) { return x * 2 }
fun shout(s) { return s + \"!\" }";

fn util() -> InMemorySources {
    InMemorySources::new().with_module("util", UTIL)
}

#[test]
fn test_imported_function_is_callable() {
    let source = "import util.double
fun main() { return double(4) }";
    assert_eq!(
        run_program(source, &util(), buffer_console()).unwrap(),
        Value::Number(8.0)
    );
}

#[test]
fn test_alias_renames_import() {
    let source = "import util.double as twice
fun main() { return twice(5) }";
    let functions = link_program(source, &util()).unwrap();
    assert!(functions.contains_key("twice"));
    assert!(!functions.contains_key("double"));
}

#[test]
fn test_missing_function_in_module() {
    let err = link_program("import util.triple", &util()).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Module);
    assert_eq!(
        err.to_string(),
        "Unknown function in module util: triple (in memory:util.ll) at 1:13"
    );
}

#[test]
fn test_missing_module() {
    let err = link_program("\nimport nowhere.f", &util()).unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::ModuleNotFound {
            module: "nowhere".to_string()
        }
    );
    assert_eq!(err.position, Position::new(2, 16));
}

#[test]
fn test_alias_colliding_with_local_function() {
    let source = "import util.double
fun double(x) { return x }";
    let err = link_program(source, &util()).unwrap_err();
    assert_eq!(err.message(), "Function already defined: double");
}

#[test]
fn test_module_parse_error_propagates() {
    let sources = InMemorySources::new().with_module("broken", "fun f( {");
    let err = link_program("import broken.f", &sources).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Syntax);
}

#[test]
fn test_modules_load_once() {
    let parsed = lull_parse::parse_program("import util.double import util.shout").unwrap();
    let provider = util();
    let mut resolver = ModuleResolver::new(&provider);
    let mut functions = parsed.functions;
    resolver
        .resolve_imports(&mut functions, &parsed.imports)
        .unwrap();
    assert_eq!(resolver.loaded_count(), 1);
    assert_eq!(functions.len(), 2);
}

#[test]
fn test_module_imports_are_not_followed() {
    let sources = InMemorySources::new().with_module(
        "outer",
        "import missing.thing
fun wrap(x) { return [x] }",
    );
    let source = "import outer.wrap
fun main() { return wrap(1) }";
    let value = run_program(source, &sources, buffer_console()).unwrap();
    assert_eq!(value.to_string(), "[1]");
}

#[test]
fn test_imported_function_cannot_see_module_siblings() {
    let sources = InMemorySources::new().with_module(
        "pair",
        "fun outer() { return inner() }
fun inner() { return 1 }",
    );
    let source = "import pair.outer
fun main() { return outer() }";
    let err = run_program(source, &sources, buffer_console()).unwrap_err();
    assert_eq!(err.message(), "Undefined function inner");
}

#[test]
fn test_provider_chain_prefers_first() {
    let chain = vec![
        InMemorySources::new().with_module("m", "fun f() { return 1 }"),
        InMemorySources::new()
            .with_module("m", "fun f() { return 2 }")
            .with_module("n", "fun g() { return 3 }"),
    ];
    assert_eq!(chain.fetch("m").unwrap().code, "fun f() { return 1 }");
    assert_eq!(chain.fetch("n").unwrap().label, "memory:n.ll");
    assert!(chain.fetch("o").is_none());
}
