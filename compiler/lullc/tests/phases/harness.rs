//! `execute`, module lookup and error reports.

use lull_diagnostic::ErrorKind;
use lull_eval::SourceProvider;
use lullc::commands::run_target;
use lullc::{execute, ExecError, ExecuteOptions, FsSourceProvider, Library, INLINE_LABEL};
use pretty_assertions::assert_eq;

use crate::common::{run_inline, write_files};

#[test]
fn test_runs_main_from_root_with_sibling_module() {
    let dir = tempfile::tempdir().unwrap();
    write_files(
        dir.path(),
        &[
            (
                "main.ll",
                "import util.greet\nfun main() { println(greet(\"ada\")) }",
            ),
            ("util.ll", "fun greet(name) { return \"hi \" + name }"),
        ],
    );
    let result = execute(&ExecuteOptions::from_root(dir.path()));
    assert!(result.is_success(), "{}", result.stderr);
    assert_eq!(result.stdout, "hi ada\n");
}

#[test]
fn test_script_error_report() {
    let dir = tempfile::tempdir().unwrap();
    write_files(
        dir.path(),
        &[("main.ll", "fun main() {\n  var xs = [1, 2, 3]\n  return xs[5]\n}")],
    );
    let result = execute(&ExecuteOptions::from_root(dir.path()));
    let label = dir.path().join("main.ll").display().to_string();
    assert_eq!(
        result.stderr,
        format!(
            "Script error in {label}: Index 5 out of bounds for length 3 at 3:12\nScript stack:\n  at main (1:1)\n"
        )
    );
    assert!(matches!(result.error, Some(ExecError::Script(_))));
}

#[test]
fn test_inline_label_and_override() {
    let result = run_inline("fun main() { return nope }");
    assert_eq!(
        result.stderr,
        format!(
            "Script error in {INLINE_LABEL}: Undefined variable nope at 1:21\nScript stack:\n  at main (1:1)\n"
        )
    );

    let result = execute(&ExecuteOptions::inline("fun main( {").with_label("demo.ll"));
    assert!(result.stderr.starts_with("Script error in demo.ll: "));
    assert!(!result.stderr.contains("Script stack:"));
}

#[test]
fn test_missing_entry() {
    let result = execute(&ExecuteOptions::default());
    assert!(matches!(result.error, Some(ExecError::MissingEntry)));
    assert!(!result.stderr.is_empty());

    let dir = tempfile::tempdir().unwrap();
    let result = execute(&ExecuteOptions::from_root(dir.path()));
    assert!(matches!(result.error, Some(ExecError::Io { .. })));
}

#[test]
fn test_bundled_library_lookup_and_label() {
    let result = run_inline("import std.nope\nfun main() { }");
    let Some(ExecError::Script(err)) = &result.error else {
        panic!("expected a script error");
    };
    assert_eq!(
        err.to_string(),
        "Unknown function in module std: nope (in bundle:std/std.ll) at 1:12"
    );
}

#[test]
fn test_without_std_library() {
    let options = ExecuteOptions::inline("import std.sort\nfun main() { }").without_std_library();
    let Some(ExecError::Script(err)) = execute(&options).error else {
        panic!("expected a script error");
    };
    assert_eq!(
        err.kind,
        ErrorKind::ModuleNotFound {
            module: "std".to_string()
        }
    );
}

#[test]
fn test_program_module_shadows_bundled_library() {
    let dir = tempfile::tempdir().unwrap();
    write_files(
        dir.path(),
        &[
            ("main.ll", "import std.fibonacci\nfun main() { println(fibonacci(3)) }"),
            ("std.ll", "fun fibonacci(n) { return \"custom\" }"),
        ],
    );
    let result = execute(&ExecuteOptions::from_root(dir.path()));
    assert_eq!(result.stdout, "custom\n");
}

#[test]
fn test_resource_directory_fallback() {
    let root = tempfile::tempdir().unwrap();
    let resources = tempfile::tempdir().unwrap();
    write_files(resources.path(), &[("custom.ll", "fun fibonacci(n) { return n }")]);

    let provider = FsSourceProvider::new(root.path()).with_resource_dir(resources.path());
    let source = provider.fetch("custom").unwrap();
    assert_eq!(
        source.label,
        resources.path().join("custom.ll").display().to_string()
    );
    assert!(provider.fetch("absent").is_none());
}

#[test]
fn test_library_provider_labels() {
    let library = Library::default_libraries();
    assert_eq!(library.fetch("std").unwrap().label, "bundle:std/std.ll");
    assert!(library.fetch("other").is_none());
}

#[test]
fn test_scripted_input() {
    let options = ExecuteOptions::inline(
        "fun main() { var name = readln() println(\"You typed: \" + name) println(size(readln())) }",
    )
    .with_input("lull\n");
    let result = execute(&options);
    assert_eq!(result.stdout, "You typed: lull\n0\n");
}

#[test]
fn test_run_target_for_file_uses_its_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_files(
        dir.path(),
        &[
            ("app.ll", "import helper.one\nfun main() { println(one()) }"),
            ("helper.ll", "fun one() { return 1 }"),
        ],
    );
    let path = dir.path().join("app.ll").display().to_string();
    let options = run_target(&path);
    assert_eq!(options.entry_label(), path);

    let result = execute(&options);
    assert_eq!(result.stdout, "1\n");
    assert_eq!(result.value, Some(lull_eval::Value::Null));
}
