//! Front-end tests over whole programs.

use lull_ir::{Position, TokenKind, TypeTag};
use lullc::Library;
use pretty_assertions::assert_eq;

const STD_FUNCTIONS: [&str; 16] = [
    "sort",
    "sortString",
    "fibonacci",
    "maxElement",
    "reverseList",
    "uniqueList",
    "contains",
    "indexOf",
    "upperCase",
    "lowerCase",
    "trim",
    "stringToList",
    "listToString",
    "isEven",
    "map",
    "filter",
];

#[test]
fn test_bundled_library_parses() {
    let library = Library::default_libraries();
    let std = library.find("std/std.ll").unwrap();
    let output = lull_parse::parse_program(&std.content).unwrap();
    assert!(output.imports.is_empty());
    let mut names: Vec<&str> = output.functions.keys().map(String::as_str).collect();
    names.sort_unstable();
    let mut expected = STD_FUNCTIONS.to_vec();
    expected.sort_unstable();
    assert_eq!(names, expected);
}

#[test]
fn test_imports_span_lines() {
    let source = "import std.sort
import custom.fibonacci

as customfibonacci

fun main() { }";
    let output = lull_parse::parse_program(source).unwrap();
    assert_eq!(output.imports.len(), 2);
    assert_eq!(output.imports[1].alias, "customfibonacci");
    assert_eq!(output.imports[1].position, Position::new(2, 15));
}

#[test]
fn test_comments_are_invisible_to_parser() {
    let source = "// leading
fun main() {
    // var input = readln()
    return 1 // trailing
}";
    let output = lull_parse::parse_program(source).unwrap();
    assert_eq!(output.functions["main"].body.len(), 1);
}

#[test]
fn test_token_stream_of_dict_literal() {
    let tokens = lull_lexer::tokenize("typeOf( < >) == STRUCTURE").unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|tok| tok.kind).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::Ident,
            TokenKind::LParen,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::RParen,
            TokenKind::EqEq,
            TokenKind::TypeTag(TypeTag::Structure),
            TokenKind::Eof,
        ]
    );
}
