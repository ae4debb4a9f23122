//! Debug commands: `lex` and `parse` for inspecting the front end.

use super::read_file;

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    match lull_lexer::tokenize(&content) {
        Ok(tokens) => {
            println!("Tokens for '{}' ({} tokens):", path, tokens.len());
            for tok in &tokens {
                println!("  {:?} {:?} @ {}", tok.kind, tok.text, tok.position);
            }
        }
        Err(err) => {
            eprintln!("{path}: {err}");
            std::process::exit(1);
        }
    }
}

/// Parse a file and display its functions and imports.
pub fn parse_file(path: &str) {
    let content = read_file(path);
    let output = match lull_parse::parse_program(&content) {
        Ok(output) => output,
        Err(err) => {
            eprintln!("{path}: {err}");
            std::process::exit(1);
        }
    };

    println!("Parse result for '{path}':");
    println!("  Functions: {}", output.functions.len());
    println!("  Imports: {}", output.imports.len());

    if !output.imports.is_empty() {
        println!();
        println!("Imports:");
        for import in &output.imports {
            if import.alias == import.name {
                println!("  {}.{} @ {}", import.module, import.name, import.position);
            } else {
                println!(
                    "  {}.{} as {} @ {}",
                    import.module, import.name, import.alias, import.position
                );
            }
        }
    }

    if !output.functions.is_empty() {
        let mut functions: Vec<_> = output.functions.values().collect();
        functions.sort_by_key(|function| (function.position.line, function.position.column));
        println!();
        println!("Functions:");
        for function in functions {
            println!(
                "  {}({}) @ {}",
                function.name,
                function.params.join(", "),
                function.position
            );
        }
    }
}
