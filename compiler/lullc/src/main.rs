//! Lull CLI

use lullc::commands::{lex_file, parse_file, run_path};
use lullc::{init_tracing, MODULE_EXTENSION};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            // Default to the current directory's main.ll
            let path = args.get(2).map_or(".", String::as_str);
            run_path(path);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: lull parse <file.ll>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: lull lex <file.ll>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Lull {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // If it looks like a source file, run it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(MODULE_EXTENSION))
            {
                run_path(command);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Lull scripting language");
    println!();
    println!("Usage: lull <command> [options]");
    println!();
    println!("Commands:");
    println!("  run [dir|file.ll]    Run a program (default: ./main.ll)");
    println!("  parse <file.ll>      Parse and list functions and imports");
    println!("  lex <file.ll>        Tokenize and display tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Modules are looked up as <root>/<name>.ll, then resource/<name>.ll,");
    println!("then in the bundled library.");
    println!();
    println!("Environment:");
    println!("  LULL_LOG             Log filter, e.g. LULL_LOG=lull_eval=debug");
    println!();
    println!("Examples:");
    println!("  lull run                        # Run ./main.ll");
    println!("  lull run demo/                  # Run demo/main.ll");
    println!("  lull hello.ll                   # Run a single file");
    println!("  lull parse hello.ll");
}
