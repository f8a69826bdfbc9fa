//! LEF/DEF tokenizer CLI.

use lefdefc::commands::{lex_file, list_keywords, parse_dialect_flag, parse_lex_options};
use lefdefc::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 || args[2].starts_with('-') {
                eprintln!("Usage: lefdef lex <file> [options]");
                eprintln!();
                print_lex_options();
                std::process::exit(1);
            }
            let options = match parse_lex_options(&args[3..]) {
                Ok(options) => options,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    std::process::exit(1);
                }
            };
            std::process::exit(lex_file(&args[2], &options));
        }
        "keywords" => {
            let dialect = match args.get(2) {
                None => lefdef_lexer::Dialect::LEF,
                Some(flag) => {
                    let Some(dialect) = parse_dialect_flag(flag) else {
                        eprintln!("Usage: lefdef keywords [--lef|--def]");
                        std::process::exit(1);
                    };
                    dialect
                }
            };
            list_keywords(dialect);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("lefdef {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("LEF/DEF tokenizer");
    println!();
    println!("Usage: lefdef <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>           Tokenize a LEF or DEF file and list the tokens");
    println!("  keywords             List the keyword table of a dialect");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    print_lex_options();
    println!();
    println!("Examples:");
    println!("  lefdef lex tech.lef");
    println!("  lefdef lex top.def --limit=100");
    println!("  lefdef lex cells.txt --def --newlines");
    println!("  lefdef keywords --def");
    println!();
    println!("Set RUST_LOG=lefdef_lexer=trace to trace every token.");
}

fn print_lex_options() {
    println!("Lex options:");
    println!("  --lef, --def         Force the dialect (default: from the extension)");
    println!("  --case-insensitive   Fold names to upper case");
    println!("  --no-escapes         Keep backslashes in quoted strings");
    println!("  --multiline-strings  Allow newlines inside quoted strings");
    println!("  --newlines           Report newline tokens");
    println!("  --limit=<n>          Stop reporting after n messages (0: unlimited)");
}
