//! mathlang CLI
//!
//! Debugging front-end for the token reader.

use std::process::ExitCode;

use mathlangc::commands::{check_file, lex_file};
use mathlangc::reporting::ColorMode;

fn main() -> ExitCode {
    mathlangc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let command = args[1].as_str();

    match command {
        "lex" | "check" => {
            // Parse args: flags can come before or after the path
            let mut color = ColorMode::default();
            let mut path = None;

            for arg in args.iter().skip(2) {
                if let Some(value) = arg.strip_prefix("--color=") {
                    let Some(mode) = ColorMode::parse(value) else {
                        eprintln!("error: invalid --color value '{value}'");
                        eprintln!("Expected one of: auto, always, never");
                        return ExitCode::FAILURE;
                    };
                    color = mode;
                } else if !arg.starts_with('-') && path.is_none() {
                    path = Some(arg.as_str());
                } else {
                    eprintln!("warning: ignoring argument '{arg}'");
                }
            }

            let Some(path) = path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: mathlang {command} <file> [--color=auto|always|never]");
                return ExitCode::FAILURE;
            };

            if command == "lex" {
                lex_file(path, color)
            } else {
                check_file(path, color)
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("mathlang {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("mathlang - token reader tools");
    println!();
    println!("Usage: mathlang <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>       Print the token stream of a file");
    println!("  check <file>     Scan a file and report the first error");
    println!("  help             Show this message");
    println!("  version          Show version information");
    println!();
    println!("Options:");
    println!("  --color=<when>   Color diagnostics: auto (default), always, never");
    println!();
    println!("Environment:");
    println!("  RUST_LOG         Log filter, e.g. RUST_LOG=mathlang_lexer=trace");
}
