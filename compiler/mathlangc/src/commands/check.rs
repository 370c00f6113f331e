//! `check`: scan a file to the end and report the first error.

use std::process::ExitCode;

use mathlang_lexer::{LexError, Tokenizer};
use tracing::debug;

use super::{read_file, report_lex_error};
use crate::reporting::ColorMode;

/// Scan all of `source`, returning the token count.
pub fn check_source(source: &str) -> Result<usize, LexError> {
    let mut count = 0;
    for token in Tokenizer::new(source) {
        token?;
        count += 1;
    }
    Ok(count)
}

pub fn check_file(path: &str, color: ColorMode) -> ExitCode {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };
    debug!(path, bytes = source.len(), "checking file");

    match check_source(&source) {
        Ok(count) => {
            println!("OK: {count} tokens");
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_lex_error(path, &source, &err, color);
            ExitCode::FAILURE
        }
    }
}
