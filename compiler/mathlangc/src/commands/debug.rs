//! `lex`: print the token stream of a file.

use std::fmt::Write as _;
use std::process::ExitCode;

use mathlang_lexer::{LexError, SpannedToken, Tokenizer};
use tracing::debug;

use super::{read_file, report_lex_error};
use crate::reporting::ColorMode;

/// Tokens scanned from a source, plus the error that stopped the scan.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenDump {
    pub tokens: Vec<SpannedToken>,
    pub error: Option<LexError>,
}

/// Scan `source` until end of input or the first error.
pub fn scan_all(source: &str) -> TokenDump {
    let mut tokenizer = Tokenizer::new(source);
    let mut dump = TokenDump::default();
    loop {
        match tokenizer.next_spanned() {
            Ok(Some(token)) => dump.tokens.push(token),
            Ok(None) => break,
            Err(err) => {
                dump.error = Some(err);
                break;
            }
        }
    }
    dump
}

/// Format the token listing printed by `mathlang lex`.
pub fn format_dump(path: &str, dump: &TokenDump) -> String {
    let mut out = format!("Tokens for '{}' ({} tokens):\n", path, dump.tokens.len());
    for tok in &dump.tokens {
        let _ = writeln!(out, "  {:?} @ {}", tok.token, tok.span);
    }
    out
}

/// Lex a file and display the token stream.
pub fn lex_file(path: &str, color: ColorMode) -> ExitCode {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };
    debug!(path, bytes = source.len(), "lexing file");

    let dump = scan_all(&source);
    print!("{}", format_dump(path, &dump));

    match &dump.error {
        Some(err) => {
            report_lex_error(path, &source, err, color);
            ExitCode::FAILURE
        }
        None => ExitCode::SUCCESS,
    }
}
