//! Command handlers for the `mathlang` CLI.
//!
//! Each submodule implements one command. Shared helpers for reading
//! sources and reporting lexer errors live here.

use std::io::IsTerminal;

use mathlang_lexer::LexError;

use crate::reporting::{ColorMode, TerminalEmitter};

mod check;
mod debug;

pub use check::{check_file, check_source};
pub use debug::{format_dump, lex_file, scan_all, TokenDump};

/// Read a source file, turning I/O failures into a user-facing message.
pub fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

/// Render a lexer error to stderr.
pub(crate) fn report_lex_error(path: &str, source: &str, error: &LexError, color: ColorMode) {
    let stderr = std::io::stderr();
    let is_tty = stderr.is_terminal();
    let mut emitter = TerminalEmitter::with_color_mode(stderr.lock(), color, is_tty);
    emitter.emit_lex_error(path, source, error);
    emitter.flush();
}
