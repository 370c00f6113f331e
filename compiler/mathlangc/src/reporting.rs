//! Diagnostic rendering for lexer errors.
//!
//! Output shape:
//!
//! ```text
//! error: invalid token `#`
//!   --> prog.ml:2:5
//!   |
//! 2 | x = # ;
//!   |     ^
//!   = help: names must start with an ASCII letter
//! ```

use std::io::Write;

use mathlang_lexer::LexError;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Parse the value of a `--color=` flag.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }

    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Pre-computed line starts for offset → (line, column) lookup.
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start. `offsets[0] == 0`.
    offsets: Vec<usize>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                // Next line starts at byte after the newline
                offsets.push(i + 1);
            }
        }
        LineOffsetTable { offsets }
    }

    /// 1-based line containing `offset`.
    pub fn line_from_offset(&self, offset: usize) -> usize {
        match self.offsets.binary_search(&offset) {
            Ok(exact) => exact + 1,
            Err(insert) => insert,
        }
    }

    /// 1-based (line, column). The column counts characters, not bytes.
    pub fn offset_to_line_col(&self, source: &str, offset: usize) -> (usize, usize) {
        let line = self.line_from_offset(offset);
        let line_start = self.offsets[line - 1];
        let col = source[line_start..offset.min(source.len())].chars().count() + 1;
        (line, col)
    }

    /// Text of a 1-based line, without its line terminator.
    pub fn line_text<'s>(&self, source: &'s str, line: usize) -> &'s str {
        let Some(&start) = self.offsets.get(line.wrapping_sub(1)) else {
            return "";
        };
        let end = self
            .offsets
            .get(line)
            .map_or(source.len(), |&next| next - 1);
        source[start..end].trim_end_matches('\r')
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}

/// Writes rendered lexer errors to a terminal or buffer.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Consume the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    /// Render `error` against the source it came from.
    pub fn emit_lex_error(&mut self, path: &str, source: &str, error: &LexError) {
        let table = LineOffsetTable::build(source);
        let start = (error.span.start as usize).min(source.len());
        let end = (error.span.end as usize).clamp(start, source.len());
        let (line, col) = table.offset_to_line_col(source, start);
        let text = table.line_text(source, line);

        // The underline stops at the end of the first line for multi-line spans.
        let line_rest = text.chars().count().saturating_sub(col - 1);
        let width = source[start..end].chars().count().min(line_rest).max(1);
        let gutter = " ".repeat(line.to_string().len());

        self.write_colored("error", colors::ERROR);
        let _ = writeln!(self.writer, ": {}", error.kind);
        let _ = writeln!(self.writer, "{gutter} --> {path}:{line}:{col}");
        self.write_colored(&format!("{gutter} |"), colors::GUTTER);
        let _ = writeln!(self.writer);
        self.write_colored(&format!("{line} |"), colors::GUTTER);
        let _ = writeln!(self.writer, " {text}");
        self.write_colored(&format!("{gutter} |"), colors::GUTTER);
        let _ = write!(self.writer, " {}", " ".repeat(col - 1));
        self.write_colored(&"^".repeat(width), colors::ERROR);
        let _ = writeln!(self.writer);

        if let Some(hint) = error.hint() {
            let _ = write!(self.writer, "{gutter} = ");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {hint}");
        }
        if error.is_internal() {
            let _ = writeln!(
                self.writer,
                "{gutter} = note: this is a bug in the token reader, not in the input"
            );
        }
    }

    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

/// Render `error` to a plain (uncolored) string.
pub fn render_lex_error(path: &str, source: &str, error: &LexError) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_lex_error(path, source, error);
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}
