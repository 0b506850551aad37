use std::fmt;

/// A source location covering a run of characters in a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub col: usize,
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(line: usize, col: usize, start: usize, end: usize) -> Self {
        Self { line, col, start, end }
    }

    pub fn single(line: usize, col: usize, offset: usize) -> Self {
        Self { line, col, start: offset, end: offset + 1 }
    }
}

/// An error produced while scanning a script.
#[derive(Debug, Clone)]
pub enum ScanError {
    /// A character that cannot start or continue the current token.
    UnexpectedChar { ch: char, span: Span, suggestion: Option<String> },
    /// A quoted argument with no closing quote before end of input.
    UnterminatedString { span: Span },
    /// A closing quote followed by something other than a separator.
    TrailingAfterQuote { ch: char, span: Span },
    /// A command name that does not start with an ASCII letter.
    BadCommandName { ch: char, span: Span },
}

impl ScanError {
    pub fn span(&self) -> Span {
        match self {
            ScanError::UnexpectedChar { span, .. } => *span,
            ScanError::UnterminatedString { span } => *span,
            ScanError::TrailingAfterQuote { span, .. } => *span,
            ScanError::BadCommandName { span, .. } => *span,
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::UnexpectedChar { ch, suggestion, .. } => {
                write!(f, "unexpected character '{}'", ch)?;
                if let Some(s) = suggestion {
                    write!(f, " ({})", s)?;
                }
                Ok(())
            }
            ScanError::UnterminatedString { .. } => {
                write!(f, "unterminated quoted argument")
            }
            ScanError::TrailingAfterQuote { ch, .. } => {
                write!(f, "expected a separator after closing quote, found '{}'", ch)
            }
            ScanError::BadCommandName { ch, .. } => {
                write!(f, "command names must start with a letter, found '{}'", ch)
            }
        }
    }
}

impl std::error::Error for ScanError {}

/// Renders a scan error with the offending source line and a caret marker,
/// for terminal display.
pub fn format_error_with_source(error: &ScanError, source: &str) -> String {
    let span = error.span();
    let lines: Vec<&str> = source.lines().collect();
    let line_idx = span.line.saturating_sub(1);

    let mut output = String::new();
    output.push_str(&format!("error: {}\n", error));
    output.push_str(&format!("  --> line {}:{}\n", span.line, span.col));

    if line_idx < lines.len() {
        let line_num_width = span.line.to_string().len().max(2);
        output.push_str(&format!(" {: >width$} |\n", "", width = line_num_width));
        output.push_str(&format!(
            " {: >width$} | {}\n",
            span.line,
            lines[line_idx],
            width = line_num_width
        ));
        output.push_str(&format!(
            " {: >width$} | {}^\n",
            "",
            " ".repeat(span.col.saturating_sub(1)),
            width = line_num_width
        ));
    }

    output
}
