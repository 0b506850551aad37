use crate::error::{ScanError, Span};

/// A single script unit: one command name and its argument strings.
///
/// Arguments are opaque; the scanner strips quotes and resolves escapes but
/// never interprets their content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub name: String,
    pub args: Vec<String>,
    pub span: Span,
}

fn is_separator(ch: char) -> bool {
    ch == ' ' || ch == '\t' || ch == '\r'
}

fn is_name_start(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

fn is_name_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'
}

/// Scans a script into its ordered sequence of [`Invocation`]s.
///
/// Grammar: one `<command-name> <arg> <arg> ...` unit per line, `#` comments
/// to end of line, double-quoted arguments with `\"`, `\\`, `\n` and `\t`
/// escapes. A quoted argument may span lines; a closing quote must be
/// followed by a separator or end of line.
pub fn scan(input: &str) -> Result<Vec<Invocation>, ScanError> {
    let mut invocations = Vec::new();
    let mut chars = input.chars().peekable();

    let mut line = 1;
    let mut col = 1;
    let mut offset = 0;

    let bump = |ch: char, line: &mut usize, col: &mut usize, offset: &mut usize| {
        if ch == '\n' {
            *line += 1;
            *col = 1;
        } else {
            *col += 1;
        }
        *offset += ch.len_utf8();
    };

    // The invocation currently being assembled, if any.
    let mut current: Option<Invocation> = None;

    while let Some(&ch) = chars.peek() {
        let start_line = line;
        let start_col = col;
        let start_offset = offset;

        match ch {
            c if is_separator(c) => {
                chars.next();
                bump(c, &mut line, &mut col, &mut offset);
            }

            '\n' => {
                chars.next();
                bump(ch, &mut line, &mut col, &mut offset);
                if let Some(inv) = current.take() {
                    invocations.push(inv);
                }
            }

            '#' => {
                while let Some(&c) = chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    chars.next();
                    bump(c, &mut line, &mut col, &mut offset);
                }
            }

            '"' => {
                let Some(inv) = current.as_mut() else {
                    return Err(ScanError::BadCommandName {
                        ch: '"',
                        span: Span::single(start_line, start_col, start_offset),
                    });
                };

                chars.next();
                bump(ch, &mut line, &mut col, &mut offset);

                let mut arg = String::new();
                let mut escaped = false;
                let mut closed = false;

                while let Some(&c) = chars.peek() {
                    if escaped {
                        arg.push(match c {
                            'n' => '\n',
                            't' => '\t',
                            '\\' => '\\',
                            '"' => '"',
                            _ => c,
                        });
                        escaped = false;
                    } else if c == '\\' {
                        escaped = true;
                    } else if c == '"' {
                        chars.next();
                        bump(c, &mut line, &mut col, &mut offset);
                        closed = true;
                        break;
                    } else {
                        arg.push(c);
                    }
                    chars.next();
                    bump(c, &mut line, &mut col, &mut offset);
                }

                if !closed {
                    return Err(ScanError::UnterminatedString {
                        span: Span::single(start_line, start_col, start_offset),
                    });
                }

                if let Some(&c) = chars.peek()
                    && !is_separator(c)
                    && c != '\n'
                    && c != '#'
                {
                    return Err(ScanError::TrailingAfterQuote {
                        ch: c,
                        span: Span::single(line, col, offset),
                    });
                }

                inv.args.push(arg);
                inv.span.end = offset;
            }

            _ => {
                let mut word = String::new();

                if current.is_none() {
                    if !is_name_start(ch) {
                        return Err(ScanError::BadCommandName {
                            ch,
                            span: Span::single(start_line, start_col, start_offset),
                        });
                    }
                    while let Some(&c) = chars.peek() {
                        if !is_name_continue(c) {
                            break;
                        }
                        word.push(c);
                        chars.next();
                        bump(c, &mut line, &mut col, &mut offset);
                    }
                    if let Some(&c) = chars.peek()
                        && !is_separator(c)
                        && c != '\n'
                        && c != '#'
                    {
                        return Err(ScanError::UnexpectedChar {
                            ch: c,
                            span: Span::single(line, col, offset),
                            suggestion: Some(
                                "command names may only contain letters, digits, '-' and '_'"
                                    .to_string(),
                            ),
                        });
                    }
                    current = Some(Invocation {
                        name: word,
                        args: Vec::new(),
                        span: Span::new(start_line, start_col, start_offset, offset),
                    });
                } else {
                    // Bare argument: everything up to the next separator.
                    while let Some(&c) = chars.peek() {
                        if is_separator(c) || c == '\n' {
                            break;
                        }
                        word.push(c);
                        chars.next();
                        bump(c, &mut line, &mut col, &mut offset);
                    }
                    let inv = current.as_mut().unwrap();
                    inv.args.push(word);
                    inv.span.end = offset;
                }
            }
        }
    }

    if let Some(inv) = current.take() {
        invocations.push(inv);
    }

    Ok(invocations)
}
