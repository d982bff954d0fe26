/// Centralized diagnostics and error formatting for scriptcheck.
/// Provides colorized output, error codes, and source snippet rendering.
/// Used for parse violations and lexical warnings.
use crate::checker::LexicalWarning;
use crate::lexar::token::{line_col, LineCol};
use crate::parser::ParseError;

/// Color helpers for terminal output (ANSI escape codes).
fn color_bold_red(s: &str) -> String {
    format!("\x1b[1;31m{}\x1b[0m", s)
}
fn color_bold_green(s: &str) -> String {
    format!("\x1b[1;32m{}\x1b[0m", s)
}
fn color_bold_yellow(s: &str) -> String {
    format!("\x1b[1;33m{}\x1b[0m", s)
}
fn color_bold_cyan(s: &str) -> String {
    format!("\x1b[1;36m{}\x1b[0m", s)
}
fn color_dim(s: &str) -> String {
    format!("\x1b[2m{}\x1b[0m", s)
}
fn color_gray(s: &str) -> String {
    format!("\x1b[90m{}\x1b[0m", s)
}

/// Renders the source line holding `at` with a caret under the offending column.
fn render_source_snippet(source: &str, at: LineCol) {
    // 1-based line/column expected
    if at.line == 0 {
        return;
    }
    let Some(src_line) = source.lines().nth(at.line - 1) else {
        return;
    };

    let gutter = format!("{:>4} {} ", at.line, color_gray("|"));
    // Highlight character under caret
    let idx = at.col.saturating_sub(1);
    let mut highlighted = String::new();
    for (i, ch) in src_line.chars().enumerate() {
        if i == idx {
            highlighted.push_str(&color_bold_cyan(&ch.to_string()));
        } else {
            highlighted.push(ch);
        }
    }
    eprintln!("{}{}", gutter, highlighted);

    // digits + space + '|' + space
    let gutter_width = 4 + 1 + 1 + 1;
    eprintln!("{}{}", " ".repeat(gutter_width + idx), color_bold_red("^"));
}

/// Renders the violation message, highlighting what was expected in green
/// and what was found in red.
pub(crate) fn render_message(err: &ParseError) -> String {
    match err {
        ParseError::UnexpectedToken { expected, found } => format!(
            "expected {}, found {}",
            color_bold_green(expected),
            color_bold_red(&found.to_string())
        ),
        ParseError::TypeMismatch { declared, found } => format!(
            "type mismatch: '{}' declaration cannot hold {}",
            color_bold_green(declared.as_str()),
            color_bold_red(&found.to_string())
        ),
        other => other.to_string(),
    }
}

/// Prints a parse violation with its location, a source snippet and a caret.
pub fn print_parse_error_with_source(err: &ParseError, source: &str, filename: &str) {
    let at = line_col(source, err.span().start);
    let loc = format!("{}:{}:{}", filename, at.line, at.col);
    let code = format!("error[{}]", err.code());
    eprintln!("{} {}", color_bold_red(&code), color_dim(&loc));
    eprintln!("{}", render_message(err));
    render_source_snippet(source, at);
    eprintln!();
}

/// Prints a non-fatal lexical anomaly.
pub fn print_lexical_warning(warning: &LexicalWarning, source: &str, filename: &str) {
    let at = line_col(source, warning.span.start);
    let loc = format!("{}:{}:{}", filename, at.line, at.col);
    eprintln!("{} {}", color_bold_yellow("warning"), color_dim(&loc));
    eprintln!("{}", warning);
    render_source_snippet(source, at);
    eprintln!();
}

/// Prints a note (additional info) in yellow.
pub fn print_note(note: &str) {
    eprintln!("{}: {}", color_bold_yellow("note"), note);
}

#[cfg(test)]
mod tests {
    use super::render_message;
    use crate::lexar::token::{Span, TokenKind};
    use crate::parser::{Found, ParseError, TypeKeyword};

    #[test]
    fn test_render_expected_found() {
        let err = ParseError::UnexpectedToken {
            expected: "';'".to_string(),
            found: Found::EndOfInput { at: 9 },
        };
        let out = render_message(&err);
        assert!(out.starts_with("expected "));
        assert!(out.contains("\x1b[1;32m';'\x1b[0m"));
        assert!(out.contains("\x1b[1;31mend of input\x1b[0m"));
    }

    #[test]
    fn test_render_found_text_with_separator_like_content() {
        // The found token text must not be split on ", found "
        let err = ParseError::UnexpectedToken {
            expected: "';'".to_string(),
            found: Found::Token {
                kind: TokenKind::String,
                text: "\"a, found b\"".to_string(),
                span: Span::new(4, 16),
            },
        };
        let out = render_message(&err);
        assert!(out.contains("\x1b[1;31mSTRING '\"a, found b\"'\x1b[0m"));
    }

    #[test]
    fn test_render_type_mismatch() {
        let err = ParseError::TypeMismatch {
            declared: TypeKeyword::Int,
            found: Found::Token {
                kind: TokenKind::String,
                text: "\"x\"".to_string(),
                span: Span::new(8, 11),
            },
        };
        let out = render_message(&err);
        assert!(out.contains("\x1b[1;32mint\x1b[0m"));
        assert!(out.contains("\x1b[1;31mSTRING '\"x\"'\x1b[0m"));
    }

    #[test]
    fn test_render_passthrough() {
        let err = ParseError::UnrecognizedStatement {
            found: Found::Token {
                kind: TokenKind::Keyword,
                text: "else".to_string(),
                span: Span::new(0, 4),
            },
        };
        assert_eq!(
            render_message(&err),
            "unrecognized statement starting with KEYWORD 'else'"
        );
    }
}
