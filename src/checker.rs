// Checking pipeline used by both binaries.
// It resolves the input file, scans it, reports lexical anomalies as
// warnings, strips whitespace, and runs the recognizer once.

use crate::diagnostics::{print_lexical_warning, print_note, print_parse_error_with_source};
use crate::lexar::lexer::{strip_whitespace, tokenize_with, LexOptions};
use crate::lexar::token::{Span, Token, TokenKind};
use crate::parser::{ParseError, ParseResult, Parser, DEFAULT_MAX_DEPTH};
use log::{debug, info};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up when the input path is a directory.
pub const MAIN_FILE: &str = "main.script";

/// Options for controlling a check run.
/// These are set by the CLI and control input, lexing and reporting.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Path to a source file or a directory holding main.script
    pub input_path: PathBuf,
    /// Scanner options
    pub lex: LexOptions,
    /// Nesting limit handed to the parser
    pub max_depth: usize,
    /// Print diagnostics to stderr
    pub emit_diagnostics: bool,
    /// Include lexical warnings in the diagnostics
    pub warnings: bool,
    /// Print every significant token before parsing
    pub print_tokens: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("."),
            lex: LexOptions::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            emit_diagnostics: true,
            warnings: true,
            print_tokens: false,
        }
    }
}

/// Outcome of a check run. A rejected program is still `Ok` at the
/// pipeline level; the violation is carried here.
#[derive(Debug)]
pub struct CheckResult {
    pub success: bool,
    pub error_count: usize,
    pub warning_count: usize,
    pub token_count: usize,
    pub error: Option<ParseError>,
}

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("main.script not found in {}", dir.display())]
    MissingInput { dir: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnomalyKind {
    UnterminatedString,
    UnterminatedComment,
    UnrecognizedCharacter,
}

/// An Unknown token, classified for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalWarning {
    pub kind: AnomalyKind,
    pub text: String,
    pub span: Span,
}

impl fmt::Display for LexicalWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            AnomalyKind::UnterminatedString => f.write_str("unterminated string literal"),
            AnomalyKind::UnterminatedComment => f.write_str("unterminated block comment"),
            AnomalyKind::UnrecognizedCharacter => {
                write!(f, "unrecognized character '{}'", self.text)
            }
        }
    }
}

/// Collects every Unknown token as a warning.
pub fn lexical_warnings(tokens: &[Token<'_>]) -> Vec<LexicalWarning> {
    tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Unknown)
        .map(|t| {
            let kind = if t.text.starts_with('"') {
                AnomalyKind::UnterminatedString
            } else if t.text.starts_with("/*") {
                AnomalyKind::UnterminatedComment
            } else {
                AnomalyKind::UnrecognizedCharacter
            };
            LexicalWarning {
                kind,
                text: t.text.to_string(),
                span: t.span,
            }
        })
        .collect()
}

/// Runs the whole front end on in-memory source with default options.
pub fn check_source(source: &str) -> ParseResult<()> {
    check_source_with(source, &CheckOptions::default())
}

pub fn check_source_with(source: &str, opts: &CheckOptions) -> ParseResult<()> {
    let tokens = tokenize_with(source, &opts.lex);
    let significant = strip_whitespace(&tokens);
    Parser::new(&significant)
        .with_max_depth(opts.max_depth)
        .parse_program()
}

/// A file is used as is; a directory must contain main.script.
pub fn resolve_input(path: &Path) -> Result<PathBuf, CheckError> {
    if path.is_file() {
        return Ok(path.to_path_buf());
    }
    let main_file = path.join(MAIN_FILE);
    if !main_file.is_file() {
        return Err(CheckError::MissingInput {
            dir: path.to_path_buf(),
        });
    }
    Ok(main_file)
}

pub fn read_input(path: &Path) -> Result<(PathBuf, String), CheckError> {
    let input_path = resolve_input(path)?;
    let source = fs::read_to_string(&input_path).map_err(|source| CheckError::Io {
        path: input_path.clone(),
        source,
    })?;
    Ok((input_path, source))
}

/// The main entry point for checking a user file.
/// 1. Resolves and reads the input
/// 2. Scans it and reports lexical anomalies
/// 3. Strips whitespace and runs the recognizer
/// Returns a CheckResult carrying the first violation, if any.
pub fn check_project(opts: CheckOptions) -> Result<CheckResult, CheckError> {
    let (input_path, source) = read_input(&opts.input_path)?;
    let filename = input_path.display().to_string();
    info!("checking {} ({} bytes)", filename, source.len());

    // === Lexing ===
    let tokens = tokenize_with(&source, &opts.lex);
    let warnings = lexical_warnings(&tokens);
    debug!("{} tokens, {} lexical warnings", tokens.len(), warnings.len());

    if opts.print_tokens {
        for token in tokens.iter().filter(|t| t.kind != TokenKind::Whitespace) {
            println!("{}", token);
        }
    }

    if opts.emit_diagnostics && opts.warnings {
        for warning in &warnings {
            print_lexical_warning(warning, &source, &filename);
        }
        let swallowed = warnings
            .iter()
            .any(|w| w.kind == AnomalyKind::UnterminatedComment);
        if swallowed && !opts.lex.resume_after_unterminated_comment {
            print_note("nothing after an unterminated block comment is checked");
        }
    }

    // === Parsing ===
    let significant = strip_whitespace(&tokens);
    let outcome = Parser::new(&significant)
        .with_max_depth(opts.max_depth)
        .parse_program();

    let error = match outcome {
        Ok(()) => {
            info!("{} accepted", filename);
            None
        }
        Err(e) => {
            info!("{} rejected: {}", filename, e);
            if opts.emit_diagnostics {
                print_parse_error_with_source(&e, &source, &filename);
            }
            Some(e)
        }
    };

    let error_count = usize::from(error.is_some());
    Ok(CheckResult {
        success: error.is_none(),
        error_count,
        warning_count: warnings.len(),
        token_count: tokens.len(),
        error,
    })
}
