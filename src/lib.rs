// scriptcheck library
// Exports the scanner, the recognizer and the checking pipeline for the
// binaries, integration tests and external highlighters.

pub mod checker;
pub mod cli;
pub mod diagnostics;
pub mod lexar;
pub mod parser;

// Re-export commonly used types
pub use checker::{check_project, check_source, CheckError, CheckOptions, CheckResult};
pub use lexar::lexer::{strip_whitespace, tokenize, tokenize_with, LexOptions};
pub use lexar::token::{Span, Token, TokenKind};
pub use parser::{parse, Found, ParseError, ParseResult, Parser, TypeKeyword};
