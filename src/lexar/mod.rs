pub mod lexer;
pub mod token;

pub use lexer::{strip_whitespace, tokenize, tokenize_with, LexOptions};
pub use token::{line_col, LineCol, Span, Token, TokenKind};

#[cfg(test)]
mod tests;
