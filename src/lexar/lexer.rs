use crate::lexar::token::{
    is_keyword, Token, TokenKind, OPERATOR_STARTS, SEPARATORS, TWO_CHAR_OPERATORS,
};
use log::{debug, trace};

/// Knobs for the scanner. The defaults reproduce the reference behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// When set, an unterminated `/*` becomes a two-character Unknown token and
    /// scanning continues after it instead of swallowing the rest of the input.
    pub resume_after_unterminated_comment: bool,
}

/// Scans `input` with the default options.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    tokenize_with(input, &LexOptions::default())
}

/// Scans the whole input left to right. Never fails: malformed lexemes come
/// back as `TokenKind::Unknown`, and the tokens always cover every byte.
pub fn tokenize_with<'a>(input: &'a str, opts: &LexOptions) -> Vec<Token<'a>> {
    let mut tokens: Vec<Token<'a>> = Vec::new();
    let mut i = 0;

    while i < input.len() {
        let rest = &input[i..];
        let c = match rest.chars().next() {
            Some(c) => c,
            None => break,
        };
        let start = i;

        // Whitespace runs collapse into one token
        if c.is_whitespace() {
            i += rest
                .find(|ch: char| !ch.is_whitespace())
                .unwrap_or(rest.len());
            tokens.push(Token::new(TokenKind::Whitespace, &input[start..i], start));
            continue;
        }

        // Line comment stops before the newline
        if rest.starts_with("//") {
            i += rest.find('\n').unwrap_or(rest.len());
            tokens.push(Token::new(TokenKind::Comment, &input[start..i], start));
            continue;
        }

        // Block comment, closing `*/` included
        if rest.starts_with("/*") {
            match rest[2..].find("*/") {
                Some(close) => {
                    i += close + 4;
                    tokens.push(Token::new(TokenKind::Comment, &input[start..i], start));
                }
                None if opts.resume_after_unterminated_comment => {
                    trace!("unterminated block comment at {}, resuming", start);
                    i += 2;
                    tokens.push(Token::new(TokenKind::Unknown, &input[start..i], start));
                }
                None => {
                    trace!("unterminated block comment at {}", start);
                    tokens.push(Token::new(TokenKind::Unknown, rest, start));
                    break;
                }
            }
            continue;
        }

        // Alphabetic: keywords or identifiers
        if c.is_ascii_alphabetic() {
            i += rest
                .find(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '_'))
                .unwrap_or(rest.len());
            let word = &input[start..i];
            let kind = if is_keyword(word) {
                TokenKind::Keyword
            } else {
                TokenKind::Identifier
            };
            tokens.push(Token::new(kind, word, start));
            continue;
        }

        // Integers only, a following '.' is a separator
        if c.is_ascii_digit() {
            i += rest
                .find(|ch: char| !ch.is_ascii_digit())
                .unwrap_or(rest.len());
            tokens.push(Token::new(TokenKind::Number, &input[start..i], start));
            continue;
        }

        // String literal, both quotes kept in the text
        if c == '"' {
            match rest[1..].find('"') {
                Some(close) => {
                    i += close + 2;
                    tokens.push(Token::new(TokenKind::String, &input[start..i], start));
                }
                None => {
                    trace!("unterminated string at {}", start);
                    i = input.len();
                    tokens.push(Token::new(TokenKind::Unknown, rest, start));
                }
            }
            continue;
        }

        // Operators, preferring the two-character form
        if OPERATOR_STARTS.contains(&c) {
            let len = match rest.get(..2) {
                Some(pair) if TWO_CHAR_OPERATORS.contains(&pair) => 2,
                _ => 1,
            };
            i += len;
            tokens.push(Token::new(TokenKind::Operator, &input[start..i], start));
            continue;
        }

        if SEPARATORS.contains(&c) {
            i += 1;
            tokens.push(Token::new(TokenKind::Separator, &input[start..i], start));
            continue;
        }

        // Unknown character: emit Unknown token
        i += c.len_utf8();
        tokens.push(Token::new(TokenKind::Unknown, &input[start..i], start));
    }

    debug!(
        "scanned {} bytes into {} tokens ({} unknown)",
        input.len(),
        tokens.len(),
        tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Unknown)
            .count()
    );
    tokens
}

/// Drops whitespace tokens. Comments stay; the parser skips them itself.
pub fn strip_whitespace<'a>(tokens: &[Token<'a>]) -> Vec<Token<'a>> {
    tokens
        .iter()
        .filter(|t| t.kind != TokenKind::Whitespace)
        .copied()
        .collect()
}
