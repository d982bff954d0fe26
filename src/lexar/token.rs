use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Keyword,    // if, while, int, true, ...
    Identifier, // [A-Za-z][A-Za-z0-9_]*
    Number,     // integer digits only
    String,     // "..." including both quotes
    Operator,   // = == + - * / < > <= >= != && || ++ -- ! & |
    Separator,  // [ ] ( ) { } : , . ;
    Whitespace,
    Comment, // `// ...` or `/* ... */`
    Unknown, // For invalid or unrecognized input
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Separator => "SEPARATOR",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Comment => "COMMENT",
            TokenKind::Unknown => "UNKNOWN",
        };
        f.write_str(name)
    }
}

/// Half-open byte range `[start, end)` into the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, start: usize) -> Self {
        Token {
            kind,
            text,
            span: Span::new(start, start + text.len()),
        }
    }

    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} : {:?} ({})]", self.kind, self.text, self.span)
    }
}

// --- Static lexical tables ---

pub const KEYWORDS: &[&str] = &[
    // Control flow
    "if", "else", "while", "for", "do", "switch", "case", "default",
    // Statements
    "function", "return", "break", "continue", "print",
    // Literal keywords
    "true", "false", "null",
    // Types
    "int", "bool", "string", "void",
];

/// Characters that can start an operator.
pub const OPERATOR_STARTS: &[char] = &['=', '+', '-', '*', '/', '<', '>', '!', '&', '|'];

pub const TWO_CHAR_OPERATORS: &[&str] = &["==", "!=", "<=", ">=", "&&", "||", "++", "--"];

pub const SEPARATORS: &[char] = &['[', ']', '(', ')', '{', '}', ':', ',', '.', ';'];

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Position in source text, both components 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    pub line: usize,
    pub col: usize,
}

/// Converts a byte offset into a line/column pair. Columns count chars, not bytes.
pub fn line_col(source: &str, offset: usize) -> LineCol {
    let offset = offset.min(source.len());
    let before = source.get(..offset).unwrap_or(source);
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let col = before[line_start..].chars().count() + 1;
    LineCol { line, col }
}
