use crate::lexar::token::{Span, Token, TokenKind};
use crate::parser::declarations::TypeKeyword;
use log::{debug, trace};
use std::fmt;

/// Default cap on statement and expression nesting.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// What the parser saw where a violation was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    Token {
        kind: TokenKind,
        text: String,
        span: Span,
    },
    /// `at` is the offset just past the last token.
    EndOfInput { at: usize },
}

impl Found {
    pub fn span(&self) -> Span {
        match self {
            Found::Token { span, .. } => *span,
            Found::EndOfInput { at } => Span::new(*at, *at),
        }
    }

    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Found::EndOfInput { .. })
    }
}

impl From<&Token<'_>> for Found {
    fn from(tok: &Token<'_>) -> Self {
        Found::Token {
            kind: tok.kind,
            text: tok.text.to_string(),
            span: tok.span,
        }
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Token { kind, text, .. } => write!(f, "{} '{}'", kind, text),
            Found::EndOfInput { .. } => f.write_str("end of input"),
        }
    }
}

/// First violation found by the recognizer. Parsing never continues past it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: Found },

    #[error("expected expression (identifier, literal or '('), found {found}")]
    ExpectedExpression { found: Found },

    #[error("unrecognized statement starting with {found}")]
    UnrecognizedStatement { found: Found },

    #[error("type mismatch: '{declared}' declaration cannot hold {found}")]
    TypeMismatch { declared: TypeKeyword, found: Found },

    #[error("nesting deeper than {limit} levels at {found}")]
    NestingTooDeep { limit: usize, found: Found },

    #[error("whitespace token at {span} must be removed before parsing")]
    UnfilteredWhitespace { span: Span },
}

impl ParseError {
    /// The offending token or end-of-input marker, if the violation has one.
    pub fn found(&self) -> Option<&Found> {
        match self {
            ParseError::UnexpectedToken { found, .. }
            | ParseError::ExpectedExpression { found }
            | ParseError::UnrecognizedStatement { found }
            | ParseError::TypeMismatch { found, .. }
            | ParseError::NestingTooDeep { found, .. } => Some(found),
            ParseError::UnfilteredWhitespace { .. } => None,
        }
    }

    /// Source range to highlight.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnfilteredWhitespace { span } => *span,
            _ => self.found().map(Found::span).unwrap_or_default(),
        }
    }

    /// Stable diagnostic code.
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::UnexpectedToken { .. } => "E2001",
            ParseError::ExpectedExpression { .. } => "E2002",
            ParseError::UnrecognizedStatement { .. } => "E2003",
            ParseError::TypeMismatch { .. } => "E2004",
            ParseError::NestingTooDeep { .. } => "E2005",
            ParseError::UnfilteredWhitespace { .. } => "E2006",
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Recognizes a whitespace-free token slice. Comments are skipped.
pub fn parse(tokens: &[Token<'_>]) -> ParseResult<()> {
    Parser::new(tokens).parse_program()
}

pub struct Parser<'a> {
    tokens: &'a [Token<'a>],
    current: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token<'a>]) -> Self {
        Parser {
            tokens,
            current: 0,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Program := Statement*
    pub fn parse_program(&mut self) -> ParseResult<()> {
        if let Some(ws) = self
            .tokens
            .iter()
            .find(|t| t.kind == TokenKind::Whitespace)
        {
            return Err(ParseError::UnfilteredWhitespace { span: ws.span });
        }

        debug!("parsing {} tokens", self.tokens.len());
        while self.peek().is_some() {
            if let Err(e) = self.parse_statement() {
                debug!("program rejected: {}", e);
                return Err(e);
            }
        }
        debug!("program accepted");
        Ok(())
    }

    /// Token `n` positions ahead of the cursor, comments not counted.
    pub(crate) fn peek_nth(&self, n: usize) -> Option<&Token<'a>> {
        self.tokens[self.current..]
            .iter()
            .filter(|t| t.kind != TokenKind::Comment)
            .nth(n)
    }

    pub(crate) fn peek(&self) -> Option<&Token<'a>> {
        self.peek_nth(0)
    }

    pub(crate) fn advance(&mut self) -> Option<Token<'a>> {
        while let Some(tok) = self.tokens.get(self.current) {
            self.current += 1;
            if tok.kind != TokenKind::Comment {
                trace!("consumed {}", tok);
                return Some(*tok);
            }
        }
        None
    }

    pub(crate) fn peek_is(&self, kind: TokenKind, text: &str) -> bool {
        self.peek().is_some_and(|t| t.is(kind, text))
    }

    /// Consumes the current token if it matches, reporting whether it did.
    pub(crate) fn consume_if(&mut self, kind: TokenKind, text: &str) -> bool {
        if self.peek_is(kind, text) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Describes the current position for error reporting.
    pub(crate) fn found(&self) -> Found {
        match self.peek() {
            Some(tok) => Found::from(tok),
            None => Found::EndOfInput {
                at: self.tokens.last().map(|t| t.span.end).unwrap_or(0),
            },
        }
    }

    pub(crate) fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        ParseError::UnexpectedToken {
            expected: expected.into(),
            found: self.found(),
        }
    }

    /// Consumes and returns the current token when `accept` holds for it.
    fn expect_where(
        &mut self,
        accept: impl FnOnce(&Token<'a>) -> bool,
        expected: impl Into<String>,
    ) -> ParseResult<Token<'a>> {
        match self.peek().copied() {
            Some(tok) if accept(&tok) => {
                self.advance();
                Ok(tok)
            }
            _ => Err(self.unexpected(expected)),
        }
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> ParseResult<Token<'a>> {
        self.expect_where(|t| t.kind == kind, kind.to_string())
    }

    pub(crate) fn expect_value(&mut self, kind: TokenKind, text: &str) -> ParseResult<Token<'a>> {
        self.expect_where(|t| t.is(kind, text), format!("'{}'", text))
    }

    pub(crate) fn expect_separator(&mut self, text: &str) -> ParseResult<Token<'a>> {
        self.expect_value(TokenKind::Separator, text)
    }

    pub(crate) fn expect_keyword(&mut self, text: &str) -> ParseResult<Token<'a>> {
        self.expect_value(TokenKind::Keyword, text)
    }

    pub(crate) fn expect_ident(&mut self) -> ParseResult<Token<'a>> {
        self.expect(TokenKind::Identifier)
    }

    /// Parses `item (, item)*` unless the next token is `closing`.
    /// The closing separator itself is left for the caller.
    pub(crate) fn parse_comma_separated<F>(&mut self, mut item: F, closing: &str) -> ParseResult<()>
    where
        F: FnMut(&mut Self) -> ParseResult<()>,
    {
        if self.peek_is(TokenKind::Separator, closing) {
            return Ok(());
        }
        loop {
            item(self)?;
            if !self.consume_if(TokenKind::Separator, ",") {
                return Ok(());
            }
        }
    }

    /// Runs `f` one nesting level deeper, failing once the limit is reached.
    pub(crate) fn nested<F>(&mut self, f: F) -> ParseResult<()>
    where
        F: FnOnce(&mut Self) -> ParseResult<()>,
    {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.max_depth,
                found: self.found(),
            });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}
