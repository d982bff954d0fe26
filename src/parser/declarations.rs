use crate::lexar::token::{Token, TokenKind};
use crate::parser::{ParseError, ParseResult, Parser};
use std::fmt;

/// Primitive types usable in declarations and parameter lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKeyword {
    Int,
    Bool,
    String,
    Void,
}

impl TypeKeyword {
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "int" => Some(TypeKeyword::Int),
            "bool" => Some(TypeKeyword::Bool),
            "string" => Some(TypeKeyword::String),
            "void" => Some(TypeKeyword::Void),
            _ => None,
        }
    }

    pub fn from_token(tok: &Token<'_>) -> Option<Self> {
        if tok.kind == TokenKind::Keyword {
            Self::from_keyword(tok.text)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKeyword::Int => "int",
            TypeKeyword::Bool => "bool",
            TypeKeyword::String => "string",
            TypeKeyword::Void => "void",
        }
    }

    /// Whether a literal token may initialize a value of this type.
    /// `void` only admits `null`.
    pub fn accepts(&self, tok: &Token<'_>) -> bool {
        match self {
            TypeKeyword::Int => tok.kind == TokenKind::Number,
            TypeKeyword::String => tok.kind == TokenKind::String,
            TypeKeyword::Bool => {
                tok.kind == TokenKind::Keyword && matches!(tok.text, "true" | "false" | "null")
            }
            TypeKeyword::Void => tok.is(TokenKind::Keyword, "null"),
        }
    }
}

impl fmt::Display for TypeKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// NUMBER, STRING, `true`, `false` or `null`.
pub(crate) fn is_literal(tok: &Token<'_>) -> bool {
    match tok.kind {
        TokenKind::Number | TokenKind::String => true,
        TokenKind::Keyword => matches!(tok.text, "true" | "false" | "null"),
        _ => false,
    }
}

impl<'a> Parser<'a> {
    /// Syntax:
    ///   - `int x = 1;`
    ///   - `string names[] = ["a", "b"];`
    /// Array initializers hold literals of the declared type only. A scalar
    /// initializer that starts with a literal must start with one of the
    /// declared type; the rest is an ordinary expression.
    pub fn parse_typed_decl(&mut self) -> ParseResult<()> {
        let declared = self.expect_type_keyword()?;
        self.expect_ident()?;

        let is_array = self.consume_if(TokenKind::Separator, "[");
        if is_array {
            self.expect_separator("]")?;
        }

        self.expect_value(TokenKind::Operator, "=")?;

        if is_array {
            self.parse_array_literal(declared)?;
        } else {
            self.parse_initializer(declared)?;
        }

        self.expect_separator(";")?;
        Ok(())
    }

    fn parse_initializer(&mut self, declared: TypeKeyword) -> ParseResult<()> {
        if let Some(tok) = self.peek() {
            if is_literal(tok) && !declared.accepts(tok) {
                return Err(ParseError::TypeMismatch {
                    declared,
                    found: self.found(),
                });
            }
        }
        self.parse_expression()
    }

    /// `[ (Literal (, Literal)*)? ]`
    fn parse_array_literal(&mut self, declared: TypeKeyword) -> ParseResult<()> {
        self.expect_separator("[")?;
        self.parse_comma_separated(|p| p.expect_element(declared), "]")?;
        self.expect_separator("]")?;
        Ok(())
    }

    fn expect_element(&mut self, declared: TypeKeyword) -> ParseResult<()> {
        let tok = match self.peek() {
            Some(tok) => *tok,
            None => return Err(self.unexpected(format!("{} literal", declared))),
        };

        if declared.accepts(&tok) {
            self.advance();
            return Ok(());
        }

        // Values of the wrong type are a typing problem; anything else is syntax
        if is_literal(&tok) || tok.kind == TokenKind::Identifier {
            Err(ParseError::TypeMismatch {
                declared,
                found: self.found(),
            })
        } else {
            Err(self.unexpected(format!("{} literal", declared)))
        }
    }

    /// Syntax: `function [type] name(type a, type b) { ... }`
    pub fn parse_function_decl(&mut self) -> ParseResult<()> {
        self.expect_keyword("function")?;

        // Optional return type
        if self.peek().and_then(TypeKeyword::from_token).is_some() {
            self.advance();
        }

        self.expect_ident()?;
        self.expect_separator("(")?;
        self.parse_comma_separated(
            |p| {
                p.expect_type_keyword()?;
                p.expect_ident()?;
                Ok(())
            },
            ")",
        )?;
        self.expect_separator(")")?;

        self.parse_braced_block()
    }

    pub(crate) fn expect_type_keyword(&mut self) -> ParseResult<TypeKeyword> {
        match self.peek().and_then(TypeKeyword::from_token) {
            Some(ty) => {
                self.advance();
                Ok(ty)
            }
            None => Err(self.unexpected("type keyword (int, bool, string, void)")),
        }
    }
}
