use crate::lexar::token::TokenKind;
use crate::parser::declarations::is_literal;
use crate::parser::{ParseError, ParseResult, Parser};

type Level<'a> = fn(&mut Parser<'a>) -> ParseResult<()>;

impl<'a> Parser<'a> {
    /// Expr := Or. Every binary level is left-associative and consumes one
    /// operator class; unary binds tighter than all of them.
    pub fn parse_expression(&mut self) -> ParseResult<()> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> ParseResult<()> {
        self.parse_binary(&["||"], Self::parse_and)
    }

    fn parse_and(&mut self) -> ParseResult<()> {
        self.parse_binary(&["&&"], Self::parse_equality)
    }

    fn parse_equality(&mut self) -> ParseResult<()> {
        self.parse_binary(&["==", "!="], Self::parse_comparison)
    }

    fn parse_comparison(&mut self) -> ParseResult<()> {
        self.parse_binary(&["<", ">", "<=", ">="], Self::parse_additive)
    }

    fn parse_additive(&mut self) -> ParseResult<()> {
        self.parse_binary(&["+", "-"], Self::parse_multiplicative)
    }

    fn parse_multiplicative(&mut self) -> ParseResult<()> {
        self.parse_binary(&["*", "/"], Self::parse_unary)
    }

    /// operand ( op operand )*
    fn parse_binary(&mut self, ops: &[&str], operand: Level<'a>) -> ParseResult<()> {
        operand(self)?;
        while self.peek_operator(ops) {
            self.advance();
            operand(self)?;
        }
        Ok(())
    }

    fn peek_operator(&self, ops: &[&str]) -> bool {
        self.peek()
            .is_some_and(|t| t.kind == TokenKind::Operator && ops.contains(&t.text))
    }

    /// Unary := (- | !) Unary | Primary
    fn parse_unary(&mut self) -> ParseResult<()> {
        self.nested(|p| {
            if p.peek_operator(&["-", "!"]) {
                p.advance();
                p.parse_unary()
            } else {
                p.parse_primary()
            }
        })
    }

    /// Primary := name [ [expr] ] [ (args) ] | literal | ( expr )
    fn parse_primary(&mut self) -> ParseResult<()> {
        let tok = match self.peek() {
            Some(tok) => *tok,
            None => {
                return Err(ParseError::ExpectedExpression {
                    found: self.found(),
                })
            }
        };

        if tok.kind == TokenKind::Identifier {
            self.advance();

            // Indexing: arr[i]
            if self.consume_if(TokenKind::Separator, "[") {
                self.parse_expression()?;
                self.expect_separator("]")?;
            }

            // Call: f(a, b)
            if self.consume_if(TokenKind::Separator, "(") {
                self.parse_comma_separated(|p| p.parse_expression(), ")")?;
                self.expect_separator(")")?;
            }
            return Ok(());
        }

        if is_literal(&tok) {
            self.advance();
            return Ok(());
        }

        if tok.is(TokenKind::Separator, "(") {
            self.advance();
            self.parse_expression()?;
            self.expect_separator(")")?;
            return Ok(());
        }

        Err(ParseError::ExpectedExpression {
            found: self.found(),
        })
    }
}
