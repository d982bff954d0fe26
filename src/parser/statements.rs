use crate::lexar::token::TokenKind;
use crate::parser::declarations::TypeKeyword;
use crate::parser::{ParseError, ParseResult, Parser};
use log::trace;

impl<'a> Parser<'a> {
    /// Dispatches on the current token. A leading identifier is a call when
    /// the token after it is `(`, otherwise an assignment.
    pub fn parse_statement(&mut self) -> ParseResult<()> {
        self.nested(|p| p.dispatch_statement())
    }

    fn dispatch_statement(&mut self) -> ParseResult<()> {
        let tok = match self.peek() {
            Some(tok) => *tok,
            None => {
                return Err(ParseError::UnrecognizedStatement {
                    found: self.found(),
                })
            }
        };
        trace!("statement at {}", tok);

        match (tok.kind, tok.text) {
            (TokenKind::Keyword, "if") => self.parse_if_stmt(),
            (TokenKind::Keyword, "while") => self.parse_while_stmt(),
            (TokenKind::Keyword, "do") => self.parse_do_while_stmt(),
            (TokenKind::Keyword, "for") => self.parse_for_stmt(),
            (TokenKind::Keyword, "switch") => self.parse_switch_stmt(),
            (TokenKind::Keyword, "function") => self.parse_function_decl(),
            (TokenKind::Keyword, "return") => self.parse_return(),
            (TokenKind::Keyword, "break") | (TokenKind::Keyword, "continue") => self.parse_jump(),
            (TokenKind::Keyword, "print") => self.parse_print(),
            (TokenKind::Separator, "{") => self.parse_braced_block(),
            (TokenKind::Keyword, word) if TypeKeyword::from_keyword(word).is_some() => {
                self.parse_typed_decl()
            }
            (TokenKind::Identifier, _) => {
                let is_call = self
                    .peek_nth(1)
                    .is_some_and(|next| next.is(TokenKind::Separator, "("));
                if is_call {
                    self.parse_call_stmt()
                } else {
                    self.parse_assignment()?;
                    self.expect_separator(";")?;
                    Ok(())
                }
            }
            _ => Err(ParseError::UnrecognizedStatement {
                found: self.found(),
            }),
        }
    }

    /// Syntax: `if (cond) { ... } [else { ... }]`
    pub fn parse_if_stmt(&mut self) -> ParseResult<()> {
        self.expect_keyword("if")?;
        self.parse_condition()?;
        self.parse_braced_block()?;

        if self.consume_if(TokenKind::Keyword, "else") {
            self.parse_braced_block()?;
        }
        Ok(())
    }

    /// Syntax: `while (cond) { ... }`
    pub fn parse_while_stmt(&mut self) -> ParseResult<()> {
        self.expect_keyword("while")?;
        self.parse_condition()?;
        self.parse_braced_block()
    }

    /// Syntax: `do { ... } while (cond);`
    pub fn parse_do_while_stmt(&mut self) -> ParseResult<()> {
        self.expect_keyword("do")?;
        self.parse_braced_block()?;
        self.expect_keyword("while")?;
        self.parse_condition()?;
        self.expect_separator(";")?;
        Ok(())
    }

    /// Syntax: `for (i = 0; i < n; i = i + 1) { ... }`
    pub fn parse_for_stmt(&mut self) -> ParseResult<()> {
        self.expect_keyword("for")?;
        self.expect_separator("(")?;
        self.parse_assignment()?;
        self.expect_separator(";")?;
        self.parse_expression()?;
        self.expect_separator(";")?;
        self.parse_assignment()?;
        self.expect_separator(")")?;
        self.parse_braced_block()
    }

    /// Syntax:
    ///   switch (expr) {
    ///       case expr: statements...
    ///       default: statements...
    ///   }
    /// `default` is optional and must come after every `case`.
    pub fn parse_switch_stmt(&mut self) -> ParseResult<()> {
        self.expect_keyword("switch")?;
        self.parse_condition()?;
        self.expect_separator("{")?;

        while self.consume_if(TokenKind::Keyword, "case") {
            self.parse_expression()?;
            self.expect_separator(":")?;
            while self.peek().is_some()
                && !self.peek_is(TokenKind::Keyword, "case")
                && !self.peek_is(TokenKind::Keyword, "default")
                && !self.peek_is(TokenKind::Separator, "}")
            {
                self.parse_statement()?;
            }
        }

        if self.consume_if(TokenKind::Keyword, "default") {
            self.expect_separator(":")?;
            while self.peek().is_some() && !self.peek_is(TokenKind::Separator, "}") {
                self.parse_statement()?;
            }
        }

        self.expect_separator("}")?;
        Ok(())
    }

    /// Syntax: `return expr;`
    pub fn parse_return(&mut self) -> ParseResult<()> {
        self.expect_keyword("return")?;
        self.parse_expression()?;
        self.expect_separator(";")?;
        Ok(())
    }

    /// Syntax: `break;` or `continue;`
    pub fn parse_jump(&mut self) -> ParseResult<()> {
        if !self.consume_if(TokenKind::Keyword, "break")
            && !self.consume_if(TokenKind::Keyword, "continue")
        {
            return Err(self.unexpected("'break' or 'continue'"));
        }
        self.expect_separator(";")?;
        Ok(())
    }

    /// Syntax: `print(expr);`
    pub fn parse_print(&mut self) -> ParseResult<()> {
        self.expect_keyword("print")?;
        self.parse_condition()?;
        self.expect_separator(";")?;
        Ok(())
    }

    /// Syntax: `name(arg1, arg2, ...);`
    pub fn parse_call_stmt(&mut self) -> ParseResult<()> {
        self.expect_ident()?;
        self.expect_separator("(")?;
        self.parse_comma_separated(|p| p.parse_expression(), ")")?;
        self.expect_separator(")")?;
        self.expect_separator(";")?;
        Ok(())
    }

    /// Syntax: `name = expr` or `name[index] = expr`, without the `;`.
    /// Shared by plain assignment statements and `for` headers.
    pub fn parse_assignment(&mut self) -> ParseResult<()> {
        self.expect_ident()?;

        if self.consume_if(TokenKind::Separator, "[") {
            self.parse_expression()?;
            self.expect_separator("]")?;
        }

        self.expect_value(TokenKind::Operator, "=")?;
        self.parse_expression()
    }

    /// `( expr )` as used by if, while, switch and print.
    fn parse_condition(&mut self) -> ParseResult<()> {
        self.expect_separator("(")?;
        self.parse_expression()?;
        self.expect_separator(")")?;
        Ok(())
    }

    /// Parses statements up to the matching `}`, expecting the opening brace first.
    /// Used in conditionals, functions, loops and bare blocks.
    pub fn parse_braced_block(&mut self) -> ParseResult<()> {
        self.expect_separator("{")?;
        while let Some(tok) = self.peek() {
            if tok.is(TokenKind::Separator, "}") {
                break;
            }
            self.parse_statement()?;
        }
        self.expect_separator("}")?;
        Ok(())
    }
}
