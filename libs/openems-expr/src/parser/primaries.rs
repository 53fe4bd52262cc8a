//! # Primary Expression Parsing
//!
//! Parses primary expressions: numbers, names, calls and parenthesized
//! expressions.
//!
//! ## Responsibilities
//!
//! - Number literals: `42`, `0.47047`, `1e-09`
//! - Identifiers: `t`, `pi`, `scale`
//! - Calls: `exp(-t*t)`, `sqrt(2)`
//! - Parenthesized expressions: `(t - 1)`

use super::Parser;
use crate::ast::Expr;
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::TokenKind;

impl Parser {
    /// Parse a primary, followed by an argument list when it is a name.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// call = identifier "(" [expression ("," expression)*] ")" | primary
    /// ```
    pub(super) fn parse_call(&mut self) -> Result<Expr, ParseError> {
        let primary = self.parse_primary()?;
        let bare_name = self.previous().kind == TokenKind::Identifier;

        let (name, start) = match &primary {
            Expr::Ident { name, span } if bare_name && self.check(TokenKind::LParen) => {
                (name.clone(), span.start())
            }
            _ => return Ok(primary),
        };

        self.advance(); // (
        let mut args = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                args.push(self.parse_expression()?);
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen)?;

        Ok(Expr::Call {
            name,
            args,
            span: self.span_from(start),
        })
    }

    /// Parse a primary expression.
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.peek_kind() {
            TokenKind::Number => {
                let token = self.advance();
                let value = token.text.parse::<f64>().map_err(|_| {
                    ParseError::new(
                        ParseErrorKind::BadNumber {
                            literal: token.text.clone(),
                        },
                        token.span,
                    )
                })?;
                Ok(Expr::Number {
                    value,
                    span: token.span,
                })
            }
            TokenKind::Identifier => {
                let token = self.advance();
                Ok(Expr::Ident {
                    name: token.text,
                    span: token.span,
                })
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(inner)
            }
            _ => Err(self.error_here("an operand")),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
