//! # Expression Parser
//!
//! Recursive descent parser producing an [`Expr`] tree.
//!
//! ## Example
//!
//! ```rust
//! use openems_expr::lexer::Lexer;
//! use openems_expr::parser::Parser;
//!
//! let tokens = Lexer::new("1 + 2 * t").tokenize();
//! let expr = Parser::new(tokens).parse().unwrap();
//! ```

mod operators;
mod primaries;

use crate::ast::Expr;
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Token, TokenKind};
use crate::span::Span;
use config::constants::MAX_EXPRESSION_DEPTH;

// =============================================================================
// PARSER
// =============================================================================

/// Recursive descent parser for excitation expressions.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    /// Nesting of signs, parentheses and operator chains, bounded by `MAX_EXPRESSION_DEPTH`
    depth: usize,
}

impl Parser {
    /// Create a new parser from lexer output.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map_or(true, |t| !t.is_eof()) {
            let end = tokens.last().map_or(0, |t| t.span.end());
            tokens.push(Token::end(end));
        }
        Self {
            tokens,
            current: 0,
            depth: 0,
        }
    }

    /// Parse the whole token stream as one expression.
    ///
    /// Trailing tokens after a complete expression are an error.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expression()?;
        if !self.is_at_end() {
            return Err(self.error_here("an operator"));
        }
        Ok(expr)
    }

    // =========================================================================
    // CURSOR
    // =========================================================================

    /// Token under the cursor.
    fn peek(&self) -> &Token {
        let index = self.current.min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// Check if at end of input.
    fn is_at_end(&self) -> bool {
        self.peek_kind() == TokenKind::Eof
    }

    /// Advance to next token, returning the consumed one.
    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    /// Most recently consumed token.
    fn previous(&self) -> &Token {
        &self.tokens[self.current.saturating_sub(1)]
    }

    /// Consumes a token of `kind` or fails naming it.
    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_here(&format!("'{}'", kind.symbol())))
        }
    }

    /// Consumes a token of `kind` if present.
    fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    /// Error describing the current token.
    fn error_here(&self, expected: &str) -> ParseError {
        let token = self.peek();
        if token.is_eof() {
            ParseError::end_of_input(expected, token.span)
        } else {
            ParseError::unexpected(&token.text, expected, token.span)
        }
    }

    /// Create span from start offset to the end of the previous token.
    fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.previous().span.end())
    }

    /// Enter one nesting level.
    fn descend(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_EXPRESSION_DEPTH {
            return Err(ParseError::new(
                ParseErrorKind::TooDeep {
                    max: MAX_EXPRESSION_DEPTH,
                },
                self.peek().span,
            ));
        }
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn parse(source: &str) -> Result<Expr, ParseError> {
        Parser::new(Lexer::new(source).tokenize()).parse()
    }

    #[test]
    fn test_parse_empty() {
        let err = parse("").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::EndOfInput { .. }));
    }

    #[test]
    fn test_parse_trailing_tokens() {
        let err = parse("t t").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::Unexpected { .. }));
        assert_eq!(err.span, Span::new(2, 3));
    }

    #[test]
    fn test_parse_unbalanced_paren() {
        let err = parse("(t + 1").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::EndOfInput { .. }));
        assert!(parse("t + 1)").is_err());
    }

    #[test]
    fn test_parse_without_eof_token() {
        let mut tokens = Lexer::new("t").tokenize();
        tokens.pop();
        assert!(Parser::new(tokens).parse().is_ok());
    }

    #[test]
    fn test_parse_depth_limit() {
        let deep = format!("{}t{}", "(".repeat(MAX_EXPRESSION_DEPTH + 1), ")".repeat(MAX_EXPRESSION_DEPTH + 1));
        let err = parse(&deep).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::TooDeep { .. }));

        let shallow = format!("{}t{}", "(".repeat(16), ")".repeat(16));
        assert!(parse(&shallow).is_ok());
    }
}
