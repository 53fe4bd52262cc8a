//! # Expression Lexer
//!
//! Tokenizes excitation expressions such as
//! `0.5 + 0.5*(K*(t-C)>=0)*exp(-t*t)` into tokens.
//!
//! ## Example
//!
//! ```rust
//! use openems_expr::lexer::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("exp(-t)").tokenize();
//! assert_eq!(tokens[0].kind, TokenKind::Identifier);
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//! ```

mod cursor;
mod token;

pub use cursor::Cursor;
pub use token::{Token, TokenKind};

use crate::span::Span;

// =============================================================================
// LEXER
// =============================================================================

/// Expression lexer.
///
/// Converts source text into a stream of tokens. Characters outside the
/// grammar become [`TokenKind::Error`] tokens; the parser reports them.
pub struct Lexer<'a> {
    source: &'a str,
    cursor: Cursor<'a>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            cursor: Cursor::new(source),
            tokens: Vec::new(),
        }
    }

    /// Splits the whole source into tokens, ending with [`TokenKind::Eof`].
    pub fn tokenize(mut self) -> Vec<Token> {
        while !self.cursor.is_eof() {
            self.cursor.advance_while(char::is_whitespace);
            if self.cursor.is_eof() {
                break;
            }
            self.scan_token();
        }

        self.tokens.push(Token::end(self.cursor.position()));

        self.tokens
    }

    fn scan_token(&mut self) {
        let start = self.cursor.position();
        let c = match self.cursor.advance() {
            Some(c) => c,
            None => return,
        };

        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,

            '*' => self.either('*', TokenKind::StarStar, TokenKind::Star),
            '<' => self.either('=', TokenKind::LtEq, TokenKind::Lt),
            '>' => self.either('=', TokenKind::GtEq, TokenKind::Gt),
            '=' => self.either('=', TokenKind::EqEq, TokenKind::Error),
            '!' => self.either('=', TokenKind::BangEq, TokenKind::Error),

            '0'..='9' => return self.scan_number(start),
            '.' if self.cursor.peek().is_some_and(|n| n.is_ascii_digit()) => {
                return self.scan_number(start)
            }

            'a'..='z' | 'A'..='Z' | '_' => return self.scan_identifier(start),

            _ => TokenKind::Error,
        };

        self.push(kind, start);
    }

    /// Consume `next` if present and pick the two-character kind.
    fn either(&mut self, next: char, matched: TokenKind, single: TokenKind) -> TokenKind {
        if self.cursor.peek() == Some(next) {
            self.cursor.advance();
            matched
        } else {
            single
        }
    }

    /// Scan a number literal (`12`, `3.5`, `.5`, `5.`, `1e-09`, `2.5E+3`).
    fn scan_number(&mut self, start: usize) {
        self.cursor.advance_while(|c| c.is_ascii_digit());

        if self.cursor.peek() == Some('.') {
            self.cursor.advance();
            self.cursor.advance_while(|c| c.is_ascii_digit());
        }

        // Exponent only when digits follow, so `2e` stays `2` then `e`
        if matches!(self.cursor.peek(), Some('e') | Some('E')) {
            let digit_after_sign = matches!(self.cursor.peek_next(), Some('+') | Some('-'))
                && self.source[self.cursor.position()..]
                    .chars()
                    .nth(2)
                    .is_some_and(|c| c.is_ascii_digit());
            let digit_after_e = self.cursor.peek_next().is_some_and(|c| c.is_ascii_digit());

            if digit_after_e || digit_after_sign {
                self.cursor.advance(); // e
                if digit_after_sign {
                    self.cursor.advance(); // sign
                }
                self.cursor.advance_while(|c| c.is_ascii_digit());
            }
        }

        self.push(TokenKind::Number, start);
    }

    /// Scan an identifier.
    fn scan_identifier(&mut self, start: usize) {
        self.cursor.advance_while(|c| c.is_ascii_alphanumeric() || c == '_');
        self.push(TokenKind::Identifier, start);
    }

    fn push(&mut self, kind: TokenKind, start: usize) {
        let end = self.cursor.position();
        let text = &self.source[start..end];
        self.tokens
            .push(Token::new(kind, Span::new(start, end), text.to_string()));
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).tokenize().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_tokenize_product() {
        let tokens = Lexer::new("t * t").tokenize();

        // t, *, t, EOF
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].text, "t");
        assert_eq!(tokens[1].kind, TokenKind::Star);
        assert_eq!(tokens[2].kind, TokenKind::Identifier);
        assert_eq!(tokens[3].kind, TokenKind::Eof);
    }

    #[test]
    fn test_tokenize_power_vs_star() {
        assert_eq!(
            kinds("a**2*b"),
            vec![
                TokenKind::Identifier,
                TokenKind::StarStar,
                TokenKind::Number,
                TokenKind::Star,
                TokenKind::Identifier,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_tokenize_comparisons() {
        assert_eq!(
            kinds("== != <= >= < >"),
            vec![
                TokenKind::EqEq,
                TokenKind::BangEq,
                TokenKind::LtEq,
                TokenKind::GtEq,
                TokenKind::Lt,
                TokenKind::Gt,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_tokenize_numbers() {
        for text in ["3.14", "1e-09", "2.5E+3", ".5", "5.", "36219093.53"] {
            let tokens = Lexer::new(text).tokenize();
            assert_eq!(tokens[0].kind, TokenKind::Number, "{text}");
            assert_eq!(tokens[0].text, text);
            assert!(tokens[1].is_eof(), "{text} should be a single token");
        }
    }

    #[test]
    fn test_tokenize_dangling_exponent() {
        let tokens = Lexer::new("2e").tokenize();
        assert_eq!(tokens[0].text, "2");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text, "e");
    }

    #[test]
    fn test_tokenize_unknown_characters() {
        assert_eq!(kinds("t.x")[1], TokenKind::Error);
        assert_eq!(kinds("a = b")[1], TokenKind::Error);
        assert_eq!(kinds("t ^ 2")[1], TokenKind::Error);
        assert_eq!(kinds("'t'")[0], TokenKind::Error);
    }

    #[test]
    fn test_tokenize_spans() {
        let tokens = Lexer::new("  sqrt(t)").tokenize();
        assert_eq!(tokens[0].span, Span::new(2, 6));
        assert_eq!(tokens[4].span, Span::at(9));
    }
}
