//! Lexical tokens.

use crate::span::{Span, Spanned};

/// One lexeme with its kind and location.
///
/// `text` is the exact slice of the source, so number literals are parsed
/// from what the user wrote rather than re-formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span, text: String) -> Self {
        Self { kind, span, text }
    }

    /// End-of-input marker appended after the last lexeme.
    pub fn end(offset: usize) -> Self {
        Self::new(TokenKind::Eof, Span::at(offset), String::new())
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

/// Token categories of the expression grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `10`, `.5`, `0.47047`, `1e-09`
    Number,
    /// `t`, `exp`, `scale`
    Identifier,

    Plus,
    Minus,
    Star,
    StarStar,
    Slash,
    Percent,

    EqEq,
    BangEq,
    Lt,
    Gt,
    LtEq,
    GtEq,

    LParen,
    RParen,
    Comma,

    Eof,
    /// A character outside the grammar (`.`, `[`, `'`, a lone `=` ...)
    Error,
}

impl TokenKind {
    /// How the token is spelled in error messages.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Identifier => "name",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::StarStar => "**",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::EqEq => "==",
            Self::BangEq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Comma => ",",
            Self::Eof => "end of expression",
            Self::Error => "invalid character",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        assert_eq!(TokenKind::StarStar.symbol(), "**");
        assert_eq!(TokenKind::GtEq.symbol(), ">=");
        assert_eq!(TokenKind::Identifier.symbol(), "name");
    }

    #[test]
    fn test_end_token() {
        let token = Token::end(12);
        assert!(token.is_eof());
        assert_eq!(token.span(), Span::at(12));
        assert!(token.text.is_empty());
    }
}
