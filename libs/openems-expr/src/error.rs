//! # Expression Errors
//!
//! [`ParseError`] reports malformed text with the byte range it refers to.
//! [`EvalError`] covers everything that can go wrong from text to samples.
//!
//! ## Example
//!
//! ```rust
//! use openems_expr::{error::ParseError, Span};
//!
//! let error = ParseError::unexpected(")", "an operand", Span::new(4, 5));
//! assert_eq!(error.to_string(), "expected an operand, found ')' at byte 4");
//! ```

use std::fmt;

use thiserror::Error;

use crate::span::Span;

// =============================================================================
// PARSE ERROR
// =============================================================================

/// Syntax error at a location in the expression text.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub const fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// `found` where `expected` should have been.
    pub fn unexpected(found: &str, expected: &str, span: Span) -> Self {
        Self::new(
            ParseErrorKind::Unexpected {
                found: found.to_owned(),
                expected: expected.to_owned(),
            },
            span,
        )
    }

    /// Text ended while `expected` was still missing.
    pub fn end_of_input(expected: &str, span: Span) -> Self {
        Self::new(
            ParseErrorKind::EndOfInput {
                expected: expected.to_owned(),
            },
            span,
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.kind, self.span.start())
    }
}

impl std::error::Error for ParseError {}

/// What went wrong while parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// A token that cannot appear here
    Unexpected { found: String, expected: String },
    /// The text stopped early
    EndOfInput { expected: String },
    /// Numeric literal that does not fit an `f64`
    BadNumber { literal: String },
    /// Parentheses, signs or operator chains nested past the depth limit
    TooDeep { max: usize },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unexpected { found, expected } => {
                write!(f, "expected {expected}, found '{found}'")
            }
            Self::EndOfInput { expected } => {
                write!(f, "expected {expected}, found end of expression")
            }
            Self::BadNumber { literal } => write!(f, "malformed number '{literal}'"),
            Self::TooDeep { max } => write!(f, "nesting exceeds {max} levels"),
        }
    }
}

// =============================================================================
// EVAL ERROR
// =============================================================================

/// Errors from compiling or sampling an expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("syntax error: {0}")]
    Parse(#[from] ParseError),

    /// Name outside the symbol table and not `t`
    #[error("name '{0}' is not defined")]
    UnknownIdentifier(String),

    /// A constant (or `t`) followed by an argument list
    #[error("'{0}' is a value, not a function")]
    NotCallable(String),

    /// A function used where a number is required
    #[error("type error: {0}")]
    TypeError(String),

    /// `(name, expected, given)`
    #[error("{0}() takes {1} argument(s), {2} given")]
    WrongArgCount(String, usize, usize),
}

// =============================================================================
// TESTS
// =============================================================================
