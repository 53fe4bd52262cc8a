//! # Operator Parsing
//!
//! Precedence climbing over the arithmetic operators, with chained
//! comparisons on top.
//!
//! ## Operator Precedence
//!
//! | Precedence | Operators | Associativity |
//! |------------|-----------|---------------|
//! | 1 | < > <= >= == != | Chained |
//! | 2 | + - | Left |
//! | 3 | * / % | Left |
//! | 4 | - + (unary) | Right |
//! | 5 | ** | Right |
//! | 6 | () | Left |
//!
//! `**` binds tighter than a unary sign on its left but accepts one on its
//! right, so `-2**2 == -4` and `2**-1 == 0.5`.

use super::Parser;
use crate::ast::{BinaryOp, CompareOp, Expr, UnaryOp};
use crate::error::ParseError;
use crate::lexer::TokenKind;
use crate::span::Spanned;

// =============================================================================
// PRECEDENCE
// =============================================================================

/// Binding strength of arithmetic operators; later variants bind tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum Precedence {
    /// Comparison: `< > <= >= == !=`
    Comparison = 1,
    /// Addition/subtraction: `+ -`
    Term = 2,
    /// Multiplication/division/modulo: `* / %`
    Factor = 3,
    /// Unary: `- +`
    Unary = 4,
}

impl Precedence {
    /// Precedence of a left-associative arithmetic operator.
    fn of_binary(kind: TokenKind) -> Option<(Self, BinaryOp)> {
        match kind {
            TokenKind::Plus => Some((Self::Term, BinaryOp::Add)),
            TokenKind::Minus => Some((Self::Term, BinaryOp::Sub)),
            TokenKind::Star => Some((Self::Factor, BinaryOp::Mul)),
            TokenKind::Slash => Some((Self::Factor, BinaryOp::Div)),
            TokenKind::Percent => Some((Self::Factor, BinaryOp::Mod)),
            _ => None,
        }
    }

    /// Level of the right operand of a left-associative operator.
    fn next(&self) -> Self {
        match self {
            Self::Comparison => Self::Term,
            Self::Term => Self::Factor,
            Self::Factor | Self::Unary => Self::Unary,
        }
    }
}

fn compare_op(kind: TokenKind) -> Option<CompareOp> {
    match kind {
        TokenKind::Lt => Some(CompareOp::Lt),
        TokenKind::LtEq => Some(CompareOp::Le),
        TokenKind::Gt => Some(CompareOp::Gt),
        TokenKind::GtEq => Some(CompareOp::Ge),
        TokenKind::EqEq => Some(CompareOp::Eq),
        TokenKind::BangEq => Some(CompareOp::Ne),
        _ => None,
    }
}

// =============================================================================
// OPERATOR PARSING
// =============================================================================

impl Parser {
    /// `expression = comparison`
    pub(super) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_comparison()
    }

    /// Parse a comparison chain.
    ///
    /// ## Example
    ///
    /// ```text
    /// K*(t-C) >= 0
    /// 0 <= t < 1
    /// ```
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let first = self.parse_precedence(Precedence::Comparison.next())?;

        let mut rest = Vec::new();
        while let Some(op) = compare_op(self.peek_kind()) {
            self.advance();
            rest.push((op, self.parse_precedence(Precedence::Comparison.next())?));
        }

        if rest.is_empty() {
            return Ok(first);
        }

        let start = first.span().start();
        Ok(Expr::Compare {
            first: Box::new(first),
            rest,
            span: self.span_from(start),
        })
    }

    /// Parse arithmetic with minimum precedence.
    ///
    /// Each operator in a chain like `t+t+t` nests the tree one level deeper,
    /// so it counts against the depth limit the same way a parenthesis does.
    pub(super) fn parse_precedence(&mut self, min_prec: Precedence) -> Result<Expr, ParseError> {
        let depth = self.depth;
        let result = self.parse_chain(min_prec);
        self.depth = depth;
        result
    }

    fn parse_chain(&mut self, min_prec: Precedence) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;

        while let Some((prec, op)) = Precedence::of_binary(self.peek_kind()) {
            if prec < min_prec {
                break;
            }
            self.descend()?;
            self.advance();

            let right = self.parse_precedence(prec.next())?;
            let start = left.span().start();
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                span: self.span_from(start),
            };
        }

        Ok(left)
    }

    /// Signs, guarded against runaway nesting like `------...t`.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// unary = ("-" | "+") unary | power
    /// ```
    pub(super) fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        self.descend()?;
        let result = self.parse_unary_inner();
        self.ascend();
        result
    }

    fn parse_unary_inner(&mut self) -> Result<Expr, ParseError> {
        let op = match self.peek_kind() {
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Plus => UnaryOp::Pos,
            _ => return self.parse_power(),
        };

        let start = self.advance().span.start();
        let operand = self.parse_unary()?;

        Ok(Expr::Unary {
            op,
            operand: Box::new(operand),
            span: self.span_from(start),
        })
    }

    /// Parse power expression.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// power = call ("**" unary)?
    /// ```
    fn parse_power(&mut self) -> Result<Expr, ParseError> {
        let base = self.parse_call()?;

        if !self.match_token(TokenKind::StarStar) {
            return Ok(base);
        }

        let exponent = self.parse_unary()?;
        let start = base.span().start();
        Ok(Expr::Binary {
            op: BinaryOp::Pow,
            left: Box::new(base),
            right: Box::new(exponent),
            span: self.span_from(start),
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
