//! # Expression AST
//!
//! Tree produced by the parser and walked by the evaluator. Only numbers,
//! names, arithmetic, comparisons and named-function calls exist; there is
//! no attribute access, indexing or string value anywhere in the tree.

use crate::span::{Span, Spanned};
use serde::{Deserialize, Serialize};

/// An expression node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Numeric literal.
    Number { value: f64, span: Span },
    /// Named constant or the time variable.
    Ident { name: String, span: Span },
    /// `+x` or `-x`.
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
        span: Span,
    },
    /// Arithmetic binary operation.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
        span: Span,
    },
    /// Comparison chain `a < b <= c`, true when every link holds.
    Compare {
        first: Box<Expr>,
        rest: Vec<(CompareOp, Expr)>,
        span: Span,
    },
    /// Call of a named function.
    Call {
        name: String,
        args: Vec<Expr>,
        span: Span,
    },
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        match self {
            Expr::Number { span, .. }
            | Expr::Ident { span, .. }
            | Expr::Unary { span, .. }
            | Expr::Binary { span, .. }
            | Expr::Compare { span, .. }
            | Expr::Call { span, .. } => *span,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

impl BinaryOp {
    /// Applies the operator with IEEE-754 semantics.
    ///
    /// `%` takes the sign of the divisor, so `-7 % 3 == 2`.
    pub fn apply(self, l: f64, r: f64) -> f64 {
        match self {
            BinaryOp::Add => l + r,
            BinaryOp::Sub => l - r,
            BinaryOp::Mul => l * r,
            BinaryOp::Div => l / r,
            BinaryOp::Mod => l - r * (l / r).floor(),
            BinaryOp::Pow => l.powf(r),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    Pos,
    Neg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

impl CompareOp {
    pub fn holds(self, l: f64, r: f64) -> bool {
        match self {
            CompareOp::Lt => l < r,
            CompareOp::Le => l <= r,
            CompareOp::Gt => l > r,
            CompareOp::Ge => l >= r,
            CompareOp::Eq => l == r,
            CompareOp::Ne => l != r,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modulo_follows_divisor_sign() {
        assert_eq!(BinaryOp::Mod.apply(7.0, 3.0), 1.0);
        assert_eq!(BinaryOp::Mod.apply(-7.0, 3.0), 2.0);
        assert_eq!(BinaryOp::Mod.apply(7.0, -3.0), -2.0);
        assert!(BinaryOp::Mod.apply(1.0, 0.0).is_nan());
    }

    #[test]
    fn test_division_by_zero_is_ieee() {
        assert_eq!(BinaryOp::Div.apply(1.0, 0.0), f64::INFINITY);
        assert!(BinaryOp::Div.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_compare_nan_is_false() {
        assert!(!CompareOp::Ge.holds(f64::NAN, 0.0));
        assert!(!CompareOp::Lt.holds(f64::NAN, 0.0));
        assert!(CompareOp::Ne.holds(f64::NAN, f64::NAN));
    }
}
