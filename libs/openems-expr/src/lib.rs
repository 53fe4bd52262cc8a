//! # openEMS Expression
//!
//! Allow-listed arithmetic expressions for custom time-domain excitations.
//! Expressions are parsed by a dedicated grammar; there is no general-purpose
//! evaluation facility, so nothing beyond arithmetic over the symbol table
//! is reachable from expression text.
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → Expr → resolve names → evaluate(t)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use openems_expr::evaluate_expression;
//!
//! let (t, values) = evaluate_expression("t*t", &[0.0, 1.0, 2.0], None).unwrap();
//! assert_eq!(t, vec![0.0, 1.0, 2.0]);
//! assert_eq!(values, vec![0.0, 1.0, 4.0]);
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod span;

// Re-export public API
pub use ast::{BinaryOp, CompareOp, Expr, UnaryOp};
pub use error::{EvalError, ParseError, ParseErrorKind};
pub use evaluator::symbols::{Function, Symbol, SymbolTable};
pub use evaluator::{CompiledExpression, TIME_VARIABLE};
pub use span::{Span, Spanned};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parse expression text into an [`Expr`] tree.
///
/// ## Example
///
/// ```rust
/// use openems_expr::{parse, Expr};
///
/// let expr = parse("exp(-t)").unwrap();
/// assert!(matches!(expr, Expr::Call { .. }));
/// assert!(parse("exp(-t").is_err());
/// ```
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    let tokens = lexer::Lexer::new(source).tokenize();
    parser::Parser::new(tokens).parse()
}

/// Evaluate `source` at every time point in `t`.
///
/// Names resolve against `pi`, `sqrt`, `log` (natural) and `exp`, merged
/// with `context` when given; `t` is bound to each sample in turn. Unknown
/// names fail before any sample is evaluated.
///
/// ## Returns
///
/// `(t, values)` with `t` copied unchanged.
///
/// ## Example
///
/// ```rust
/// use openems_expr::{evaluate_expression, EvalError, SymbolTable};
///
/// let context = SymbolTable::new().with_constant("scale", 2.0);
/// let (_, values) = evaluate_expression("scale*t", &[1.0, 2.0], Some(&context)).unwrap();
/// assert_eq!(values, vec![2.0, 4.0]);
///
/// let err = evaluate_expression("scale*t", &[1.0], None).unwrap_err();
/// assert!(matches!(err, EvalError::UnknownIdentifier(_)));
/// ```
pub fn evaluate_expression(
    source: &str,
    t: &[f64],
    context: Option<&SymbolTable>,
) -> Result<(Vec<f64>, Vec<f64>), EvalError> {
    let expr = CompiledExpression::compile(source, context)?;
    let values = expr.eval_many(t)?;
    tracing::debug!(samples = t.len(), "evaluated expression");
    Ok((t.to_vec(), values))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_square() {
        let (t, values) = evaluate_expression("t*t", &[0.0, 1.0, 2.0], None).unwrap();
        assert_eq!(t, vec![0.0, 1.0, 2.0]);
        assert_eq!(values, vec![0.0, 1.0, 4.0]);
    }

    #[test]
    fn test_evaluate_with_context() {
        let context: SymbolTable = [("scale", 2.0)].into_iter().collect();
        let (_, values) = evaluate_expression("scale*t", &[1.0, 2.0], Some(&context)).unwrap();
        assert_eq!(values, vec![2.0, 4.0]);
    }

    #[test]
    fn test_unknown_name_fails_even_without_samples() {
        let err = evaluate_expression("secret", &[], None).unwrap_err();
        assert_eq!(err, EvalError::UnknownIdentifier("secret".to_string()));
    }

    #[test]
    fn test_attribute_access_is_not_in_grammar() {
        let err = evaluate_expression("t.__class__", &[1.0], None).unwrap_err();
        assert!(matches!(err, EvalError::Parse(_)));
    }
}
