//! Evaluator for parsed expressions.
//!
//! An expression is compiled once (parse, merge symbol tables, resolve every
//! name) and can then be evaluated at any number of time points.

pub mod resolution;
pub mod symbols;

use crate::ast::{Expr, UnaryOp};
use crate::error::EvalError;
use symbols::{Symbol, SymbolTable};

/// Name of the sampled time variable.
pub const TIME_VARIABLE: &str = "t";

/// A parsed and resolved expression over [`TIME_VARIABLE`].
///
/// # Examples
/// ```
/// use openems_expr::{CompiledExpression, SymbolTable};
///
/// let context = SymbolTable::new().with_constant("scale", 2.0);
/// let expr = CompiledExpression::compile("scale*t", Some(&context)).unwrap();
/// assert_eq!(expr.eval_at(3.0).unwrap(), 6.0);
/// assert_eq!(expr.source(), "scale*t");
/// ```
#[derive(Debug, Clone)]
pub struct CompiledExpression {
    source: String,
    ast: Expr,
    symbols: SymbolTable,
}

impl CompiledExpression {
    /// Parses `source` and resolves its names against the standard table
    /// merged with `context` (context entries win; `t` shadows both).
    pub fn compile(source: &str, context: Option<&SymbolTable>) -> Result<Self, EvalError> {
        let ast = crate::parse(source)?;

        let mut symbols = SymbolTable::standard();
        if let Some(extra) = context {
            symbols.extend(extra);
        }

        resolution::resolve(&ast, &symbols, TIME_VARIABLE)?;

        Ok(Self {
            source: source.to_string(),
            ast,
            symbols,
        })
    }

    /// Expression text as given.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parsed tree.
    pub fn ast(&self) -> &Expr {
        &self.ast
    }

    /// Evaluates the expression with `t` bound to one sample.
    pub fn eval_at(&self, t: f64) -> Result<f64, EvalError> {
        self.eval(&self.ast, t)
    }

    /// Evaluates the expression at every sample of `t`.
    pub fn eval_many(&self, t: &[f64]) -> Result<Vec<f64>, EvalError> {
        t.iter().map(|&sample| self.eval_at(sample)).collect()
    }

    fn eval(&self, expr: &Expr, t: f64) -> Result<f64, EvalError> {
        match expr {
            Expr::Number { value, .. } => Ok(*value),
            Expr::Ident { name, .. } if name == TIME_VARIABLE => Ok(t),
            Expr::Ident { name, .. } => match self.symbols.get(name) {
                Some(Symbol::Constant(value)) => Ok(*value),
                Some(Symbol::Function(_)) => Err(EvalError::TypeError(format!(
                    "function '{}' used as a value",
                    name
                ))),
                None => Err(EvalError::UnknownIdentifier(name.clone())),
            },
            Expr::Unary { op, operand, .. } => {
                let v = self.eval(operand, t)?;
                Ok(match op {
                    UnaryOp::Pos => v,
                    UnaryOp::Neg => -v,
                })
            }
            Expr::Binary {
                op, left, right, ..
            } => {
                let l = self.eval(left, t)?;
                let r = self.eval(right, t)?;
                Ok(op.apply(l, r))
            }
            Expr::Compare { first, rest, .. } => {
                let mut lhs = self.eval(first, t)?;
                for (op, operand) in rest {
                    let rhs = self.eval(operand, t)?;
                    if !op.holds(lhs, rhs) {
                        return Ok(0.0);
                    }
                    lhs = rhs;
                }
                Ok(1.0)
            }
            Expr::Call { name, args, .. } => {
                let function = match self.symbols.get(name) {
                    Some(Symbol::Function(function)) => function,
                    Some(Symbol::Constant(_)) => {
                        return Err(EvalError::NotCallable(name.clone()))
                    }
                    None => return Err(EvalError::UnknownIdentifier(name.clone())),
                };
                let values = args
                    .iter()
                    .map(|arg| self.eval(arg, t))
                    .collect::<Result<Vec<_>, _>>()?;
                function.call(&values).ok_or_else(|| {
                    EvalError::WrongArgCount(name.clone(), function.arity(), values.len())
                })
            }
        }
    }
}

#[cfg(test)]
mod tests;
