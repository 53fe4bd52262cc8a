//! Name resolution pass run once before any sample is evaluated.
//!
//! Every identifier must be the bound variable or a table constant, and every
//! call must name a table function with the right number of arguments. After
//! this pass the evaluator can no longer meet an unknown name.

use super::symbols::{Symbol, SymbolTable};
use crate::ast::Expr;
use crate::error::EvalError;

/// Checks every name in `expr` against `table`, with `variable` bound on top.
pub fn resolve(expr: &Expr, table: &SymbolTable, variable: &str) -> Result<(), EvalError> {
    match expr {
        Expr::Number { .. } => Ok(()),
        Expr::Ident { name, .. } => {
            if name == variable {
                return Ok(());
            }
            match table.get(name) {
                Some(Symbol::Constant(_)) => Ok(()),
                Some(Symbol::Function(_)) => Err(EvalError::TypeError(format!(
                    "function '{}' used as a value",
                    name
                ))),
                None => Err(EvalError::UnknownIdentifier(name.clone())),
            }
        }
        Expr::Unary { operand, .. } => resolve(operand, table, variable),
        Expr::Binary { left, right, .. } => {
            resolve(left, table, variable)?;
            resolve(right, table, variable)
        }
        Expr::Compare { first, rest, .. } => {
            resolve(first, table, variable)?;
            rest.iter()
                .try_for_each(|(_, operand)| resolve(operand, table, variable))
        }
        Expr::Call { name, args, .. } => {
            if name == variable {
                return Err(EvalError::NotCallable(name.clone()));
            }
            match table.get(name) {
                Some(Symbol::Function(function)) if function.arity() == args.len() => args
                    .iter()
                    .try_for_each(|arg| resolve(arg, table, variable)),
                Some(Symbol::Function(function)) => Err(EvalError::WrongArgCount(
                    name.clone(),
                    function.arity(),
                    args.len(),
                )),
                Some(Symbol::Constant(_)) => Err(EvalError::NotCallable(name.clone())),
                None => Err(EvalError::UnknownIdentifier(name.clone())),
            }
        }
    }
}
