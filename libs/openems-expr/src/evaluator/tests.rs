//! Tests for compiled expression evaluation.

use super::symbols::Function;
use super::*;
use approx::assert_relative_eq;

fn eval(source: &str, t: f64) -> f64 {
    CompiledExpression::compile(source, None)
        .and_then(|expr| expr.eval_at(t))
        .unwrap_or_else(|e| panic!("{source}: {e}"))
}

#[test]
fn arithmetic_follows_precedence() {
    assert_eq!(eval("1 + 2 * 3", 0.0), 7.0);
    assert_eq!(eval("(1 + 2) * 3", 0.0), 9.0);
    assert_eq!(eval("10 - 4 - 3", 0.0), 3.0);
    assert_eq!(eval("2 ** 3 ** 2", 0.0), 512.0);
    assert_eq!(eval("-2 ** 2", 0.0), -4.0);
    assert_eq!(eval("2 ** -1", 0.0), 0.5);
    assert_eq!(eval("7 % 3", 0.0), 1.0);
}

#[test]
fn time_variable_is_bound() {
    assert_eq!(eval("t*t", 3.0), 9.0);
    assert_eq!(eval("t--1", 1.0), 2.0);
}

#[test]
fn comparisons_are_indicators() {
    assert_eq!(eval("t >= 0", 0.0), 1.0);
    assert_eq!(eval("t < 0", 0.0), 0.0);
    assert_eq!(eval("2*(t >= 1) + 1", 5.0), 3.0);
    assert_eq!(eval("0 <= t < 1", 0.5), 1.0);
    assert_eq!(eval("0 <= t < 1", 1.5), 0.0);
    assert_eq!(eval("t == 2", 2.0), 1.0);
    assert_eq!(eval("t != 2", 2.0), 0.0);
}

#[test]
fn standard_functions() {
    assert_relative_eq!(eval("exp(log(t))", 5.0), 5.0, epsilon = 1e-12);
    assert_relative_eq!(eval("sqrt(t)", 2.0), std::f64::consts::SQRT_2);
    assert_relative_eq!(eval("pi", 0.0), std::f64::consts::PI);
}

#[test]
fn ieee_semantics_instead_of_errors() {
    assert_eq!(eval("1/t", 0.0), f64::INFINITY);
    assert!(eval("sqrt(t)", -1.0).is_nan());
    assert!(eval("log(t)", -1.0).is_nan());
}

#[test]
fn context_overrides_and_extends() {
    let context = SymbolTable::new()
        .with_constant("pi", 3.0)
        .with_constant("t", 100.0)
        .with_function("hypot", Function::new(2, |a| a[0].hypot(a[1])));
    let expr = CompiledExpression::compile("pi + hypot(t, 4)", Some(&context)).unwrap();
    // t shadows the context entry of the same name
    assert_eq!(expr.eval_at(3.0).unwrap(), 8.0);
}

#[test]
fn compile_rejects_unknown_names_up_front() {
    let err = CompiledExpression::compile("scale*t", None).unwrap_err();
    assert_eq!(err, EvalError::UnknownIdentifier("scale".to_string()));
}

#[test]
fn compile_reports_syntax_errors() {
    let err = CompiledExpression::compile("t * (1 +", None).unwrap_err();
    assert!(matches!(err, EvalError::Parse(_)));
}

#[test]
fn eval_many_preserves_order() {
    let expr = CompiledExpression::compile("t + 1", None).unwrap();
    assert_eq!(expr.eval_many(&[3.0, 1.0, 2.0]).unwrap(), vec![4.0, 2.0, 3.0]);
    assert!(expr.eval_many(&[]).unwrap().is_empty());
}

#[test]
fn compiled_expression_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CompiledExpression>();
}
