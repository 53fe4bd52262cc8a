//! Symbol table holding the names an expression may reference.
//!
//! Nothing outside this table is reachable from an expression: a name is
//! either a numeric constant, a registered function, or an error.

use std::collections::HashMap;
use std::f64::consts::PI;
use std::fmt;
use std::sync::Arc;

/// Callable registered in a [`SymbolTable`].
#[derive(Clone)]
pub struct Function {
    arity: usize,
    body: Arc<dyn Fn(&[f64]) -> f64 + Send + Sync>,
}

impl Function {
    /// Wraps a closure taking exactly `arity` arguments.
    pub fn new(arity: usize, body: impl Fn(&[f64]) -> f64 + Send + Sync + 'static) -> Self {
        Self {
            arity,
            body: Arc::new(body),
        }
    }

    /// Wraps a one-argument function such as `f64::exp`.
    pub fn unary(body: fn(f64) -> f64) -> Self {
        Self::new(1, move |args| body(args[0]))
    }

    /// Number of arguments the function expects.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Calls the function, or returns `None` when `args` does not match
    /// the arity.
    pub fn call(&self, args: &[f64]) -> Option<f64> {
        (args.len() == self.arity).then(|| (self.body)(args))
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function").field("arity", &self.arity).finish()
    }
}

/// A named entry in a [`SymbolTable`].
#[derive(Debug, Clone)]
pub enum Symbol {
    Constant(f64),
    Function(Function),
}

/// Names visible to an expression.
///
/// # Examples
/// ```
/// use openems_expr::SymbolTable;
///
/// let table = SymbolTable::standard().with_constant("scale", 2.0);
/// assert!(table.contains("pi"));
/// assert!(table.contains("scale"));
/// assert!(!table.contains("open"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl SymbolTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The default allow-list: `pi`, `sqrt`, `log` (natural) and `exp`.
    pub fn standard() -> Self {
        Self::new()
            .with_constant("pi", PI)
            .with_function("sqrt", Function::unary(f64::sqrt))
            .with_function("log", Function::unary(f64::ln))
            .with_function("exp", Function::unary(f64::exp))
    }

    /// Adds or replaces a constant.
    pub fn with_constant(mut self, name: impl Into<String>, value: f64) -> Self {
        self.set_constant(name, value);
        self
    }

    /// Adds or replaces a function.
    pub fn with_function(mut self, name: impl Into<String>, function: Function) -> Self {
        self.set_function(name, function);
        self
    }

    pub fn set_constant(&mut self, name: impl Into<String>, value: f64) {
        self.symbols.insert(name.into(), Symbol::Constant(value));
    }

    pub fn set_function(&mut self, name: impl Into<String>, function: Function) {
        self.symbols.insert(name.into(), Symbol::Function(function));
    }

    /// Merges `other` into this table; entries of `other` win.
    pub fn extend(&mut self, other: &SymbolTable) {
        for (name, symbol) in &other.symbols {
            self.symbols.insert(name.clone(), symbol.clone());
        }
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, value) in iter {
            table.set_constant(name, value);
        }
        table
    }
}

impl From<HashMap<String, f64>> for SymbolTable {
    fn from(constants: HashMap<String, f64>) -> Self {
        constants.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_has_allow_list_only() {
        let table = SymbolTable::standard();
        assert_eq!(table.len(), 4);
        for name in ["pi", "sqrt", "log", "exp"] {
            assert!(table.contains(name), "missing {name}");
        }
    }

    #[test]
    fn log_is_natural() {
        match SymbolTable::standard().get("log") {
            Some(Symbol::Function(f)) => {
                assert_eq!(f.arity(), 1);
                assert!((f.call(&[std::f64::consts::E]).unwrap() - 1.0).abs() < 1e-15);
            }
            other => panic!("Expected function, got {:?}", other),
        }
    }

    #[test]
    fn extend_overrides_existing_names() {
        let mut table = SymbolTable::standard();
        table.extend(&SymbolTable::new().with_constant("pi", 3.0));
        assert!(matches!(table.get("pi"), Some(Symbol::Constant(v)) if *v == 3.0));
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn collect_constants() {
        let table: SymbolTable = [("scale", 2.0), ("offset", -1.0)].into_iter().collect();
        assert_eq!(table.len(), 2);
        assert!(matches!(table.get("offset"), Some(Symbol::Constant(v)) if *v == -1.0));
    }

    #[test]
    fn function_debug_hides_closure() {
        let f = Function::new(2, |args| args[0].hypot(args[1]));
        assert_eq!(format!("{:?}", f), "Function { arity: 2 }");
        assert_eq!(f.call(&[3.0, 4.0]), Some(5.0));
    }

    #[test]
    fn call_rejects_wrong_argument_count() {
        let table = SymbolTable::standard();
        let Some(Symbol::Function(sqrt)) = table.get("sqrt") else {
            panic!("sqrt missing from standard table");
        };
        assert_eq!(sqrt.call(&[]), None);
        assert_eq!(sqrt.call(&[4.0, 9.0]), None);
        assert_eq!(sqrt.call(&[4.0]), Some(2.0));
    }
}
