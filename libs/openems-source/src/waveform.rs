//! # Waveform
//!
//! An excitation expression over `t` together with its Nyquist frequency.

use config::constants::SPEED_OF_LIGHT;
use openems_expr::{evaluate_expression, CompiledExpression};
use serde::{Deserialize, Serialize};

use crate::error::SourceError;

/// Time-domain excitation ready to hand to a simulator.
///
/// The expression uses only `t`, `exp`, arithmetic and comparisons, so it
/// can be evaluated by [`openems_expr`] without any context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waveform {
    expression: String,
    nyquist_frequency: f64,
}

impl Waveform {
    pub fn new(expression: impl Into<String>, nyquist_frequency: f64) -> Self {
        Self {
            expression: expression.into(),
            nyquist_frequency,
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Highest frequency (Hz) the excitation carries above the cutoff.
    pub fn nyquist_frequency(&self) -> f64 {
        self.nyquist_frequency
    }

    /// Splits into `(expression, nyquist_frequency)`.
    pub fn into_parts(self) -> (String, f64) {
        (self.expression, self.nyquist_frequency)
    }

    /// Largest mesh cell (m) that still resolves the Nyquist wavelength
    /// with `cells_per_wavelength` cells.
    ///
    /// [`DEFAULT_CELLS_PER_WAVELENGTH`](config::constants::DEFAULT_CELLS_PER_WAVELENGTH)
    /// is the usual choice.
    pub fn max_cell_size(&self, cells_per_wavelength: f64) -> f64 {
        SPEED_OF_LIGHT / self.nyquist_frequency / cells_per_wavelength
    }

    /// Compiles the expression once for repeated evaluation.
    pub fn compile(&self) -> Result<CompiledExpression, SourceError> {
        Ok(CompiledExpression::compile(&self.expression, None)?)
    }

    /// Evaluates the waveform at every point of `t`.
    pub fn sample(&self, t: &[f64]) -> Result<Vec<f64>, SourceError> {
        let (_, values) = evaluate_expression(&self.expression, t, None)?;
        Ok(values)
    }
}
