//! # Source Errors

use openems_expr::EvalError;
use thiserror::Error;

/// Errors that can occur while building or sampling a waveform.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SourceError {
    /// Edge direction other than +1 / -1
    #[error("sign must be +1 or -1, got {0}")]
    InvalidSign(i32),

    #[error("rise time must be positive and finite: {0}")]
    InvalidRiseTime(f64),

    #[error("dB cutoff must be positive and finite: {0}")]
    InvalidCutoff(f64),

    #[error("center time must be finite: {0}")]
    InvalidCenterTime(f64),

    /// Sampling the waveform expression failed
    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),
}
