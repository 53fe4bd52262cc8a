//! # Gaussian Step
//!
//! A smooth step whose derivative is a Gaussian pulse, expressed in closed
//! form so a simulator can evaluate it directly.
//!
//! With `x = (t - center) / sigma` the step is `0.5 + 0.5 * erf(x)`, where
//! `erf` is the Abramowitz & Stegun 7.1.25 approximation (absolute error
//! below 2.5e-5):
//!
//! ```text
//! erf(x) ≈ 1 - (a1·τ + a2·τ² + a3·τ³)·exp(-x²),   τ = 1 / (1 + p·x),   x >= 0
//! ```
//!
//! Negative `x` uses odd symmetry, selected by `(x>=0)` / `(x<0)` indicator
//! terms in the expression.
//!
//! ## Example
//!
//! ```rust
//! use openems_source::{Edge, GaussianStep};
//!
//! let step = GaussianStep::new(50e-12, 1e-9)
//!     .unwrap()
//!     .with_edge(Edge::Falling);
//! let waveform = step.waveform();
//! let values = waveform.sample(&[0.0, 1e-9, 2e-9]).unwrap();
//! assert!(values[0] > 0.99 && values[2] < 0.01);
//! ```

use std::f64::consts::{LN_10, PI};

use config::constants::{
    DEFAULT_DB_CUTOFF, ERF_A1, ERF_A2, ERF_A3, ERF_P, RISE_TIME_FRACTION,
};
use serde::{Deserialize, Serialize};
use statrs::function::erf::erf_inv;

use crate::edge::Edge;
use crate::error::SourceError;
use crate::waveform::Waveform;

/// Parameters of a Gaussian step edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaussianStep {
    rise_time: f64,
    center_time: f64,
    db_cutoff: f64,
    edge: Edge,
}

impl GaussianStep {
    /// Rising step with a 10–90 % `rise_time` (s) centered on
    /// `center_time` (s), using the default dB cutoff.
    pub fn new(rise_time: f64, center_time: f64) -> Result<Self, SourceError> {
        if !rise_time.is_finite() || rise_time <= 0.0 {
            return Err(SourceError::InvalidRiseTime(rise_time));
        }
        if !center_time.is_finite() {
            return Err(SourceError::InvalidCenterTime(center_time));
        }
        // 1/sigma must be printable as a finite literal
        if !(1.0 / sigma_for(rise_time)).is_finite() {
            return Err(SourceError::InvalidRiseTime(rise_time));
        }

        Ok(Self {
            rise_time,
            center_time,
            db_cutoff: DEFAULT_DB_CUTOFF,
            edge: Edge::Rising,
        })
    }

    /// Attenuation (dB) at which the spectrum is considered band-limited.
    pub fn with_db_cutoff(mut self, db_cutoff: f64) -> Result<Self, SourceError> {
        if !db_cutoff.is_finite() || db_cutoff <= 0.0 {
            return Err(SourceError::InvalidCutoff(db_cutoff));
        }
        self.db_cutoff = db_cutoff;
        Ok(self)
    }

    pub fn with_edge(mut self, edge: Edge) -> Self {
        self.edge = edge;
        self
    }

    pub fn rise_time(&self) -> f64 {
        self.rise_time
    }

    pub fn center_time(&self) -> f64 {
        self.center_time
    }

    pub fn db_cutoff(&self) -> f64 {
        self.db_cutoff
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// Time scale of the pulse `exp(-((t - center) / sigma)²)`.
    pub fn sigma(&self) -> f64 {
        sigma_for(self.rise_time)
    }

    /// Frequency (Hz) where the spectrum has dropped by `db_cutoff`, doubled.
    pub fn nyquist_frequency(&self) -> f64 {
        let sigma = self.sigma();
        2.0 * ((self.db_cutoff / 20.0) * LN_10 / (PI * PI * sigma * sigma)).sqrt()
    }

    /// Closed-form expression over `t`.
    pub fn expression(&self) -> String {
        let k = 1.0 / self.sigma();
        let x = format!("{k}*(t-{c})", c = self.center_time);

        let upper = erf_complement(&x, '+');
        let lower = erf_complement(&x, '-');
        let rising = format!("0.5 + 0.5*({x}>=0)*{upper} - 0.5*({x}<0)*{lower}");

        match self.edge {
            Edge::Rising => rising,
            Edge::Falling => format!("1 - ({rising})"),
        }
    }

    pub fn waveform(&self) -> Waveform {
        let waveform = Waveform::new(self.expression(), self.nyquist_frequency());
        tracing::debug!(
            sigma = self.sigma(),
            nyquist = waveform.nyquist_frequency(),
            edge = ?self.edge,
            "built gaussian step"
        );
        waveform
    }
}

/// `erf(|x|)` as text, with `sign` in the denominators selecting `x >= 0`
/// (`+`) or `x < 0` (`-`).
fn erf_complement(x: &str, sign: char) -> String {
    let tau = format!("(1{sign}{p}*{x})", p = ERF_P);
    format!(
        "(1 - exp(-{x}*{x}) * ({a1}/{tau} - {a2}/({tau}**2) + {a3}/({tau}**3)))",
        a1 = ERF_A1,
        a2 = -ERF_A2,
        a3 = ERF_A3,
    )
}

fn sigma_for(rise_time: f64) -> f64 {
    rise_time / (2.0 * erf_inv(RISE_TIME_FRACTION))
}

/// Builds a Gaussian step edge.
///
/// `sign` is `+1` for a rising edge and `-1` for a falling one.
///
/// ## Returns
///
/// The expression over `t` and its Nyquist frequency (Hz).
///
/// ## Example
///
/// ```rust
/// use openems_source::gaussian_step;
///
/// let waveform = gaussian_step(50e-12, 1e-9, 6.0, 1).unwrap();
/// assert!(waveform.nyquist_frequency() > 1e9);
///
/// let (expression, _) = waveform.into_parts();
/// assert!(expression.contains("exp("));
/// assert!(gaussian_step(50e-12, 1e-9, 6.0, 0).is_err());
/// ```
pub fn gaussian_step(
    rise_time: f64,
    center_time: f64,
    db_cutoff: f64,
    sign: i32,
) -> Result<Waveform, SourceError> {
    let edge = Edge::try_from(sign)?;
    let step = GaussianStep::new(rise_time, center_time)?
        .with_db_cutoff(db_cutoff)?
        .with_edge(edge);
    Ok(step.waveform())
}

// =============================================================================
// TESTS
// =============================================================================
