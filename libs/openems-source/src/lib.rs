//! # openEMS Source
//!
//! Time-domain excitation waveforms for custom FDTD sources.
//!
//! A waveform is an expression string over `t` plus the Nyquist frequency it
//! implies; the simulator evaluates the string itself, and
//! [`evaluate_expression`] evaluates it here with the same grammar.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::DEFAULT_CELLS_PER_WAVELENGTH;
//! use openems_source::{evaluate_expression, gaussian_step};
//!
//! let waveform = gaussian_step(50e-12, 1e-9, 6.0, 1).unwrap();
//! let max_res = waveform.max_cell_size(DEFAULT_CELLS_PER_WAVELENGTH);
//! assert!(max_res > 0.0);
//!
//! let (_, values) = evaluate_expression(waveform.expression(), &[1e-9], None).unwrap();
//! assert!((values[0] - 0.5).abs() < 1e-9);
//! ```

pub mod edge;
pub mod error;
pub mod gaussian;
pub mod waveform;

pub use edge::Edge;
pub use error::SourceError;
pub use gaussian::{gaussian_step, GaussianStep};
pub use openems_expr::{evaluate_expression, EvalError, SymbolTable};
pub use waveform::Waveform;
