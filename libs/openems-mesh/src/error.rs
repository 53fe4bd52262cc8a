//! # Mesh Errors
//!
//! Error types for mesh line generation.

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Invalid fine step or coarse multiplier
    #[error("Invalid mesh configuration: {0}")]
    Config(#[from] ConfigError),

    /// Axis limits are NaN or infinite
    #[error("Invalid axis limits: ({min}, {max}) must be finite")]
    InvalidLimits { min: f64, max: f64 },

    /// A per-axis argument does not have one entry per axis
    #[error("{argument} must have {expected} entries, got {found}")]
    InvalidDimension {
        argument: &'static str,
        expected: usize,
        found: usize,
    },

    /// Too many lines on a single axis
    #[error("Too many mesh lines: {count} (max: {max})")]
    TooManyLines { count: usize, max: usize },

    /// The step vanishes after snapping, so the axis would never finish
    #[error("Step {step} cannot advance past {at} at the mesh snap resolution")]
    StepBelowResolution { at: f64, step: f64 },
}

impl MeshError {
    /// Creates a dimension mismatch error.
    pub fn invalid_dimension(argument: &'static str, expected: usize, found: usize) -> Self {
        Self::InvalidDimension {
            argument,
            expected,
            found,
        }
    }
}
