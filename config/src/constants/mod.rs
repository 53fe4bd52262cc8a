//! Centralized configuration values shared across the openEMS utility crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// MESH CONSTANTS
// =============================================================================

/// Mesh coordinates are rounded to multiples of `1 / MESH_SNAP_SCALE`
/// (12 decimal places).
///
/// Repeated `v + step` accumulation drifts by a few ULPs; snapping every new
/// line to this grid makes `0.1 + 0.2` land on `0.3` again.
///
/// # Examples
/// ```
/// use config::constants::MESH_SNAP_SCALE;
/// let snapped = ((0.1 + 0.2) * MESH_SNAP_SCALE).round() / MESH_SNAP_SCALE;
/// assert_eq!(snapped, 0.3);
/// ```
pub const MESH_SNAP_SCALE: f64 = 1.0e12;

/// Upper bound on the number of lines a single axis may produce.
///
/// Guards against accidental memory blow-ups such as a picometre step over a
/// metre-long axis.
///
/// # Examples
/// ```
/// use config::constants::MAX_AXIS_LINES;
/// assert!(MAX_AXIS_LINES >= 1_000_000);
/// ```
pub const MAX_AXIS_LINES: usize = 1 << 24;

/// Number of spatial axes in a cartesian grid.
///
/// # Examples
/// ```
/// use config::constants::CARTESIAN_AXES;
/// assert_eq!(CARTESIAN_AXES, 3);
/// ```
pub const CARTESIAN_AXES: usize = 3;

// =============================================================================
// EXCITATION CONSTANTS
// =============================================================================

/// Default attenuation (dB) at which the excitation bandwidth is measured.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_DB_CUTOFF;
/// assert_eq!(DEFAULT_DB_CUTOFF, 6.0);
/// ```
pub const DEFAULT_DB_CUTOFF: f64 = 6.0;

/// Fraction of the edge covered by the rise time (10 % to 90 %).
///
/// # Examples
/// ```
/// use config::constants::RISE_TIME_FRACTION;
/// assert!(RISE_TIME_FRACTION > 0.0 && RISE_TIME_FRACTION < 1.0);
/// ```
pub const RISE_TIME_FRACTION: f64 = 0.8;

/// Abramowitz & Stegun 7.1.25 denominator coefficient `p`.
pub const ERF_P: f64 = 0.47047;

/// Abramowitz & Stegun 7.1.25 coefficient `a1`.
pub const ERF_A1: f64 = 0.3480242;

/// Abramowitz & Stegun 7.1.25 coefficient `a2`.
pub const ERF_A2: f64 = -0.0958798;

/// Abramowitz & Stegun 7.1.25 coefficient `a3`.
pub const ERF_A3: f64 = 0.7478556;

/// Speed of light in vacuum (m/s).
///
/// # Examples
/// ```
/// use config::constants::SPEED_OF_LIGHT;
/// assert_eq!(SPEED_OF_LIGHT, 299_792_458.0);
/// ```
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Cells per shortest wavelength used when deriving a maximum cell size from
/// a Nyquist frequency.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_CELLS_PER_WAVELENGTH;
/// assert!(DEFAULT_CELLS_PER_WAVELENGTH >= 10.0);
/// ```
pub const DEFAULT_CELLS_PER_WAVELENGTH: f64 = 20.0;

// =============================================================================
// EXPRESSION CONSTANTS
// =============================================================================

/// Maximum nesting depth accepted by the expression parser.
///
/// # Examples
/// ```
/// use config::constants::MAX_EXPRESSION_DEPTH;
/// assert!(MAX_EXPRESSION_DEPTH >= 64);
/// ```
pub const MAX_EXPRESSION_DEPTH: usize = 256;

// =============================================================================
// MESH CONFIG
// =============================================================================

/// Validated stepping parameters for the axis mesh generator.
///
/// # Examples
/// ```
/// use config::constants::MeshConfig;
/// let cfg = MeshConfig::new(0.25, 4).unwrap();
/// assert_eq!(cfg.coarse_step(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshConfig {
    /// Spacing used inside fine regions.
    pub fine_step: f64,
    /// Ratio between the coarse and the fine spacing.
    pub coarse_mult: u32,
}

impl MeshConfig {
    /// Builds a configuration, rejecting steps that could never terminate
    /// and multipliers below one.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, MeshConfig};
    /// assert_eq!(MeshConfig::new(1.0, 0), Err(ConfigError::InvalidCoarseMultiplier(0)));
    /// assert!(MeshConfig::new(-1.0, 2).is_err());
    /// ```
    pub fn new(fine_step: f64, coarse_mult: u32) -> Result<Self, ConfigError> {
        if coarse_mult < 1 {
            return Err(ConfigError::InvalidCoarseMultiplier(coarse_mult));
        }
        if !fine_step.is_finite() || fine_step <= 0.0 {
            return Err(ConfigError::InvalidFineStep(fine_step));
        }
        Ok(Self {
            fine_step,
            coarse_mult,
        })
    }

    /// Spacing used outside every fine region.
    pub fn coarse_step(&self) -> f64 {
        self.fine_step * f64::from(self.coarse_mult)
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the fine step is zero, negative or not finite.
    InvalidFineStep(f64),
    /// Raised when the coarse multiplier is below one.
    InvalidCoarseMultiplier(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidFineStep(value) => {
                write!(f, "fine_step must be positive and finite: {value}")
            }
            ConfigError::InvalidCoarseMultiplier(value) => {
                write!(f, "coarse_mult must be >= 1, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
