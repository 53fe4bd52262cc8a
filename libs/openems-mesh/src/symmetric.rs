//! # Symmetric Axis Mesh
//!
//! Meshes mirrored about the origin. Only the positive half is walked; the
//! negative half is its exact negation, so `±` pairs never drift apart.

use config::constants::MeshConfig;

use crate::axis;
use crate::error::MeshError;

/// Generates a mesh symmetric about 0.
///
/// The fine range is taken by absolute value (`(-1, 1)` and `(1, 1)` mean
/// the same thing). The positive half `[0, max(lims)]` is generated with
/// [`axis_mesh`](crate::axis_mesh); every strictly positive line is then
/// mirrored, so 0 appears exactly once.
///
/// ## Example
///
/// ```rust
/// use openems_mesh::symmetric_axis_mesh;
///
/// let lines = symmetric_axis_mesh((-6.0, 6.0), (-1.0, 1.0), 0.5, 4).unwrap();
/// assert_eq!(lines, vec![-5.5, -3.5, -1.5, -1.0, 0.0, 1.0, 1.5, 3.5, 5.5]);
/// ```
pub fn symmetric_axis_mesh(
    lims: (f64, f64),
    fine_range: (f64, f64),
    fine_step: f64,
    coarse_mult: u32,
) -> Result<Vec<f64>, MeshError> {
    let config = MeshConfig::new(fine_step, coarse_mult)?;
    generate(lims, fine_range, &config)
}

pub(crate) fn generate(
    lims: (f64, f64),
    fine_range: (f64, f64),
    config: &MeshConfig,
) -> Result<Vec<f64>, MeshError> {
    let (a, b) = lims;
    if !a.is_finite() || !b.is_finite() {
        return Err(MeshError::InvalidLimits { min: a, max: b });
    }

    let (lo, hi) = (fine_range.0.abs(), fine_range.1.abs());
    let fine = if lo <= hi { (lo, hi) } else { (hi, lo) };

    let positive = axis::generate((0.0, a.max(b)), &[fine], config)?;

    let mut lines: Vec<f64> = positive
        .iter()
        .filter(|&&v| v > 0.0)
        .map(|&v| -v)
        .collect();
    lines.extend(positive);
    lines.sort_by(f64::total_cmp);

    Ok(lines)
}
