//! # Axis Mesh
//!
//! Adaptive 1-D mesh lines: `fine_step` spacing inside fine ranges,
//! `fine_step * coarse_mult` elsewhere, and a line on the start of every
//! fine range the walk would otherwise step over.
//!
//! ## Example
//!
//! ```rust
//! use openems_mesh::axis_mesh;
//!
//! let lines = axis_mesh((0.0, 10.0), &[(2.0, 4.0)], 1.0, 5).unwrap();
//! assert_eq!(lines, vec![0.0, 2.0, 3.0, 4.0, 5.0, 10.0]);
//! ```

use config::constants::{MeshConfig, MAX_AXIS_LINES, MESH_SNAP_SCALE};

use crate::error::MeshError;

/// Scaled magnitude beyond which f64 spacing is already coarser than the
/// snap grid; such values are left untouched so snapping stays idempotent.
const SNAP_LIMIT: f64 = 4_503_599_627_370_496.0; // 2^52

/// Rounds `value` to 12 decimal places.
///
/// Removes accumulated floating drift so repeated additions of the same step
/// land on the same line.
pub fn snap(value: f64) -> f64 {
    let scaled = value * MESH_SNAP_SCALE;
    if !scaled.is_finite() || scaled.abs() >= SNAP_LIMIT {
        return value;
    }
    scaled.round() / MESH_SNAP_SCALE
}

/// Generates mesh lines along one axis.
///
/// `lims` may be given in either order. A line is emitted at the lower
/// limit, then the walk advances by the fine step while the current line
/// lies inside any (inclusive) fine range and by the coarse step otherwise.
/// When a step would jump over the start of a fine range, the line lands on
/// that start instead; ranges are checked in the order given.
///
/// ## Returns
///
/// Strictly increasing, duplicate-free lines. The lower limit is always
/// present; the upper limit only when the walk lands on it.
///
/// ## Errors
///
/// - [`MeshError::Config`] for a non-positive step or `coarse_mult < 1`
/// - [`MeshError::InvalidLimits`] for NaN or infinite limits
/// - [`MeshError::TooManyLines`] when the axis would exceed
///   [`MAX_AXIS_LINES`]
/// - [`MeshError::StepBelowResolution`] when a step vanishes after snapping
pub fn axis_mesh(
    lims: (f64, f64),
    fine_ranges: &[(f64, f64)],
    fine_step: f64,
    coarse_mult: u32,
) -> Result<Vec<f64>, MeshError> {
    let config = MeshConfig::new(fine_step, coarse_mult)?;
    generate(lims, fine_ranges, &config)
}

/// Walks one axis with an already validated configuration.
pub(crate) fn generate(
    lims: (f64, f64),
    fine_ranges: &[(f64, f64)],
    config: &MeshConfig,
) -> Result<Vec<f64>, MeshError> {
    let (start, stop) = sorted_limits(lims)?;
    check_line_budget(start, stop, fine_ranges.len(), config.fine_step)?;

    // Range edges live on the snap grid, otherwise a snapped line can sit
    // just below a range start and get pulled back onto itself forever.
    let ranges: Vec<(f64, f64)> = fine_ranges
        .iter()
        .map(|&(lo, hi)| (snap(lo), snap(hi)))
        .collect();

    let fine = config.fine_step;
    let coarse = config.coarse_step();

    let mut lines = vec![start];
    let mut current = start;

    while current < stop {
        let step = if in_fine_range(&ranges, current) {
            fine
        } else {
            coarse
        };

        let mut next = current + step;
        if let Some(&(edge, _)) = ranges
            .iter()
            .find(|&&(lo, _)| current < lo && lo <= next)
        {
            next = edge;
        }

        let next = snap(next);
        if next <= current {
            return Err(MeshError::StepBelowResolution { at: current, step });
        }

        current = next;
        if current <= stop {
            lines.push(current);
        }
    }

    lines.sort_by(f64::total_cmp);
    lines.dedup();

    tracing::trace!(start, stop, lines = lines.len(), "generated axis mesh");
    Ok(lines)
}

/// Validates and orders the axis limits.
fn sorted_limits((a, b): (f64, f64)) -> Result<(f64, f64), MeshError> {
    if !a.is_finite() || !b.is_finite() {
        return Err(MeshError::InvalidLimits { min: a, max: b });
    }
    Ok(if a <= b { (a, b) } else { (b, a) })
}

/// Rejects axes that would produce more than [`MAX_AXIS_LINES`] lines.
///
/// Every iteration advances by at least `fine_step` except the single snap
/// onto each range start, which bounds the walk.
fn check_line_budget(
    start: f64,
    stop: f64,
    range_count: usize,
    fine_step: f64,
) -> Result<(), MeshError> {
    let estimate = ((stop - start) / fine_step).ceil() + range_count as f64 + 2.0;
    if estimate > MAX_AXIS_LINES as f64 {
        return Err(MeshError::TooManyLines {
            count: estimate as usize,
            max: MAX_AXIS_LINES,
        });
    }
    Ok(())
}

fn in_fine_range(ranges: &[(f64, f64)], v: f64) -> bool {
    ranges.iter().any(|&(lo, hi)| lo <= v && v <= hi)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::ConfigError;

    #[test]
    fn test_fine_range_inside_coarse_axis() {
        let lines = axis_mesh((0.0, 10.0), &[(2.0, 4.0)], 1.0, 5).unwrap();
        assert_eq!(lines, vec![0.0, 2.0, 3.0, 4.0, 5.0, 10.0]);
    }

    #[test]
    fn test_range_end_takes_one_more_fine_step() {
        let lines = axis_mesh((0.0, 10.0), &[(2.0, 4.0)], 1.0, 3).unwrap();
        assert_eq!(lines, vec![0.0, 2.0, 3.0, 4.0, 5.0, 8.0]);
    }

    #[test]
    fn test_no_fine_ranges_is_uniform_coarse() {
        let lines = axis_mesh((0.0, 10.0), &[], 1.0, 2).unwrap();
        assert_eq!(lines, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn test_upper_limit_only_when_landed_on() {
        let lines = axis_mesh((0.0, 10.0), &[], 1.0, 4).unwrap();
        assert_eq!(lines, vec![0.0, 4.0, 8.0]);
    }

    #[test]
    fn test_limits_in_either_order() {
        let forward = axis_mesh((0.0, 10.0), &[(2.0, 4.0)], 1.0, 3).unwrap();
        let reverse = axis_mesh((10.0, 0.0), &[(2.0, 4.0)], 1.0, 3).unwrap();
        assert_eq!(forward, reverse);
    }

    #[test]
    fn test_degenerate_axis() {
        assert_eq!(axis_mesh((5.0, 5.0), &[], 1.0, 3).unwrap(), vec![5.0]);
    }

    #[test]
    fn test_fine_range_starting_at_lower_limit() {
        let lines = axis_mesh((0.0, 5.0), &[(0.0, 2.0)], 1.0, 3).unwrap();
        assert_eq!(lines, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_first_listed_range_wins_snap() {
        // Both starts lie in (0, 10]; the earlier-listed one is used.
        let lines = axis_mesh((0.0, 20.0), &[(6.0, 7.0), (3.0, 4.0)], 1.0, 10).unwrap();
        assert_eq!(lines, vec![0.0, 6.0, 7.0, 8.0, 18.0]);
    }

    #[test]
    fn test_fractional_steps_are_snapped() {
        let lines = axis_mesh((0.0, 1.0), &[(0.0, 1.0)], 0.1, 1).unwrap();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[3], 0.3);
        assert_eq!(lines[10], 1.0);
    }

    #[test]
    fn test_strictly_increasing() {
        let lines = axis_mesh((-3.3, 7.7), &[(-1.05, 0.25), (4.4, 5.0)], 0.05, 7).unwrap();
        assert!(lines.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(lines[0], -3.3);
        assert!(*lines.last().unwrap() <= 7.7);
    }

    #[test]
    fn test_range_start_beyond_snap_resolution_terminates() {
        let lo = 1.000_000_000_000_4;
        let lines = axis_mesh((0.0, 3.0), &[(lo, 2.0)], 0.5, 4).unwrap();
        assert_eq!(lines, vec![0.0, 1.0, 1.5, 2.0, 2.5]);
    }

    #[test]
    fn test_invalid_config() {
        assert_eq!(
            axis_mesh((0.0, 1.0), &[], 1.0, 0),
            Err(MeshError::Config(ConfigError::InvalidCoarseMultiplier(0)))
        );
        assert!(matches!(
            axis_mesh((0.0, 1.0), &[], 0.0, 1),
            Err(MeshError::Config(ConfigError::InvalidFineStep(_)))
        ));
    }

    #[test]
    fn test_invalid_limits() {
        assert!(matches!(
            axis_mesh((0.0, f64::NAN), &[], 1.0, 1),
            Err(MeshError::InvalidLimits { .. })
        ));
        assert!(matches!(
            axis_mesh((f64::NEG_INFINITY, 0.0), &[], 1.0, 1),
            Err(MeshError::InvalidLimits { .. })
        ));
    }

    #[test]
    fn test_too_many_lines() {
        assert!(matches!(
            axis_mesh((0.0, 1.0), &[], 1e-12, 1),
            Err(MeshError::TooManyLines { .. })
        ));
    }

    #[test]
    fn test_step_below_resolution() {
        assert!(matches!(
            axis_mesh((0.0, 1e-12), &[], 1e-13, 1),
            Err(MeshError::StepBelowResolution { .. })
        ));
    }

    #[test]
    fn test_snap() {
        assert_eq!(snap(0.1 + 0.2), 0.3);
        assert_eq!(snap(snap(0.7)), snap(0.7));
        assert_eq!(snap(1e20), 1e20);
        assert!(snap(f64::NAN).is_nan());
    }

    #[test]
    fn test_snap_grid_is_twelve_decimals() {
        assert_eq!(snap(4e-13), 0.0);
        assert_eq!(snap(1.000_000_000_000_4), 1.0);
        assert_eq!(snap(7e-12), 7e-12);
    }
}
