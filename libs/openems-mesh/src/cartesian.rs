//! # Cartesian Mesh
//!
//! One symmetric mesh per axis, fine around a port region.
//!
//! ## Example
//!
//! ```rust
//! use openems_mesh::cartesian_meshes;
//!
//! let mesh = cartesian_meshes(
//!     &[(-10.0, 10.0), (-5.0, 5.0), (-2.0, 2.0)],
//!     &[-1.0, -0.5, 0.0],
//!     &[1.0, 0.5, 0.2],
//!     0.25,
//!     4,
//! )
//! .unwrap();
//! assert!(mesh.x.contains(&0.0));
//! assert!(mesh.z.iter().all(|v| v.abs() <= 2.0));
//! ```

use config::constants::{MeshConfig, CARTESIAN_AXES};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::symmetric;

// =============================================================================
// AXIS
// =============================================================================

/// Cartesian axis selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in `x, y, z` order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of this axis in `[x, y, z]` arrays.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

// =============================================================================
// MESH TYPES
// =============================================================================

/// Mesh lines for each of the three axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartesianMesh {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl CartesianMesh {
    /// Lines along `axis`.
    pub fn axis(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    /// Number of lines on each axis.
    pub fn line_counts(&self) -> [usize; 3] {
        [self.x.len(), self.y.len(), self.z.len()]
    }

    /// Number of FDTD cells spanned by the grid.
    pub fn cell_count(&self) -> usize {
        self.line_counts()
            .iter()
            .map(|n| n.saturating_sub(1))
            .product()
    }

    /// Converts into an `(x, y, z)` tuple.
    pub fn into_tuple(self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.x, self.y, self.z)
    }
}

/// Box spanned by a port's start and stop corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortRegion {
    pub start: DVec3,
    pub stop: DVec3,
}

impl PortRegion {
    pub fn new(start: DVec3, stop: DVec3) -> Self {
        Self { start, stop }
    }

    /// Half-width of the fine region per axis: the largest absolute corner
    /// coordinate plus one fine step.
    pub fn fine_extent(&self, fine_step: f64) -> DVec3 {
        self.start.abs().max(self.stop.abs()) + DVec3::splat(fine_step)
    }
}

// =============================================================================
// GENERATION
// =============================================================================

/// Generates symmetric meshes for all three axes around a port.
///
/// Every argument slice must hold exactly three entries. Per axis the fine
/// range is `(0, max(|start|, |stop|) + fine_step)` and the mesh comes from
/// [`symmetric_axis_mesh`](crate::symmetric_axis_mesh).
///
/// ## Errors
///
/// [`MeshError::InvalidDimension`] for a slice of the wrong length, then any
/// error of the per-axis generator.
pub fn cartesian_meshes(
    lims: &[(f64, f64)],
    port_start: &[f64],
    port_stop: &[f64],
    fine_step: f64,
    coarse_mult: u32,
) -> Result<CartesianMesh, MeshError> {
    let lims: [(f64, f64); 3] = lims
        .try_into()
        .map_err(|_| MeshError::invalid_dimension("lims", CARTESIAN_AXES, lims.len()))?;
    let start = to_vec3("port_start", port_start)?;
    let stop = to_vec3("port_stop", port_stop)?;

    cartesian_meshes_for_port(lims, &PortRegion::new(start, stop), fine_step, coarse_mult)
}

/// Typed variant of [`cartesian_meshes`].
pub fn cartesian_meshes_for_port(
    lims: [(f64, f64); 3],
    port: &PortRegion,
    fine_step: f64,
    coarse_mult: u32,
) -> Result<CartesianMesh, MeshError> {
    let config = MeshConfig::new(fine_step, coarse_mult)?;
    let extent = port.fine_extent(fine_step).to_array();

    let generate = |axis: Axis| {
        let i = axis.index();
        let lines = symmetric::generate(lims[i], (0.0, extent[i]), &config)?;
        tracing::debug!(?axis, lines = lines.len(), "generated axis mesh");
        Ok::<_, MeshError>(lines)
    };

    Ok(CartesianMesh {
        x: generate(Axis::X)?,
        y: generate(Axis::Y)?,
        z: generate(Axis::Z)?,
    })
}

fn to_vec3(argument: &'static str, values: &[f64]) -> Result<DVec3, MeshError> {
    match values {
        [x, y, z] => Ok(DVec3::new(*x, *y, *z)),
        _ => Err(MeshError::invalid_dimension(
            argument,
            CARTESIAN_AXES,
            values.len(),
        )),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const LIMS: [(f64, f64); 3] = [(-10.0, 10.0), (-5.0, 5.0), (-2.0, 2.0)];

    #[test]
    fn test_each_axis_contains_zero_and_stays_in_bounds() {
        let mesh = cartesian_meshes(&LIMS, &[-1.0, -0.5, 0.0], &[1.0, 0.5, 0.2], 0.25, 4)
            .unwrap();
        for axis in Axis::ALL {
            let lines = mesh.axis(axis);
            let (lo, hi) = LIMS[axis.index()];
            assert!(lines.contains(&0.0), "{axis:?}");
            assert!(lines.iter().all(|&v| lo <= v && v <= hi), "{axis:?}");
            for v in lines {
                assert!(lines.contains(&-v));
            }
        }
    }

    #[test]
    fn test_fixed_axis_order() {
        // z has the widest port extent, so a lexicographic sort would move it.
        let mesh = cartesian_meshes(
            &[(-4.0, 4.0), (-4.0, 4.0), (-4.0, 4.0)],
            &[0.0, 0.0, -3.0],
            &[0.0, 0.0, 3.0],
            0.5,
            4,
        )
        .unwrap();
        assert!(mesh.z.len() > mesh.x.len());
        assert_eq!(mesh.x, mesh.y);
    }

    #[test]
    fn test_fine_extent() {
        let port = PortRegion::new(DVec3::new(-1.0, 0.5, 0.0), DVec3::new(0.5, -2.0, 0.2));
        let extent = port.fine_extent(0.1);
        assert_relative_eq!(extent.x, 1.1, epsilon = 1e-12);
        assert_relative_eq!(extent.y, 2.1, epsilon = 1e-12);
        assert_relative_eq!(extent.z, 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_dimension_checks() {
        assert_eq!(
            cartesian_meshes(&LIMS[..2], &[0.0; 3], &[0.0; 3], 1.0, 2),
            Err(MeshError::invalid_dimension("lims", 3, 2))
        );
        assert_eq!(
            cartesian_meshes(&LIMS, &[0.0; 4], &[0.0; 3], 1.0, 2),
            Err(MeshError::invalid_dimension("port_start", 3, 4))
        );
        assert_eq!(
            cartesian_meshes(&LIMS, &[0.0; 3], &[], 1.0, 2),
            Err(MeshError::invalid_dimension("port_stop", 3, 0))
        );
    }

    #[test]
    fn test_counts() {
        let mesh = CartesianMesh {
            x: vec![0.0, 1.0, 2.0],
            y: vec![0.0, 1.0],
            z: vec![-1.0, 0.0, 1.0, 2.0],
        };
        assert_eq!(mesh.line_counts(), [3, 2, 4]);
        assert_eq!(mesh.cell_count(), 6);
        let (x, _, z) = mesh.into_tuple();
        assert_eq!(x.len() + z.len(), 7);
    }
}
