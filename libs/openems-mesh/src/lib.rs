//! # openEMS Mesh
//!
//! Non-uniform mesh line generation for FDTD grids.
//! Lines are dense near ports and sources and coarse elsewhere.
//!
//! ## Architecture
//!
//! ```text
//! axis_mesh (1-D walk) → symmetric_axis_mesh (mirror about 0) → cartesian_meshes (x, y, z)
//! ```
//!
//! Every coordinate produced by the walk is snapped to 12 decimal places
//! (see [`axis::snap`]) so accumulated floating drift never yields two lines
//! that should coincide.
//!
//! ## Usage
//!
//! ```rust
//! use openems_mesh::{axis_mesh, symmetric_axis_mesh};
//!
//! let lines = axis_mesh((0.0, 10.0), &[], 1.0, 2).unwrap();
//! assert_eq!(lines, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
//!
//! let mirrored = symmetric_axis_mesh((-2.0, 2.0), (0.0, 1.0), 0.5, 2).unwrap();
//! assert_eq!(mirrored, vec![-1.5, -1.0, -0.5, 0.0, 0.5, 1.0, 1.5]);
//! ```

pub mod axis;
pub mod cartesian;
pub mod error;
pub mod symmetric;

pub use axis::axis_mesh;
pub use cartesian::{cartesian_meshes, cartesian_meshes_for_port, Axis, CartesianMesh, PortRegion};
pub use error::MeshError;
pub use symmetric::symmetric_axis_mesh;
