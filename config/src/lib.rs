//! # Config Crate
//!
//! Centralized configuration constants for the openEMS mesh and excitation
//! utilities. All magic numbers and tunable parameters are defined here so
//! the mesh generator and the waveform builder agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MeshConfig, MESH_SNAP_SCALE};
//!
//! // Snap a drifting coordinate back onto the 12-decimal grid
//! let drifted = 0.1 + 0.2;
//! let snapped = (drifted * MESH_SNAP_SCALE).round() / MESH_SNAP_SCALE;
//! assert_eq!(snapped, 0.3);
//!
//! // Validate stepping parameters once, up front
//! let cfg = MeshConfig::new(0.5, 4).unwrap();
//! assert_eq!(cfg.coarse_step(), 2.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure constants and plain validation
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
