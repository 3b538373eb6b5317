//! Procedural geometry generators.
//!
//! Pure, seed-driven functions producing mesh/curve/placement data. Every
//! generator is computed once at organelle construction and cached; nothing
//! here regenerates on selection or hover changes.

pub mod antibody;
pub mod bump;
pub mod centriole;
pub mod chromatin;
pub mod cisterna;
pub mod mesh;
pub mod paths;
pub mod scatter;

pub use mesh::{MeshData, MeshVertex};
pub use paths::SecretionPath;
pub use scatter::{Placement, ScatterRegion};
