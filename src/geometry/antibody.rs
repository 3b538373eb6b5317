//! The shared antibody Y-shape mesh.
//!
//! One beveled extrusion of a nine-point Y profile, re-centered on its own
//! centroid. Built once and shared by every antibody and vesicle-cargo
//! instance; instances differ only by transform.

use glam::Vec2;

use super::mesh::{extrude_profile, recenter, MeshData};

/// Extrusion depth of the Y plate.
pub const DEPTH: f32 = 0.12;
/// Bevel inset toward the front/back faces.
pub const BEVEL: f32 = 0.02;

/// The nine-point Y outline (CCW, XY plane): stem plus forked arms.
#[must_use]
pub fn y_profile() -> [Vec2; 9] {
    [
        Vec2::new(-0.12, -0.55),
        Vec2::new(0.12, -0.55),
        Vec2::new(0.12, -0.05),
        Vec2::new(0.50, 0.45),
        Vec2::new(0.28, 0.60),
        Vec2::new(0.00, 0.18),
        Vec2::new(-0.28, 0.60),
        Vec2::new(-0.50, 0.45),
        Vec2::new(-0.12, -0.05),
    ]
}

/// Build the shared Y-shape mesh.
#[must_use]
pub fn y_mesh() -> MeshData {
    let mut mesh = extrude_profile(&y_profile(), DEPTH, BEVEL);
    let _ = recenter(&mut mesh);
    mesh
}
