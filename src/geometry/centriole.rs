//! Centriole barrel layout: the canonical 9 microtubule triplets.

use glam::{Quat, Vec3};

/// Triplets around the barrel.
pub const TRIPLET_COUNT: usize = 9;
/// Tubes per triplet.
pub const TUBES_PER_TRIPLET: usize = 3;

/// Placement of one microtubule cylinder inside a barrel (barrel-local,
/// barrel axis = +Y).
#[derive(Debug, Clone, Copy)]
pub struct TubePlacement {
    /// Cylinder center.
    pub position: Vec3,
    /// Cylinder orientation.
    pub rotation: Quat,
}

/// Lay out the 27 cylinders of a single centriole barrel.
///
/// Each of the 9 triplets walks outward in radius and skews in angle, which
/// gives the pinwheel cross-section of a real centriole.
#[must_use]
pub fn barrel_layout(ring_radius: f32, tube_radius: f32) -> Vec<TubePlacement> {
    let mut tubes =
        Vec::with_capacity(TRIPLET_COUNT * TUBES_PER_TRIPLET);
    for t in 0..TRIPLET_COUNT {
        let base_angle =
            std::f32::consts::TAU * t as f32 / TRIPLET_COUNT as f32;
        for k in 0..TUBES_PER_TRIPLET {
            let radius = ring_radius + k as f32 * tube_radius * 2.1;
            let angle = base_angle + k as f32 * 0.18;
            let position =
                Vec3::new(angle.cos(), 0.0, angle.sin()) * radius;
            // Lean each tube slightly tangent to the ring
            let rotation = Quat::from_rotation_y(-angle)
                * Quat::from_rotation_z(0.08 * k as f32);
            tubes.push(TubePlacement { position, rotation });
        }
    }
    tubes
}

/// The classic centriole pair: one barrel upright, one perpendicular.
///
/// Returns (offset, rotation) for each barrel; tube placements come from
/// [`barrel_layout`] and are transformed by these.
#[must_use]
pub fn barrel_pair(separation: f32) -> [(Vec3, Quat); 2] {
    [
        (Vec3::ZERO, Quat::IDENTITY),
        (
            Vec3::new(separation, 0.0, 0.0),
            Quat::from_rotation_z(std::f32::consts::FRAC_PI_2),
        ),
    ]
}
