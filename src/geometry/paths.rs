//! Secretion path tracks from the Golgi region to the lower membrane.
//!
//! A fixed set generated once at load; vesicle and antibody animators share
//! the same tracks so the hand-off happens at the same point in space.

use glam::{Quat, Vec3};
use rand::Rng;

/// Where the secretion tracks originate (trans face of the Golgi stack).
pub const GOLGI_ANCHOR: Vec3 = Vec3::new(1.6, -0.4, 0.6);
/// Base travel direction: fanned around -Y toward the lower membrane.
const BASE_DIRECTION: Vec3 = Vec3::new(-0.35, -1.0, 0.0);
/// Nominal track length before jitter.
const BASE_LENGTH: f32 = 2.8;

/// One start-to-end secretion track. Immutable for the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecretionPath {
    /// Track origin near the Golgi anchor.
    pub start: Vec3,
    /// Track terminus at the membrane side.
    pub end: Vec3,
}

impl SecretionPath {
    /// Unit travel direction of the track.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        (self.end - self.start).normalize_or_zero()
    }
}

fn jitter(rng: &mut impl Rng, magnitude: f32) -> Vec3 {
    Vec3::new(
        rng.random_range(-magnitude..magnitude),
        rng.random_range(-magnitude..magnitude),
        rng.random_range(-magnitude..magnitude),
    )
}

/// Generate `count` tracks fanned around the base direction.
///
/// Starts cluster tightly at the Golgi anchor; ends spread over the
/// negative-Y side of the cell with per-track jitter.
#[must_use]
pub fn generate(rng: &mut impl Rng, count: usize) -> Vec<SecretionPath> {
    let base = BASE_DIRECTION.normalize();
    (0..count)
        .map(|i| {
            let fan = std::f32::consts::TAU * i as f32 / count as f32
                + rng.random_range(-0.2..0.2);
            let dir = Quat::from_rotation_y(fan) * base;
            let length = BASE_LENGTH + rng.random_range(-0.3..0.3);
            let start = GOLGI_ANCHOR + jitter(rng, 0.15);
            let end = start + dir * length + jitter(rng, 0.25);
            SecretionPath { start, end }
        })
        .collect()
}
