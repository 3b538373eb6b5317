//! Nucleus: envelope sphere, nucleolus, and chromatin strands.

use glam::Vec3;
use rand::Rng;

use super::{Organelle, OrganelleId};
use crate::geometry::chromatin::{generate_strands, sweep_tube};
use crate::geometry::mesh::uv_sphere;
use crate::options::{DetailLevel, Options};
use crate::scene::{InstancedMesh, Transform};

/// Nucleus center, offset from the cell center.
pub const OFFSET: Vec3 = Vec3::new(-0.8, 0.3, 0.0);
/// Envelope radius. The chromatin shell (1.5..2.0) sits inside it.
pub const RADIUS: f32 = 2.1;

const CHROMATIN_TUBE_RADIUS: f32 = 0.045;

/// The nucleus component. Geometry is generated once at construction.
pub struct Nucleus {
    meshes: Vec<InstancedMesh>,
    label_anchor: Vec3,
    hovered: bool,
}

impl Nucleus {
    /// Build the nucleus from a seeded RNG.
    #[must_use]
    pub fn new(rng: &mut impl Rng, opts: &Options) -> Self {
        let mut meshes = Vec::new();

        // Envelope
        meshes.push(InstancedMesh::single(
            uv_sphere(RADIUS, 48, 24),
            Transform::at(OFFSET),
        ));
        // Nucleolus, offset inside the envelope
        meshes.push(InstancedMesh::single(
            uv_sphere(0.55, 24, 12),
            Transform::at(OFFSET + Vec3::new(0.4, -0.3, 0.2)),
        ));

        // Chromatin tubes are detail geometry; skip them entirely in the
        // simple tier.
        if opts.display.detail == DetailLevel::High {
            for strand in generate_strands(rng) {
                let tube =
                    sweep_tube(&strand.curve, CHROMATIN_TUBE_RADIUS, 6);
                meshes.push(InstancedMesh::single(
                    tube,
                    Transform::at(OFFSET),
                ));
            }
        }

        Self {
            meshes,
            label_anchor: OFFSET
                + Vec3::Y * (RADIUS + opts.display.label_offset),
            hovered: false,
        }
    }
}

impl Organelle for Nucleus {
    fn id(&self) -> OrganelleId {
        OrganelleId::Nucleus
    }

    fn meshes(&self) -> &[InstancedMesh] {
        &self.meshes
    }

    fn label_anchor(&self) -> Vec3 {
        self.label_anchor
    }

    fn base_opacity(&self) -> f32 {
        0.92
    }

    fn base_transparent(&self) -> bool {
        true
    }

    fn hovered(&self) -> bool {
        self.hovered
    }

    fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn high_detail_includes_chromatin() {
        let opts = Options::default();
        let n = Nucleus::new(&mut StdRng::seed_from_u64(1), &opts);
        // envelope + nucleolus + 12 strands
        assert_eq!(n.meshes().len(), 2 + 12);
    }

    #[test]
    fn simple_detail_drops_chromatin() {
        let mut opts = Options::default();
        opts.display.detail = DetailLevel::Simple;
        let n = Nucleus::new(&mut StdRng::seed_from_u64(1), &opts);
        assert_eq!(n.meshes().len(), 2);
    }

    #[test]
    fn label_floats_above_the_envelope() {
        let opts = Options::default();
        let n = Nucleus::new(&mut StdRng::seed_from_u64(1), &opts);
        assert!(n.label_anchor().y > OFFSET.y + RADIUS);
    }
}
