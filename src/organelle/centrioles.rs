//! Centriole pair: two perpendicular barrels of nine microtubule triplets.

use glam::Vec3;

use super::{Organelle, OrganelleId};
use crate::geometry::centriole::{barrel_layout, barrel_pair};
use crate::geometry::mesh::cylinder;
use crate::options::Options;
use crate::scene::{InstancedMesh, Transform};

/// Where the centrosome sits in the cell.
const CENTROSOME: Vec3 = Vec3::new(0.5, 1.1, -1.3);

const RING_RADIUS: f32 = 0.22;
const TUBE_RADIUS: f32 = 0.035;
const TUBE_LENGTH: f32 = 0.7;

/// The centriole pair. Fully deterministic; no RNG involved.
pub struct Centrioles {
    meshes: Vec<InstancedMesh>,
    label_anchor: Vec3,
    hovered: bool,
}

impl Centrioles {
    /// Build both barrels.
    #[must_use]
    pub fn new(opts: &Options) -> Self {
        let tubes = barrel_layout(RING_RADIUS, TUBE_RADIUS);
        let mut transforms = Vec::with_capacity(tubes.len() * 2);
        for (barrel_offset, barrel_rotation) in barrel_pair(0.9) {
            for tube in &tubes {
                transforms.push(Transform {
                    translation: CENTROSOME
                        + barrel_offset
                        + barrel_rotation * tube.position,
                    rotation: barrel_rotation * tube.rotation,
                    scale: Vec3::ONE,
                });
            }
        }
        Self {
            meshes: vec![InstancedMesh {
                mesh: cylinder(TUBE_RADIUS, TUBE_LENGTH, 10),
                transforms,
            }],
            label_anchor: CENTROSOME
                + Vec3::Y * (TUBE_LENGTH + opts.display.label_offset),
            hovered: false,
        }
    }
}

impl Organelle for Centrioles {
    fn id(&self) -> OrganelleId {
        OrganelleId::Centrioles
    }

    fn meshes(&self) -> &[InstancedMesh] {
        &self.meshes
    }

    fn label_anchor(&self) -> Vec3 {
        self.label_anchor
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
    use super::*;

    #[test]
    fn two_barrels_of_27_tubes() {
        let c = Centrioles::new(&Options::default());
        assert_eq!(c.meshes()[0].transforms.len(), 54);
    }

    #[test]
    fn construction_is_deterministic() {
        let a = Centrioles::new(&Options::default());
        let b = Centrioles::new(&Options::default());
        for (ta, tb) in a.meshes()[0]
            .transforms
            .iter()
            .zip(&b.meshes()[0].transforms)
        {
            assert_eq!(ta.translation, tb.translation);
        }
    }
}
