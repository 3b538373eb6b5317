//! Cytoskeletal microtubules: rods radiating from the centrosome region.

use glam::{Quat, Vec3};
use rand::Rng;

use super::{Organelle, OrganelleId};
use crate::geometry::chromatin::sample_shell_point;
use crate::geometry::mesh::cylinder;
use crate::options::Options;
use crate::scene::{InstancedMesh, Transform};

/// Rods in the network.
pub const COUNT: usize = 12;

const ROD_RADIUS: f32 = 0.03;

/// The microtubule network. One unit rod, stretched per instance.
pub struct Microtubules {
    meshes: Vec<InstancedMesh>,
    label_anchor: Vec3,
    hovered: bool,
}

impl Microtubules {
    /// Build the rod network from a seeded RNG.
    #[must_use]
    pub fn new(rng: &mut impl Rng, opts: &Options) -> Self {
        let hub = Vec3::new(0.5, 1.1, -1.3);
        let transforms: Vec<Transform> = (0..COUNT)
            .map(|_| {
                let dir =
                    sample_shell_point(rng, 0.99, 1.0).normalize_or_zero();
                let length = rng.random_range(2.2..3.4);
                let mid = hub + dir * (length * 0.5);
                Transform {
                    translation: mid,
                    rotation: Quat::from_rotation_arc(Vec3::Y, dir),
                    // Unit-height rod stretched to length
                    scale: Vec3::new(1.0, length, 1.0),
                }
            })
            .collect();
        let label_anchor =
            hub + Vec3::Y * (1.6 + opts.display.label_offset);
        Self {
            meshes: vec![InstancedMesh {
                mesh: cylinder(ROD_RADIUS, 1.0, 8),
                transforms,
            }],
            label_anchor,
            hovered: false,
        }
    }
}

impl Organelle for Microtubules {
    fn id(&self) -> OrganelleId {
        OrganelleId::Microtubules
    }

    fn meshes(&self) -> &[InstancedMesh] {
        &self.meshes
    }

    fn label_anchor(&self) -> Vec3 {
        self.label_anchor
    }

    fn base_opacity(&self) -> f32 {
        0.85
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
