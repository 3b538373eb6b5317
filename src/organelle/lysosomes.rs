//! Lysosomes: small enzyme-filled spheres in the cytoplasm.

use glam::Vec3;
use rand::Rng;

use super::mitochondria::cytoplasm_region;
use super::{Organelle, OrganelleId};
use crate::geometry::mesh::uv_sphere;
use crate::geometry::scatter::scatter;
use crate::options::Options;
use crate::scene::{InstancedMesh, Transform};

/// Instances in the collection.
pub const COUNT: usize = 8;

/// The lysosome collection.
pub struct Lysosomes {
    meshes: Vec<InstancedMesh>,
    label_anchor: Vec3,
    hovered: bool,
}

impl Lysosomes {
    /// Scatter the collection from a seeded RNG.
    #[must_use]
    pub fn new(rng: &mut impl Rng, opts: &Options) -> Self {
        let placements =
            scatter(rng, &cytoplasm_region(), COUNT, (0.7, 1.1));
        let transforms: Vec<Transform> = placements
            .iter()
            .map(|p| Transform {
                translation: p.position,
                rotation: p.rotation,
                scale: Vec3::splat(p.scale),
            })
            .collect();
        let label_anchor = transforms.first().map_or(Vec3::ZERO, |t| {
            t.translation + Vec3::Y * opts.display.label_offset
        });
        Self {
            meshes: vec![InstancedMesh {
                mesh: uv_sphere(0.22, 16, 10),
                transforms,
            }],
            label_anchor,
            hovered: false,
        }
    }
}

impl Organelle for Lysosomes {
    fn id(&self) -> OrganelleId {
        OrganelleId::Lysosomes
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
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn collection_size() {
        let opts = Options::default();
        let l = Lysosomes::new(&mut StdRng::seed_from_u64(21), &opts);
        assert_eq!(l.meshes()[0].transforms.len(), COUNT);
    }
}
