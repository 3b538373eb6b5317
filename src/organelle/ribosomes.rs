//! Free ribosomes: a large instanced population of tiny granules.

use glam::Vec3;
use rand::Rng;

use super::mitochondria::cytoplasm_region;
use super::{Organelle, OrganelleId};
use crate::geometry::mesh::uv_sphere;
use crate::geometry::scatter::scatter;
use crate::options::Options;
use crate::scene::{InstancedMesh, Transform};

/// Population size. Hundreds of instances of one low-poly sphere; the
/// consumer should draw these instanced.
pub const COUNT: usize = 300;

/// The free-ribosome population.
pub struct FreeRibosomes {
    meshes: Vec<InstancedMesh>,
    label_anchor: Vec3,
    hovered: bool,
}

impl FreeRibosomes {
    /// Scatter the population from a seeded RNG.
    #[must_use]
    pub fn new(rng: &mut impl Rng, opts: &Options) -> Self {
        let placements =
            scatter(rng, &cytoplasm_region(), COUNT, (0.6, 1.4));
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
                mesh: uv_sphere(0.035, 6, 4),
                transforms,
            }],
            label_anchor,
            hovered: false,
        }
    }
}

impl Organelle for FreeRibosomes {
    fn id(&self) -> OrganelleId {
        OrganelleId::FreeRibosomes
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
