//! Mitochondria: elongated bodies scattered through the cytoplasm.

use glam::Vec3;
use rand::Rng;

use super::{nucleus, Organelle, OrganelleId};
use crate::geometry::mesh::uv_sphere;
use crate::geometry::scatter::{scatter, ScatterRegion};
use crate::options::Options;
use crate::scene::{InstancedMesh, Transform};

/// Instances in the collection.
pub const COUNT: usize = 14;

/// Scatter constraints for cytoplasmic organelles: inside the membrane,
/// outside the nucleus exclusion sphere.
#[must_use]
pub fn cytoplasm_region() -> ScatterRegion {
    ScatterRegion {
        inner_radius: 0.6,
        outer_radius: 3.6,
        nucleus_offset: nucleus::OFFSET,
        nucleus_radius: nucleus::RADIUS,
    }
}

/// The mitochondria collection. One shared body mesh, many placements.
pub struct Mitochondria {
    meshes: Vec<InstancedMesh>,
    label_anchor: Vec3,
    hovered: bool,
}

impl Mitochondria {
    /// Scatter the collection from a seeded RNG.
    #[must_use]
    pub fn new(rng: &mut impl Rng, opts: &Options) -> Self {
        let placements =
            scatter(rng, &cytoplasm_region(), COUNT, (0.8, 1.2));
        let transforms: Vec<Transform> = placements
            .iter()
            .map(|p| Transform {
                translation: p.position,
                rotation: p.rotation,
                // Elongate the sphere into the familiar bean
                scale: Vec3::new(1.0, 0.42, 0.42) * p.scale,
            })
            .collect();
        // Label follows the first instance so it stays on an actual body
        let label_anchor = transforms.first().map_or(Vec3::ZERO, |t| {
            t.translation + Vec3::Y * opts.display.label_offset
        });
        Self {
            meshes: vec![InstancedMesh {
                mesh: uv_sphere(0.45, 20, 12),
                transforms,
            }],
            label_anchor,
            hovered: false,
        }
    }
}

impl Organelle for Mitochondria {
    fn id(&self) -> OrganelleId {
        OrganelleId::Mitochondria
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
    use crate::geometry::scatter::NUCLEUS_MARGIN;

    #[test]
    fn instances_avoid_the_nucleus() {
        let opts = Options::default();
        let m = Mitochondria::new(&mut StdRng::seed_from_u64(77), &opts);
        let instances = &m.meshes()[0].transforms;
        assert_eq!(instances.len(), COUNT);
        for t in instances {
            let d = (t.translation - nucleus::OFFSET).length();
            assert!(
                d > nucleus::RADIUS + NUCLEUS_MARGIN,
                "mitochondrion at {:?} overlaps the nucleus",
                t.translation
            );
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let opts = Options::default();
        let a = Mitochondria::new(&mut StdRng::seed_from_u64(9), &opts);
        let b = Mitochondria::new(&mut StdRng::seed_from_u64(9), &opts);
        assert_eq!(
            a.meshes()[0].transforms.len(),
            b.meshes()[0].transforms.len()
        );
        for (ta, tb) in a.meshes()[0]
            .transforms
            .iter()
            .zip(&b.meshes()[0].transforms)
        {
            assert_eq!(ta.translation, tb.translation);
        }
    }
}
