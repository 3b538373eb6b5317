//! Golgi apparatus: the cisterna stack plus edge vesicle buds.

use glam::Vec3;
use rand::Rng;

use super::{Organelle, OrganelleId};
use crate::geometry::cisterna::{golgi_cisterna, GOLGI_ARC};
use crate::geometry::mesh::uv_sphere;
use crate::geometry::paths::GOLGI_ANCHOR;
use crate::options::{DetailLevel, Options};
use crate::scene::{InstancedMesh, Transform};

/// Cisterna plates in the stack.
pub const CISTERNA_COUNT: usize = 5;
/// Vesicle buds scattered along the cisterna rims.
const BUD_COUNT: usize = 10;

/// The Golgi component. Anchored at the secretion-path origin so vesicles
/// visibly bud from its trans face.
pub struct Golgi {
    meshes: Vec<InstancedMesh>,
    label_anchor: Vec3,
    hovered: bool,
}

impl Golgi {
    /// Build the Golgi stack from a seeded RNG.
    #[must_use]
    pub fn new(rng: &mut impl Rng, opts: &Options) -> Self {
        let mut meshes = Vec::new();

        for i in 0..CISTERNA_COUNT {
            let layer = i as f32;
            let offset = GOLGI_ANCHOR + Vec3::Y * (layer * 0.22 + 0.3);
            // Plates shrink toward the trans face
            let major = 0.9 - layer * 0.08;
            let mesh = match opts.display.detail {
                DetailLevel::High => golgi_cisterna(major, 0.16),
                DetailLevel::Simple => {
                    let mut m = uv_sphere(major, 16, 8);
                    m.displace(|p| Vec3::new(p.x, p.y * 0.2, p.z));
                    m
                }
            };
            meshes.push(InstancedMesh::single(mesh, Transform::at(offset)));
        }

        // Vesicle buds along the plate rims
        let bud = uv_sphere(0.07, 8, 6);
        let transforms = (0..BUD_COUNT)
            .map(|_| {
                let theta = rng.random_range(0.0..GOLGI_ARC);
                let layer = rng.random_range(0..CISTERNA_COUNT) as f32;
                let radius = 0.9 - layer * 0.08 + 0.12;
                let pos = GOLGI_ANCHOR
                    + Vec3::new(
                        theta.cos() * radius,
                        layer * 0.22 + 0.3 + rng.random_range(-0.05..0.05),
                        theta.sin() * radius,
                    );
                Transform::at(pos)
            })
            .collect();
        meshes.push(InstancedMesh {
            mesh: bud,
            transforms,
        });

        Self {
            meshes,
            label_anchor: GOLGI_ANCHOR
                + Vec3::Y * (1.4 + opts.display.label_offset),
            hovered: false,
        }
    }
}

impl Organelle for Golgi {
    fn id(&self) -> OrganelleId {
        OrganelleId::Golgi
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
