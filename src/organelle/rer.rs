//! Rough endoplasmic reticulum: stacked cisterna sheets with a ribosome
//! bump raster standing in for per-ribosome geometry.

use glam::{Quat, Vec3};
use rand::Rng;

use super::{nucleus, Organelle, OrganelleId};
use crate::geometry::bump::{self, BumpRaster};
use crate::geometry::cisterna::{rer_sheet, SheetParams};
use crate::geometry::mesh::plane_grid;
use crate::options::{DetailLevel, Options};
use crate::scene::{InstancedMesh, Transform};

/// Sheets in the stack.
pub const SHEET_COUNT: usize = 4;

/// The rough-ER component.
///
/// Owns the bump raster for its surface; the raster is dropped with the
/// component so the consumer's texture upload can mirror its lifetime.
pub struct Rer {
    meshes: Vec<InstancedMesh>,
    bump: BumpRaster,
    label_anchor: Vec3,
    hovered: bool,
}

impl Rer {
    /// Build the sheet stack from a seeded RNG.
    #[must_use]
    pub fn new(rng: &mut impl Rng, opts: &Options) -> Self {
        // Hugging the nucleus on its open side
        let base = nucleus::OFFSET + Vec3::new(0.6, -0.9, 1.6);
        let params = SheetParams::default();

        let mut meshes = Vec::new();
        for i in 0..SHEET_COUNT {
            let mesh = match opts.display.detail {
                DetailLevel::High => rer_sheet(&params),
                DetailLevel::Simple => {
                    plane_grid(params.width, params.depth, 2, 2)
                }
            };
            let jitter = Vec3::new(
                rng.random_range(-0.1..0.1),
                0.0,
                rng.random_range(-0.1..0.1),
            );
            meshes.push(InstancedMesh::single(
                mesh,
                Transform {
                    translation: base + Vec3::Y * (i as f32 * 0.35) + jitter,
                    rotation: Quat::from_rotation_y(
                        rng.random_range(-0.25..0.25),
                    ),
                    scale: Vec3::ONE,
                },
            ));
        }

        Self {
            meshes,
            bump: bump::generate(rng),
            label_anchor: base
                + Vec3::Y
                    * (SHEET_COUNT as f32 * 0.35 + opts.display.label_offset),
            hovered: false,
        }
    }

    /// The ribosome bump raster tiled across each sheet (see
    /// [`bump::TILING`]).
    #[must_use]
    pub fn bump_raster(&self) -> &BumpRaster {
        &self.bump
    }
}

impl Organelle for Rer {
    fn id(&self) -> OrganelleId {
        OrganelleId::Rer
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
