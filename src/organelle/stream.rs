//! The antibody stream: Y-shapes released where vesicles fuse with the
//! membrane.
//!
//! The pool is four times larger than the vesicle pool, so every fusion
//! event reads as a burst of antibodies rather than a one-for-one swap.

use glam::Vec3;
use rand::Rng;

use super::{FrameTransforms, Organelle, OrganelleId};
use crate::animation::secretion::{antibody_state, spawn_pool, Particle};
use crate::geometry::antibody::y_mesh;
use crate::geometry::SecretionPath;
use crate::options::{AnimationOptions, Options};
use crate::scene::{InstancedMesh, Transform};

/// The antibody stream component.
pub struct AntibodyStream {
    meshes: Vec<InstancedMesh>,
    paths: Vec<SecretionPath>,
    pool: Vec<Particle>,
    anim: AnimationOptions,
    label_anchor: Vec3,
    hovered: bool,
}

impl AntibodyStream {
    /// Build the pool over the shared path set.
    #[must_use]
    pub fn new(
        rng: &mut impl Rng,
        paths: Vec<SecretionPath>,
        opts: &Options,
    ) -> Self {
        let pool = spawn_pool(
            rng,
            paths.len(),
            opts.animation.antibodies_per_path,
        );
        let hidden = vec![
            Transform {
                scale: Vec3::ZERO,
                ..Transform::IDENTITY
            };
            pool.len()
        ];
        let label_anchor = paths.first().map_or(Vec3::ZERO, |p| {
            p.end + Vec3::Y * opts.display.label_offset
        });
        Self {
            meshes: vec![InstancedMesh {
                mesh: y_mesh(),
                transforms: hidden,
            }],
            paths,
            pool,
            anim: opts.animation.clone(),
            label_anchor,
            hovered: false,
        }
    }

    /// Pool size (8 x path count with default options).
    #[must_use]
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }
}

impl Organelle for AntibodyStream {
    fn id(&self) -> OrganelleId {
        OrganelleId::Antibodies
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

    fn animate(&self, elapsed: f32) -> Option<FrameTransforms> {
        let transforms = self
            .pool
            .iter()
            .map(|particle| {
                let path = &self.paths[particle.path_index];
                let a =
                    antibody_state(elapsed, particle, path, &self.anim);
                Transform {
                    translation: a.position,
                    rotation: a.rotation,
                    scale: Vec3::splat(a.scale),
                }
            })
            .collect();
        Some(vec![transforms])
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::geometry::paths::generate;

    fn build() -> AntibodyStream {
        let mut rng = StdRng::seed_from_u64(2);
        let opts = Options::default();
        let paths = generate(&mut rng, opts.animation.path_count);
        AntibodyStream::new(&mut rng, paths, &opts)
    }

    #[test]
    fn pool_is_eight_times_the_path_count() {
        let s = build();
        assert_eq!(s.pool_len(), 64);
    }

    #[test]
    fn some_antibodies_visible_mid_cycle() {
        let s = build();
        // Random phase offsets spread the pool across the cycle, so at any
        // instant a fraction of the antibody pool is active.
        let frame = s.animate(3.0).unwrap();
        let visible =
            frame[0].iter().filter(|t| t.scale.x > 0.0).count();
        assert!(visible > 0, "expected at least one visible antibody");
        assert!(visible < s.pool_len(), "pool should never be all-on");
    }
}
