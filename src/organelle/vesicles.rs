//! Transport vesicles riding the secretion tracks, with tumbling cargo.

use glam::Vec3;
use rand::Rng;

use super::{FrameTransforms, Organelle, OrganelleId};
use crate::animation::secretion::{
    cargo_state, spawn_pool, vesicle_state, Particle,
};
use crate::geometry::antibody::y_mesh;
use crate::geometry::mesh::uv_sphere;
use crate::geometry::SecretionPath;
use crate::options::{AnimationOptions, Options};
use crate::scene::{InstancedMesh, Transform};

/// The vesicle stream: a fixed pool of particles cycling along the shared
/// secretion paths. Mesh index 0 is the vesicle body, index 1 the cargo.
pub struct Vesicles {
    meshes: Vec<InstancedMesh>,
    paths: Vec<SecretionPath>,
    pool: Vec<Particle>,
    anim: AnimationOptions,
    label_anchor: Vec3,
    hovered: bool,
}

impl Vesicles {
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
            opts.animation.vesicles_per_path,
        );
        // Placeholder transforms; animate() is authoritative every frame.
        let hidden = vec![
            Transform {
                scale: Vec3::ZERO,
                ..Transform::IDENTITY
            };
            pool.len()
        ];
        let meshes = vec![
            InstancedMesh {
                mesh: uv_sphere(1.0, 14, 10),
                transforms: hidden.clone(),
            },
            InstancedMesh {
                mesh: y_mesh(),
                transforms: hidden,
            },
        ];
        let label_anchor = paths.first().map_or(Vec3::ZERO, |p| {
            p.start.lerp(p.end, 0.5) + Vec3::Y * opts.display.label_offset
        });
        Self {
            meshes,
            paths,
            pool,
            anim: opts.animation.clone(),
            label_anchor,
            hovered: false,
        }
    }

    /// Pool size (2 x path count with default options).
    #[must_use]
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }
}

impl Organelle for Vesicles {
    fn id(&self) -> OrganelleId {
        OrganelleId::Vesicles
    }

    fn meshes(&self) -> &[InstancedMesh] {
        &self.meshes
    }

    fn label_anchor(&self) -> Vec3 {
        self.label_anchor
    }

    fn base_opacity(&self) -> f32 {
        0.9
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

    fn animate(&self, elapsed: f32) -> Option<FrameTransforms> {
        let mut bodies = Vec::with_capacity(self.pool.len());
        let mut cargo = Vec::with_capacity(self.pool.len());
        for particle in &self.pool {
            let path = &self.paths[particle.path_index];
            let v = vesicle_state(elapsed, particle, path, &self.anim);
            let c = cargo_state(elapsed, &v, particle, &self.anim);
            bodies.push(Transform {
                translation: v.position,
                rotation: v.rotation,
                scale: Vec3::splat(v.scale),
            });
            cargo.push(Transform {
                translation: c.position,
                rotation: c.rotation,
                scale: Vec3::splat(c.scale),
            });
        }
        Some(vec![bodies, cargo])
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::geometry::paths::generate;

    fn build() -> Vesicles {
        let mut rng = StdRng::seed_from_u64(1);
        let opts = Options::default();
        let paths = generate(&mut rng, opts.animation.path_count);
        Vesicles::new(&mut rng, paths, &opts)
    }

    #[test]
    fn pool_is_twice_the_path_count() {
        let v = build();
        assert_eq!(v.pool_len(), 16);
    }

    #[test]
    fn animate_covers_both_meshes() {
        let v = build();
        let frame = v.animate(1.25).unwrap();
        assert_eq!(frame.len(), v.meshes().len());
        assert_eq!(frame[0].len(), v.pool_len());
        assert_eq!(frame[1].len(), v.pool_len());
    }

    #[test]
    fn cargo_stays_inside_its_vesicle() {
        let v = build();
        let frame = v.animate(2.0).unwrap();
        for (body, cargo) in frame[0].iter().zip(&frame[1]) {
            assert_eq!(body.translation, cargo.translation);
            assert!((cargo.scale.x - body.scale.x * 0.5).abs() < 1e-6);
        }
    }
}
