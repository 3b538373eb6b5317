//! Scene-graph data the core hands to the rendering consumer.
//!
//! The crate does not draw; it describes. A consumer walks the composed
//! [`FrameState`](super::FrameState) and uploads these plain transforms,
//! materials, and mesh buffers into whatever scene-graph API it wraps.

use glam::{Mat4, Quat, Vec3};

use crate::geometry::MeshData;

/// Position/rotation/scale of one placed shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Translation.
    pub translation: Vec3,
    /// Orientation.
    pub rotation: Quat,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Transform {
    /// Identity transform.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Translation-only transform.
    #[must_use]
    pub fn at(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Compose into a single matrix for upload.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            self.rotation,
            self.translation,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Material parameters mirroring the consumer's standard PBR surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base color, linear RGB.
    pub color: [f32; 3],
    /// Opacity in [0, 1].
    pub opacity: f32,
    /// Whether the surface renders in the transparent pass.
    pub transparent: bool,
    /// Emissive color (hover highlight).
    pub emissive: [f32; 3],
    /// PBR roughness.
    pub roughness: f32,
    /// PBR metalness.
    pub metalness: f32,
}

impl Material {
    /// A matte opaque surface of the given color.
    #[must_use]
    pub fn matte(color: [f32; 3]) -> Self {
        Self {
            color,
            opacity: 1.0,
            transparent: false,
            emissive: [0.0; 3],
            roughness: 0.7,
            metalness: 0.0,
        }
    }
}

/// One shape placed many times (instanced rendering for uniform
/// populations like ribosomes and antibodies).
#[derive(Debug, Clone)]
pub struct InstancedMesh {
    /// Shared shape.
    pub mesh: MeshData,
    /// One transform per instance.
    pub transforms: Vec<Transform>,
}

impl InstancedMesh {
    /// A single placement of a shape.
    #[must_use]
    pub fn single(mesh: MeshData, transform: Transform) -> Self {
        Self {
            mesh,
            transforms: vec![transform],
        }
    }
}
