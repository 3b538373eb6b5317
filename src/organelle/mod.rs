//! Organelle visual components.
//!
//! One component per biological structure. Shared interaction behavior
//! (selectable, hoverable, fadeable, optionally animated) lives in the
//! [`Organelle`] trait; each variant only contributes its geometry and any
//! per-frame animation.

mod centrioles;
mod golgi;
pub mod info;
mod lysosomes;
mod microtubules;
mod mitochondria;
mod nucleus;
mod rer;
mod ribosomes;
mod stream;
mod vesicles;

pub use centrioles::Centrioles;
use glam::Vec3;
pub use golgi::Golgi;
pub use lysosomes::Lysosomes;
pub use microtubules::Microtubules;
pub use mitochondria::Mitochondria;
pub use nucleus::Nucleus;
pub use rer::Rer;
pub use ribosomes::FreeRibosomes;
use serde::{Deserialize, Serialize};
pub use stream::AntibodyStream;
pub use vesicles::Vesicles;

use crate::options::Options;
use crate::scene::{InstancedMesh, Material, Transform};

/// Identifier of one selectable organelle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum OrganelleId {
    /// Nuclear envelope, nucleolus, and chromatin.
    Nucleus,
    /// Golgi apparatus cisterna stack.
    Golgi,
    /// Rough endoplasmic reticulum.
    Rer,
    /// Mitochondria collection.
    Mitochondria,
    /// Lysosome collection.
    Lysosomes,
    /// Centriole pair.
    Centrioles,
    /// Free cytoplasmic ribosomes.
    FreeRibosomes,
    /// Cytoskeletal microtubules.
    Microtubules,
    /// Transport vesicle stream.
    Vesicles,
    /// Secreted antibody stream.
    Antibodies,
}

impl OrganelleId {
    /// Every organelle, in composition order.
    pub const ALL: [Self; 10] = [
        Self::Nucleus,
        Self::Golgi,
        Self::Rer,
        Self::Mitochondria,
        Self::Lysosomes,
        Self::Centrioles,
        Self::FreeRibosomes,
        Self::Microtubules,
        Self::Vesicles,
        Self::Antibodies,
    ];

    /// Stable snake_case name (catalog key, label text lookup).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Nucleus => "nucleus",
            Self::Golgi => "golgi",
            Self::Rer => "rer",
            Self::Mitochondria => "mitochondria",
            Self::Lysosomes => "lysosomes",
            Self::Centrioles => "centrioles",
            Self::FreeRibosomes => "free_ribosomes",
            Self::Microtubules => "microtubules",
            Self::Vesicles => "vesicles",
            Self::Antibodies => "antibodies",
        }
    }
}

/// The ghosting rule shared by every organelle.
///
/// No selection, or this organelle selected: base appearance. Any other
/// selection: base opacity × the ghost factor, forced transparent. This is
/// the sole visual consequence of selection.
#[must_use]
pub fn fade(
    base_opacity: f32,
    base_transparent: bool,
    id: OrganelleId,
    selection: Option<OrganelleId>,
    ghost_opacity: f32,
) -> (f32, bool) {
    match selection {
        None => (base_opacity, base_transparent),
        Some(sel) if sel == id => (base_opacity, base_transparent),
        Some(_) => (base_opacity * ghost_opacity, true),
    }
}

/// Per-frame transform overrides for an animated organelle, parallel to
/// its [`Organelle::meshes`] list.
pub type FrameTransforms = Vec<Vec<Transform>>;

/// Shared behavior of every organelle component.
///
/// Geometry is built once at construction from a seeded RNG and cached;
/// only appearance (opacity, emissive) responds to selection and hover.
pub trait Organelle {
    /// Which organelle this is.
    fn id(&self) -> OrganelleId;

    /// Cached mesh instances. Stable for the component's lifetime.
    fn meshes(&self) -> &[InstancedMesh];

    /// Anchor point for the floating label, already offset above the
    /// organelle.
    fn label_anchor(&self) -> Vec3;

    /// Resting opacity before any selection logic.
    fn base_opacity(&self) -> f32 {
        1.0
    }

    /// Whether the organelle renders transparent at rest.
    fn base_transparent(&self) -> bool {
        false
    }

    /// Local hover flag (pointer enter/leave).
    fn hovered(&self) -> bool;

    /// Set the local hover flag.
    fn set_hovered(&mut self, hovered: bool);

    /// Appearance for the current frame.
    ///
    /// Applies the shared fade rule; hover tints the emissive channel only,
    /// and only while nothing is selected.
    fn material(
        &self,
        selection: Option<OrganelleId>,
        opts: &Options,
    ) -> Material {
        let (opacity, transparent) = fade(
            self.base_opacity(),
            self.base_transparent(),
            self.id(),
            selection,
            opts.display.ghost_opacity,
        );
        let emissive = if self.hovered() && selection.is_none() {
            opts.colors.hover_emissive
        } else {
            [0.0; 3]
        };
        Material {
            color: opts.colors.organelle(self.id()),
            opacity,
            transparent,
            emissive,
            ..Material::matte([0.0; 3])
        }
    }

    /// Per-frame transform overrides for animated organelles.
    ///
    /// `None` (the default) means the cached transforms in
    /// [`Self::meshes`] are authoritative every frame.
    fn animate(&self, _elapsed: f32) -> Option<FrameTransforms> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_rule_matrix() {
        let id = OrganelleId::Golgi;
        // No selection: base passes through
        assert_eq!(fade(0.8, false, id, None, 0.1), (0.8, false));
        // Self-selected: base passes through
        assert_eq!(fade(0.8, false, id, Some(id), 0.1), (0.8, false));
        // Other selected: ghosted and transparent
        let (op, tr) =
            fade(0.8, false, id, Some(OrganelleId::Nucleus), 0.1);
        assert!((op - 0.08).abs() < 1e-6);
        assert!(tr);
    }

    #[test]
    fn fade_preserves_base_transparency_when_unselected() {
        let id = OrganelleId::Nucleus;
        assert_eq!(fade(0.5, true, id, None, 0.1), (0.5, true));
        assert_eq!(fade(0.5, true, id, Some(id), 0.1), (0.5, true));
    }

    #[test]
    fn every_id_has_a_unique_name() {
        let mut names: Vec<&str> =
            OrganelleId::ALL.iter().map(|id| id.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), OrganelleId::ALL.len());
    }

    #[test]
    fn id_serializes_as_snake_case() {
        let json = serde_json::to_string(&OrganelleId::FreeRibosomes)
            .unwrap();
        assert_eq!(json, "\"free_ribosomes\"");
    }
}
