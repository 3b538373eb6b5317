use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::organelle::OrganelleId;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// Color palette options. RGB triples in linear [0, 1].
pub struct ColorOptions {
    /// Outer membrane shell.
    pub membrane: [f32; 3],
    /// Nuclear envelope.
    pub nucleus: [f32; 3],
    /// Nucleolus sphere inside the nucleus.
    pub nucleolus: [f32; 3],
    /// Chromatin strand tubes.
    pub chromatin: [f32; 3],
    /// Golgi cisternae.
    pub golgi: [f32; 3],
    /// Rough ER cisterna sheets.
    pub rer: [f32; 3],
    /// Mitochondrion outer body.
    pub mitochondria: [f32; 3],
    /// Lysosome spheres.
    pub lysosome: [f32; 3],
    /// Centriole microtubule cylinders.
    pub centriole: [f32; 3],
    /// Free and membrane-bound ribosome dots.
    pub ribosome: [f32; 3],
    /// Cytoskeletal microtubule rods.
    pub microtubule: [f32; 3],
    /// Transport vesicle spheres.
    pub vesicle: [f32; 3],
    /// Secreted antibody Y-shapes.
    pub antibody: [f32; 3],
    /// Emissive color applied while an organelle is hovered (and nothing
    /// is selected).
    pub hover_emissive: [f32; 3],
}

impl ColorOptions {
    /// Base color for an organelle.
    #[must_use]
    pub fn organelle(&self, id: OrganelleId) -> [f32; 3] {
        match id {
            OrganelleId::Nucleus => self.nucleus,
            OrganelleId::Golgi => self.golgi,
            OrganelleId::Rer => self.rer,
            OrganelleId::Mitochondria => self.mitochondria,
            OrganelleId::Lysosomes => self.lysosome,
            OrganelleId::Centrioles => self.centriole,
            OrganelleId::FreeRibosomes => self.ribosome,
            OrganelleId::Microtubules => self.microtubule,
            OrganelleId::Vesicles => self.vesicle,
            OrganelleId::Antibodies => self.antibody,
        }
    }
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            membrane: [0.96, 0.87, 0.70],
            nucleus: [0.55, 0.41, 0.78],
            nucleolus: [0.35, 0.22, 0.55],
            chromatin: [0.80, 0.70, 0.95],
            golgi: [0.95, 0.60, 0.25],
            rer: [0.35, 0.55, 0.85],
            mitochondria: [0.85, 0.30, 0.30],
            lysosome: [0.45, 0.75, 0.40],
            centriole: [0.60, 0.60, 0.65],
            ribosome: [0.25, 0.25, 0.30],
            microtubule: [0.70, 0.75, 0.80],
            vesicle: [0.95, 0.80, 0.35],
            antibody: [0.30, 0.80, 0.85],
            hover_emissive: [0.25, 0.25, 0.10],
        }
    }
}
