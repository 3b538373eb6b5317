use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Geometry detail level for organelle meshes.
///
/// Several organelles carry both a full procedural mesh and a cheap
/// primitive stand-in; this switch picks which one gets built.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    /// Full procedural geometry (default).
    High,
    /// Primitive stand-ins (spheres/capsules) for low-end consumers.
    Simple,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Display toggles and shared opacity behavior.
pub struct DisplayOptions {
    /// Opacity multiplier applied to every non-selected organelle while a
    /// selection is active.
    #[schemars(title = "Ghost Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub ghost_opacity: f32,
    /// Resting opacity of the outer membrane shell.
    #[schemars(title = "Membrane Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub membrane_opacity: f32,
    /// Membrane opacity while any organelle is selected (near-zero so the
    /// interior is visible).
    #[schemars(title = "Membrane Opacity (selected)", range(min = 0.0, max = 0.2), extend("step" = 0.005))]
    pub membrane_selected_opacity: f32,
    /// Whether the selected organelle shows its floating label.
    #[schemars(title = "Show Labels")]
    pub show_labels: bool,
    /// Vertical offset of the floating label above an organelle.
    #[schemars(skip)]
    pub label_offset: f32,
    /// Organelle mesh detail level.
    #[schemars(title = "Detail Level")]
    pub detail: DetailLevel,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            ghost_opacity: 0.1,
            membrane_opacity: 0.35,
            membrane_selected_opacity: 0.02,
            show_labels: true,
            label_offset: 0.9,
            detail: DetailLevel::High,
        }
    }
}
