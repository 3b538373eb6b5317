use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Orbit-distance and zoom parameters. The core only steps and clamps the
/// orbit distance; projection and controls live in the consumer.
pub struct CameraOptions {
    /// Vertical field of view in degrees (forwarded to the consumer).
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Initial orbit distance from the cell center.
    #[schemars(skip)]
    pub initial_distance: f32,
    /// Minimum orbit distance (zoom-in clamp).
    #[schemars(title = "Min Distance", range(min = 1.0, max = 20.0), extend("step" = 0.5))]
    pub min_distance: f32,
    /// Maximum orbit distance (zoom-out clamp).
    #[schemars(title = "Max Distance", range(min = 5.0, max = 60.0), extend("step" = 0.5))]
    pub max_distance: f32,
    /// Distance change per zoom step.
    #[schemars(title = "Zoom Step", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub zoom_step: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            initial_distance: 14.0,
            min_distance: 6.0,
            max_distance: 30.0,
            zoom_step: 1.5,
        }
    }
}
