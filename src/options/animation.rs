use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Secretion-cycle and idle-sway timing parameters.
pub struct AnimationOptions {
    /// Full vesicle-to-antibody cycle length in seconds.
    #[schemars(title = "Cycle Duration", range(min = 1.0, max = 30.0), extend("step" = 0.5))]
    pub cycle_duration: f32,
    /// Fraction of the cycle spent in the vesicle phase; the remainder is
    /// the antibody phase.
    #[schemars(skip)]
    pub transition_fraction: f32,
    /// Number of secretion paths generated at load.
    #[schemars(title = "Path Count", range(min = 1, max = 32), extend("step" = 1.0))]
    pub path_count: usize,
    /// Vesicle pool size per path.
    #[schemars(skip)]
    pub vesicles_per_path: usize,
    /// Antibody pool size per path.
    #[schemars(skip)]
    pub antibodies_per_path: usize,
    /// Peak particle scale during its active phase.
    #[schemars(skip)]
    pub peak_scale: f32,
    /// Radius of the microtubule track a vesicle rides on; vesicles offset
    /// sideways by (scale + this) so they sit on the track.
    #[schemars(skip)]
    pub tube_radius: f32,
    /// Maximum outward travel of a released antibody past the path end.
    #[schemars(skip)]
    pub antibody_travel: f32,
    /// Amplitude of the antibody's sinusoidal lateral drift.
    #[schemars(skip)]
    pub drift_amplitude: f32,
    /// Idle sway amplitude in radians.
    #[schemars(title = "Sway Amplitude", range(min = 0.0, max = 0.3), extend("step" = 0.01))]
    pub sway_amplitude: f32,
    /// Idle sway angular frequencies (X axis, Y axis), rad/s.
    #[schemars(skip)]
    pub sway_speed: [f32; 2],
}

impl AnimationOptions {
    /// Total vesicle pool size.
    #[must_use]
    pub fn vesicle_pool(&self) -> usize {
        self.path_count * self.vesicles_per_path
    }

    /// Total antibody pool size.
    #[must_use]
    pub fn antibody_pool(&self) -> usize {
        self.path_count * self.antibodies_per_path
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            cycle_duration: 6.0,
            transition_fraction: 0.75,
            path_count: 8,
            vesicles_per_path: 2,
            antibodies_per_path: 8,
            peak_scale: 0.25,
            tube_radius: 0.05,
            antibody_travel: 2.5,
            drift_amplitude: 0.2,
            sway_amplitude: 0.06,
            sway_speed: [0.23, 0.31],
        }
    }
}
