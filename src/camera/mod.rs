//! Orbit-distance logic.
//!
//! The core does not own the camera; the consumer's orbit controls do.
//! It only reacts to zoom-direction signals by stepping a clamped
//! distance, which the consumer reads back each frame.

use crate::input::ZoomDirection;
use crate::options::CameraOptions;

/// Clamped orbit distance driven by zoom signals.
#[derive(Debug, Clone)]
pub struct OrbitDistance {
    distance: f32,
    opts: CameraOptions,
}

impl OrbitDistance {
    /// Start at the configured initial distance.
    #[must_use]
    pub fn new(opts: CameraOptions) -> Self {
        let distance = opts
            .initial_distance
            .clamp(opts.min_distance, opts.max_distance);
        Self { distance, opts }
    }

    /// Current orbit distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Apply one zoom step, clamped to the configured range.
    pub fn zoom(&mut self, direction: ZoomDirection) {
        let step = match direction {
            ZoomDirection::In => -self.opts.zoom_step,
            ZoomDirection::Out => self.opts.zoom_step,
        };
        self.distance = (self.distance + step)
            .clamp(self.opts.min_distance, self.opts.max_distance);
    }

    /// Snap back to the initial distance (the "reset view" control).
    pub fn reset(&mut self) {
        self.distance = self
            .opts
            .initial_distance
            .clamp(self.opts.min_distance, self.opts.max_distance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_steps_and_clamps() {
        let opts = CameraOptions::default();
        let mut cam = OrbitDistance::new(opts.clone());
        assert_eq!(cam.distance(), opts.initial_distance);

        cam.zoom(ZoomDirection::In);
        assert_eq!(cam.distance(), opts.initial_distance - opts.zoom_step);

        // Grind into the near clamp
        for _ in 0..100 {
            cam.zoom(ZoomDirection::In);
        }
        assert_eq!(cam.distance(), opts.min_distance);

        // And the far clamp
        for _ in 0..100 {
            cam.zoom(ZoomDirection::Out);
        }
        assert_eq!(cam.distance(), opts.max_distance);
    }

    #[test]
    fn reset_restores_initial_distance() {
        let opts = CameraOptions::default();
        let mut cam = OrbitDistance::new(opts.clone());
        cam.zoom(ZoomDirection::Out);
        cam.zoom(ZoomDirection::Out);
        cam.reset();
        assert_eq!(cam.distance(), opts.initial_distance);
    }
}
