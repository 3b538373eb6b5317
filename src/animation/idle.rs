//! Idle sway: the whole-cell decorative oscillation.

use glam::Quat;

use crate::options::AnimationOptions;

/// Sway angles (radians) around X and Y at elapsed time `t`.
///
/// Two independent low-frequency sinusoids; pure in `t`, so pausing or
/// seeking the clock cannot accumulate drift.
#[must_use]
pub fn sway_angles(t: f32, opts: &AnimationOptions) -> (f32, f32) {
    (
        (t * opts.sway_speed[0]).sin() * opts.sway_amplitude,
        (t * opts.sway_speed[1]).cos() * opts.sway_amplitude,
    )
}

/// Sway as a rotation for the cell root transform.
#[must_use]
pub fn sway_rotation(t: f32, opts: &AnimationOptions) -> Quat {
    let (rx, ry) = sway_angles(t, opts);
    Quat::from_rotation_y(ry) * Quat::from_rotation_x(rx)
}
