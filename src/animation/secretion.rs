//! Secretion-cycle particle kinematics.
//!
//! Every particle's transform is a pure function of (elapsed time, fixed
//! particle parameters): no particle carries velocity or accumulated state,
//! so the whole animation is deterministic and seekable from any clock
//! value. Vesicles and antibodies share one timing function and occupy
//! disjoint windows of the cycle; a vesicle "becomes" antibodies only in
//! the sense that its window ends where theirs begins on the same track.

use glam::{Quat, Vec3};
use rand::Rng;

use crate::geometry::SecretionPath;
use crate::options::AnimationOptions;

/// Phase offsets are drawn from [0, `PHASE_RANGE`).
pub const PHASE_RANGE: f32 = 10.0;

/// Fixed per-particle parameters, assigned once at pool construction.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    /// Which secretion path this particle rides.
    pub path_index: usize,
    /// Random phase offset into the cycle.
    pub phase_offset: f32,
    /// Pool index, used to decorrelate drift between neighbors.
    pub index: usize,
}

/// Computed particle transform for one frame. `scale == 0` means hidden.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleState {
    /// World position.
    pub position: Vec3,
    /// Tumbling orientation.
    pub rotation: Quat,
    /// Uniform scale; zero outside the particle's active phase.
    pub scale: f32,
}

impl ParticleState {
    const HIDDEN: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: 0.0,
    };

    /// Whether the particle renders this frame.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.scale > 0.0
    }
}

/// Build a particle pool of `per_path` particles per path.
///
/// Paths are assigned round-robin so every track carries the same load.
#[must_use]
pub fn spawn_pool(
    rng: &mut impl Rng,
    path_count: usize,
    per_path: usize,
) -> Vec<Particle> {
    (0..path_count * per_path)
        .map(|index| Particle {
            path_index: index % path_count,
            phase_offset: rng.random_range(0.0..PHASE_RANGE),
            index,
        })
        .collect()
}

/// Cycle progress in [0, 1) for a particle at elapsed time `t`.
#[must_use]
pub fn raw_progress(t: f32, particle: &Particle, opts: &AnimationOptions) -> f32 {
    ((t + particle.phase_offset) % opts.cycle_duration) / opts.cycle_duration
}

/// Scale envelope: ramp up over `ramp_in`, hold, ramp down over the final
/// `ramp_out` of stage progress.
fn envelope(stage: f32, ramp_in: f32, ramp_out: f32) -> f32 {
    if stage < ramp_in {
        stage / ramp_in
    } else if stage > 1.0 - ramp_out {
        (1.0 - stage) / ramp_out
    } else {
        1.0
    }
}

/// A unit vector perpendicular to `dir`.
///
/// Derived from the +Y reference; a track running exactly parallel to +Y
/// would make that cross product vanish, so +X substitutes as the fallback
/// axis instead of propagating a degenerate frame.
fn perpendicular(dir: Vec3) -> Vec3 {
    let side = dir.cross(Vec3::Y);
    if side.length_squared() < 1e-8 {
        return Vec3::X;
    }
    side.normalize()
}

/// Continuous tumbling rotation, periodic over one cycle.
fn tumble(t: f32, index: usize, cycle_duration: f32) -> Quat {
    let omega = std::f32::consts::TAU / cycle_duration;
    let i = index as f32;
    Quat::from_euler(
        glam::EulerRot::XYZ,
        t * omega * 2.0 + i * 0.9,
        t * omega * 3.0 + i * 0.4,
        t * omega,
    )
}

/// Vesicle-phase transform for one particle at elapsed time `t`.
///
/// Hidden outside `raw < transition_fraction`. Rides the track from start
/// to end, offset sideways by (scale + tube radius) so it sits on top of
/// the microtubule rather than intersecting it. Scale ramps in and out over
/// the first and last 10% of the stage, simulating budding and fusion.
#[must_use]
pub fn vesicle_state(
    t: f32,
    particle: &Particle,
    path: &SecretionPath,
    opts: &AnimationOptions,
) -> ParticleState {
    let raw = raw_progress(t, particle, opts);
    if raw >= opts.transition_fraction {
        return ParticleState::HIDDEN;
    }
    let stage = raw / opts.transition_fraction;
    let scale = opts.peak_scale * envelope(stage, 0.1, 0.1);
    let dir = path.direction();
    let along = path.start.lerp(path.end, stage);
    let position = along + perpendicular(dir) * (scale + opts.tube_radius);
    ParticleState {
        position,
        rotation: Quat::IDENTITY,
        scale,
    }
}

/// Cargo transform: the hidden antibody payload inside a vesicle.
///
/// Co-moves with the vesicle at half scale and tumbles continuously.
#[must_use]
pub fn cargo_state(
    t: f32,
    vesicle: &ParticleState,
    particle: &Particle,
    opts: &AnimationOptions,
) -> ParticleState {
    ParticleState {
        position: vesicle.position,
        rotation: tumble(t, particle.index, opts.cycle_duration),
        scale: vesicle.scale * 0.5,
    }
}

/// Antibody-phase transform for one particle at elapsed time `t`.
///
/// Hidden until `raw >= transition_fraction`. Continues outward past the
/// track end along the same direction, with a small sinusoidal lateral
/// drift standing in for diffusion. Scale ramps in over the first 10% of
/// the stage and fades out past 80%.
#[must_use]
pub fn antibody_state(
    t: f32,
    particle: &Particle,
    path: &SecretionPath,
    opts: &AnimationOptions,
) -> ParticleState {
    let raw = raw_progress(t, particle, opts);
    if raw < opts.transition_fraction {
        return ParticleState::HIDDEN;
    }
    let stage =
        (raw - opts.transition_fraction) / (1.0 - opts.transition_fraction);
    let scale = if stage > 0.8 {
        opts.peak_scale * ((1.0 - stage) / 0.2)
    } else {
        opts.peak_scale * envelope(stage, 0.1, 0.0)
    };

    let dir = path.direction();
    let side = perpendicular(dir);
    let up = side.cross(dir);
    let i = particle.index as f32;
    // Drift frequencies are harmonics of the cycle so the whole state stays
    // exactly periodic over one cycle duration.
    let omega = std::f32::consts::TAU / opts.cycle_duration;
    let drift = side * (t * omega + i * 1.3).sin() * opts.drift_amplitude
        + up * (t * omega * 2.0 + i * 0.7).cos() * opts.drift_amplitude;
    let position = path.end + dir * (opts.antibody_travel * stage) + drift;

    ParticleState {
        position,
        rotation: tumble(t, particle.index, opts.cycle_duration),
        scale,
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn path() -> SecretionPath {
        SecretionPath {
            start: Vec3::new(1.6, -0.4, 0.6),
            end: Vec3::new(0.4, -3.0, 0.2),
        }
    }

    fn particle(offset: f32) -> Particle {
        Particle {
            path_index: 0,
            phase_offset: offset,
            index: 3,
        }
    }

    fn assert_state_eq(a: &ParticleState, b: &ParticleState) {
        assert!((a.position - b.position).length() < 1e-3);
        assert!((a.scale - b.scale).abs() < 1e-4);
    }

    #[test]
    fn states_are_periodic_over_one_cycle() {
        let opts = AnimationOptions::default();
        let p = particle(2.7);
        let path = path();
        for step in 0..40 {
            let t = step as f32 * 0.37;
            // Drift/tumble depend on absolute time, so compare the pure
            // track kinematics: strip drift by comparing scale and the
            // along-track component.
            let a = vesicle_state(t, &p, &path, &opts);
            let b = vesicle_state(t + opts.cycle_duration, &p, &path, &opts);
            assert_state_eq(&a, &b);

            let a = raw_progress(t, &p, &opts);
            let b = raw_progress(t + opts.cycle_duration, &p, &opts);
            assert!((a - b).abs() < 1e-3);
        }
    }

    #[test]
    fn antibody_position_is_periodic_including_drift() {
        let opts = AnimationOptions::default();
        let p = particle(4.1);
        let path = path();
        for step in 0..40 {
            let t = step as f32 * 0.29;
            let a = antibody_state(t, &p, &path, &opts);
            let b = antibody_state(t + opts.cycle_duration, &p, &path, &opts);
            assert_state_eq(&a, &b);
        }
    }

    #[test]
    fn transition_has_no_overlap_at_full_scale() {
        let opts = AnimationOptions::default();
        let p = particle(0.0);
        let path = path();
        // Sweep a full cycle densely; at no time may both representations
        // be at (or near) full scale simultaneously.
        for step in 0..600 {
            let t = step as f32 * 0.01;
            let v = vesicle_state(t, &p, &path, &opts);
            let a = antibody_state(t, &p, &path, &opts);
            let full = opts.peak_scale * 0.99;
            assert!(
                !(v.scale > full && a.scale > full),
                "both at full scale at t={t}"
            );
            // Disjoint phase windows: never both visible at all
            assert!(
                !(v.visible() && a.visible()),
                "both visible at t={t} (v={}, a={})",
                v.scale,
                a.scale
            );
        }
    }

    #[test]
    fn vesicle_hidden_exactly_at_transition() {
        let opts = AnimationOptions::default();
        let p = particle(0.0);
        // raw = 0.75 exactly at t = 4.5 with zero offset
        let t = opts.cycle_duration * opts.transition_fraction;
        let v = vesicle_state(t, &p, &path(), &opts);
        assert_eq!(v.scale, 0.0);
        let a = antibody_state(t, &p, &path(), &opts);
        // Antibody phase has just begun: present but still ramping from 0
        assert!(a.scale < 0.01);
    }

    #[test]
    fn vesicle_rides_from_start_to_end() {
        let opts = AnimationOptions::default();
        let p = particle(0.0);
        let path = path();
        // Mid-phase: position should sit between start and end, offset off
        // the track by (scale + tube_radius).
        let t = opts.cycle_duration * opts.transition_fraction * 0.5;
        let v = vesicle_state(t, &p, &path, &opts);
        assert_eq!(v.scale, opts.peak_scale);
        let mid = path.start.lerp(path.end, 0.5);
        let off = (v.position - mid).length();
        assert!(
            (off - (opts.peak_scale + opts.tube_radius)).abs() < 1e-4,
            "track offset {off}"
        );
        // Offset is perpendicular to the travel direction
        assert!((v.position - mid).dot(path.direction()).abs() < 1e-4);
    }

    #[test]
    fn antibody_travels_outward_and_fades() {
        let opts = AnimationOptions::default();
        let p = particle(0.0);
        let path = path();
        let phase_start =
            opts.cycle_duration * opts.transition_fraction;
        let phase_len =
            opts.cycle_duration * (1.0 - opts.transition_fraction);

        // Mid antibody phase: full scale, past the path end
        let t = phase_start + phase_len * 0.5;
        let a = antibody_state(t, &p, &path, &opts);
        assert_eq!(a.scale, opts.peak_scale);
        let along = (a.position - path.end).dot(path.direction());
        assert!(
            (along - opts.antibody_travel * 0.5).abs()
                < opts.drift_amplitude + 1e-3
        );

        // Fade window: scale strictly below peak past stage 0.8
        let t = phase_start + phase_len * 0.9;
        let a = antibody_state(t, &p, &path, &opts);
        assert!(a.scale > 0.0 && a.scale < opts.peak_scale);
    }

    #[test]
    fn cargo_tracks_vesicle_at_half_scale() {
        let opts = AnimationOptions::default();
        let p = particle(0.0);
        let t = 1.8;
        let v = vesicle_state(t, &p, &path(), &opts);
        let c = cargo_state(t, &v, &p, &opts);
        assert_eq!(c.position, v.position);
        assert_eq!(c.scale, v.scale * 0.5);
    }

    #[test]
    fn perpendicular_falls_back_on_vertical_tracks() {
        let vertical = SecretionPath {
            start: Vec3::new(0.0, 1.0, 0.0),
            end: Vec3::new(0.0, -2.0, 0.0),
        };
        let opts = AnimationOptions::default();
        let p = particle(0.0);
        let t = opts.cycle_duration * opts.transition_fraction * 0.5;
        let v = vesicle_state(t, &p, &vertical, &opts);
        // No NaNs, and the offset landed on the +X fallback axis
        assert!(v.position.is_finite());
        let mid = vertical.start.lerp(vertical.end, 0.5);
        let off = v.position - mid;
        assert!(off.x > 0.0 && off.y.abs() < 1e-4 && off.z.abs() < 1e-4);
    }

    #[test]
    fn pool_sizes_scale_with_path_count() {
        let mut rng = StdRng::seed_from_u64(1);
        for path_count in [1_usize, 4, 8, 13] {
            let vesicles = spawn_pool(&mut rng, path_count, 2);
            let antibodies = spawn_pool(&mut rng, path_count, 8);
            assert_eq!(vesicles.len(), 2 * path_count);
            assert_eq!(antibodies.len(), 8 * path_count);
            // Round-robin assignment covers every path
            for i in 0..path_count {
                assert!(vesicles.iter().any(|p| p.path_index == i));
            }
        }
    }

    #[test]
    fn phase_offsets_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(8);
        for p in spawn_pool(&mut rng, 8, 8) {
            assert!((0.0..PHASE_RANGE).contains(&p.phase_offset));
        }
    }
}
