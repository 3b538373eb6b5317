//! Chromatin strand curves inside the nuclear envelope.
//!
//! Each strand samples a handful of control points on a sphere shell and
//! runs a Catmull-Rom curve through them, then sweeps a thin tube along the
//! result. Generated once per mount from a seeded RNG.

use glam::Vec3;
use rand::Rng;

use super::mesh::{MeshData, MeshVertex};

/// Number of strands per nucleus.
pub const STRAND_COUNT: usize = 12;
/// Control points per strand.
pub const CONTROL_POINTS: usize = 5;
/// Shell radius range the control points are sampled from.
pub const SHELL_RADIUS: (f32, f32) = (1.5, 2.0);

/// Sample a point uniformly on a sphere shell between the given radii.
///
/// Latitude uses inverse-cosine sampling so density is uniform over the
/// sphere rather than clustering at the poles.
pub fn sample_shell_point(
    rng: &mut impl Rng,
    r_min: f32,
    r_max: f32,
) -> Vec3 {
    let theta = rng.random_range(0.0..std::f32::consts::TAU);
    let phi = (1.0 - 2.0 * rng.random::<f32>()).acos();
    let r = rng.random_range(r_min..r_max);
    Vec3::new(
        phi.sin() * theta.cos(),
        phi.cos(),
        phi.sin() * theta.sin(),
    ) * r
}

/// Evaluate a centripetal-free (uniform) Catmull-Rom segment at `t` in
/// [0, 1] with neighbor points `p0..p3`.
fn catmull_rom(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (p2 - p0) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (3.0 * p1 - 3.0 * p2 - p0 + p3) * t3)
}

/// Interpolate a smooth open curve through `control` points.
///
/// Endpoints are duplicated so the curve passes through the first and last
/// control point. `samples_per_segment` interior samples per span.
#[must_use]
pub fn smooth_curve(control: &[Vec3], samples_per_segment: usize) -> Vec<Vec3> {
    if control.len() < 2 {
        return control.to_vec();
    }
    let n = control.len();
    let at = |i: isize| -> Vec3 {
        control[i.clamp(0, n as isize - 1) as usize]
    };
    let mut out = Vec::with_capacity((n - 1) * samples_per_segment + 1);
    for seg in 0..n - 1 {
        let s = seg as isize;
        for k in 0..samples_per_segment {
            let t = k as f32 / samples_per_segment as f32;
            out.push(catmull_rom(at(s - 1), at(s), at(s + 1), at(s + 2), t));
        }
    }
    out.push(control[n - 1]);
    out
}

/// One generated chromatin strand: raw control points plus the smoothed
/// curve used for tube sweeping.
#[derive(Debug, Clone)]
pub struct ChromatinStrand {
    /// Control points on the shell.
    pub control: Vec<Vec3>,
    /// Smoothed curve through the control points.
    pub curve: Vec<Vec3>,
}

/// Generate the full set of chromatin strands from an RNG.
#[must_use]
pub fn generate_strands(rng: &mut impl Rng) -> Vec<ChromatinStrand> {
    (0..STRAND_COUNT)
        .map(|_| {
            let control: Vec<Vec3> = (0..CONTROL_POINTS)
                .map(|_| {
                    sample_shell_point(rng, SHELL_RADIUS.0, SHELL_RADIUS.1)
                })
                .collect();
            let curve = smooth_curve(&control, 8);
            ChromatinStrand { control, curve }
        })
        .collect()
}

/// Sweep a circular tube along a polyline curve.
///
/// Frames use the curve tangent with a +Y reference; when the tangent is
/// parallel to +Y the reference falls back to +X.
#[must_use]
pub fn sweep_tube(curve: &[Vec3], radius: f32, segments: usize) -> MeshData {
    let mut mesh = MeshData::default();
    if curve.len() < 2 {
        return mesh;
    }
    for (i, &p) in curve.iter().enumerate() {
        let tangent = if i == 0 {
            curve[1] - curve[0]
        } else if i == curve.len() - 1 {
            curve[i] - curve[i - 1]
        } else {
            curve[i + 1] - curve[i - 1]
        }
        .normalize_or_zero();
        let mut side = tangent.cross(Vec3::Y);
        if side.length_squared() < 1e-8 {
            side = tangent.cross(Vec3::X);
        }
        let side = side.normalize_or_zero();
        let up = side.cross(tangent);
        for s in 0..=segments {
            let a = std::f32::consts::TAU * s as f32 / segments as f32;
            let n = side * a.cos() + up * a.sin();
            mesh.vertices.push(MeshVertex {
                position: (p + n * radius).into(),
                normal: n.into(),
            });
        }
    }
    let stride = (segments + 1) as u32;
    for i in 0..(curve.len() - 1) as u32 {
        for s in 0..segments as u32 {
            let a = i * stride + s;
            let b = a + stride;
            mesh.indices.extend_from_slice(&[a, b, a + 1]);
            mesh.indices.extend_from_slice(&[a + 1, b, b + 1]);
        }
    }
    mesh
}
