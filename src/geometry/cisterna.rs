//! Cisterna surfaces: Golgi stack plates and rough-ER sheets.
//!
//! Both start from a regular primitive and get their organic look from
//! low-frequency displacement passes, with normals recomputed afterwards.

use glam::Vec3;

use super::mesh::{partial_torus, plane_grid, MeshData};

/// Angular span of a Golgi cisterna (radians).
pub const GOLGI_ARC: f32 = 1.6 * std::f32::consts::PI;
/// Vertical flattening applied to the cisterna torus.
pub const GOLGI_FLATTEN: f32 = 0.4;

/// Build one Golgi cisterna plate.
///
/// A partial torus flattened vertically, with plate height perturbed by a
/// low-frequency sine of the planar coordinates for an organic wave.
#[must_use]
pub fn golgi_cisterna(major_radius: f32, minor_radius: f32) -> MeshData {
    let mut mesh = partial_torus(major_radius, minor_radius, GOLGI_ARC, 48, 10);
    mesh.displace(|p| {
        let y = p.y * GOLGI_FLATTEN;
        let wave = (p.x * 1.7).sin() * (p.z * 1.3).cos() * 0.06;
        Vec3::new(p.x, y + wave, p.z)
    });
    mesh
}

/// Quadratic edge-roll correction for a sheet coordinate.
///
/// Zero inside 70% of the half-extent; beyond that, rises quadratically to
/// `strength` at the edge so the sheet rim curls.
#[must_use]
pub fn edge_roll(coord: f32, half_extent: f32, strength: f32) -> f32 {
    let threshold = 0.7 * half_extent;
    let overshoot = coord.abs() - threshold;
    if overshoot <= 0.0 {
        return 0.0;
    }
    let t = overshoot / (half_extent - threshold);
    strength * t * t
}

/// Parameters for a rough-ER cisterna sheet.
#[derive(Debug, Clone, Copy)]
pub struct SheetParams {
    /// Sheet width (X extent).
    pub width: f32,
    /// Sheet depth (Z extent).
    pub depth: f32,
    /// Parabolic cross-curvature strength ("taco" fold across X).
    pub curvature: f32,
    /// Wave perturbation amplitude.
    pub wave_amplitude: f32,
    /// Edge-roll strength at the sheet rim.
    pub roll_strength: f32,
}

impl Default for SheetParams {
    fn default() -> Self {
        Self {
            width: 2.4,
            depth: 1.4,
            curvature: 0.22,
            wave_amplitude: 0.05,
            roll_strength: 0.18,
        }
    }
}

/// Build one rough-ER cisterna sheet.
///
/// A subdivided grid with three stacked displacements: a parabolic fold
/// across the width, a low-frequency wave, and the quadratic edge roll on
/// both rims.
#[must_use]
pub fn rer_sheet(params: &SheetParams) -> MeshData {
    let mut mesh = plane_grid(params.width, params.depth, 24, 14);
    let hw = params.width * 0.5;
    let hd = params.depth * 0.5;
    mesh.displace(|p| {
        let fold = params.curvature * (p.x / hw) * (p.x / hw) * hw;
        let wave =
            (p.x * 2.3).sin() * (p.z * 3.1).cos() * params.wave_amplitude;
        let roll = edge_roll(p.x, hw, params.roll_strength)
            + edge_roll(p.z, hd, params.roll_strength);
        Vec3::new(p.x, p.y + fold + wave + roll, p.z)
    });
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golgi_cisterna_is_flattened() {
        let mesh = golgi_cisterna(1.0, 0.18);
        let max_y = mesh
            .vertices
            .iter()
            .map(|v| v.position[1].abs())
            .fold(0.0_f32, f32::max);
        // Unflattened torus would reach minor_radius; flattened plate stays
        // under minor_radius * flatten + wave amplitude.
        assert!(max_y < 0.18 * GOLGI_FLATTEN + 0.07);
    }

    #[test]
    fn edge_roll_zero_inside_threshold() {
        let hw = 1.0;
        assert_eq!(edge_roll(0.0, hw, 0.2), 0.0);
        assert_eq!(edge_roll(0.69, hw, 0.2), 0.0);
        assert_eq!(edge_roll(-0.5, hw, 0.2), 0.0);
    }

    #[test]
    fn edge_roll_quadratic_beyond_threshold() {
        let hw = 1.0;
        let at_edge = edge_roll(1.0, hw, 0.2);
        assert!((at_edge - 0.2).abs() < 1e-6);
        let halfway = edge_roll(0.85, hw, 0.2);
        assert!((halfway - 0.05).abs() < 1e-6);
        // Symmetric in sign
        assert_eq!(edge_roll(-0.85, hw, 0.2), halfway);
    }

    #[test]
    fn sheet_edges_curl_upward() {
        let params = SheetParams::default();
        let mesh = rer_sheet(&params);
        let hw = params.width * 0.5;
        // Compare rim height to the same row's center height: the roll term
        // must lift the rim relative to the fold + wave baseline.
        let rim_lift = edge_roll(hw, hw, params.roll_strength);
        assert!(rim_lift > 0.0);
        // And interior vertices get no roll at all.
        assert_eq!(edge_roll(hw * 0.5, hw, params.roll_strength), 0.0);
    }
}
