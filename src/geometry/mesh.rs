//! CPU-side mesh buffers and primitive builders.
//!
//! Everything here is plain vertex/index data. Vertices are `bytemuck` Pod
//! so the consumer can cast a buffer straight to GPU bytes. Builders that
//! mutate vertex positions after the fact call [`MeshData::recompute_normals`]
//! before returning.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// A single mesh vertex: position + normal.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unit surface normal.
    pub normal: [f32; 3],
}

/// Indexed triangle mesh.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex buffer.
    pub vertices: Vec<MeshVertex>,
    /// Triangle index buffer (three indices per face).
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Vertex buffer as raw bytes for GPU upload.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Apply `f` to every vertex position, then recompute normals.
    pub fn displace(&mut self, mut f: impl FnMut(Vec3) -> Vec3) {
        for v in &mut self.vertices {
            v.position = f(Vec3::from(v.position)).into();
        }
        self.recompute_normals();
    }

    /// Recompute smooth per-vertex normals from face normals.
    ///
    /// Accumulates area-weighted face normals per vertex and normalizes.
    /// Degenerate faces contribute nothing.
    pub fn recompute_normals(&mut self) {
        let mut accum = vec![Vec3::ZERO; self.vertices.len()];
        for tri in self.indices.chunks_exact(3) {
            let (i0, i1, i2) =
                (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let p0 = Vec3::from(self.vertices[i0].position);
            let p1 = Vec3::from(self.vertices[i1].position);
            let p2 = Vec3::from(self.vertices[i2].position);
            let face = (p1 - p0).cross(p2 - p0);
            accum[i0] += face;
            accum[i1] += face;
            accum[i2] += face;
        }
        for (v, n) in self.vertices.iter_mut().zip(&accum) {
            v.normal = n.normalize_or_zero().into();
        }
    }
}

// ---------------------------------------------------------------------------
// Primitive builders
// ---------------------------------------------------------------------------

/// Build a UV sphere of the given radius.
#[must_use]
pub fn uv_sphere(radius: f32, segments: usize, rings: usize) -> MeshData {
    let mut mesh = MeshData::default();
    for r in 0..=rings {
        let v = r as f32 / rings as f32;
        let phi = v * std::f32::consts::PI;
        for s in 0..=segments {
            let u = s as f32 / segments as f32;
            let theta = u * std::f32::consts::TAU;
            let dir = Vec3::new(
                phi.sin() * theta.cos(),
                phi.cos(),
                phi.sin() * theta.sin(),
            );
            mesh.vertices.push(MeshVertex {
                position: (dir * radius).into(),
                normal: dir.into(),
            });
        }
    }
    let stride = (segments + 1) as u32;
    for r in 0..rings as u32 {
        for s in 0..segments as u32 {
            let a = r * stride + s;
            let b = a + stride;
            mesh.indices.extend_from_slice(&[a, b, a + 1]);
            mesh.indices.extend_from_slice(&[a + 1, b, b + 1]);
        }
    }
    mesh
}

/// Build an open partial torus sweeping `arc` radians of the major circle.
///
/// Lies in the XZ plane, centered at the origin, tube axis pointing +Y.
#[must_use]
pub fn partial_torus(
    major_radius: f32,
    minor_radius: f32,
    arc: f32,
    major_segments: usize,
    minor_segments: usize,
) -> MeshData {
    let mut mesh = MeshData::default();
    for i in 0..=major_segments {
        let theta = arc * i as f32 / major_segments as f32;
        let center =
            Vec3::new(theta.cos(), 0.0, theta.sin()) * major_radius;
        let ring_out = Vec3::new(theta.cos(), 0.0, theta.sin());
        for j in 0..=minor_segments {
            let phi = std::f32::consts::TAU * j as f32 / minor_segments as f32;
            let normal = ring_out * phi.cos() + Vec3::Y * phi.sin();
            mesh.vertices.push(MeshVertex {
                position: (center + normal * minor_radius).into(),
                normal: normal.into(),
            });
        }
    }
    let stride = (minor_segments + 1) as u32;
    for i in 0..major_segments as u32 {
        for j in 0..minor_segments as u32 {
            let a = i * stride + j;
            let b = a + stride;
            mesh.indices.extend_from_slice(&[a, b, a + 1]);
            mesh.indices.extend_from_slice(&[a + 1, b, b + 1]);
        }
    }
    mesh
}

/// Build a closed cylinder along +Y, centered at the origin.
#[must_use]
pub fn cylinder(radius: f32, height: f32, segments: usize) -> MeshData {
    let mut mesh = MeshData::default();
    let half = height * 0.5;
    // Side wall
    for s in 0..=segments {
        let theta = std::f32::consts::TAU * s as f32 / segments as f32;
        let dir = Vec3::new(theta.cos(), 0.0, theta.sin());
        for y in [-half, half] {
            mesh.vertices.push(MeshVertex {
                position: (dir * radius + Vec3::Y * y).into(),
                normal: dir.into(),
            });
        }
    }
    for s in 0..segments as u32 {
        let a = s * 2;
        mesh.indices.extend_from_slice(&[a, a + 2, a + 1]);
        mesh.indices.extend_from_slice(&[a + 1, a + 2, a + 3]);
    }
    // Caps
    for (y, n) in [(-half, -Vec3::Y), (half, Vec3::Y)] {
        let center = mesh.vertices.len() as u32;
        mesh.vertices.push(MeshVertex {
            position: (Vec3::Y * y).into(),
            normal: n.into(),
        });
        for s in 0..=segments {
            let theta = std::f32::consts::TAU * s as f32 / segments as f32;
            let dir = Vec3::new(theta.cos(), 0.0, theta.sin());
            mesh.vertices.push(MeshVertex {
                position: (dir * radius + Vec3::Y * y).into(),
                normal: n.into(),
            });
        }
        for s in 0..segments as u32 {
            let a = center + 1 + s;
            if y < 0.0 {
                mesh.indices.extend_from_slice(&[center, a, a + 1]);
            } else {
                mesh.indices.extend_from_slice(&[center, a + 1, a]);
            }
        }
    }
    mesh
}

/// Build a flat grid in the XZ plane, `nx` by `nz` quads, normal +Y.
#[must_use]
pub fn plane_grid(width: f32, depth: f32, nx: usize, nz: usize) -> MeshData {
    let mut mesh = MeshData::default();
    for iz in 0..=nz {
        let z = (iz as f32 / nz as f32 - 0.5) * depth;
        for ix in 0..=nx {
            let x = (ix as f32 / nx as f32 - 0.5) * width;
            mesh.vertices.push(MeshVertex {
                position: [x, 0.0, z],
                normal: [0.0, 1.0, 0.0],
            });
        }
    }
    let stride = (nx + 1) as u32;
    for iz in 0..nz as u32 {
        for ix in 0..nx as u32 {
            let a = iz * stride + ix;
            let b = a + stride;
            mesh.indices.extend_from_slice(&[a, a + 1, b]);
            mesh.indices.extend_from_slice(&[a + 1, b + 1, b]);
        }
    }
    mesh
}

// ---------------------------------------------------------------------------
// Profile extrusion
// ---------------------------------------------------------------------------

/// Triangulate a simple (possibly concave) CCW polygon by ear clipping.
fn triangulate(profile: &[Vec2]) -> Vec<u32> {
    let n = profile.len();
    if n < 3 {
        return Vec::new();
    }
    let mut remaining: Vec<u32> = (0..n as u32).collect();
    let mut indices = Vec::with_capacity((n - 2) * 3);

    let cross = |a: Vec2, b: Vec2, c: Vec2| -> f32 {
        (b - a).perp_dot(c - a)
    };
    let inside = |a: Vec2, b: Vec2, c: Vec2, p: Vec2| -> bool {
        cross(a, b, p) >= 0.0 && cross(b, c, p) >= 0.0 && cross(c, a, p) >= 0.0
    };

    while remaining.len() > 3 {
        let m = remaining.len();
        let mut clipped = false;
        for i in 0..m {
            let ia = remaining[(i + m - 1) % m];
            let ib = remaining[i];
            let ic = remaining[(i + 1) % m];
            let (a, b, c) = (
                profile[ia as usize],
                profile[ib as usize],
                profile[ic as usize],
            );
            // Reflex corner: not an ear
            if cross(a, b, c) <= 0.0 {
                continue;
            }
            let blocked = remaining.iter().any(|&j| {
                j != ia
                    && j != ib
                    && j != ic
                    && inside(a, b, c, profile[j as usize])
            });
            if blocked {
                continue;
            }
            indices.extend_from_slice(&[ia, ib, ic]);
            let _ = remaining.remove(i);
            clipped = true;
            break;
        }
        if !clipped {
            // Degenerate input; bail with what we have rather than loop.
            break;
        }
    }
    if remaining.len() == 3 {
        indices.extend_from_slice(&[remaining[0], remaining[1], remaining[2]]);
    }
    indices
}

/// Extrude a 2D profile (CCW, in the XY plane) to `depth` along Z with a
/// small bevel toward the front and back faces.
///
/// The bevel ring is the profile scaled toward its centroid, which reads as
/// a chamfer at this geometry scale without a true polygon inset.
#[must_use]
pub fn extrude_profile(profile: &[Vec2], depth: f32, bevel: f32) -> MeshData {
    let mut mesh = MeshData::default();
    let n = profile.len();
    if n < 3 {
        return mesh;
    }
    let centroid =
        profile.iter().copied().sum::<Vec2>() / n as f32;
    let inset: Vec<Vec2> = profile
        .iter()
        .map(|&p| centroid + (p - centroid) * 0.88)
        .collect();

    let half = depth * 0.5;
    let wall = half - bevel;

    // Ring layout (front to back): inset @ +half, full @ +wall,
    // full @ -wall, inset @ -half.
    let rings: [(&[Vec2], f32); 4] = [
        (&inset, half),
        (profile, wall),
        (profile, -wall),
        (&inset, -half),
    ];
    for (ring, z) in rings {
        for p in ring {
            mesh.vertices.push(MeshVertex {
                position: [p.x, p.y, z],
                normal: [0.0, 0.0, 0.0],
            });
        }
    }

    // Walls between consecutive rings
    let n32 = n as u32;
    for ring in 0..3u32 {
        let base_a = ring * n32;
        let base_b = (ring + 1) * n32;
        for i in 0..n32 {
            let j = (i + 1) % n32;
            mesh.indices.extend_from_slice(&[
                base_a + i,
                base_a + j,
                base_b + i,
            ]);
            mesh.indices.extend_from_slice(&[
                base_a + j,
                base_b + j,
                base_b + i,
            ]);
        }
    }

    // Front and back faces from the inset rings
    let face = triangulate(&inset);
    for tri in face.chunks_exact(3) {
        // Front: CCW as-is
        mesh.indices
            .extend_from_slice(&[tri[0], tri[1], tri[2]]);
        // Back: reversed winding, offset to the last ring
        let off = 3 * n32;
        mesh.indices
            .extend_from_slice(&[off + tri[2], off + tri[1], off + tri[0]]);
    }

    mesh.recompute_normals();
    mesh
}

/// Re-center a mesh on its vertex centroid. Returns the offset removed.
pub fn recenter(mesh: &mut MeshData) -> Vec3 {
    if mesh.vertices.is_empty() {
        return Vec3::ZERO;
    }
    let sum: Vec3 = mesh
        .vertices
        .iter()
        .map(|v| Vec3::from(v.position))
        .sum();
    let centroid = sum / mesh.vertices.len() as f32;
    for v in &mut mesh.vertices {
        v.position = (Vec3::from(v.position) - centroid).into();
    }
    centroid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_normals_are_radial_unit() {
        let mesh = uv_sphere(2.0, 16, 8);
        for v in &mesh.vertices {
            let p = Vec3::from(v.position);
            let n = Vec3::from(v.normal);
            assert!((p.length() - 2.0).abs() < 1e-5);
            assert!((n.length() - 1.0).abs() < 1e-5);
            assert!(n.dot(p.normalize()) > 0.9999);
        }
    }

    #[test]
    fn partial_torus_spans_requested_arc() {
        let arc = 1.6 * std::f32::consts::PI;
        let mesh = partial_torus(1.0, 0.1, arc, 24, 8);
        // First ring sits at theta=0 (+X side); last ring at theta=arc.
        let first = Vec3::from(mesh.vertices[0].position);
        let last = Vec3::from(mesh.vertices[mesh.vertices.len() - 1].position);
        let first_theta = first.z.atan2(first.x);
        assert!(first_theta.abs() < 1e-4);
        // arc > pi wraps into negative atan2 range
        let expected = arc - std::f32::consts::TAU;
        let last_theta = last.z.atan2(last.x);
        assert!((last_theta - expected).abs() < 0.05);
    }

    #[test]
    fn plane_grid_counts() {
        let mesh = plane_grid(2.0, 1.0, 4, 3);
        assert_eq!(mesh.vertices.len(), 5 * 4);
        assert_eq!(mesh.triangle_count(), 4 * 3 * 2);
    }

    #[test]
    fn triangulate_square() {
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        let tris = triangulate(&square);
        assert_eq!(tris.len(), 6);
    }

    #[test]
    fn triangulate_concave_l_shape() {
        let l = [
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 2.0),
            Vec2::new(0.0, 2.0),
        ];
        let tris = triangulate(&l);
        // n-2 triangles for a simple polygon
        assert_eq!(tris.len(), 4 * 3);
    }

    #[test]
    fn displace_recomputes_normals() {
        let mut mesh = plane_grid(2.0, 2.0, 8, 8);
        // Tilt the whole plane: y = x
        mesh.displace(|p| Vec3::new(p.x, p.x, p.z));
        let expected = Vec3::new(-1.0, 1.0, 0.0).normalize();
        for v in &mesh.vertices {
            let n = Vec3::from(v.normal);
            assert!(
                n.dot(expected) > 0.99,
                "normal {n:?} should match tilted plane"
            );
        }
    }

    #[test]
    fn recenter_zeroes_centroid() {
        let mut mesh = uv_sphere(1.0, 8, 4);
        mesh.displace(|p| p + Vec3::new(3.0, -2.0, 1.0));
        let removed = recenter(&mut mesh);
        assert!((removed - Vec3::new(3.0, -2.0, 1.0)).length() < 1e-3);
        let sum: Vec3 =
            mesh.vertices.iter().map(|v| Vec3::from(v.position)).sum();
        assert!(sum.length() / (mesh.vertices.len() as f32) < 1e-4);
    }
}
