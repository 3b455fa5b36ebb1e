use glam::{Mat4, Vec3};
use shared::{BoxShape, FaceId};

/// CPU-side mesh data: interleaved [pos.x, pos.y, pos.z, norm.x, norm.y, norm.z, r, g, b]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    /// 9 floats per vertex: position(3) + normal(3) + color(3)
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 9
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Position of vertex `i`
    pub fn position(&self, i: usize) -> Vec3 {
        let b = i * 9;
        Vec3::new(self.vertices[b], self.vertices[b + 1], self.vertices[b + 2])
    }

    /// Normal of vertex `i`
    pub fn normal(&self, i: usize) -> Vec3 {
        let b = i * 9;
        Vec3::new(self.vertices[b + 3], self.vertices[b + 4], self.vertices[b + 5])
    }

    /// Copy of the mesh with positions and normals run through `model`.
    /// Normals use the inverse-transpose and are renormalized.
    pub fn transformed(&self, model: &Mat4) -> MeshData {
        let normal_matrix = model.inverse().transpose();
        let mut vertices = self.vertices.clone();
        for i in 0..self.vertex_count() {
            let b = i * 9;
            let p = model.transform_point3(self.position(i));
            let n = normal_matrix.transform_vector3(self.normal(i)).normalize_or_zero();
            vertices[b..b + 6].copy_from_slice(&[p.x, p.y, p.z, n.x, n.y, n.z]);
        }
        MeshData {
            vertices,
            indices: self.indices.clone(),
        }
    }
}

/// Lines mesh: interleaved [pos.x, pos.y, pos.z, r, g, b, a]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineMeshData {
    /// 7 floats per vertex: position(3) + color(4)
    pub vertices: Vec<f32>,
}

impl LineMeshData {
    pub fn segment_count(&self) -> usize {
        self.vertices.len() / 14
    }
}

// ── Box ──────────────────────────────────────────────────────

/// Corner quads of each face, counter-clockwise seen from outside,
/// expressed with half sizes (hw, hh, hd).
fn face_quad(face: FaceId, hw: f32, hh: f32, hd: f32) -> [Vec3; 4] {
    match face {
        FaceId::PosX => [Vec3::new(hw, -hh, hd), Vec3::new(hw, -hh, -hd), Vec3::new(hw, hh, -hd), Vec3::new(hw, hh, hd)],
        FaceId::NegX => [Vec3::new(-hw, -hh, -hd), Vec3::new(-hw, -hh, hd), Vec3::new(-hw, hh, hd), Vec3::new(-hw, hh, -hd)],
        FaceId::PosY => [Vec3::new(-hw, hh, hd), Vec3::new(hw, hh, hd), Vec3::new(hw, hh, -hd), Vec3::new(-hw, hh, -hd)],
        FaceId::NegY => [Vec3::new(-hw, -hh, -hd), Vec3::new(hw, -hh, -hd), Vec3::new(hw, -hh, hd), Vec3::new(-hw, -hh, hd)],
        FaceId::PosZ => [Vec3::new(-hw, -hh, hd), Vec3::new(hw, -hh, hd), Vec3::new(hw, hh, hd), Vec3::new(-hw, hh, hd)],
        FaceId::NegZ => [Vec3::new(hw, -hh, -hd), Vec3::new(-hw, -hh, -hd), Vec3::new(-hw, hh, -hd), Vec3::new(hw, hh, -hd)],
    }
}

/// Flat-shaded box: 4 vertices and 2 triangles per face, faces in `FaceId::ALL`
/// order so triangle `t` belongs to face `FaceId::ALL[t / 2]`.
pub fn box_mesh(shape: &BoxShape, face_colors: &[[f32; 3]; 6]) -> MeshData {
    let hw = (shape.size[0] * 0.5) as f32;
    let hh = (shape.size[1] * 0.5) as f32;
    let hd = (shape.size[2] * 0.5) as f32;
    let c = Vec3::new(shape.center[0] as f32, shape.center[1] as f32, shape.center[2] as f32);

    let mut vertices = Vec::with_capacity(24 * 9);
    let mut indices = Vec::with_capacity(36);

    for face in FaceId::ALL {
        let n = face.normal();
        let normal = Vec3::new(n[0] as f32, n[1] as f32, n[2] as f32);
        let color = face_colors[face.index()];
        let base = (vertices.len() / 9) as u32;
        for v in face_quad(face, hw, hh, hd) {
            push_vert(&mut vertices, c + v, normal, color);
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    MeshData { vertices, indices }
}

/// The 12 box edges as line segments
pub fn box_edges(shape: &BoxShape, color: [f32; 4]) -> LineMeshData {
    let lo = shape.min().map(|v| v as f32);
    let hi = shape.max().map(|v| v as f32);
    let corner = |x: bool, y: bool, z: bool| {
        [
            if x { hi[0] } else { lo[0] },
            if y { hi[1] } else { lo[1] },
            if z { hi[2] } else { lo[2] },
        ]
    };

    let mut vertices = Vec::with_capacity(24 * 7);
    for a in [false, true] {
        for b in [false, true] {
            // Along X, Y and Z
            for (p, q) in [
                (corner(false, a, b), corner(true, a, b)),
                (corner(a, false, b), corner(a, true, b)),
                (corner(a, b, false), corner(a, b, true)),
            ] {
                push_line_vert(&mut vertices, p[0], p[1], p[2], color);
                push_line_vert(&mut vertices, q[0], q[1], q[2], color);
            }
        }
    }

    LineMeshData { vertices }
}

/// Flat ground quad of `size` × `size` at height `y`, facing +Y
pub fn ground(size: f32, y: f32, color: [f32; 3]) -> MeshData {
    let h = size * 0.5;
    let mut vertices = Vec::with_capacity(4 * 9);
    for (x, z) in [(-h, h), (h, h), (h, -h), (-h, -h)] {
        push_vert(&mut vertices, Vec3::new(x, y, z), Vec3::Y, color);
    }
    MeshData {
        vertices,
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}

pub fn axes(length: f32) -> LineMeshData {
    let mut vertices = Vec::new();
    let r = [0.9_f32, 0.2, 0.2, 1.0];
    let g = [0.2_f32, 0.8, 0.2, 1.0];
    let b = [0.2_f32, 0.3, 0.9, 1.0];

    // X axis
    push_line_vert(&mut vertices, 0.0, 0.0, 0.0, r);
    push_line_vert(&mut vertices, length, 0.0, 0.0, r);
    // Y axis
    push_line_vert(&mut vertices, 0.0, 0.0, 0.0, g);
    push_line_vert(&mut vertices, 0.0, length, 0.0, g);
    // Z axis
    push_line_vert(&mut vertices, 0.0, 0.0, 0.0, b);
    push_line_vert(&mut vertices, 0.0, 0.0, length, b);

    LineMeshData { vertices }
}

// ── Helpers ──────────────────────────────────────────────────

fn push_vert(v: &mut Vec<f32>, p: Vec3, n: Vec3, c: [f32; 3]) {
    v.extend_from_slice(&[p.x, p.y, p.z, n.x, n.y, n.z, c[0], c[1], c[2]]);
}

fn push_line_vert(v: &mut Vec<f32>, px: f32, py: f32, pz: f32, c: [f32; 4]) {
    v.extend_from_slice(&[px, py, pz, c[0], c[1], c[2], c[3]]);
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAY: [[f32; 3]; 6] = [[0.6, 0.6, 0.65]; 6];

    #[test]
    fn test_box_mesh_counts() {
        let m = box_mesh(&BoxShape::unit(), &GRAY);
        assert_eq!(m.vertex_count(), 24);
        assert_eq!(m.triangle_count(), 12);
    }

    #[test]
    fn test_box_mesh_face_order_matches_face_ids() {
        let m = box_mesh(&BoxShape::unit(), &GRAY);
        for (k, face) in FaceId::ALL.iter().enumerate() {
            let i0 = m.indices[k * 6] as usize;
            let n = m.normal(i0);
            let expected = face.normal();
            assert_eq!([n.x as f64, n.y as f64, n.z as f64], expected);
        }
    }

    #[test]
    fn test_box_mesh_windings_face_outward() {
        let m = box_mesh(&BoxShape::new([1.0, 2.0, 3.0], [2.0, 1.0, 4.0]), &GRAY);
        for t in 0..m.triangle_count() {
            let a = m.position(m.indices[t * 3] as usize);
            let b = m.position(m.indices[t * 3 + 1] as usize);
            let c = m.position(m.indices[t * 3 + 2] as usize);
            let geometric = (b - a).cross(c - a).normalize();
            let stored = m.normal(m.indices[t * 3] as usize);
            assert!(geometric.dot(stored) > 0.99, "triangle {t} winding");
        }
    }

    #[test]
    fn test_box_edges_twelve_segments() {
        let e = box_edges(&BoxShape::unit(), [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(e.segment_count(), 12);
    }

    #[test]
    fn test_transformed_scales_positions() {
        let m = box_mesh(&BoxShape::unit(), &GRAY);
        let t = m.transformed(&Mat4::from_scale(Vec3::new(2.0, 1.0, 1.0)));
        let max_x = (0..t.vertex_count()).map(|i| t.position(i).x).fold(f32::MIN, f32::max);
        assert!((max_x - 1.0).abs() < 1e-6);
        for i in 0..t.vertex_count() {
            assert!((t.normal(i).length() - 1.0).abs() < 1e-5);
        }
    }
}
