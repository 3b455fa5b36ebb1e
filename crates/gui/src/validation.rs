//! Mesh validation utilities.
//!
//! `MeshValidator` checks the box mesh the viewport draws: buffer layout,
//! index range, unit axis-aligned face normals and agreement with the
//! `BoxShape` it was built from.

use shared::{BoxShape, FaceId};

use crate::viewport::mesh::MeshData;
use crate::viewport::picking::Aabb;

const STRIDE: usize = 9;

pub struct MeshValidator<'a> {
    mesh: &'a MeshData,
}

impl<'a> MeshValidator<'a> {
    pub fn new(mesh: &'a MeshData) -> Self {
        Self { mesh }
    }

    pub fn vertex_count(&self) -> usize {
        self.mesh.vertices.len() / STRIDE
    }

    pub fn triangle_count(&self) -> usize {
        self.mesh.indices.len() / 3
    }

    pub fn is_stride_valid(&self) -> bool {
        self.mesh.vertices.len() % STRIDE == 0
    }

    pub fn is_index_stride_valid(&self) -> bool {
        self.mesh.indices.len() % 3 == 0
    }

    pub fn are_indices_in_range(&self) -> bool {
        let max_idx = self.vertex_count() as u32;
        self.mesh.indices.iter().all(|&i| i < max_idx)
    }

    pub fn are_normals_normalized(&self, epsilon: f32) -> bool {
        (0..self.vertex_count()).all(|i| (self.mesh.normal(i).length() - 1.0).abs() <= epsilon)
    }

    /// Every vertex normal resolves to one of the six box faces
    pub fn are_normals_axis_aligned(&self) -> bool {
        (0..self.vertex_count()).all(|i| {
            let n = self.mesh.normal(i);
            FaceId::from_normal([n.x as f64, n.y as f64, n.z as f64]).is_some()
        })
    }

    /// Triangle `t` carries the normal of `FaceId::ALL[t / 2]`
    pub fn is_face_order_valid(&self) -> bool {
        if self.triangle_count() != 12 {
            return false;
        }
        (0..12).all(|t| {
            let n = self.mesh.normal(self.mesh.indices[t * 3] as usize);
            FaceId::from_normal([n.x as f64, n.y as f64, n.z as f64]) == Some(FaceId::ALL[t / 2])
        })
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_mesh(self.mesh)
    }

    /// Width, height, depth of the bounding box
    pub fn dimensions(&self) -> [f32; 3] {
        self.aabb().size().to_array()
    }

    pub fn assert_dimensions_approx(&self, expected: [f32; 3], tolerance: f32) -> bool {
        let dims = self.dimensions();
        (0..3).all(|i| (dims[i] - expected[i]).abs() < tolerance)
    }

    /// Mesh bounds coincide with the shape bounds
    pub fn matches_shape(&self, shape: &BoxShape, tolerance: f32) -> bool {
        let aabb = self.aabb();
        let (min, max) = (shape.min(), shape.max());
        (0..3).all(|i| {
            (aabb.min[i] - min[i] as f32).abs() < tolerance
                && (aabb.max[i] - max[i] as f32).abs() < tolerance
        })
    }

    /// Color of the first vertex of a face
    pub fn face_color(&self, face: FaceId) -> Option<[f32; 3]> {
        let tri = face.index() * 2;
        let vi = *self.mesh.indices.get(tri * 3)? as usize;
        let b = vi * STRIDE;
        self.mesh.vertices.get(b + 6..b + 9).map(|c| [c[0], c[1], c[2]])
    }

    /// Run all checks. An empty list means the mesh is valid.
    pub fn validate_all(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.is_stride_valid() {
            errors.push(format!(
                "Vertex buffer length {} is not a multiple of {STRIDE}",
                self.mesh.vertices.len()
            ));
            return errors;
        }

        if !self.is_index_stride_valid() {
            errors.push(format!(
                "Index buffer length {} is not a multiple of 3",
                self.mesh.indices.len()
            ));
        }

        if !self.are_indices_in_range() {
            let max_idx = self.vertex_count() as u32;
            let out_of_range: Vec<_> = self
                .mesh
                .indices
                .iter()
                .filter(|&&i| i >= max_idx)
                .take(5)
                .collect();
            errors.push(format!(
                "Indices out of range (vertex_count={max_idx}): {out_of_range:?}"
            ));
            return errors;
        }

        if self.vertex_count() > 0 && !self.are_normals_normalized(0.1) {
            errors.push("Some normals are not unit-length (epsilon=0.1)".to_string());
        }

        if !self.are_normals_axis_aligned() {
            errors.push("Some normals do not match a box face".to_string());
        }

        if !self.is_face_order_valid() {
            errors.push(format!(
                "Expected 12 triangles in face order, got {}",
                self.triangle_count()
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::mesh::box_mesh;

    const GREY: [[f32; 3]; 6] = [[0.5; 3]; 6];

    #[test]
    fn test_unit_box_is_valid() {
        let mesh = box_mesh(&BoxShape::unit(), &GREY);
        let v = MeshValidator::new(&mesh);
        assert_eq!(v.vertex_count(), 24);
        assert_eq!(v.triangle_count(), 12);
        let errors = v.validate_all();
        assert!(errors.is_empty(), "Expected no errors, got: {errors:?}");
    }

    #[test]
    fn test_dimensions_follow_shape() {
        let shape = BoxShape::new([0.75, 0.0, 0.0], [2.5, 1.0, 1.0]);
        let mesh = box_mesh(&shape, &GREY);
        let v = MeshValidator::new(&mesh);
        assert!(v.assert_dimensions_approx([2.5, 1.0, 1.0], 1e-4));
        assert!(v.matches_shape(&shape, 1e-4));
        assert!(!v.matches_shape(&BoxShape::unit(), 1e-4));
    }

    #[test]
    fn test_face_color_lookup() {
        let mut colors = GREY;
        colors[FaceId::NegY.index()] = [1.0, 0.0, 0.0];
        let mesh = box_mesh(&BoxShape::unit(), &colors);
        let v = MeshValidator::new(&mesh);
        assert_eq!(v.face_color(FaceId::NegY), Some([1.0, 0.0, 0.0]));
        assert_eq!(v.face_color(FaceId::PosY), Some([0.5; 3]));
    }

    #[test]
    fn test_bad_stride() {
        let bad = MeshData {
            vertices: vec![0.0; 10],
            indices: vec![0, 1, 2],
        };
        let errors = MeshValidator::new(&bad).validate_all();
        assert!(errors.iter().any(|e| e.contains("multiple of 9")));
    }

    #[test]
    fn test_indices_out_of_range() {
        let bad = MeshData {
            vertices: vec![0.0; 9],
            indices: vec![0, 5, 2],
        };
        let v = MeshValidator::new(&bad);
        assert!(!v.are_indices_in_range());
        assert!(v.validate_all().iter().any(|e| e.contains("out of range")));
    }

    #[test]
    fn test_skewed_normal_is_reported() {
        let mut mesh = box_mesh(&BoxShape::unit(), &GREY);
        mesh.vertices[3..6].copy_from_slice(&[0.6, 0.8, 0.0]);
        let v = MeshValidator::new(&mesh);
        assert!(v.are_normals_normalized(0.01));
        assert!(!v.are_normals_axis_aligned());
        assert!(v.validate_all().iter().any(|e| e.contains("box face")));
    }
}
