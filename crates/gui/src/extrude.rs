//! Scene mesh generation for the extrusion viewer.
//!
//! The box mesh is always built from the committed `BoxShape`. While a face
//! is extruding, the mesh is scaled along the face axis about the world
//! pivot, the way a scene-graph node with a pivot point and a scaling vector
//! would be drawn. Committing replaces the box with a freshly built one.

use glam::{Mat4, Vec3};
use shared::{FaceId, FaceState};

use crate::state::settings::AppSettings;
use crate::state::{ClickOutcome, ExtrusionState};
use crate::viewport::mesh::{self, LineMeshData, MeshData};
use crate::viewport::picking::{pick_triangle, Ray, TriangleHit};

/// Everything the viewport draws for one frame
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneMeshes {
    /// Displayed box in world space (scaling already applied)
    pub box_mesh: MeshData,
    pub edges: Option<LineMeshData>,
    pub ground: Option<MeshData>,
    pub axes: Option<LineMeshData>,
    /// `ExtrusionState::version` these meshes were built from
    pub version: u64,
}

/// Model matrix of the live extrusion: scale along the face axis about the
/// world pivot. Identity when nothing is extruding.
pub fn pivot_scaling(state: &ExtrusionState) -> Mat4 {
    let (Some(active), Some(factor)) = (state.active(), state.current_scale()) else {
        return Mat4::IDENTITY;
    };
    let p = state.world_pivot();
    let pivot = Vec3::new(p[0] as f32, p[1] as f32, p[2] as f32);

    let mut scale = Vec3::ONE;
    scale[active.face.axis().index()] = factor as f32;

    Mat4::from_translation(pivot) * Mat4::from_scale(scale) * Mat4::from_translation(-pivot)
}

/// Per-face colors reflecting the click state of each face
pub fn face_colors(state: &ExtrusionState, settings: &AppSettings) -> [[f32; 3]; 6] {
    let vp = &settings.viewport;
    let mut colors = [vp.box_color; 6];
    for face in FaceId::ALL {
        colors[face.index()] = match state.face_state(face) {
            FaceState::Untouched => vp.box_color,
            FaceState::Extruding => vp.extruding_color,
            FaceState::Committed => vp.committed_color,
        };
    }
    colors
}

/// Displayed box mesh in world space
pub fn display_box_mesh(state: &ExtrusionState, settings: &AppSettings) -> MeshData {
    let base = mesh::box_mesh(state.shape(), &face_colors(state, settings));
    if state.is_extruding() {
        base.transformed(&pivot_scaling(state))
    } else {
        base
    }
}

/// Build all meshes for the current state
pub fn build_scene_meshes(state: &ExtrusionState, settings: &AppSettings) -> SceneMeshes {
    let box_mesh = display_box_mesh(state, settings);

    let edges = settings
        .edges
        .visible
        .then(|| mesh::box_edges(&state.display_shape(), settings.edges.color));

    let ground = settings.ground.visible.then(|| {
        mesh::ground(
            settings.ground.size,
            settings.ground.offset,
            settings.viewport.ground_color,
        )
    });

    let axes = settings.axes.visible.then(|| mesh::axes(settings.axes.length));

    SceneMeshes {
        box_mesh,
        edges,
        ground,
        axes,
        version: state.version(),
    }
}

/// Pick the displayed box. The ground is not pickable.
pub fn pick_box(state: &ExtrusionState, ray: &Ray) -> Option<TriangleHit> {
    let colors = [[0.0; 3]; 6];
    let mut mesh = mesh::box_mesh(state.shape(), &colors);
    if state.is_extruding() {
        mesh = mesh.transformed(&pivot_scaling(state));
    }
    pick_triangle(ray, &mesh)
}

/// Handle a viewport click in one step: pick, resolve the face, transition.
pub fn click_ray(state: &mut ExtrusionState, ray: &Ray) -> ClickOutcome {
    let hit = pick_box(state, ray);
    state.handle_click(hit.map(|h| h.normal_f64()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::picking::Aabb;

    fn close(a: Vec3, b: [f64; 3]) -> bool {
        (a - Vec3::new(b[0] as f32, b[1] as f32, b[2] as f32)).length() < 1e-4
    }

    #[test]
    fn test_identity_when_idle() {
        let state = ExtrusionState::default();
        assert_eq!(pivot_scaling(&state), Mat4::IDENTITY);
    }

    #[test]
    fn test_scaled_mesh_matches_display_shape() {
        let settings = AppSettings::default();
        for face in FaceId::ALL {
            let mut state = ExtrusionState::default();
            state.click_face(face);
            for _ in 0..37 {
                state.tick();
            }
            let aabb = Aabb::from_mesh(&display_box_mesh(&state, &settings));
            let shape = state.display_shape();
            assert!(close(aabb.min, shape.min()), "{face:?}");
            assert!(close(aabb.max, shape.max()), "{face:?}");
        }
    }

    #[test]
    fn test_face_colors_follow_state() {
        let settings = AppSettings::default();
        let mut state = ExtrusionState::default();
        state.click_face(FaceId::PosX);
        state.click_face(FaceId::PosX);
        state.click_face(FaceId::NegZ);
        let colors = face_colors(&state, &settings);
        assert_eq!(colors[FaceId::PosX.index()], settings.viewport.committed_color);
        assert_eq!(colors[FaceId::NegZ.index()], settings.viewport.extruding_color);
        assert_eq!(colors[FaceId::PosY.index()], settings.viewport.box_color);
    }

    #[test]
    fn test_pick_box_resolves_face() {
        let state = ExtrusionState::default();
        let ray = Ray::new(Vec3::new(0.1, 5.0, 0.2), Vec3::NEG_Y);
        let hit = pick_box(&state, &ray).unwrap();
        assert_eq!(shared::FaceId::from_normal(hit.normal_f64()), Some(FaceId::PosY));
        assert!((hit.point.y - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_pick_follows_live_extrusion() {
        let mut state = ExtrusionState::default();
        state.click_face(FaceId::PosX);
        // scale 2.0 about x = -0.5 puts +X at 1.5
        let ray = Ray::new(Vec3::new(5.0, 0.11, -0.13), Vec3::NEG_X);
        let hit = pick_box(&state, &ray).unwrap();
        assert!((hit.point.x - 1.5).abs() < 1e-4);
    }

    #[test]
    fn test_click_ray_miss_is_ignored() {
        let mut state = ExtrusionState::default();
        let ray = Ray::new(Vec3::new(5.0, 5.0, 5.0), Vec3::Y);
        let out = click_ray(&mut state, &ray);
        assert_eq!(out, ClickOutcome::Ignored(crate::state::IgnoreReason::Miss));
    }

    #[test]
    fn test_click_ray_starts_and_commits() {
        let mut state = ExtrusionState::default();
        let ray = Ray::new(Vec3::new(0.13, -0.21, 5.0), Vec3::NEG_Z);
        assert!(matches!(click_ray(&mut state, &ray), ClickOutcome::Started { face: FaceId::PosZ, .. }));
        assert!(matches!(click_ray(&mut state, &ray), ClickOutcome::Committed { face: FaceId::PosZ, .. }));
        assert!((state.shape().size[2] - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_hidden_parts_are_skipped() {
        let mut settings = AppSettings::default();
        settings.ground.visible = false;
        settings.edges.visible = false;
        let meshes = build_scene_meshes(&ExtrusionState::default(), &settings);
        assert!(meshes.ground.is_none());
        assert!(meshes.edges.is_none());
        assert_eq!(meshes.box_mesh.triangle_count(), 12);
    }
}
