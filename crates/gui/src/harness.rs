//! Headless test harness for driving the extrusion scene without a window.
//!
//! Clicks go through the same picking path as the viewport: a ray is cast
//! at the displayed box and the hit normal decides the face.

use glam::Vec3;
use shared::{BoxShape, ExtrusionMode, FaceId, FaceState};

use crate::extrude::{self, SceneMeshes};
use crate::state::{AppSettings, AppState, ClickOutcome};
use crate::validation::MeshValidator;
use crate::viewport::mesh::MeshData;
use crate::viewport::picking::Ray;

/// Distance from the face the synthetic click rays start at
const RAY_STANDOFF: f32 = 10.0;
/// In-plane offsets of the aim point, as fractions of the face size.
/// Unequal so rays stay off the quad diagonals.
const AIM_OFFSET: [f64; 2] = [0.23, 0.11];

/// Headless harness: app state with default settings plus the last built meshes
pub struct TestHarness {
    pub state: AppState,
    last_meshes: Option<SceneMeshes>,
}

impl TestHarness {
    /// Harness in the default (multiple) mode. Settings are never read from disk.
    pub fn new() -> Self {
        Self {
            state: AppState::with_settings(AppSettings::default()),
            last_meshes: None,
        }
    }

    pub fn with_mode(mode: ExtrusionMode) -> Self {
        let mut h = Self::new();
        h.set_mode(mode);
        h
    }

    // ── Interaction ───────────────────────────────────────────

    /// Ray that hits `face` of the displayed box from outside
    pub fn ray_at_face(&self, face: FaceId) -> Ray {
        let shape = self.state.extrusion.display_shape();
        let axis = face.axis().index();
        let mut target = shape.center;
        target[axis] = shape.face_coordinate(face);
        for (k, i) in (0..3).filter(|i| *i != axis).enumerate() {
            target[i] += AIM_OFFSET[k] * shape.size[i];
        }
        let target = Vec3::new(target[0] as f32, target[1] as f32, target[2] as f32);
        let n = face.normal();
        let normal = Vec3::new(n[0] as f32, n[1] as f32, n[2] as f32);
        Ray::new(target + normal * RAY_STANDOFF, -normal)
    }

    /// Click the given face of the displayed box
    pub fn click_face(&mut self, face: FaceId) -> ClickOutcome {
        let ray = self.ray_at_face(face);
        self.click(&ray)
    }

    /// Click along an arbitrary ray
    pub fn click_ray(&mut self, origin: [f32; 3], direction: [f32; 3]) -> ClickOutcome {
        let ray = Ray::new(Vec3::from_array(origin), Vec3::from_array(direction));
        self.click(&ray)
    }

    /// Click into empty space
    pub fn click_miss(&mut self) -> ClickOutcome {
        self.click(&Ray::new(Vec3::new(0.0, 50.0, 0.0), Vec3::Y))
    }

    fn click(&mut self, ray: &Ray) -> ClickOutcome {
        let outcome = extrude::click_ray(&mut self.state.extrusion, ray);
        self.state.last_outcome = Some(outcome);
        outcome
    }

    /// Render `frames` frames worth of extrusion
    pub fn advance(&mut self, frames: u32) {
        for _ in 0..frames {
            if !self.state.extrusion.tick() {
                break;
            }
        }
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn set_mode(&mut self, mode: ExtrusionMode) {
        self.state.set_mode(mode);
    }

    // ── Inspection ────────────────────────────────────────────

    /// Committed box
    pub fn shape(&self) -> BoxShape {
        *self.state.extrusion.shape()
    }

    /// Box as currently displayed
    pub fn display_shape(&self) -> BoxShape {
        self.state.extrusion.display_shape()
    }

    pub fn face_state(&self, face: FaceId) -> FaceState {
        self.state.extrusion.face_state(face)
    }

    pub fn is_extruding(&self) -> bool {
        self.state.extrusion.is_extruding()
    }

    pub fn current_scale(&self) -> Option<f64> {
        self.state.extrusion.current_scale()
    }

    /// Build meshes from the current state
    pub fn build(&mut self) {
        self.last_meshes = Some(extrude::build_scene_meshes(
            &self.state.extrusion,
            &self.state.settings,
        ));
    }

    pub fn meshes(&self) -> Option<&SceneMeshes> {
        self.last_meshes.as_ref()
    }

    /// Box mesh from the last build
    pub fn box_mesh(&self) -> Option<&MeshData> {
        self.last_meshes.as_ref().map(|m| &m.box_mesh)
    }

    pub fn validate_mesh(&self) -> Option<MeshValidator<'_>> {
        self.box_mesh().map(MeshValidator::new)
    }

    /// True if the last build is older than the state
    pub fn is_stale(&self) -> bool {
        self.last_meshes
            .as_ref()
            .is_none_or(|m| m.version != self.state.extrusion.version())
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_harness_is_default_scene() {
        let h = TestHarness::new();
        assert_eq!(h.shape(), BoxShape::unit());
        assert!(!h.is_extruding());
        assert_eq!(h.state.extrusion.mode(), ExtrusionMode::Multiple);
    }

    #[test]
    fn test_click_face_hits_that_face() {
        for face in FaceId::ALL {
            let mut h = TestHarness::new();
            let out = h.click_face(face);
            assert!(
                matches!(out, ClickOutcome::Started { face: f, .. } if f == face),
                "{face:?}: {out:?}"
            );
        }
    }

    #[test]
    fn test_click_face_while_extruding_targets_grown_box() {
        let mut h = TestHarness::new();
        h.click_face(FaceId::NegZ);
        h.advance(40);
        let out = h.click_face(FaceId::NegZ);
        assert!(matches!(out, ClickOutcome::Committed { .. }));
        assert!((h.shape().size[2] - 2.2).abs() < 1e-9);
    }

    #[test]
    fn test_advance_without_extrusion() {
        let mut h = TestHarness::new();
        h.advance(10);
        assert_eq!(h.state.extrusion.version(), 0);
    }

    #[test]
    fn test_build_and_validate() {
        let mut h = TestHarness::new();
        assert!(h.is_stale());
        h.build();
        assert!(!h.is_stale());
        let v = h.validate_mesh().unwrap();
        assert!(v.validate_all().is_empty());
        h.click_face(FaceId::PosY);
        assert!(h.is_stale());
    }

    #[test]
    fn test_reset_clears_last_outcome() {
        let mut h = TestHarness::new();
        h.click_face(FaceId::PosX);
        assert!(h.state.last_outcome.is_some());
        h.reset();
        assert!(h.state.last_outcome.is_none());
        assert!(!h.is_extruding());
    }

    #[test]
    fn test_with_mode_single() {
        let h = TestHarness::with_mode(ExtrusionMode::Single);
        assert_eq!(h.state.extrusion.mode(), ExtrusionMode::Single);
    }
}
