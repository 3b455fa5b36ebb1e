//! Integration tests for TestHarness.
//!
//! Drives the headless harness the way the viewport does: rays at the
//! displayed box, one growth step per frame.

use extrude_gui_lib::harness::TestHarness;
use extrude_gui_lib::state::{ClickOutcome, IgnoreReason};
use shared::{BoxShape, ExtrusionMode, FaceId, FaceState};

#[test]
fn test_harness_build_default_scene() {
    let mut h = TestHarness::new();
    h.build();

    let meshes = h.meshes().unwrap();
    assert!(meshes.ground.is_some());
    assert!(meshes.edges.is_some());

    let v = h.validate_mesh().unwrap();
    let errors = v.validate_all();
    assert!(errors.is_empty(), "Validation errors: {:?}", errors);
    assert!(v.matches_shape(&BoxShape::unit(), 1e-5));
}

#[test]
fn test_harness_mesh_follows_live_extrusion() {
    let mut h = TestHarness::new();
    h.click_face(FaceId::NegX);
    h.advance(60);
    h.build();

    // 2.0 + 60 * 0.005
    let v = h.validate_mesh().unwrap();
    assert!(v.validate_all().is_empty());
    assert!(v.assert_dimensions_approx([2.3, 1.0, 1.0], 1e-4));
    assert!(v.matches_shape(&h.display_shape(), 1e-4));
    // +X face did not move
    assert!((v.aabb().max.x - 0.5).abs() < 1e-4);
}

#[test]
fn test_harness_mesh_after_several_commits() {
    let mut h = TestHarness::new();
    for (face, frames) in [(FaceId::PosY, 10), (FaceId::NegZ, 0), (FaceId::PosX, 25)] {
        h.click_face(face);
        h.advance(frames);
        assert!(matches!(h.click_face(face), ClickOutcome::Committed { .. }));
    }
    h.build();

    let v = h.validate_mesh().unwrap();
    assert!(v.validate_all().is_empty());
    assert!(v.matches_shape(&h.shape(), 1e-4));
    assert_eq!(h.state.extrusion.mesh_instance().generation, 4);
}

#[test]
fn test_harness_face_colors_track_state() {
    let mut h = TestHarness::new();
    h.click_face(FaceId::PosZ);
    h.click_face(FaceId::PosZ);
    h.click_face(FaceId::PosY);
    h.build();

    let vp = h.state.settings.viewport.clone();
    let v = h.validate_mesh().unwrap();
    assert_eq!(v.face_color(FaceId::PosZ), Some(vp.committed_color));
    assert_eq!(v.face_color(FaceId::PosY), Some(vp.extruding_color));
    assert_eq!(v.face_color(FaceId::NegX), Some(vp.box_color));
}

#[test]
fn test_harness_miss_changes_nothing() {
    let mut h = TestHarness::new();
    h.click_face(FaceId::PosX);
    h.advance(5);
    let before = h.display_shape();

    assert_eq!(h.click_miss(), ClickOutcome::Ignored(IgnoreReason::Miss));
    assert_eq!(h.display_shape(), before);
    assert_eq!(h.face_state(FaceId::PosX), FaceState::Extruding);
}

#[test]
fn test_harness_ground_is_not_pickable() {
    let mut h = TestHarness::new();
    // Straight down onto the ground, well away from the box
    let out = h.click_ray([2.5, 5.0, 2.5], [0.0, -1.0, 0.0]);
    assert_eq!(out, ClickOutcome::Ignored(IgnoreReason::Miss));
    assert!(!h.is_extruding());
}

#[test]
fn test_harness_mode_switch_resets() {
    let mut h = TestHarness::new();
    h.click_face(FaceId::PosX);
    h.click_face(FaceId::PosX);
    h.set_mode(ExtrusionMode::Single);

    assert_eq!(h.shape(), BoxShape::unit());
    assert_eq!(h.state.extrusion.committed_count(), 0);

    // Same mode again keeps the scene
    h.click_face(FaceId::PosY);
    h.set_mode(ExtrusionMode::Single);
    assert!(h.is_extruding());
}
