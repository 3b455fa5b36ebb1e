//! End-to-end extrusion behaviour through the harness.

use extrude_gui_lib::harness::TestHarness;
use extrude_gui_lib::state::{ClickOutcome, IgnoreReason};
use shared::{BoxShape, ExtrusionMode, FaceId, FaceState};

const EPS: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < EPS, "expected {expected}, got {actual}");
}

#[test]
fn test_pos_x_after_hundred_frames() {
    let mut h = TestHarness::new();
    assert!(matches!(h.click_face(FaceId::PosX), ClickOutcome::Started { face: FaceId::PosX, .. }));
    h.advance(100);
    assert_close(h.current_scale().unwrap(), 2.5);

    let out = h.click_face(FaceId::PosX);
    let ClickOutcome::Committed { factor, shape, .. } = out else {
        panic!("Expected Committed, got {out:?}");
    };
    assert_close(factor, 2.5);
    assert_close(shape.size[0], 2.5);
    assert_close(shape.center[0], 0.75);
    assert_eq!(shape.size[1], 1.0);
    assert_eq!(shape.size[2], 1.0);
    assert_eq!(h.face_state(FaceId::PosX), FaceState::Committed);
}

#[test]
fn test_opposite_face_stays_put_while_extruding() {
    for face in FaceId::ALL {
        let mut h = TestHarness::new();
        h.click_face(face);
        for frame in 0..50 {
            let shown = h.display_shape();
            assert_close(shown.face_coordinate(face.opposite()), -0.5 * face.sign());
            assert_close(shown.size[face.axis().index()], 2.0 + 0.005 * frame as f64);
            h.advance(1);
        }
    }
}

#[test]
fn test_both_faces_of_one_axis() {
    let mut h = TestHarness::new();
    h.click_face(FaceId::PosY);
    h.click_face(FaceId::PosY);
    assert_close(h.shape().size[1], 2.0);
    assert_close(h.shape().center[1], 0.5);

    // Pivot sits on the current top face
    let out = h.click_face(FaceId::NegY);
    let ClickOutcome::Started { pivot, .. } = out else {
        panic!("Expected Started, got {out:?}");
    };
    assert_eq!(pivot, [0.0, 1.0, 0.0]);

    h.click_face(FaceId::NegY);
    assert_close(h.shape().size[1], 4.0);
    assert_close(h.shape().center[1], -0.5);
    assert_close(h.shape().face_coordinate(FaceId::PosY), 1.5);
}

#[test]
fn test_multiple_mode_ignores_other_faces_while_extruding() {
    let mut h = TestHarness::new();
    h.click_face(FaceId::NegZ);
    h.advance(10);

    let out = h.click_face(FaceId::PosX);
    assert_eq!(out, ClickOutcome::Ignored(IgnoreReason::Busy { active: FaceId::NegZ }));
    assert_eq!(h.face_state(FaceId::PosX), FaceState::Untouched);

    h.advance(10);
    assert_close(h.current_scale().unwrap(), 2.1);
}

#[test]
fn test_committed_face_is_inert() {
    let mut h = TestHarness::new();
    h.click_face(FaceId::PosX);
    h.click_face(FaceId::PosX);
    let shape = h.shape();
    let generation = h.state.extrusion.mesh_instance().generation;

    let out = h.click_face(FaceId::PosX);
    assert_eq!(out, ClickOutcome::Ignored(IgnoreReason::FaceCommitted(FaceId::PosX)));
    assert_eq!(h.shape(), shape);
    assert_eq!(h.state.extrusion.mesh_instance().generation, generation);
}

#[test]
fn test_all_six_faces_in_multiple_mode() {
    let mut h = TestHarness::new();
    for face in FaceId::ALL {
        h.click_face(face);
        h.click_face(face);
    }
    assert!(h.state.extrusion.is_finished());
    // Each axis doubled twice
    assert_eq!(h.shape().size, [4.0, 4.0, 4.0]);
    // +X then -X, +Y then -Y, +Z then -Z: center ends at -0.5 on every axis
    for c in h.shape().center {
        assert_close(c, -0.5);
    }
}

#[test]
fn test_single_mode_commits_on_any_face() {
    let mut h = TestHarness::with_mode(ExtrusionMode::Single);
    h.click_face(FaceId::PosZ);
    h.advance(20);

    let out = h.click_face(FaceId::NegX);
    assert!(matches!(out, ClickOutcome::Committed { face: FaceId::PosZ, .. }));
    assert_close(h.shape().size[2], 2.1);
    assert_eq!(h.face_state(FaceId::NegX), FaceState::Untouched);
}

#[test]
fn test_single_mode_one_extrusion_then_reset() {
    let mut h = TestHarness::with_mode(ExtrusionMode::Single);
    h.click_face(FaceId::PosY);
    h.click_face(FaceId::PosY);

    assert_eq!(h.click_face(FaceId::NegX), ClickOutcome::Ignored(IgnoreReason::SessionFinished));

    h.reset();
    assert_eq!(h.shape(), BoxShape::unit());
    assert!(matches!(h.click_face(FaceId::NegX), ClickOutcome::Started { .. }));
}

#[test]
fn test_reset_mid_extrusion() {
    let mut h = TestHarness::new();
    h.click_face(FaceId::PosX);
    h.click_face(FaceId::PosX);
    h.click_face(FaceId::NegY);
    h.advance(30);
    let old_id = h.state.extrusion.mesh_instance().id;

    h.reset();
    assert!(!h.is_extruding());
    assert_eq!(h.shape(), BoxShape::unit());
    assert_eq!(h.display_shape(), BoxShape::unit());
    assert!(FaceId::ALL.iter().all(|f| h.face_state(*f) == FaceState::Untouched));
    assert_ne!(h.state.extrusion.mesh_instance().id, old_id);
    assert_eq!(h.state.extrusion.pivot(), [0.0; 3]);

    // Default state again: the first click starts an extrusion
    assert!(matches!(h.click_face(FaceId::PosX), ClickOutcome::Started { .. }));
}

#[test]
fn test_every_commit_makes_a_new_mesh() {
    let mut h = TestHarness::new();
    let mut ids = vec![h.state.extrusion.mesh_instance().id];
    for face in [FaceId::PosX, FaceId::PosY, FaceId::PosZ] {
        h.click_face(face);
        assert_eq!(h.state.extrusion.mesh_instance().id, *ids.last().unwrap());
        h.click_face(face);
        ids.push(h.state.extrusion.mesh_instance().id);
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}
