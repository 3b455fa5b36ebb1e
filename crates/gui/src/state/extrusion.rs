//! Extrusion interaction state machine
//!
//! One `ExtrusionState` owns everything a click can change: the current box,
//! the per-face click state, the pivot and the live extrusion. A click is
//! handled in one step (resolve face and pivot, then transition), so the
//! pivot is always set before the extrusion reads it.

use shared::{
    commit_extrusion, pivot_for_face, scale_about_pivot, world_pivot, BoxShape, ExtrusionMode,
    ExtrusionParams, FaceId, FaceState,
};
use uuid::Uuid;

use crate::i18n::t;

/// Identity of the box mesh currently in the scene.
/// Replaced on every commit and reset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeshInstance {
    pub id: Uuid,
    /// Number of meshes created in this session (1 after reset)
    pub generation: u64,
}

impl MeshInstance {
    fn first() -> Self {
        Self {
            id: Uuid::new_v4(),
            generation: 1,
        }
    }

    fn next(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            generation: self.generation + 1,
        }
    }
}

/// Face currently being extruded
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveExtrusion {
    pub face: FaceId,
    /// Frames rendered since the extrusion started
    pub frames: u32,
}

/// Why a click did nothing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Pick missed the box
    Miss,
    /// Hit normal is not one of the six box normals
    UnknownFace,
    /// Face was already extruded
    FaceCommitted(FaceId),
    /// Another face is extruding
    Busy { active: FaceId },
    /// Single mode and the one extrusion is done
    SessionFinished,
}

impl IgnoreReason {
    /// Status bar text in the current language
    pub fn describe(&self) -> String {
        match self {
            IgnoreReason::Miss => t("reason.miss").to_string(),
            IgnoreReason::UnknownFace => t("reason.unknown_face").to_string(),
            IgnoreReason::FaceCommitted(face) => format!("{}: {}", t("reason.face_committed"), face.label()),
            IgnoreReason::Busy { active } => format!("{}: {}", t("reason.busy"), active.label()),
            IgnoreReason::SessionFinished => t("reason.session_finished").to_string(),
        }
    }
}

/// Result of handling a click
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClickOutcome {
    Started { face: FaceId, pivot: [f64; 3] },
    Committed { face: FaceId, factor: f64, shape: BoxShape },
    Ignored(IgnoreReason),
}

pub struct ExtrusionState {
    shape: BoxShape,
    faces: [FaceState; 6],
    /// Pivot relative to the box center, on the face opposite the last started face
    pivot: [f64; 3],
    active: Option<ActiveExtrusion>,
    mode: ExtrusionMode,
    params: ExtrusionParams,
    mesh: MeshInstance,
    /// Bumped on every change that affects the displayed geometry
    version: u64,
}

impl Default for ExtrusionState {
    fn default() -> Self {
        Self::new(ExtrusionMode::default(), ExtrusionParams::default())
    }
}

impl ExtrusionState {
    pub fn new(mode: ExtrusionMode, params: ExtrusionParams) -> Self {
        Self {
            shape: BoxShape::unit(),
            faces: [FaceState::Untouched; 6],
            pivot: [0.0; 3],
            active: None,
            mode,
            params,
            mesh: MeshInstance::first(),
            version: 0,
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Committed box (without the live extrusion)
    pub fn shape(&self) -> &BoxShape {
        &self.shape
    }

    pub fn face_state(&self, face: FaceId) -> FaceState {
        self.faces[face.index()]
    }

    pub fn face_states(&self) -> &[FaceState; 6] {
        &self.faces
    }

    pub fn pivot(&self) -> [f64; 3] {
        self.pivot
    }

    /// Pivot in world coordinates
    pub fn world_pivot(&self) -> [f64; 3] {
        world_pivot(&self.shape, self.pivot)
    }

    pub fn active(&self) -> Option<&ActiveExtrusion> {
        self.active.as_ref()
    }

    pub fn is_extruding(&self) -> bool {
        self.active.is_some()
    }

    pub fn mode(&self) -> ExtrusionMode {
        self.mode
    }

    pub fn params(&self) -> &ExtrusionParams {
        &self.params
    }

    pub fn mesh_instance(&self) -> &MeshInstance {
        &self.mesh
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Scale factor of the live extrusion
    pub fn current_scale(&self) -> Option<f64> {
        self.active.map(|a| self.params.scale_after(a.frames))
    }

    /// Box as displayed right now: the committed box, grown by the live extrusion
    pub fn display_shape(&self) -> BoxShape {
        match self.active {
            Some(a) => {
                let factor = self.params.scale_after(a.frames);
                let pivot = self.world_pivot();
                BoxShape::from_corners(
                    scale_about_pivot(self.shape.min(), a.face, pivot, factor),
                    scale_about_pivot(self.shape.max(), a.face, pivot, factor),
                )
            }
            None => self.shape,
        }
    }

    /// Number of committed faces
    pub fn committed_count(&self) -> usize {
        self.faces.iter().filter(|s| **s == FaceState::Committed).count()
    }

    /// True when no further extrusion can start
    pub fn is_finished(&self) -> bool {
        match self.mode {
            ExtrusionMode::Single => self.committed_count() > 0,
            ExtrusionMode::Multiple => self.committed_count() == FaceId::ALL.len(),
        }
    }

    // ── Transitions ───────────────────────────────────────────

    /// Handle a click given the normal of the picked triangle (None on a miss).
    pub fn handle_click(&mut self, hit_normal: Option<[f64; 3]>) -> ClickOutcome {
        let outcome = match hit_normal {
            None => ClickOutcome::Ignored(IgnoreReason::Miss),
            Some(normal) => match FaceId::from_normal(normal) {
                Some(face) => self.click_face(face),
                None => ClickOutcome::Ignored(IgnoreReason::UnknownFace),
            },
        };

        match outcome {
            ClickOutcome::Started { face, pivot } => {
                tracing::info!("Extrusion started on {} (pivot {:?})", face.label(), pivot);
            }
            ClickOutcome::Committed { face, factor, shape } => {
                tracing::info!(
                    "Extrusion committed on {} x{factor:.3}: center {:?}, size {:?}",
                    face.label(),
                    shape.center,
                    shape.size
                );
            }
            ClickOutcome::Ignored(reason) => {
                tracing::debug!("Click ignored: {reason:?}");
            }
        }

        outcome
    }

    /// Dispatch a click on a resolved face.
    pub fn click_face(&mut self, face: FaceId) -> ClickOutcome {
        if let Some(active) = self.active {
            let commits = match self.mode {
                ExtrusionMode::Multiple => active.face == face,
                ExtrusionMode::Single => true,
            };
            return if commits {
                self.commit()
            } else {
                ClickOutcome::Ignored(IgnoreReason::Busy {
                    active: active.face,
                })
            };
        }

        match self.faces[face.index()] {
            FaceState::Committed => ClickOutcome::Ignored(IgnoreReason::FaceCommitted(face)),
            FaceState::Extruding => ClickOutcome::Ignored(IgnoreReason::Busy { active: face }),
            FaceState::Untouched => {
                if self.mode == ExtrusionMode::Single && self.committed_count() > 0 {
                    return ClickOutcome::Ignored(IgnoreReason::SessionFinished);
                }
                self.start(face)
            }
        }
    }

    fn start(&mut self, face: FaceId) -> ClickOutcome {
        self.pivot = pivot_for_face(&self.shape, face);
        self.faces[face.index()] = FaceState::Extruding;
        self.active = Some(ActiveExtrusion { face, frames: 0 });
        self.version += 1;
        ClickOutcome::Started {
            face,
            pivot: self.pivot,
        }
    }

    fn commit(&mut self) -> ClickOutcome {
        let Some(active) = self.active.take() else {
            return ClickOutcome::Ignored(IgnoreReason::Miss);
        };
        let factor = self.params.scale_after(active.frames);
        self.shape = commit_extrusion(&self.shape, active.face, factor);
        // Same world point on the anchored face, relative to the new center
        self.pivot = pivot_for_face(&self.shape, active.face);
        self.faces[active.face.index()] = FaceState::Committed;
        self.mesh = self.mesh.next();
        self.version += 1;
        ClickOutcome::Committed {
            face: active.face,
            factor,
            shape: self.shape,
        }
    }

    /// Advance the live extrusion by one rendered frame.
    /// Returns true if the displayed geometry changed.
    pub fn tick(&mut self) -> bool {
        match self.active.as_mut() {
            Some(active) => {
                active.frames = active.frames.saturating_add(1);
                self.version += 1;
                true
            }
            None => false,
        }
    }

    /// Discard everything and start over with the unit box.
    /// Mode and params are kept.
    pub fn reset(&mut self) {
        let version = self.version + 1;
        *self = Self::new(self.mode, self.params);
        self.version = version;
        tracing::info!("Scene reset");
    }

    /// Change mode. Takes effect through a reset, as the click history
    /// of one mode means nothing in the other.
    pub fn set_mode(&mut self, mode: ExtrusionMode) {
        if self.mode != mode {
            self.mode = mode;
            self.reset();
        }
    }

    /// Replace animation params. Applies to the next started extrusion's frames too.
    pub fn set_params(&mut self, params: ExtrusionParams) {
        self.params = params;
        self.version += 1;
    }
}
