//! JSON command protocol for scripted sessions.
//!
//! Every command maps onto one harness operation, so a session recorded as
//! a JSON array replays the same clicks and frames headlessly.

use serde::{Deserialize, Serialize};
use shared::{ExtrusionMode, FaceId};

use crate::harness::TestHarness;
use crate::state::{ClickOutcome, IgnoreReason};

/// A command that can be executed against the harness.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum AgentCommand {
    /// Click a face of the displayed box
    ClickFace { face: FaceId },
    /// Click along a ray in world space
    ClickRay {
        origin: [f32; 3],
        direction: [f32; 3],
    },
    /// Click into empty space
    ClickMiss,
    /// Render a number of frames
    Advance {
        #[serde(default = "default_frames")]
        frames: u32,
    },
    /// Restore the default box
    Reset,
    /// Switch extrusion mode (resets the scene)
    SetMode { mode: ExtrusionMode },
    /// Describe the current scene
    Inspect,
}

fn default_frames() -> u32 {
    1
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

/// JSON view of a click outcome. Ignored clicks are still successful commands.
fn outcome_json(outcome: &ClickOutcome) -> serde_json::Value {
    match outcome {
        ClickOutcome::Started { face, pivot } => serde_json::json!({
            "outcome": "started",
            "face": face,
            "pivot": pivot,
        }),
        ClickOutcome::Committed { face, factor, shape } => serde_json::json!({
            "outcome": "committed",
            "face": face,
            "factor": factor,
            "shape": shape,
        }),
        ClickOutcome::Ignored(reason) => serde_json::json!({
            "outcome": "ignored",
            "reason": reason_text(reason),
        }),
    }
}

fn reason_text(reason: &IgnoreReason) -> String {
    match reason {
        IgnoreReason::Miss => "miss".into(),
        IgnoreReason::UnknownFace => "unknown_face".into(),
        IgnoreReason::FaceCommitted(face) => format!("face {} already extruded", face.label()),
        IgnoreReason::Busy { active } => format!("face {} is extruding", active.label()),
        IgnoreReason::SessionFinished => "session finished".into(),
    }
}

fn inspect(harness: &TestHarness) -> serde_json::Value {
    let ext = &harness.state.extrusion;
    let faces: serde_json::Map<String, serde_json::Value> = FaceId::ALL
        .iter()
        .map(|f| (f.label().to_string(), serde_json::json!(ext.face_state(*f))))
        .collect();
    serde_json::json!({
        "mode": ext.mode(),
        "shape": ext.shape(),
        "display_shape": ext.display_shape(),
        "faces": faces,
        "active_face": ext.active().map(|a| a.face),
        "frames": ext.active().map(|a| a.frames),
        "scale": ext.current_scale(),
        "pivot": ext.pivot(),
        "mesh_id": ext.mesh_instance().id.to_string(),
        "mesh_generation": ext.mesh_instance().generation,
        "finished": ext.is_finished(),
    })
}

/// Execute a single command on the harness.
pub fn execute_command(harness: &mut TestHarness, cmd: AgentCommand) -> CommandResponse {
    match cmd {
        AgentCommand::ClickFace { face } => {
            let outcome = harness.click_face(face);
            CommandResponse::ok_with_data(outcome_json(&outcome))
        }

        AgentCommand::ClickRay { origin, direction } => {
            if glam::Vec3::from_array(direction).length() < f32::EPSILON {
                return CommandResponse::err("Ray direction must be non-zero");
            }
            let outcome = harness.click_ray(origin, direction);
            CommandResponse::ok_with_data(outcome_json(&outcome))
        }

        AgentCommand::ClickMiss => {
            let outcome = harness.click_miss();
            CommandResponse::ok_with_data(outcome_json(&outcome))
        }

        AgentCommand::Advance { frames } => {
            harness.advance(frames);
            CommandResponse::ok_with_data(serde_json::json!({
                "scale": harness.current_scale(),
            }))
        }

        AgentCommand::Reset => {
            harness.reset();
            CommandResponse::ok()
        }

        AgentCommand::SetMode { mode } => {
            harness.set_mode(mode);
            CommandResponse::ok_with_data(serde_json::json!({ "mode": mode }))
        }

        AgentCommand::Inspect => CommandResponse::ok_with_data(inspect(harness)),
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json(harness: &mut TestHarness, json: &str) -> Result<CommandResponse, String> {
    let cmd: AgentCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(harness, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    harness: &mut TestHarness,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<AgentCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(harness, cmd))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_serde_click_face() {
        let json = r#"{"command": "click_face", "face": "neg_y"}"#;
        let cmd: AgentCommand = serde_json::from_str(json).unwrap();
        match cmd {
            AgentCommand::ClickFace { face } => assert_eq!(face, FaceId::NegY),
            _ => panic!("Expected ClickFace"),
        }
    }

    #[test]
    fn test_command_serde_advance_default() {
        let cmd: AgentCommand = serde_json::from_str(r#"{"command": "advance"}"#).unwrap();
        assert!(matches!(cmd, AgentCommand::Advance { frames: 1 }));
    }

    #[test]
    fn test_command_serde_set_mode() {
        let json = r#"{"command": "set_mode", "mode": "single"}"#;
        let cmd: AgentCommand = serde_json::from_str(json).unwrap();
        assert!(matches!(
            cmd,
            AgentCommand::SetMode {
                mode: ExtrusionMode::Single
            }
        ));
    }

    #[test]
    fn test_execute_click_face_started() {
        let mut h = TestHarness::new();
        let resp = execute_json(&mut h, r#"{"command": "click_face", "face": "pos_x"}"#).unwrap();
        assert!(resp.success);
        let data = resp.data.unwrap();
        assert_eq!(data["outcome"], "started");
        assert_eq!(data["face"], "pos_x");
    }

    #[test]
    fn test_execute_click_miss_is_ignored() {
        let mut h = TestHarness::new();
        let resp = execute_json(&mut h, r#"{"command": "click_miss"}"#).unwrap();
        assert!(resp.success);
        assert_eq!(resp.data.unwrap()["reason"], "miss");
    }

    #[test]
    fn test_execute_zero_direction_ray() {
        let mut h = TestHarness::new();
        let json = r#"{"command": "click_ray", "origin": [0, 0, 5], "direction": [0, 0, 0]}"#;
        let resp = execute_json(&mut h, json).unwrap();
        assert!(!resp.success);
        assert!(resp.error.is_some());
    }

    #[test]
    fn test_execute_inspect() {
        let mut h = TestHarness::new();
        h.click_face(FaceId::PosZ);
        let resp = execute_json(&mut h, r#"{"command": "inspect"}"#).unwrap();
        let data = resp.data.unwrap();
        assert_eq!(data["mode"], "multiple");
        assert_eq!(data["active_face"], "pos_z");
        assert_eq!(data["faces"]["+Z"], "extruding");
        assert_eq!(data["faces"]["-Z"], "untouched");
        assert_eq!(data["mesh_generation"], 1);
    }

    #[test]
    fn test_execute_invalid_json() {
        let mut h = TestHarness::new();
        let err = execute_json(&mut h, "not valid json").unwrap_err();
        assert!(err.contains("Invalid command JSON"));
    }

    #[test]
    fn test_execute_unknown_face() {
        let mut h = TestHarness::new();
        let result = execute_json(&mut h, r#"{"command": "click_face", "face": "pos_w"}"#);
        assert!(result.is_err());
    }
}
