//! Application settings

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use shared::{ExtrusionMode, ExtrusionParams};

use crate::i18n::Lang;

/// Allowed starting scale factor
pub const BASE_SCALE_RANGE: RangeInclusive<f64> = 0.1..=10.0;
/// Allowed scale increment per frame
pub const STEP_RANGE: RangeInclusive<f64> = 0.0..=0.1;

/// Extrusion behaviour settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtrusionSettings {
    /// Single or multiple extrusions per session
    pub mode: ExtrusionMode,
    /// Scale factor when an extrusion starts
    pub base_scale: f64,
    /// Scale increment per rendered frame
    pub step_per_frame: f64,
}

impl Default for ExtrusionSettings {
    fn default() -> Self {
        let params = ExtrusionParams::default();
        Self {
            mode: ExtrusionMode::default(),
            base_scale: params.base_scale,
            step_per_frame: params.step_per_frame,
        }
    }
}

impl ExtrusionSettings {
    pub fn params(&self) -> ExtrusionParams {
        ExtrusionParams {
            base_scale: self.base_scale,
            step_per_frame: self.step_per_frame,
        }
    }

    /// Pull values into the ranges the settings window allows.
    /// Returns true if anything had to change.
    pub fn clamp_to_ranges(&mut self) -> bool {
        let base = self.base_scale.clamp(*BASE_SCALE_RANGE.start(), *BASE_SCALE_RANGE.end());
        let step = self.step_per_frame.clamp(*STEP_RANGE.start(), *STEP_RANGE.end());
        let changed = base != self.base_scale || step != self.step_per_frame;
        self.base_scale = base;
        self.step_per_frame = step;
        changed
    }
}

/// Box edge outline settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeSettings {
    pub visible: bool,
    /// Line width in pixels
    pub width: f32,
    /// RGBA
    pub color: [f32; 4],
}

impl Default for EdgeSettings {
    fn default() -> Self {
        Self {
            visible: true,
            width: 4.0,
            color: [0.0, 0.0, 1.0, 1.0],
        }
    }
}

/// Ground plane settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundSettings {
    pub visible: bool,
    /// Side length of the square ground
    pub size: f32,
    /// Height of the ground plane
    pub offset: f32,
}

impl Default for GroundSettings {
    fn default() -> Self {
        Self {
            visible: true,
            size: 6.0,
            offset: -1.0,
        }
    }
}

/// Axis display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisSettings {
    /// Show axes
    pub visible: bool,
    /// Axis arrow length
    pub length: f32,
    /// Axis line thickness
    pub thickness: f32,
    /// Show axis labels (X, Y, Z)
    pub show_labels: bool,
}

impl Default for AxisSettings {
    fn default() -> Self {
        Self {
            visible: true,
            length: 1.5,
            thickness: 2.0,
            show_labels: true,
        }
    }
}

/// Viewport settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    /// Background color RGB
    pub background_color: [u8; 3],
    /// Box face color RGB (0..1)
    pub box_color: [f32; 3],
    /// Tint of the face being extruded
    pub extruding_color: [f32; 3],
    /// Tint of already extruded faces
    pub committed_color: [f32; 3],
    /// Ground color RGB (0..1)
    pub ground_color: [f32; 3],
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            background_color: [30, 30, 35],
            box_color: [0.6, 0.6, 0.65],
            extruding_color: [0.95, 0.65, 0.2],
            committed_color: [0.45, 0.6, 0.75],
            ground_color: [0.25, 0.27, 0.25],
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Font size in points
    pub font_size: f32,
    pub language: Lang,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            language: Lang::default(),
        }
    }
}

/// All application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppSettings {
    #[serde(default)]
    pub extrusion: ExtrusionSettings,
    #[serde(default)]
    pub viewport: ViewportSettings,
    #[serde(default)]
    pub edges: EdgeSettings,
    #[serde(default)]
    pub ground: GroundSettings,
    #[serde(default)]
    pub axes: AxisSettings,
    #[serde(default)]
    pub ui: UiSettings,
}

impl AppSettings {
    fn config_path() -> Option<std::path::PathBuf> {
        directories::ProjectDirs::from("com", "box-extrude", "box-extrude")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Parse settings from JSON. Out-of-range extrusion values are clamped.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let mut settings: Self =
            serde_json::from_str(json).map_err(|e| format!("Invalid settings JSON: {e}"))?;
        if settings.extrusion.clamp_to_ranges() {
            tracing::warn!(
                "Extrusion settings out of range, using base_scale={} step_per_frame={}",
                settings.extrusion.base_scale,
                settings.extrusion.step_per_frame
            );
        }
        Ok(settings)
    }

    /// Load settings from file, or return default if not found
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        let Ok(json) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                tracing::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    /// Save settings to file
    pub fn save(&self) {
        let Some(path) = Self::config_path() else {
            return;
        };
        if let Some(dir) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(dir) {
                tracing::warn!("Failed to create config dir {}: {e}", dir.display());
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    tracing::warn!("Failed to write settings: {e}");
                }
            }
            Err(e) => tracing::error!("Failed to serialize settings: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene_values() {
        let s = AppSettings::default();
        assert_eq!(s.ground.size, 6.0);
        assert_eq!(s.ground.offset, -1.0);
        assert_eq!(s.edges.width, 4.0);
        assert_eq!(s.extrusion.params(), ExtrusionParams::default());
        assert_eq!(s.extrusion.mode, ExtrusionMode::Multiple);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s = AppSettings::from_json(r#"{"extrusion": {"mode": "single", "base_scale": 1.5, "step_per_frame": 0.01}}"#)
            .unwrap();
        assert_eq!(s.extrusion.mode, ExtrusionMode::Single);
        assert_eq!(s.extrusion.params().base_scale, 1.5);
        assert_eq!(s.ground.size, 6.0);
    }

    #[test]
    fn test_missing_fields_fall_back_per_field() {
        let s = AppSettings::from_json(r#"{"extrusion": {"mode": "single"}, "edges": {"width": 2.0}}"#).unwrap();
        assert_eq!(s.extrusion.mode, ExtrusionMode::Single);
        assert_eq!(s.extrusion.params(), ExtrusionParams::default());
        assert_eq!(s.edges.width, 2.0);
        assert!(s.edges.visible);
    }

    #[test]
    fn test_out_of_range_extrusion_is_clamped() {
        let s = AppSettings::from_json(
            r#"{"extrusion": {"mode": "multiple", "base_scale": -1.0, "step_per_frame": -0.5}}"#,
        )
        .unwrap();
        assert_eq!(s.extrusion.base_scale, 0.1);
        assert_eq!(s.extrusion.step_per_frame, 0.0);

        let s = AppSettings::from_json(r#"{"extrusion": {"base_scale": 50.0, "step_per_frame": 1.0}}"#).unwrap();
        assert_eq!(s.extrusion.base_scale, 10.0);
        assert_eq!(s.extrusion.step_per_frame, 0.1);
    }

    #[test]
    fn test_in_range_values_untouched() {
        let mut e = ExtrusionSettings::default();
        assert!(!e.clamp_to_ranges());
        assert_eq!(e.params(), ExtrusionParams::default());
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = AppSettings::from_json("{ nope").unwrap_err();
        assert!(err.contains("Invalid settings JSON"));
    }

    #[test]
    fn test_settings_json_roundtrip() {
        let mut s = AppSettings::default();
        s.ui.language = Lang::Ru;
        s.edges.visible = false;
        let json = serde_json::to_string(&s).unwrap();
        let back = AppSettings::from_json(&json).unwrap();
        assert_eq!(back.ui.language, Lang::Ru);
        assert!(!back.edges.visible);
    }
}
