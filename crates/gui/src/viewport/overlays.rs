//! Viewport overlay drawing (axis labels, extrusion readout)

use egui::{Align2, Color32, FontId, Painter};

use crate::i18n::t;
use crate::state::settings::AxisSettings;
use crate::state::ExtrusionState;
use crate::ui::toolbar::mode_label;

use super::camera::ArcBallCamera;

/// Draw axis labels at the tips of the axis lines
pub fn draw_axis_labels(painter: &Painter, rect: egui::Rect, camera: &ArcBallCamera, axes: &AxisSettings) {
    let tip = axes.length * 1.07;
    let labels = [
        ([tip, 0.0, 0.0], "X", Color32::from_rgb(220, 70, 70)),
        ([0.0, tip, 0.0], "Y", Color32::from_rgb(70, 200, 70)),
        ([0.0, 0.0, tip], "Z", Color32::from_rgb(70, 110, 220)),
    ];

    for (pos, label, color) in labels {
        if let Some(screen) = camera.project(pos, rect) {
            if rect.contains(screen) {
                painter.text(screen, Align2::LEFT_BOTTOM, label, FontId::monospace(12.0), color);
            }
        }
    }
}

/// Mark the pivot of the live extrusion
pub fn draw_pivot_marker(painter: &Painter, rect: egui::Rect, camera: &ArcBallCamera, state: &ExtrusionState) {
    if !state.is_extruding() {
        return;
    }
    let p = state.world_pivot();
    if let Some(screen) = camera.project([p[0] as f32, p[1] as f32, p[2] as f32], rect) {
        painter.circle_filled(screen, 4.0, Color32::from_rgb(240, 170, 60));
        painter.circle_stroke(screen, 6.0, egui::Stroke::new(1.0, Color32::BLACK));
    }
}

/// Mode, active face and live scale in the top-left corner
pub fn draw_extrusion_info(painter: &Painter, rect: egui::Rect, state: &ExtrusionState) {
    let mut lines = vec![mode_label(state.mode()).to_string()];
    if let (Some(active), Some(scale)) = (state.active(), state.current_scale()) {
        lines.push(format!("{}: {}", t("overlay.face"), active.face.label()));
        lines.push(format!("{}: ×{scale:.3}", t("overlay.scale")));
    }

    let origin = rect.left_top() + egui::vec2(10.0, 8.0);
    for (i, line) in lines.iter().enumerate() {
        painter.text(
            origin + egui::vec2(0.0, i as f32 * 16.0),
            Align2::LEFT_TOP,
            line,
            FontId::proportional(13.0),
            Color32::from_gray(210),
        );
    }
}
