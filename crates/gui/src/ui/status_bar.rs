use egui::Ui;
use shared::ExtrusionMode;

use crate::i18n::t;
use crate::state::{AppState, ClickOutcome};

fn hint(state: &AppState) -> &'static str {
    let ext = &state.extrusion;
    if ext.is_extruding() {
        match ext.mode() {
            ExtrusionMode::Single => t("hint.commit"),
            ExtrusionMode::Multiple => t("hint.commit_same"),
        }
    } else if ext.is_finished() {
        t("hint.finished")
    } else {
        t("hint.pick_face")
    }
}

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let ext = &state.extrusion;
        ui.weak(format!("{}: {}/6", t("status.faces_done"), ext.committed_count()));

        ui.separator();

        let [w, h, d] = ext.display_shape().size;
        ui.weak(format!("{}: {w:.3} × {h:.3} × {d:.3}", t("status.size")));

        ui.separator();

        if ext.is_extruding() {
            ui.colored_label(egui::Color32::from_rgb(240, 170, 60), hint(state));
        } else {
            ui.label(hint(state));
        }

        if let Some(ClickOutcome::Ignored(reason)) = &state.last_outcome {
            ui.separator();
            ui.weak(reason.describe());
        }

        // Right-aligned navigation hint and version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(concat!("v", env!("CARGO_PKG_VERSION")));
            ui.separator();
            ui.weak(t("status.nav_hint"));
        });
    });
}
