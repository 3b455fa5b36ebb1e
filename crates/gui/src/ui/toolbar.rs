//! Toolbar: reset button and extrusion mode selector

use egui::Ui;
use shared::ExtrusionMode;

use crate::i18n::t;
use crate::state::AppState;

pub fn mode_label(mode: ExtrusionMode) -> &'static str {
    match mode {
        ExtrusionMode::Single => t("mode.single"),
        ExtrusionMode::Multiple => t("mode.multiple"),
    }
}

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        if ui
            .button(t("tb.reset"))
            .on_hover_text(t("tb.reset_tip"))
            .clicked()
        {
            state.reset();
        }

        ui.separator();

        ui.label(t("tb.mode"));
        let before = state.extrusion.mode();
        let mut picked = before;
        egui::ComboBox::from_id_salt("toolbar_mode_combo")
            .selected_text(mode_label(before))
            .show_ui(ui, |ui| {
                for &mode in ExtrusionMode::all() {
                    ui.selectable_value(&mut picked, mode, mode_label(mode));
                }
            });
        if picked != before {
            state.set_mode(picked);
        }
    });
}
