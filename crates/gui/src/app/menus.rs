//! Application menu bar and settings window

use eframe::egui;
use shared::ExtrusionMode;

use crate::i18n::{lang, set_lang, t, Lang};
use crate::state::settings::{BASE_SCALE_RANGE, STEP_RANGE};
use crate::state::{AppSettings, AppState};
use crate::ui::toolbar::mode_label;
use crate::viewport::ViewportPanel;

/// Show the scene menu
pub fn scene_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.scene"), |ui| {
        if ui.button(t("menu.reset")).clicked() {
            state.reset();
            ui.close_menu();
        }
        ui.separator();
        ui.label(t("tb.mode"));
        for &mode in ExtrusionMode::all() {
            let selected = state.extrusion.mode() == mode;
            if ui.selectable_label(selected, format!("  {}", mode_label(mode))).clicked() {
                state.set_mode(mode);
                ui.close_menu();
            }
        }
        ui.separator();
        if ui.button(t("menu.quit")).clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Show the view menu
pub fn view_menu(ui: &mut egui::Ui, state: &mut AppState, viewport: &mut ViewportPanel) {
    ui.menu_button(t("menu.view"), |ui| {
        ui.checkbox(&mut state.settings.ground.visible, t("menu.show_ground"));
        ui.checkbox(&mut state.settings.edges.visible, t("menu.show_edges"));
        ui.checkbox(&mut state.settings.axes.visible, t("menu.show_axes"));
        ui.separator();
        if ui.button(t("menu.reset_camera")).clicked() {
            viewport.reset_camera();
            ui.close_menu();
        }
        ui.separator();
        ui.menu_button(t("menu.language"), |ui| {
            if ui.selectable_label(lang() == Lang::Ru, "Русский").clicked() {
                switch_language(state, Lang::Ru);
                ui.close_menu();
            }
            if ui.selectable_label(lang() == Lang::En, "English").clicked() {
                switch_language(state, Lang::En);
                ui.close_menu();
            }
        });
    });
}

fn switch_language(state: &mut AppState, l: Lang) {
    set_lang(l);
    state.settings.ui.language = l;
}

/// Show the settings menu
pub fn settings_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.settings"), |ui| {
        if ui.button(t("menu.preferences")).clicked() {
            state.show_settings_window = true;
            ui.close_menu();
        }
    });
}

pub fn settings_window(ctx: &egui::Context, state: &mut AppState) {
    let mut open = state.show_settings_window;
    egui::Window::new(t("settings.title"))
        .open(&mut open)
        .resizable(true)
        .default_width(360.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                show_extrusion_settings(ui, state);
                show_axes_settings(ui, state);
                show_viewport_settings(ui, state);
                show_ui_settings(ui, state);
                show_settings_buttons(ui, state);
            });
        });
    // Closed with the title bar button; the Close button saves on its own
    if state.show_settings_window && !open {
        state.settings.save();
    }
    state.show_settings_window &= open;
}

fn show_extrusion_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.extrusion"));
    let mut changed = false;

    let current = state.extrusion.mode();
    let mut picked = current;
    ui.horizontal(|ui| {
        ui.label(t("tb.mode"));
        egui::ComboBox::from_id_salt("settings_mode_combo")
            .selected_text(mode_label(current))
            .show_ui(ui, |ui| {
                for &mode in ExtrusionMode::all() {
                    ui.selectable_value(&mut picked, mode, mode_label(mode));
                }
            });
    });
    if picked != current {
        state.set_mode(picked);
    }

    ui.horizontal(|ui| {
        ui.label(t("settings.base_scale"));
        changed |= ui
            .add(
                egui::DragValue::new(&mut state.settings.extrusion.base_scale)
                    .speed(0.05)
                    .range(BASE_SCALE_RANGE),
            )
            .changed();
    });

    ui.horizontal(|ui| {
        ui.label(t("settings.step"));
        changed |= ui
            .add(
                egui::DragValue::new(&mut state.settings.extrusion.step_per_frame)
                    .speed(0.0005)
                    .range(STEP_RANGE)
                    .max_decimals(4),
            )
            .changed();
    });

    if changed {
        state.apply_extrusion_settings();
    }
    ui.add_space(10.0);
}

fn show_axes_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.axes"));
    ui.checkbox(&mut state.settings.axes.visible, t("settings.axes_visible"));
    ui.checkbox(&mut state.settings.axes.show_labels, t("settings.axes_labels"));

    ui.horizontal(|ui| {
        ui.label(t("settings.axes_length"));
        ui.add(
            egui::DragValue::new(&mut state.settings.axes.length)
                .speed(0.1)
                .range(0.1..=10.0),
        );
    });
    ui.add_space(10.0);
}

fn rgb_edit(ui: &mut egui::Ui, label: &str, rgb: &mut [f32; 3]) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.color_edit_button_rgb(rgb);
    });
}

fn show_viewport_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.viewport"));
    ui.horizontal(|ui| {
        ui.label(t("settings.bg_color"));
        let [r, g, b] = state.settings.viewport.background_color;
        let mut color = egui::Color32::from_rgb(r, g, b);
        if ui.color_edit_button_srgba(&mut color).changed() {
            state.settings.viewport.background_color = [color.r(), color.g(), color.b()];
        }
    });

    rgb_edit(ui, t("settings.box_color"), &mut state.settings.viewport.box_color);

    ui.horizontal(|ui| {
        ui.label(t("settings.edges_width"));
        ui.add(
            egui::DragValue::new(&mut state.settings.edges.width)
                .speed(0.1)
                .range(1.0..=10.0),
        );
    });

    ui.horizontal(|ui| {
        ui.label(t("settings.ground_size"));
        ui.add(
            egui::DragValue::new(&mut state.settings.ground.size)
                .speed(0.1)
                .range(1.0..=50.0),
        );
    });
    ui.add_space(10.0);
}

fn show_ui_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.ui"));
    ui.horizontal(|ui| {
        ui.label(t("settings.font_size"));
        ui.add(egui::Slider::new(&mut state.settings.ui.font_size, 10.0..=24.0).step_by(1.0));
    });
    ui.add_space(10.0);
}

fn show_settings_buttons(ui: &mut egui::Ui, state: &mut AppState) {
    ui.separator();
    ui.horizontal(|ui| {
        if ui.button(t("settings.reset")).clicked() {
            let language = state.settings.ui.language;
            state.settings = AppSettings::default();
            state.settings.ui.language = language;
            state.apply_extrusion_settings();
        }
        if ui.button(t("settings.close")).clicked() {
            state.settings.save();
            state.show_settings_window = false;
        }
    });
}
