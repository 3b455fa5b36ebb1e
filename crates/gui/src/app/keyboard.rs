//! Keyboard shortcut handling

use eframe::egui;

use crate::state::AppState;
use crate::viewport::ViewportPanel;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(ctx: &egui::Context, state: &mut AppState, viewport: &mut ViewportPanel) {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    let (reset, reset_camera) = ctx.input(|i| {
        let plain = !i.modifiers.command && !i.modifiers.alt;
        (
            // R: reset scene
            plain && i.key_pressed(egui::Key::R),
            // Home: reset camera
            i.key_pressed(egui::Key::Home),
        )
    });

    if reset {
        state.reset();
    }
    if reset_camera {
        viewport.reset_camera();
    }
}
