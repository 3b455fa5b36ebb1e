pub mod extrusion;
pub mod settings;

pub use extrusion::{ActiveExtrusion, ClickOutcome, ExtrusionState, IgnoreReason, MeshInstance};
pub use settings::AppSettings;

use shared::ExtrusionMode;

/// Combined application state
pub struct AppState {
    pub extrusion: ExtrusionState,
    pub settings: AppSettings,
    /// Outcome of the most recent click, shown in the status bar
    pub last_outcome: Option<ClickOutcome>,
    /// Show settings window
    pub show_settings_window: bool,
    /// Mode forced for this run from the command line, never saved
    session_mode: Option<ExtrusionMode>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(AppSettings::load())
    }
}

impl AppState {
    pub fn with_settings(settings: AppSettings) -> Self {
        let extrusion = ExtrusionState::new(settings.extrusion.mode, settings.extrusion.params());
        Self {
            extrusion,
            settings,
            last_outcome: None,
            show_settings_window: false,
            session_mode: None,
        }
    }

    /// Run in `mode` without touching the saved settings
    pub fn override_mode(&mut self, mode: ExtrusionMode) {
        self.session_mode = Some(mode);
        self.apply_extrusion_settings();
    }

    /// Mode picked in the UI: becomes the configured mode and drops any override
    pub fn set_mode(&mut self, mode: ExtrusionMode) {
        self.session_mode = None;
        self.settings.extrusion.mode = mode;
        self.apply_extrusion_settings();
    }

    /// Reset the scene (toolbar button, menu, `R` key)
    pub fn reset(&mut self) {
        self.extrusion.reset();
        self.last_outcome = None;
    }

    /// Push extrusion settings into the live state. A mode change resets.
    pub fn apply_extrusion_settings(&mut self) {
        self.extrusion.set_params(self.settings.extrusion.params());
        let mode = self.session_mode.unwrap_or(self.settings.extrusion.mode);
        if self.extrusion.mode() != mode {
            self.extrusion.set_mode(mode);
            self.last_outcome = None;
        }
    }
}
