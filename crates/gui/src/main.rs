mod app;
mod ui;
mod viewport;

// Re-export library modules so that `crate::state`, `crate::extrude`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use extrude_gui_lib::extrude;
pub use extrude_gui_lib::i18n;
pub use extrude_gui_lib::state;

use app::ExtrudeApp;
use shared::ExtrusionMode;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "extrude_gui=info,extrude_gui_lib=info".into()),
        )
        .init();

    // Parse --mode <single|multiple> argument
    let mode = parse_mode_arg();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Box Extrude")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "extrude-gui",
        native_options,
        Box::new(move |cc| Ok(Box::new(ExtrudeApp::new(cc, mode)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

fn parse_mode_arg() -> Option<ExtrusionMode> {
    let args: Vec<String> = std::env::args().collect();
    let pos = args.iter().position(|a| a == "--mode")?;
    let Some(value) = args.get(pos + 1) else {
        tracing::error!("--mode needs a value (single|multiple)");
        return None;
    };
    match ExtrusionMode::parse(value) {
        Ok(mode) => {
            tracing::info!("Extrusion mode from command line: {mode:?}");
            Some(mode)
        }
        Err(e) => {
            tracing::error!("{e}");
            None
        }
    }
}
