// Library crate: exposes testable modules for integration tests and scripted sessions.
// GUI-specific modules (app, ui, viewport rendering) remain in the binary crate.

pub mod command;
pub mod extrude;
pub mod harness;
pub mod i18n;
pub mod state;
pub mod validation;

/// Subset of viewport types needed by extrude/harness (MeshData, Ray, picking).
/// The full viewport (camera, renderer, GL) stays in the binary crate.
pub mod viewport {
    pub mod mesh;
    pub mod picking;
}
