//! 3D viewport panel with OpenGL rendering

mod camera;
mod gl_renderer;
pub use extrude_gui_lib::viewport::{mesh, picking};
mod overlays;
mod renderer;

use std::sync::{Arc, Mutex};

use egui::Ui;

use crate::extrude::{self, SceneMeshes};
use crate::state::AppState;
use camera::ArcBallCamera;
use gl_renderer::GlRenderer;

/// 3D viewport panel with OpenGL rendering
pub struct ViewportPanel {
    camera: ArcBallCamera,
    gl_renderer: Option<Arc<Mutex<GlRenderer>>>,
    /// Meshes drawn last frame
    meshes: SceneMeshes,
    /// Bumped whenever `meshes` changes, tells the GL side to re-upload
    meshes_token: u64,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self {
            camera: ArcBallCamera::new(),
            gl_renderer: None,
            meshes: SceneMeshes::default(),
            meshes_token: 0,
        }
    }

    /// Initialize GL renderer (must be called with a GL context)
    pub fn init_gl(&mut self, gl: &glow::Context) {
        match GlRenderer::new(gl) {
            Ok(renderer) => self.gl_renderer = Some(Arc::new(Mutex::new(renderer))),
            Err(e) => tracing::error!("GL renderer unavailable, using wireframe fallback: {e}"),
        }
    }

    pub fn reset_camera(&mut self) {
        self.camera.reset();
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

        self.handle_camera(&response, ui);
        self.handle_click(&response, rect, state);

        if !ui.is_rect_visible(rect) {
            return;
        }

        self.refresh_meshes(state);
        self.render(ui, rect, state);
        self.draw_overlays(ui, rect, state);
    }

    fn handle_camera(&mut self, response: &egui::Response, ui: &Ui) {
        if response.dragged_by(egui::PointerButton::Primary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            let delta = response.drag_delta();
            self.camera.rotate(-delta.x * 0.5, delta.y * 0.5);
        }

        if response.dragged_by(egui::PointerButton::Secondary) {
            let delta = response.drag_delta();
            let scale = self.camera.distance * 0.0015;
            self.camera.pan(-delta.x * scale, delta.y * scale);
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll.abs() > 0.1 {
                self.camera.zoom(scroll * 0.01);
            }
        }
    }

    /// A click picks the displayed box and drives the extrusion in one step
    fn handle_click(&mut self, response: &egui::Response, rect: egui::Rect, state: &mut AppState) {
        if !response.clicked() {
            return;
        }
        let Some(pos) = response.interact_pointer_pos() else {
            return;
        };
        let ray = self.camera.screen_ray(pos, rect);
        let outcome = extrude::click_ray(&mut state.extrusion, &ray);
        state.last_outcome = Some(outcome);
    }

    fn refresh_meshes(&mut self, state: &AppState) {
        let meshes = extrude::build_scene_meshes(&state.extrusion, &state.settings);
        if meshes != self.meshes {
            self.meshes = meshes;
            self.meshes_token += 1;
        }
    }

    fn render(&self, ui: &mut Ui, rect: egui::Rect, state: &AppState) {
        let Some(gl_renderer) = &self.gl_renderer else {
            // Fallback: software wireframe rendering
            renderer::paint_viewport(ui, rect, &self.camera, &self.meshes, &state.settings);
            return;
        };

        let renderer = gl_renderer.clone();
        let camera = self.camera;
        let meshes = self.meshes.clone();
        let token = self.meshes_token;
        let settings = &state.settings;
        let edge_width = settings.edges.width;
        let axes_thickness = settings.axes.thickness;
        let bg_color = settings.viewport.background_color;

        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(eframe::egui_glow::CallbackFn::new(move |info, painter| {
                let gl = painter.gl();
                let clip = info.clip_rect_in_pixels();
                let params = gl_renderer::RenderParams {
                    viewport: [
                        clip.left_px as f32,
                        clip.from_bottom_px as f32,
                        clip.width_px as f32,
                        clip.height_px as f32,
                    ],
                    edge_width,
                    axes_thickness,
                    bg_color,
                };

                if let Ok(mut r) = renderer.lock() {
                    r.sync(gl, &meshes, token);
                    r.paint(gl, &camera, &params);
                }
            })),
        };

        ui.painter().add(callback);
    }

    fn draw_overlays(&self, ui: &mut Ui, rect: egui::Rect, state: &AppState) {
        let painter = ui.painter_at(rect);

        if state.settings.axes.visible && state.settings.axes.show_labels {
            overlays::draw_axis_labels(&painter, rect, &self.camera, &state.settings.axes);
        }
        overlays::draw_pivot_marker(&painter, rect, &self.camera, &state.extrusion);
        overlays::draw_extrusion_info(&painter, rect, &state.extrusion);
    }
}
