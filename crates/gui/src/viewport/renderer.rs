//! Wireframe rendering for the viewport
//!
//! Used when no OpenGL context is available. Draws the ground outline,
//! the box edges and the axes with egui's painter.

use egui::{Color32, Rect, Stroke, Ui};

use super::camera::ArcBallCamera;
use super::mesh::LineMeshData;
use crate::extrude::SceneMeshes;
use crate::state::settings::AppSettings;

/// Paint the 3D viewport using egui's painter (wireframe rendering)
pub fn paint_viewport(
    ui: &Ui,
    rect: Rect,
    camera: &ArcBallCamera,
    meshes: &SceneMeshes,
    settings: &AppSettings,
) {
    let painter = ui.painter_at(rect);

    let [r, g, b] = settings.viewport.background_color;
    painter.rect_filled(rect, 0.0, Color32::from_rgb(r, g, b));

    if settings.ground.visible {
        draw_ground_outline(&painter, rect, camera, settings);
    }

    if let Some(edges) = &meshes.edges {
        draw_line_mesh(&painter, rect, camera, edges, settings.edges.width);
    }

    if let Some(axes) = &meshes.axes {
        draw_line_mesh(&painter, rect, camera, axes, settings.axes.thickness);
    }
}

fn draw_ground_outline(painter: &egui::Painter, rect: Rect, camera: &ArcBallCamera, settings: &AppSettings) {
    let h = settings.ground.size * 0.5;
    let y = settings.ground.offset;
    let [r, g, b] = settings.viewport.ground_color.map(|c| (c * 255.0) as u8);
    let stroke = Stroke::new(1.0, Color32::from_rgb(r, g, b));

    let corners = [[-h, y, -h], [h, y, -h], [h, y, h], [-h, y, h]];
    for i in 0..4 {
        draw_line_3d(painter, rect, camera, corners[i], corners[(i + 1) % 4], stroke);
    }
}

/// Draw every segment of a line mesh with its own vertex color
fn draw_line_mesh(
    painter: &egui::Painter,
    rect: Rect,
    camera: &ArcBallCamera,
    lines: &LineMeshData,
    width: f32,
) {
    for seg in lines.vertices.chunks_exact(14) {
        let a = [seg[0], seg[1], seg[2]];
        let b = [seg[7], seg[8], seg[9]];
        let color = Color32::from_rgba_unmultiplied(
            (seg[3] * 255.0) as u8,
            (seg[4] * 255.0) as u8,
            (seg[5] * 255.0) as u8,
            (seg[6] * 255.0) as u8,
        );
        draw_line_3d(painter, rect, camera, a, b, Stroke::new(width, color));
    }
}

fn draw_line_3d(
    painter: &egui::Painter,
    rect: Rect,
    camera: &ArcBallCamera,
    a: [f32; 3],
    b: [f32; 3],
    stroke: Stroke,
) {
    if let (Some(pa), Some(pb)) = (camera.project(a, rect), camera.project(b, rect)) {
        painter.line_segment([pa, pb], stroke);
    }
}
