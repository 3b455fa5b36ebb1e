use std::f32::consts::FRAC_PI_4;

use glam::{Mat4, Vec3, Vec4};

use super::picking::Ray;

const DEFAULT_YAW: f32 = FRAC_PI_4;
const DEFAULT_PITCH: f32 = FRAC_PI_4;
const DEFAULT_DISTANCE: f32 = 10.0;

/// Arc-ball camera orbiting the scene origin
#[derive(Clone, Copy, Debug)]
pub struct ArcBallCamera {
    /// Horizontal rotation angle (radians)
    pub yaw: f32,
    /// Elevation above the ground plane (radians)
    pub pitch: f32,
    /// Distance from target
    pub distance: f32,
    pub target: Vec3,
    /// Vertical field of view (radians)
    pub fov: f32,
}

impl Default for ArcBallCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl ArcBallCamera {
    /// Looking at the origin from 45° around and 45° up, 10 units away
    pub fn new() -> Self {
        Self {
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            distance: DEFAULT_DISTANCE,
            target: Vec3::ZERO,
            fov: 45.0_f32.to_radians(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Orbit by screen-space degrees
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx.to_radians();
        self.pitch = (self.pitch + dy.to_radians()).clamp(-1.5, 1.5);
    }

    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 - delta)).clamp(1.0, 60.0);
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        let (right, up) = self.basis();
        self.target += right * dx + up * dy;
    }

    pub fn eye_position(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + self.distance * Vec3::new(cp * sy, sp, cp * cy)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov, aspect, 0.1, 200.0)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// Screen right and up vectors in world space
    fn basis(&self) -> (Vec3, Vec3) {
        let fwd = (self.target - self.eye_position()).normalize_or_zero();
        let right = fwd.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(fwd).normalize_or_zero();
        (right, up)
    }

    /// Project a 3D point to 2D screen coords (for overlay text)
    pub fn project(&self, point: [f32; 3], rect: egui::Rect) -> Option<egui::Pos2> {
        let vp = self.view_projection(rect.aspect_ratio());
        let p = vp * Vec4::new(point[0], point[1], point[2], 1.0);
        if p.w <= 0.0 {
            return None;
        }
        let ndc = p.truncate() / p.w;
        Some(egui::pos2(
            rect.center().x + ndc.x * rect.width() * 0.5,
            rect.center().y - ndc.y * rect.height() * 0.5,
        ))
    }

    /// Cast a ray from a screen position into the scene
    pub fn screen_ray(&self, screen_pos: egui::Pos2, rect: egui::Rect) -> Ray {
        let ndc_x = (screen_pos.x - rect.center().x) / (rect.width() * 0.5);
        let ndc_y = -(screen_pos.y - rect.center().y) / (rect.height() * 0.5);

        let vp_inv = self.view_projection(rect.aspect_ratio()).inverse();
        let unproject = |z: f32| {
            let p = vp_inv * Vec4::new(ndc_x, ndc_y, z, 1.0);
            p.truncate() / p.w
        };

        let (near, far) = (unproject(-1.0), unproject(1.0));
        Ray::new(self.eye_position(), far - near)
    }
}
