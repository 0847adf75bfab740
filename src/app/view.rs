//! Point cloud view
//!
//! CPU projection of the live positions through an orbit camera, painted
//! as one egui mesh. Colors are premultiplied with zero alpha so
//! overlapping points add up toward white.

use eframe::egui;
use crate::core::rotate_y;
use super::GalaxyApp;

const NEAR: f32 = 0.1;
const FAR: f32 = 100.0;

/// Camera orbiting the origin
#[derive(Clone, Copy, Debug)]
pub struct OrbitCamera {
    yaw: f32,
    pitch: f32,
    distance: f32,
    /// Vertical field of view, radians
    fov_y: f32,
}

impl Default for OrbitCamera {
    /// Eye at (5, 3, 3.5), 75° vertical field of view
    fn default() -> Self {
        Self::looking_from([5.0, 3.0, 3.5], 75f32.to_radians())
    }
}

impl OrbitCamera {
    pub fn looking_from([x, y, z]: [f32; 3], fov_y: f32) -> Self {
        let distance = (x * x + y * y + z * z).sqrt().max(NEAR);
        Self {
            yaw: x.atan2(z),
            pitch: (y / distance).asin(),
            distance,
            fov_y,
        }
    }

    pub fn eye(&self) -> [f32; 3] {
        let (sp, cp) = self.pitch.sin_cos();
        let (sy, cy) = self.yaw.sin_cos();
        [
            self.distance * cp * sy,
            self.distance * sp,
            self.distance * cp * cy,
        ]
    }

    pub fn orbit(&mut self, drag: egui::Vec2) {
        self.yaw -= drag.x * 0.005;
        self.pitch = (self.pitch + drag.y * 0.005).clamp(-1.5, 1.5);
    }

    pub fn zoom(&mut self, scroll: f32) {
        self.distance = (self.distance * (1.0 - scroll * 0.001)).clamp(0.5, 50.0);
    }

    pub fn projector(&self, rect: egui::Rect) -> Projector {
        let eye = self.eye();
        let forward = normalize([-eye[0], -eye[1], -eye[2]]);
        let right = normalize(cross(forward, [0.0, 1.0, 0.0]));
        let up = cross(right, forward);
        let focal = 1.0 / (self.fov_y * 0.5).tan();
        Projector {
            eye,
            forward,
            right,
            up,
            focal,
            aspect: rect.width() / rect.height().max(1.0),
            center: rect.center(),
            half_size: rect.size() * 0.5,
        }
    }
}

/// Per-frame view transform
pub struct Projector {
    eye: [f32; 3],
    forward: [f32; 3],
    right: [f32; 3],
    up: [f32; 3],
    focal: f32,
    aspect: f32,
    center: egui::Pos2,
    half_size: egui::Vec2,
}

impl Projector {
    /// Screen position and view depth, `None` outside the near/far range
    pub fn project(&self, p: [f32; 3]) -> Option<(egui::Pos2, f32)> {
        let rel = [p[0] - self.eye[0], p[1] - self.eye[1], p[2] - self.eye[2]];
        let depth = dot(rel, self.forward);
        if !(NEAR..=FAR).contains(&depth) {
            return None;
        }
        let ndc_x = dot(rel, self.right) * self.focal / (depth * self.aspect);
        let ndc_y = dot(rel, self.up) * self.focal / depth;
        Some((
            self.center + egui::vec2(ndc_x * self.half_size.x, -ndc_y * self.half_size.y),
            depth,
        ))
    }

    /// Attenuated point size in screen points
    pub fn point_size(&self, size: f32, depth: f32) -> f32 {
        (size * self.half_size.y * self.focal / depth).max(1.0)
    }
}

fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let len = dot(v, v).sqrt();
    if len == 0.0 {
        return v;
    }
    [v[0] / len, v[1] / len, v[2] / len]
}

fn additive([r, g, b]: [f32; 3]) -> egui::Color32 {
    let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0) as u8;
    egui::Color32::from_rgba_premultiplied(byte(r), byte(g), byte(b), 0)
}

impl GalaxyApp {
    pub(crate) fn render_view(&mut self, ui: &mut egui::Ui, elapsed: f64) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());

        if response.dragged() {
            self.camera.orbit(response.drag_delta());
        }
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                self.camera.zoom(scroll);
            }
        }

        let rect = response.rect;
        let projector = self.camera.projector(rect);
        let galaxy = self.galaxy();
        let angle = galaxy.rotation(elapsed);
        let size = galaxy.params().size;
        let buffer = galaxy.buffer();

        let mut mesh = egui::Mesh::default();
        for (&position, &color) in buffer.positions().iter().zip(buffer.colors()) {
            let Some((pos, depth)) = projector.project(rotate_y(position, angle)) else {
                continue;
            };
            if !rect.contains(pos) {
                continue;
            }
            let px = projector.point_size(size, depth);
            mesh.add_colored_rect(
                egui::Rect::from_center_size(pos, egui::vec2(px, px)),
                additive(color),
            );
        }
        painter.add(egui::Shape::mesh(mesh));
    }
}
