use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

use crate::app::input::{Input, PointerButton};
use crate::scene::transform::Transform;

const POLAR_EPS: f32 = 0.0001;

/// Orbit camera around a target point, in spherical coordinates.
///
/// `theta` is the azimuth around +Y measured from +Z, `phi` the polar angle
/// measured from +Y. Primary button rotates, secondary pans, scroll zooms.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub damping_factor: f32,
    pub enable_damping: bool,
    pub min_distance: f32,
    pub max_distance: f32,

    pub center: Vec3,
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,

    rotate_delta: Vec2,
}

impl OrbitControls {
    #[must_use]
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            rotate_speed: 1.0,
            zoom_speed: 0.05,
            pan_speed: 1.0,
            damping_factor: 0.05,
            enable_damping: false,
            min_distance: 1.0,
            max_distance: 1000.0,

            center,
            radius,
            theta: 0.0,
            phi: std::f32::consts::FRAC_PI_2,

            rotate_delta: Vec2::ZERO,
        }
    }

    /// Controls whose current eye position is `eye`.
    #[must_use]
    pub fn from_position(eye: Vec3, center: Vec3) -> Self {
        let offset = eye - center;
        let radius = offset.length();
        let mut controls = Self::new(center, radius);
        if radius > 0.0 {
            controls.theta = offset.x.atan2(offset.z);
            controls.phi = (offset.y / radius).clamp(-1.0, 1.0).acos();
        }
        controls.max_distance = controls.max_distance.max(radius);
        controls
    }

    /// Eye position implied by the spherical state.
    #[must_use]
    pub fn eye_position(&self) -> Vec3 {
        self.center + self.radius * spherical_direction(self.theta, self.phi)
    }

    /// Applies this frame's input and writes the camera transform.
    pub fn update(&mut self, transform: &mut Transform, input: &Input, fov_degrees: f32, dt: f32) {
        let screen_height = input.screen_size.y.max(1.0);

        if input.is_button_pressed(PointerButton::Primary) {
            let rotate_per_pixel = TAU / screen_height;
            self.rotate_delta -= input.cursor_delta * rotate_per_pixel * self.rotate_speed;
        }

        if self.enable_damping {
            // Damping factor is tuned per 60 Hz frame.
            let retention = (1.0 - self.damping_factor).powf(dt * 60.0);
            let delta_apply = self.rotate_delta * (1.0 - retention);

            self.theta += delta_apply.x;
            self.phi += delta_apply.y;

            self.rotate_delta *= retention;
        } else {
            self.theta += self.rotate_delta.x;
            self.phi += self.rotate_delta.y;
            self.rotate_delta = Vec2::ZERO;
        }

        self.phi = self.phi.clamp(POLAR_EPS, PI - POLAR_EPS);

        if input.scroll_delta.y != 0.0 {
            let scale = (1.0 - self.zoom_speed).powf(input.scroll_delta.y.abs());
            if input.scroll_delta.y > 0.0 {
                self.radius *= scale;
            } else {
                self.radius /= scale;
            }
            self.radius = self.radius.clamp(self.min_distance, self.max_distance);
        }

        if input.is_button_pressed(PointerButton::Secondary) {
            let half_fov = fov_degrees.to_radians() / 2.0;
            let target_world_height = 2.0 * self.radius * half_fov.tan();
            let pixels_to_world_ratio = target_world_height / screen_height;

            let forward = -spherical_direction(self.theta, self.phi);
            let right = forward.cross(Vec3::Y).normalize();
            let up = right.cross(forward).normalize();

            let pan_delta_world = (right * -input.cursor_delta.x + up * input.cursor_delta.y)
                * pixels_to_world_ratio
                * self.pan_speed;

            self.center += pan_delta_world;
        }

        transform.position = self.eye_position();
        transform.look_at(self.center, Vec3::Y);
    }
}

fn spherical_direction(theta: f32, phi: f32) -> Vec3 {
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    Vec3::new(sin_phi * sin_theta, cos_phi, sin_phi * cos_theta)
}
