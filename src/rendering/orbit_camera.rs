//! Orbit camera
//!
//! The camera circles a target point. Its position is described by two
//! angles and a radius:
//!
//! ```text
//! position = target + radius * (cos(alpha) * sin(beta), cos(beta), sin(alpha) * sin(beta))
//! ```
//!
//! # Controls
//!
//! - **Left mouse drag**: rotate around the target
//! - **Mouse wheel**: zoom (change radius), limited to `[min_radius, max_radius]`

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;
use std::f32::consts::PI;

use super::highlight::tile_glow_bloom;
use super::lighting::ambient_light;
use crate::core::{CameraSettings, SceneConfig};

/// Keeps beta strictly between the poles so `looking_at` stays defined
const BETA_MARGIN: f32 = 0.01;

/// Pixel scroll deltas per equivalent wheel line
const PIXELS_PER_LINE: f32 = 100.0;

/// Wheel precision at which one scroll line zooms one world unit
const REFERENCE_WHEEL_PRECISION: f32 = 30.0;

/// Camera orbiting a target point
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct OrbitCamera {
    pub target: Vec3,
    /// Longitudinal angle in radians
    pub alpha: f32,
    /// Latitudinal angle from the up axis in radians
    pub beta: f32,
    pub radius: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub wheel_precision: f32,
    /// Radians per pixel of drag
    pub rotation_sensitivity: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_settings(&CameraSettings::default())
    }
}

impl OrbitCamera {
    pub fn from_settings(settings: &CameraSettings) -> Self {
        let mut camera = Self {
            target: Vec3::ZERO,
            alpha: settings.alpha,
            beta: settings.beta,
            radius: settings.radius,
            min_radius: settings.min_radius,
            max_radius: settings.max_radius,
            wheel_precision: settings.wheel_precision,
            rotation_sensitivity: settings.rotation_sensitivity,
        };
        camera.radius = camera.radius.clamp(camera.min_radius, camera.max_radius);
        camera
    }

    /// World position of the camera
    pub fn position(&self) -> Vec3 {
        let (sin_alpha, cos_alpha) = self.alpha.sin_cos();
        let (sin_beta, cos_beta) = self.beta.sin_cos();
        self.target
            + self.radius * Vec3::new(cos_alpha * sin_beta, cos_beta, sin_alpha * sin_beta)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position()).looking_at(self.target, Vec3::Y)
    }

    /// Applies a mouse drag in pixels
    pub fn rotate(&mut self, delta: Vec2) {
        self.alpha = (self.alpha - delta.x * self.rotation_sensitivity).rem_euclid(2.0 * PI);
        self.beta = (self.beta - delta.y * self.rotation_sensitivity)
            .clamp(BETA_MARGIN, PI - BETA_MARGIN);
    }

    /// Applies wheel input in lines; positive lines zoom in
    pub fn zoom(&mut self, lines: f32) {
        let step = lines * REFERENCE_WHEEL_PRECISION / self.wheel_precision;
        self.radius = (self.radius - step).clamp(self.min_radius, self.max_radius);
    }
}

/// Spawns the orbit camera with the scene's ambient light and tile glow bloom
pub fn spawn_orbit_camera(mut commands: Commands, config: Res<SceneConfig>) {
    let orbit = OrbitCamera::from_settings(&config.camera);

    commands.spawn((
        Camera3d::default(),
        orbit.transform(),
        ambient_light(&config.lighting),
        tile_glow_bloom(),
        orbit,
        Name::new("camera"),
    ));
}

/// Reads mouse drag and wheel input into every [`OrbitCamera`]
pub fn orbit_camera_input_system(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut cameras: Query<&mut OrbitCamera>,
) {
    let drag = if mouse_buttons.pressed(MouseButton::Left) {
        mouse_motion.delta
    } else {
        Vec2::ZERO
    };

    let lines = match mouse_scroll.unit {
        MouseScrollUnit::Line => mouse_scroll.delta.y,
        MouseScrollUnit::Pixel => mouse_scroll.delta.y / PIXELS_PER_LINE,
    };

    if drag == Vec2::ZERO && lines == 0.0 {
        return;
    }

    for mut camera in cameras.iter_mut() {
        if drag != Vec2::ZERO {
            camera.rotate(drag);
        }
        if lines != 0.0 {
            camera.zoom(lines);
        }
    }
}

/// Writes changed orbit parameters into the camera transform
pub fn apply_orbit_camera(mut cameras: Query<(&OrbitCamera, &mut Transform), Changed<OrbitCamera>>) {
    for (orbit, mut transform) in cameras.iter_mut() {
        *transform = orbit.transform();
    }
}
