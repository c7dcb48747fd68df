//! Scene lighting
//!
//! A soft ambient fill standing in for a sky/ground hemisphere light, and one
//! directional key light that casts the piece's shadow onto the tiles.
//! Intensities in [`LightingSettings`] are relative and get scaled here.

use bevy::prelude::*;

use crate::core::{LightingSettings, SceneConfig};

/// Ambient brightness at relative intensity 1.0
pub const AMBIENT_BRIGHTNESS_SCALE: f32 = 1_000.0;

/// Key light illuminance (lux) at relative intensity 1.0
pub const KEY_ILLUMINANCE_SCALE: f32 = 10_000.0;

/// Marker for the directional key light
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct KeyLight;

/// Ambient light attached to the camera
pub fn ambient_light(lighting: &LightingSettings) -> AmbientLight {
    AmbientLight {
        color: Color::WHITE,
        brightness: lighting.ambient_intensity * AMBIENT_BRIGHTNESS_SCALE,
        ..default()
    }
}

/// Places the key light at `-direction * key_distance`, aimed along `direction`
pub fn key_light_transform(lighting: &LightingSettings) -> Transform {
    let direction = Vec3::from_array(lighting.key_direction);
    let position = -direction * lighting.key_distance;
    Transform::from_translation(position).looking_to(direction.normalize_or(Vec3::NEG_Y), Vec3::Y)
}

pub fn spawn_lights(mut commands: Commands, config: Res<SceneConfig>) {
    let lighting = &config.lighting;

    commands.spawn((
        DirectionalLight {
            illuminance: lighting.key_intensity * KEY_ILLUMINANCE_SCALE,
            shadows_enabled: true,
            shadow_depth_bias: lighting.shadow_depth_bias,
            color: Color::WHITE,
            ..default()
        },
        key_light_transform(lighting),
        KeyLight,
        Name::new("key_light"),
    ));

    debug!(
        "[BOARD] Lights spawned (ambient {}, key {})",
        lighting.ambient_intensity, lighting.key_intensity
    );
}
