//! Skybox
//!
//! The configured skybox texture is a cubemap: a KTX2 cubemap, or a PNG with
//! six square faces stacked vertically in the order +X, -X, +Y, -Y, +Z, -Z.
//! PNGs carry no cubemap metadata, so a stacked image is reinterpreted as a
//! six layer cube texture before [`Skybox`] is attached to the scene camera.
//! Without a texture the black clear colour is the background.

use bevy::core_pipeline::Skybox;
use bevy::image::TextureReinterpretationError;
use bevy::prelude::*;
use bevy::render::render_resource::{TextureViewDescriptor, TextureViewDimension};

use super::orbit_camera::OrbitCamera;
use crate::assets::SceneAssets;

/// Faces of a cubemap
pub const CUBE_FACES: u32 = 6;

/// Skybox brightness in cd/m²
pub const SKYBOX_BRIGHTNESS: f32 = 1_000.0;

/// Turns a vertically stacked image into a cube view; cube textures pass through
pub fn prepare_cubemap(image: &mut Image) -> Result<(), TextureReinterpretationError> {
    if image.texture_descriptor.array_layer_count() == 1 {
        image.reinterpret_stacked_2d_as_array(CUBE_FACES)?;
        image.texture_view_descriptor = Some(TextureViewDescriptor {
            dimension: Some(TextureViewDimension::Cube),
            ..default()
        });
    }
    Ok(())
}

/// Attaches the loaded cubemap to every orbit camera
pub fn attach_skybox(
    mut commands: Commands,
    assets: Res<SceneAssets>,
    mut images: ResMut<Assets<Image>>,
    cameras: Query<Entity, With<OrbitCamera>>,
) {
    let Some(handle) = assets.skybox_texture.clone() else {
        debug!("[BOARD] No skybox configured, using the clear colour");
        return;
    };
    let Some(image) = images.get_mut(&handle) else {
        warn!("[BOARD] Skybox texture is not loaded, skipping skybox");
        return;
    };
    if let Err(e) = prepare_cubemap(image) {
        error!("[BOARD] Skybox texture is not a cubemap: {}", e);
        return;
    }

    for camera in cameras.iter() {
        commands.entity(camera).insert(Skybox {
            image: handle.clone(),
            brightness: SKYBOX_BRIGHTNESS,
            ..default()
        });
    }
}
