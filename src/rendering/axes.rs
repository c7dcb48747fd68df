//! World axes gizmo at the origin (red X, green Y, blue Z)

use bevy::prelude::*;

use crate::core::SceneConfig;

pub fn draw_world_axes(mut gizmos: Gizmos, config: Res<SceneConfig>) {
    gizmos.axes(Transform::IDENTITY, config.axes_length);
}

/// Run condition for [`draw_world_axes`]
pub fn axes_enabled(config: Res<SceneConfig>) -> bool {
    config.show_axes
}
