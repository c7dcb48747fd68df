//! Holoboard - a 3D board scene with a pick-to-move piece
//!
//! Clicking a tile sends the card holder piece gliding toward it. The scene is
//! assembled from the plugins below; [`HoloboardPlugin`] adds all of them in
//! the right order for both the native binary and the web build.

pub mod assets;
pub mod core;
pub mod input;
pub mod movement;
pub mod rendering;
pub mod ui;

use bevy::prelude::*;

use crate::assets::SceneAssetsPlugin;
use crate::core::{CorePlugin, SceneConfig};
use crate::input::PointerInputPlugin;
use crate::movement::MovementPlugin;
use crate::rendering::ScenePlugin;
use crate::ui::{FpsOverlay, UiPlugin};

/// Every Holoboard plugin
///
/// Expects `DefaultPlugins`, `MeshPickingPlugin` and `EguiPlugin` to be added
/// by the caller, since their settings differ between native and web.
#[derive(Default)]
pub struct HoloboardPlugin {
    pub config: SceneConfig,
    pub overlay: FpsOverlay,
}

impl Plugin for HoloboardPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(CorePlugin::new(self.config.clone()))
            .add_plugins(SceneAssetsPlugin)
            .add_plugins(MovementPlugin)
            .add_plugins(PointerInputPlugin)
            .add_plugins(ScenePlugin)
            .add_plugins(UiPlugin {
                overlay: self.overlay,
            });
    }
}
