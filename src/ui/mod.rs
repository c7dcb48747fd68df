//! UI module - Egui overlays
//!
//! - **fps**: frame rate counter in the top-left corner
//! - **styles**: colour palette shared by overlays
//!
//! Overlays draw in `EguiPrimaryContextPass`, which `bevy_egui` runs once the
//! primary egui context exists, so nothing here needs to wait for the scene
//! to finish loading.

pub mod fps;
pub mod styles;

pub use fps::{format_fps, FpsOverlay};

use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

#[derive(Default)]
pub struct UiPlugin {
    pub overlay: FpsOverlay,
}

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<FrameTimeDiagnosticsPlugin>() {
            app.add_plugins(FrameTimeDiagnosticsPlugin::default());
        }

        app.insert_resource(self.overlay)
            .register_type::<FpsOverlay>()
            .add_systems(EguiPrimaryContextPass, fps::fps_ui);
    }
}
