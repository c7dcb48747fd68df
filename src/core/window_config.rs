//! Window configuration resource
//!
//! Centralizes window settings for the application so the native binary and
//! the web entry point build their primary window the same way.

use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowResolution};

/// Configuration for the primary application window
#[derive(Resource, Debug, Clone, Reflect)]
#[reflect(Resource)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in logical pixels
    pub width: u32,
    /// Window height in logical pixels
    pub height: u32,
    /// Whether the window should be resizable
    pub resizable: bool,
    /// CSS selector of the canvas to render into (web only)
    pub canvas: Option<String>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Holoboard".to_string(),
            width: 1366,
            height: 768,
            resizable: true,
            canvas: None,
        }
    }
}

impl WindowConfig {
    /// Config for rendering into an existing canvas element
    pub fn for_canvas(selector: impl Into<String>) -> Self {
        Self {
            canvas: Some(selector.into()),
            ..default()
        }
    }

    /// Create a Bevy Window from this configuration
    ///
    /// Canvas windows follow their parent element's size, which is how the
    /// browser build handles page resizes.
    pub fn to_window(&self) -> Window {
        Window {
            title: self.title.clone(),
            resolution: WindowResolution::new(self.width, self.height),
            resizable: self.resizable,
            present_mode: PresentMode::AutoVsync,
            canvas: self.canvas.clone(),
            fit_canvas_to_parent: self.canvas.is_some(),
            prevent_default_event_handling: self.canvas.is_some(),
            ..default()
        }
    }
}
