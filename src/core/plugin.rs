//! Core plugin for Holoboard
//!
//! Provides fundamental application setup:
//! - Scene configuration resource
//! - Window configuration resource
//! - Scene lifecycle state and transition logging
//!
//! # Plugin Order
//!
//! Add after [`bevy::DefaultPlugins`] and before the rendering and movement
//! plugins, which read [`SceneConfig`] and schedule on [`SceneState`].

use bevy::prelude::*;

use super::{
    states::validate_and_log_state_transitions, SceneConfig, SceneState, WindowConfig,
};
use crate::movement::InterpolationMode;

/// Core plugin for the Holoboard application
///
/// # Usage
///
/// ```rust,ignore
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(CorePlugin::new(SceneConfig::default()))
///     // ... other plugins
/// ```
#[derive(Default)]
pub struct CorePlugin {
    pub config: SceneConfig,
}

impl CorePlugin {
    pub fn new(config: SceneConfig) -> Self {
        Self { config }
    }
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone());
        app.init_resource::<WindowConfig>();

        app.init_state::<SceneState>();

        // Register types for reflection
        app.register_type::<WindowConfig>()
            .register_type::<SceneConfig>()
            .register_type::<InterpolationMode>()
            .register_type::<SceneState>();

        app.add_systems(Update, validate_and_log_state_transitions);
    }
}
