//! Core module - configuration, errors and scene lifecycle
//!
//! # Architecture Overview
//!
//! - [`SceneConfig`] - every scene constant, loaded from JSON
//! - [`WindowConfig`] - primary window settings shared by native and web builds
//! - [`SceneState`] - `Loading → Running | Failed` lifecycle
//! - [`CoreError`] - configuration failures
//!
//! The [`CorePlugin`] inserts the configuration and sets up the state machine.
//!
//! # Usage Example
//!
//! ```rust,ignore
//! use bevy::prelude::*;
//! use holoboard::core::{settings_persistence::load_config_or_default, CorePlugin};
//!
//! App::new()
//!     .add_plugins(DefaultPlugins)
//!     .add_plugins(CorePlugin::new(load_config_or_default()))
//!     // ... other plugins
//! ```

pub mod error;
pub mod plugin;
pub mod resources;
pub mod settings_persistence;
pub mod states;
pub mod window_config;

// Re-export commonly used items
pub use error::{CoreError, CoreResult};
pub use plugin::CorePlugin;
pub use resources::*;
pub use states::*;
pub use window_config::WindowConfig;
