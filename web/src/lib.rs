//! Browser entry point for Holoboard
//!
//! Exposes [`bevy_wasm::init_holoboard`] to JavaScript. The page creates a
//! canvas and passes it in; the app renders into it and follows its size.
//! Pages that serve the asset folder call
//! [`bevy_wasm::init_holoboard_with_bundled_assets`] instead.

pub mod bevy_wasm;

pub use bevy_wasm::{init_holoboard, init_holoboard_with_bundled_assets, is_mobile_user_agent};
