//! System organization using SystemSets
//!
//! Systems run in this order each frame:
//! 1. **Input** - turn tile selections into destinations
//! 2. **Movement** - advance pieces toward their destinations
//! 3. **Visual** - update highlights and overlays
//!
//! Pointer observers fire during `PreUpdate`, so selections written there are
//! visible to every set below in the same frame.

use bevy::prelude::*;

/// Per-frame execution order of scene systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum SceneSystems {
    /// Retargeting from `TileSelected`
    Input,

    /// Move controller ticks
    Movement,

    /// Tile highlight and other presentation updates
    Visual,
}
