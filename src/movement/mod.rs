//! Movement module - the pick-to-move animation
//!
//! - `controller` - [`MoveController`], the pending destination and lerp step
//! - `events` - [`TileSelected`] and [`PieceArrived`] messages
//! - `systems` - ECS glue driving controllers from selections and `Time`
//! - `system_sets` - per-frame ordering shared with rendering systems

pub mod controller;
pub mod events;
pub mod plugin;
pub mod system_sets;
pub mod systems;

pub use controller::*;
pub use events::*;
pub use plugin::MovementPlugin;
pub use system_sets::SceneSystems;
