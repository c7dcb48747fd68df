//! Input module - Bevy picking and observer patterns
//!
//! - `pointer` - tile click observer and drag tracking
//!
//! Hit-testing is done by `MeshPickingPlugin`; this module only turns the
//! resulting `Pointer<Click>` on a tile into a [`crate::movement::TileSelected`].

pub mod pointer;

// Re-export commonly used items
pub use pointer::*;
