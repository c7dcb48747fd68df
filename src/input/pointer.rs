//! Tile picking
//!
//! Each tile gets an [`on_tile_click`] observer when the board is spawned.
//! A primary-button click on a tile writes a [`TileSelected`] message with
//! the tile's world position; the movement and highlight systems read it
//! later in the frame.
//!
//! # Observer Pattern
//!
//! ```rust,ignore
//! commands.spawn(TileBundle).observe(on_tile_click);
//! ```
//!
//! Left-dragging also orbits the camera. A click that ends a drag longer
//! than [`CLICK_DRAG_TOLERANCE`] pixels is treated as a camera gesture and
//! does not select the tile under the cursor.
//!
//! Picking emits `Pointer<Press>` and `Pointer<Click>` in `PreUpdate`, ahead of
//! every `Update` system. The drag distance is therefore reset by a
//! [`reset_drag_on_press`] observer, so a press and release landing in the same
//! frame is judged on its own gesture rather than on the previous drag.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::picking::events::{Click, Pointer, Press};
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;

use crate::movement::TileSelected;
use crate::rendering::board::Tile;

/// Drag distance in pixels above which a press-release is not a click
pub const CLICK_DRAG_TOLERANCE: f32 = 4.0;

/// Distance the pointer travelled since the primary button went down
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct PointerDragTracker {
    pub travelled: f32,
}

impl PointerDragTracker {
    pub fn is_click(&self) -> bool {
        self.travelled <= CLICK_DRAG_TOLERANCE
    }
}

/// Helper to check if primary button (left click) was used
fn is_primary(button: PointerButton) -> bool {
    matches!(button, PointerButton::Primary)
}

/// Starts a new gesture whenever the primary button goes down on a pickable entity
pub fn reset_drag_on_press(press: On<Pointer<Press>>, mut tracker: ResMut<PointerDragTracker>) {
    if is_primary(press.event.button) {
        tracker.travelled = 0.0;
    }
}

/// Accumulates mouse motion while the left button is held
///
/// A press that started over empty space never reaches [`reset_drag_on_press`],
/// so `just_pressed` resets the distance here as well.
pub fn track_pointer_drag(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut tracker: ResMut<PointerDragTracker>,
) {
    if mouse_buttons.just_pressed(MouseButton::Left) {
        tracker.travelled = 0.0;
    } else if mouse_buttons.pressed(MouseButton::Left) {
        tracker.travelled += mouse_motion.delta.length();
    }
}

/// Handle click on a tile
pub fn on_tile_click(
    click: On<Pointer<Click>>,
    tiles: Query<(&Tile, &GlobalTransform)>,
    drag: Res<PointerDragTracker>,
    mut selections: MessageWriter<TileSelected>,
) {
    if !is_primary(click.event.button) {
        return;
    }

    if !drag.is_click() {
        debug!(
            "[INPUT] Ignoring click after {:.1}px camera drag",
            drag.travelled
        );
        return;
    }

    let entity = click.entity;
    let Ok((tile, transform)) = tiles.get(entity) else {
        warn!("[INPUT] Clicked entity {:?} has no Tile component", entity);
        return;
    };

    let world_position = transform.translation();
    debug!(
        "[INPUT] Picked tile ({}, {}) at {:?}",
        tile.x, tile.z, world_position
    );
    selections.write(TileSelected {
        tile: entity,
        world_position,
    });
}

pub struct PointerInputPlugin;

impl Plugin for PointerInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerDragTracker>()
            .register_type::<PointerDragTracker>()
            .add_observer(reset_drag_on_press)
            .add_systems(Update, track_pointer_drag);
    }
}
