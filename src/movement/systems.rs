//! Movement systems
//!
//! Two systems make up the pick-to-move loop:
//! - [`retarget_on_tile_selected`] turns each [`TileSelected`] into a new
//!   destination for every [`MoveController`]
//! - [`advance_movers`] ticks each controller with the frame's delta time

use bevy::prelude::*;

use super::controller::{MoveController, MoveStep};
use super::events::{PieceArrived, TileSelected};

/// Retargets every movable piece toward the most recently picked tile
///
/// The destination keeps the piece's current height. Several selections in
/// one frame simply overwrite each other; the last one wins.
pub fn retarget_on_tile_selected(
    mut selections: MessageReader<TileSelected>,
    mut movers: Query<(Entity, &mut MoveController, &Transform)>,
) {
    for selection in selections.read() {
        for (entity, mut controller, transform) in movers.iter_mut() {
            let resting_height = transform.translation.y;
            let was_moving = controller.is_moving();
            let target = controller.retarget_to_tile(selection.world_position, resting_height);

            if was_moving {
                debug!(
                    "[MOVE] {:?} retargeted mid-move to {:?} (tile {:?})",
                    entity, target, selection.tile
                );
            } else {
                info!(
                    "[MOVE] {:?} heading to {:?} (tile {:?})",
                    entity, target, selection.tile
                );
            }
        }
    }
}

/// Advances every moving piece by one frame
pub fn advance_movers(
    time: Res<Time>,
    mut movers: Query<(Entity, &mut MoveController, &mut Transform)>,
    mut arrivals: MessageWriter<PieceArrived>,
) {
    let elapsed = time.delta_secs();

    for (entity, mut controller, mut transform) in movers.iter_mut() {
        if !controller.is_moving() {
            continue;
        }

        let mut position = transform.translation;
        match controller.tick(&mut position, elapsed) {
            MoveStep::Idle => {}
            MoveStep::Advanced { factor } => {
                if factor > 1.0 {
                    debug!(
                        "[MOVE] {:?} overshooting, lerp factor {:.2} for a {:.3}s frame",
                        entity, factor, elapsed
                    );
                }
                transform.translation = position;
            }
            MoveStep::Arrived { destination } => {
                transform.translation = position;
                info!("[MOVE] {:?} arrived at {:?}", entity, destination);
                arrivals.write(PieceArrived {
                    piece: entity,
                    position: destination,
                });
            }
        }
    }
}
