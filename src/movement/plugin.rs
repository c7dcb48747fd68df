//! Movement plugin - pick-to-move loop
//!
//! Registers the selection and arrival messages, configures
//! [`SceneSystems`] ordering and schedules the movement systems while the
//! scene is running.
//!
//! # Plugin Dependencies
//!
//! - [`crate::core::CorePlugin`] - provides [`SceneState`]

use bevy::prelude::*;

use super::controller::MoveController;
use super::events::{PieceArrived, TileSelected};
use super::system_sets::SceneSystems;
use super::systems::{advance_movers, retarget_on_tile_selected};
use crate::core::SceneState;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<TileSelected>()
            .add_message::<PieceArrived>();

        app.register_type::<MoveController>();

        // Input → Movement → Visual
        app.configure_sets(
            Update,
            (
                SceneSystems::Input,
                SceneSystems::Movement,
                SceneSystems::Visual,
            )
                .chain()
                .run_if(in_state(SceneState::Running)),
        );

        app.add_systems(
            Update,
            (
                retarget_on_tile_selected.in_set(SceneSystems::Input),
                advance_movers.in_set(SceneSystems::Movement),
            ),
        );
    }
}
