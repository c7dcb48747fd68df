//! Messages exchanged between picking, movement and highlighting

use bevy::prelude::*;

/// A tile was clicked with the primary button
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct TileSelected {
    pub tile: Entity,
    /// World position of the tile at the time of the click
    pub world_position: Vec3,
}

/// A piece reached its pending destination and went idle
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct PieceArrived {
    pub piece: Entity,
    pub position: Vec3,
}
