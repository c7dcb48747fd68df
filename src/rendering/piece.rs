//! Movable piece spawning
//!
//! The piece is a card holder mesh with a double-sided textured card plane as
//! a child. It carries the [`MoveController`] that the movement systems drive,
//! and it is the only shadow caster in the scene.

use bevy::prelude::*;

use crate::assets::SceneAssets;
use crate::core::{srgb, SceneConfig};
use crate::movement::MoveController;

/// Marker for the piece that follows tile picks
#[derive(Component, Debug, Default, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct MovablePiece;

/// Marker for the card plane attached to the piece
#[derive(Component, Debug, Default, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct PieceCard;

/// Builds the controller from the movement settings
pub fn piece_controller(config: &SceneConfig) -> MoveController {
    let movement = &config.movement;
    MoveController::new(movement.speed, movement.arrival_epsilon)
        .with_pick_offset(Vec3::from_array(movement.pick_offset))
        .with_mode(movement.interpolation)
}

pub fn spawn_piece(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<SceneConfig>,
    assets: Res<SceneAssets>,
) {
    let piece = &config.piece;

    let holder_mesh = assets
        .piece_mesh
        .clone()
        .unwrap_or_else(|| meshes.add(Cuboid::new(0.3, 0.15, 0.6)));
    let holder_material = materials.add(StandardMaterial {
        base_color: srgb(piece.color),
        ..default()
    });

    let card_mesh = meshes.add(Rectangle::new(piece.card_size, piece.card_size));
    let card_material = materials.add(StandardMaterial {
        base_color_texture: assets.card_texture.clone(),
        alpha_mode: AlphaMode::Blend,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    let position = piece.spawn_position(config.board.tile_size);

    commands
        .spawn((
            Mesh3d(holder_mesh),
            MeshMaterial3d(holder_material),
            Transform::from_translation(position),
            piece_controller(&config),
            MovablePiece,
            Name::new("piece"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(card_mesh),
                MeshMaterial3d(card_material),
                Transform::from_translation(Vec3::from_array(piece.card_offset)),
                PieceCard,
                Name::new("piece_card"),
            ));
        });

    info!("[BOARD] Spawned piece at {:?}", position);
}
