//! Board creation
//!
//! Spawns the `size x size` tile grid centred on the origin. Every tile gets
//! its own material so the selection highlight can change one tile's
//! emissive colour without touching the others.

use bevy::light::NotShadowCaster;
use bevy::prelude::*;

use crate::assets::SceneAssets;
use crate::core::{srgb, BoardSettings, SceneConfig};
use crate::input::pointer::on_tile_click;

/// Grid coordinates of a board tile
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
#[reflect(Component)]
pub struct Tile {
    pub x: u32,
    pub z: u32,
}

impl Tile {
    pub fn new(x: u32, z: u32) -> Self {
        Self { x, z }
    }

    /// Tiles where `x + z` is even use the even colour
    pub fn is_even(&self) -> bool {
        (self.x + self.z).is_multiple_of(2)
    }

    pub fn name(&self) -> String {
        format!("tile_{}_{}", self.x, self.z)
    }

    /// Centre of this tile on a board of `board_size` tiles per side
    pub fn world_position(&self, board_size: u32, tile_size: f32) -> Vec3 {
        let half = board_size as f32 / 2.0;
        Vec3::new(
            (self.x as f32 - half + 0.5) * tile_size,
            0.0,
            (self.z as f32 - half + 0.5) * tile_size,
        )
    }

    /// Diffuse colour of this tile under the given settings
    pub fn base_color(&self, board: &BoardSettings) -> Color {
        if self.is_even() {
            srgb(board.even_color)
        } else {
            srgb(board.odd_color)
        }
    }
}

/// Every tile of a board in spawn order (x major, z minor)
pub fn board_tiles(board_size: u32) -> impl Iterator<Item = Tile> {
    (0..board_size).flat_map(move |x| (0..board_size).map(move |z| Tile::new(x, z)))
}

pub fn create_board(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<SceneConfig>,
    assets: Res<SceneAssets>,
) {
    let board = &config.board;

    let tile_mesh = assets
        .tile_mesh
        .clone()
        .unwrap_or_else(|| meshes.add(Cuboid::from_length(board.tile_size)));

    // Collect first, then spawn and attach observers
    let tiles: Vec<_> = board_tiles(board.size)
        .map(|tile| {
            let material = materials.add(StandardMaterial {
                base_color: tile.base_color(board),
                emissive: LinearRgba::BLACK,
                ..default()
            });

            (
                Mesh3d(tile_mesh.clone()),
                MeshMaterial3d(material),
                Transform::from_translation(tile.world_position(board.size, board.tile_size))
                    .with_scale(Vec3::splat(board.tile_scale)),
                NotShadowCaster,
                Name::new(tile.name()),
                tile,
            )
        })
        .collect();

    let count = tiles.len();
    for tile_bundle in tiles {
        commands.spawn(tile_bundle).observe(on_tile_click);
    }

    info!(
        "[BOARD] Spawned {} tiles ({}x{}, tile size {})",
        count, board.size, board.size, board.tile_size
    );
}
