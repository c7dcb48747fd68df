//! Selected tile highlight
//!
//! The most recently picked tile glows with the selection colour. Picking
//! another tile resets the previous one to black emissive first.
//!
//! The glow itself is camera bloom with a threshold of 1.0. Surfaces lit only
//! by the scene lights stay under it, so the boosted selection emissive is the
//! only thing on the board that scatters.

use bevy::post_process::bloom::{Bloom, BloomPrefilter};
use bevy::prelude::*;

use super::board::Tile;
use crate::core::{srgb, BoardSettings, SceneConfig};
use crate::movement::TileSelected;

/// Linear RGB values below this do not contribute to bloom
pub const GLOW_THRESHOLD: f32 = 1.0;

/// Bloom settings for the scene camera
pub fn tile_glow_bloom() -> Bloom {
    Bloom {
        prefilter: BloomPrefilter {
            threshold: GLOW_THRESHOLD,
            threshold_softness: 0.3,
        },
        ..Bloom::NATURAL
    }
}

/// Emissive colour given to the selected tile
pub fn selection_emissive(board: &BoardSettings) -> LinearRgba {
    let color = LinearRgba::from(srgb(board.selected_color));
    let glow = board.selection_glow;
    LinearRgba::rgb(color.red * glow, color.green * glow, color.blue * glow)
}

/// The tile currently highlighted, if any
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TileHighlight {
    pub current: Option<Entity>,
}

fn set_emissive(
    entity: Entity,
    emissive: LinearRgba,
    tiles: &Query<&MeshMaterial3d<StandardMaterial>, With<Tile>>,
    materials: &mut Assets<StandardMaterial>,
) {
    let Ok(material_handle) = tiles.get(entity) else {
        debug!("[BOARD] Highlight target {:?} is not a tile", entity);
        return;
    };
    if let Some(material) = materials.get_mut(&material_handle.0) {
        material.emissive = emissive;
    }
}

/// Moves the highlight to the last selected tile of the frame
pub fn highlight_selected_tile(
    mut selections: MessageReader<TileSelected>,
    mut highlight: ResMut<TileHighlight>,
    tiles: Query<&MeshMaterial3d<StandardMaterial>, With<Tile>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<SceneConfig>,
) {
    let Some(selection) = selections.read().last() else {
        return;
    };
    let tile = selection.tile;

    if let Some(previous) = highlight.current {
        if previous != tile {
            set_emissive(previous, LinearRgba::BLACK, &tiles, &mut materials);
        }
    }

    set_emissive(tile, selection_emissive(&config.board), &tiles, &mut materials);
    highlight.current = Some(tile);
}
