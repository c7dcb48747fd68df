//! Rendering module - 3D scene construction
//!
//! Builds everything visible once the scene enters `SceneState::Running`.
//!
//! # Architecture
//!
//! - `board` - tile grid with per-tile materials and pick observers
//! - `piece` - movable card holder piece carrying the move controller
//! - `lighting` - ambient fill and shadow casting key light
//! - `skybox` - cubemap background on the camera
//! - `orbit_camera` - mouse driven orbit camera
//! - `highlight` - emissive highlight of the selected tile
//! - `axes` - world axes gizmo
//!
//! # Bevy Rendering
//!
//! - `Mesh3d` / `MeshMaterial3d<StandardMaterial>` for every mesh
//! - `NotShadowCaster` on tiles so only the piece casts shadows
//! - `Bloom` on the camera for the selected tile glow

pub mod axes;
pub mod board;
pub mod highlight;
pub mod lighting;
pub mod orbit_camera;
pub mod piece;
pub mod skybox;

// Re-export commonly used items
pub use board::*;
pub use highlight::TileHighlight;
pub use orbit_camera::OrbitCamera;
pub use piece::{MovablePiece, PieceCard};

use bevy::prelude::*;

use crate::core::SceneState;
use crate::movement::SceneSystems;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .init_resource::<TileHighlight>();

        app.register_type::<Tile>()
            .register_type::<MovablePiece>()
            .register_type::<PieceCard>()
            .register_type::<OrbitCamera>();

        // The camera exists from the first frame so the overlay renders while loading
        app.add_systems(Startup, orbit_camera::spawn_orbit_camera);

        app.add_systems(
            OnEnter(SceneState::Running),
            (
                board::create_board,
                piece::spawn_piece,
                lighting::spawn_lights,
                skybox::attach_skybox,
            ),
        );

        app.add_systems(
            Update,
            (
                (
                    orbit_camera::orbit_camera_input_system,
                    orbit_camera::apply_orbit_camera,
                )
                    .chain(),
                highlight::highlight_selected_tile.in_set(SceneSystems::Visual),
                axes::draw_world_axes.run_if(axes::axes_enabled),
            ),
        );
    }
}
