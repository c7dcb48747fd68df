//! Scene configuration resources
//!
//! [`SceneConfig`] gathers every tunable constant of the scene: board layout,
//! colours, movement, lighting, camera and optional asset paths. It is loaded
//! once at startup (see [`super::settings_persistence`]) and read by the
//! spawning systems.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::error::{CoreError, CoreResult};
use crate::movement::{InterpolationMode, ARRIVAL_EPSILON, DEFAULT_MOVE_SPEED};

/// Largest accepted board; every tile owns a material, so the cost grows with `size²`
pub const MAX_BOARD_SIZE: u32 = 256;

/// Root configuration for the whole scene
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Resource)]
#[serde(default)]
pub struct SceneConfig {
    pub board: BoardSettings,
    pub piece: PieceSettings,
    pub movement: MovementSettings,
    pub lighting: LightingSettings,
    pub camera: CameraSettings,
    pub assets: AssetPaths,
    /// Draw the world axes gizmo at the origin
    pub show_axes: bool,
    /// Length of each gizmo axis in world units
    pub axes_length: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            board: BoardSettings::default(),
            piece: PieceSettings::default(),
            movement: MovementSettings::default(),
            lighting: LightingSettings::default(),
            camera: CameraSettings::default(),
            assets: AssetPaths::default(),
            show_axes: true,
            axes_length: 1.0,
        }
    }
}

impl SceneConfig {
    /// Rejects values the scene cannot be built from
    pub fn validate(&self) -> CoreResult<()> {
        if self.board.size == 0 {
            return Err(CoreError::InvalidConfig {
                field: "board.size",
                message: "board needs at least one tile per side".to_string(),
            });
        }
        if self.board.size > MAX_BOARD_SIZE {
            return Err(CoreError::InvalidConfig {
                field: "board.size",
                message: format!(
                    "{} tiles per side exceeds the limit of {}",
                    self.board.size, MAX_BOARD_SIZE
                ),
            });
        }
        if !(self.board.tile_size > 0.0) {
            return Err(CoreError::InvalidConfig {
                field: "board.tile_size",
                message: format!("expected a positive size, got {}", self.board.tile_size),
            });
        }
        if !(self.movement.speed > 0.0) {
            return Err(CoreError::InvalidConfig {
                field: "movement.speed",
                message: format!("expected a positive speed, got {}", self.movement.speed),
            });
        }
        if !(self.movement.arrival_epsilon > 0.0) {
            return Err(CoreError::InvalidConfig {
                field: "movement.arrival_epsilon",
                message: format!(
                    "expected a positive epsilon, got {}",
                    self.movement.arrival_epsilon
                ),
            });
        }
        let camera = &self.camera;
        if !(camera.min_radius > 0.0 && camera.min_radius <= camera.max_radius) {
            return Err(CoreError::InvalidConfig {
                field: "camera.min_radius",
                message: format!(
                    "radius limits [{}, {}] are not an increasing positive range",
                    camera.min_radius, camera.max_radius
                ),
            });
        }
        if !(camera.wheel_precision > 0.0) {
            return Err(CoreError::InvalidConfig {
                field: "camera.wheel_precision",
                message: format!("expected a positive precision, got {}", camera.wheel_precision),
            });
        }
        Ok(())
    }
}

/// Tile grid layout and colouring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct BoardSettings {
    /// Tiles per side
    pub size: u32,
    /// Edge length of one tile in world units
    pub tile_size: f32,
    /// Uniform scale applied to every tile mesh, leaving a small gap
    pub tile_scale: f32,
    /// Diffuse colour of tiles where `(x + z)` is even (sRGB)
    pub even_color: [f32; 3],
    /// Diffuse colour of tiles where `(x + z)` is odd (sRGB)
    pub odd_color: [f32; 3],
    /// Emissive colour of the selected tile (sRGB)
    pub selected_color: [f32; 3],
    /// Multiplier on the selection emissive; above 1 the tile passes the bloom threshold
    pub selection_glow: f32,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            size: 8,
            tile_size: 1.0,
            tile_scale: 0.98,
            even_color: [0.082_352_94, 0.509_803_9, 0.690_196_1],
            odd_color: [0.286_274_5, 0.850_980_4, 0.882_352_9],
            selected_color: [0.2, 0.6, 1.0],
            selection_glow: 4.0,
        }
    }
}

/// Movable piece placement and look
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct PieceSettings {
    /// Spawn position; the z component is multiplied by the tile size
    pub spawn: [f32; 3],
    /// Diffuse colour of the holder mesh (sRGB)
    pub color: [f32; 3],
    /// Local offset of the card plane relative to the holder
    pub card_offset: [f32; 3],
    /// Edge length of the square card plane
    pub card_size: f32,
}

impl Default for PieceSettings {
    fn default() -> Self {
        Self {
            spawn: [-0.1, 1.0, 0.5],
            color: [0.866_666_7, 0.517_647_1, 0.215_686_3],
            card_offset: [0.1, 0.6, 0.0],
            card_size: 1.0,
        }
    }
}

impl PieceSettings {
    pub fn spawn_position(&self, tile_size: f32) -> Vec3 {
        Vec3::new(self.spawn[0], self.spawn[1], self.spawn[2] * tile_size)
    }
}

/// Move controller tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct MovementSettings {
    /// Interpolation speed; the lerp factor per tick is `speed * delta_secs`
    pub speed: f32,
    /// Distance under which the piece snaps onto its destination
    pub arrival_epsilon: f32,
    /// Offset added to a picked tile's position; y is replaced by the resting height
    pub pick_offset: [f32; 3],
    pub interpolation: InterpolationMode,
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            speed: DEFAULT_MOVE_SPEED,
            arrival_epsilon: ARRIVAL_EPSILON,
            pick_offset: [-0.4, 0.0, 0.0],
            interpolation: InterpolationMode::Unclamped,
        }
    }
}

/// Relative light intensities, scaled to physical units when spawned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct LightingSettings {
    pub ambient_intensity: f32,
    pub key_intensity: f32,
    /// Direction the key light shines toward
    pub key_direction: [f32; 3],
    /// The key light sits at `-key_direction * key_distance`
    pub key_distance: f32,
    pub shadow_depth_bias: f32,
}

impl Default for LightingSettings {
    fn default() -> Self {
        Self {
            ambient_intensity: 0.4,
            key_intensity: 0.7,
            key_direction: [0.0, -1.0, -1.0],
            key_distance: 10.0,
            shadow_depth_bias: 0.02,
        }
    }
}

/// Orbit camera parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct CameraSettings {
    /// Longitudinal angle in radians
    pub alpha: f32,
    /// Latitudinal angle in radians, measured from the up axis
    pub beta: f32,
    pub radius: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    /// Zoom damping; higher is slower, 30 zooms one world unit per scroll line
    pub wheel_precision: f32,
    /// Radians of rotation per pixel of mouse drag
    pub rotation_sensitivity: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            alpha: std::f32::consts::FRAC_PI_4,
            beta: std::f32::consts::FRAC_PI_3,
            radius: 12.0,
            min_radius: 5.0,
            max_radius: 25.0,
            wheel_precision: 30.0,
            rotation_sensitivity: 0.005,
        }
    }
}

/// Optional asset paths relative to the asset folder
///
/// Anything left as `None` is replaced by a procedural stand-in. A path that
/// is set but missing from the asset folder fails the scene load.
///
/// [`AssetPaths::bundled`] expects this layout under the asset folder:
///
/// ```text
/// models/box.glb              tile mesh, first primitive
/// models/card_holder.glb      piece mesh, first primitive
/// models/card.png             card image with alpha
/// hdri/nebulae_cubemap.ktx2   skybox cubemap
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct AssetPaths {
    /// glTF file whose first mesh primitive is used for every tile
    pub tile_model: Option<String>,
    /// glTF file whose first mesh primitive is used for the piece holder
    pub piece_model: Option<String>,
    /// Image shown on the piece card, with alpha
    pub card_texture: Option<String>,
    /// Skybox cubemap, KTX2 or six faces stacked vertically in one image
    pub skybox_texture: Option<String>,
}

impl AssetPaths {
    /// The asset set published next to a build, see the layout above
    pub fn bundled() -> Self {
        Self {
            tile_model: Some("models/box.glb".to_string()),
            piece_model: Some("models/card_holder.glb".to_string()),
            card_texture: Some("models/card.png".to_string()),
            skybox_texture: Some("hdri/nebulae_cubemap.ktx2".to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tile_model.is_none()
            && self.piece_model.is_none()
            && self.card_texture.is_none()
            && self.skybox_texture.is_none()
    }
}

/// Converts a stored sRGB triple into a Bevy colour
pub fn srgb(rgb: [f32; 3]) -> Color {
    Color::srgb(rgb[0], rgb[1], rgb[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SceneConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_board_rejected() {
        let mut config = SceneConfig::default();
        config.board.size = 0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig { field: "board.size", .. }));
    }

    #[test]
    fn test_oversized_board_rejected() {
        let mut config = SceneConfig::default();
        config.board.size = MAX_BOARD_SIZE;
        assert!(config.validate().is_ok());

        config.board.size = 100_000;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig { field: "board.size", .. }));
    }

    #[test]
    fn test_nan_speed_rejected() {
        let mut config = SceneConfig::default();
        config.movement.speed = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_radius_limits_rejected() {
        let mut config = SceneConfig::default();
        config.camera.min_radius = 30.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        //! Missing sections fall back to their defaults
        let config: SceneConfig =
            serde_json::from_str(r#"{ "board": { "size": 4 }, "show_axes": false }"#).unwrap();
        assert_eq!(config.board.size, 4);
        assert_eq!(config.board.tile_size, 1.0);
        assert!(!config.show_axes);
        assert_eq!(config.movement, MovementSettings::default());
    }

    #[test]
    fn test_spawn_position_scales_z_by_tile_size() {
        let piece = PieceSettings::default();
        assert_eq!(piece.spawn_position(2.0), Vec3::new(-0.1, 1.0, 1.0));
    }

    #[test]
    fn test_bundled_assets_not_empty() {
        assert!(AssetPaths::default().is_empty());
        assert!(!AssetPaths::bundled().is_empty());
    }

    #[test]
    fn test_bundled_skybox_is_cubemap() {
        let skybox = AssetPaths::bundled().skybox_texture.unwrap();
        assert!(skybox.ends_with(".ktx2"));
    }
}
