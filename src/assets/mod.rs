//! Asset management module
//!
//! Starts loading every asset named in [`AssetPaths`] and keeps the scene in
//! [`SceneState::Loading`] until they are all available:
//! - tile mesh (first primitive of a glTF file)
//! - piece holder mesh (first primitive of a glTF file)
//! - card texture
//! - skybox texture
//!
//! A failed or timed out load is logged and moves the scene to
//! [`SceneState::Failed`]; the scene is never built in that case.

use bevy::asset::{LoadState, UntypedAssetId, UntypedAssetLoadFailedEvent};
use bevy::ecs::message::MessageReader;
use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;
use std::path::Path;

use crate::core::{AssetPaths, SceneConfig, SceneState};

/// Seconds to wait for assets before giving up
pub const ASSET_TIMEOUT_SECS: f32 = 30.0;

/// Handles to the optional scene assets
///
/// A `None` handle means the asset is not configured and a procedural
/// stand-in is used.
#[derive(Resource, Default, Debug, Clone)]
pub struct SceneAssets {
    pub tile_mesh: Option<Handle<Mesh>>,
    pub piece_mesh: Option<Handle<Mesh>>,
    pub card_texture: Option<Handle<Image>>,
    pub skybox_texture: Option<Handle<Image>>,

    /// Whether every tracked asset finished loading
    pub loaded: bool,

    /// Whether loading failed
    pub failed: bool,

    /// Error message if loading failed
    pub error_message: Option<String>,
}

impl SceneAssets {
    /// Starts loading every configured asset
    pub fn load(asset_server: &AssetServer, paths: &AssetPaths) -> Self {
        let first_primitive = |path: &String| {
            asset_server.load::<Mesh>(
                GltfAssetLabel::Primitive {
                    mesh: 0,
                    primitive: 0,
                }
                .from_asset(path.clone()),
            )
        };

        Self {
            tile_mesh: paths.tile_model.as_ref().map(first_primitive),
            piece_mesh: paths.piece_model.as_ref().map(first_primitive),
            card_texture: paths
                .card_texture
                .as_ref()
                .map(|path| asset_server.load::<Image>(path.clone())),
            skybox_texture: paths
                .skybox_texture
                .as_ref()
                .map(|path| asset_server.load::<Image>(path.clone())),
            ..default()
        }
    }

    /// Asset ids still relevant for load tracking, with a readable name
    pub fn tracked(&self) -> Vec<(&'static str, UntypedAssetId)> {
        let mut tracked = Vec::with_capacity(4);
        if let Some(handle) = &self.tile_mesh {
            tracked.push(("tile mesh", handle.id().untyped()));
        }
        if let Some(handle) = &self.piece_mesh {
            tracked.push(("piece mesh", handle.id().untyped()));
        }
        if let Some(handle) = &self.card_texture {
            tracked.push(("card texture", handle.id().untyped()));
        }
        if let Some(handle) = &self.skybox_texture {
            tracked.push(("skybox texture", handle.id().untyped()));
        }
        tracked
    }

    fn fail(&mut self, message: String) {
        error!("[ASSETS] {}", message);
        self.failed = true;
        self.error_message = Some(message);
    }
}

/// Simplified view of an asset's [`LoadState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetStatus {
    Pending,
    Loaded,
    Failed,
}

impl From<&LoadState> for AssetStatus {
    fn from(state: &LoadState) -> Self {
        match state {
            LoadState::Loaded => AssetStatus::Loaded,
            LoadState::Failed(_) => AssetStatus::Failed,
            _ => AssetStatus::Pending,
        }
    }
}

/// Result of checking all tracked assets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Some assets are still loading
    Waiting { loaded: usize, total: usize },
    /// Everything is available
    Ready,
    /// The named asset failed
    Failed(&'static str),
}

/// Folds per-asset statuses into one outcome; any failure wins
pub fn evaluate_loading(statuses: &[(&'static str, AssetStatus)]) -> LoadOutcome {
    if let Some((name, _)) = statuses
        .iter()
        .find(|(_, status)| *status == AssetStatus::Failed)
    {
        return LoadOutcome::Failed(*name);
    }

    let loaded = statuses
        .iter()
        .filter(|(_, status)| *status == AssetStatus::Loaded)
        .count();
    if loaded == statuses.len() {
        LoadOutcome::Ready
    } else {
        LoadOutcome::Waiting {
            loaded,
            total: statuses.len(),
        }
    }
}

/// System to initiate asset loading at startup
pub fn start_asset_loading(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<SceneConfig>,
) {
    let assets = SceneAssets::load(&asset_server, &config.assets);
    info!("[ASSETS] Loading {} scene asset(s)", assets.tracked().len());
    commands.insert_resource(assets);
}

/// System to check asset loading status
///
/// Polls the AssetServer each frame while loading and moves the scene to
/// `Running` or `Failed`.
pub fn check_asset_loading(
    mut assets: ResMut<SceneAssets>,
    asset_server: Res<AssetServer>,
    time: Res<Time>,
    mut next_state: ResMut<NextState<SceneState>>,
    mut loading_start_time: Local<Option<f32>>,
) {
    if assets.loaded {
        return;
    }
    if assets.failed {
        next_state.set(SceneState::Failed);
        return;
    }

    let elapsed_secs = time.elapsed_secs();
    let start_time = *loading_start_time.get_or_insert(elapsed_secs);

    let statuses: Vec<_> = assets
        .tracked()
        .into_iter()
        .map(|(name, id)| (name, AssetStatus::from(&asset_server.load_state(id))))
        .collect();

    match evaluate_loading(&statuses) {
        LoadOutcome::Ready => {
            info!("[ASSETS] All {} scene asset(s) loaded", statuses.len());
            assets.loaded = true;
            next_state.set(SceneState::Running);
        }
        LoadOutcome::Failed(name) => {
            assets.fail(format!("Failed to load {}", name));
            next_state.set(SceneState::Failed);
        }
        LoadOutcome::Waiting { loaded, total } => {
            if elapsed_secs - start_time > ASSET_TIMEOUT_SECS {
                assets.fail(format!(
                    "Asset loading timeout after {} seconds ({}/{} loaded)",
                    ASSET_TIMEOUT_SECS, loaded, total
                ));
                next_state.set(SceneState::Failed);
            }
        }
    }
}

/// System to catch load failures reported as events
///
/// glTF sub-asset handles do not always surface the root file's failure
/// through their own load state, so failures are matched by path as well.
pub fn handle_asset_loading_errors(
    mut assets: ResMut<SceneAssets>,
    config: Res<SceneConfig>,
    mut failed_events: MessageReader<UntypedAssetLoadFailedEvent>,
) {
    for event in failed_events.read() {
        if assets.failed {
            continue;
        }
        let failed_path = event.path.path();
        if is_configured_path(&config.assets, failed_path) {
            assets.fail(format!(
                "Failed to load asset {}: {}",
                failed_path.display(),
                event.error
            ));
        }
    }
}

/// True when `path` is one of the configured asset files
pub fn is_configured_path(paths: &AssetPaths, path: &Path) -> bool {
    [
        &paths.tile_model,
        &paths.piece_model,
        &paths.card_texture,
        &paths.skybox_texture,
    ]
    .into_iter()
    .flatten()
    .any(|configured| Path::new(configured) == path)
}

pub struct SceneAssetsPlugin;

impl Plugin for SceneAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneAssets>()
            .add_systems(Startup, start_asset_loading)
            .add_systems(
                Update,
                (handle_asset_loading_errors, check_asset_loading)
                    .chain()
                    .run_if(in_state(SceneState::Loading)),
            );
    }
}
