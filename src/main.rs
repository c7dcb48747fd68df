use anyhow::Context;
use bevy::log::LogPlugin;
use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use clap::Parser;
use std::path::PathBuf;

use holoboard::core::settings_persistence::{
    default_config_path, load_config, load_config_or_default, save_config,
};
use holoboard::core::{SceneConfig, WindowConfig};
use holoboard::HoloboardPlugin;

const DEFAULT_LOG_FILTER: &str = "wgpu=error,naga=warn,holoboard=debug";

/// Interactive 3D board with a pick-to-move piece
#[derive(Parser, Debug)]
#[command(name = "holoboard", version, about)]
struct Args {
    /// Scene config file (defaults to scene.json in the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the number of tiles per side
    #[arg(long)]
    board_size: Option<u32>,

    /// Hide the world axes gizmo
    #[arg(long)]
    no_axes: bool,

    /// tracing filter passed to Bevy's LogPlugin
    #[arg(long, default_value = DEFAULT_LOG_FILTER)]
    log_filter: String,

    /// Write the resolved config to the default location and exit
    #[arg(long)]
    write_default_config: bool,
}

fn resolve_config(args: &Args) -> anyhow::Result<SceneConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("loading scene config {}", path.display()))?,
        None => load_config_or_default(),
    };

    if let Some(size) = args.board_size {
        config.board.size = size;
    }
    if args.no_axes {
        config.show_axes = false;
    }

    config.validate().context("invalid command line overrides")?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = resolve_config(&args)?;

    if args.write_default_config {
        let path = default_config_path();
        save_config(&config, &path)
            .with_context(|| format!("writing scene config {}", path.display()))?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let window = WindowConfig::default();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(window.to_window()),
                    ..default()
                })
                .set(LogPlugin {
                    filter: args.log_filter.clone(),
                    ..default()
                }),
        )
        .insert_resource(window)
        .add_plugins(MeshPickingPlugin)
        .add_plugins(EguiPlugin::default())
        .add_plugins(HoloboardPlugin {
            config,
            ..default()
        })
        .run();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_missing_config_is_error() {
        let args = Args::parse_from([
            "holoboard",
            "--config",
            "/nonexistent/holoboard/scene.json",
        ]);
        assert!(resolve_config(&args).is_err());
    }

    #[test]
    fn test_flags_parse() {
        let args = Args::parse_from(["holoboard", "--board-size", "10", "--no-axes"]);
        assert_eq!(args.board_size, Some(10));
        assert!(args.no_axes);
        assert_eq!(args.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_zero_board_size_rejected() {
        let args = Args::parse_from(["holoboard", "--board-size", "0"]);
        assert!(resolve_config(&args).is_err());
    }

    #[test]
    fn test_oversized_board_flag_rejected() {
        let args = Args::parse_from(["holoboard", "--board-size", "100000"]);
        assert!(resolve_config(&args).is_err());
    }
}
