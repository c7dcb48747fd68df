//! Integration tests for the pick-to-move loop
//!
//! Drives [`MovementPlugin`] in a headless app with a hand-advanced clock so
//! every frame has an exact delta.

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use std::time::Duration;

use holoboard::assets::SceneAssets;
use holoboard::core::{CorePlugin, SceneConfig, SceneState};
use holoboard::movement::{MoveController, MovementPlugin, PieceArrived, TileSelected};
use holoboard::rendering::board::{create_board, Tile};
use holoboard::core::BoardSettings;
use holoboard::rendering::highlight::{
    highlight_selected_tile, selection_emissive, TileHighlight, GLOW_THRESHOLD,
};

/// Collects arrival messages so tests can inspect them after an update
#[derive(Resource, Default)]
struct Arrivals(Vec<PieceArrived>);

fn record_arrivals(mut reader: MessageReader<PieceArrived>, mut arrivals: ResMut<Arrivals>) {
    arrivals.0.extend(reader.read().copied());
}

/// App in `SceneState::Running` with a zero-delta clock
fn running_app() -> App {
    let mut app = App::new();
    app.add_plugins(StatesPlugin);
    app.init_resource::<Time>();
    app.add_plugins(CorePlugin::default());
    app.add_plugins(MovementPlugin);
    app.init_resource::<Arrivals>();
    app.add_systems(Update, record_arrivals.after(holoboard::movement::SceneSystems::Movement));

    app.world_mut()
        .resource_mut::<NextState<SceneState>>()
        .set(SceneState::Running);
    app.update();
    app
}

fn spawn_mover(app: &mut App, position: Vec3) -> Entity {
    app.world_mut()
        .spawn((
            Transform::from_translation(position),
            MoveController::new(5.0, 0.001).with_pick_offset(Vec3::ZERO),
        ))
        .id()
}

fn select_tile(app: &mut App, world_position: Vec3) {
    let tile = app.world_mut().spawn(Tile::new(0, 0)).id();
    app.world_mut().write_message(TileSelected {
        tile,
        world_position,
    });
}

fn frame(app: &mut App, secs: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(secs));
    app.update();
}

fn translation(app: &App, entity: Entity) -> Vec3 {
    app.world().get::<Transform>(entity).map(|t| t.translation).unwrap()
}

#[test]
fn test_selection_moves_piece_halfway_in_a_tenth_of_a_second() {
    //! Piece at (0,1,0), tile at (0,0,5): one 0.1 s frame at speed 5
    //! interpolates with factor 0.5 to (0,1,2.5) and keeps the destination.

    let mut app = running_app();
    let piece = spawn_mover(&mut app, Vec3::new(0.0, 1.0, 0.0));

    select_tile(&mut app, Vec3::new(0.0, 0.0, 5.0));
    frame(&mut app, 0.1);

    assert!(translation(&app, piece).abs_diff_eq(Vec3::new(0.0, 1.0, 2.5), 1e-4));
    let controller = app.world().get::<MoveController>(piece).unwrap();
    assert_eq!(controller.destination(), Some(Vec3::new(0.0, 1.0, 5.0)));
}

#[test]
fn test_piece_without_selection_stays_put() {
    let mut app = running_app();
    let piece = spawn_mover(&mut app, Vec3::new(2.0, 1.0, -3.0));

    frame(&mut app, 0.5);

    assert_eq!(translation(&app, piece), Vec3::new(2.0, 1.0, -3.0));
    assert!(app.world().resource::<Arrivals>().0.is_empty());
}

#[test]
fn test_arrival_snaps_and_emits_message() {
    //! A piece within epsilon of its destination snaps onto it, goes idle
    //! and reports the arrival once.

    let mut app = running_app();
    let piece = spawn_mover(&mut app, Vec3::new(0.0, 1.0, 4.9995));

    select_tile(&mut app, Vec3::new(0.0, 0.0, 5.0));
    frame(&mut app, 0.016);

    assert_eq!(translation(&app, piece), Vec3::new(0.0, 1.0, 5.0));
    let controller = app.world().get::<MoveController>(piece).unwrap();
    assert!(!controller.is_moving());

    frame(&mut app, 0.016);
    let arrivals = &app.world().resource::<Arrivals>().0;
    assert_eq!(arrivals.len(), 1);
    assert_eq!(arrivals[0].piece, piece);
    assert_eq!(arrivals[0].position, Vec3::new(0.0, 1.0, 5.0));
}

#[test]
fn test_new_selection_retargets_mid_move() {
    let mut app = running_app();
    let piece = spawn_mover(&mut app, Vec3::new(0.0, 1.0, 0.0));

    select_tile(&mut app, Vec3::new(0.0, 0.0, 5.0));
    frame(&mut app, 0.1);
    let midway = translation(&app, piece);

    select_tile(&mut app, Vec3::new(4.0, 0.0, 0.0));
    frame(&mut app, 0.1);

    let expected = midway.lerp(Vec3::new(4.0, 1.0, 0.0), 0.5);
    assert!(translation(&app, piece).abs_diff_eq(expected, 1e-4));
    let controller = app.world().get::<MoveController>(piece).unwrap();
    assert_eq!(controller.destination(), Some(Vec3::new(4.0, 1.0, 0.0)));
}

#[test]
fn test_long_frame_overshoots_destination() {
    //! A one second frame gives factor 5: the piece lands at (0,1,25)
    //! rather than on the tile.

    let mut app = running_app();
    let piece = spawn_mover(&mut app, Vec3::new(0.0, 1.0, 0.0));

    select_tile(&mut app, Vec3::new(0.0, 0.0, 5.0));
    frame(&mut app, 1.0);

    assert!(translation(&app, piece).abs_diff_eq(Vec3::new(0.0, 1.0, 25.0), 1e-3));
    assert!(app.world().get::<MoveController>(piece).unwrap().is_moving());
}

#[test]
fn test_default_pick_offset_applied() {
    //! Tile at (1.5, 0, -0.5) with the default offset targets (1.1, 1, -0.5)

    let mut app = running_app();
    let piece = app
        .world_mut()
        .spawn((
            Transform::from_xyz(0.0, 1.0, 0.0),
            MoveController::new(5.0, 0.001),
        ))
        .id();

    select_tile(&mut app, Vec3::new(1.5, 0.0, -0.5));
    frame(&mut app, 0.0);

    let controller = app.world().get::<MoveController>(piece).unwrap();
    let destination = controller.destination().unwrap();
    assert!(destination.abs_diff_eq(Vec3::new(1.1, 1.0, -0.5), 1e-6));
}

#[test]
fn test_movement_paused_outside_running() {
    let mut app = App::new();
    app.add_plugins(StatesPlugin);
    app.init_resource::<Time>();
    app.add_plugins(CorePlugin::default());
    app.add_plugins(MovementPlugin);
    app.update();

    let piece = spawn_mover(&mut app, Vec3::new(0.0, 1.0, 0.0));
    select_tile(&mut app, Vec3::new(0.0, 0.0, 5.0));
    frame(&mut app, 0.1);

    assert_eq!(translation(&app, piece), Vec3::new(0.0, 1.0, 0.0));
}

/// World with the resources the board and highlight systems read
fn board_app() -> App {
    let mut app = App::new();
    app.init_resource::<Assets<Mesh>>();
    app.init_resource::<Assets<StandardMaterial>>();
    app.init_resource::<SceneAssets>();
    app.init_resource::<TileHighlight>();
    app.insert_resource(SceneConfig::default());
    app.add_message::<TileSelected>();
    app.add_systems(Update, highlight_selected_tile);
    app
}

fn tile_at(app: &mut App, x: u32, z: u32) -> Entity {
    let world = app.world_mut();
    let mut tiles = world.query::<(Entity, &Tile)>();
    tiles
        .iter(world)
        .find(|(_, tile)| tile.x == x && tile.z == z)
        .map(|(entity, _)| entity)
        .unwrap()
}

fn emissive(app: &App, tile: Entity) -> LinearRgba {
    let handle = app
        .world()
        .get::<MeshMaterial3d<StandardMaterial>>(tile)
        .unwrap();
    app.world()
        .resource::<Assets<StandardMaterial>>()
        .get(&handle.0)
        .unwrap()
        .emissive
}

#[test]
fn test_create_board_spawns_checkerboard() {
    let mut app = board_app();
    app.world_mut().run_system_once(create_board).unwrap();

    let world = app.world_mut();
    let mut tiles = world.query::<(&Tile, &Transform)>();
    assert_eq!(tiles.iter(world).count(), 64);

    let corner = tiles
        .iter(world)
        .find(|(tile, _)| tile.x == 0 && tile.z == 0)
        .map(|(_, transform)| *transform)
        .unwrap();
    assert_eq!(corner.translation, Vec3::new(-3.5, 0.0, -3.5));
    assert!(corner.scale.abs_diff_eq(Vec3::splat(0.98), 1e-6));
}

#[test]
fn test_highlight_follows_selection() {
    //! Selecting a second tile clears the first tile's glow

    let mut app = board_app();
    app.world_mut().run_system_once(create_board).unwrap();

    let first = tile_at(&mut app, 0, 0);
    let second = tile_at(&mut app, 3, 4);
    let selected = selection_emissive(&BoardSettings::default());
    assert!(selected.blue > GLOW_THRESHOLD);

    app.world_mut().write_message(TileSelected {
        tile: first,
        world_position: Vec3::new(-3.5, 0.0, -3.5),
    });
    app.update();
    assert_eq!(emissive(&app, first), selected);
    assert_eq!(app.world().resource::<TileHighlight>().current, Some(first));

    app.world_mut().write_message(TileSelected {
        tile: second,
        world_position: Vec3::new(-0.5, 0.0, 0.5),
    });
    app.update();
    assert_eq!(emissive(&app, first), LinearRgba::BLACK);
    assert_eq!(emissive(&app, second), selected);
    assert_eq!(app.world().resource::<TileHighlight>().current, Some(second));
}
