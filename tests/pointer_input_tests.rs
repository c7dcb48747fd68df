//! Integration tests for tile picking
//!
//! Picking events are triggered by hand in the order `bevy_picking` emits
//! them during `PreUpdate`, ahead of the `Update` systems of the same frame.

use bevy::camera::NormalizedRenderTarget;
use bevy::ecs::message::Messages;
use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::picking::backend::HitData;
use bevy::picking::events::{Click, Pointer, Press};
use bevy::picking::pointer::{Location, PointerButton, PointerId};
use bevy::prelude::*;
use std::time::Duration;

use holoboard::input::{on_tile_click, PointerDragTracker, PointerInputPlugin};
use holoboard::movement::TileSelected;
use holoboard::rendering::board::Tile;

fn location() -> Location {
    Location {
        target: NormalizedRenderTarget::None {
            width: 800,
            height: 600,
        },
        position: Vec2::new(400.0, 300.0),
    }
}

fn hit() -> HitData {
    HitData::new(Entity::PLACEHOLDER, 1.0, None, None)
}

fn press(tile: Entity, button: PointerButton) -> Pointer<Press> {
    Pointer::new(PointerId::Mouse, location(), Press { button, hit: hit() }, tile)
}

fn click(tile: Entity, button: PointerButton) -> Pointer<Click> {
    Pointer::new(
        PointerId::Mouse,
        location(),
        Click {
            button,
            hit: hit(),
            duration: Duration::from_millis(5),
        },
        tile,
    )
}

fn picking_app() -> (App, Entity) {
    let mut app = App::new();
    app.init_resource::<ButtonInput<MouseButton>>();
    app.init_resource::<AccumulatedMouseMotion>();
    app.add_message::<TileSelected>();
    app.add_plugins(PointerInputPlugin);

    let tile = app
        .world_mut()
        .spawn((Tile::new(2, 3), GlobalTransform::from_xyz(-1.5, 0.0, -0.5)))
        .observe(on_tile_click)
        .id();
    (app, tile)
}

fn drain_selections(app: &mut App) -> Vec<TileSelected> {
    app.world_mut()
        .resource_mut::<Messages<TileSelected>>()
        .drain()
        .collect()
}

/// Left press, 50px of motion while held, release
fn orbit_drag(app: &mut App) {
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .press(MouseButton::Left);
    app.update();
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .clear();
    app.world_mut().resource_mut::<AccumulatedMouseMotion>().delta = Vec2::new(50.0, 0.0);
    app.update();
    app.world_mut().resource_mut::<AccumulatedMouseMotion>().delta = Vec2::ZERO;
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .release(MouseButton::Left);
    app.update();
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .clear();
}

#[test]
fn test_click_selects_tile_at_its_world_position() {
    let (mut app, tile) = picking_app();

    app.world_mut().trigger(press(tile, PointerButton::Primary));
    app.world_mut().trigger(click(tile, PointerButton::Primary));
    app.update();

    let selections = drain_selections(&mut app);
    assert_eq!(selections.len(), 1);
    assert_eq!(selections[0].tile, tile);
    assert_eq!(selections[0].world_position, Vec3::new(-1.5, 0.0, -0.5));
}

#[test]
fn test_same_frame_tap_after_orbit_drag_selects_tile() {
    //! A tap whose press and release land in one frame arrives before any
    //! `Update` system runs. The previous drag must not leak into it.

    let (mut app, tile) = picking_app();
    orbit_drag(&mut app);
    assert!(!app.world().resource::<PointerDragTracker>().is_click());
    drain_selections(&mut app);

    {
        let mut buttons = app.world_mut().resource_mut::<ButtonInput<MouseButton>>();
        buttons.press(MouseButton::Left);
        buttons.release(MouseButton::Left);
    }
    app.world_mut().trigger(press(tile, PointerButton::Primary));
    app.world_mut().trigger(click(tile, PointerButton::Primary));
    app.update();

    assert_eq!(drain_selections(&mut app).len(), 1);
}

#[test]
fn test_click_ending_a_drag_over_a_tile_is_ignored() {
    //! Press on a tile, orbit the camera, release over the same tile

    let (mut app, tile) = picking_app();
    app.world_mut().trigger(press(tile, PointerButton::Primary));
    orbit_drag(&mut app);

    app.world_mut().trigger(click(tile, PointerButton::Primary));
    app.update();

    assert!(drain_selections(&mut app).is_empty());
}

#[test]
fn test_secondary_click_does_not_select() {
    let (mut app, tile) = picking_app();

    app.world_mut().trigger(press(tile, PointerButton::Secondary));
    app.world_mut().trigger(click(tile, PointerButton::Secondary));
    app.update();

    assert!(drain_selections(&mut app).is_empty());
}
