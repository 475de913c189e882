use std::collections::HashSet;

use bevy::prelude::*;
use bevy::window::CursorMoved;

use bloom_bodies::config::NUM_BODIES;
use bloom_bodies::frame_loop::{FrameLoop, LoopState};
use bloom_bodies::input::CursorPosition;
use bloom_bodies::physics::mouse_ball::cursor_target;
use bloom_bodies::physics::{Body, MouseBall, PhysicsWorld};

mod common;
use common::headless_app;

fn assert_bodies_synced(app: &mut App) {
    let mut q = app.world_mut().query::<(&Body, &Transform)>();
    let world = app.world().resource::<PhysicsWorld>();
    for (body, tf) in q.iter(app.world()) {
        let pose = body.pose(world).expect("body missing from physics world");
        assert_eq!(tf.translation, pose.translation, "body {} stale", body.index);
        assert_eq!(tf.rotation, pose.rotation, "body {} stale", body.index);
    }
}

#[test]
fn startup_creates_every_body_with_its_own_mesh() {
    let mut app = headless_app(NUM_BODIES);
    app.update();

    let mut q = app.world_mut().query::<(&Body, &Mesh3d)>();
    let rows: Vec<_> = q.iter(app.world()).collect();
    assert_eq!(rows.len(), NUM_BODIES);

    let meshes: HashSet<_> = rows.iter().map(|(_, mesh)| mesh.0.id()).collect();
    assert_eq!(meshes.len(), NUM_BODIES);

    let handles: HashSet<_> = rows.iter().map(|(body, _)| body.handle).collect();
    assert_eq!(handles.len(), NUM_BODIES);

    // bodies + the mouse ball
    let world = app.world().resource::<PhysicsWorld>();
    assert_eq!(world.bodies.len(), NUM_BODIES + 1);
}

#[test]
fn bodies_match_physics_after_every_tick() {
    let mut app = headless_app(24);

    for _ in 0..20 {
        app.update();
        assert_bodies_synced(&mut app);
    }

    let frame = app.world().resource::<FrameLoop>();
    assert_eq!(frame.state(), LoopState::Running);
    assert_eq!(frame.ticks(), 20);
    assert_eq!(app.world().resource::<PhysicsWorld>().steps(), 20);
}

#[test]
fn bodies_actually_move() {
    let mut app = headless_app(8);
    app.update();
    let mut q = app.world_mut().query::<(&Body, &Transform)>();
    let before: Vec<Vec3> = q.iter(app.world()).map(|(_, tf)| tf.translation).collect();

    for _ in 0..10 {
        app.update();
    }

    let after: Vec<Vec3> = q.iter(app.world()).map(|(_, tf)| tf.translation).collect();
    assert!(before.iter().zip(&after).any(|(a, b)| a != b));
}

#[test]
fn mouse_ball_follows_cursor_messages() {
    let mut app = headless_app(4);
    app.update();

    // 1280x720 default viewport: the center of the screen is the origin.
    app.world_mut().write_message(CursorMoved {
        window: Entity::PLACEHOLDER,
        position: Vec2::new(640.0, 360.0),
        delta: None,
    });
    app.update();
    let cursor = app.world().resource::<CursorPosition>().0;
    assert!(cursor.length() < 1e-5);

    app.world_mut().resource_mut::<CursorPosition>().0 = Vec2::new(0.5, -1.0);
    app.update();

    let mut q = app.world_mut().query::<(&MouseBall, &Transform)>();
    let (ball, tf) = q.single(app.world()).unwrap();
    let pose = ball.pose(app.world().resource::<PhysicsWorld>()).unwrap();
    assert_eq!(tf.translation, pose.translation);
    assert_eq!(tf.translation, cursor_target(Vec2::new(0.5, -1.0)));
}

#[test]
fn stopped_loop_freezes_physics() {
    let mut app = headless_app(4);
    app.update();
    app.update();

    app.world_mut().resource_mut::<FrameLoop>().stop();
    let steps = app.world().resource::<PhysicsWorld>().steps();
    app.update();
    app.update();

    assert_eq!(app.world().resource::<PhysicsWorld>().steps(), steps);
    assert_eq!(app.world().resource::<FrameLoop>().ticks(), 2);
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn escape_stops_the_loop_and_exits() {
    let mut app = headless_app(2);
    app.update();

    let mut keys = ButtonInput::<KeyCode>::default();
    keys.press(KeyCode::Escape);
    app.insert_resource(keys);
    app.update();

    assert!(app.world().resource::<FrameLoop>().is_stopped());
    assert_eq!(app.should_exit(), Some(AppExit::Success));
}

#[test]
fn stop_lands_between_frames() {
    let mut app = headless_app(2);
    app.update();
    app.update();

    let mut keys = ButtonInput::<KeyCode>::default();
    keys.press(KeyCode::KeyQ);
    app.insert_resource(keys);
    app.update();
    app.update();

    let ticks = app.world().resource::<FrameLoop>().ticks();
    assert_eq!(ticks, 2);
    assert_eq!(app.world().resource::<PhysicsWorld>().steps(), ticks);
}
