use bevy::prelude::*;
use bevy::window::{CursorMoved, WindowResized};

use bloom_bodies::input::{CursorPosition, ViewportSize};

mod common;
use common::headless_app;

fn camera_aspect(app: &mut App) -> f32 {
    let mut q = app
        .world_mut()
        .query_filtered::<&Projection, With<Camera3d>>();
    match q.single(app.world()).unwrap() {
        Projection::Perspective(p) => p.aspect_ratio,
        other => panic!("unexpected projection {other:?}"),
    }
}

fn resize(app: &mut App, width: f32, height: f32) {
    app.world_mut().write_message(WindowResized {
        window: Entity::PLACEHOLDER,
        width,
        height,
    });
    app.update();
}

#[test]
fn resize_updates_camera_aspect_and_viewport() {
    let mut app = headless_app(1);
    app.update();

    for (w, h) in [(1000.0, 500.0), (300.0, 900.0), (1.0, 1.0)] {
        resize(&mut app, w, h);
        assert!((camera_aspect(&mut app) - w / h).abs() < 1e-6);
        assert_eq!(app.world().resource::<ViewportSize>().0, Vec2::new(w, h));
    }
}

#[test]
fn degenerate_resize_is_ignored() {
    let mut app = headless_app(1);
    app.update();
    resize(&mut app, 800.0, 400.0);

    resize(&mut app, 800.0, 0.0);

    assert!((camera_aspect(&mut app) - 2.0).abs() < 1e-6);
    assert_eq!(app.world().resource::<ViewportSize>().0, Vec2::new(800.0, 400.0));
}

#[test]
fn camera_starts_with_viewport_aspect() {
    let mut app = headless_app(1);
    app.update();

    let expected = app.world().resource::<ViewportSize>().aspect_ratio().unwrap();
    assert!((camera_aspect(&mut app) - expected).abs() < 1e-6);
}

#[test]
fn cursor_uses_viewport_resized_in_the_same_frame() {
    let mut app = headless_app(1);
    app.update();

    // cursor at the bottom-right corner of the new 400x200 viewport
    app.world_mut().write_message(CursorMoved {
        window: Entity::PLACEHOLDER,
        position: Vec2::new(400.0, 200.0),
        delta: None,
    });
    app.world_mut().write_message(WindowResized {
        window: Entity::PLACEHOLDER,
        width: 400.0,
        height: 200.0,
    });
    app.update();

    let cursor = app.world().resource::<CursorPosition>().0;
    assert!((cursor - Vec2::new(1.2, -1.2)).length() < 1e-5, "cursor {cursor}");
}
