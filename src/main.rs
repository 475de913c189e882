use bevy::prelude::*;

use bloom_bodies::BloomBodiesPlugin;
use bloom_bodies::capability::{self, PageFallback};
use bloom_bodies::scene::LightHelperPlugin;

fn main() {
    let support = capability::probe();
    let app = capability::launch(support, &mut PageFallback, |app| {
        app
            // Solid black background
            .insert_resource(ClearColor(Color::BLACK))
            // Bevy's core engine features; the canvas follows its parent on the web
            .add_plugins(DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "bloom bodies".into(),
                    fit_canvas_to_parent: true,
                    ..default()
                }),
                ..default()
            }))
            // Physics world, bodies, mouse ball, camera + bloom, event bridge
            .add_plugins(BloomBodiesPlugin)
            .add_plugins(LightHelperPlugin);
    });

    if let Some(mut app) = app {
        app.run();
    }
}
