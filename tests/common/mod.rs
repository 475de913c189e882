use bevy::asset::AssetPlugin;
use bevy::prelude::*;

use bloom_bodies::BloomBodiesPlugin;
use bloom_bodies::config::SceneSettings;

/// The demo without a window or renderer: physics, scene graph and event
/// bridge only.
pub fn headless_app(num_bodies: usize) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, AssetPlugin::default()))
        .init_asset::<Mesh>()
        .init_asset::<StandardMaterial>()
        .insert_resource(SceneSettings {
            num_bodies,
            seed: Some(1234),
            ..default()
        })
        .add_plugins(BloomBodiesPlugin);
    app
}
