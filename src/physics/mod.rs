use bevy::prelude::*;

pub mod body;
pub mod mouse_ball;
pub mod systems;
pub mod world;

pub use body::{Body, BodySpawn};
pub use mouse_ball::MouseBall;
pub use world::PhysicsWorld;

use crate::frame_loop::FrameStep;
use systems::{advance_world, spawn_bodies, spawn_mouse_ball, sync_bodies, update_mouse_ball};

/// Plug this into your App with `.add_plugins(PhysicsPlugin)`.
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PhysicsWorld>()
            // Bodies + mouse ball go into the world once, before the first frame
            .add_systems(Startup, (spawn_bodies, spawn_mouse_ball))
            // Step first, then drive the mouse ball, then copy poses onto meshes
            .add_systems(Update, advance_world.in_set(FrameStep::Advance))
            .add_systems(Update, update_mouse_ball.in_set(FrameStep::Drive))
            .add_systems(Update, sync_bodies.in_set(FrameStep::Sync));
    }
}
