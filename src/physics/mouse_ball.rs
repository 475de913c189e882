use bevy::prelude::*;
use rapier3d::prelude::{ColliderBuilder, ColliderHandle, RigidBodyBuilder, RigidBodyHandle};

use super::world::{PhysicsWorld, pose_of, to_quat, to_vec3, to_vector};
use crate::config::{MOUSE_BALL_DEPTH, MOUSE_BALL_RADIUS, MOUSE_BALL_SPREAD, MOUSE_COLLIDER_SCALE};

/// The invisible pusher that follows the cursor. Kinematic: it shoves the
/// bodies around but nothing shoves it back.
#[derive(Component, Clone, Copy, Debug)]
pub struct MouseBall {
    pub handle: RigidBodyHandle,
    pub collider: ColliderHandle,
}

impl MouseBall {
    /// Insert the kinematic body + oversized ball collider at the origin.
    pub fn create(world: &mut PhysicsWorld) -> Self {
        let rigid = RigidBodyBuilder::kinematic_position_based()
            .translation(to_vector(Vec3::ZERO))
            .build();
        let collider = ColliderBuilder::ball(MOUSE_BALL_RADIUS * MOUSE_COLLIDER_SCALE).build();
        let (handle, collider) = world.insert(rigid, collider);
        Self { handle, collider }
    }

    /// Teleport the ball onto the cursor's target, push the new pose down to
    /// its collider, and sync `transform` from the collider.
    pub fn update(&self, world: &mut PhysicsWorld, cursor: Vec2, transform: &mut Transform) {
        let Some(rigid) = world.bodies.get_mut(self.handle) else {
            return;
        };
        rigid.set_translation(to_vector(cursor_target(cursor)), true);
        world
            .bodies
            .propagate_modified_body_positions_to_colliders(&mut world.colliders);

        if let Some(collider) = world.colliders.get(self.collider) {
            transform.translation = to_vec3(collider.translation());
            transform.rotation = to_quat(collider.rotation());
        }
    }

    pub fn pose(&self, world: &PhysicsWorld) -> Option<Transform> {
        world.bodies.get(self.handle).map(pose_of)
    }
}

/// Normalized cursor -> world-space point on the ball's fixed plane.
pub fn cursor_target(cursor: Vec2) -> Vec3 {
    (cursor * MOUSE_BALL_SPREAD).extend(MOUSE_BALL_DEPTH)
}
