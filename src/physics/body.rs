use bevy::prelude::*;
use rand::distr::{Distribution, StandardUniform};
use rapier3d::prelude::{ColliderBuilder, RigidBodyBuilder, RigidBodyHandle};

use super::world::{PhysicsWorld, pose_of, to_vec3, to_vector, write_pose};
use crate::config::*;

/// Hue step between consecutive bodies (golden angle, in degrees).
const HUE_STEP: f32 = 137.507_77;

/// One simulated sphere. Lives on the entity that carries the sphere mesh;
/// the rigid body itself is owned by [`PhysicsWorld`].
#[derive(Component, Clone, Copy, Debug)]
pub struct Body {
    pub index: usize,
    pub handle: RigidBodyHandle,
    pub radius: f32,
}

/// Everything needed to spawn the visual side of a freshly created body.
#[derive(Clone, Copy, Debug)]
pub struct BodySpawn {
    pub body: Body,
    pub transform: Transform,
    pub color: Color,
}

impl Body {
    /// Insert a dynamic ball into `world`. Size and position are drawn from
    /// `rng`, color is a function of `index`.
    pub fn create<R: rand::Rng + ?Sized>(
        world: &mut PhysicsWorld,
        index: usize,
        rng: &mut R,
    ) -> BodySpawn {
        let mut unit = || -> f32 { StandardUniform.sample(&mut *rng) };

        let radius = BODY_MIN_RADIUS + unit() * BODY_RADIUS_JITTER;
        let half = SPAWN_RANGE * 0.5;
        let position = Vec3::new(
            unit() * SPAWN_RANGE - half,
            unit() * SPAWN_RANGE - half,
            unit() * SPAWN_RANGE - half,
        );

        let rigid = RigidBodyBuilder::dynamic()
            .translation(to_vector(position))
            .build();
        let collider = ColliderBuilder::ball(radius)
            .density(radius * BODY_DENSITY_SCALE)
            .build();
        let (handle, _) = world.insert(rigid, collider);

        let transform = world
            .pose(handle)
            .unwrap_or_else(|| Transform::from_translation(position));

        BodySpawn {
            body: Body {
                index,
                handle,
                radius,
            },
            transform,
            color: body_color(index),
        }
    }

    /// Pull the body towards the scene center for the next step, then copy
    /// its current pose into `transform`.
    pub fn update(&self, world: &mut PhysicsWorld, transform: &mut Transform) {
        let Some(rigid) = world.bodies.get_mut(self.handle) else {
            return;
        };

        rigid.reset_forces(true);
        let dir = (to_vec3(rigid.translation()) - SCENE_CENTER).normalize_or_zero();
        rigid.add_force(to_vector(dir * -CENTER_PULL), true);

        write_pose(rigid, transform);
    }

    /// Pose of the underlying rigid body, if it still exists.
    pub fn pose(&self, world: &PhysicsWorld) -> Option<Transform> {
        world.bodies.get(self.handle).map(pose_of)
    }
}

pub fn body_color(index: usize) -> Color {
    let hue = (index as f32 * HUE_STEP) % 360.0;
    Color::hsl(hue, 0.9, 0.55)
}
