use bevy::prelude::*;
use rapier3d::math::{Real, Rotation, Vector};
use rapier3d::prelude::*;

use crate::config::{GRAVITY, PHYSICS_HZ};

/// The Rapier world every body and the mouse ball live in.
///
/// Bevy entities only keep handles into these sets; the sets own the bodies.
#[derive(Resource)]
pub struct PhysicsWorld {
    pub gravity: Vector<Real>,
    pub integration_parameters: IntegrationParameters,
    pub physics_pipeline: PhysicsPipeline,
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    pub broad_phase: DefaultBroadPhase,
    pub narrow_phase: NarrowPhase,
    pub island_manager: IslandManager,
    pub impulse_joints: ImpulseJointSet,
    pub multibody_joints: MultibodyJointSet,
    pub ccd_solver: CCDSolver,
    steps: u64,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new(GRAVITY)
    }
}

impl PhysicsWorld {
    pub fn new(gravity: Vec3) -> Self {
        let integration_parameters = IntegrationParameters {
            dt: (1.0 / PHYSICS_HZ) as Real,
            ..IntegrationParameters::default()
        };
        Self {
            gravity: to_vector(gravity),
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            island_manager: IslandManager::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            steps: 0,
        }
    }

    /// Advance the simulation by one fixed step.
    pub fn step(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
        self.steps += 1;
    }

    /// Number of `step()` calls so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Insert a rigid body with a single collider attached.
    pub fn insert(&mut self, body: RigidBody, collider: Collider) -> (RigidBodyHandle, ColliderHandle) {
        let body_handle = self.bodies.insert(body);
        let collider_handle =
            self.colliders
                .insert_with_parent(collider, body_handle, &mut self.bodies);
        (body_handle, collider_handle)
    }

    /// Current pose of `handle` as a Bevy transform (unit scale).
    pub fn pose(&self, handle: RigidBodyHandle) -> Option<Transform> {
        self.bodies.get(handle).map(pose_of)
    }
}

/// Copy a rigid body's translation and rotation into a transform.
pub fn pose_of(body: &RigidBody) -> Transform {
    Transform {
        translation: to_vec3(body.translation()),
        rotation: to_quat(body.rotation()),
        ..default()
    }
}

/// Overwrite translation + rotation, keep whatever scale the mesh has.
pub fn write_pose(body: &RigidBody, transform: &mut Transform) {
    transform.translation = to_vec3(body.translation());
    transform.rotation = to_quat(body.rotation());
}

#[inline]
pub fn to_vec3(v: &Vector<Real>) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

#[inline]
pub fn to_vector(v: Vec3) -> Vector<Real> {
    vector![v.x, v.y, v.z]
}

#[inline]
pub fn to_quat(r: &Rotation<Real>) -> Quat {
    Quat::from_xyzw(r.i, r.j, r.k, r.w)
}
