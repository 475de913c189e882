use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

use crate::config::{BODY_ICO_SUBDIVISIONS, MOUSE_BALL_RADIUS, MOUSE_LIGHT_INTENSITY, SceneSettings};
use crate::input::CursorPosition;
use crate::physics::body::Body;
use crate::physics::mouse_ball::MouseBall;
use crate::physics::world::PhysicsWorld;

/// Flat-shaded low-poly sphere, one per body since every radius differs.
pub fn body_mesh(radius: f32) -> Mesh {
    let sphere = Sphere::new(radius);
    let mut mesh = match sphere.mesh().ico(BODY_ICO_SUBDIVISIONS) {
        Ok(mesh) => mesh,
        Err(err) => {
            warn!(%err, "icosphere failed, falling back to uv sphere");
            sphere.mesh().uv(12, 8)
        }
    };
    mesh.duplicate_vertices();
    mesh.compute_flat_normals();
    mesh
}

/// Create `SceneSettings::num_bodies` bodies in the physics world and give
/// each one its own mesh entity.
pub fn spawn_bodies(
    mut commands: Commands,
    settings: Res<SceneSettings>,
    mut world: ResMut<PhysicsWorld>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let seed = settings.seed.unwrap_or_else(rand::random);
    info!(count = settings.num_bodies, seed, "spawning bodies");
    let mut rng = StdRng::seed_from_u64(seed);

    for index in 0..settings.num_bodies {
        let spawn = Body::create(&mut world, index, &mut rng);
        let mesh = meshes.add(body_mesh(spawn.body.radius));
        let material = materials.add(StandardMaterial {
            base_color: spawn.color,
            perceptual_roughness: 0.6,
            ..default()
        });

        commands.spawn((
            Name::new(format!("body {index}")),
            spawn.body,
            Mesh3d(mesh),
            MeshMaterial3d(material),
            spawn.transform,
        ));
    }
}

/// The cursor-driven ball: a glowing sphere carrying its own point light.
pub fn spawn_mouse_ball(
    mut commands: Commands,
    mut world: ResMut<PhysicsWorld>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ball = MouseBall::create(&mut world);
    let transform = ball.pose(&world).unwrap_or_default();

    let mesh = meshes.add(Sphere::new(MOUSE_BALL_RADIUS).mesh().uv(32, 18));
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::rgb(8.0, 8.0, 8.0),
        ..default()
    });

    commands
        .spawn((
            Name::new("mouse ball"),
            ball,
            Mesh3d(mesh),
            MeshMaterial3d(material),
            transform,
        ))
        .with_children(|parent| {
            parent.spawn(PointLight {
                color: Color::WHITE,
                intensity: MOUSE_LIGHT_INTENSITY,
                shadows_enabled: false,
                ..default()
            });
        });
}

/// Frame step 2: one fixed physics step.
pub fn advance_world(mut world: ResMut<PhysicsWorld>) {
    world.step();
}

/// Frame step 3: move the mouse ball onto the latest cursor position.
pub fn update_mouse_ball(
    mut world: ResMut<PhysicsWorld>,
    cursor: Res<CursorPosition>,
    mut q_ball: Query<(&MouseBall, &mut Transform)>,
) {
    for (ball, mut tf) in &mut q_ball {
        ball.update(&mut world, cursor.0, &mut tf);
    }
}

/// Frame step 4: copy every body's pose onto its mesh.
pub fn sync_bodies(mut world: ResMut<PhysicsWorld>, mut q_bodies: Query<(&Body, &mut Transform)>) {
    for (body, mut tf) in &mut q_bodies {
        body.update(&mut world, &mut tf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_mesh_is_flat_shaded_triangle_soup() {
        let mesh = body_mesh(0.2);
        assert!(mesh.indices().is_none());
        assert!(mesh.contains_attribute(Mesh::ATTRIBUTE_NORMAL));
        assert_eq!(mesh.count_vertices() % 3, 0);
        assert!(mesh.count_vertices() > 0);
    }
}
