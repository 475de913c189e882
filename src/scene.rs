use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::post_process::bloom::{Bloom, BloomPrefilter};
use bevy::prelude::*;

use crate::config::*;
use crate::input::ViewportSize;

/// Marker for the orange point light the helper gizmo outlines.
#[derive(Component)]
pub struct HelpedLight;

/// Camera (with bloom) and lights.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_scene);
    }
}

/// Draws a wire sphere around the helped point light. Needs gizmos, so it is
/// added by the binary rather than by [`ScenePlugin`].
pub struct LightHelperPlugin;

impl Plugin for LightHelperPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_point_light_helper);
    }
}

/// Map classic bloom-pass parameters onto Bevy's bloom.
///
/// `strength` scales the natural preset's intensity, `radius` scales how much
/// the wide (low-frequency) mips contribute, `threshold` becomes the
/// prefilter threshold and `resolution` caps the first mip.
pub fn bloom_from(settings: &BloomSettings) -> Bloom {
    let natural = Bloom::NATURAL;
    Bloom {
        intensity: natural.intensity * settings.strength,
        low_frequency_boost: (natural.low_frequency_boost * settings.radius).clamp(0.0, 1.0),
        prefilter: BloomPrefilter {
            threshold: settings.threshold,
            threshold_softness: 0.0,
        },
        max_mip_dimension: mip_dimension(settings.resolution),
        ..natural
    }
}

fn mip_dimension(resolution: UVec2) -> u32 {
    resolution.max_element().clamp(64, 512).next_power_of_two()
}

pub fn setup_scene(
    mut commands: Commands,
    settings: Res<SceneSettings>,
    viewport: Res<ViewportSize>,
) {
    let bloom = BloomSettings {
        resolution: viewport.0.as_uvec2(),
        ..settings.bloom
    };
    let aspect_ratio = viewport.aspect_ratio().unwrap_or(1.0);

    commands.spawn((
        Name::new("camera"),
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            aspect_ratio,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Tonemapping::AcesFitted,
        bloom_from(&bloom),
        Transform::from_xyz(0.0, 0.0, CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Hemisphere light: sky color from above, ground color from below.
    commands.spawn((
        Name::new("hemisphere sky"),
        DirectionalLight {
            color: HEMI_SKY_COLOR,
            illuminance: HEMI_ILLUMINANCE,
            ..default()
        },
        Transform::from_xyz(0.0, 1.0, 0.0).looking_at(Vec3::ZERO, Vec3::Z),
    ));
    commands.spawn((
        Name::new("hemisphere ground"),
        DirectionalLight {
            color: HEMI_GROUND_COLOR,
            illuminance: HEMI_ILLUMINANCE,
            ..default()
        },
        Transform::from_xyz(0.0, -1.0, 0.0).looking_at(Vec3::ZERO, Vec3::Z),
    ));

    commands.spawn((
        Name::new("key light"),
        DirectionalLight {
            color: Color::WHITE,
            illuminance: DIR_LIGHT_ILLUMINANCE,
            ..default()
        },
        Transform::from_translation(DIR_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        Name::new("point light"),
        HelpedLight,
        PointLight {
            color: POINT_LIGHT_COLOR,
            intensity: POINT_LIGHT_INTENSITY,
            range: POINT_LIGHT_RANGE,
            ..default()
        },
        Transform::from_translation(POINT_LIGHT_POSITION),
    ));
}

pub fn draw_point_light_helper(
    mut gizmos: Gizmos,
    q_lights: Query<(&GlobalTransform, &PointLight), With<HelpedLight>>,
) {
    for (tf, light) in &q_lights {
        gizmos.sphere(
            Isometry3d::from_translation(tf.translation()),
            POINT_LIGHT_HELPER_RADIUS,
            light.color,
        );
    }
}
