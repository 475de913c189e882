use bevy::prelude::*;

/// Physics timing
pub const PHYSICS_HZ: f64 = 60.0;

/// Zero gravity; bodies are held together by the centering force instead.
pub const GRAVITY: Vec3 = Vec3::ZERO;

/// Bodies
pub const NUM_BODIES: usize = 210;
pub const BODY_MIN_RADIUS: f32 = 0.1;
pub const BODY_RADIUS_JITTER: f32 = 0.25;
pub const BODY_DENSITY_SCALE: f32 = 1.0;
/// Side of the cube (centered on the origin) bodies spawn inside.
pub const SPAWN_RANGE: f32 = 6.0;
/// Force magnitude pulling every body towards `SCENE_CENTER` each frame.
pub const CENTER_PULL: f32 = 0.5;
pub const SCENE_CENTER: Vec3 = Vec3::ZERO;
pub const BODY_ICO_SUBDIVISIONS: u32 = 1;

/// Mouse ball
pub const MOUSE_BALL_RADIUS: f32 = 0.25;
/// The collider is bigger than the visible ball so bodies keep some distance.
pub const MOUSE_COLLIDER_SCALE: f32 = 3.0;
/// Normalized cursor units -> world units on the x/y plane.
pub const MOUSE_BALL_SPREAD: f32 = 4.0;
pub const MOUSE_BALL_DEPTH: f32 = 0.2;
pub const MOUSE_LIGHT_INTENSITY: f32 = 1_000_000.0;

/// Cursor normalization: pixels map onto [-CURSOR_EXTENT, CURSOR_EXTENT].
pub const CURSOR_EXTENT: f32 = 1.2;

/// Camera
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_DISTANCE: f32 = 5.0;

/// Viewport used until the primary window reports its size.
pub const DEFAULT_VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

/// Bloom: strength, radius, brightness threshold
pub const BLOOM_STRENGTH: f32 = 2.0;
pub const BLOOM_RADIUS: f32 = 1.0;
pub const BLOOM_THRESHOLD: f32 = 0.005;

/// Lights
pub const HEMI_SKY_COLOR: Color = Color::srgb(0.0, 0.733, 1.0); // 0x00bbff
pub const HEMI_GROUND_COLOR: Color = Color::srgb(0.667, 0.0, 1.0); // 0xaa00ff
pub const HEMI_ILLUMINANCE: f32 = 350.0;
pub const DIR_LIGHT_ILLUMINANCE: f32 = 3_500.0;
pub const DIR_LIGHT_POSITION: Vec3 = Vec3::new(5.0, 10.0, 7.5);
pub const POINT_LIGHT_COLOR: Color = Color::srgb(1.0, 0.667, 0.0); // 0xffaa00
pub const POINT_LIGHT_INTENSITY: f32 = 350_000.0;
pub const POINT_LIGHT_RANGE: f32 = 50.0;
pub const POINT_LIGHT_POSITION: Vec3 = Vec3::new(0.0, 5.0, 0.0);
pub const POINT_LIGHT_HELPER_RADIUS: f32 = 0.35;

/// Bloom parameters in the shape of a classic bloom pass:
/// output resolution, strength, radius and brightness threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BloomSettings {
    pub resolution: UVec2,
    pub strength: f32,
    pub radius: f32,
    pub threshold: f32,
}

impl Default for BloomSettings {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_VIEWPORT.as_uvec2(),
            strength: BLOOM_STRENGTH,
            radius: BLOOM_RADIUS,
            threshold: BLOOM_THRESHOLD,
        }
    }
}

/// Startup knobs. Defaults come from the constants above; tests and benches
/// insert their own before the app's first update.
#[derive(Resource, Clone, Debug)]
pub struct SceneSettings {
    pub num_bodies: usize,
    /// Fixed seed for body placement; `None` picks a fresh one each run.
    pub seed: Option<u64>,
    pub bloom: BloomSettings,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            num_bodies: NUM_BODIES,
            seed: None,
            bloom: BloomSettings::default(),
        }
    }
}
