//! Spheres floating in zero gravity, pulled towards the origin and shoved
//! around by a cursor-driven ball, rendered with bloom.
//!
//! Bevy renders, Rapier simulates; this crate only wires the two together.

use bevy::prelude::*;
use bevy::window::{CursorMoved, WindowResized};

pub mod capability;
pub mod config;
pub mod frame_loop;
pub mod input;
pub mod physics;
pub mod scene;

use config::SceneSettings;
use frame_loop::{FrameLoop, FrameStep, exit_on_esc_or_q_if_native, frame_loop_live, schedule_tick};
use input::{CursorPosition, ViewportSize, handle_cursor_moved, handle_window_resize, init_viewport};
use physics::PhysicsPlugin;
use scene::{ScenePlugin, setup_scene};

/// Everything except the windowing/rendering plugins and the light helper.
pub struct BloomBodiesPlugin;

impl Plugin for BloomBodiesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneSettings>()
            .init_resource::<FrameLoop>()
            .init_resource::<CursorPosition>()
            .init_resource::<ViewportSize>()
            .add_message::<CursorMoved>()
            .add_message::<WindowResized>()
            // schedule -> step -> drive -> sync, all skipped once stopped
            .configure_sets(
                Update,
                (
                    FrameStep::Schedule,
                    FrameStep::Advance,
                    FrameStep::Drive,
                    FrameStep::Sync,
                )
                    .chain()
                    .distributive_run_if(frame_loop_live),
            )
            .add_plugins((PhysicsPlugin, ScenePlugin))
            .add_systems(Startup, init_viewport.before(setup_scene))
            // Window events land before the frame reads them; resize first so
            // the cursor is normalized against the new viewport
            .add_systems(
                Update,
                (handle_window_resize, handle_cursor_moved)
                    .chain()
                    .before(FrameStep::Schedule),
            )
            .add_systems(Update, schedule_tick.in_set(FrameStep::Schedule))
            // a stop never lands mid-frame
            .add_systems(Update, exit_on_esc_or_q_if_native.before(FrameStep::Schedule));
    }
}
