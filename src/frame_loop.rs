use bevy::prelude::*;
use tracing::info;

/// Lifecycle of the per-frame loop. `Stopped` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Idle,
    Running,
    Stopped,
}

/// Drives the step -> drive -> sync ordering each render frame and owns the
/// stop hook.
#[derive(Resource, Default, Debug)]
pub struct FrameLoop {
    state: LoopState,
    ticks: u64,
}

impl FrameLoop {
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Frames run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_stopped(&self) -> bool {
        self.state == LoopState::Stopped
    }

    /// Start a new frame. The first call moves `Idle -> Running`.
    /// Returns `false` once the loop has been stopped.
    pub fn tick(&mut self) -> bool {
        match self.state {
            LoopState::Stopped => false,
            LoopState::Idle => {
                self.state = LoopState::Running;
                self.ticks = 1;
                true
            }
            LoopState::Running => {
                self.ticks += 1;
                true
            }
        }
    }

    pub fn stop(&mut self) {
        if self.state != LoopState::Stopped {
            info!(ticks = self.ticks, "frame loop stopped");
        }
        self.state = LoopState::Stopped;
    }
}

/// Per-frame stages, chained in this order inside `Update`. Rendering
/// happens after `Update`, so it always sees the synced transforms.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameStep {
    Schedule,
    Advance,
    Drive,
    Sync,
}

/// Run condition: false once the loop is stopped.
pub fn frame_loop_live(frame: Res<FrameLoop>) -> bool {
    !frame.is_stopped()
}

pub fn schedule_tick(mut frame: ResMut<FrameLoop>) {
    frame.tick();
}

/// Native-only quit: press Esc or Q to stop the loop and exit the app.
/// (No-op on wasm32 and when there is no keyboard input.)
pub fn exit_on_esc_or_q_if_native(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut frame: ResMut<FrameLoop>,
    mut exit: MessageWriter<AppExit>,
) {
    if cfg!(target_arch = "wasm32") {
        return;
    }
    let Some(keys) = keys else {
        return;
    };
    if keys.any_just_pressed([KeyCode::Escape, KeyCode::KeyQ]) {
        frame.stop();
        exit.write(AppExit::Success);
    }
}
