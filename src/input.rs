use bevy::prelude::*;
use bevy::window::{CursorMoved, PrimaryWindow, WindowResized};
use tracing::debug;

use crate::config::{CURSOR_EXTENT, DEFAULT_VIEWPORT};

/// Last reported cursor position, normalized to roughly
/// [-CURSOR_EXTENT, CURSOR_EXTENT] on both axes with +Y up.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct CursorPosition(pub Vec2);

/// Logical size of the canvas the scene renders into.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize(pub Vec2);

impl Default for ViewportSize {
    fn default() -> Self {
        Self(DEFAULT_VIEWPORT)
    }
}

impl ViewportSize {
    pub fn aspect_ratio(&self) -> Option<f32> {
        aspect_ratio(self.0.x, self.0.y)
    }
}

/// `w / h`, or `None` for a degenerate viewport.
pub fn aspect_ratio(width: f32, height: f32) -> Option<f32> {
    (width > 0.0 && height > 0.0).then(|| width / height)
}

/// Pixel coordinates (origin top-left, +Y down) -> normalized cursor.
///
/// The range is deliberately wider than NDC: the viewport maps onto
/// [-1.2, 1.2]. Positions outside the viewport are not clamped.
pub fn normalize_cursor(pixel: Vec2, viewport: Vec2) -> Option<Vec2> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }
    let span = 2.0 * CURSOR_EXTENT;
    Some(Vec2::new(
        (pixel.x / viewport.x) * span - CURSOR_EXTENT,
        -(pixel.y / viewport.y) * span + CURSOR_EXTENT,
    ))
}

/// Seed `ViewportSize` from the primary window, if there is one.
pub fn init_viewport(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<ViewportSize>,
) {
    if let Ok(window) = windows.single() {
        viewport.0 = window.size();
        debug!("viewport initialised to {}x{}", viewport.0.x, viewport.0.y);
    }
}

/// Keep camera aspect + viewport size in step with the window.
pub fn handle_window_resize(
    mut resized: MessageReader<WindowResized>,
    mut viewport: ResMut<ViewportSize>,
    mut cameras: Query<&mut Projection, With<Camera3d>>,
) {
    // Only the latest size matters.
    let Some(last) = resized.read().last() else {
        return;
    };
    let Some(aspect) = aspect_ratio(last.width, last.height) else {
        return;
    };

    viewport.0 = Vec2::new(last.width, last.height);
    for mut projection in &mut cameras {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = aspect;
        }
    }
}

/// Convert raw cursor movement into the normalized `CursorPosition`.
pub fn handle_cursor_moved(
    mut moved: MessageReader<CursorMoved>,
    viewport: Res<ViewportSize>,
    mut cursor: ResMut<CursorPosition>,
) {
    for ev in moved.read() {
        if let Some(pos) = normalize_cursor(ev.position, viewport.0) {
            cursor.0 = pos;
        }
    }
}
