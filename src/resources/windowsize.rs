//! Window size resource.
//!
//! Tracks the actual window dimensions in pixels. Updated each frame from the
//! main loop so resizes reach the camera aspect and the pointer mapping.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Current window size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl WindowSize {
    /// Width over height. A zero height (minimized window) yields 1.0.
    pub fn aspect(&self) -> f32 {
        if self.h <= 0 {
            return 1.0;
        }
        self.w as f32 / self.h as f32
    }

    /// Map a window-space position to normalized device coordinates.
    ///
    /// See [`screen_to_ndc`].
    pub fn to_ndc(&self, window_pos: Vector2) -> Vector2 {
        screen_to_ndc(window_pos.x, window_pos.y, self.w as f32, self.h as f32)
    }
}

/// Convert screen coordinates to normalized device coordinates.
///
/// `x' = (x / w) * 2 - 1`, `y' = -(y / h) * 2 + 1`. The top-left corner maps
/// to (-1, 1) and the bottom-right corner to (1, -1).
pub fn screen_to_ndc(x: f32, y: f32, w: f32, h: f32) -> Vector2 {
    if w <= 0.0 || h <= 0.0 {
        return Vector2 { x: 0.0, y: 0.0 };
    }
    Vector2 {
        x: (x / w) * 2.0 - 1.0,
        y: -(y / h) * 2.0 + 1.0,
    }
}
