//! Screen-space position component.
//!
//! The [`ScreenPosition`] component stores an entity's position in screen
//! (pixel) coordinates. Use this for HUD elements that do not live in the 3D
//! scene. A centered position measures `pos.x` from the middle of the window
//! and centers the text on it, so it follows window resizes.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug)]
pub struct ScreenPosition {
    /// 2D coordinates in screen pixels.
    pub pos: Vector2,
    /// Anchor horizontally on the window center instead of the left edge.
    pub centered: bool,
}

impl Default for ScreenPosition {
    fn default() -> Self {
        Self {
            pos: Vector2 { x: 0.0, y: 0.0 },
            centered: false,
        }
    }
}

impl ScreenPosition {
    /// Create a left-anchored ScreenPosition from x and y.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
            centered: false,
        }
    }

    /// Create a ScreenPosition anchored on the window's horizontal center.
    pub fn centered(offset_x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x: offset_x, y },
            centered: true,
        }
    }

    /// Left edge of a text of `text_width` pixels in a window `window_width` wide.
    pub fn text_left(&self, window_width: i32, text_width: i32) -> i32 {
        if self.centered {
            window_width / 2 + self.pos.x as i32 - text_width / 2
        } else {
            self.pos.x as i32
        }
    }
}
