//! Per-frame pointer state.
//!
//! Filled by [`update_pointer_state`](crate::systems::pointer::update_pointer_state)
//! from raylib and read by the hover highlight system. Nothing here survives
//! past the frame that produced it.

use bevy_ecs::prelude::{Entity, Resource};
use raylib::prelude::Vector2;

#[derive(Resource, Debug, Clone, Copy)]
pub struct PointerState {
    /// Cursor position in window pixels.
    pub screen: Vector2,
    /// Cursor position in normalized device coordinates.
    pub ndc: Vector2,
    /// Nearest dot under the cursor this frame.
    pub hovered: Option<Entity>,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            screen: Vector2 { x: 0.0, y: 0.0 },
            ndc: Vector2 { x: 0.0, y: 0.0 },
            hovered: None,
        }
    }
}
