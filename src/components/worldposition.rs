//! World-space position component.
//!
//! Dots sit on the z = 0 plane; the camera looks at them from +z.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

#[derive(Component, Clone, Copy, Debug)]
pub struct WorldPosition {
    pub pos: Vector3,
}

impl WorldPosition {
    pub fn from_vec(pos: Vector3) -> Self {
        Self { pos }
    }
}
