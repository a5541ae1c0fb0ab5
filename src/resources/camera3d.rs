//! Shared 3D camera resource.
//!
//! Wraps raylib's [`Camera3D`] together with the clip range raylib does not
//! store on the camera itself. The renderer pushes `near`/`far` into rlgl
//! before entering 3D mode and picks outside the range are ignored. raylib
//! derives the aspect ratio from the framebuffer every time 3D mode begins,
//! so a resized window is picked up without any state here.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera3D, Vector3};

use crate::resources::gameconfig::GameConfig;

#[derive(Resource, Debug, Clone, Copy)]
pub struct ViewCamera {
    pub camera: Camera3D,
    pub near: f32,
    pub far: f32,
}

impl ViewCamera {
    /// Perspective camera on the +z axis looking at the origin.
    pub fn from_config(config: &GameConfig) -> Self {
        let camera = Camera3D::perspective(
            Vector3::new(0.0, 0.0, config.camera_distance),
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            config.fov,
        );
        ViewCamera {
            camera,
            near: config.near,
            far: config.far,
        }
    }

    /// A hit at `distance` along a pick ray is inside the clip range.
    pub fn in_range(&self, distance: f32) -> bool {
        distance >= self.near && distance <= self.far
    }
}
