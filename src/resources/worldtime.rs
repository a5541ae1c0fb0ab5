//! Frame clock resource.
//!
//! Written once per frame by
//! [`update_world_time`](crate::systems::time::update_world_time) before the
//! schedule runs. `delta` drives second-based timers; `elapsed` and
//! `frame_count` are shown by the debug overlay.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            frame_count: 0,
        }
    }
}
