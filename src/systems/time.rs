//! Time update and timer systems.
//!
//! [`update_world_time`] advances the shared [`WorldTime`] once per frame;
//! [`update_timers`] counts down one-shot [`Timer`] components.
use bevy_ecs::prelude::*;

use crate::components::timer::Timer;
use crate::events::timer::TimerEvent;
use crate::resources::worldtime::WorldTime;

/// Update elapsed, delta and frame count on the `WorldTime` resource.
///
/// `dt` is the frame delta in seconds as reported by raylib.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    wt.elapsed += dt;
    wt.delta = dt;
    wt.frame_count += 1;
}

/// Count down every [`Timer`]; on expiry trigger a [`TimerEvent`] and despawn
/// the timer entity so it fires exactly once.
pub fn update_timers(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Timer)>,
    mut commands: Commands,
) {
    for (entity, mut timer) in query.iter_mut() {
        if timer.tick(world_time.delta) {
            commands.trigger(TimerEvent {
                entity,
                generation: timer.generation,
            });
            commands.entity(entity).despawn();
        }
    }
}
