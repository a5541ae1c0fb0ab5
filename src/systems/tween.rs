//! Link tween system.
//!
//! [`link_tween_system`] advances every [`LinkTween`] by one step per frame
//! and moves the owning [`Link`]'s tip along the segment. Finished tweens are
//! removed from their entity; tweens from an earlier session generation are
//! despawned together with their link.

use crate::components::link::Link;
use crate::components::tween::LinkTween;
use crate::resources::session::Session;
use bevy_ecs::prelude::*;
use log::debug;
use raylib::math::Vector3;

/// Linearly interpolate between two 3D vectors.
pub(crate) fn lerp_v3(a: Vector3, b: Vector3, t: f32) -> Vector3 {
    Vector3 {
        x: a.x + (b.x - a.x) * t,
        y: a.y + (b.y - a.y) * t,
        z: a.z + (b.z - a.z) * t,
    }
}

/// Build a link and apply its first tween step right away, the way a click
/// shows the line starting to grow on the same frame.
///
/// The tween is `None` when that first step already finished it.
pub fn start_link(
    from: Entity,
    to: Entity,
    start: Vector3,
    end: Vector3,
    step: f32,
    generation: u64,
) -> (Link, Option<LinkTween>) {
    let mut link = Link::new(from, to, start, end);
    let mut tween = LinkTween::new(step, generation);
    let progress = tween.advance();
    link.tip = lerp_v3(start, end, progress);
    if tween.is_finished() {
        (link, None)
    } else {
        (link, Some(tween))
    }
}

/// Advance link tweens by one frame.
pub fn link_tween_system(
    mut commands: Commands,
    session: Res<Session>,
    mut query: Query<(Entity, &mut Link, &mut LinkTween)>,
) {
    for (entity, mut link, mut tween) in query.iter_mut() {
        if tween.generation != session.generation() {
            debug!("Despawning stale link {:?}", entity);
            commands.entity(entity).despawn();
            continue;
        }
        let progress = tween.advance();
        link.tip = lerp_v3(link.start, link.end, progress);
        if tween.is_finished() {
            commands.entity(entity).remove::<LinkTween>();
        }
    }
}
