//! Link component: the drawn line for one connection.
//!
//! The line runs from `start` to `tip`; `tip` is moved towards `end` by the
//! [`LinkTween`](super::tween::LinkTween) on the same entity and stays at
//! `end` once the tween is finished.

use bevy_ecs::prelude::{Component, Entity};
use raylib::prelude::Vector3;

#[derive(Component, Clone, Copy, Debug)]
pub struct Link {
    /// Source dot entity.
    pub from: Entity,
    /// Target dot entity.
    pub to: Entity,
    pub start: Vector3,
    pub end: Vector3,
    /// Current second endpoint of the drawn line.
    pub tip: Vector3,
}

impl Link {
    /// A fresh link whose tip still sits on its start.
    pub fn new(from: Entity, to: Entity, start: Vector3, end: Vector3) -> Self {
        Link {
            from,
            to,
            start,
            end,
            tip: start,
        }
    }
}
