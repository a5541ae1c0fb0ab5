//! Pointer click event.
//!
//! Triggered by [`update_pointer_state`](crate::systems::pointer::update_pointer_state)
//! on the frame the left mouse button is pressed, carrying the nearest dot
//! under the cursor (if any). [`pointer_click_observer`](crate::systems::connect::pointer_click_observer)
//! feeds it into the session.

use bevy_ecs::prelude::*;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerClickEvent {
    /// The picked dot entity, `None` when the click hit empty space.
    pub dot: Option<Entity>,
}
