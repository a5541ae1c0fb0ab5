use bevy_ecs::prelude::Component;

/// A clickable dot. `index` is its position in the session's point list.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dot {
    pub index: usize,
    /// Set once the dot has been targeted in the current round.
    pub connected: bool,
}

impl Dot {
    pub fn new(index: usize) -> Self {
        Dot {
            index,
            connected: false,
        }
    }
}
