use bevy_ecs::prelude::*;

use crate::components::dot::Dot;
use crate::components::glow::Glow;
use crate::resources::pointer::PointerState;

/// Highlight exactly the dot under the cursor; every other dot goes back to
/// base intensity. Runs every frame regardless of game state.
pub fn hover_highlight_system(
    pointer: Res<PointerState>,
    mut dots: Query<(Entity, &mut Glow), With<Dot>>,
) {
    for (entity, mut glow) in dots.iter_mut() {
        let highlighted = pointer.hovered == Some(entity);
        if glow.is_highlighted() != highlighted {
            glow.set_highlighted(highlighted);
        }
    }
}
