//! HUD text helpers.
//!
//! The two HUD lines are ordinary entities with [`DynamicText`] and
//! [`HudSlot`]; these helpers spawn them and rewrite their content.

use bevy_ecs::prelude::*;
use raylib::prelude::Color;

use crate::components::dynamictext::{DynamicText, HudSlot};
use crate::components::screenposition::ScreenPosition;

pub const OVERLAY_START: &str = "Connect the Dots!";
pub const OVERLAY_WON: &str = "You Won!";
pub const OVERLAY_LOST: &str = "Try Again!";

const PROGRESS_FONT_SIZE: i32 = 20;
const OVERLAY_FONT_SIZE: i32 = 40;

pub fn progress_text(connections: usize) -> String {
    format!("{} Connections Made", connections)
}

/// Spawn the progress and overlay text entities.
pub fn spawn_hud(commands: &mut Commands) {
    commands.spawn((
        HudSlot::Progress,
        ScreenPosition::new(10.0, 10.0),
        DynamicText::new(progress_text(0), PROGRESS_FONT_SIZE, Color::WHITE),
    ));
    commands.spawn((
        HudSlot::Overlay,
        ScreenPosition::centered(0.0, 40.0),
        DynamicText::new(OVERLAY_START, OVERLAY_FONT_SIZE, Color::WHITE),
    ));
}

/// Replace the content of every text in `slot`.
pub fn write_hud(
    texts: &mut Query<(&HudSlot, &mut DynamicText)>,
    slot: HudSlot,
    content: impl Into<String>,
) {
    let content = content.into();
    for (text_slot, mut text) in texts.iter_mut() {
        if *text_slot == slot && text.content != content {
            text.set_content(content.clone());
        }
    }
}
