//! Dot glow component.
//!
//! The [`Glow`] component drives how a dot is drawn: `color` is the emissive
//! colour (blue while playing, green after a win) and `intensity` is raised
//! while the cursor hovers the dot. The renderer turns both into a single
//! draw colour via [`Glow::shaded`].

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// Emissive colour of a dot during play (0x4444ff).
pub const DEFAULT_GLOW_COLOR: Color = Color {
    r: 0x44,
    g: 0x44,
    b: 0xff,
    a: 0xff,
};
/// Emissive colour of every dot after a win (0x00ff00).
pub const WIN_GLOW_COLOR: Color = Color {
    r: 0x00,
    g: 0xff,
    b: 0x00,
    a: 0xff,
};
/// Intensity of a dot that is not under the cursor.
pub const BASE_INTENSITY: f32 = 0.8;
/// Intensity of the dot under the cursor.
pub const HIGHLIGHT_INTENSITY: f32 = 1.5;

#[derive(Component, Clone, Copy, Debug)]
pub struct Glow {
    pub color: Color,
    pub intensity: f32,
}

impl Default for Glow {
    fn default() -> Self {
        Self {
            color: DEFAULT_GLOW_COLOR,
            intensity: BASE_INTENSITY,
        }
    }
}

impl Glow {
    pub fn is_highlighted(&self) -> bool {
        self.intensity >= HIGHLIGHT_INTENSITY
    }

    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.intensity = if highlighted {
            HIGHLIGHT_INTENSITY
        } else {
            BASE_INTENSITY
        };
    }

    /// Draw colour: `color` scaled by `intensity`, full brightness at
    /// [`HIGHLIGHT_INTENSITY`]. Alpha is kept.
    pub fn shaded(&self) -> Color {
        let factor = (self.intensity / HIGHLIGHT_INTENSITY).clamp(0.0, 1.0);
        let scale = |c: u8| (c as f32 * factor).round() as u8;
        Color::new(
            scale(self.color.r),
            scale(self.color.g),
            scale(self.color.b),
            self.color.a,
        )
    }
}
