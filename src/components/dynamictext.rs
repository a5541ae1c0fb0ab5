use bevy_ecs::prelude::Component;

/// Which HUD line a text entity shows.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HudSlot {
    /// `"<n> Connections Made"`.
    Progress,
    /// `"Connect the Dots!"`, `"You Won!"` or `"Try Again!"`.
    Overlay,
}

#[derive(Component, Clone, Debug)]
/// Dynamic text component for rendering variable strings on screen.
pub struct DynamicText {
    /// The text content to render.
    pub content: String,
    /// Font size in pixels.
    pub font_size: i32,
    /// Color of the text.
    pub color: raylib::prelude::Color,
}

impl DynamicText {
    /// Creates a new DynamicText component.
    pub fn new(content: impl Into<String>, font_size: i32, color: raylib::prelude::Color) -> Self {
        Self {
            content: content.into(),
            font_size,
            color,
        }
    }
    /// Updates the text content.
    pub fn set_content(&mut self, new_content: impl Into<String>) {
        self.content = new_content.into();
    }
}
