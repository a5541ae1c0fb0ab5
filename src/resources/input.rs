//! Per-frame keyboard input resource.
//!
//! Captures the keys the game reacts to and exposes them to systems via the
//! [`InputState`] resource. Mouse input is handled separately, see
//! [`crate::resources::pointer`].
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

/// Resource capturing the per-frame keyboard state relevant to the game.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    /// Start a new round immediately.
    pub restart: BoolState,
    /// Toggle the debug overlay.
    pub mode_debug: BoolState,
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

impl BoolState {
    fn bound(key_binding: KeyboardKey) -> Self {
        Self {
            key_binding,
            ..Self::default()
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            restart: BoolState::bound(KeyboardKey::KEY_R),
            mode_debug: BoolState::bound(KeyboardKey::KEY_F11),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert!(!bs.just_released);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.restart.key_binding, KeyboardKey::KEY_R);
        assert_eq!(input.mode_debug.key_binding, KeyboardKey::KEY_F11);
        assert!(!input.restart.just_pressed);
        assert!(!input.mode_debug.active);
    }
}
