//! Game configuration change detection system.
//!
//! Monitors [`GameConfig`] for changes and applies the window settings that
//! can change at runtime: vsync and the target frame rate.

use crate::resources::gameconfig::GameConfig;
use bevy_ecs::prelude::*;
use log::info;
use raylib::ffi;

/// System that applies game configuration changes.
///
/// Runs the first time [`GameConfig`] is seen and whenever it is modified.
///
/// # Resource Dependencies
/// - `GameConfig` (optional) - the configuration to monitor
/// - `RaylibHandle` (non-send, mutable) - for window operations
pub fn apply_gameconfig_changes(
    maybe_config: Option<Res<GameConfig>>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
) {
    let Some(config) = maybe_config else {
        return;
    };

    if config.is_changed() || config.is_added() {
        unsafe {
            if config.vsync {
                ffi::SetWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
            } else {
                ffi::ClearWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
            }
        }

        rl.set_target_fps(config.target_fps);

        info!(
            "Applied config: vsync={}, target_fps={}",
            config.vsync, config.target_fps
        );
    }
}
