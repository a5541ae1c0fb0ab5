//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//! vsync = true
//!
//! [camera]
//! fov = 75.0
//! near = 0.1
//! far = 1000.0
//! distance = 2.0
//!
//! [game]
//! dot_count = 5
//! spread = 0.7
//! dot_radius = 0.05
//! link_step = 0.05
//! win_probability = 0.6
//! win_delay = 2.0
//! loss_delay = 0.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::resources::session::Outcome;

/// Read an unsigned value, rejecting anything that does not fit `T`.
fn read_uint<T: TryFrom<u64>>(config: &Ini, section: &str, key: &str) -> Option<T> {
    let value = config.getuint(section, key).ok().flatten()?;
    match T::try_from(value) {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("[{}] {} = {} is out of range, ignoring it", section, key, value);
            None
        }
    }
}

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_FOV: f32 = 75.0;
const DEFAULT_NEAR: f32 = 0.1;
const DEFAULT_FAR: f32 = 1000.0;
const DEFAULT_CAMERA_DISTANCE: f32 = 2.0;
const DEFAULT_DOT_COUNT: usize = 5;
const DEFAULT_SPREAD: f32 = 0.7;
const DEFAULT_DOT_RADIUS: f32 = 0.05;
const DEFAULT_LINK_STEP: f32 = 0.05;
const DEFAULT_WIN_PROBABILITY: f32 = 0.6;
const DEFAULT_WIN_DELAY: f32 = 2.0;
const DEFAULT_LOSS_DELAY: f32 = 0.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores window settings, the camera projection and the gameplay tunables.
/// Changes to this resource are pushed to the window by
/// [`apply_gameconfig_changes`].
///
/// [`apply_gameconfig_changes`]: crate::systems::gameconfig::apply_gameconfig_changes
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Nearest pick/clip distance.
    pub near: f32,
    /// Farthest pick/clip distance.
    pub far: f32,
    /// Camera distance from the dot plane along +z.
    pub camera_distance: f32,
    /// Number of dots generated at setup.
    pub dot_count: usize,
    /// Dots are placed in `[-spread, spread]` on x and y.
    pub spread: f32,
    /// Sphere radius used for drawing and picking.
    pub dot_radius: f32,
    /// Link tween progress added each frame, in `(0, 1]`.
    pub link_step: f32,
    /// Probability of winning once every dot is connected, in `[0, 1]`.
    pub win_probability: f32,
    /// Seconds between a win and the automatic reset.
    pub win_delay: f32,
    /// Seconds between a loss and the automatic reset.
    pub loss_delay: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            fov: DEFAULT_FOV,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            camera_distance: DEFAULT_CAMERA_DISTANCE,
            dot_count: DEFAULT_DOT_COUNT,
            spread: DEFAULT_SPREAD,
            dot_radius: DEFAULT_DOT_RADIUS,
            link_step: DEFAULT_LINK_STEP,
            win_probability: DEFAULT_WIN_PROBABILITY,
            win_delay: DEFAULT_WIN_DELAY,
            loss_delay: DEFAULT_LOSS_DELAY,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. Out-of-range
    /// values are clamped, see [`GameConfig::sanitize`].
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = read_uint(&config, "window", "width") {
            self.window_width = width;
        }
        if let Some(height) = read_uint(&config, "window", "height") {
            self.window_height = height;
        }
        if let Some(fps) = read_uint(&config, "window", "target_fps") {
            self.target_fps = fps;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [camera] section
        if let Some(fov) = config.getfloat("camera", "fov").ok().flatten() {
            self.fov = fov as f32;
        }
        if let Some(near) = config.getfloat("camera", "near").ok().flatten() {
            self.near = near as f32;
        }
        if let Some(far) = config.getfloat("camera", "far").ok().flatten() {
            self.far = far as f32;
        }
        if let Some(distance) = config.getfloat("camera", "distance").ok().flatten() {
            self.camera_distance = distance as f32;
        }

        // [game] section
        if let Some(count) = read_uint(&config, "game", "dot_count") {
            self.dot_count = count;
        }
        if let Some(spread) = config.getfloat("game", "spread").ok().flatten() {
            self.spread = spread as f32;
        }
        if let Some(radius) = config.getfloat("game", "dot_radius").ok().flatten() {
            self.dot_radius = radius as f32;
        }
        if let Some(step) = config.getfloat("game", "link_step").ok().flatten() {
            self.link_step = step as f32;
        }
        if let Some(p) = config.getfloat("game", "win_probability").ok().flatten() {
            self.win_probability = p as f32;
        }
        if let Some(delay) = config.getfloat("game", "win_delay").ok().flatten() {
            self.win_delay = delay as f32;
        }
        if let Some(delay) = config.getfloat("game", "loss_delay").ok().flatten() {
            self.loss_delay = delay as f32;
        }

        self.sanitize();

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, {} dots, p(win)={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.dot_count,
            self.win_probability
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));

        // [camera] section
        config.set("camera", "fov", Some(self.fov.to_string()));
        config.set("camera", "near", Some(self.near.to_string()));
        config.set("camera", "far", Some(self.far.to_string()));
        config.set("camera", "distance", Some(self.camera_distance.to_string()));

        // [game] section
        config.set("game", "dot_count", Some(self.dot_count.to_string()));
        config.set("game", "spread", Some(self.spread.to_string()));
        config.set("game", "dot_radius", Some(self.dot_radius.to_string()));
        config.set("game", "link_step", Some(self.link_step.to_string()));
        config.set(
            "game",
            "win_probability",
            Some(self.win_probability.to_string()),
        );
        config.set("game", "win_delay", Some(self.win_delay.to_string()));
        config.set("game", "loss_delay", Some(self.loss_delay.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Clamp every value into the range the game can work with.
    ///
    /// Each correction is logged with `warn!`.
    pub fn sanitize(&mut self) {
        let defaults = Self::new();
        for (name, value, default) in [
            ("fov", &mut self.fov, defaults.fov),
            ("near", &mut self.near, defaults.near),
            ("far", &mut self.far, defaults.far),
            ("distance", &mut self.camera_distance, defaults.camera_distance),
            ("spread", &mut self.spread, defaults.spread),
            ("dot_radius", &mut self.dot_radius, defaults.dot_radius),
            ("link_step", &mut self.link_step, defaults.link_step),
            ("win_probability", &mut self.win_probability, defaults.win_probability),
            ("win_delay", &mut self.win_delay, defaults.win_delay),
            ("loss_delay", &mut self.loss_delay, defaults.loss_delay),
        ] {
            if !value.is_finite() {
                warn!("{} {} is not a finite number, using {}", name, value, default);
                *value = default;
            }
        }
        if self.dot_count == 0 {
            warn!("dot_count must be at least 1, using 1");
            self.dot_count = 1;
        }
        if !(self.link_step > 0.0 && self.link_step <= 1.0) {
            let clamped = if self.link_step > 1.0 {
                1.0
            } else {
                DEFAULT_LINK_STEP
            };
            warn!("link_step {} outside (0, 1], using {}", self.link_step, clamped);
            self.link_step = clamped;
        }
        if !(0.0..=1.0).contains(&self.win_probability) {
            let clamped = self.win_probability.clamp(0.0, 1.0);
            warn!(
                "win_probability {} outside [0, 1], using {}",
                self.win_probability, clamped
            );
            self.win_probability = clamped;
        }
        if self.win_delay < 0.0 {
            warn!("win_delay {} is negative, using 0", self.win_delay);
            self.win_delay = 0.0;
        }
        if self.loss_delay < 0.0 {
            warn!("loss_delay {} is negative, using 0", self.loss_delay);
            self.loss_delay = 0.0;
        }
        if self.spread < 0.0 {
            warn!("spread {} is negative, using its magnitude", self.spread);
            self.spread = self.spread.abs();
        }
        if self.dot_radius <= 0.0 {
            warn!("dot_radius {} must be positive, using default", self.dot_radius);
            self.dot_radius = DEFAULT_DOT_RADIUS;
        }
        if !(self.near > 0.0 && self.far > self.near) {
            warn!(
                "camera clip range [{}, {}] is invalid, using defaults",
                self.near, self.far
            );
            self.near = DEFAULT_NEAR;
            self.far = DEFAULT_FAR;
        }
    }

    /// Seconds to wait in `Resolving` after the given outcome.
    pub fn delay_for(&self, outcome: Outcome) -> f32 {
        match outcome {
            Outcome::Won => self.win_delay,
            Outcome::Lost => self.loss_delay,
            Outcome::Playing => 0.0,
        }
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("dotlink_{}_{}.ini", name, std::process::id()))
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = GameConfig::new();
        assert_eq!(config.dot_count, 5);
        assert_eq!(config.spread, 0.7);
        assert_eq!(config.link_step, 0.05);
        assert_eq!(config.win_probability, 0.6);
        assert_eq!(config.win_delay, 2.0);
        assert_eq!(config.loss_delay, 0.0);
        assert_eq!(config.fov, 75.0);
        assert_eq!(config.near, 0.1);
        assert_eq!(config.far, 1000.0);
    }

    #[test]
    fn delay_is_per_outcome() {
        let config = GameConfig::new();
        assert_eq!(config.delay_for(Outcome::Won), 2.0);
        assert_eq!(config.delay_for(Outcome::Lost), 0.0);
        assert_eq!(config.delay_for(Outcome::Playing), 0.0);
    }

    #[test]
    fn missing_file_is_an_error_and_keeps_defaults() {
        let mut config = GameConfig::with_path(temp_config_path("missing_never_written"));
        assert!(config.load_from_file().is_err());
        assert_eq!(config.dot_count, 5);
    }

    #[test]
    fn save_then_load_keeps_values() {
        let path = temp_config_path("save_load");
        let mut written = GameConfig::with_path(&path);
        written.dot_count = 8;
        written.win_delay = 1.5;
        written.vsync = false;
        written.save_to_file().expect("save config");

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().expect("load config");
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.dot_count, 8);
        assert_eq!(loaded.win_delay, 1.5);
        assert!(!loaded.vsync);
        assert_eq!(loaded.win_probability, 0.6);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = temp_config_path("partial");
        std::fs::write(&path, "[game]\ndot_count = 3\n").expect("write config");

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().expect("load config");
        let _ = std::fs::remove_file(&path);

        assert_eq!(config.dot_count, 3);
        assert_eq!(config.window_width, 1280);
        assert_eq!(config.link_step, 0.05);
    }

    #[test]
    fn sanitize_clamps_out_of_range_values() {
        let mut config = GameConfig::new();
        config.dot_count = 0;
        config.link_step = 3.0;
        config.win_probability = 1.7;
        config.win_delay = -1.0;
        config.loss_delay = -0.5;
        config.spread = -0.4;
        config.near = 10.0;
        config.far = 1.0;
        config.sanitize();

        assert_eq!(config.dot_count, 1);
        assert_eq!(config.link_step, 1.0);
        assert_eq!(config.win_probability, 1.0);
        assert_eq!(config.win_delay, 0.0);
        assert_eq!(config.loss_delay, 0.0);
        assert_eq!(config.spread, 0.4);
        assert_eq!(config.near, 0.1);
        assert_eq!(config.far, 1000.0);
    }

    #[test]
    fn sanitize_replaces_zero_step_with_default() {
        let mut config = GameConfig::new();
        config.link_step = 0.0;
        config.sanitize();
        assert_eq!(config.link_step, 0.05);
    }

    #[test]
    fn sanitize_replaces_non_finite_values() {
        let mut config = GameConfig::new();
        config.win_probability = f32::NAN;
        config.win_delay = f32::INFINITY;
        config.spread = f32::NEG_INFINITY;
        config.sanitize();

        assert_eq!(config.win_probability, 0.6);
        assert_eq!(config.win_delay, 2.0);
        assert_eq!(config.spread, 0.7);
    }

    #[test]
    fn oversized_integers_are_ignored() {
        let path = temp_config_path("oversized");
        std::fs::write(
            &path,
            "[window]\nwidth = 4294967296\nheight = 600\n[game]\ndot_count = 4\n",
        )
        .expect("write config");

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().expect("load config");
        let _ = std::fs::remove_file(&path);

        assert_eq!(config.window_width, 1280);
        assert_eq!(config.window_height, 600);
        assert_eq!(config.dot_count, 4);
    }
}
