//! Link tween component.
//!
//! A [`LinkTween`] moves the tip of a [`Link`](super::link::Link) from its
//! start to its end by a fixed `step` of progress per frame. Progress is
//! clamped to 1.0 and the tween stops on the frame it first reaches 1.0.
//! See [`crate::systems::tween`] for the update system.
//!
//! Each tween is stamped with the session generation that spawned it; a reset
//! bumps the generation, which turns any tween still in flight into a stale
//! one that the update system discards instead of advancing.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug)]
pub struct LinkTween {
    /// Interpolation factor between start (0.0) and end (1.0).
    pub progress: f32,
    /// Progress added per frame, in `(0, 1]`.
    pub step: f32,
    /// Whether the tween still has frames to run.
    pub playing: bool,
    /// Session generation this tween belongs to.
    pub generation: u64,
}

impl LinkTween {
    pub fn new(step: f32, generation: u64) -> Self {
        LinkTween {
            progress: 0.0,
            step,
            playing: true,
            generation,
        }
    }

    /// Advance by one frame and return the new progress.
    ///
    /// A finished tween is left untouched.
    pub fn advance(&mut self) -> f32 {
        if !self.playing {
            return self.progress;
        }
        self.progress = (self.progress + self.step).min(1.0);
        if self.progress >= 1.0 {
            self.progress = 1.0;
            self.playing = false;
        }
        self.progress
    }

    pub fn is_finished(&self) -> bool {
        !self.playing
    }
}
