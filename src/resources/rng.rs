//! Random source for dot placement and the outcome trial.
//!
//! Wrapping [`fastrand::Rng`] in a resource keeps every draw in one place so a
//! `--seed` from the command line makes a whole run reproducible.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone)]
pub struct GameRng(pub fastrand::Rng);

impl GameRng {
    /// Seeded from system entropy.
    pub fn new() -> Self {
        GameRng(fastrand::Rng::new())
    }

    pub fn with_seed(seed: u64) -> Self {
        GameRng(fastrand::Rng::with_seed(seed))
    }

    /// Uniform sample in `[0, 1)`.
    pub fn roll(&mut self) -> f32 {
        self.0.f32()
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new()
    }
}
