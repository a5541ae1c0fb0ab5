//! One-shot outcome timer.
//!
//! Spawned on its own entity when a round is resolved with a positive delay.
//! [`update_timers`](crate::systems::time::update_timers) counts it down and
//! triggers a [`TimerEvent`](crate::events::timer::TimerEvent) once, then
//! despawns it. `generation` ties the timer to the round that scheduled it.
use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug)]
pub struct Timer {
    pub duration: f32,
    pub elapsed: f32,
    pub generation: u64,
}

impl Timer {
    pub fn new(duration: f32, generation: u64) -> Self {
        Timer {
            duration,
            elapsed: 0.0,
            generation,
        }
    }

    /// Add `dt` seconds and report whether the timer has run out.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_until_duration() {
        let mut t = Timer::new(2.0, 0);
        assert!(!t.tick(1.0));
        assert!(!t.tick(0.5));
        assert!(t.tick(0.5));
        assert_eq!(t.generation, 0);
    }
}
