//! Game session resource.
//!
//! One [`Session`] lives in the world for the whole run. It owns the dot
//! entities registered at setup, the [`ConnectionGraph`] of the current round
//! and the round's [`Outcome`]. `reset` re-initializes it in place and bumps
//! the generation counter; per-frame tasks tagged with an older generation are
//! stale and must not touch the new round.

use bevy_ecs::prelude::{Entity, Resource};

use crate::resources::connections::{ConnectResult, ConnectionGraph};

/// Result of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    #[default]
    Playing,
    Won,
    Lost,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct Session {
    points: Vec<Entity>,
    graph: ConnectionGraph,
    outcome: Outcome,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the dot entities; the position in `points` is the dot index.
    pub fn set_points(&mut self, points: Vec<Entity>) {
        self.points = points;
    }

    pub fn points(&self) -> &[Entity] {
        &self.points
    }

    pub fn point(&self, index: usize) -> Option<Entity> {
        self.points.get(index).copied()
    }

    pub fn index_of(&self, entity: Entity) -> Option<usize> {
        self.points.iter().position(|&e| e == entity)
    }

    pub fn graph(&self) -> &ConnectionGraph {
        &self.graph
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Cancellation token of the current round.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Feed a pick result into the graph. A miss leaves the graph untouched.
    pub fn click(&mut self, picked: Option<usize>) -> ConnectResult {
        match picked {
            Some(index) => self.graph.try_connect(index),
            None => ConnectResult::MissedAllPoints,
        }
    }

    /// Every registered dot has been targeted.
    pub fn is_complete(&self) -> bool {
        !self.points.is_empty() && self.graph.is_fully_connected(self.points.len())
    }

    /// Run the single outcome trial of the round.
    ///
    /// `roll` is a uniform sample in `[0, 1)`; the round is won when
    /// `roll <= win_probability`. Returns `None` when the round is not
    /// complete or has already been resolved.
    pub fn resolve(&mut self, roll: f32, win_probability: f32) -> Option<Outcome> {
        if self.outcome != Outcome::Playing || !self.is_complete() {
            return None;
        }
        self.outcome = if roll <= win_probability {
            Outcome::Won
        } else {
            Outcome::Lost
        };
        Some(self.outcome)
    }

    /// Start a new round. Dot entities and their positions are kept.
    pub fn reset(&mut self) {
        self.graph.reset();
        self.outcome = Outcome::Playing;
        self.generation = self.generation.wrapping_add(1);
    }
}
