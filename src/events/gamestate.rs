//! Game state transition event and observer.
//!
//! Systems can request a change to the high-level [`GameStates`] by updating
//! [`NextGameState`]. Emitting a [`GameStateChangedEvent`] then triggers the
//! observer in this module, which applies the transition to [`GameState`]
//! and invokes the enter hook stored in
//! [`crate::resources::systemsstore::SystemsStore`].
//!
//! This decouples the intent to change state from the mechanics of running
//! setup/reset systems and avoids borrowing conflicts.
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Well-known [`SystemsStore`] keys of the enter hooks.
pub const SETUP_HOOK: &str = "setup";
pub const ENTER_PLAY_HOOK: &str = "enter_play";
pub const ENTER_OUTCOME_HOOK: &str = "enter_outcome";

/// Event used to indicate that a pending game state transition should be
/// applied.
///
/// Emitting this event causes [`observe_gamestate_change_event`] to read
/// [`NextGameState`]. If it contains [`Pending`], the observer updates the
/// authoritative [`GameState`], runs the enter hook, and clears the pending
/// value; if it is [`Unchanged`], nothing happens.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// Contract
/// - Reads the intention from [`NextGameState`].
/// - If pending, copies the new value into [`GameState`], then:
///   - logs the exit of the previous state
///   - queues the enter hook of the new state
///   - resets [`NextGameState`] to [`Unchanged`]
/// - A transition into the current state is allowed and re-runs its hook;
///   `Playing -> Playing` is how a restart resets the round.
/// - If any required resource is missing, logs a diagnostic and returns.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    systems_store: Option<Res<SystemsStore>>,
) {
    debug!("GameStateChangedEvent triggered");

    if let (Some(next_game_state), Some(game_state), Some(systems_store)) = (
        next_game_state.as_deref_mut(),
        game_state.as_deref_mut(),
        systems_store.as_deref(),
    ) {
        // Clone the next state value first so we don't keep an immutable borrow while mutating.
        let next_state_value = next_game_state.get().clone();
        match next_state_value {
            Pending(new_state) => {
                let old_state = game_state.get().clone();
                info!("Transitioning from {:?} to {:?}", old_state, new_state);
                game_state.set(new_state.clone());
                next_game_state.reset();
                on_state_exit(&old_state);
                on_state_enter(&new_state, &mut commands, systems_store);
            }
            Unchanged => {
                debug!("No state change pending.");
            }
        }
    } else {
        warn!(
            "One or more resources missing in observe_gamestate_change_event. next_state: {:?}, game_state: {:?}",
            next_game_state.is_some(),
            game_state.is_some()
        );
    }
}

/// Internal: run the state-specific "enter" system for the given state.
fn on_state_enter(state: &GameStates, commands: &mut Commands, systems_store: &SystemsStore) {
    let hook = match state {
        GameStates::None => {
            debug!("Entered None state");
            return;
        }
        GameStates::Resolving => {
            debug!("Entered Resolving state");
            return;
        }
        GameStates::Setup => SETUP_HOOK,
        GameStates::Playing => ENTER_PLAY_HOOK,
        GameStates::Won | GameStates::Lost => ENTER_OUTCOME_HOOK,
    };
    match systems_store.get(hook) {
        Some(system_id) => commands.run_system(*system_id),
        None => warn!("Enter hook '{}' for {:?} not found in SystemsStore", hook, state),
    }
}

/// Internal: note leaving a state. No state has teardown work of its own.
fn on_state_exit(state: &GameStates) {
    debug!("Exited {:?} state", state);
}
