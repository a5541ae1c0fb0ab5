use crate::events::gamestate::GameStateChangedEvent;
use crate::events::timer::TimerEvent;
use crate::resources::gamestate::{GameState, GameStates, NextGameState, NextGameStates};
use crate::resources::input::InputState;
use crate::resources::session::Session;
use bevy_ecs::prelude::*;
use log::{debug, info};

pub fn check_pending_state(mut commands: Commands, next_state: Res<NextGameState>) {
    // Check if there is a pending state change
    if let NextGameStates::Pending(_new_state) = next_state.get() {
        // If there is, trigger the GameStateChangedEvent
        commands.trigger(GameStateChangedEvent {});
    }
}

/// End the outcome delay: a timer from the current round brings the game
/// back to `Playing`. Timers from an earlier round are ignored.
pub fn outcome_timer_observer(
    trigger: On<TimerEvent>,
    session: Res<Session>,
    state: Res<GameState>,
    mut next_state: ResMut<NextGameState>,
) {
    let event = trigger.event();
    if event.generation != session.generation() {
        debug!(
            "Ignoring stale timer from generation {} (current {})",
            event.generation,
            session.generation()
        );
        return;
    }
    if !matches!(
        state.get(),
        GameStates::Won | GameStates::Lost | GameStates::Resolving
    ) {
        debug!("Ignoring outcome timer in state {:?}", state.get());
        return;
    }
    next_state.set(GameStates::Playing);
}

/// Restart the round on request. Any pending outcome timer is cancelled by
/// the reset that follows.
pub fn restart_on_input(
    input: Res<InputState>,
    state: Res<GameState>,
    mut next_state: ResMut<NextGameState>,
) {
    if !input.restart.just_pressed {
        return;
    }
    if matches!(state.get(), GameStates::None | GameStates::Setup) {
        return;
    }
    info!("Restart requested from {:?}", state.get());
    next_state.set(GameStates::Playing);
}
