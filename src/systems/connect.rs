//! Click handling: turn a picked dot into graph updates, link entities and,
//! once every dot is connected, the single outcome trial of the round.

use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::dot::Dot;
use crate::components::dynamictext::{DynamicText, HudSlot};
use crate::components::worldposition::WorldPosition;
use crate::events::pointer::PointerClickEvent;
use crate::resources::connections::{ConnectResult, Connection};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::rng::GameRng;
use crate::resources::session::{Outcome, Session};
use crate::systems::hud::{progress_text, write_hud};
use crate::systems::tween::start_link;

/// Observer for [`PointerClickEvent`].
///
/// Clicks are only honoured while `Playing`. The graph is mutated before the
/// link is spawned, and the outcome check reads the graph after the mutation.
#[allow(clippy::too_many_arguments)]
pub fn pointer_click_observer(
    trigger: On<PointerClickEvent>,
    mut commands: Commands,
    state: Res<GameState>,
    mut next_state: ResMut<NextGameState>,
    mut session: ResMut<Session>,
    config: Res<GameConfig>,
    mut rng: ResMut<GameRng>,
    mut dots: Query<(&mut Dot, &WorldPosition)>,
    mut texts: Query<(&HudSlot, &mut DynamicText)>,
) {
    if !matches!(state.get(), GameStates::Playing) {
        debug!("Click ignored in state {:?}", state.get());
        return;
    }

    let event = trigger.event();
    let picked = event.dot.and_then(|entity| session.index_of(entity));
    let result = session.click(picked);
    debug!("Click on {:?}: {:?}", picked, result);

    let Some(index) = picked else {
        return;
    };

    if let Some(entity) = session.point(index)
        && let Ok((mut dot, _)) = dots.get_mut(entity)
        && !dot.connected
        && session.graph().is_targeted(index)
    {
        dot.connected = true;
    }

    if let ConnectResult::Connected(connection) = result {
        spawn_link(&mut commands, &session, &config, &dots, connection);
        write_hud(
            &mut texts,
            HudSlot::Progress,
            progress_text(session.graph().connection_count()),
        );
    }

    if !session.is_complete() {
        return;
    }
    let roll = rng.roll();
    match session.resolve(roll, config.win_probability) {
        Some(Outcome::Won) => {
            info!("All dots connected, roll {:.3}: won", roll);
            next_state.set(GameStates::Won);
        }
        Some(Outcome::Lost) => {
            info!("All dots connected, roll {:.3}: lost", roll);
            next_state.set(GameStates::Lost);
        }
        Some(Outcome::Playing) | None => {}
    }
}

fn spawn_link(
    commands: &mut Commands,
    session: &Session,
    config: &GameConfig,
    dots: &Query<(&mut Dot, &WorldPosition)>,
    connection: Connection,
) {
    let (Some(from), Some(to)) = (session.point(connection.from), session.point(connection.to))
    else {
        warn!("Connection {:?} refers to an unknown dot", connection);
        return;
    };
    let (Ok((_, start)), Ok((_, end))) = (dots.get(from), dots.get(to)) else {
        warn!("Dots of connection {:?} have no position", connection);
        return;
    };
    let (link, tween) = start_link(
        from,
        to,
        start.pos,
        end.pos,
        config.link_step,
        session.generation(),
    );
    match tween {
        Some(tween) => commands.spawn((link, tween)),
        None => commands.spawn(link),
    };
}
