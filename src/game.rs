//! State enter hooks.
//!
//! These systems are registered in the
//! [`SystemsStore`](crate::resources::systemsstore::SystemsStore) and run by
//! the game state observer when a state is entered:
//!
//! - [`setup`] builds the scene once: camera, dots and HUD.
//! - [`enter_play`] starts a fresh round on the existing dots.
//! - [`enter_outcome`] presents a win or a loss and schedules the next round.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::dot::Dot;
use crate::components::dynamictext::{DynamicText, HudSlot};
use crate::components::glow::{Glow, WIN_GLOW_COLOR};
use crate::components::link::Link;
use crate::components::timer::Timer;
use crate::components::worldposition::WorldPosition;
use crate::pointset::generate_points;
use crate::resources::camera3d::ViewCamera;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::rng::GameRng;
use crate::resources::session::{Outcome, Session};
use crate::systems::hud::{OVERLAY_LOST, OVERLAY_START, OVERLAY_WON, progress_text, spawn_hud, write_hud};

pub fn setup(
    mut commands: Commands,
    mut next_state: ResMut<NextGameState>,
    config: Res<GameConfig>,
    mut rng: ResMut<GameRng>,
    mut session: ResMut<Session>,
) {
    commands.insert_resource(ViewCamera::from_config(&config));

    let points = generate_points(config.dot_count, config.spread, &mut rng.0);
    let entities = points
        .into_iter()
        .enumerate()
        .map(|(index, pos)| {
            commands
                .spawn((Dot::new(index), WorldPosition::from_vec(pos), Glow::default()))
                .id()
        })
        .collect::<Vec<_>>();
    info!("Spawned {} dots", entities.len());
    session.set_points(entities);

    spawn_hud(&mut commands);

    next_state.set(GameStates::Playing);
}

/// Reset the round: a new session generation, no links, no pending timers,
/// every dot unconnected and back to its default glow.
pub fn enter_play(
    mut commands: Commands,
    mut session: ResMut<Session>,
    links: Query<Entity, With<Link>>,
    timers: Query<Entity, With<Timer>>,
    mut dots: Query<(&mut Dot, &mut Glow)>,
    mut texts: Query<(&HudSlot, &mut DynamicText)>,
) {
    session.reset();
    info!("New round, generation {}", session.generation());

    for entity in links.iter().chain(timers.iter()) {
        commands.entity(entity).despawn();
    }
    for (mut dot, mut glow) in dots.iter_mut() {
        dot.connected = false;
        *glow = Glow::default();
    }

    write_hud(&mut texts, HudSlot::Progress, progress_text(0));
    write_hud(&mut texts, HudSlot::Overlay, OVERLAY_START);
}

/// Show the round's outcome, then either wait out its delay in `Resolving`
/// or go straight back to `Playing`.
pub fn enter_outcome(
    mut commands: Commands,
    mut next_state: ResMut<NextGameState>,
    session: Res<Session>,
    config: Res<GameConfig>,
    mut glows: Query<&mut Glow, With<Dot>>,
    mut texts: Query<(&HudSlot, &mut DynamicText)>,
) {
    let outcome = session.outcome();
    match outcome {
        Outcome::Won => {
            write_hud(&mut texts, HudSlot::Overlay, OVERLAY_WON);
            for mut glow in glows.iter_mut() {
                glow.color = WIN_GLOW_COLOR;
            }
        }
        Outcome::Lost => write_hud(&mut texts, HudSlot::Overlay, OVERLAY_LOST),
        Outcome::Playing => {}
    }

    let delay = config.delay_for(outcome);
    if delay > 0.0 {
        info!("{:?}: next round in {:.1}s", outcome, delay);
        commands.spawn(Timer::new(delay, session.generation()));
        next_state.set(GameStates::Resolving);
    } else {
        next_state.set(GameStates::Playing);
    }
}
