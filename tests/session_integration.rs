//! Gameplay integration tests: state hooks, click handling, link tweens and
//! outcome timers running in a bevy_ecs `World` without a window.

use bevy_ecs::prelude::*;

use dotlink::components::dot::Dot;
use dotlink::components::dynamictext::{DynamicText, HudSlot};
use dotlink::components::glow::{BASE_INTENSITY, DEFAULT_GLOW_COLOR, Glow, HIGHLIGHT_INTENSITY, WIN_GLOW_COLOR};
use dotlink::components::link::Link;
use dotlink::components::timer::Timer;
use dotlink::components::tween::LinkTween;
use dotlink::components::worldposition::WorldPosition;
use dotlink::events::gamestate::{
    ENTER_OUTCOME_HOOK, ENTER_PLAY_HOOK, GameStateChangedEvent, SETUP_HOOK,
    observe_gamestate_change_event,
};
use dotlink::events::pointer::PointerClickEvent;
use dotlink::game;
use dotlink::resources::camera3d::ViewCamera;
use dotlink::resources::gameconfig::GameConfig;
use dotlink::resources::gamestate::{GameState, GameStates, NextGameState};
use dotlink::resources::input::InputState;
use dotlink::resources::pointer::PointerState;
use dotlink::resources::rng::GameRng;
use dotlink::resources::session::{Outcome, Session};
use dotlink::resources::systemsstore::SystemsStore;
use dotlink::resources::windowsize::WindowSize;
use dotlink::resources::worldtime::WorldTime;
use dotlink::systems::connect::pointer_click_observer;
use dotlink::systems::gamestate::{check_pending_state, outcome_timer_observer, restart_on_input};
use dotlink::systems::highlight::hover_highlight_system;
use dotlink::systems::time::{update_timers, update_world_time};
use dotlink::systems::tween::link_tween_system;

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// A world that has gone through `Setup` and entered `Playing`.
fn make_world(win_probability: f32) -> World {
    let mut config = GameConfig::new();
    config.win_probability = win_probability;

    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(WindowSize { w: 1280, h: 720 });
    world.insert_resource(config);
    world.insert_resource(InputState::default());
    world.insert_resource(PointerState::default());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_resource(Session::new());
    world.insert_resource(GameRng::with_seed(42));

    world.add_observer(observe_gamestate_change_event);
    let mut systems_store = SystemsStore::new();
    systems_store.insert(SETUP_HOOK, world.register_system(game::setup));
    systems_store.insert(ENTER_PLAY_HOOK, world.register_system(game::enter_play));
    systems_store.insert(ENTER_OUTCOME_HOOK, world.register_system(game::enter_outcome));
    world.insert_resource(systems_store);
    world.add_observer(pointer_click_observer);
    world.add_observer(outcome_timer_observer);
    world.flush();

    world.resource_mut::<NextGameState>().set(GameStates::Setup);
    world.trigger(GameStateChangedEvent {});
    world.flush();
    assert_eq!(state(&world), GameStates::Setup);

    step(&mut world, 0.0);
    assert_eq!(state(&world), GameStates::Playing);
    world
}

/// One frame of the gameplay schedule with `dt` seconds of world time.
fn step(world: &mut World, dt: f32) {
    update_world_time(world, dt);
    let mut schedule = Schedule::default();
    schedule.add_systems((
        restart_on_input,
        link_tween_system,
        update_timers,
        hover_highlight_system,
        check_pending_state
            .after(restart_on_input)
            .after(update_timers),
    ));
    schedule.run(world);
    world.flush();
}

fn state(world: &World) -> GameStates {
    world.resource::<GameState>().get().clone()
}

fn dot(world: &World, index: usize) -> Entity {
    world
        .resource::<Session>()
        .point(index)
        .expect("dot index in range")
}

fn click(world: &mut World, index: usize) {
    let entity = dot(world, index);
    world.trigger(PointerClickEvent { dot: Some(entity) });
    world.flush();
}

fn hud_text(world: &mut World, slot: HudSlot) -> String {
    let mut query = world.query::<(&HudSlot, &DynamicText)>();
    query
        .iter(world)
        .find(|(s, _)| **s == slot)
        .map(|(_, text)| text.content.clone())
        .expect("hud slot spawned")
}

fn link_count(world: &mut World) -> usize {
    world.query::<&Link>().iter(world).count()
}

fn timer_count(world: &mut World) -> usize {
    world.query::<&Timer>().iter(world).count()
}

#[test]
fn setup_spawns_dots_camera_and_hud() {
    let mut world = make_world(0.6);

    assert_eq!(world.resource::<Session>().points().len(), 5);
    assert!(world.contains_resource::<ViewCamera>());
    let view = *world.resource::<ViewCamera>();
    let config = world.resource::<GameConfig>();
    assert_eq!((view.near, view.far), (config.near, config.far));
    assert!(approx_eq(view.camera.position.z, config.camera_distance));

    let mut dots = world.query::<(&Dot, &WorldPosition, &Glow)>();
    for (dot, position, glow) in dots.iter(&world) {
        assert!(!dot.connected);
        assert!(position.pos.x.abs() <= 0.7 && position.pos.y.abs() <= 0.7);
        assert_eq!(position.pos.z, 0.0);
        assert_eq!(glow.color, DEFAULT_GLOW_COLOR);
    }
    assert_eq!(hud_text(&mut world, HudSlot::Progress), "0 Connections Made");
    assert_eq!(hud_text(&mut world, HudSlot::Overlay), "Connect the Dots!");
}

#[test]
fn path_through_every_dot_wins_and_resets_after_delay() {
    let mut world = make_world(1.0);

    click(&mut world, 0);
    assert_eq!(hud_text(&mut world, HudSlot::Progress), "0 Connections Made");
    for i in 1..5 {
        click(&mut world, i);
        assert_eq!(
            hud_text(&mut world, HudSlot::Progress),
            format!("{} Connections Made", i)
        );
    }
    assert_eq!(link_count(&mut world), 4);
    assert_eq!(world.resource::<Session>().outcome(), Outcome::Won);

    step(&mut world, 0.0);
    assert_eq!(state(&world), GameStates::Won);
    assert_eq!(hud_text(&mut world, HudSlot::Overlay), "You Won!");
    let mut glows = world.query_filtered::<&Glow, With<Dot>>();
    assert!(glows.iter(&world).all(|g| g.color == WIN_GLOW_COLOR));
    assert_eq!(timer_count(&mut world), 1);

    step(&mut world, 0.0);
    assert_eq!(state(&world), GameStates::Resolving);

    step(&mut world, 1.0);
    assert_eq!(state(&world), GameStates::Resolving);

    let generation = world.resource::<Session>().generation();
    for _ in 0..3 {
        step(&mut world, 1.0);
        if state(&world) == GameStates::Playing {
            break;
        }
    }
    assert_eq!(state(&world), GameStates::Playing);
    assert_eq!(world.resource::<Session>().generation(), generation + 1);
    assert_eq!(link_count(&mut world), 0);
    assert_eq!(timer_count(&mut world), 0);
    assert_eq!(hud_text(&mut world, HudSlot::Overlay), "Connect the Dots!");
    assert_eq!(hud_text(&mut world, HudSlot::Progress), "0 Connections Made");
    let mut glows = world.query_filtered::<&Glow, With<Dot>>();
    assert!(glows.iter(&world).all(|g| g.color == DEFAULT_GLOW_COLOR));
}

#[test]
fn loss_goes_straight_back_to_playing() {
    let mut world = make_world(0.0);
    for i in 0..5 {
        click(&mut world, i);
    }
    assert_eq!(world.resource::<Session>().outcome(), Outcome::Lost);

    step(&mut world, 0.0);
    assert_eq!(state(&world), GameStates::Lost);
    assert_eq!(hud_text(&mut world, HudSlot::Overlay), "Try Again!");
    assert_eq!(timer_count(&mut world), 0);

    step(&mut world, 0.0);
    assert_eq!(state(&world), GameStates::Playing);
    assert_eq!(world.resource::<Session>().outcome(), Outcome::Playing);
    assert_eq!(link_count(&mut world), 0);
    assert_eq!(hud_text(&mut world, HudSlot::Overlay), "Connect the Dots!");
}

#[test]
fn clicking_the_same_dot_twice_is_a_no_op() {
    let mut world = make_world(0.6);
    click(&mut world, 2);
    click(&mut world, 2);

    assert_eq!(link_count(&mut world), 0);
    assert_eq!(world.resource::<Session>().graph().connection_count(), 0);
    assert_eq!(hud_text(&mut world, HudSlot::Progress), "0 Connections Made");

    click(&mut world, 3);
    assert_eq!(link_count(&mut world), 1);
    assert_eq!(hud_text(&mut world, HudSlot::Progress), "1 Connections Made");
}

#[test]
fn targeted_dot_is_marked_connected() {
    let mut world = make_world(0.6);
    click(&mut world, 0);
    click(&mut world, 1);

    let first = dot(&world, 0);
    let second = dot(&world, 1);
    let third = dot(&world, 2);
    assert!(world.get::<Dot>(first).is_some_and(|d| d.connected));
    assert!(world.get::<Dot>(second).is_some_and(|d| d.connected));
    assert!(world.get::<Dot>(third).is_some_and(|d| !d.connected));
}

#[test]
fn missed_click_changes_nothing() {
    let mut world = make_world(0.6);
    click(&mut world, 0);
    world.trigger(PointerClickEvent { dot: None });
    world.flush();

    let session = world.resource::<Session>();
    assert_eq!(session.graph().last_selection(), Some(0));
    assert_eq!(session.graph().connection_count(), 0);
}

#[test]
fn outcome_is_drawn_once_per_round() {
    let mut world = make_world(1.0);
    for i in 0..5 {
        click(&mut world, i);
    }
    let generation = world.resource::<Session>().generation();

    // Still in Playing until the pending state is applied; extra clicks on
    // already targeted dots must not re-roll.
    click(&mut world, 1);
    click(&mut world, 3);
    assert_eq!(world.resource::<Session>().outcome(), Outcome::Won);
    assert_eq!(world.resource::<Session>().generation(), generation);

    step(&mut world, 0.0);
    assert_eq!(state(&world), GameStates::Won);
    click(&mut world, 0);
    assert_eq!(world.resource::<Session>().outcome(), Outcome::Won);
}

#[test]
fn clicks_are_ignored_while_resolving() {
    let mut world = make_world(1.0);
    for i in 0..5 {
        click(&mut world, i);
    }
    step(&mut world, 0.0);
    step(&mut world, 0.0);
    assert_eq!(state(&world), GameStates::Resolving);

    let targeted = world.resource::<Session>().graph().targeted().len();
    click(&mut world, 2);
    assert_eq!(world.resource::<Session>().graph().targeted().len(), targeted);
    assert_eq!(link_count(&mut world), 4);
}

#[test]
fn link_tip_grows_to_the_target() {
    let mut world = make_world(0.6);
    click(&mut world, 0);
    click(&mut world, 1);

    let end = world
        .get::<WorldPosition>(dot(&world, 1))
        .map(|p| p.pos)
        .expect("dot position");
    let (link_entity, progress) = {
        let mut query = world.query::<(Entity, &LinkTween)>();
        let (entity, tween) = query.single(&world).expect("one tween");
        (entity, tween.progress)
    };
    assert!(approx_eq(progress, 0.05));

    for _ in 0..25 {
        step(&mut world, 0.0);
    }
    assert!(world.get::<LinkTween>(link_entity).is_none());
    let link = world.get::<Link>(link_entity).expect("link survives");
    assert!(approx_eq(link.tip.x, end.x));
    assert!(approx_eq(link.tip.y, end.y));
}

#[test]
fn restart_cancels_links_and_pending_timer() {
    let mut world = make_world(1.0);
    for i in 0..5 {
        click(&mut world, i);
    }
    step(&mut world, 0.0);
    step(&mut world, 0.0);
    assert_eq!(state(&world), GameStates::Resolving);
    assert_eq!(timer_count(&mut world), 1);

    world.resource_mut::<InputState>().restart.just_pressed = true;
    step(&mut world, 0.0);
    world.resource_mut::<InputState>().restart.just_pressed = false;

    assert_eq!(state(&world), GameStates::Playing);
    assert_eq!(timer_count(&mut world), 0);
    assert_eq!(link_count(&mut world), 0);

    // Nothing left to fire: the new round stays in Playing.
    for _ in 0..5 {
        step(&mut world, 1.0);
    }
    assert_eq!(state(&world), GameStates::Playing);
}

#[test]
fn stale_tween_is_despawned() {
    let mut world = make_world(0.6);
    let from = dot(&world, 0);
    let to = dot(&world, 1);
    let stale_generation = world.resource::<Session>().generation().wrapping_sub(1);
    let zero = raylib::prelude::Vector3 { x: 0.0, y: 0.0, z: 0.0 };
    let stale = world
        .spawn((
            Link::new(from, to, zero, zero),
            LinkTween::new(0.05, stale_generation),
        ))
        .id();

    step(&mut world, 0.0);
    assert!(world.get_entity(stale).is_err());
}

#[test]
fn stale_timer_does_not_end_the_round() {
    let mut world = make_world(0.6);
    let stale_generation = world.resource::<Session>().generation().wrapping_sub(1);
    world.resource_mut::<GameState>().set(GameStates::Resolving);
    world.spawn(Timer::new(0.5, stale_generation));

    step(&mut world, 1.0);
    step(&mut world, 1.0);
    assert_eq!(timer_count(&mut world), 0);
    assert_eq!(state(&world), GameStates::Resolving);
}

#[test]
fn hover_highlights_exactly_one_dot() {
    let mut world = make_world(0.6);
    let hovered = dot(&world, 3);
    world.resource_mut::<PointerState>().hovered = Some(hovered);
    step(&mut world, 0.0);

    let mut glows = world.query::<(Entity, &Glow)>();
    for (entity, glow) in glows.iter(&world) {
        if entity == hovered {
            assert_eq!(glow.intensity, HIGHLIGHT_INTENSITY);
        } else {
            assert_eq!(glow.intensity, BASE_INTENSITY);
        }
    }

    world.resource_mut::<PointerState>().hovered = None;
    step(&mut world, 0.0);
    let mut glows = world.query::<&Glow>();
    assert!(glows.iter(&world).all(|g| g.intensity == BASE_INTENSITY));
}
