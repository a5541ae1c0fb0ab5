//! Dotlink main entry point.
//!
//! A small connect-the-dots game written in Rust using:
//! - **raylib** for windowing, 3D drawing and input
//! - **bevy_ecs** for entity-component-system architecture
//!
//! A handful of dots is scattered on a plane in front of a perspective camera.
//! Clicking one dot and then another draws a line between them; once every
//! dot has been connected a single weighted coin flip decides whether the
//! round is won. A new round then starts on the same dots.
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (dots, links, tweens, HUD text, timers)
//! - [`events`] – Event types (state changes, clicks, timers, debug toggle)
//! - [`game`] – State enter hooks: scene setup, round reset, outcome
//! - [`resources`] – ECS resources (session, config, camera, input, etc.)
//! - [`systems`] – ECS systems (input, picking, tweens, rendering, etc.)
//!
//! # Main Loop
//!
//! 1. Parse the command line, load `config.ini`
//! 2. Initialize the raylib window and the ECS world
//! 3. Register state hooks and observers, enter `Setup`
//! 4. Run the main loop:
//!    - Read keyboard and pointer, pick dots, apply clicks
//!    - Advance link tweens and outcome timers
//!    - Apply pending state transitions
//!    - Render dots, links and HUD
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --seed 42
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod pointset;
mod resources;
mod systems;

use crate::events::gamestate::{
    ENTER_OUTCOME_HOOK, ENTER_PLAY_HOOK, GameStateChangedEvent, SETUP_HOOK,
    observe_gamestate_change_event,
};
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::pointer::PointerState;
use crate::resources::rng::GameRng;
use crate::resources::session::Session;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::windowsize::WindowSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::connect::pointer_click_observer;
use crate::systems::gameconfig::apply_gameconfig_changes;
use crate::systems::gamestate::{check_pending_state, outcome_timer_observer, restart_on_input};
use crate::systems::highlight::hover_highlight_system;
use crate::systems::input::update_input_state;
use crate::systems::pointer::update_pointer_state;
use crate::systems::render::render_system;
use crate::systems::time::{update_timers, update_world_time};
use crate::systems::tween::link_tween_system;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;

/// Connect the dots, then hope for the best.
#[derive(Parser)]
#[command(version, about = "Connect every dot to roll for a win.")]
struct Cli {
    /// Configuration file to load (and to write with --write-config).
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Seed for dot placement and the outcome roll.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Number of dots, overriding the config file.
    #[arg(long, value_name = "N")]
    dots: Option<usize>,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if let Some(dots) = cli.dots {
        config.dot_count = dots;
        config.sanitize();
    }

    // Early-exit: write the configuration and quit (no window needed)
    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Configuration written to {}", config.config_path.display());
        return;
    }

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let (rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Dotlink")
        .build();

    // --------------- ECS world ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(config);
    world.insert_resource(InputState::default());
    world.insert_resource(PointerState::default());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_resource(Session::new());
    world.insert_resource(match cli.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            GameRng::with_seed(seed)
        }
        None => GameRng::new(),
    });
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.add_observer(observe_gamestate_change_event);

    // Game state enter hooks
    let mut systems_store = SystemsStore::new();
    systems_store.insert(SETUP_HOOK, world.register_system(game::setup));
    systems_store.insert(ENTER_PLAY_HOOK, world.register_system(game::enter_play));
    systems_store.insert(ENTER_OUTCOME_HOOK, world.register_system(game::enter_outcome));
    world.insert_resource(systems_store);

    world.add_observer(pointer_click_observer);
    world.add_observer(outcome_timer_observer);
    world.add_observer(switch_debug_observer);
    // Ensure the observers are registered before we run any systems that may trigger events.
    world.flush();

    // Set next GameState to Setup
    {
        let mut next_state = world.resource_mut::<NextGameState>();
        next_state.set(GameStates::Setup);
    }
    world.trigger(GameStateChangedEvent {}); // Call immediately to enter Setup state
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(apply_gameconfig_changes);
    update.add_systems(update_input_state);
    update.add_systems(restart_on_input.after(update_input_state));
    update.add_systems(update_pointer_state);
    update.add_systems(hover_highlight_system.after(update_pointer_state));
    update.add_systems(link_tween_system.after(update_pointer_state));
    update.add_systems(update_timers);
    update.add_systems(
        check_pending_state
            .after(restart_on_input)
            .after(update_pointer_state)
            .after(update_timers),
    );
    update.add_systems(
        render_system
            .after(check_pending_state)
            .after(hover_highlight_system)
            .after(link_tween_system),
    );

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        // Update window size when it changes (may change due to resize)
        let new_size = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            WindowSize {
                w: rl.get_screen_width(),
                h: rl.get_screen_height(),
            }
        };
        if *world.resource::<WindowSize>() != new_size {
            info!("Window resized to {}x{}", new_size.w, new_size.h);
            world.insert_resource(new_size);
        }
    }
}
